//! IP protocol numbers.
//!
//! [`resolve`] turns the protocol number carried by a flow record into the
//! lowercase IANA keyword (`6` -> `tcp`), or [`Protocol::Unknown`].

pub mod iana;
pub mod resolver;

pub use resolver::{InvalidProtocolNumber, Protocol, resolve, resolve_token};
