#[cfg(test)]
mod analysis;
#[cfg(test)]
mod utils;
