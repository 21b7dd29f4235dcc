#![cfg(test)]
use flowtally_common::flow::{PortProtocol, TagBucket};
use flowtally_core::analyzer::{self, Analysis};
use flowtally_core::lookup::LookupTable;
use flowtally_core::{flow_log, report};

use crate::utils::{Fixture, record};

fn pair(port: &str, protocol: &str) -> PortProtocol {
    PortProtocol::new(port, protocol)
}

#[test]
fn lookup_table_loads_exact_rules() {
    let fixture = Fixture::new().with_lookup_table("dstport,protocol,tag\n80,tcp,web\n443,tcp,secure-web\n");

    let table: LookupTable = LookupTable::load(&fixture.lookup_table);
    let rules: Vec<(String, &str)> = table.iter().map(|(k, t)| (k.to_string(), t)).collect();

    assert_eq!(
        rules,
        vec![
            ("80,tcp".to_string(), "web"),
            ("443,tcp".to_string(), "secure-web")
        ]
    );
}

#[test]
fn flow_log_counts_pairs() {
    let fixture = Fixture::new().with_flow_log(&[
        "2 123456789012 eni-0a1b2c3d 10.0.1.201 198.51.100.2 443 80 6 25 20000 1620140761 1620140821 ACCEPT OK".to_string(),
        "2 123456789012 eni-4d3c2b1a 192.168.1.100 203.0.113.101 23 49154 17 15 12000 1620140761 1620140821 REJECT OK".to_string(),
        "2 123456789012 eni-4d3c2b1a 192.168.1.100 203.0.113.101 23 49154 17 15 12000 1620140761 1620140821 ACCEPT OK".to_string(),
    ]);

    let counts = flow_log::parse(&fixture.flow_log);

    assert_eq!(counts.len(), 2);
    assert_eq!(counts.get(&pair("80", "tcp")), Some(1));
    assert_eq!(counts.get(&pair("49154", "udp")), Some(2));
}

#[test]
fn full_run_writes_expected_report() {
    let fixture = Fixture::new()
        .with_lookup_table("dstport,protocol,tag\n80,tcp,web\n443,tcp,secure-web\n")
        .with_flow_log(&[record("80", "6"), record("443", "6"), record("22", "6")]);

    let analysis: Analysis = analyzer::analyze(&fixture.config());

    assert_eq!(analysis.report.as_deref(), Some(fixture.output.as_path()));
    assert_eq!(
        fixture.report(),
        "Tag Counts:\nTag,Count\nweb,1\nsecure-web,1\nUntagged,1\n\
         Port/Protocol Combination Counts:\nPort,Protocol,Count\n80,tcp,1\n443,tcp,1\n22,tcp,1"
    );
}

#[test]
fn empty_flow_log_gives_empty_sections() {
    let fixture = Fixture::new()
        .with_lookup_table("dstport,protocol,tag\n80,tcp,web\n")
        .with_flow_log(&[]);

    let analysis: Analysis = analyzer::analyze(&fixture.config());

    assert!(analysis.pairs.is_empty());
    assert!(analysis.tags.is_empty());
    assert_eq!(
        fixture.report(),
        "Tag Counts:\nTag,Count\nPort/Protocol Combination Counts:\nPort,Protocol,Count"
    );
}

#[test]
fn missing_lookup_table_tags_nothing() {
    let fixture = Fixture::new().with_flow_log(&[record("80", "6"), record("53", "17"), record("80", "6")]);

    let analysis: Analysis = analyzer::analyze(&fixture.config());

    assert!(analysis.rules.is_empty());
    assert_eq!(analysis.tags.len(), 1);
    assert_eq!(analysis.tags.get(&TagBucket::Untagged), Some(3));
    assert_eq!(
        fixture.report(),
        "Tag Counts:\nTag,Count\nUntagged,3\n\
         Port/Protocol Combination Counts:\nPort,Protocol,Count\n80,tcp,2\n53,udp,1"
    );
}

#[test]
fn missing_flow_log_still_writes_report() {
    let fixture = Fixture::new().with_lookup_table("dstport,protocol,tag\n80,tcp,web\n");

    let analysis: Analysis = analyzer::analyze(&fixture.config());

    assert_eq!(analysis.rules.len(), 1);
    assert!(analysis.pairs.is_empty());
    assert!(analysis.report.is_some());
}

#[test]
fn duplicate_rules_keep_first_tag() {
    let fixture = Fixture::new()
        .with_lookup_table("dstport,protocol,tag\n25,tcp,sv_P1\n25,TCP,email\n23,tcp,sv_P2\n")
        .with_flow_log(&[record("25", "6"), record("23", "6")]);

    let analysis: Analysis = analyzer::analyze(&fixture.config());

    assert_eq!(analysis.rules.len(), 2);
    assert_eq!(
        analysis.tags.get(&TagBucket::Tagged("sv_P1".to_string())),
        Some(1)
    );
    assert_eq!(analysis.tags.get(&TagBucket::Tagged("email".to_string())), None);
}

#[test]
fn ragged_lookup_rows_still_tag() {
    let fixture = Fixture::new()
        .with_lookup_table("dstport,protocol,tag\n80,tcp,web,\n443,tcp\n22,tcp,ssh\n")
        .with_flow_log(&[record("80", "6"), record("443", "6"), record("22", "6")]);

    let analysis: Analysis = analyzer::analyze(&fixture.config());

    assert_eq!(analysis.rules.len(), 3);
    assert_eq!(analysis.records_tagged(), 2);
    assert_eq!(analysis.tags.get(&TagBucket::Untagged), Some(1));
}

#[test]
fn undecodable_lookup_table_keeps_leading_rules() {
    let fixture = Fixture::new()
        .with_lookup_bytes(b"dstport,protocol,tag\n80,tcp,web\n443,\xfftcp,x\n22,tcp,ssh\n")
        .with_flow_log(&[record("80", "6"), record("22", "6")]);

    let analysis: Analysis = analyzer::analyze(&fixture.config());

    assert_eq!(analysis.rules.len(), 1);
    assert_eq!(analysis.records_tagged(), 1);
    assert_eq!(analysis.tags.get(&TagBucket::Untagged), Some(1));
}

#[test]
fn empty_lookup_file_tags_nothing() {
    let fixture = Fixture::new()
        .with_lookup_table("")
        .with_flow_log(&[record("80", "6")]);

    let analysis: Analysis = analyzer::analyze(&fixture.config());

    assert!(analysis.rules.is_empty());
    assert_eq!(analysis.tags.get(&TagBucket::Untagged), Some(1));
}

#[test]
fn lookup_protocol_names_match_resolved_numbers() {
    let fixture = Fixture::new()
        .with_lookup_table("dstport,protocol,tag\n0,ICMP,ping\n4500,esp,vpn\n9,unknown,odd\n")
        .with_flow_log(&[record("0", "1"), record("4500", "50"), record("9", "200")]);

    let analysis: Analysis = analyzer::analyze(&fixture.config());

    assert_eq!(analysis.tags.get(&TagBucket::Tagged("ping".into())), Some(1));
    assert_eq!(analysis.tags.get(&TagBucket::Tagged("vpn".into())), Some(1));
    assert_eq!(analysis.tags.get(&TagBucket::Tagged("odd".into())), Some(1));
    assert_eq!(analysis.tags.get(&TagBucket::Untagged), None);
}

#[test]
fn malformed_flow_lines_are_skipped() {
    let fixture = Fixture::new().with_flow_log(&[
        record("80", "6"),
        "2 123456789012 eni-0a1b2c3d SKIPDATA".to_string(),
        record("80", "tcp"),
        String::new(),
        record("-", "6"),
    ]);

    let analysis: Analysis = analyzer::analyze(&fixture.config());

    assert_eq!(analysis.records_counted(), 2);
    assert_eq!(analysis.pairs.get(&pair("80", "tcp")), Some(1));
    assert_eq!(analysis.pairs.get(&pair("-", "tcp")), Some(1));
}

#[test]
fn unwritable_output_is_not_fatal() {
    let fixture = Fixture::new().with_flow_log(&[record("80", "6")]);
    let cfg = fixture.config().with_output(fixture.output.join("nested/output.txt"));

    let analysis: Analysis = analyzer::analyze(&cfg);

    assert!(analysis.report.is_none());
    assert_eq!(analysis.records_counted(), 1);
}

#[test]
fn tag_totals_match_pair_totals() {
    let ports = ["25", "68", "23", "31", "443", "22", "3389", "0", "110", "993"];
    let protocols = ["6", "17", "1", "47", "132", "200"];
    let lines: Vec<String> = (0..300)
        .map(|n| record(ports[n % ports.len()], protocols[(n * 7) % protocols.len()]))
        .collect();
    let fixture = Fixture::new()
        .with_lookup_table(
            "dstport,protocol,tag\n25,tcp,sv_P1\n68,udp,sv_P2\n23,tcp,sv_P1\n31,udp,SV_P3\n\
             443,tcp,sv_P2\n22,tcp,sv_P4\n3389,tcp,sv_P5\n0,icmp,sv_P5\n110,tcp,email\n993,tcp,email\n",
        )
        .with_flow_log(&lines);

    let analysis: Analysis = analyzer::analyze(&fixture.config());

    assert_eq!(analysis.records_counted(), 300);
    assert_eq!(analysis.tags.total(), analysis.pairs.total());
}

#[test]
fn report_is_deterministic() {
    let fixture = Fixture::new()
        .with_lookup_table("dstport,protocol,tag\n443,tcp,secure-web\n")
        .with_flow_log(&[record("443", "6"), record("53", "17"), record("443", "6")]);

    let first: Analysis = analyzer::analyze(&fixture.config());
    let first_report: String = fixture.report();
    let second: Analysis = analyzer::analyze(&fixture.config());

    assert_eq!(first_report, fixture.report());
    assert_eq!(
        report::render(&first.pairs, &first.tags),
        report::render(&second.pairs, &second.tags)
    );
}
