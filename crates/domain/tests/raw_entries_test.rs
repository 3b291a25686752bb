use dnsfilter_domain::{
    config_value_to_raw, entries_to_raw, parse_raw_entries, raw_to_config_value, DnsServerEntry,
    DomainError,
};

fn entries(lines: &[&str]) -> Vec<DnsServerEntry> {
    lines.iter().map(|l| l.parse().unwrap()).collect()
}

#[test]
fn test_parse_skips_blank_lines() {
    let parsed = parse_raw_entries("8.8.8.8\n\n   \n1.1.1.1\n", "\n").unwrap();
    assert_eq!(parsed, entries(&["8.8.8.8", "1.1.1.1"]));
}

#[test]
fn test_parse_accepts_crlf_text() {
    let parsed = parse_raw_entries("8.8.8.8\r\n1.1.1.1\r\n", "\n").unwrap();
    assert_eq!(parsed.len(), 2);
}

#[test]
fn test_parse_honours_custom_separator() {
    let parsed = parse_raw_entries("8.8.8.8|1.1.1.1|", "|").unwrap();
    assert_eq!(parsed, entries(&["8.8.8.8", "1.1.1.1"]));
}

#[test]
fn test_parse_failure_reports_line_number() {
    let err = parse_raw_entries("8.8.8.8\n\nnot-an-ip\n1.1.1.1", "\n").unwrap_err();
    match err {
        DomainError::InvalidRawEntry { line, entry, .. } => {
            assert_eq!(line, 3);
            assert_eq!(entry, "not-an-ip");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_parse_empty_text_is_empty_list() {
    assert!(parse_raw_entries("", "\n").unwrap().is_empty());
}

#[test]
fn test_entries_to_raw_terminates_every_line() {
    let list = entries(&["8.8.8.8", "1.1.1.1::853::DOT"]);
    assert_eq!(entries_to_raw(&list, "\n"), "8.8.8.8\n1.1.1.1::853::DOT\n");
}

#[test]
fn test_round_trip_through_raw_text() {
    let list = entries(&[
        "8.8.8.8",
        "~[2001:4860:4860::8888]",
        "1.1.1.1::853::DOT::cloudflare-dns.com",
        "1.0.0.1::443::DOH::https://cloudflare-dns.com/dns-query",
    ]);
    let raw = entries_to_raw(&list, "\n");
    assert_eq!(parse_raw_entries(&raw, "\n").unwrap(), list);
}

#[test]
fn test_config_value_has_no_trailing_separator() {
    assert_eq!(raw_to_config_value("8.8.8.8\n1.1.1.1\n"), "8.8.8.8; 1.1.1.1");
}

#[test]
fn test_config_value_trims_and_skips_empty_lines() {
    assert_eq!(
        raw_to_config_value("  8.8.8.8 \r\n\n\n 1.1.1.1"),
        "8.8.8.8; 1.1.1.1"
    );
    assert_eq!(raw_to_config_value("\n \n"), "");
}

#[test]
fn test_config_value_to_raw_splits_on_semicolons() {
    assert_eq!(
        config_value_to_raw("8.8.8.8; 1.1.1.1;;  9.9.9.9 ;", "\n"),
        "8.8.8.8\n1.1.1.1\n9.9.9.9"
    );
    assert_eq!(config_value_to_raw("", "\n"), "");
}
