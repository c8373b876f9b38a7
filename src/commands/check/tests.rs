use std::path::PathBuf;

use super::*;
use crate::pipeline::analyze_lines;
use crate::registry::KeyPolicy;

fn check(raw: &str) -> CheckReport {
    check_statements(&PathBuf::from("insert-technologies.sql"), raw)
        .expect("check should run")
}

#[test]
fn generated_statements_load_cleanly() {
    let analysis = analyze_lines(
        ["Java", "java", "Pythn", "Python", "C++"],
        2,
        KeyPolicy::Verbatim,
    );
    let raw = analysis.statements().join("\n");

    let report = check(&raw);
    assert!(report.is_clean());
    assert_eq!(report.counts.statement_count, 4);
    assert_eq!(report.counts.inserted_count, 4);
    assert_eq!(report.counts.review_flagged_count, 3);
}

#[test]
fn apostrophe_in_name_is_rejected() {
    let raw = "insert into technology (name) values ('Dart's');\n";

    let report = check(raw);
    assert!(!report.is_clean());
    assert_eq!(report.counts.failed_count, 1);
    assert_eq!(report.failures[0].line_number, 1);
}

#[test]
fn unrelated_lines_are_malformed() {
    let raw = "select 1;\n\ninsert into technology (name) values ('Go');\n";

    let report = check(raw);
    assert_eq!(report.counts.statement_count, 2);
    assert_eq!(report.counts.malformed_count, 1);
    assert_eq!(report.counts.inserted_count, 1);
    assert_eq!(report.failures[0].line_number, 1);
}
