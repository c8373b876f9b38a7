use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use regex::Regex;
use rusqlite::Connection;
use tracing::{info, warn};

use crate::cli::CheckArgs;
use crate::model::{CheckCounts, CheckReport, StatementFailure};

const STATEMENT_PATTERN: &str = r"^(insert into technology \(name\) values \('.*'\);)(.*)$";

pub fn run(args: CheckArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.sql_file)
        .with_context(|| format!("failed to read {}", args.sql_file.display()))?;
    let report = check_statements(&args.sql_file, &raw)?;

    for failure in &report.failures {
        warn!(
            line_number = failure.line_number,
            line = %failure.line,
            reason = %failure.reason,
            "statement rejected"
        );
    }

    info!(
        path = %report.sql_path,
        statements = report.counts.statement_count,
        inserted = report.counts.inserted_count,
        failed = report.counts.failed_count,
        malformed = report.counts.malformed_count,
        review_flagged = report.counts.review_flagged_count,
        "check complete"
    );

    if !report.is_clean() {
        bail!(
            "{} of {} statements in {} could not be loaded",
            report.counts.failed_count + report.counts.malformed_count,
            report.counts.statement_count,
            args.sql_file.display()
        );
    }

    Ok(())
}

pub fn check_statements(sql_path: &Path, raw: &str) -> Result<CheckReport> {
    let pattern = Regex::new(STATEMENT_PATTERN).context("failed to compile statement regex")?;
    let connection =
        Connection::open_in_memory().context("failed to open in-memory check database")?;
    connection
        .execute_batch("CREATE TABLE technology (name TEXT NOT NULL);")
        .context("failed to create technology table")?;

    let mut counts = CheckCounts::default();
    let mut failures = Vec::new();

    for (index, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        counts.statement_count += 1;
        let line_number = index + 1;

        let Some(captures) = pattern.captures(line) else {
            counts.malformed_count += 1;
            failures.push(StatementFailure {
                line_number,
                line: line.to_string(),
                reason: "line does not look like a technology insert".to_string(),
            });
            continue;
        };

        let comment = captures.get(2).map(|m| m.as_str()).unwrap_or_default();
        if !comment.trim().is_empty() {
            counts.review_flagged_count += 1;
        }

        let statement = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
        match connection.execute(statement, []) {
            Ok(1) => counts.inserted_count += 1,
            Ok(changed) => {
                counts.failed_count += 1;
                failures.push(StatementFailure {
                    line_number,
                    line: line.to_string(),
                    reason: format!("statement changed {changed} rows"),
                });
            }
            Err(err) => {
                counts.failed_count += 1;
                failures.push(StatementFailure {
                    line_number,
                    line: line.to_string(),
                    reason: err.to_string(),
                });
            }
        }
    }

    Ok(CheckReport {
        sql_path: sql_path.display().to_string(),
        counts,
        failures,
    })
}

#[cfg(test)]
mod tests;
