use anyhow::Result;
use tracing::info;

use crate::cli::{AnalysisArgs, ReportArgs};
use crate::model::{AnalysisReport, ReportCounts, ReportRecord};
use crate::pipeline::{Analysis, analyze_input};
use crate::statement::render;
use crate::util::{now_utc_string, print_json_pretty, sha256_file, write_json_pretty};

const REPORT_VERSION: u32 = 1;

pub fn run(args: ReportArgs) -> Result<()> {
    let analysis = analyze_input(&args.analysis)?;
    let input_sha256 = sha256_file(&args.analysis.input)?;
    let report = build_report(&args.analysis, &analysis, input_sha256);

    match &args.report_path {
        Some(path) => {
            write_json_pretty(path, &report)?;
            info!(path = %path.display(), "wrote analysis report");
        }
        None => print_json_pretty(&report)?,
    }

    info!(
        records = report.counts.record_count,
        similar_pairs = report.counts.similar_pair_count,
        "report completed"
    );
    Ok(())
}

pub fn build_report(
    args: &AnalysisArgs,
    analysis: &Analysis,
    input_sha256: String,
) -> AnalysisReport {
    let registry = &analysis.registry;
    let records = registry
        .records()
        .map(|record| ReportRecord::from_record(record, render(record)))
        .collect();

    AnalysisReport {
        report_version: REPORT_VERSION,
        generated_at: now_utc_string(),
        input_path: args.input.display().to_string(),
        input_sha256,
        similarity_limit: args.similarity_limit,
        key_policy: registry.policy(),
        counts: ReportCounts {
            lines_read: registry.lines_read(),
            record_count: registry.len(),
            duplicate_record_count: registry.duplicate_count(),
            similar_pair_count: analysis.similar_pairs.len(),
        },
        similar_pairs: analysis.similar_pairs.clone(),
        records,
    }
}
