use serde::Serialize;

use crate::registry::{KeyPolicy, TechnologyRecord};
use crate::similarity::SimilarPair;

#[derive(Debug, Clone, Serialize)]
pub struct ReportCounts {
    pub lines_read: usize,
    pub record_count: usize,
    pub duplicate_record_count: usize,
    pub similar_pair_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportRecord {
    pub key: String,
    pub name: String,
    pub multiple_occurrences: bool,
    pub similar_names: Vec<String>,
    pub statement: String,
}

impl ReportRecord {
    pub fn from_record(record: &TechnologyRecord, statement: String) -> Self {
        Self {
            key: record.normalized_key().to_string(),
            name: record.original_name().to_string(),
            multiple_occurrences: record.has_multiple_occurrences(),
            similar_names: record.similar_names().iter().cloned().collect(),
            statement,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub report_version: u32,
    pub generated_at: String,
    pub input_path: String,
    pub input_sha256: String,
    pub similarity_limit: i64,
    pub key_policy: KeyPolicy,
    pub counts: ReportCounts,
    pub similar_pairs: Vec<SimilarPair>,
    pub records: Vec<ReportRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckCounts {
    pub statement_count: usize,
    pub inserted_count: usize,
    pub failed_count: usize,
    pub malformed_count: usize,
    pub review_flagged_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatementFailure {
    pub line_number: usize,
    pub line: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub sql_path: String,
    pub counts: CheckCounts,
    pub failures: Vec<StatementFailure>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.counts.failed_count == 0 && self.counts.malformed_count == 0
    }
}
