use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::registry::KeyPolicy;
use crate::similarity::DEFAULT_SIMILARITY_LIMIT;

pub const DEFAULT_OUTPUT_PATH: &str = "build/insert-technologies.sql";

#[derive(Parser, Debug)]
#[command(
    name = "techsql",
    version,
    about = "Turn a list of technology names into reviewed SQL insert statements"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Generate(GenerateArgs),
    Report(ReportArgs),
    Check(CheckArgs),
}

#[derive(Args, Debug, Clone)]
pub struct AnalysisArgs {
    /// Text file with one technology name per line
    pub input: PathBuf,

    /// Maximum positional distance for two names to be flagged as similar
    #[arg(long, default_value_t = DEFAULT_SIMILARITY_LIMIT, allow_negative_numbers = true)]
    pub similarity_limit: i64,

    /// Strip surrounding whitespace from each line before deduplication
    #[arg(long, default_value_t = false)]
    pub trim: bool,
}

impl AnalysisArgs {
    pub fn key_policy(&self) -> KeyPolicy {
        if self.trim {
            KeyPolicy::Trim
        } else {
            KeyPolicy::Verbatim
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub analysis: AnalysisArgs,

    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Do not echo statements to stdout
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub analysis: AnalysisArgs,

    #[arg(long)]
    pub report_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Previously generated SQL file
    pub sql_file: PathBuf,
}
