use anyhow::Result;
use tracing::{info, warn};

use crate::cli::GenerateArgs;
use crate::output::write_statements;
use crate::pipeline::analyze_input;

pub fn run(args: GenerateArgs) -> Result<()> {
    info!(
        input = %args.analysis.input.display(),
        similarity_limit = args.analysis.similarity_limit,
        key_policy = args.analysis.key_policy().as_str(),
        "starting generate"
    );

    let analysis = analyze_input(&args.analysis)?;
    let statements = analysis.statements();

    if analysis.registry.is_empty() {
        warn!(input = %args.analysis.input.display(), "input contained no technology names");
    }

    info!(
        lines = analysis.registry.lines_read(),
        records = analysis.registry.len(),
        duplicates = analysis.registry.duplicate_count(),
        similar_pairs = analysis.similar_pairs.len(),
        "analysis complete"
    );

    if args.dry_run {
        info!(
            statements = statements.len(),
            output = %args.output.display(),
            "generate dry-run complete"
        );
        return Ok(());
    }

    write_statements(&args.output, &statements, !args.quiet)?;
    info!("generate completed");

    Ok(())
}
