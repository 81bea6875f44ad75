use crate::cli::RegenArgs;
use crate::config::PartialRegenConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use ikra::workflows::{self, progress::ProgressReporter, regenerate::RegenOutcome};
use std::fs;
use tracing::info;

pub fn run(args: RegenArgs) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialRegenConfig::from_file(path)?,
        None => PartialRegenConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    for job in &config.jobs {
        if let Some(dir) = job.output_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(CliError::Io)?;
        }
    }

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Regenerating {} structure(s) from {}...",
        config.jobs.len(),
        config.structure_path.display()
    );
    let outcomes = workflows::regenerate::run(&config, &reporter)?;
    print_outcomes(&outcomes);
    Ok(())
}

fn print_outcomes(outcomes: &[RegenOutcome]) {
    for outcome in outcomes {
        println!(
            "  {} -> {} ({}, {} atom(s))",
            outcome.condition_path.display(),
            outcome.output_path.display(),
            outcome.potential_type,
            outcome.atom_count
        );
    }
    println!("✓ Wrote {} structure file(s).", outcomes.len());
}
