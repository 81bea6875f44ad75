use crate::cli::FramesArgs;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use ikra::workflows::progress::ProgressReporter;
use ikra::workflows::trajectory;
use std::fs::File;
use std::io::{self, BufWriter};
use tracing::info;

pub fn run(args: FramesArgs) -> Result<()> {
    if let Some(index) = args.extract {
        let output = args.output.as_ref().ok_or_else(|| {
            CliError::Argument("--extract requires --output".to_string())
        })?;
        info!("Extracting frame {} from {:?}", index, &args.input);
        let frame = trajectory::extract_frame_path(&args.input, index)?;
        trajectory::write_single_frame(&frame, output)?;
        println!(
            "✓ Frame {} ({} atom(s)) written to: {}",
            index,
            frame.atoms.len(),
            output.display()
        );
        return Ok(());
    }

    let summaries = match &args.summary {
        Some(_) => {
            let progress_handler = CliProgressHandler::new();
            let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
            trajectory::summarize_path(&args.input, &reporter)?
        }
        // Stdout carries the CSV; keep the bar off it.
        None => trajectory::summarize_path(&args.input, &ProgressReporter::new())?,
    };

    match &args.summary {
        Some(path) => {
            let file = File::create(path)?;
            trajectory::write_summary_csv(&summaries, BufWriter::new(file))?;
            println!(
                "✓ Summary of {} frame(s) written to: {}",
                summaries.len(),
                path.display()
            );
        }
        None => trajectory::write_summary_csv(&summaries, io::stdout().lock())?,
    }
    Ok(())
}
