use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Ikra Developers",
    version,
    about = "Ikra CLI - Regenerate MDL structure files from condition files and inspect XYZ trajectories.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output; errors are still printed on exit
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write one structure file per condition file, keeping the base structure's atoms.
    Regen(RegenArgs),
    /// Summarize the frames of a trajectory or extract a single frame.
    Frames(FramesArgs),
    /// Decode a structure file and print a summary of its contents.
    Check(CheckArgs),
}

/// Arguments for the `regen` subcommand.
#[derive(Args, Debug)]
pub struct RegenArgs {
    /// Batch file in TOML format listing the base structure and the condition files.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base structure file; overrides `structure` from the batch file.
    #[arg(short, long, value_name = "PATH")]
    pub structure: Option<PathBuf>,

    /// Directory for regenerated structures; overrides `output-dir` from the batch file.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Fail when the base structure's atom records disagree with its declared count.
    #[arg(long)]
    pub strict: bool,

    /// Condition files to apply, in addition to the jobs of the batch file.
    #[arg(value_name = "CONDITION")]
    pub conditions: Vec<PathBuf>,
}

/// Arguments for the `frames` subcommand.
#[derive(Args, Debug)]
pub struct FramesArgs {
    /// Trajectory file to read.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Write the per-frame summary as CSV to this file instead of standard output.
    #[arg(short, long, value_name = "PATH", conflicts_with = "extract")]
    pub summary: Option<PathBuf>,

    /// Extract the frame with this zero-based index.
    #[arg(short, long, value_name = "INDEX", requires = "output")]
    pub extract: Option<usize>,

    /// Destination of the extracted frame.
    #[arg(short, long, value_name = "PATH", requires = "extract")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Structure file to decode.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Fail when the atom records disagree with the declared atom count.
    #[arg(long)]
    pub strict: bool,
}
