use crate::cli::RegenArgs;
use crate::error::{CliError, Result};
use ikra::workflows::regenerate::{RegenConfig, RegenJob, output_path_for};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
struct PartialJob {
    condition: PathBuf,
    output: Option<PathBuf>,
}

/// A `regen` batch file as written by the user; every key is optional so that command-line
/// arguments can fill the gaps.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialRegenConfig {
    structure: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    strict_atom_count: Option<bool>,
    #[serde(default)]
    jobs: Vec<PartialJob>,
}

impl PartialRegenConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut partial: Self = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        partial.resolve_relative_to(path.parent().unwrap_or(Path::new("")));
        Ok(partial)
    }

    /// Paths in a batch file are relative to the file itself.
    fn resolve_relative_to(&mut self, base: &Path) {
        let join = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        if let Some(p) = self.structure.as_mut() {
            join(p);
        }
        if let Some(p) = self.output_dir.as_mut() {
            join(p);
        }
        for job in &mut self.jobs {
            join(&mut job.condition);
            if let Some(p) = job.output.as_mut() {
                join(p);
            }
        }
    }

    pub fn merge_with_cli(self, args: &RegenArgs) -> Result<RegenConfig> {
        let structure_path = args.structure.clone().or(self.structure).ok_or_else(|| {
            CliError::Config(
                "A base structure is required either as `structure` in the config file or via --structure."
                    .to_string(),
            )
        })?;

        let output_dir = args
            .output_dir
            .clone()
            .or(self.output_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        let mut jobs: Vec<RegenJob> = self
            .jobs
            .into_iter()
            .map(|job| RegenJob {
                output_path: job
                    .output
                    .unwrap_or_else(|| output_path_for(&job.condition, &output_dir)),
                condition_path: job.condition,
            })
            .collect();
        jobs.extend(args.conditions.iter().map(|condition| RegenJob {
            condition_path: condition.clone(),
            output_path: output_path_for(condition, &output_dir),
        }));

        if jobs.is_empty() {
            return Err(CliError::Config(
                "No condition files given; list them as arguments or under [[jobs]].".to_string(),
            ));
        }

        let mut outputs = HashSet::new();
        for job in &jobs {
            if job.output_path == structure_path {
                return Err(CliError::Config(format!(
                    "Output of '{}' would overwrite the base structure '{}'.",
                    job.condition_path.display(),
                    structure_path.display()
                )));
            }
            if !outputs.insert(&job.output_path) {
                return Err(CliError::Config(format!(
                    "More than one job writes to '{}'; give one of them an explicit output.",
                    job.output_path.display()
                )));
            }
        }

        Ok(RegenConfig {
            structure_path,
            jobs,
            strict_atom_count: args.strict || self.strict_atom_count.unwrap_or(false),
        })
    }
}
