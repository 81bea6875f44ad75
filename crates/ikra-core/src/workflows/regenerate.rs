use super::error::WorkflowError;
use super::progress::{Progress, ProgressReporter};
use crate::core::io::traits::RecordFile;
use crate::core::models::condition::{Condition, PotentialType};
use crate::core::models::structure::Mdl;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// One condition file to apply to the base structure.
#[derive(Debug, Clone, PartialEq)]
pub struct RegenJob {
    pub condition_path: PathBuf,
    pub output_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegenConfig {
    /// The MDL structure every job starts from.
    pub structure_path: PathBuf,
    pub jobs: Vec<RegenJob>,
    /// Reject a base structure whose atom records disagree with its declared atom count.
    /// When `false` the declared count is corrected to the number of records read.
    pub strict_atom_count: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegenOutcome {
    pub condition_path: PathBuf,
    pub output_path: PathBuf,
    pub potential_type: PotentialType,
    pub atom_count: usize,
}

/// Default output location for a condition file: `<output_dir>/<condition stem>.mdl`.
pub fn output_path_for(condition_path: &Path, output_dir: &Path) -> PathBuf {
    let stem = condition_path
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "structure".into());
    let mut path = output_dir.join(stem);
    path.set_extension("mdl");
    path
}

/// Returns a copy of `base` carrying `candidate` as its condition.
///
/// The boundary geometry of `base` survives the swap as described in
/// [`Condition::transplant`]; atoms, volume and atom count are unchanged.
pub fn regenerate(base: &Mdl, candidate: &Condition) -> Mdl {
    let mut structure = base.clone();
    structure.replace_condition(candidate);
    structure
}

/// Reads the base structure once, then writes one regenerated structure per job.
///
/// Jobs run in order and the first failure aborts the batch; outputs written before the
/// failure are left in place.
///
/// # Errors
///
/// Returns [`WorkflowError::Config`] for an empty job list, [`WorkflowError::Read`] when
/// the base structure or a condition file cannot be decoded (including an atom count
/// mismatch in strict mode), and [`WorkflowError::Write`] when an output cannot be written.
#[instrument(skip_all, name = "regenerate_workflow")]
pub fn run(
    config: &RegenConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<RegenOutcome>, WorkflowError> {
    if config.jobs.is_empty() {
        return Err(WorkflowError::Config(
            "at least one condition file is required".to_string(),
        ));
    }

    reporter.report(Progress::BatchStart {
        name: "Regenerating structures",
        total: Some(config.jobs.len() as u64),
    });

    info!("Loading base structure from {:?}", config.structure_path);
    let mut base = Mdl::read_from_path(&config.structure_path)
        .map_err(|e| WorkflowError::read(&config.structure_path, e))?;
    if let Err(e) = base.validate_atom_count() {
        if config.strict_atom_count {
            return Err(WorkflowError::read(&config.structure_path, e));
        }
        let note = format!("{}; using the {} atom record(s) found.", e, base.atoms.len());
        warn!("{}", note);
        reporter.report(Progress::Message(note));
        base.atom_count = base.atoms.len();
    }

    let mut outcomes = Vec::with_capacity(config.jobs.len());
    for job in &config.jobs {
        debug!("Applying {:?} -> {:?}", job.condition_path, job.output_path);
        let candidate = Condition::read_from_path(&job.condition_path)
            .map_err(|e| WorkflowError::read(&job.condition_path, e))?;

        let structure = regenerate(&base, &candidate);
        structure
            .write_to_path(&job.output_path)
            .map_err(|e| WorkflowError::write(&job.output_path, e))?;

        info!(
            "Wrote {:?} (potential '{}', {} atom(s)).",
            job.output_path, structure.condition.potential_type, structure.atom_count
        );
        reporter.report(Progress::ItemDone {
            label: job.output_path.display().to_string(),
        });
        outcomes.push(RegenOutcome {
            condition_path: job.condition_path.clone(),
            output_path: job.output_path.clone(),
            potential_type: structure.condition.potential_type,
            atom_count: structure.atom_count,
        });
    }

    reporter.report(Progress::BatchFinish);
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::error::FormatError;
    use crate::core::io::test_fixtures::{mdl_text, sample_condition};
    use std::fs;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    fn setup() -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let structure_path = dir.path().join("base.mdl");
        fs::write(&structure_path, mdl_text()).unwrap();
        (dir, structure_path)
    }

    fn write_candidate(dir: &Path, name: &str, potential: PotentialType, files: &[&str]) -> PathBuf {
        let mut condition = sample_condition();
        condition.potential_type = potential;
        condition.potential_files = files.iter().map(|f| f.to_string()).collect();
        condition.loop_count = 99;
        condition.displacement.ux = -7.0;
        condition.spbc_dz = -7.0;
        let path = dir.join(name);
        condition.write_to_path(&path).unwrap();
        path
    }

    #[test]
    fn output_path_for_uses_condition_stem() {
        assert_eq!(
            output_path_for(Path::new("runs/shear.cnd"), Path::new("out")),
            PathBuf::from("out/shear.mdl")
        );
        assert_eq!(
            output_path_for(Path::new("plain"), Path::new("out")),
            PathBuf::from("out/plain.mdl")
        );
    }

    #[test]
    fn regenerate_keeps_atoms_and_boundary_geometry() {
        let base = Mdl::read_from(&mut mdl_text().as_bytes()).unwrap();
        let mut candidate = sample_condition();
        candidate.temperature = 600.0;
        candidate.shear_stress.ex = 42.0;

        let structure = regenerate(&base, &candidate);
        assert_eq!(structure.atoms, base.atoms);
        assert_eq!(structure.volume, base.volume);
        assert_eq!(structure.condition.temperature, 600.0);
        assert_eq!(structure.condition.shear_stress.ex, base.condition.shear_stress.ex);
    }

    #[test]
    fn run_writes_one_structure_per_condition() {
        let (dir, structure_path) = setup();
        let sw = write_candidate(dir.path(), "sw.cnd", PotentialType::Sw, &["SiC.sw"]);
        let pair = write_candidate(
            dir.path(),
            "pair.cnd",
            PotentialType::Pair,
            &["Si-Si", "Si-C", "C-C"],
        );

        let config = RegenConfig {
            structure_path,
            jobs: vec![
                RegenJob {
                    condition_path: sw.clone(),
                    output_path: dir.path().join("sw.mdl"),
                },
                RegenJob {
                    condition_path: pair,
                    output_path: dir.path().join("pair.mdl"),
                },
            ],
            strict_atom_count: true,
        };

        let events = Arc::new(Mutex::new(0usize));
        let sink = events.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            if matches!(event, Progress::ItemDone { .. }) {
                *sink.lock().unwrap() += 1;
            }
        }));

        let outcomes = run(&config, &reporter).unwrap();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].condition_path, sw);
        assert_eq!(outcomes[0].potential_type, PotentialType::Sw);
        assert_eq!(outcomes[1].atom_count, 3);
        assert_eq!(*events.lock().unwrap(), 2);

        let written = Mdl::read_from_path(dir.path().join("sw.mdl")).unwrap();
        assert_eq!(written.condition.loop_count, 99);
        assert_eq!(written.condition.potential_files, ["SiC.sw"]);
        assert_eq!(written.condition.displacement.ux, 1.0);
        assert_eq!(written.condition.spbc_dz, 0.25);
        assert_eq!(written.atoms.len(), 3);
    }

    #[test]
    fn run_rejects_empty_job_list() {
        let (_dir, structure_path) = setup();
        let config = RegenConfig {
            structure_path,
            jobs: Vec::new(),
            strict_atom_count: false,
        };
        let result = run(&config, &ProgressReporter::new());
        assert!(matches!(result, Err(WorkflowError::Config(_))));
    }

    #[test]
    fn strict_mode_rejects_count_mismatch() {
        let (dir, structure_path) = setup();
        let text = mdl_text().replacen("pot/C.tersoff\n3\n", "pot/C.tersoff\n4\n", 1);
        fs::write(&structure_path, text).unwrap();
        let candidate = write_candidate(dir.path(), "sw.cnd", PotentialType::Sw, &["SiC.sw"]);
        let mut config = RegenConfig {
            structure_path,
            jobs: vec![RegenJob {
                condition_path: candidate,
                output_path: dir.path().join("sw.mdl"),
            }],
            strict_atom_count: true,
        };

        let result = run(&config, &ProgressReporter::new());
        assert!(matches!(
            result,
            Err(WorkflowError::Read {
                source: FormatError::AtomCountMismatch {
                    declared: 4,
                    found: 3
                },
                ..
            })
        ));

        config.strict_atom_count = false;
        let notes = Arc::new(Mutex::new(Vec::new()));
        let sink = notes.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            if let Progress::Message(note) = event {
                sink.lock().unwrap().push(note);
            }
        }));
        let outcomes = run(&config, &reporter).unwrap();
        assert_eq!(outcomes[0].atom_count, 3);

        let notes = notes.lock().unwrap();
        assert_eq!(notes.len(), 1);
        assert!(notes[0].contains("declares 4"));
    }

    #[test]
    fn unreadable_condition_aborts_with_its_path() {
        let (dir, structure_path) = setup();
        let bad = dir.path().join("bad.cnd");
        fs::write(&bad, "10\n100\n200\n300 10\n50\n1e-15\n300 10\n1\nAr 1\nfoo\n").unwrap();
        let config = RegenConfig {
            structure_path,
            jobs: vec![RegenJob {
                condition_path: bad.clone(),
                output_path: dir.path().join("bad.mdl"),
            }],
            strict_atom_count: true,
        };

        match run(&config, &ProgressReporter::new()) {
            Err(WorkflowError::Read { path, source }) => {
                assert_eq!(path, bad);
                assert!(matches!(source, FormatError::UnknownPotentialType { .. }));
            }
            other => panic!("expected read error, got {:?}", other),
        }
        assert!(!dir.path().join("bad.mdl").exists());
    }
}
