use crate::cli::CheckArgs;
use crate::error::{CliError, Result};
use ikra::core::io::traits::RecordFile;
use ikra::core::models::structure::Mdl;
use tracing::{info, warn};

pub fn run(args: CheckArgs) -> Result<()> {
    info!("Decoding structure from {:?}", &args.input);
    let mdl = Mdl::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
        path: args.input.clone(),
        source: e.into(),
    })?;

    for line in summary_lines(&mdl) {
        println!("{}", line);
    }

    match mdl.validate_atom_count() {
        Ok(()) => println!("✓ Atom records match the declared count."),
        Err(e) if args.strict => return Err(CliError::Format(e)),
        Err(e) => warn!("{}", e),
    }
    Ok(())
}

fn summary_lines(mdl: &Mdl) -> Vec<String> {
    let condition = &mdl.condition;
    let elements: Vec<_> = condition
        .elements
        .iter()
        .map(|e| format!("{} ({:e})", e.atom_type, e.mass))
        .collect();
    vec![
        format!(
            "Loop/quench/anneal/dynamics: {} / {} / {} / {}",
            condition.loop_count,
            condition.quench_steps,
            condition.annealing_steps,
            condition.dynamics_steps
        ),
        format!(
            "Temperature: {} (delta {}), dt: {:e}",
            condition.temperature, condition.temperature_delta, condition.dt
        ),
        format!("Elements: {}", elements.join(", ")),
        format!(
            "Potential: {} [{}]",
            condition.potential_type,
            condition.potential_files.join(", ")
        ),
        format!(
            "Volume: {} x {} x {}",
            mdl.volume.x, mdl.volume.y, mdl.volume.z
        ),
        format!(
            "Atoms: {} declared, {} read, {} with a fixed axis",
            mdl.atom_count,
            mdl.atoms.len(),
            mdl.atoms.iter().filter(|a| !a.fix.is_free()).count()
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ikra::core::io::error::FormatError;
    use ikra::core::models::condition::{Condition, Element, PotentialType};
    use ikra::core::models::geometry::{Coordinate, Fix, Volume};
    use ikra::core::models::structure::MdlAtom;
    use std::fs;
    use std::path::{Path, PathBuf};

    fn structure() -> Mdl {
        Mdl::new(
            Condition {
                elements: vec![Element::new("Si", 4.66e-26), Element::new("C", 1.99e-26)],
                potential_type: PotentialType::Tersoff,
                potential_files: vec!["Si-Si".into(), "Si-C".into(), "C-C".into()],
                ..Default::default()
            },
            Volume::new(4.0, 4.0, 8.0),
            vec![
                MdlAtom::new("Si", Coordinate::new(0.0, 0.0, 0.0)),
                MdlAtom::new("C", Coordinate::new(1.0, 1.0, 1.0)),
            ],
        )
    }

    fn write(dir: &Path, mdl: &Mdl) -> PathBuf {
        let path = dir.join("s.mdl");
        mdl.write_to_path(&path).unwrap();
        path
    }

    #[test]
    fn summary_mentions_potential_and_counts() {
        let lines = summary_lines(&structure());
        assert!(lines.contains(&"Potential: tersoff [Si-Si, Si-C, C-C]".to_string()));
        assert!(lines.contains(&"Atoms: 2 declared, 2 read, 0 with a fixed axis".to_string()));
    }

    #[test]
    fn summary_counts_fixed_atoms() {
        let mut mdl = structure();
        mdl.atoms[1].fix = Fix::new(0, 0, 1);
        let lines = summary_lines(&mdl);
        assert_eq!(
            lines.last().map(String::as_str),
            Some("Atoms: 2 declared, 2 read, 1 with a fixed axis")
        );
    }

    #[test]
    fn conforming_structure_passes_strict_check() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(dir.path(), &structure());
        run(CheckArgs {
            input,
            strict: true,
        })
        .unwrap();
    }

    #[test]
    fn strict_check_reports_atom_count_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(dir.path(), &structure());
        let text = fs::read_to_string(&input).unwrap();
        fs::write(&input, format!("{}C 2.0 2.0 2.0 0 0 0 1\n", text)).unwrap();

        let lenient = run(CheckArgs {
            input: input.clone(),
            strict: false,
        });
        assert!(lenient.is_ok());

        let strict = run(CheckArgs {
            input,
            strict: true,
        });
        assert!(matches!(
            strict,
            Err(CliError::Format(FormatError::AtomCountMismatch {
                declared: 2,
                found: 3
            }))
        ));
    }

    #[test]
    fn undecodable_structure_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.mdl");
        fs::write(&input, "not a number\n").unwrap();
        match run(CheckArgs {
            input: input.clone(),
            strict: false,
        }) {
            Err(CliError::FileParsing { path, .. }) => assert_eq!(path, input),
            other => panic!("expected parse failure, got {:?}", other),
        }
    }
}
