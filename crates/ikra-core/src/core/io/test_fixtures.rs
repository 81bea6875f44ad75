//! Sample files shared by the codec tests.

use crate::core::models::condition::{
    Condition, DisplacementBoundary, Element, PotentialType, ShearStressBoundary,
};
use crate::core::models::geometry::Periodic;

/// Condition lines up to and including the potential file paths.
pub(crate) const CONDITION_HEAD: &str = "\
10
100
200
300 10
50
1.000000000000000e-15
3.000000000000000e+02 1.000000000000000e+01
2
Si 4.663700000000000e-26
C 1.994400000000000e-26
tersoff
pot/Si.tersoff
pot/SiC.tersoff
pot/C.tersoff
";

/// Atom count and volume lines of an MDL file.
pub(crate) const STRUCTURE_HEADER: &str = "\
3
1.000000000000000e+01 1.000000000000000e+01 2.000000000000000e+01
";

/// Boundary lines closing a condition block.
pub(crate) const CONDITION_TAIL: &str = "\
1 1.000000000000000e-03 1.000000000000000e+00 0.000000000000000e+00 5.000000000000000e+00
0 0.000000000000000e+00 0.000000000000000e+00 0.000000000000000e+00
2.500000000000000e-01
1 1 0
";

pub(crate) const MDL_ATOMS: &str = "\
Si  0.000000000000000e+00  0.000000000000000e+00  0.000000000000000e+00 0 0 0 1
C  1.500000000000000e+00 -2.500000000000000e-01  3.000000000000000e+00 1 1 1 1
Si  2.750000000000000e+00  2.750000000000000e+00  1.000000000000000e-01 0 0 1 0
";

pub(crate) const XYZ_FRAMES: &str = "\
2
3.000000000000000e+02
Ar  0.000000000000000e+00  0.000000000000000e+00  0.000000000000000e+00 -1.250000000000000e-01 0
Ar  1.500000000000000e+00 -2.000000000000000e+00  5.000000000000000e-01 -2.500000000000000e-01 1
1
2.950000000000000e+02
Ar  1.000000000000000e+00  1.000000000000000e+00  1.000000000000000e+00 -5.000000000000000e-01 0
0
";

pub(crate) fn condition_text() -> String {
    format!("{CONDITION_HEAD}{CONDITION_TAIL}")
}

pub(crate) fn mdl_text() -> String {
    format!("{CONDITION_HEAD}{STRUCTURE_HEADER}{CONDITION_TAIL}{MDL_ATOMS}")
}

/// The condition described by [`condition_text`].
pub(crate) fn sample_condition() -> Condition {
    Condition {
        loop_count: 10,
        quench_steps: 100,
        annealing_steps: 200,
        dynamics_steps: 300,
        output_interval: 10,
        cg_steps: 50,
        dt: 1.0e-15,
        temperature: 300.0,
        temperature_delta: 10.0,
        elements: vec![Element::new("Si", 4.6637e-26), Element::new("C", 1.9944e-26)],
        potential_type: PotentialType::Tersoff,
        potential_files: vec![
            "pot/Si.tersoff".to_string(),
            "pot/SiC.tersoff".to_string(),
            "pot/C.tersoff".to_string(),
        ],
        displacement: DisplacementBoundary {
            enabled: true,
            magnitude: 1.0e-3,
            ux: 1.0,
            uz: 0.0,
            height: 5.0,
        },
        shear_stress: ShearStressBoundary::default(),
        spbc_dz: 0.25,
        periodic: Periodic::new(true, true, false),
    }
}
