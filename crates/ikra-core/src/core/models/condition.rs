use super::geometry::Periodic;
use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;

/// One atomic species taking part in the simulation.
///
/// The order of elements inside a [`Condition`] is significant: potential files for
/// pair-like potentials are listed in the pairwise order implied by it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    /// The label used for atoms of this species (usually the element symbol).
    pub atom_type: String,
    /// The atomic mass in kilograms.
    pub mass: f64,
}

impl Element {
    pub fn new(atom_type: &str, mass: f64) -> Self {
        Self {
            atom_type: atom_type.to_string(),
            mass,
        }
    }
}

/// The interaction model selecting which auxiliary potential files a condition references.
///
/// Each variant knows how many file-path lines follow its tag in a condition block; see
/// [`PotentialType::file_count`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PotentialType {
    /// Pairwise potential, one file per element pair.
    #[default]
    Pair,
    /// Embedded-atom method: pair files plus density and embedding files per element.
    Eam,
    /// Tersoff bond-order potential, one file per element pair.
    Tersoff,
    /// Angular-dependent potential: three file sets per pair plus two files per element.
    Adp,
    /// Stillinger-Weber potential, a single parameter file.
    Sw,
    /// Brenner bond-order potential, one file per element pair.
    Brenner,
    /// The `2bm` potential, one file per element.
    TwoBm,
}

static POTENTIAL_TAGS: Map<&'static str, PotentialType> = phf_map! {
    "pair" => PotentialType::Pair,
    "eam" => PotentialType::Eam,
    "tersoff" => PotentialType::Tersoff,
    "adp" => PotentialType::Adp,
    "sw" => PotentialType::Sw,
    "brenner" => PotentialType::Brenner,
    "2bm" => PotentialType::TwoBm,
};

/// Number of unordered element pairs, including self pairs: `n * (n + 1) / 2`.
fn pair_count(elements: usize) -> usize {
    elements * (elements + 1) / 2
}

impl PotentialType {
    /// All supported potential types, in tag-table order.
    pub const ALL: [PotentialType; 7] = [
        PotentialType::Pair,
        PotentialType::Eam,
        PotentialType::Tersoff,
        PotentialType::Adp,
        PotentialType::Sw,
        PotentialType::Brenner,
        PotentialType::TwoBm,
    ];

    /// Looks up a potential type by its file tag (e.g. `"eam"`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        POTENTIAL_TAGS.get(tag).copied()
    }

    /// The tag written to condition blocks for this potential type.
    pub fn tag(self) -> &'static str {
        match self {
            PotentialType::Pair => "pair",
            PotentialType::Eam => "eam",
            PotentialType::Tersoff => "tersoff",
            PotentialType::Adp => "adp",
            PotentialType::Sw => "sw",
            PotentialType::Brenner => "brenner",
            PotentialType::TwoBm => "2bm",
        }
    }

    /// Number of potential file-path lines that follow the tag for `elements` species.
    ///
    /// # Arguments
    ///
    /// * `elements` - The number of elements declared in the condition.
    ///
    /// # Return
    ///
    /// The exact number of path lines a condition block carries for this potential type.
    pub fn file_count(self, elements: usize) -> usize {
        let pairs = pair_count(elements);
        match self {
            PotentialType::Pair | PotentialType::Tersoff | PotentialType::Brenner => pairs,
            PotentialType::Eam => pairs + 2 * elements,
            PotentialType::Adp => 3 * pairs + 2 * elements,
            PotentialType::Sw => 1,
            PotentialType::TwoBm => elements,
        }
    }
}

impl fmt::Display for PotentialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PotentialType {
    type Err = ();

    /// Parses a potential type tag. Tags are matched exactly after trimming whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s.trim()).ok_or(())
    }
}

/// Displacement boundary condition applied to a layer of atoms.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplacementBoundary {
    pub enabled: bool,
    pub magnitude: f64,
    pub ux: f64,
    pub uz: f64,
    /// Thickness of the affected layer.
    pub height: f64,
}

/// Shear stress boundary condition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShearStressBoundary {
    pub enabled: bool,
    pub magnitude: f64,
    pub ex: f64,
    pub ez: f64,
}

/// The full configuration of a simulation run.
///
/// A condition appears either on its own (a condition file) or embedded at the top of an
/// MDL structure file. `potential_files` must hold exactly
/// `potential_type.file_count(elements.len())` entries for the block to be writable.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Condition {
    /// Number of outer simulation loops.
    pub loop_count: i64,
    /// Steps of numerical quenching.
    pub quench_steps: i64,
    /// Annealing steps (NVT ensemble).
    pub annealing_steps: i64,
    /// Dynamics steps (NVE ensemble).
    pub dynamics_steps: i64,
    /// Output is written every `output_interval` dynamics steps.
    pub output_interval: i64,
    /// Conjugate-gradient minimisation steps.
    pub cg_steps: i64,
    /// Time step in seconds.
    pub dt: f64,
    /// Target temperature in kelvin.
    pub temperature: f64,
    /// Temperature change per annealing stage in kelvin.
    pub temperature_delta: f64,
    pub elements: Vec<Element>,
    pub potential_type: PotentialType,
    /// Potential parameter files, copied verbatim between decode and encode.
    pub potential_files: Vec<String>,
    pub displacement: DisplacementBoundary,
    pub shear_stress: ShearStressBoundary,
    /// SPBC offset along z.
    pub spbc_dz: f64,
    pub periodic: Periodic,
}

impl Condition {
    /// Number of potential file paths this condition must carry.
    pub fn expected_potential_files(&self) -> usize {
        self.potential_type.file_count(self.elements.len())
    }

    /// Replaces this condition with `candidate` while keeping the geometry-derived boundary
    /// values of `self`.
    ///
    /// The displacement components (`ux`, `uz`), the affected layer `height`, the shear
    /// stress components (`ex`, `ez`) and `spbc_dz` survive the swap. Every other field,
    /// including the boundary `enabled` flags and magnitudes, is taken from `candidate`.
    /// `candidate` is left untouched.
    ///
    /// # Arguments
    ///
    /// * `candidate` - The condition whose values replace the current ones.
    pub fn transplant(&mut self, candidate: &Condition) {
        let mut next = candidate.clone();
        next.displacement.ux = self.displacement.ux;
        next.displacement.uz = self.displacement.uz;
        next.displacement.height = self.displacement.height;
        next.shear_stress.ex = self.shear_stress.ex;
        next.shear_stress.ez = self.shear_stress.ez;
        next.spbc_dz = self.spbc_dz;
        *self = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn condition_with_boundaries(
        ux: f64,
        uz: f64,
        height: f64,
        ex: f64,
        ez: f64,
        spbc: f64,
    ) -> Condition {
        Condition {
            displacement: DisplacementBoundary {
                enabled: true,
                magnitude: 0.5,
                ux,
                uz,
                height,
            },
            shear_stress: ShearStressBoundary {
                enabled: false,
                magnitude: 0.25,
                ex,
                ez,
            },
            spbc_dz: spbc,
            ..Default::default()
        }
    }

    #[test]
    fn file_count_matches_schema_table() {
        let cases = [
            (PotentialType::Pair, [1, 3, 6, 15]),
            (PotentialType::Eam, [3, 7, 12, 25]),
            (PotentialType::Tersoff, [1, 3, 6, 15]),
            (PotentialType::Adp, [5, 13, 24, 55]),
            (PotentialType::Sw, [1, 1, 1, 1]),
            (PotentialType::Brenner, [1, 3, 6, 15]),
            (PotentialType::TwoBm, [1, 2, 3, 5]),
        ];
        for (potential, expected) in cases {
            for (n, count) in [1, 2, 3, 5].into_iter().zip(expected) {
                assert_eq!(potential.file_count(n), count, "{potential} with {n} elements");
            }
        }
    }

    #[test]
    fn file_count_for_zero_elements() {
        assert_eq!(PotentialType::Pair.file_count(0), 0);
        assert_eq!(PotentialType::Sw.file_count(0), 1);
    }

    #[test]
    fn tags_round_trip_through_lookup() {
        for potential in PotentialType::ALL {
            assert_eq!(PotentialType::from_tag(potential.tag()), Some(potential));
            assert_eq!(potential.to_string().parse::<PotentialType>(), Ok(potential));
        }
    }

    #[test]
    fn unknown_tags_are_rejected() {
        assert_eq!(PotentialType::from_tag("foo"), None);
        assert_eq!(PotentialType::from_tag("EAM"), None);
        assert_eq!("".parse::<PotentialType>(), Err(()));
    }

    #[test]
    fn from_str_ignores_surrounding_whitespace() {
        assert_eq!(" tersoff \t".parse::<PotentialType>(), Ok(PotentialType::Tersoff));
    }

    #[test]
    fn transplant_keeps_boundary_geometry_and_takes_everything_else() {
        let mut current = condition_with_boundaries(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        current.potential_type = PotentialType::Pair;

        let mut candidate = condition_with_boundaries(10.0, 20.0, 30.0, 40.0, 50.0, 60.0);
        candidate.potential_type = PotentialType::Eam;
        candidate.loop_count = 7;
        candidate.displacement.magnitude = 9.0;
        candidate.shear_stress.enabled = true;
        candidate.elements.push(Element::new("Cu", 1.05e-25));

        current.transplant(&candidate);

        assert_eq!(current.potential_type, PotentialType::Eam);
        assert_eq!(current.loop_count, 7);
        assert_eq!(current.elements, candidate.elements);
        assert_eq!(current.displacement.magnitude, 9.0);
        assert!(current.shear_stress.enabled);
        assert_eq!(current.displacement.ux, 1.0);
        assert_eq!(current.displacement.uz, 2.0);
        assert_eq!(current.displacement.height, 3.0);
        assert_eq!(current.shear_stress.ex, 4.0);
        assert_eq!(current.shear_stress.ez, 5.0);
        assert_eq!(current.spbc_dz, 6.0);
    }

    #[test]
    fn transplant_leaves_candidate_untouched_and_unshared() {
        let mut current = condition_with_boundaries(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let mut candidate = condition_with_boundaries(10.0, 20.0, 30.0, 40.0, 50.0, 60.0);
        candidate.potential_files.push("Cu.eam".to_string());
        let snapshot = candidate.clone();

        current.transplant(&candidate);
        assert_eq!(candidate, snapshot);

        candidate.potential_files[0].push_str(".bak");
        assert_eq!(current.potential_files, vec!["Cu.eam".to_string()]);
    }
}
