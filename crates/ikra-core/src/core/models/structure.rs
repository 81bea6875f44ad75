use super::condition::Condition;
use super::geometry::{Coordinate, Fix, Volume};

/// One atom of an MDL structure snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MdlAtom {
    /// The atom's type label, matching one of the condition's element labels.
    pub atom_type: String,
    pub coordinate: Coordinate,
    pub fix: Fix,
    pub visible: i32,
}

impl MdlAtom {
    pub fn new(atom_type: &str, coordinate: Coordinate) -> Self {
        Self {
            atom_type: atom_type.to_string(),
            coordinate,
            fix: Fix::default(),
            visible: 1,
        }
    }
}

/// A complete structure snapshot: simulation conditions, box, and atoms.
///
/// `atom_count` is the count declared in the file header. The codec does not force it to
/// match `atoms.len()` on read; see `Mdl::validate_atom_count`. Writing refuses a mismatch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mdl {
    pub condition: Condition,
    pub volume: Volume,
    pub atom_count: usize,
    pub atoms: Vec<MdlAtom>,
}

impl Mdl {
    /// Creates a structure whose declared atom count matches `atoms`.
    pub fn new(condition: Condition, volume: Volume, atoms: Vec<MdlAtom>) -> Self {
        Self {
            condition,
            volume,
            atom_count: atoms.len(),
            atoms,
        }
    }

    /// Swaps in a new condition, keeping this structure's boundary geometry.
    ///
    /// See [`Condition::transplant`] for the list of preserved fields.
    pub fn replace_condition(&mut self, candidate: &Condition) {
        self.condition.transplant(candidate);
    }
}
