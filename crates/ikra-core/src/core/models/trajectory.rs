use super::geometry::Coordinate;

/// One atom of a trajectory frame.
///
/// The atom's index in the file is its position in the frame, not a stored field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XyzAtom {
    pub atom_type: String,
    pub coordinate: Coordinate,
    /// Per-atom potential energy.
    pub energy: f64,
}

impl XyzAtom {
    pub fn new(atom_type: &str, coordinate: Coordinate, energy: f64) -> Self {
        Self {
            atom_type: atom_type.to_string(),
            coordinate,
            energy,
        }
    }
}

/// Cursor over an XYZ trajectory stream.
///
/// Holds the most recently read frame. Each successful frame read advances the frame
/// index; a frame header of `0` marks the end of the stream.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Xyz {
    /// Atom count declared by the current frame header.
    pub atom_count: usize,
    pub temperature: f64,
    pub atoms: Vec<XyzAtom>,
    pub(crate) frames_read: usize,
    pub(crate) end_of_stream: bool,
}

impl Xyz {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cursor holding a single frame, e.g. for writing.
    pub fn from_frame(temperature: f64, atoms: Vec<XyzAtom>) -> Self {
        Self {
            atom_count: atoms.len(),
            temperature,
            atoms,
            ..Self::default()
        }
    }

    /// Zero-based index of the current frame, or `None` before the first frame is read.
    pub fn index_of_frame(&self) -> Option<usize> {
        self.frames_read.checked_sub(1)
    }

    /// Number of frames read so far.
    pub fn frames_read(&self) -> usize {
        self.frames_read
    }

    /// Whether the `0` terminator has been read.
    pub fn is_end_of_stream(&self) -> bool {
        self.end_of_stream
    }

    /// Sum of the per-atom energies of the current frame.
    pub fn total_energy(&self) -> f64 {
        self.atoms.iter().map(|atom| atom.energy).sum()
    }
}
