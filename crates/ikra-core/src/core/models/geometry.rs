/// Cartesian position of an atom.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Per-axis flags marking whether an atom is held in place during dynamics.
///
/// The values are stored as the integers found in the file (`0` or `1` in practice) and are
/// written back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fix {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Fix {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns `true` when no axis is fixed.
    pub fn is_free(&self) -> bool {
        self.x == 0 && self.y == 0 && self.z == 0
    }
}

/// Extents of the simulation box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Volume {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Volume {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Per-axis periodic boundary flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Periodic {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl Periodic {
    pub fn new(x: bool, y: bool, z: bool) -> Self {
        Self { x, y, z }
    }
}
