use super::error::FormatError;
use super::format::{sci, sci_signed};
use super::lines::LineReader;
use crate::core::models::geometry::Coordinate;
use crate::core::models::trajectory::{Xyz, XyzAtom};
use std::io::{BufRead, Write};
use tracing::trace;

impl Xyz {
    /// Reads the next frame from `lines` into this cursor.
    ///
    /// A header of `0` marks the end of the stream: the cursor is flagged, its atoms are
    /// cleared and nothing further is read. Otherwise the temperature line and exactly the
    /// declared number of atom lines are read and the frame index advances. On error the
    /// cursor keeps the previous frame.
    ///
    /// # Return
    ///
    /// `true` if a frame was read, `false` at the end-of-stream marker.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::TruncatedInput`] if the input ends inside a frame or before a
    /// frame header, and [`FormatError::MalformedField`] for a bad token.
    pub fn read_frame<R: BufRead>(&mut self, lines: &mut LineReader<R>) -> Result<bool, FormatError> {
        let atom_count: usize = lines.next_record("frame atom count", |r| r.int("atom count"))?;
        if atom_count == 0 {
            trace!("End-of-stream marker on line {}.", lines.line_number());
            self.atom_count = 0;
            self.atoms.clear();
            self.end_of_stream = true;
            return Ok(false);
        }

        let temperature = lines.next_record("frame temperature", |r| r.float("temperature"))?;
        let mut atoms = Vec::new();
        for _ in 0..atom_count {
            let atom = lines.next_record("trajectory atom", |r| {
                let atom_type = r.word("atom type")?;
                let coordinate = Coordinate::new(
                    r.float("atom x")?,
                    r.float("atom y")?,
                    r.float("atom z")?,
                );
                Ok(XyzAtom::new(atom_type, coordinate, r.float("atom energy")?))
            })?;
            atoms.push(atom);
        }

        self.atom_count = atom_count;
        self.temperature = temperature;
        self.atoms = atoms;
        self.frames_read += 1;
        trace!(
            "Read frame {} with {} atom(s) ending on line {}.",
            self.frames_read - 1,
            atom_count,
            lines.line_number()
        );
        Ok(true)
    }

    /// Writes the current frame: atom count, temperature, then one line per atom with its
    /// zero-based position in the frame.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::EmptyFrame`] without writing anything if the frame has no
    /// atoms, since a `0` header would read back as the end of the stream.
    pub fn write_frame<W: Write>(&self, writer: &mut W) -> Result<(), FormatError> {
        if self.atoms.is_empty() {
            return Err(FormatError::EmptyFrame);
        }
        writeln!(writer, "{}", self.atoms.len())?;
        writeln!(writer, "{}", sci(self.temperature))?;
        for (index, atom) in self.atoms.iter().enumerate() {
            writeln!(
                writer,
                "{} {} {} {} {} {}",
                atom.atom_type,
                sci_signed(atom.coordinate.x),
                sci_signed(atom.coordinate.y),
                sci_signed(atom.coordinate.z),
                sci_signed(atom.energy),
                index
            )?;
        }
        Ok(())
    }

    /// Writes the `0` line that terminates a trajectory stream.
    pub fn write_terminator<W: Write>(writer: &mut W) -> Result<(), FormatError> {
        writeln!(writer, "0")?;
        Ok(())
    }
}

/// Iterator over the frames of a trajectory stream.
///
/// Yields a snapshot of each frame until the end-of-stream marker; stops after the first
/// error.
pub struct Frames<R> {
    lines: LineReader<R>,
    cursor: Xyz,
    failed: bool,
}

impl<R: BufRead> Frames<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: LineReader::new(reader),
            cursor: Xyz::new(),
            failed: false,
        }
    }

    /// The cursor as left by the last read.
    pub fn cursor(&self) -> &Xyz {
        &self.cursor
    }
}

impl<R: BufRead> Iterator for Frames<R> {
    type Item = Result<Xyz, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor.is_end_of_stream() {
            return None;
        }
        match self.cursor.read_frame(&mut self.lines) {
            Ok(true) => Some(Ok(self.cursor.clone())),
            Ok(false) => None,
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
