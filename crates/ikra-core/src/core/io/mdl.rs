use super::condition::{StructureHeader, read_embedded_condition, write_embedded_condition};
use super::error::FormatError;
use super::format::sci_signed;
use super::lines::LineReader;
use super::scalar::Record;
use super::traits::RecordFile;
use crate::core::models::geometry::{Coordinate, Fix};
use crate::core::models::structure::{Mdl, MdlAtom};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

fn parse_atom(record: &mut Record<'_>) -> Result<MdlAtom, FormatError> {
    let atom_type = record.word("atom type")?.to_string();
    let coordinate = Coordinate::new(
        record.float("atom x")?,
        record.float("atom y")?,
        record.float("atom z")?,
    );
    let fix = Fix::new(
        record.int("fix x")?,
        record.int("fix y")?,
        record.int("fix z")?,
    );
    let visible = record.int("visible")?;
    Ok(MdlAtom {
        atom_type,
        coordinate,
        fix,
        visible,
    })
}

fn format_atom(atom: &MdlAtom) -> String {
    format!(
        "{} {} {} {} {} {} {} {}",
        atom.atom_type,
        sci_signed(atom.coordinate.x),
        sci_signed(atom.coordinate.y),
        sci_signed(atom.coordinate.z),
        atom.fix.x,
        atom.fix.y,
        atom.fix.z,
        atom.visible
    )
}

impl Mdl {
    /// Decodes a structure from a line source.
    ///
    /// After the embedded condition block every remaining non-blank line is an atom record.
    /// The declared atom count is not enforced here; call [`Mdl::validate_atom_count`] for
    /// strict conformance.
    ///
    /// # Errors
    ///
    /// Propagates any condition decoding error and [`FormatError::MalformedField`] for a
    /// bad atom record.
    pub fn read<R: BufRead>(lines: &mut LineReader<R>) -> Result<Self, FormatError> {
        let (condition, header) = read_embedded_condition(lines)?;

        let mut atoms = Vec::new();
        while let Some(line) = lines.try_next_line()? {
            if line.trim().is_empty() {
                continue;
            }
            let mut record = Record::new(lines.line_number(), &line);
            atoms.push(parse_atom(&mut record)?);
        }

        if atoms.len() != header.atom_count {
            warn!(
                "Structure header declares {} atom(s) but {} atom record(s) were read.",
                header.atom_count,
                atoms.len()
            );
        }
        debug!("Decoded structure with {} atom record(s).", atoms.len());

        Ok(Self {
            condition,
            volume: header.volume,
            atom_count: header.atom_count,
            atoms,
        })
    }

    /// Encodes the structure: the embedded condition block, then one line per atom.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::AtomCountMismatch`] before writing anything if the atom list
    /// length differs from the declared count, and propagates condition encoding errors.
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<(), FormatError> {
        self.validate_atom_count()?;
        let header = StructureHeader {
            atom_count: self.atom_count,
            volume: self.volume,
        };
        write_embedded_condition(&self.condition, &header, writer)?;
        for atom in &self.atoms {
            writeln!(writer, "{}", format_atom(atom))?;
        }
        Ok(())
    }

    /// Checks that the number of atom records equals the declared atom count.
    pub fn validate_atom_count(&self) -> Result<(), FormatError> {
        if self.atoms.len() == self.atom_count {
            Ok(())
        } else {
            Err(FormatError::AtomCountMismatch {
                declared: self.atom_count,
                found: self.atoms.len(),
            })
        }
    }
}

impl RecordFile for Mdl {
    type Error = FormatError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self, Self::Error> {
        Self::read(&mut LineReader::new(reader))
    }

    fn write_to(&self, writer: &mut impl Write) -> Result<(), Self::Error> {
        self.write(writer)
    }
}
