use super::error::FormatError;
use super::format::sci;
use super::lines::LineReader;
use super::traits::RecordFile;
use crate::core::models::condition::{
    Condition, DisplacementBoundary, Element, PotentialType, ShearStressBoundary,
};
use crate::core::models::geometry::{Periodic, Volume};
use std::io::{BufRead, Write};
use tracing::{debug, trace};

/// The atom count and simulation box an MDL file carries inside its condition block.
///
/// They sit between the potential file paths and the boundary lines but belong to the
/// enclosing structure, not to the [`Condition`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StructureHeader {
    pub atom_count: usize,
    pub volume: Volume,
}

/// Reads a standalone condition block.
///
/// # Errors
///
/// Returns [`FormatError::MalformedField`] for a token that fails coercion,
/// [`FormatError::UnknownPotentialType`] for a tag outside the schema table (no line after
/// the tag is consumed), and [`FormatError::TruncatedInput`] if the input ends early.
pub fn read_condition<R: BufRead>(lines: &mut LineReader<R>) -> Result<Condition, FormatError> {
    decode(lines, None)
}

/// Reads a condition block embedded in an MDL file, together with its structure header.
///
/// # Errors
///
/// Same as [`read_condition`].
pub fn read_embedded_condition<R: BufRead>(
    lines: &mut LineReader<R>,
) -> Result<(Condition, StructureHeader), FormatError> {
    let mut header = StructureHeader::default();
    let condition = decode(lines, Some(&mut header))?;
    Ok((condition, header))
}

/// Writes a standalone condition block.
///
/// # Errors
///
/// Returns [`FormatError::PotentialFileCountMismatch`] before writing anything if the
/// potential file list does not fit the potential type and element count.
pub fn write_condition<W: Write>(condition: &Condition, writer: &mut W) -> Result<(), FormatError> {
    encode(condition, None, writer)
}

/// Writes a condition block with the structure header interleaved where MDL files expect it.
///
/// # Errors
///
/// Same as [`write_condition`].
pub fn write_embedded_condition<W: Write>(
    condition: &Condition,
    header: &StructureHeader,
    writer: &mut W,
) -> Result<(), FormatError> {
    encode(condition, Some(header), writer)
}

fn decode<R: BufRead>(
    lines: &mut LineReader<R>,
    header: Option<&mut StructureHeader>,
) -> Result<Condition, FormatError> {
    let loop_count = lines.next_record("loop count", |r| r.int("loop count"))?;
    let quench_steps = lines.next_record("quench steps", |r| r.int("quench steps"))?;
    let annealing_steps = lines.next_record("annealing steps", |r| r.int("annealing steps"))?;
    let (dynamics_steps, output_interval) = lines.next_record("dynamics steps", |r| {
        Ok((r.int("dynamics steps")?, r.int("output interval")?))
    })?;
    let cg_steps = lines.next_record("cg steps", |r| r.int("cg steps"))?;
    let dt = lines.next_record("time step", |r| r.float("time step"))?;
    let (temperature, temperature_delta) = lines.next_record("temperature", |r| {
        Ok((r.float("temperature")?, r.float("temperature delta")?))
    })?;

    let element_count: usize = lines.next_record("element count", |r| r.int("element count"))?;
    let mut elements = Vec::new();
    for _ in 0..element_count {
        let element = lines.next_record("element", |r| {
            let atom_type = r.word("element label")?;
            Ok(Element::new(atom_type, r.float("element mass")?))
        })?;
        elements.push(element);
    }

    let tag = lines.next_line("potential type")?;
    let potential_type =
        PotentialType::from_tag(tag.trim()).ok_or_else(|| FormatError::UnknownPotentialType {
            line: lines.line_number(),
            tag: tag.trim().to_string(),
        })?;

    let file_count = potential_type.file_count(elements.len());
    trace!(
        "Potential '{}' with {} element(s) lists {} file(s).",
        potential_type,
        elements.len(),
        file_count
    );
    let mut potential_files = Vec::with_capacity(file_count);
    for _ in 0..file_count {
        potential_files.push(lines.next_line("potential file path")?);
    }

    if let Some(header) = header {
        header.atom_count = lines.next_record("atom count", |r| r.int("atom count"))?;
        header.volume = lines.next_record("volume", |r| {
            Ok(Volume::new(
                r.float("volume x")?,
                r.float("volume y")?,
                r.float("volume z")?,
            ))
        })?;
    }

    let displacement = lines.next_record("displacement boundary", |r| {
        Ok(DisplacementBoundary {
            enabled: r.flag("displacement flag")?,
            magnitude: r.float("displacement magnitude")?,
            ux: r.float("displacement ux")?,
            uz: r.float("displacement uz")?,
            height: r.float("displacement height")?,
        })
    })?;
    let shear_stress = lines.next_record("shear stress boundary", |r| {
        Ok(ShearStressBoundary {
            enabled: r.flag("shear stress flag")?,
            magnitude: r.float("shear stress magnitude")?,
            ex: r.float("shear stress ex")?,
            ez: r.float("shear stress ez")?,
        })
    })?;
    let spbc_dz = lines.next_record("spbc offset", |r| r.float("spbc offset"))?;
    let periodic = lines.next_record("periodic flags", |r| {
        Ok(Periodic::new(
            r.flag("periodic x")?,
            r.flag("periodic y")?,
            r.flag("periodic z")?,
        ))
    })?;

    debug!(
        "Decoded condition block ending on line {}: {} element(s), potential '{}'.",
        lines.line_number(),
        elements.len(),
        potential_type
    );

    Ok(Condition {
        loop_count,
        quench_steps,
        annealing_steps,
        dynamics_steps,
        output_interval,
        cg_steps,
        dt,
        temperature,
        temperature_delta,
        elements,
        potential_type,
        potential_files,
        displacement,
        shear_stress,
        spbc_dz,
        periodic,
    })
}

fn encode<W: Write>(
    condition: &Condition,
    header: Option<&StructureHeader>,
    writer: &mut W,
) -> Result<(), FormatError> {
    let expected = condition.expected_potential_files();
    if condition.potential_files.len() != expected {
        return Err(FormatError::PotentialFileCountMismatch {
            potential_type: condition.potential_type,
            expected,
            found: condition.potential_files.len(),
        });
    }

    writeln!(writer, "{}", condition.loop_count)?;
    writeln!(writer, "{}", condition.quench_steps)?;
    writeln!(writer, "{}", condition.annealing_steps)?;
    writeln!(
        writer,
        "{} {}",
        condition.dynamics_steps, condition.output_interval
    )?;
    writeln!(writer, "{}", condition.cg_steps)?;
    writeln!(writer, "{}", sci(condition.dt))?;
    writeln!(
        writer,
        "{} {}",
        sci(condition.temperature),
        sci(condition.temperature_delta)
    )?;
    writeln!(writer, "{}", condition.elements.len())?;
    for element in &condition.elements {
        writeln!(writer, "{} {}", element.atom_type, sci(element.mass))?;
    }
    writeln!(writer, "{}", condition.potential_type)?;
    for path in &condition.potential_files {
        writeln!(writer, "{}", path)?;
    }

    if let Some(header) = header {
        writeln!(writer, "{}", header.atom_count)?;
        writeln!(
            writer,
            "{} {} {}",
            sci(header.volume.x),
            sci(header.volume.y),
            sci(header.volume.z)
        )?;
    }

    let displacement = &condition.displacement;
    writeln!(
        writer,
        "{} {} {} {} {}",
        u8::from(displacement.enabled),
        sci(displacement.magnitude),
        sci(displacement.ux),
        sci(displacement.uz),
        sci(displacement.height)
    )?;
    let shear = &condition.shear_stress;
    writeln!(
        writer,
        "{} {} {} {}",
        u8::from(shear.enabled),
        sci(shear.magnitude),
        sci(shear.ex),
        sci(shear.ez)
    )?;
    writeln!(writer, "{}", sci(condition.spbc_dz))?;
    writeln!(
        writer,
        "{} {} {}",
        u8::from(condition.periodic.x),
        u8::from(condition.periodic.y),
        u8::from(condition.periodic.z)
    )?;
    Ok(())
}

impl RecordFile for Condition {
    type Error = FormatError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self, Self::Error> {
        read_condition(&mut LineReader::new(reader))
    }

    fn write_to(&self, writer: &mut impl Write) -> Result<(), Self::Error> {
        write_condition(self, writer)
    }
}
