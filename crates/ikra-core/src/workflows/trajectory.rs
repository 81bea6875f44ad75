use super::error::WorkflowError;
use super::progress::{Progress, ProgressReporter};
use crate::core::io::error::FormatError;
use crate::core::io::xyz::Frames;
use crate::core::models::trajectory::Xyz;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{info, instrument};

/// One row of a trajectory summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSummary {
    pub frame: usize,
    pub atoms: usize,
    pub temperature: f64,
    pub total_energy: f64,
}

impl FrameSummary {
    fn of(index: usize, frame: &Xyz) -> Self {
        Self {
            frame: index,
            atoms: frame.atoms.len(),
            temperature: frame.temperature,
            total_energy: frame.total_energy(),
        }
    }
}

/// Summarizes every frame of a trajectory stream up to its end-of-stream marker.
///
/// # Errors
///
/// Propagates the first decoding error; no partial summary is returned.
#[instrument(skip_all, name = "trajectory_summary")]
pub fn summarize<R: BufRead>(
    reader: R,
    reporter: &ProgressReporter,
) -> Result<Vec<FrameSummary>, FormatError> {
    reporter.report(Progress::BatchStart {
        name: "Reading frames",
        total: None,
    });
    let mut summaries = Vec::new();
    for (index, frame) in Frames::new(reader).enumerate() {
        let frame = frame?;
        summaries.push(FrameSummary::of(index, &frame));
        reporter.report(Progress::ItemDone {
            label: format!("frame {}", index),
        });
    }
    reporter.report(Progress::BatchFinish);
    info!("Summarized {} frame(s).", summaries.len());
    Ok(summaries)
}

/// Reads frames until the one at zero-based `index`.
///
/// # Return
///
/// The requested frame, or `None` if the stream ends before it.
///
/// # Errors
///
/// Propagates the first decoding error, including one in a frame before `index`.
pub fn extract_frame<R: BufRead>(reader: R, index: usize) -> Result<Option<Xyz>, FormatError> {
    let mut frames = Frames::new(reader);
    seek_frame(&mut frames, index)
}

fn seek_frame<R: BufRead>(
    frames: &mut Frames<R>,
    index: usize,
) -> Result<Option<Xyz>, FormatError> {
    for (position, frame) in frames.enumerate() {
        let frame = frame?;
        if position == index {
            return Ok(Some(frame));
        }
    }
    Ok(None)
}

/// Path-based [`summarize`].
pub fn summarize_path(
    path: &Path,
    reporter: &ProgressReporter,
) -> Result<Vec<FrameSummary>, WorkflowError> {
    let reader = open(path)?;
    summarize(reader, reporter).map_err(|e| WorkflowError::read(path, e))
}

/// Path-based [`extract_frame`].
///
/// # Errors
///
/// Returns [`WorkflowError::Read`] for a decoding error at or before `index`, and
/// [`WorkflowError::FrameNotFound`] when the trajectory has fewer frames.
pub fn extract_frame_path(path: &Path, index: usize) -> Result<Xyz, WorkflowError> {
    let mut frames = Frames::new(open(path)?);
    match seek_frame(&mut frames, index) {
        Ok(Some(frame)) => Ok(frame),
        Ok(None) => Err(WorkflowError::FrameNotFound {
            index,
            available: frames.cursor().frames_read(),
        }),
        Err(e) => Err(WorkflowError::read(path, e)),
    }
}

/// Writes a single frame followed by the end-of-stream marker.
pub fn write_single_frame(frame: &Xyz, path: &Path) -> Result<(), WorkflowError> {
    let write = || -> Result<(), FormatError> {
        let mut writer = BufWriter::new(File::create(path)?);
        frame.write_frame(&mut writer)?;
        Xyz::write_terminator(&mut writer)?;
        writer.flush()?;
        Ok(())
    };
    write().map_err(|e| WorkflowError::write(path, e))
}

/// Writes summaries as CSV with a header row.
pub fn write_summary_csv<W: Write>(
    summaries: &[FrameSummary],
    writer: W,
) -> Result<(), WorkflowError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for summary in summaries {
        csv_writer.serialize(summary)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

fn open(path: &Path) -> Result<BufReader<File>, WorkflowError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| WorkflowError::read(path, e.into()))
}
