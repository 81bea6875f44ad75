use super::error::{FieldErrorKind, FormatError};
use super::scalar::Record;
use std::io::{BufRead, ErrorKind};

/// Line source for the codecs.
///
/// Wraps a buffered reader, strips `\n` / `\r\n` terminators and keeps a 1-based count of
/// the lines handed out so errors can point into the file. The caller keeps ownership of
/// the underlying stream.
pub struct LineReader<R> {
    reader: R,
    line_number: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
        }
    }

    /// Number of the last line returned (0 before the first read).
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Reads the next line, or `None` at the end of input.
    pub fn try_next_line(&mut self) -> Result<Option<String>, FormatError> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).map_err(|e| match e.kind() {
            ErrorKind::InvalidData => {
                FormatError::malformed(self.line_number + 1, FieldErrorKind::InvalidText)
            }
            _ => FormatError::Io(e),
        })?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Reads a line the format requires to be present.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::TruncatedInput`] naming `expected` if the input is exhausted.
    pub fn next_line(&mut self, expected: &'static str) -> Result<String, FormatError> {
        self.try_next_line()?.ok_or(FormatError::TruncatedInput {
            line: self.line_number,
            expected,
        })
    }

    /// Reads a required line and runs `parse` over its whitespace-separated fields.
    pub fn next_record<T>(
        &mut self,
        expected: &'static str,
        parse: impl FnOnce(&mut Record<'_>) -> Result<T, FormatError>,
    ) -> Result<T, FormatError> {
        let line = self.next_line(expected)?;
        let mut record = Record::new(self.line_number, &line);
        parse(&mut record)
    }
}
