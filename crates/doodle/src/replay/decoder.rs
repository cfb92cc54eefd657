//! Single-step decoder for the recording format.

use thiserror::Error;

use crate::constants::COORD_FIELD_WIDTH;
use crate::record::Recording;
use crate::types::{Command, FillStyle};

/// Error decoding a recording. Decoding fails fast at the offending
/// offset rather than silently misreading subsequent bytes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unexpected end of recording at offset {offset}: expected {expected}")]
    UnexpectedEnd { offset: usize, expected: &'static str },
    #[error("malformed coordinate field {text:?} at offset {offset}")]
    BadCoordinate { offset: usize, text: String },
    #[error("fill style {found:?} at offset {offset} is not a palette digit")]
    BadFillStyle { offset: usize, found: char },
    #[error("unknown command tag {found:?} at offset {offset}")]
    UnknownTag { offset: usize, found: char },
}

/// Outcome of one decode step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStep {
    /// A decoded drawing command.
    Command(Command),
    /// A bare `l` tag. The tag-elision scheme makes it a marker consumed
    /// on its own step; the coordinates that follow belong to the next
    /// step's untagged pair.
    Marker,
    /// The cursor reached the end of the recording.
    Finished,
}

/// Cursor-driven decoder over a recording.
///
/// Each [`step`](Decoder::step) is indivisible and steps execute strictly
/// in recording order; later commands depend on the cursor position left
/// by earlier ones.
#[derive(Debug, Clone)]
pub struct Decoder {
    recording: Recording,
    cursor: usize,
}

impl Decoder {
    pub fn new(recording: Recording) -> Self {
        Self {
            recording,
            cursor: 0,
        }
    }

    pub fn recording(&self) -> &Recording {
        &self.recording
    }

    /// Current read offset into the recording text, in bytes.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor back to the start of the recording.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.recording.len()
    }

    /// Decode one step at the cursor.
    pub fn step(&mut self) -> Result<DecodeStep, DecodeError> {
        let bytes = self.recording.as_str().as_bytes();
        let Some(&tag) = bytes.get(self.cursor) else {
            return Ok(DecodeStep::Finished);
        };
        match tag {
            b'm' => {
                self.cursor += 1;
                let x = self.take_coord()?;
                let y = self.take_coord()?;
                Ok(DecodeStep::Command(Command::MoveTo { x, y }))
            }
            b'l' => {
                self.cursor += 1;
                Ok(DecodeStep::Marker)
            }
            b's' => {
                self.cursor += 1;
                let offset = self.cursor;
                let found = match bytes.get(offset) {
                    Some(&b) => b as char,
                    None => {
                        return Err(DecodeError::UnexpectedEnd {
                            offset,
                            expected: "fill style digit",
                        });
                    }
                };
                let style = found
                    .to_digit(10)
                    .and_then(|digit| FillStyle::from_index(digit as u8))
                    .ok_or(DecodeError::BadFillStyle { offset, found })?;
                self.cursor += 1;
                Ok(DecodeStep::Command(Command::SetFillStyle(style)))
            }
            b'f' => {
                self.cursor += 1;
                Ok(DecodeStep::Command(Command::Fill))
            }
            b'0'..=b'9' | b'-' => {
                // Untagged positional pair: the elided-repeat line case.
                let x = self.take_coord()?;
                let y = self.take_coord()?;
                Ok(DecodeStep::Command(Command::LineTo { x, y }))
            }
            other => Err(DecodeError::UnknownTag {
                offset: self.cursor,
                found: other as char,
            }),
        }
    }

    /// Adapt the decoder into an iterator over decoded commands,
    /// markers filtered out. Stops after the first error.
    pub fn commands(self) -> Commands {
        Commands {
            decoder: self,
            finished: false,
        }
    }

    /// Consume exactly one fixed-width coordinate field.
    fn take_coord(&mut self) -> Result<i32, DecodeError> {
        let offset = self.cursor;
        let end = offset + COORD_FIELD_WIDTH;
        let field = self
            .recording
            .as_str()
            .as_bytes()
            .get(offset..end)
            .ok_or(DecodeError::UnexpectedEnd {
                offset,
                expected: "3-character coordinate field",
            })?;
        let text = std::str::from_utf8(field).map_err(|_| DecodeError::BadCoordinate {
            offset,
            text: String::from_utf8_lossy(field).into_owned(),
        })?;
        let value = text.parse::<i32>().map_err(|_| DecodeError::BadCoordinate {
            offset,
            text: text.to_string(),
        })?;
        self.cursor = end;
        Ok(value)
    }
}

/// Iterator over the commands of a recording.
#[derive(Debug)]
pub struct Commands {
    decoder: Decoder,
    finished: bool,
}

impl Iterator for Commands {
    type Item = Result<Command, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            match self.decoder.step() {
                Ok(DecodeStep::Command(command)) => return Some(Ok(command)),
                Ok(DecodeStep::Marker) => continue,
                Ok(DecodeStep::Finished) => {
                    self.finished = true;
                    return None;
                }
                Err(err) => {
                    self.finished = true;
                    return Some(Err(err));
                }
            }
        }
    }
}
