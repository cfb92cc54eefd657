//! Coordinate field encoding and the recording buffer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{COORD_MAX, COORD_MIN};

/// How coordinates are padded into encoded fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PadMode {
    /// Every field is exactly 3 characters; values are clamped to
    /// `-99..=999`. The default for new recordings.
    #[default]
    Fixed,
    /// Byte-for-byte the historical encoder, preserved for replaying
    /// existing recordings. Its boundary cases emit 4-character fields
    /// (`-100`, `-010`, `1000`) that a fixed-width decoder cannot
    /// consume; see the width tests pinning this.
    Compat,
}

/// Encode one integer coordinate as a padded field.
pub fn pad_coord(value: i32, mode: PadMode) -> String {
    match mode {
        PadMode::Fixed => {
            let clamped = value.clamp(COORD_MIN, COORD_MAX);
            if clamped < 0 {
                format!("-{:02}", -clamped)
            } else {
                format!("{clamped:03}")
            }
        }
        PadMode::Compat => {
            if value < -100 {
                "-99".to_string()
            } else if value < -10 {
                format!("-{}", -value)
            } else if value < 0 {
                format!("-0{}", -value)
            } else if value < 10 {
                format!("00{value}")
            } else if value < 100 {
                format!("0{value}")
            } else if value > 1000 {
                "999".to_string()
            } else {
                format!("{value}")
            }
        }
    }
}

/// A serialized command sequence capturing a drawing session.
///
/// Built once per capture session by the recorder, immutable afterwards,
/// and handed whole to any number of replay robots. The string itself is
/// the persisted/transmitted artifact; there is no framing around it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recording(String);

impl Recording {
    /// Create an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap previously persisted recording text.
    pub fn from_string(text: String) -> Self {
        Self(text)
    }

    /// The encoded text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the encoded text in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unwrap into the raw encoded string.
    pub fn into_string(self) -> String {
        self.0
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.0.push_str(text);
    }

    pub(crate) fn push(&mut self, ch: char) {
        self.0.push(ch);
    }
}

impl fmt::Display for Recording {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Recording {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Recording {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}
