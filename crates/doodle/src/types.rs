use serde::{Deserialize, Serialize};

/// One drawing primitive in a recording.
///
/// Coordinates are integer pixels on the capture surface. Values outside
/// the surface rectangle survive encoding (clamped to the representable
/// range) without corrupting the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Begin a new subpath at the given point.
    MoveTo { x: i32, y: i32 },
    /// Extend the current subpath to the given point.
    LineTo { x: i32, y: i32 },
    /// Change the fill style used by subsequent fills.
    SetFillStyle(FillStyle),
    /// Fill the current subpath with the active fill style.
    Fill,
}

/// Fixed fill-style palette, addressed by a single encoded digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum FillStyle {
    /// No paint. As an active style this is inert (see [`FillStyle::color`]).
    #[default]
    None = 0,
    /// Black at 50% alpha.
    BlackTranslucent = 1,
    /// Opaque black.
    Black = 2,
    /// White at 50% alpha.
    WhiteTranslucent = 3,
    /// Opaque white.
    White = 4,
}

impl FillStyle {
    /// Number of palette entries.
    pub const COUNT: u8 = 5;

    /// Palette index, the digit used in the recording encoding.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Look up a palette entry by its encoded digit.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::None),
            1 => Some(Self::BlackTranslucent),
            2 => Some(Self::Black),
            3 => Some(Self::WhiteTranslucent),
            4 => Some(Self::White),
            _ => None,
        }
    }

    /// RGBA color of this style, or `None` for the paintless entry.
    pub fn color(self) -> Option<[f32; 4]> {
        match self {
            Self::None => None,
            Self::BlackTranslucent => Some([0.0, 0.0, 0.0, 0.5]),
            Self::Black => Some([0.0, 0.0, 0.0, 1.0]),
            Self::WhiteTranslucent => Some([1.0, 1.0, 1.0, 0.5]),
            Self::White => Some([1.0, 1.0, 1.0, 1.0]),
        }
    }

    /// Human-readable label for UI display.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::BlackTranslucent => "black (50% transparent)",
            Self::Black => "black",
            Self::WhiteTranslucent => "white (50% transparent)",
            Self::White => "white",
        }
    }

    /// CSS class name for the style icon.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::BlackTranslucent => "black-t",
            Self::Black => "black",
            Self::WhiteTranslucent => "white-t",
            Self::White => "white",
        }
    }

    /// The next entry in palette toggle order, wrapping after the last.
    pub fn next(self) -> Self {
        Self::from_index((self.index() + 1) % Self::COUNT).unwrap_or(Self::None)
    }
}
