//! Stroke recorder producing the compact command encoding.

use crate::types::FillStyle;

use super::encoding::{pad_coord, PadMode, Recording};

/// Kind of the most recently recorded command, used to decide whether a
/// positional command must (re-)emit its tag character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Move,
    Line,
    Style,
    Fill,
}

/// Builds a [`Recording`] from drawing primitives as they occur.
///
/// The encoding dedupes repeated command tags: consecutive `line_to`
/// calls emit their `l` tag once and rely on fixed-width coordinate
/// fields to split the pairs back out. A `set_fill_style` is not
/// appended immediately; at most one deferred style tag is held and
/// flushed right before the next buffer mutation, so a style toggled
/// several times mid-stroke costs a single tag.
///
/// # Example
///
/// ```
/// use doodle::record::StrokeRecorder;
///
/// let mut recorder = StrokeRecorder::new();
/// recorder.move_to(5, 5);
/// recorder.line_to(10, 5);
/// recorder.line_to(15, 5);
/// recorder.set_fill_style(doodle::types::FillStyle::Black);
/// recorder.fill();
/// assert_eq!(recorder.finish().as_str(), "m005005l010005015005s2f");
/// ```
#[derive(Debug, Default)]
pub struct StrokeRecorder {
    buffer: Recording,
    /// At most one deferred style tag (`s` + digit).
    pending: Option<String>,
    last: Option<CommandKind>,
    mode: PadMode,
}

impl StrokeRecorder {
    /// Create a recorder using the fixed-width coordinate encoding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder with an explicit coordinate padding mode.
    pub fn with_pad_mode(mode: PadMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Begin a new subpath. A move always re-emits its tag.
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.flush_pending();
        self.buffer.push('m');
        self.push_point(x, y);
        self.last = Some(CommandKind::Move);
    }

    /// Extend the current subpath. The `l` tag is elided while the
    /// previous recorded command was also a line.
    pub fn line_to(&mut self, x: i32, y: i32) {
        self.flush_pending();
        if self.last != Some(CommandKind::Line) {
            self.buffer.push('l');
            self.last = Some(CommandKind::Line);
        }
        self.push_point(x, y);
    }

    /// Change the fill style for subsequent fills.
    ///
    /// The tag is deferred; a later call before any other command
    /// overwrites it, so only the style actually in effect is recorded.
    pub fn set_fill_style(&mut self, style: FillStyle) {
        self.pending = Some(format!("s{}", style.index()));
        self.last = Some(CommandKind::Style);
    }

    /// Fill the current subpath with the active style.
    pub fn fill(&mut self) {
        self.flush_pending();
        self.buffer.push('f');
        self.last = Some(CommandKind::Fill);
    }

    /// Encoded text recorded so far, including nothing still deferred.
    pub fn as_str(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty() && self.pending.is_none()
    }

    /// Finish the capture session and return the recording.
    ///
    /// A still-deferred style tag is flushed so the recording stays
    /// lossless; it decodes as a trailing style change.
    pub fn finish(mut self) -> Recording {
        self.flush_pending();
        self.buffer
    }

    fn flush_pending(&mut self) {
        if let Some(tag) = self.pending.take() {
            self.buffer.push_str(&tag);
        }
    }

    fn push_point(&mut self, x: i32, y: i32) {
        self.buffer.push_str(&pad_coord(x, self.mode));
        self.buffer.push_str(&pad_coord(y, self.mode));
    }
}
