//! Stroke recording for the scrawl doodling system.
//!
//! This module provides:
//! - [`Recording`] - The serialized command sequence (the wire format)
//! - [`StrokeRecorder`] - Builder turning drawing primitives into a recording
//! - [`pad_coord`] / [`PadMode`] - The fixed-width coordinate field encoding
//!
//! ## Recording format
//!
//! The recording is a single ASCII string of commands:
//!
//! ```text
//! m<x><y>        begin subpath        (tag always emitted)
//! l<x><y>...     extend subpath       (tag elided on repeats)
//! s<digit>       set fill style       (deferred until the next command)
//! f              fill subpath
//! ```
//!
//! Each coordinate is a padded field, exactly 3 characters in the default
//! [`PadMode::Fixed`] encoding, so the decoder consumes a constant width
//! regardless of sign or magnitude.

mod encoding;
mod recorder;

pub use encoding::{pad_coord, PadMode, Recording};
pub use recorder::StrokeRecorder;
