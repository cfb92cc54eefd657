//! Drawing surface contract consumed by capture and replay.

use serde::{Deserialize, Serialize};

use crate::types::FillStyle;

/// The subset of a 2D drawing context the doodle primitives touch.
///
/// Implementations own the path state accumulated between `begin_path`
/// and the `stroke`/`fill` that renders it. The doodle core never needs
/// pixel-level access through this trait; pixel export is a separate
/// concern of the concrete surface.
pub trait DrawSurface {
    /// Discard the current path and start a new one.
    fn begin_path(&mut self);
    /// Start a subpath at the given point.
    fn move_to(&mut self, x: i32, y: i32);
    /// Extend the current subpath to the given point.
    fn line_to(&mut self, x: i32, y: i32);
    /// Stroke every segment of the current subpath with pen ink.
    fn stroke(&mut self);
    /// Fill the current subpath with the given style.
    fn fill(&mut self, style: FillStyle);
    /// Reset the whole surface to the background color.
    fn clear(&mut self);
}

/// One observed surface call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceOp {
    BeginPath,
    MoveTo { x: i32, y: i32 },
    LineTo { x: i32, y: i32 },
    Stroke,
    Fill { style: FillStyle },
    Clear,
}

/// A surface that records calls instead of painting.
///
/// Replaying a recording onto a `TraceSurface` yields the exact draw-call
/// sequence, which is how the equivalence properties of the format are
/// checked (round-trip, chunking transparency, idempotent replay).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceSurface {
    ops: Vec<SurfaceOp>,
}

impl TraceSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls observed so far, in order.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<SurfaceOp> {
        self.ops
    }
}

impl DrawSurface for TraceSurface {
    fn begin_path(&mut self) {
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.ops.push(SurfaceOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: i32, y: i32) {
        self.ops.push(SurfaceOp::LineTo { x, y });
    }

    fn stroke(&mut self) {
        self.ops.push(SurfaceOp::Stroke);
    }

    fn fill(&mut self, style: FillStyle) {
        self.ops.push(SurfaceOp::Fill { style });
    }

    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }
}
