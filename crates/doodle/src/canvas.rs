//! Pen capture pipeline
//!
//! This module provides the headless capture workflow: pen input comes in
//! via `pen_down`, `pen_move`, `pen_up`, each sample is drawn to the
//! surface and recorded, and `finish` yields the recording. Event-source
//! wiring (mouse, touch, whatever hosts the widget) stays external and
//! feeds coordinates in.

use tracing::debug;

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::record::{Recording, StrokeRecorder};
use crate::surface::DrawSurface;
use crate::types::FillStyle;

/// Capture pipeline for one doodling session.
///
/// Owns the surface being drawn on and the recorder building the
/// session's [`Recording`]. Pen samples outside the capture rectangle
/// are dropped, not clamped, so a stroke that wanders off the surface
/// resumes where it re-enters.
pub struct DoodleCanvas<S> {
    surface: S,
    recorder: StrokeRecorder,
    fill_style: FillStyle,
    active: bool,
    /// Where the active stroke began; a fill closes back to it.
    start: (i32, i32),
}

impl<S: DrawSurface> DoodleCanvas<S> {
    /// Create a capture session over a surface, clearing it first.
    pub fn new(mut surface: S) -> Self {
        surface.clear();
        Self {
            surface,
            recorder: StrokeRecorder::new(),
            fill_style: FillStyle::None,
            active: false,
            start: (0, 0),
        }
    }

    /// Press the pen down: begin a subpath with a 1-unit stub segment so
    /// a lone tap leaves a mark.
    pub fn pen_down(&mut self, x: i32, y: i32) {
        self.surface.begin_path();
        self.surface.move_to(x, y);
        self.surface.line_to(x + 1, y + 1);
        self.surface.stroke();
        self.recorder.move_to(x, y);
        self.start = (x, y);
        self.active = true;
    }

    /// Drag the pen. Ignored while the pen is up; samples outside the
    /// capture rectangle are dropped.
    pub fn pen_move(&mut self, x: i32, y: i32) {
        if !self.active {
            return;
        }
        if !in_bounds(x, y) {
            debug!(x, y, "pen sample outside capture bounds, dropped");
            return;
        }
        self.surface.line_to(x, y);
        self.surface.stroke();
        self.recorder.line_to(x, y);
    }

    /// Lift the pen. With a fill style active, the stroke closes back to
    /// its origin and fills.
    pub fn pen_up(&mut self) {
        if !self.active {
            return;
        }
        if self.fill_style != FillStyle::None {
            let (x, y) = self.start;
            self.surface.line_to(x, y);
            self.recorder.line_to(x, y);
            self.surface.fill(self.fill_style);
            self.recorder.fill();
        }
        self.active = false;
    }

    /// Cycle to the next fill style and record the change. Returns the
    /// new style so the embedder can update its label and icon.
    pub fn toggle_fill_style(&mut self) -> FillStyle {
        self.fill_style = self.fill_style.next();
        self.recorder.set_fill_style(self.fill_style);
        self.fill_style
    }

    pub fn fill_style(&self) -> FillStyle {
        self.fill_style
    }

    /// Whether a stroke is currently in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Encoded text recorded so far.
    pub fn recorded(&self) -> &str {
        self.recorder.as_str()
    }

    /// End the session, returning the surface and the recording.
    pub fn finish(self) -> (S, Recording) {
        (self.surface, self.recorder.finish())
    }
}

/// The capture gate: x spans the full surface width inclusive, y
/// excludes the top edge (historical capture behavior, kept so
/// recordings match the original widget's).
fn in_bounds(x: i32, y: i32) -> bool {
    x >= 0 && x <= CANVAS_WIDTH as i32 && y > 0 && y <= CANVAS_HEIGHT as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{SurfaceOp, TraceSurface};

    #[test]
    fn capture_session_records_the_reference_encoding() {
        let mut canvas = DoodleCanvas::new(TraceSurface::new());
        canvas.pen_down(5, 5);
        canvas.pen_move(10, 5);
        canvas.pen_move(15, 5);
        canvas.pen_up();
        let (_, recording) = canvas.finish();
        assert_eq!(recording.as_str(), "m005005l010005015005");
    }

    #[test]
    fn fill_style_closes_and_fills_on_pen_up() {
        let mut canvas = DoodleCanvas::new(TraceSurface::new());
        let style = canvas.toggle_fill_style();
        assert_eq!(style, FillStyle::BlackTranslucent);
        canvas.pen_down(5, 5);
        canvas.pen_move(10, 5);
        canvas.pen_up();
        let (surface, recording) = canvas.finish();
        // The deferred style tag flushes ahead of the stroke that
        // follows it, and the closing line elides its repeated tag.
        assert_eq!(recording.as_str(), "s1m005005l010005005005f");
        assert_eq!(
            surface.ops().last(),
            Some(&SurfaceOp::Fill {
                style: FillStyle::BlackTranslucent
            })
        );
    }

    #[test]
    fn moves_while_pen_up_are_ignored() {
        let mut canvas = DoodleCanvas::new(TraceSurface::new());
        canvas.pen_move(10, 10);
        assert_eq!(canvas.recorded(), "");
        assert!(!canvas.is_active());
    }

    #[test]
    fn out_of_bounds_samples_are_dropped() {
        let mut canvas = DoodleCanvas::new(TraceSurface::new());
        canvas.pen_down(5, 5);
        canvas.pen_move(600, 5);
        canvas.pen_move(5, 0);
        canvas.pen_move(10, 10);
        canvas.pen_up();
        let (_, recording) = canvas.finish();
        assert_eq!(recording.as_str(), "m005005l010010");
    }

    #[test]
    fn toggle_cycles_and_is_recorded_once_per_flush() {
        let mut canvas = DoodleCanvas::new(TraceSurface::new());
        assert_eq!(canvas.toggle_fill_style(), FillStyle::BlackTranslucent);
        assert_eq!(canvas.toggle_fill_style(), FillStyle::Black);
        canvas.pen_down(0, 0);
        // Only the style in effect when the stroke began is in the text.
        assert_eq!(canvas.recorded(), "s2m000000");
    }

    #[test]
    fn capture_surface_sees_the_stub_segment() {
        let mut canvas = DoodleCanvas::new(TraceSurface::new());
        canvas.pen_down(5, 5);
        assert_eq!(
            canvas.surface().ops(),
            &[
                SurfaceOp::Clear,
                SurfaceOp::BeginPath,
                SurfaceOp::MoveTo { x: 5, y: 5 },
                SurfaceOp::LineTo { x: 6, y: 6 },
                SurfaceOp::Stroke,
            ]
        );
    }
}
