//! Scripted capture session standing in for live pen input.

use doodle::canvas::DoodleCanvas;
use doodle::raster::RasterSurface;
use doodle::record::Recording;
use scrawl_config::CanvasConfig;

/// Capture a small house doodle: outlined walls, a filled roof, and an
/// outlined door. Exercises every recorded primitive, including the
/// deferred style-tag overwrite when the fill mode is toggled several
/// times between strokes.
pub fn scripted_doodle(config: &CanvasConfig) -> Recording {
    let mut canvas = DoodleCanvas::new(RasterSurface::new(config.width, config.height));

    // Walls.
    canvas.pen_down(180, 200);
    for (x, y) in [(320, 200), (320, 120), (180, 120), (180, 200)] {
        canvas.pen_move(x, y);
    }
    canvas.pen_up();

    // Roof, filled with translucent black.
    canvas.toggle_fill_style();
    canvas.pen_down(170, 120);
    canvas.pen_move(250, 60);
    canvas.pen_move(330, 120);
    canvas.pen_up();

    // Back to no fill for the door; only the final style survives in
    // the recording.
    for _ in 0..4 {
        canvas.toggle_fill_style();
    }
    canvas.pen_down(235, 200);
    canvas.pen_move(235, 160);
    canvas.pen_move(265, 160);
    canvas.pen_move(265, 200);
    canvas.pen_up();

    let (_, recording) = canvas.finish();
    recording
}

#[cfg(test)]
mod tests {
    use super::*;
    use doodle::replay::Decoder;
    use doodle::types::Command;

    #[test]
    fn scripted_doodle_decodes_cleanly() {
        let recording = scripted_doodle(&CanvasConfig::default());
        let commands: Vec<Command> = Decoder::new(recording)
            .commands()
            .collect::<Result<_, _>>()
            .unwrap();
        assert!(matches!(commands.first(), Some(Command::MoveTo { .. })));
        assert!(commands.contains(&Command::Fill));
    }
}
