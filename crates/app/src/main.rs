//! Scrawl - headless doodle capture, replay, and export

use std::fs::File;
use std::io::BufWriter;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use doodle::export;
use doodle::raster::RasterSurface;
use doodle::replay::{Decoder, ReplayOutcome, Robot};
use scrawl_config::{CanvasConfig, ReplayConfig};

mod demo;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let canvas_config = CanvasConfig::default();
    let replay_config = ReplayConfig::default();

    // Capture a scripted session in place of live pen input.
    let recording = demo::scripted_doodle(&canvas_config);
    info!(
        bytes = recording.len(),
        "captured doodle: {}",
        recording.as_str()
    );

    let commands = Decoder::new(recording.clone())
        .commands()
        .collect::<Result<Vec<_>, _>>()?;

    // Batched replay.
    let mut runner = Robot::new(
        RasterSurface::new(canvas_config.width, canvas_config.height),
        recording.clone(),
    );
    match runner.run().await? {
        ReplayOutcome::Completed => info!("batched replay complete"),
        ReplayOutcome::Busy => unreachable!("fresh robot cannot be busy"),
    }

    // Paced replay onto a second surface, simulating the hand motion.
    let mut hand = Robot::new(
        RasterSurface::new(canvas_config.width, canvas_config.height),
        recording.clone(),
    );
    let interval = Duration::from_millis(replay_config.hand_draw_interval_ms);
    match hand.hand_draw(interval).await? {
        ReplayOutcome::Completed => info!(interval_ms = replay_config.hand_draw_interval_ms, "paced replay complete"),
        ReplayOutcome::Busy => unreachable!("fresh robot cannot be busy"),
    }

    // Pacing must not change the final image.
    if runner.surface().as_bytes() != hand.surface().as_bytes() {
        return Err("batched and paced replays disagree".into());
    }

    let png = File::create("doodle.png")?;
    export::write_png(runner.surface(), BufWriter::new(png))?;

    let manifest = serde_json::json!({
        "width": canvas_config.width,
        "height": canvas_config.height,
        "commands": commands.len(),
        "recording_bytes": recording.len(),
        "recording": recording.as_str(),
    });
    std::fs::write("doodle.json", serde_json::to_string_pretty(&manifest)?)?;
    info!("wrote doodle.png and doodle.json");

    Ok(())
}
