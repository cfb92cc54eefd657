//! Replay engine driving a recording back onto a drawing surface.

use std::time::Duration;

use tracing::debug;

use crate::constants::RUN_CHUNK_STEPS;
use crate::record::Recording;
use crate::surface::DrawSurface;
use crate::types::{Command, FillStyle};

use super::decoder::{DecodeStep, Decoder};
use super::DecodeError;

/// Replay progress state. `Running` is the locked state that rejects
/// overlapping replays of the same robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplayState {
    #[default]
    Idle,
    Running,
    Done,
}

/// Outcome of a replay driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum ReplayOutcome {
    /// The whole recording was decoded and drawn.
    Completed,
    /// Another replay was already in flight; nothing was done and the
    /// in-progress cursor was left untouched.
    Busy,
}

impl ReplayOutcome {
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Busy)
    }
}

/// Replays one recording onto one surface.
///
/// The robot owns the surface, the recording, and a replay cursor. The
/// two drivers share the single-step decoder and differ only in
/// scheduling: [`run`](Robot::run) decodes in batches and yields to the
/// scheduler between them, [`hand_draw`](Robot::hand_draw) takes exactly
/// one step per timer tick to simulate the original hand motion. Either
/// way the final surface matches an uninterrupted replay.
///
/// The pump API ([`start`](Robot::start) / [`step`](Robot::step) /
/// [`cancel`](Robot::cancel)) is public for embedders that drive the
/// replay from their own loop.
pub struct Robot<S> {
    surface: S,
    decoder: Decoder,
    state: ReplayState,
    fill_style: FillStyle,
}

impl<S: DrawSurface> Robot<S> {
    pub fn new(surface: S, recording: Recording) -> Self {
        Self {
            surface,
            decoder: Decoder::new(recording),
            state: ReplayState::Idle,
            fill_style: FillStyle::BlackTranslucent,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Take the surface back, discarding the robot.
    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn recording(&self) -> &Recording {
        self.decoder.recording()
    }

    pub fn state(&self) -> ReplayState {
        self.state
    }

    /// Whether a replay is in flight (the locked flag).
    pub fn is_running(&self) -> bool {
        self.state == ReplayState::Running
    }

    /// Current decode offset, for progress reporting.
    pub fn cursor(&self) -> usize {
        self.decoder.cursor()
    }

    /// Begin a replay from the start of the recording.
    ///
    /// Resets the cursor, clears the surface, and resets the active fill
    /// style. Returns `false` without touching anything if a replay is
    /// already in flight.
    #[must_use]
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            debug!("replay already in flight, rejecting start");
            return false;
        }
        self.decoder.reset();
        // A cleared surface paints with the default translucent black
        // until the recording says otherwise.
        self.fill_style = FillStyle::BlackTranslucent;
        self.surface.clear();
        self.state = ReplayState::Running;
        true
    }

    /// Execute one indivisible decode-and-draw step.
    ///
    /// Returns `Ok(true)` while more steps remain, `Ok(false)` once the
    /// end of the recording is reached (the locked state is left exactly
    /// once, at that moment). A decode error unlocks the robot and
    /// propagates.
    pub fn step(&mut self) -> Result<bool, DecodeError> {
        if !self.is_running() {
            return Ok(false);
        }
        match self.decoder.step() {
            Ok(DecodeStep::Command(command)) => self.apply(command),
            Ok(DecodeStep::Marker) => {}
            Ok(DecodeStep::Finished) => {
                self.state = ReplayState::Done;
                return Ok(false);
            }
            Err(err) => {
                self.state = ReplayState::Idle;
                return Err(err);
            }
        }
        if self.decoder.is_finished() {
            self.state = ReplayState::Done;
            return Ok(false);
        }
        Ok(true)
    }

    /// Stop an in-flight replay and unlock the robot.
    ///
    /// The surface keeps whatever has been drawn so far.
    pub fn cancel(&mut self) {
        if self.is_running() {
            debug!(cursor = self.decoder.cursor(), "replay cancelled");
            self.state = ReplayState::Idle;
        }
    }

    /// Replay the whole recording, yielding to the scheduler after every
    /// [`RUN_CHUNK_STEPS`] decode steps so a long recording cannot hog
    /// the thread.
    pub async fn run(&mut self) -> Result<ReplayOutcome, DecodeError> {
        if !self.start() {
            return Ok(ReplayOutcome::Busy);
        }
        let mut steps = 0usize;
        while self.step()? {
            steps += 1;
            if steps % RUN_CHUNK_STEPS == 0 {
                tokio::task::yield_now().await;
            }
        }
        debug!(steps, "batched replay complete");
        Ok(ReplayOutcome::Completed)
    }

    /// Replay the recording one decode step per timer tick, simulating
    /// the original hand motion.
    pub async fn hand_draw(&mut self, interval: Duration) -> Result<ReplayOutcome, DecodeError> {
        if !self.start() {
            return Ok(ReplayOutcome::Busy);
        }
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            if !self.step()? {
                break;
            }
        }
        debug!(interval_ms = interval.as_millis() as u64, "paced replay complete");
        Ok(ReplayOutcome::Completed)
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::MoveTo { x, y } => {
                // New subpath with a 1-unit stub segment, so a lone pen
                // tap stays visible, matching capture-time behavior.
                self.surface.begin_path();
                self.surface.move_to(x, y);
                self.surface.line_to(x + 1, y + 1);
                self.surface.stroke();
            }
            Command::LineTo { x, y } => {
                self.surface.line_to(x, y);
                self.surface.stroke();
            }
            Command::SetFillStyle(style) => {
                // The paintless palette entry leaves the active style
                // untouched, like an invalid color assignment would.
                if style.color().is_some() {
                    self.fill_style = style;
                }
            }
            Command::Fill => {
                self.surface.fill(self.fill_style);
            }
        }
    }
}
