//! Replay for the scrawl doodling system.
//!
//! This module provides:
//! - [`Decoder`] - Single-step state machine over the recording text
//! - [`Robot`] - Replay engine owning one surface and one recording
//! - [`DecodeError`] - Fail-fast errors for malformed recordings
//!
//! A robot replays either in batches (yielding to the scheduler every
//! [`crate::constants::RUN_CHUNK_STEPS`] steps) or one step per timer
//! tick. Scheduling never changes the final drawn result, only pacing.

mod decoder;
mod robot;

pub use decoder::{Commands, DecodeError, DecodeStep, Decoder};
pub use robot::{ReplayOutcome, ReplayState, Robot};

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::record::{Recording, StrokeRecorder};
    use crate::surface::{SurfaceOp, TraceSurface};
    use crate::types::{Command, FillStyle};

    fn reference_recording() -> Recording {
        Recording::from("m005005l010005015005s2f")
    }

    #[test]
    fn decodes_the_reference_recording() {
        let commands: Vec<Command> = Decoder::new(reference_recording())
            .commands()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            commands,
            vec![
                Command::MoveTo { x: 5, y: 5 },
                Command::LineTo { x: 10, y: 5 },
                Command::LineTo { x: 15, y: 5 },
                Command::SetFillStyle(FillStyle::Black),
                Command::Fill,
            ]
        );
    }

    #[test]
    fn bare_line_tag_is_a_marker_step() {
        let mut decoder = Decoder::new(Recording::from("l010005"));
        assert_eq!(decoder.step().unwrap(), DecodeStep::Marker);
        assert_eq!(
            decoder.step().unwrap(),
            DecodeStep::Command(Command::LineTo { x: 10, y: 5 })
        );
        assert_eq!(decoder.step().unwrap(), DecodeStep::Finished);
    }

    #[test]
    fn decodes_negative_fixed_width_coordinates() {
        let commands: Vec<Command> = Decoder::new(Recording::from("m-09-42"))
            .commands()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(commands, vec![Command::MoveTo { x: -9, y: -42 }]);
    }

    #[test]
    fn round_trips_recorder_output() {
        let mut recorder = StrokeRecorder::new();
        recorder.move_to(5, 5);
        recorder.line_to(10, 5);
        recorder.line_to(15, 5);
        recorder.set_fill_style(FillStyle::Black);
        recorder.line_to(5, 5);
        recorder.fill();
        recorder.move_to(100, 200);
        recorder.line_to(101, 201);

        let recording = recorder.finish();
        let commands: Vec<Command> = Decoder::new(recording)
            .commands()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            commands,
            vec![
                Command::MoveTo { x: 5, y: 5 },
                Command::LineTo { x: 10, y: 5 },
                Command::LineTo { x: 15, y: 5 },
                Command::SetFillStyle(FillStyle::Black),
                Command::LineTo { x: 5, y: 5 },
                Command::Fill,
                Command::MoveTo { x: 100, y: 200 },
                Command::LineTo { x: 101, y: 201 },
            ]
        );
    }

    #[test]
    fn truncated_coordinate_fails_with_offset() {
        let err = Decoder::new(Recording::from("m0050"))
            .commands()
            .next()
            .unwrap()
            .unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnexpectedEnd {
                offset: 4,
                expected: "3-character coordinate field",
            }
        );
    }

    #[test]
    fn unknown_tag_fails_with_offset() {
        let err = Decoder::new(Recording::from("m005005x"))
            .commands()
            .nth(1)
            .unwrap()
            .unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnknownTag {
                offset: 7,
                found: 'x',
            }
        );
    }

    #[test]
    fn fill_style_digit_outside_palette_fails() {
        let err = Decoder::new(Recording::from("s7"))
            .commands()
            .next()
            .unwrap()
            .unwrap_err();
        assert_eq!(
            err,
            DecodeError::BadFillStyle {
                offset: 1,
                found: '7',
            }
        );
    }

    #[test]
    fn garbage_coordinate_field_fails() {
        let err = Decoder::new(Recording::from("m0a5005"))
            .commands()
            .next()
            .unwrap()
            .unwrap_err();
        assert_eq!(
            err,
            DecodeError::BadCoordinate {
                offset: 1,
                text: "0a5".to_string(),
            }
        );
    }

    fn pump_to_completion(robot: &mut Robot<TraceSurface>) {
        assert!(robot.start());
        while robot.step().unwrap() {}
    }

    #[test]
    fn replay_emits_capture_time_draw_calls() {
        let mut robot = Robot::new(TraceSurface::new(), reference_recording());
        pump_to_completion(&mut robot);
        assert_eq!(
            robot.surface().ops(),
            &[
                SurfaceOp::Clear,
                SurfaceOp::BeginPath,
                SurfaceOp::MoveTo { x: 5, y: 5 },
                SurfaceOp::LineTo { x: 6, y: 6 },
                SurfaceOp::Stroke,
                SurfaceOp::LineTo { x: 10, y: 5 },
                SurfaceOp::Stroke,
                SurfaceOp::LineTo { x: 15, y: 5 },
                SurfaceOp::Stroke,
                SurfaceOp::Fill {
                    style: FillStyle::Black
                },
            ]
        );
        assert_eq!(robot.state(), ReplayState::Done);
        assert!(!robot.is_running());
    }

    #[test]
    fn paintless_style_leaves_active_fill_unchanged() {
        let mut robot = Robot::new(TraceSurface::new(), Recording::from("m005005s0f"));
        pump_to_completion(&mut robot);
        assert_eq!(
            robot.surface().ops().last(),
            Some(&SurfaceOp::Fill {
                style: FillStyle::BlackTranslucent
            })
        );
    }

    #[test]
    fn replay_is_idempotent_across_fresh_surfaces() {
        let mut first = Robot::new(TraceSurface::new(), reference_recording());
        let mut second = Robot::new(TraceSurface::new(), reference_recording());
        pump_to_completion(&mut first);
        pump_to_completion(&mut second);
        assert_eq!(first.surface().ops(), second.surface().ops());
    }

    #[test]
    fn restarting_a_finished_robot_redraws_from_scratch() {
        let mut robot = Robot::new(TraceSurface::new(), reference_recording());
        pump_to_completion(&mut robot);
        let first_pass = robot.surface().ops().to_vec();
        pump_to_completion(&mut robot);
        assert_eq!(robot.surface().ops().len(), first_pass.len() * 2);
        assert_eq!(&robot.surface().ops()[first_pass.len()..], &first_pass[..]);
    }

    #[test]
    fn start_while_running_is_a_rejected_no_op() {
        let mut robot = Robot::new(TraceSurface::new(), reference_recording());
        assert!(robot.start());
        assert!(robot.step().unwrap());
        let cursor = robot.cursor();
        let drawn = robot.surface().ops().len();

        assert!(!robot.start());
        assert_eq!(robot.cursor(), cursor);
        assert_eq!(robot.surface().ops().len(), drawn);
        assert!(robot.is_running());
    }

    #[test]
    fn cancel_unlocks_and_keeps_partial_drawing() {
        let mut robot = Robot::new(TraceSurface::new(), reference_recording());
        assert!(robot.start());
        assert!(robot.step().unwrap());
        robot.cancel();
        assert!(!robot.is_running());
        assert_eq!(robot.state(), ReplayState::Idle);
        assert!(!robot.surface().ops().is_empty());
    }

    #[test]
    fn empty_recording_completes_immediately() {
        let mut robot = Robot::new(TraceSurface::new(), Recording::new());
        assert!(robot.start());
        assert!(!robot.step().unwrap());
        assert!(!robot.is_running());
        assert_eq!(robot.surface().ops(), &[SurfaceOp::Clear]);
    }

    #[test]
    fn decode_error_unlocks_the_robot() {
        let mut robot = Robot::new(TraceSurface::new(), Recording::from("m00"));
        assert!(robot.start());
        robot.step().unwrap_err();
        assert!(!robot.is_running());
    }

    #[tokio::test]
    async fn run_completes_and_unlocks() {
        let mut robot = Robot::new(TraceSurface::new(), reference_recording());
        let outcome = robot.run().await.unwrap();
        assert_eq!(outcome, ReplayOutcome::Completed);
        assert!(!robot.is_running());
    }

    #[tokio::test]
    async fn run_on_empty_recording_does_not_hang() {
        let mut robot = Robot::new(TraceSurface::new(), Recording::new());
        let outcome = robot.run().await.unwrap();
        assert_eq!(outcome, ReplayOutcome::Completed);
        assert_eq!(robot.surface().ops(), &[SurfaceOp::Clear]);
    }

    #[tokio::test]
    async fn run_while_started_reports_busy() {
        let mut robot = Robot::new(TraceSurface::new(), reference_recording());
        assert!(robot.start());
        let outcome = robot.run().await.unwrap();
        assert!(outcome.is_busy());
        // The pump-driven replay is still live and can continue.
        assert!(robot.is_running());
        while robot.step().unwrap() {}
        assert!(!robot.is_running());
    }

    // Chunking transparency: a recording long enough to cross the
    // 750-step yield boundary draws the same call sequence as
    // uninterrupted stepping.
    #[tokio::test]
    async fn chunked_run_matches_uninterrupted_stepping() {
        let mut recorder = StrokeRecorder::new();
        recorder.move_to(0, 0);
        for i in 0..900 {
            recorder.line_to(i % 500, i % 250);
        }
        let recording = recorder.finish();

        let mut pumped = Robot::new(TraceSurface::new(), recording.clone());
        pump_to_completion(&mut pumped);

        let mut batched = Robot::new(TraceSurface::new(), recording);
        let outcome = batched.run().await.unwrap();
        assert_eq!(outcome, ReplayOutcome::Completed);

        assert_eq!(batched.surface().ops(), pumped.surface().ops());
    }

    #[tokio::test(start_paused = true)]
    async fn hand_draw_takes_one_step_per_tick() {
        let mut robot = Robot::new(TraceSurface::new(), reference_recording());
        let outcome = robot.hand_draw(Duration::from_millis(5)).await.unwrap();
        assert_eq!(outcome, ReplayOutcome::Completed);
        assert!(!robot.is_running());

        let mut pumped = Robot::new(TraceSurface::new(), reference_recording());
        pump_to_completion(&mut pumped);
        assert_eq!(robot.surface().ops(), pumped.surface().ops());
    }

    #[tokio::test]
    async fn hand_draw_while_started_reports_busy() {
        let mut robot = Robot::new(TraceSurface::new(), reference_recording());
        assert!(robot.start());
        let outcome = robot.hand_draw(Duration::from_millis(1)).await.unwrap();
        assert!(outcome.is_busy());
    }
}
