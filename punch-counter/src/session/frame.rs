//! Per-frame orchestration
//!
//! Landmarks → elbow angles → arm state machines → punch counter, with the
//! guard check running alongside. The processor only borrows the session;
//! everything that outlives a frame stays in `Session`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::physics::{elbow_angle, ArmState};
use crate::pose::{ArmJoints, LandmarkSet, Side};

use super::session::Session;

/// Result of one frame, consumed by overlays and session logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameResult {
    pub total_count: u32,
    pub left_state: ArmState,
    pub right_state: ArmState,
    pub form_alert: bool,

    pub left_count: u32,
    pub right_count: u32,
    /// Elbow angle measured this frame; `None` when the arm was not tracked
    pub left_angle: Option<f32>,
    pub right_angle: Option<f32>,
    /// Sides that threw a punch this frame
    pub punches: Vec<Side>,
}

impl FrameResult {
    pub fn state(&self, side: Side) -> ArmState {
        match side {
            Side::Left => self.left_state,
            Side::Right => self.right_state,
        }
    }

    pub fn angle(&self, side: Side) -> Option<f32> {
        match side {
            Side::Left => self.left_angle,
            Side::Right => self.right_angle,
        }
    }
}

/// Runs one frame against a session
pub struct FrameProcessor<'a> {
    session: &'a mut Session,
}

impl<'a> FrameProcessor<'a> {
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    pub fn process(self, landmarks: &LandmarkSet) -> FrameResult {
        let session = self.session;
        let min_visibility = session.config.min_visibility;
        session.stats.frames_processed += 1;

        let mut angles = [None; 2];
        let mut punches = Vec::new();

        for (i, side) in Side::BOTH.into_iter().enumerate() {
            let angle = ArmJoints::extract(landmarks, side, min_visibility)
                .as_ref()
                .and_then(elbow_angle);
            if angle.is_none() {
                match side {
                    Side::Left => session.stats.left_samples_missed += 1,
                    Side::Right => session.stats.right_samples_missed += 1,
                }
            }
            angles[i] = angle;

            if let Some(event) = session.machine_mut(side).observe(angle) {
                session.counter.record(&event);
                punches.push(event.side);
            }
        }

        if !punches.is_empty() {
            if let Some(t) = landmarks.timestamp() {
                session.stats.last_punch_at = Some(t);
            }
            debug!(
                punches = ?punches,
                left = session.counter.count(Side::Left),
                right = session.counter.count(Side::Right),
                "punch counted"
            );
        }

        let reading = session.form.evaluate(landmarks);
        let form_alert = session.alert_filter.update(reading.alert);
        if form_alert {
            session.stats.form_alert_frames += 1;
        }

        FrameResult {
            total_count: session.counter.total(),
            left_state: session.left.state(),
            right_state: session.right.state(),
            form_alert,
            left_count: session.counter.count(Side::Left),
            right_count: session.counter.count(Side::Right),
            left_angle: angles[0],
            right_angle: angles[1],
            punches,
        }
    }
}
