//! Workout session - owns all state that persists across frames
//!
//! One session per workout. Starting a new workout goes through `reset`,
//! never through ad-hoc field mutation.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::physics::{ArmState, ArmStateMachine, FormAlertFilter, FormMonitor};
use crate::pose::{LandmarkSet, Side};

use super::counter::PunchCounter;
use super::frame::{FrameProcessor, FrameResult};

/// Snapshot for session-summary logging
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub left_count: u32,
    pub right_count: u32,
    pub total_count: u32,
    pub frames_processed: u64,
    /// Frames where the left arm produced no valid angle
    pub left_samples_missed: u64,
    pub right_samples_missed: u64,
    /// Frames where the reported form alert was raised
    pub form_alert_frames: u64,
    /// Timestamp of the frame that produced the latest punch
    pub last_punch_at: Option<f64>,
}

/// Running counters kept next to the punch tallies
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct SessionStats {
    pub frames_processed: u64,
    pub left_samples_missed: u64,
    pub right_samples_missed: u64,
    pub form_alert_frames: u64,
    pub last_punch_at: Option<f64>,
}

/// Per-workout engine state
#[derive(Debug, Clone)]
pub struct Session {
    pub(super) config: EngineConfig,
    pub(super) left: ArmStateMachine,
    pub(super) right: ArmStateMachine,
    pub(super) counter: PunchCounter,
    pub(super) form: FormMonitor,
    pub(super) alert_filter: FormAlertFilter,
    pub(super) stats: SessionStats,
}

impl Session {
    /// Start a session. The whole configuration is validated up front so an
    /// unusable session never exists.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let session = Self {
            config,
            left: ArmStateMachine::new(Side::Left, config.arm)?,
            right: ArmStateMachine::new(Side::Right, config.arm)?,
            counter: PunchCounter::new(),
            form: FormMonitor::new(&config.form, config.min_visibility)?,
            alert_filter: FormAlertFilter::new(&config.form)?,
            stats: SessionStats::default(),
        };
        info!(
            extend_above = config.arm.thresholds.extend_above,
            retract_below = config.arm.thresholds.retract_below,
            drop_margin = config.form.drop_margin,
            "punch session started"
        );
        Ok(session)
    }

    /// Session with the default thresholds
    pub fn with_defaults() -> Result<Self> {
        Self::new(EngineConfig::default())
    }

    /// Process one frame in arrival order
    pub fn process_frame(&mut self, landmarks: &LandmarkSet) -> FrameResult {
        FrameProcessor::new(self).process(landmarks)
    }

    /// Start a new workout: counts to zero, both arms retracted
    pub fn reset(&mut self) {
        debug!(total = self.counter.total(), frames = self.stats.frames_processed, "resetting punch session");
        self.left.reset();
        self.right.reset();
        self.counter.reset();
        self.alert_filter.reset();
        self.stats = SessionStats::default();
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn machine(&self, side: Side) -> &ArmStateMachine {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub(super) fn machine_mut(&mut self, side: Side) -> &mut ArmStateMachine {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn state(&self, side: Side) -> ArmState {
        self.machine(side).state()
    }

    pub fn counter(&self) -> &PunchCounter {
        &self.counter
    }

    pub fn count(&self, side: Side) -> u32 {
        self.counter.count(side)
    }

    pub fn total_count(&self) -> u32 {
        self.counter.total()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            left_count: self.counter.count(Side::Left),
            right_count: self.counter.count(Side::Right),
            total_count: self.counter.total(),
            frames_processed: self.stats.frames_processed,
            left_samples_missed: self.stats.left_samples_missed,
            right_samples_missed: self.stats.right_samples_missed,
            form_alert_frames: self.stats.form_alert_frames,
            last_punch_at: self.stats.last_punch_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ArmThresholds, FormConfig};
    use crate::error::Error;

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = EngineConfig::default();
        config.arm.thresholds = ArmThresholds {
            extend_above: 50.0,
            retract_below: 70.0,
        };
        assert!(matches!(Session::new(config), Err(Error::InvertedThresholds { .. })));

        let config = EngineConfig {
            form: FormConfig {
                drop_margin: -1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(Session::new(config).is_err());
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::with_defaults().unwrap();
        assert_eq!(session.state(Side::Left), ArmState::Retracted);
        assert_eq!(session.state(Side::Right), ArmState::Retracted);
        assert_eq!(session.total_count(), 0);
        assert_eq!(session.summary(), SessionSummary::default());
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = Session::with_defaults().unwrap();
        let b = Session::with_defaults().unwrap();

        a.machine_mut(Side::Left).observe(Some(170.0));
        assert_eq!(a.state(Side::Left), ArmState::Extended);
        assert_eq!(b.state(Side::Left), ArmState::Retracted);
    }

    #[test]
    fn test_session_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Session>();
    }
}
