//! Per-arm extension state machine with hysteresis
//!
//! An arm is `Extended` once its elbow angle reaches `extend_above` and only
//! returns to `Retracted` after dropping to `retract_below`. Angles inside
//! the band never change state, so jitter around the upper threshold cannot
//! count one punch twice.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::{ArmConfig, ArmThresholds};
use crate::error::Result;
use crate::pose::Side;

/// Extension state of one arm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArmState {
    #[default]
    Retracted,
    Extended,
}

/// One punch thrown by one arm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchEvent {
    pub side: Side,
}

/// Pure transition: `(state, angle) -> (new_state, event)`
///
/// - Retracted, angle >= extend_above: Extended, emits a punch
/// - any state, angle <= retract_below: Retracted
/// - anything else: unchanged
pub fn transition(
    state: ArmState,
    angle: f32,
    side: Side,
    thresholds: &ArmThresholds,
) -> (ArmState, Option<PunchEvent>) {
    if angle <= thresholds.retract_below {
        return (ArmState::Retracted, None);
    }
    match state {
        ArmState::Retracted if angle >= thresholds.extend_above => {
            (ArmState::Extended, Some(PunchEvent { side }))
        }
        _ => (state, None),
    }
}

/// State machine for a single arm
#[derive(Debug, Clone)]
pub struct ArmStateMachine {
    side: Side,
    config: ArmConfig,
    state: ArmState,
    /// Last valid angle sample
    last_angle: Option<f32>,
    /// Consecutive samples above `extend_above` while still retracted
    pending_extension: u32,
}

impl ArmStateMachine {
    /// Create a retracted machine. Invalid thresholds are rejected here, not
    /// on the first frame.
    pub fn new(side: Side, config: ArmConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            side,
            config,
            state: ArmState::Retracted,
            last_angle: None,
            pending_extension: 0,
        })
    }

    /// Feed one frame's angle sample. `None` means tracking was lost this
    /// frame: state, last angle and any pending dwell are left untouched.
    ///
    /// Returns the punch emitted by this sample, if any.
    pub fn observe(&mut self, angle: Option<f32>) -> Option<PunchEvent> {
        let Some(angle) = angle else {
            trace!(side = self.side.name(), state = ?self.state, "no angle sample, holding state");
            return None;
        };
        self.last_angle = Some(angle);

        let thresholds = &self.config.thresholds;
        if self.state == ArmState::Retracted && angle >= thresholds.extend_above {
            self.pending_extension = self.pending_extension.saturating_add(1);
            if self.pending_extension < self.config.extend_dwell_frames {
                return None;
            }
        } else {
            self.pending_extension = 0;
        }

        let (next, event) = transition(self.state, angle, self.side, thresholds);
        if next != self.state {
            debug!(side = self.side.name(), from = ?self.state, to = ?next, angle, "arm transition");
        }
        self.state = next;
        if event.is_some() {
            self.pending_extension = 0;
        }
        event
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn state(&self) -> ArmState {
        self.state
    }

    pub fn last_angle(&self) -> Option<f32> {
        self.last_angle
    }

    pub fn config(&self) -> &ArmConfig {
        &self.config
    }

    /// Back to retracted with no history
    pub fn reset(&mut self) {
        self.state = ArmState::Retracted;
        self.last_angle = None;
        self.pending_extension = 0;
    }
}
