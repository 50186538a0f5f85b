//! Guard check - hands should stay near shoulder height
//!
//! Frame coordinates grow downward, so a wrist y larger than its shoulder y
//! by more than the margin means the hand has dropped.

use serde::{Deserialize, Serialize};

use crate::config::{check_visibility, FormConfig};
use crate::error::Result;
use crate::pose::{LandmarkSet, Side};

/// Guard measurement for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormReading {
    /// `wrist.y - shoulder.y` for the left arm, if both were tracked
    pub left_drop: Option<f32>,
    pub right_drop: Option<f32>,
    /// Either side dropped past the margin
    pub alert: bool,
}

impl FormReading {
    pub fn drop_offset(&self, side: Side) -> Option<f32> {
        match side {
            Side::Left => self.left_drop,
            Side::Right => self.right_drop,
        }
    }
}

/// Stateless guard evaluator
#[derive(Debug, Clone, Copy)]
pub struct FormMonitor {
    drop_margin: f32,
    min_visibility: f32,
}

impl FormMonitor {
    /// Build a monitor. A negative margin or a visibility outside [0, 1] is
    /// rejected here rather than producing alerts for a raised guard later.
    pub fn new(config: &FormConfig, min_visibility: f32) -> Result<Self> {
        config.validate()?;
        check_visibility(min_visibility)?;
        Ok(Self {
            drop_margin: config.drop_margin,
            min_visibility,
        })
    }

    /// Evaluate the guard from raw wrist/shoulder landmarks.
    /// A side missing either joint does not contribute to the alert.
    pub fn evaluate(&self, landmarks: &LandmarkSet) -> FormReading {
        let left_drop = self.drop_offset(landmarks, Side::Left);
        let right_drop = self.drop_offset(landmarks, Side::Right);

        let dropped = |offset: Option<f32>| offset.is_some_and(|d| d > self.drop_margin);

        FormReading {
            left_drop,
            right_drop,
            alert: dropped(left_drop) || dropped(right_drop),
        }
    }

    fn drop_offset(&self, landmarks: &LandmarkSet, side: Side) -> Option<f32> {
        let (_, shoulder_y) = landmarks.trusted_position(side.shoulder(), self.min_visibility)?;
        let (_, wrist_y) = landmarks.trusted_position(side.wrist(), self.min_visibility)?;
        Some(wrist_y - shoulder_y)
    }
}

/// Holds back the alert until the guard has been down for
/// `min_alert_frames` consecutive frames
#[derive(Debug, Clone)]
pub struct FormAlertFilter {
    min_frames: u32,
    consecutive: u32,
}

impl FormAlertFilter {
    pub fn new(config: &FormConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            min_frames: config.min_alert_frames,
            consecutive: 0,
        })
    }

    /// Feed one raw alert, returns the filtered alert
    pub fn update(&mut self, raw_alert: bool) -> bool {
        if raw_alert {
            self.consecutive = self.consecutive.saturating_add(1);
        } else {
            self.consecutive = 0;
        }
        self.consecutive >= self.min_frames
    }

    pub fn reset(&mut self) {
        self.consecutive = 0;
    }
}
