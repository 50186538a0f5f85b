//! Arm sides and joint triples

use serde::{Deserialize, Serialize};

use super::landmarks::{JointId, LandmarkSet};

/// Which arm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn name(&self) -> &'static str {
        match self {
            Side::Left => "LEFT",
            Side::Right => "RIGHT",
        }
    }

    pub fn shoulder(self) -> JointId {
        match self {
            Side::Left => JointId::LeftShoulder,
            Side::Right => JointId::RightShoulder,
        }
    }

    pub fn elbow(self) -> JointId {
        match self {
            Side::Left => JointId::LeftElbow,
            Side::Right => JointId::RightElbow,
        }
    }

    pub fn wrist(self) -> JointId {
        match self {
            Side::Left => JointId::LeftWrist,
            Side::Right => JointId::RightWrist,
        }
    }
}

/// Shoulder, elbow and wrist of one arm in normalized coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmJoints {
    pub shoulder: (f32, f32),
    pub elbow: (f32, f32),
    pub wrist: (f32, f32),
}

impl ArmJoints {
    /// Select one side's joint triple. `None` unless all three joints pass
    /// the confidence gate.
    pub fn extract(landmarks: &LandmarkSet, side: Side, min_visibility: f32) -> Option<Self> {
        Some(Self {
            shoulder: landmarks.trusted_position(side.shoulder(), min_visibility)?,
            elbow: landmarks.trusted_position(side.elbow(), min_visibility)?,
            wrist: landmarks.trusted_position(side.wrist(), min_visibility)?,
        })
    }
}
