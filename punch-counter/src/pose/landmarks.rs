//! Landmark storage for one frame of pose data
//!
//! Holds the six arm joints the engine reads, keyed by `JointId`. Frames
//! arrive from an external pose model (MediaPipe Pose in the browser), so
//! the MediaPipe flat buffer layout is parsed here as well.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const POSE_LANDMARK_COUNT: usize = 33;

pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;

/// Flat buffer length for 33 landmarks × (x, y, z)
pub const POSE_BUFFER_XYZ: usize = POSE_LANDMARK_COUNT * 3;

/// Flat buffer length for 33 landmarks × (x, y, z, visibility)
pub const POSE_BUFFER_XYZV: usize = POSE_LANDMARK_COUNT * 4;

// ============================================================================
// JOINTS
// ============================================================================

/// Joints the engine reads from a pose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointId {
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
}

impl JointId {
    pub const ALL: [JointId; 6] = [
        JointId::LeftShoulder,
        JointId::RightShoulder,
        JointId::LeftElbow,
        JointId::RightElbow,
        JointId::LeftWrist,
        JointId::RightWrist,
    ];

    /// Index of this joint in the MediaPipe Pose landmark list
    pub fn mediapipe_index(self) -> usize {
        match self {
            JointId::LeftShoulder => LEFT_SHOULDER,
            JointId::RightShoulder => RIGHT_SHOULDER,
            JointId::LeftElbow => LEFT_ELBOW,
            JointId::RightElbow => RIGHT_ELBOW,
            JointId::LeftWrist => LEFT_WRIST,
            JointId::RightWrist => RIGHT_WRIST,
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

// ============================================================================
// LANDMARK DATA STRUCTURE
// ============================================================================

/// A single 2D landmark point (normalized coordinates, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    /// Pose model confidence (0-1), when the source reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f32>,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            visibility: None,
        }
    }

    pub fn with_visibility(mut self, visibility: f32) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Usable for geometry: finite coordinates and confident enough.
    /// A landmark without a visibility score is always trusted.
    pub fn is_trusted(&self, min_visibility: f32) -> bool {
        if !self.x.is_finite() || !self.y.is_finite() {
            return false;
        }
        match self.visibility {
            Some(v) => v >= min_visibility,
            None => true,
        }
    }
}

/// Landmarks for one frame. Any joint may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LandmarkSet {
    joints: [Option<Landmark>; 6],
    /// Capture time in seconds, as supplied by the frame source
    timestamp: Option<f64>,
}

impl LandmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timestamp(mut self, timestamp: f64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Builder-style insert
    pub fn with(mut self, joint: JointId, landmark: Landmark) -> Self {
        self.insert(joint, landmark);
        self
    }

    pub fn insert(&mut self, joint: JointId, landmark: Landmark) {
        self.joints[joint.slot()] = Some(landmark);
    }

    pub fn remove(&mut self, joint: JointId) -> Option<Landmark> {
        self.joints[joint.slot()].take()
    }

    pub fn get(&self, joint: JointId) -> Option<Landmark> {
        self.joints[joint.slot()]
    }

    /// Position of a joint that passes the confidence gate
    pub fn trusted_position(&self, joint: JointId, min_visibility: f32) -> Option<(f32, f32)> {
        self.get(joint)
            .filter(|lm| lm.is_trusted(min_visibility))
            .map(|lm| lm.position())
    }

    pub fn timestamp(&self) -> Option<f64> {
        self.timestamp
    }

    /// Number of joints present (trusted or not)
    pub fn len(&self) -> usize {
        self.joints.iter().filter(|j| j.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parse a MediaPipe Pose flat buffer into a landmark set.
///
/// Accepts 33 × (x, y, z) = 99 floats or 33 × (x, y, z, visibility) = 132
/// floats. The z coordinate is ignored; the engine is 2D only.
pub fn parse_pose_buffer(data: &[f32]) -> Result<LandmarkSet> {
    let stride = match data.len() {
        POSE_BUFFER_XYZ => 3,
        POSE_BUFFER_XYZV => 4,
        len => return Err(Error::InvalidPoseBuffer { len }),
    };

    let mut set = LandmarkSet::new();
    for joint in JointId::ALL {
        let base = joint.mediapipe_index() * stride;
        let mut landmark = Landmark::new(data[base], data[base + 1]);
        if stride == 4 {
            landmark.visibility = Some(data[base + 3]);
        }
        set.insert(joint, landmark);
    }
    Ok(set)
}
