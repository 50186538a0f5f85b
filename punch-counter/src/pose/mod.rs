//! Pose module - landmark input from an external pose model
//!
//! Re-exports only. All logic in submodules.

mod arm;
mod landmarks;

pub use arm::{ArmJoints, Side};
pub use landmarks::{
    parse_pose_buffer,
    JointId,
    Landmark,
    LandmarkSet,
    // Constants
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    POSE_LANDMARK_COUNT, POSE_BUFFER_XYZ, POSE_BUFFER_XYZV,
};
