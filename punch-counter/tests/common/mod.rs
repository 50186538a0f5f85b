//! Pose fixtures shared by the integration tests

#![allow(dead_code)]

use punch_counter::{JointId, Landmark, LandmarkSet};

/// Forearm length used by every fixture
const FOREARM: f32 = 0.2;

/// Put one arm into `set` with its elbow bent to `angle` degrees.
///
/// The upper arm is level and the forearm rises from the elbow, so the wrist
/// never sits below the shoulder and the guard check stays quiet.
fn add_arm(set: &mut LandmarkSet, left: bool, angle: f32) {
    let r = (180.0 - angle).to_radians();
    let (shoulder, elbow, wrist, sign) = if left {
        (JointId::LeftShoulder, JointId::LeftElbow, JointId::LeftWrist, 1.0)
    } else {
        (JointId::RightShoulder, JointId::RightElbow, JointId::RightWrist, -1.0)
    };
    let elbow_pos = if left { (0.4, 0.4) } else { (0.6, 0.4) };

    set.insert(shoulder, Landmark::new(elbow_pos.0 - sign * 0.2, elbow_pos.1));
    set.insert(elbow, Landmark::new(elbow_pos.0, elbow_pos.1));
    set.insert(
        wrist,
        Landmark::new(
            elbow_pos.0 + sign * FOREARM * r.cos(),
            elbow_pos.1 - FOREARM * r.sin(),
        ),
    );
}

/// Frame with optional left/right elbow angles; `None` leaves that arm out
pub fn pose(left: Option<f32>, right: Option<f32>) -> LandmarkSet {
    let mut set = LandmarkSet::new();
    if let Some(angle) = left {
        add_arm(&mut set, true, angle);
    }
    if let Some(angle) = right {
        add_arm(&mut set, false, angle);
    }
    set
}

pub fn left_only(angle: f32) -> LandmarkSet {
    pose(Some(angle), None)
}
