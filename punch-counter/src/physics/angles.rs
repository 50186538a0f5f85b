//! Joint angle calculation using polar angles
//!
//! The angle at a vertex is the difference between the polar angles of the
//! two limb vectors leaving it, folded back into [0, 180] degrees.

use crate::pose::ArmJoints;

/// Limb vectors shorter than this carry no usable direction
const MIN_LIMB_LENGTH: f32 = 0.0001;

/// Calculate the included angle at `vertex` in degrees
///
/// Takes the signed difference of `atan2(vertex→c)` and `atan2(vertex→a)`,
/// then applies the reflex correction: anything above 180° becomes
/// `360 − angle`.
///
/// Returns `None` when a point coincides with the vertex or a coordinate is
/// not finite, so the caller can keep its previous sample.
pub fn compute_angle(vertex: (f32, f32), a: (f32, f32), c: (f32, f32)) -> Option<f32> {
    let va = (a.0 - vertex.0, a.1 - vertex.1);
    let vc = (c.0 - vertex.0, c.1 - vertex.1);

    let len_a = (va.0 * va.0 + va.1 * va.1).sqrt();
    let len_c = (vc.0 * vc.0 + vc.1 * vc.1).sqrt();

    // NaN lengths fail both comparisons, so check finiteness explicitly
    if !len_a.is_finite() || !len_c.is_finite() {
        return None;
    }
    if len_a < MIN_LIMB_LENGTH || len_c < MIN_LIMB_LENGTH {
        return None;
    }

    let radians = vc.1.atan2(vc.0) - va.1.atan2(va.0);
    let mut angle = radians.abs().to_degrees();

    if angle > 180.0 {
        angle = 360.0 - angle;
    }

    Some(angle)
}

/// Elbow angle of one arm (90° = bent, 180° = straight)
pub fn elbow_angle(arm: &ArmJoints) -> Option<f32> {
    compute_angle(arm.elbow, arm.shoulder, arm.wrist)
}
