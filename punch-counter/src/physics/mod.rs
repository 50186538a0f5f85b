//! Physics module - joint angles, arm extension and guard checks
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod arm_state;
mod form;

pub use angles::{compute_angle, elbow_angle};
pub use arm_state::{transition, ArmState, ArmStateMachine, PunchEvent};
pub use form::{FormAlertFilter, FormMonitor, FormReading};
