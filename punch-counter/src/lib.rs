//! Punch Counter - real-time punch detection from 2D pose landmarks
//!
//! Turns a stream of per-frame arm landmarks into punch events per arm, a
//! running count and a guard-drop alert. Camera capture, pose inference and
//! rendering stay outside; the engine only consumes landmarks and returns a
//! `FrameResult` per frame.
//!
//! Entry point for the WASM module lives here too:
//! - Module declarations
//! - wasm_bindgen start hook that installs panic and log forwarding

pub mod bridge;
pub mod config;
pub mod error;
pub mod physics;
pub mod pose;
pub mod session;

use wasm_bindgen::prelude::*;

pub use bridge::PunchSession;
pub use config::{ArmConfig, ArmThresholds, EngineConfig, FormConfig};
pub use error::{Error, Result};
pub use physics::{compute_angle, elbow_angle, transition, ArmState, ArmStateMachine, FormMonitor, FormReading, PunchEvent};
pub use pose::{parse_pose_buffer, ArmJoints, JointId, Landmark, LandmarkSet, Side};
pub use session::{FrameProcessor, FrameResult, PunchCounter, Session, SessionSummary};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();

    tracing::info!("punch counter module loaded");
}
