//! Session module - workout lifetime state and per-frame processing
//!
//! Re-exports only. All logic in submodules.

mod counter;
mod frame;
#[allow(clippy::module_inception)]
mod session;

pub use counter::PunchCounter;
pub use frame::{FrameProcessor, FrameResult};
pub use session::{Session, SessionSummary};
