//! Punch counter - per-side tallies driven only by punch events

use serde::{Deserialize, Serialize};

use crate::physics::PunchEvent;
use crate::pose::Side;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunchCounter {
    left_count: u32,
    right_count: u32,
}

impl PunchCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: &PunchEvent) {
        let slot = match event.side {
            Side::Left => &mut self.left_count,
            Side::Right => &mut self.right_count,
        };
        *slot = slot.saturating_add(1);
    }

    pub fn count(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_count,
            Side::Right => self.right_count,
        }
    }

    pub fn total(&self) -> u32 {
        self.left_count.saturating_add(self.right_count)
    }

    /// Only called when the owning session starts a new workout
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
