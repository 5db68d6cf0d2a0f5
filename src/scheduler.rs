//! When a scroll notification turns into a highlight pass.
//!
//! Browsers fire scroll events far more often than they paint. With
//! `AnimationFrame` the first event of a frame asks the host for a frame and
//! later events in the same frame are folded into it. Because each pass is a
//! full recomputation, coalescing changes cost but never the outcome.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SchedulePolicy {
    /// One pass per raw scroll event.
    #[default]
    Immediate,
    /// At most one pass per animation frame.
    AnimationFrame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDecision {
    /// Recompute now.
    Run,
    /// Recompute on the next frame; the host must request one.
    RequestFrame,
    /// A frame is already pending.
    Coalesced,
}

#[derive(Debug, Clone, Default)]
pub struct ScrollScheduler {
    policy: SchedulePolicy,
    frame_pending: bool,
}

impl ScrollScheduler {
    pub fn new(policy: SchedulePolicy) -> Self {
        Self {
            policy,
            frame_pending: false,
        }
    }

    pub fn policy(&self) -> SchedulePolicy {
        self.policy
    }

    pub fn on_scroll(&mut self) -> ScrollDecision {
        match self.policy {
            SchedulePolicy::Immediate => ScrollDecision::Run,
            SchedulePolicy::AnimationFrame if self.frame_pending => ScrollDecision::Coalesced,
            SchedulePolicy::AnimationFrame => {
                self.frame_pending = true;
                ScrollDecision::RequestFrame
            }
        }
    }

    /// Returns true when the frame owes a pass.
    pub fn on_frame(&mut self) -> bool {
        std::mem::take(&mut self.frame_pending)
    }
}
