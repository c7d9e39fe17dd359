//! Framework-free animation and timer logic.
//!
//! Nothing in here touches the DOM or reads a clock. Every time-dependent
//! operation takes `now` (seconds, any monotonic origin) as an argument, so
//! the browser drivers pass animation-frame timestamps and tests pass
//! whatever they like.

mod loading;
mod marquee;
mod rotator;
mod scroll;
pub mod tween;

pub use loading::{CompletionLatch, LoadingFrame, LoadingPhase, LoadingProgress};
pub use marquee::{loop_items, MarqueeState, Measure, MotionError};
pub use rotator::Rotator;
pub use scroll::{ScrollSample, ScrollWatcher, Visibility};

/// Lifecycle shared by every timer-driven widget.
///
/// `Stopped` is terminal: once the owner tears a timer down it never fires
/// again, even if a stray driver callback still reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState {
    #[default]
    Idle,
    Running,
    Stopped,
}

impl TimerState {
    /// Returns `true` if the transition to `Running` happened.
    pub fn start(&mut self) -> bool {
        match self {
            Self::Idle => {
                *self = Self::Running;
                true
            }
            Self::Running | Self::Stopped => false,
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::Stopped;
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}
