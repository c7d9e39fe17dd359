use super::{tween::progress, TimerState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    Idle,
    Loading,
    /// Bar is full, waiting out the exit delay.
    Finishing,
    Complete,
    Stopped,
}

/// One sampled frame of the loading screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingFrame {
    pub percent: u8,
    pub message_index: Option<usize>,
    pub phase: LoadingPhase,
    /// Set on exactly one frame: the one where the screen completes.
    pub completed: bool,
}

/// Simulated progress for the intro screen: a bar that fills over a fixed
/// duration, then signals completion once after a short exit delay.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingProgress {
    state: TimerState,
    duration: f64,
    exit_delay: f64,
    message_count: usize,
    started_at: f64,
    percent: u8,
    full_at: Option<f64>,
    completed: bool,
}

impl LoadingProgress {
    pub fn new(duration: f64, exit_delay: f64, message_count: usize) -> Self {
        Self {
            state: TimerState::Idle,
            duration,
            exit_delay: exit_delay.max(0.0),
            message_count,
            started_at: 0.0,
            percent: 0,
            full_at: None,
            completed: false,
        }
    }

    pub fn start(&mut self, now: f64) -> bool {
        let started = self.state.start();
        if started {
            self.started_at = now;
        }
        started
    }

    pub fn cancel(&mut self) {
        self.state.cancel();
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Jump straight to the final state; the next sample completes.
    pub fn finish_now(&mut self, now: f64) {
        if self.state.is_running() && !self.completed {
            self.percent = 100;
            self.full_at = Some(now - self.exit_delay);
        }
    }

    fn message_index(&self) -> Option<usize> {
        if self.message_count == 0 {
            return None;
        }
        let p = f64::from(self.percent) / 100.0;
        Some((p * (self.message_count - 1) as f64).floor() as usize)
    }

    fn phase(&self) -> LoadingPhase {
        match self.state {
            TimerState::Idle => LoadingPhase::Idle,
            TimerState::Stopped => LoadingPhase::Stopped,
            TimerState::Running if self.completed => LoadingPhase::Complete,
            TimerState::Running if self.full_at.is_some() => LoadingPhase::Finishing,
            TimerState::Running => LoadingPhase::Loading,
        }
    }

    pub fn sample(&mut self, now: f64) -> LoadingFrame {
        let mut completed = false;
        if self.state.is_running() && !self.completed {
            let pct = (progress(now - self.started_at, self.duration) * 100.0).floor() as u8;
            self.percent = self.percent.max(pct);
            if self.percent >= 100 && self.full_at.is_none() {
                self.full_at = Some(now);
            }
            if let Some(full_at) = self.full_at {
                if now - full_at >= self.exit_delay {
                    self.completed = true;
                    completed = true;
                }
            }
        }
        LoadingFrame {
            percent: self.percent,
            message_index: self.message_index(),
            phase: self.phase(),
            completed,
        }
    }
}

/// Page-lifetime record that the loading screen has finished. Outlives any
/// single `LoadingProgress`, so a remounted screen cannot complete twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompletionLatch {
    done: bool,
}

impl CompletionLatch {
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Returns `true` only for the call that closes the latch.
    pub fn mark(&mut self) -> bool {
        !std::mem::replace(&mut self.done, true)
    }

    /// Feed a sampled frame; `true` when this frame is the first completion
    /// the latch has seen.
    pub fn observe(&mut self, frame: &LoadingFrame) -> bool {
        frame.completed && self.mark()
    }
}
