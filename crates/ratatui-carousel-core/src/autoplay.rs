use std::time::Duration;
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoplayState {
    /// Before the first start, or after teardown.
    Stopped,
    Running,
    Paused,
}

/// Deadline-based autoplay timer.
///
/// There is no background thread: the owner calls [`Autoplay::poll`] with the current time and
/// advances the carousel when it fires. A running timer with no deadline arms itself on the
/// next poll, so every schedule/cancel transition stays a plain state change. Cancelling is
/// idempotent throughout — stopping a never-started or already-stopped timer is a no-op.
#[derive(Clone, Copy, Debug)]
pub struct Autoplay {
    interval: Duration,
    state: AutoplayState,
    deadline: Option<Instant>,
}

impl Autoplay {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            state: AutoplayState::Stopped,
            deadline: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> AutoplayState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AutoplayState::Running
    }

    pub fn start(&mut self) {
        self.state = AutoplayState::Running;
        self.deadline = None;
    }

    /// Cancels the pending advance and holds; retains nothing else.
    pub fn pause(&mut self) {
        if self.state == AutoplayState::Running {
            self.state = AutoplayState::Paused;
            self.deadline = None;
        }
    }

    /// Returns to running with a fresh full interval. No-op unless paused.
    pub fn resume(&mut self) {
        if self.state == AutoplayState::Paused {
            self.state = AutoplayState::Running;
            self.deadline = None;
        }
    }

    pub fn stop(&mut self) {
        self.state = AutoplayState::Stopped;
        self.deadline = None;
    }

    /// Cancel-and-reschedule after an index mutation: the interval restarts from zero, so a
    /// manual jump never races a near-immediate automatic advance.
    pub fn rearm(&mut self) {
        if self.state == AutoplayState::Running {
            self.deadline = None;
        }
    }

    /// Returns `true` when the deadline has elapsed; the next interval is scheduled before
    /// returning. An unarmed running timer schedules its first deadline here and reports idle.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.state != AutoplayState::Running {
            return false;
        }
        match self.deadline {
            None => {
                self.deadline = Some(now + self.interval);
                false
            }
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.interval);
                true
            }
            Some(_) => false,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
