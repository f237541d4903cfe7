//! Letter reveal sequencing.
//!
//! Turning the letter animation on arms a single revert timer and bumps the
//! replay token, which hosts use as a key to force the preview to replay.
//! At most one revert timer is pending at any time. Re-arming cancels the
//! previous timer so a stale revert can never switch off a newer run.
//!
//! Timers are plain deadlines on the session clock. Whoever drives the
//! session (the tokio runtime, a browser `setTimeout`, a test) calls
//! [`AnimationSequencer::poll`] once the deadline has passed.

use headline_compiler_css::reveal_duration;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

/// How long the preview keeps replaying its entrance after a refresh
pub const DEFAULT_REFRESH_PULSE: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    id: u64,
    token: u64,
    deadline: Duration,
}

impl TimerHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Replay token current when the timer was armed
    pub fn token(&self) -> u64 {
        self.token
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    Idle,
    Active { token: u64, expires_at: Duration },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AnimationEvent {
    Armed { token: u64 },
    Disarmed { token: u64 },
    /// The revert timer elapsed and the animation switched itself off
    Reverted { token: u64 },
}

impl AnimationEvent {
    pub fn token(&self) -> u64 {
        match self {
            Self::Armed { token } | Self::Disarmed { token } | Self::Reverted { token } => *token,
        }
    }
}

#[derive(Debug)]
pub struct AnimationSequencer {
    replay_token: u64,
    pending: Option<TimerHandle>,
    next_timer_id: u64,
    refresh_until: Option<Duration>,
    refresh_pulse: Duration,
}

impl Default for AnimationSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationSequencer {
    pub fn new() -> Self {
        Self::with_refresh_pulse(DEFAULT_REFRESH_PULSE)
    }

    pub fn with_refresh_pulse(refresh_pulse: Duration) -> Self {
        Self {
            replay_token: 0,
            pending: None,
            next_timer_id: 0,
            refresh_until: None,
            refresh_pulse,
        }
    }

    pub fn replay_token(&self) -> u64 {
        self.replay_token
    }

    pub fn pending(&self) -> Option<TimerHandle> {
        self.pending
    }

    pub fn pending_deadline(&self) -> Option<Duration> {
        self.pending.map(|handle| handle.deadline)
    }

    pub fn phase(&self) -> AnimationPhase {
        match self.pending {
            Some(handle) => AnimationPhase::Active {
                token: handle.token,
                expires_at: handle.deadline,
            },
            None => AnimationPhase::Idle,
        }
    }

    /// Start a reveal of `text`, replacing any reveal still running
    pub fn arm(&mut self, now: Duration, text: &str) -> AnimationEvent {
        self.cancel_pending();
        self.replay_token += 1;
        self.next_timer_id += 1;

        let duration = reveal_duration(text);
        let handle = TimerHandle {
            id: self.next_timer_id,
            token: self.replay_token,
            deadline: now + duration,
        };
        self.pending = Some(handle);

        info!(
            token = self.replay_token,
            timer = handle.id,
            duration_ms = duration.as_millis() as u64,
            "Armed letter reveal"
        );
        AnimationEvent::Armed {
            token: self.replay_token,
        }
    }

    /// Stop the reveal without waiting for its timer
    pub fn disarm(&mut self) -> AnimationEvent {
        self.cancel_pending();
        self.replay_token += 1;

        info!(token = self.replay_token, "Disarmed letter reveal");
        AnimationEvent::Disarmed {
            token: self.replay_token,
        }
    }

    /// Fire `handle` if it is still the pending timer and its deadline passed
    pub fn fire(&mut self, handle: TimerHandle, now: Duration) -> Option<AnimationEvent> {
        if self.pending != Some(handle) {
            debug!(timer = handle.id, "Ignoring stale revert timer");
            return None;
        }
        if now < handle.deadline {
            return None;
        }

        self.pending = None;
        self.replay_token += 1;

        info!(token = self.replay_token, timer = handle.id, "Reverted letter reveal");
        Some(AnimationEvent::Reverted {
            token: self.replay_token,
        })
    }

    /// Fire the pending timer if it is due
    pub fn poll(&mut self, now: Duration) -> Option<AnimationEvent> {
        let handle = self.pending?;
        self.fire(handle, now)
    }

    /// Replay the preview entrance for a short pulse
    pub fn refresh(&mut self, now: Duration) {
        self.refresh_until = Some(now + self.refresh_pulse);
        debug!(until_ms = (now + self.refresh_pulse).as_millis() as u64, "Refreshing preview");
    }

    pub fn is_refreshing(&self, now: Duration) -> bool {
        matches!(self.refresh_until, Some(until) if now < until)
    }

    /// Key the preview entrance is mounted under
    ///
    /// Changes whenever the entrance should replay.
    pub fn entrance_key(&self, now: Duration) -> &'static str {
        if self.is_refreshing(now) {
            "animating"
        } else {
            "static"
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(previous) = self.pending.take() {
            debug!(timer = previous.id, "Cancelled pending revert");
        }
    }
}
