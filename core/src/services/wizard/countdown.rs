//! Resend cooldown for the one-time code step.

use std::time::Duration;

/// Countdown gating the "resend code" action
///
/// Idle (finished) until started. Driven by [`ResendCountdown::tick`] with the
/// elapsed wall time; sub-second remainders carry over between ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendCountdown {
    duration_seconds: u32,
    remaining_seconds: u32,
    carry_millis: u128,
}

impl ResendCountdown {
    pub fn new(duration_seconds: u32) -> Self {
        Self {
            duration_seconds,
            remaining_seconds: 0,
            carry_millis: 0,
        }
    }

    /// Start (or restart) from the full duration
    pub fn start(&mut self) {
        self.remaining_seconds = self.duration_seconds;
        self.carry_millis = 0;
    }

    /// Stop without waiting for the countdown to run out
    pub fn reset(&mut self) {
        self.remaining_seconds = 0;
        self.carry_millis = 0;
    }

    pub fn tick(&mut self, elapsed: Duration) {
        if self.remaining_seconds == 0 {
            return;
        }

        let total = self.carry_millis + elapsed.as_millis();
        let whole_seconds = u32::try_from(total / 1000).unwrap_or(u32::MAX);
        self.carry_millis = total % 1000;
        self.remaining_seconds = self.remaining_seconds.saturating_sub(whole_seconds);

        if self.remaining_seconds == 0 {
            self.carry_millis = 0;
        }
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_seconds == 0
    }

    /// `m:ss` for display next to the disabled resend button
    pub fn label(&self) -> String {
        format!("{}:{:02}", self.remaining_seconds / 60, self.remaining_seconds % 60)
    }
}
