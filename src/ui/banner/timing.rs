// SPDX-License-Identifier: MPL-2.0
//! Banner timing domain types.
//!
//! Both delays are stored in milliseconds and clamped to their configured
//! ranges on construction, so the state machine never sees an invalid value.

use std::time::Duration;

/// Default delay before the banner moves focus to its close control or
/// first link (in milliseconds).
pub const DEFAULT_MOUNT_FOCUS_DELAY_MS: u64 = 200;

/// Minimum mount-focus delay (in milliseconds).
pub const MIN_MOUNT_FOCUS_DELAY_MS: u64 = 0;

/// Maximum mount-focus delay (in milliseconds). Kept below
/// [`MIN_INACTIVITY_TIMEOUT_MS`] so focus delegation always lands before any
/// inactivity dismissal.
pub const MAX_MOUNT_FOCUS_DELAY_MS: u64 = 900;

/// Default time focus may stay outside the banner before dismissal is
/// requested (in milliseconds).
pub const DEFAULT_INACTIVITY_TIMEOUT_MS: u64 = 5_000;

/// Minimum inactivity timeout (in milliseconds).
pub const MIN_INACTIVITY_TIMEOUT_MS: u64 = 1_000;

/// Maximum inactivity timeout (in milliseconds).
pub const MAX_INACTIVITY_TIMEOUT_MS: u64 = 60_000;

/// Delay between mount and initial focus delegation.
///
/// # Example
///
/// ```
/// use iced_banner::ui::banner::FocusDelay;
///
/// assert_eq!(FocusDelay::default().value(), 200);
/// assert_eq!(FocusDelay::new(10_000).value(), 900); // Clamped to max
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusDelay(u64);

impl FocusDelay {
    /// Creates a new delay, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_MOUNT_FOCUS_DELAY_MS, MAX_MOUNT_FOCUS_DELAY_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for FocusDelay {
    fn default() -> Self {
        Self(DEFAULT_MOUNT_FOCUS_DELAY_MS)
    }
}

/// Grace period after focus leaves the banner before dismissal is requested.
///
/// # Example
///
/// ```
/// use iced_banner::ui::banner::InactivityTimeout;
///
/// assert_eq!(InactivityTimeout::default().value(), 5_000);
/// assert_eq!(InactivityTimeout::new(0).value(), 1_000); // Clamped to min
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InactivityTimeout(u64);

impl InactivityTimeout {
    /// Creates a new timeout, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_INACTIVITY_TIMEOUT_MS, MAX_INACTIVITY_TIMEOUT_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for InactivityTimeout {
    fn default() -> Self {
        Self(DEFAULT_INACTIVITY_TIMEOUT_MS)
    }
}

/// The two durations a banner schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timings {
    pub mount_focus_delay: FocusDelay,
    pub inactivity_timeout: InactivityTimeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_delay_clamps_to_valid_range() {
        assert_eq!(FocusDelay::new(0).value(), MIN_MOUNT_FOCUS_DELAY_MS);
        assert_eq!(FocusDelay::new(u64::MAX).value(), MAX_MOUNT_FOCUS_DELAY_MS);
    }

    #[test]
    fn inactivity_timeout_clamps_to_valid_range() {
        assert_eq!(InactivityTimeout::new(10).value(), MIN_INACTIVITY_TIMEOUT_MS);
        assert_eq!(
            InactivityTimeout::new(u64::MAX).value(),
            MAX_INACTIVITY_TIMEOUT_MS
        );
    }

    #[test]
    fn accepts_values_inside_range() {
        assert_eq!(FocusDelay::new(350).value(), 350);
        assert_eq!(InactivityTimeout::new(12_000).value(), 12_000);
    }

    #[test]
    fn as_duration_converts_correctly() {
        assert_eq!(FocusDelay::default().as_duration(), Duration::from_millis(200));
        assert_eq!(
            InactivityTimeout::default().as_duration(),
            Duration::from_secs(5)
        );
    }
}
