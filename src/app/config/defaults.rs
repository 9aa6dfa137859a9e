// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Focus delegation**: Delay before the banner moves focus on appearance
//! - **Inactivity**: Grace period after focus leaves the banner
//! - **Tick**: Host polling interval while a banner timer is pending
//!
//! Banner timing bounds belong to the banner's timing types and are
//! re-exported here next to the host's own settings.

pub use crate::ui::banner::timing::{
    DEFAULT_INACTIVITY_TIMEOUT_MS, DEFAULT_MOUNT_FOCUS_DELAY_MS, MAX_INACTIVITY_TIMEOUT_MS,
    MAX_MOUNT_FOCUS_DELAY_MS, MIN_INACTIVITY_TIMEOUT_MS, MIN_MOUNT_FOCUS_DELAY_MS,
};

// ==========================================================================
// Host Tick
// ==========================================================================

/// Interval of the host tick subscription while a banner timer is pending
/// (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 50;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_delay_default_is_within_bounds() {
        assert!(DEFAULT_MOUNT_FOCUS_DELAY_MS >= MIN_MOUNT_FOCUS_DELAY_MS);
        assert!(DEFAULT_MOUNT_FOCUS_DELAY_MS <= MAX_MOUNT_FOCUS_DELAY_MS);
    }

    #[test]
    fn inactivity_default_is_within_bounds() {
        assert!(DEFAULT_INACTIVITY_TIMEOUT_MS >= MIN_INACTIVITY_TIMEOUT_MS);
        assert!(DEFAULT_INACTIVITY_TIMEOUT_MS <= MAX_INACTIVITY_TIMEOUT_MS);
    }

    #[test]
    fn focus_delegation_happens_before_inactivity_dismissal() {
        assert!(MAX_MOUNT_FOCUS_DELAY_MS < MIN_INACTIVITY_TIMEOUT_MS);
    }

    #[test]
    fn tick_is_finer_than_focus_delay() {
        assert!(TICK_INTERVAL_MS < DEFAULT_MOUNT_FOCUS_DELAY_MS);
    }
}
