// SPDX-License-Identifier: MPL-2.0
//! Tracing setup for the demo binary.

use crate::error::{Error, Result};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

/// Installs the global tracing subscriber.
///
/// The filter is taken from `explicit_filter`, then `RUST_LOG`, then
/// defaults to `info`; the first candidate that parses wins.
///
/// # Errors
///
/// Returns [`Error::Telemetry`] if no candidate filter parses or a global
/// subscriber is already installed.
pub fn init_tracing(explicit_filter: Option<&str>) -> Result<()> {
    let filter = filter_candidates(explicit_filter)
        .into_iter()
        .find_map(|candidate| EnvFilter::try_new(candidate).ok())
        .ok_or_else(|| Error::Telemetry("invalid log filter".to_string()))?;

    let subscriber = Registry::default().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_line_number(true),
    );
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| Error::Telemetry(err.to_string()))
}

fn filter_candidates(explicit_filter: Option<&str>) -> Vec<String> {
    let mut candidates = Vec::new();
    if let Some(f) = explicit_filter {
        candidates.push(f.to_string());
    }
    if let Ok(env) = std::env::var("RUST_LOG") {
        candidates.push(env);
    }
    candidates.push("info".to_string());
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_comes_first_and_info_last() {
        let candidates = filter_candidates(Some("iced_banner=debug"));
        assert_eq!(candidates.first().map(String::as_str), Some("iced_banner=debug"));
        assert_eq!(candidates.last().map(String::as_str), Some("info"));
    }

    #[test]
    fn info_is_always_a_candidate() {
        assert!(filter_candidates(None).iter().any(|c| c == "info"));
    }
}
