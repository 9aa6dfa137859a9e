// SPDX-License-Identifier: MPL-2.0
//! User interface modules.
//!
//! - [`banner`] - The dismissible banner widget and its state machine
//! - [`design_tokens`] - Shared colors, spacing and sizes

pub mod banner;
pub mod design_tokens;
