// SPDX-License-Identifier: MPL-2.0
//! `iced_banner` is a dismissible notification banner for the Iced GUI
//! framework.
//!
//! The banner pulls keyboard focus to its close control shortly after it
//! appears and asks to be dismissed once focus has stayed outside it for a
//! while. Its state machine is headless ([`ui::banner::Banner`]) and the
//! crate ships a small demo host ([`app`]) with localized strings and
//! persisted timing preferences.

pub mod app;
pub mod error;
pub mod i18n;
pub mod telemetry;
pub mod ui;
