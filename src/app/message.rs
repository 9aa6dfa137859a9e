// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo host.

use crate::ui::banner::ElementId;
use std::time::Instant;

/// Runtime flags parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override (`--lang`).
    pub lang: Option<String>,
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Hide the close control (`--no-dismiss`), overriding the config file.
    pub no_dismiss: bool,
    /// Add a link to the banner content (`--with-link`).
    pub with_link: bool,
    /// Banner text (`--message`).
    pub message: Option<String>,
}

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Replace the current banner (if any) with a fresh one.
    ShowBanner,
    /// An element was clicked and takes focus.
    Focus(ElementId),
    /// Focus moved to nothing inside the window.
    Blur,
    /// The window lost focus.
    WindowUnfocused,
    /// The window regained focus.
    WindowFocused,
    /// The banner's close control was pressed.
    Dismissed,
    /// Periodic tick while a banner timer is pending.
    Tick(Instant),
}
