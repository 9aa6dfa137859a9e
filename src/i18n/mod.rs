// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! Translations are Fluent `.ftl` files embedded from `assets/i18n/`. The
//! locale is picked from the CLI, then the config file, then the system
//! settings, falling back to `en-US`.

pub mod fluent;
