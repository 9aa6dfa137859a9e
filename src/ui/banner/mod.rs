// SPDX-License-Identifier: MPL-2.0
//! Dismissible notification banner.
//!
//! A banner shows transient content with an optional close control. Shortly
//! after it appears it pulls keyboard focus to its close control (or to the
//! first link in its content), and once focus has been outside it for a
//! while it asks the host to dismiss it.
//!
//! # Components
//!
//! - [`state`] - `Banner` lifecycle and focus/timer state machine
//! - [`focus`] - Element references, focus events, and the collaborator traits
//! - [`tree`] - Headless `ElementTree` implementing those traits
//! - [`view`] - Render description and iced view
//! - [`timer`] / [`timing`] - One-shot deadlines and their validated durations
//!
//! # Usage
//!
//! ```
//! use iced_banner::ui::banner::{Banner, Effect, ElementTree, NodeSpec, Props, Timings};
//! use std::time::{Duration, Instant};
//!
//! let mut tree = ElementTree::new();
//! let mut banner = Banner::new(Props::new(), Timings::default());
//! let doc = tree.document();
//! let refs = banner
//!     .layout()
//!     .render_into(&mut tree, doc, &[NodeSpec::Text("Saved".into())]);
//!
//! let start = Instant::now();
//! banner.mount(start, refs, &mut tree);
//!
//! let effects = banner.tick(start + Duration::from_millis(200), &tree);
//! assert_eq!(effects, vec![Effect::Focus(refs.close_button.unwrap())]);
//!
//! banner.unmount(&mut tree);
//! ```

pub mod focus;
pub mod state;
pub mod timer;
pub mod timing;
pub mod tree;
pub mod view;

pub use focus::{ContentTree, ElementId, FocusEvent, FocusKind, FocusSource, ListenerHandle};
pub use state::{Activity, Banner, Effect, Phase, Props, Refs};
pub use timing::{FocusDelay, InactivityTimeout, Timings};
pub use tree::{ElementTree, NodeKind, NodeSpec};
pub use view::{BannerLayout, CloseControl, Role, DISMISS_LABEL, DISMISS_LABEL_KEY};
