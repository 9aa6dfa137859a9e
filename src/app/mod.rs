// SPDX-License-Identifier: MPL-2.0
//! Demo host for the banner widget.
//!
//! The `App` owns the element tree and at most one banner. It forwards focus
//! moves to the banner as focus events, applies the effects the banner
//! returns, and treats every dismissal request as the host's `on_dismissed`
//! callback: the request is counted and the banner is removed.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use config::Config;
use crate::i18n::fluent::I18n;
use crate::ui::banner::{
    Banner, ContentTree, Effect, ElementId, ElementTree, FocusEvent, NodeKind, NodeSpec, Props,
    Timings,
};
use iced::{window, Element, Subscription, Task};
use std::fmt;
use std::time::Instant;
use view::{BannerStatus, ShownBanner, ViewContext};

pub const WINDOW_DEFAULT_WIDTH: u32 = 560;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 360;

/// Identifier given to the demo banner's root.
const BANNER_ID: &str = "demo-banner";

struct Shown {
    banner: Banner,
    link: Option<ElementId>,
}

pub struct App {
    pub i18n: I18n,
    timings: Timings,
    dismissable: bool,
    message: String,
    with_link: bool,
    tree: ElementTree,
    /// Focusable element outside any banner.
    outside: ElementId,
    shown: Option<Shown>,
    /// Number of dismissal requests received from banners.
    dismiss_requests: usize,
    /// i18n key of a startup warning, if any.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("banner_shown", &self.shown.is_some())
            .field("dismiss_requests", &self.dismiss_requests)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot closure to be Fn; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences and shows the first banner.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, warning) = config::load();
        let mut app = Self::from_config(flags, &config, warning);
        app.show_banner(Instant::now());
        (app, Task::none())
    }

    fn from_config(flags: Flags, config: &Config, warning: Option<String>) -> Self {
        let i18n = I18n::new(flags.lang.clone(), config.general.language.as_deref());
        let message = flags
            .message
            .unwrap_or_else(|| i18n.tr("demo-default-message"));
        let dismissable = !flags.no_dismiss && config.banner.dismissable.unwrap_or(true);

        let mut tree = ElementTree::new();
        let doc = tree.document();
        let outside = tree.append(doc, NodeKind::Input);

        Self {
            i18n,
            timings: config.banner.timings(),
            dismissable,
            message,
            with_link: flags.with_link,
            tree,
            outside,
            shown: None,
            dismiss_requests: 0,
            warning,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("demo-title")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        match message {
            Message::ShowBanner => self.show_banner(now),
            Message::Focus(target) => self.move_focus(Some(target), now),
            Message::Blur => self.move_focus(None, now),
            Message::WindowUnfocused => self.window_unfocused(now),
            Message::WindowFocused => self.window_focused(now),
            Message::Dismissed => {
                let requested = self
                    .shown
                    .as_ref()
                    .and_then(|shown| shown.banner.activate_close());
                if requested == Some(Effect::Dismiss) {
                    self.on_dismissed();
                }
            }
            Message::Tick(at) => self.tick(at),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let banner = self.shown.as_ref().map(|shown| {
            let close = shown.banner.refs().close_button;
            ShownBanner {
                layout: shown.banner.layout(),
                message: &self.message,
                link: shown.link,
                close_focused: close.is_some() && self.tree.focused() == close,
            }
        });

        view::view(ViewContext {
            i18n: &self.i18n,
            banner,
            status: self.status(),
            outside: self.outside,
            dismiss_requests: self.dismiss_requests,
            warning: self.warning.as_deref(),
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.has_pending_timers()),
        ])
    }

    fn has_pending_timers(&self) -> bool {
        self.shown
            .as_ref()
            .is_some_and(|shown| shown.banner.has_pending_timers())
    }

    fn status(&self) -> BannerStatus {
        match &self.shown {
            None => BannerStatus::NotShown,
            Some(shown) if shown.banner.is_focus_pending() => BannerStatus::FocusPending,
            Some(shown) if shown.banner.is_dismiss_pending() => BannerStatus::DismissPending,
            Some(_) => BannerStatus::Active,
        }
    }

    /// Replaces the current banner with a freshly mounted one.
    fn show_banner(&mut self, now: Instant) {
        self.hide();

        let mut content = vec![NodeSpec::Text(self.message.clone())];
        if self.with_link {
            content.push(NodeSpec::Link(self.i18n.tr("demo-link")));
        }

        let props = Props::new()
            .with_id(BANNER_ID)
            .dismissable(self.dismissable);
        let mut banner = Banner::new(props, self.timings);
        let doc = self.tree.document();
        let refs = banner.layout().render_into(&mut self.tree, doc, &content);
        banner.mount(now, refs, &mut self.tree);

        let link = refs.root.and_then(|root| self.tree.first_link(root));
        self.shown = Some(Shown { banner, link });
    }

    /// Unmounts and removes the current banner, if any.
    fn hide(&mut self) {
        if let Some(mut shown) = self.shown.take() {
            let root = shown.banner.refs().root;
            shown.banner.unmount(&mut self.tree);
            if let Some(root) = root {
                self.tree.remove(root);
            }
        }
    }

    fn on_dismissed(&mut self) {
        self.dismiss_requests += 1;
        tracing::info!(count = self.dismiss_requests, "banner dismissed");
        self.hide();
    }

    fn move_focus(&mut self, target: Option<ElementId>, now: Instant) {
        let events = self.tree.move_focus(target);
        self.deliver_focus_events(events, now);
    }

    /// Blurs the focused element, remembering it for [`Self::window_focused`].
    fn window_unfocused(&mut self, now: Instant) {
        let events = self.tree.suspend_focus();
        self.deliver_focus_events(events, now);
    }

    /// Gives focus back to the element that held it when the window was left.
    fn window_focused(&mut self, now: Instant) {
        let events = self.tree.resume_focus();
        self.deliver_focus_events(events, now);
    }

    fn deliver_focus_events(&mut self, events: Vec<FocusEvent>, now: Instant) {
        if let Some(shown) = self.shown.as_mut() {
            for event in events {
                shown.banner.handle_focus(now, event, &self.tree);
            }
        }
    }

    fn tick(&mut self, now: Instant) {
        let effects = match self.shown.as_mut() {
            Some(shown) => shown.banner.tick(now, &self.tree),
            None => return,
        };
        for effect in effects {
            match effect {
                Effect::Focus(target) => self.move_focus(Some(target), now),
                Effect::Dismiss => self.on_dismissed(),
            }
        }
    }
}
