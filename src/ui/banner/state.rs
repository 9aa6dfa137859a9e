// SPDX-License-Identifier: MPL-2.0
//! Banner lifecycle and focus state machine.
//!
//! A banner is created, mounted once, and unmounted once. While mounted it
//! runs two one-shot timers:
//!
//! - the **mount-focus** timer, armed at mount, which hands focus to the
//!   close control (or the first link in the content) when it fires;
//! - the **inactivity** timer, armed when focus leaves the banner's subtree
//!   and cancelled when focus comes back. When it fires the banner asks to
//!   be dismissed.
//!
//! The banner never removes itself. Dismissal requests come out of
//! [`Banner::tick`] and [`Banner::activate_close`] as [`Effect::Dismiss`];
//! the host decides what to do with them.

use super::focus::{ContentTree, ElementId, FocusEvent, FocusKind, FocusSource, ListenerHandle};
use super::timer::Timer;
use super::timing::Timings;
use super::view::BannerLayout;
use std::time::Instant;

/// Caller-supplied configuration of one banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Props {
    id: Option<String>,
    dismissable: bool,
}

impl Default for Props {
    fn default() -> Self {
        Self {
            id: None,
            dismissable: true,
        }
    }
}

impl Props {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identifier passed through to the rendered root.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Controls whether a close control is rendered.
    #[must_use]
    pub fn dismissable(mut self, dismissable: bool) -> Self {
        self.dismissable = dismissable;
        self
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn is_dismissable(&self) -> bool {
        self.dismissable
    }
}

/// Element references produced by rendering the banner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Refs {
    /// Root of the content subtree (the focus boundary).
    pub root: Option<ElementId>,
    /// The close control, when rendered.
    pub close_button: Option<ElementId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Created,
    Mounted,
    Unmounted,
}

/// Focus-tracking state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    /// No dismissal scheduled.
    Active,
    /// Focus is outside the banner and the inactivity timer is armed.
    IdlePendingDismiss,
}

/// Side effects requested by the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Move input focus to this element.
    Focus(ElementId),
    /// Ask the host to remove the banner.
    Dismiss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Due {
    MountFocus,
    Inactivity,
}

#[derive(Debug)]
pub struct Banner {
    props: Props,
    timings: Timings,
    phase: Phase,
    refs: Refs,
    mount_focus: Timer,
    inactivity: Timer,
    focus_entered: Option<ListenerHandle>,
    focus_left: Option<ListenerHandle>,
}

impl Banner {
    #[must_use]
    pub fn new(props: Props, timings: Timings) -> Self {
        Self {
            props,
            timings,
            phase: Phase::Created,
            refs: Refs::default(),
            mount_focus: Timer::new(),
            inactivity: Timer::new(),
            focus_entered: None,
            focus_left: None,
        }
    }

    /// Describes what should be rendered for this banner.
    #[must_use]
    pub fn layout(&self) -> BannerLayout {
        BannerLayout::from_props(&self.props)
    }

    /// Starts the banner: arms the mount-focus timer and subscribes to focus
    /// entering and leaving the content subtree.
    ///
    /// A banner is mounted once; later calls are ignored.
    pub fn mount(&mut self, now: Instant, refs: Refs, source: &mut impl FocusSource) {
        if self.phase != Phase::Created {
            tracing::warn!(phase = ?self.phase, "banner mounted twice, ignoring");
            return;
        }
        self.phase = Phase::Mounted;
        self.refs = refs;

        self.mount_focus.cancel();
        self.mount_focus
            .arm(now, self.timings.mount_focus_delay.as_duration());

        if let Some(root) = refs.root {
            self.focus_entered = Some(source.subscribe(root, FocusKind::Entered));
            self.focus_left = Some(source.subscribe(root, FocusKind::Left));
        }

        tracing::debug!(
            id = self.props.id(),
            delay_ms = self.timings.mount_focus_delay.value(),
            "banner mounted"
        );
    }

    /// Stops the banner: cancels both timers and removes both focus
    /// listeners. Nothing fires afterwards.
    pub fn unmount(&mut self, source: &mut impl FocusSource) {
        if self.phase == Phase::Unmounted {
            return;
        }
        self.mount_focus.cancel();
        self.inactivity.cancel();

        for handle in [self.focus_entered.take(), self.focus_left.take()]
            .into_iter()
            .flatten()
        {
            source.unsubscribe(handle);
        }

        self.refs = Refs::default();
        self.phase = Phase::Unmounted;
        tracing::debug!(id = self.props.id(), "banner unmounted");
    }

    /// Routes a notification from one of this banner's listeners.
    pub fn handle_focus(&mut self, now: Instant, event: FocusEvent, tree: &impl ContentTree) {
        let ours = match event.kind {
            FocusKind::Entered => self.focus_entered == Some(event.listener),
            FocusKind::Left => self.focus_left == Some(event.listener),
        };
        if !ours {
            tracing::trace!(?event, "ignoring focus event for another listener");
            return;
        }
        match event.kind {
            FocusKind::Entered => self.on_focus_in(),
            FocusKind::Left => self.on_focus_out(now, event.related, tree),
        }
    }

    /// Focus entered the content subtree: any pending dismissal is cancelled.
    pub fn on_focus_in(&mut self) {
        if self.inactivity.cancel() {
            tracing::debug!(id = self.props.id(), "focus returned, dismissal cancelled");
        }
    }

    /// Focus left an element of the content subtree for `related`.
    ///
    /// Arms the inactivity timer unless `related` is itself inside the
    /// subtree or a dismissal is already pending. Without a rendered root
    /// there is no subtree to leave and nothing happens.
    pub fn on_focus_out(
        &mut self,
        now: Instant,
        related: Option<ElementId>,
        tree: &impl ContentTree,
    ) {
        if self.phase != Phase::Mounted {
            return;
        }
        let Some(root) = self.refs.root else {
            return;
        };
        if related.is_some_and(|related| tree.contains(root, related)) {
            return;
        }
        if self.inactivity.is_pending() {
            return;
        }

        self.inactivity
            .arm(now, self.timings.inactivity_timeout.as_duration());
        tracing::debug!(
            id = self.props.id(),
            timeout_ms = self.timings.inactivity_timeout.value(),
            "focus left banner, dismissal scheduled"
        );
    }

    /// Fires every timer whose deadline has passed, earliest first.
    pub fn tick(&mut self, now: Instant, tree: &impl ContentTree) -> Vec<Effect> {
        if self.phase != Phase::Mounted {
            return Vec::new();
        }

        let mut due: Vec<(Instant, Due)> = [
            (self.mount_focus.deadline(), Due::MountFocus),
            (self.inactivity.deadline(), Due::Inactivity),
        ]
        .into_iter()
        .filter_map(|(deadline, which)| deadline.filter(|d| *d <= now).map(|d| (d, which)))
        .collect();
        due.sort_by_key(|(deadline, _)| *deadline);

        let mut effects = Vec::new();
        for (_, which) in due {
            match which {
                Due::MountFocus => {
                    if self.mount_focus.fire_if_due(now) {
                        effects.extend(self.initial_focus_target(tree).map(Effect::Focus));
                    }
                }
                Due::Inactivity => {
                    if self.inactivity.fire_if_due(now) {
                        tracing::debug!(id = self.props.id(), "inactivity timeout, requesting dismissal");
                        effects.push(Effect::Dismiss);
                    }
                }
            }
        }
        effects
    }

    /// The close control was activated.
    ///
    /// Returns a dismissal request whenever the control is rendered,
    /// regardless of timer state.
    #[must_use]
    pub fn activate_close(&self) -> Option<Effect> {
        (self.phase == Phase::Mounted && self.props.is_dismissable()).then_some(Effect::Dismiss)
    }

    fn initial_focus_target(&self, tree: &impl ContentTree) -> Option<ElementId> {
        if let Some(close) = self.refs.close_button.filter(|c| tree.is_attached(*c)) {
            return Some(close);
        }
        let link = self.refs.root.and_then(|root| tree.first_link(root));
        if link.is_none() {
            tracing::debug!(id = self.props.id(), "nothing to focus in banner");
        }
        link
    }

    #[must_use]
    pub fn props(&self) -> &Props {
        &self.props
    }

    #[must_use]
    pub fn refs(&self) -> Refs {
        self.refs
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn activity(&self) -> Activity {
        if self.inactivity.is_pending() {
            Activity::IdlePendingDismiss
        } else {
            Activity::Active
        }
    }

    #[must_use]
    pub fn is_focus_pending(&self) -> bool {
        self.mount_focus.is_pending()
    }

    #[must_use]
    pub fn is_dismiss_pending(&self) -> bool {
        self.inactivity.is_pending()
    }

    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.is_focus_pending() || self.is_dismiss_pending()
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        [self.mount_focus.deadline(), self.inactivity.deadline()]
            .into_iter()
            .flatten()
            .min()
    }
}
