// SPDX-License-Identifier: MPL-2.0
//! Banner rendering.
//!
//! [`BannerLayout`] is the toolkit-independent description of a rendered
//! banner: alert role, atomic live region, and an optional close control
//! with its own accessible label. It can be realized either as elements of
//! an [`ElementTree`] (for focus bookkeeping) or as an iced [`Element`].

use super::focus::ElementId;
use super::state::{Props, Refs};
use super::tree::{ElementTree, NodeKind, NodeSpec};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, tooltip, Container, Id, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Accessible label of the close control.
pub const DISMISS_LABEL: &str = "Dismiss this message";

/// i18n key resolving to [`DISMISS_LABEL`] in English.
pub const DISMISS_LABEL_KEY: &str = "banner-dismiss";

/// Glyph drawn inside the close control.
const CLOSE_GLYPH: &str = "\u{2715}";

/// Assistive-technology role of the banner root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Alert,
}

/// The close affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseControl {
    /// i18n key of the accessible label, independent of the icon.
    pub label_key: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerLayout {
    pub id: Option<String>,
    pub role: Role,
    /// Changes are announced as one unit rather than piecemeal.
    pub atomic: bool,
    pub close: Option<CloseControl>,
}

impl BannerLayout {
    #[must_use]
    pub fn from_props(props: &Props) -> Self {
        Self {
            id: props.id().map(str::to_owned),
            role: Role::Alert,
            atomic: true,
            close: props.is_dismissable().then_some(CloseControl {
                label_key: DISMISS_LABEL_KEY,
            }),
        }
    }

    /// Materializes the banner under `parent` and returns the references the
    /// state machine needs.
    ///
    /// Structure: root container > (contents container > children, close
    /// wrapper > close button).
    pub fn render_into(
        &self,
        tree: &mut ElementTree,
        parent: ElementId,
        children: &[NodeSpec],
    ) -> Refs {
        let root = tree.append(parent, NodeKind::Container);
        let contents = tree.append(root, NodeKind::Container);
        for child in children {
            tree.append_spec(contents, child);
        }
        let close_button = self.close.map(|_| {
            let wrapper = tree.append(root, NodeKind::Container);
            tree.append(wrapper, NodeKind::Button(DISMISS_LABEL.to_string()))
        });
        Refs {
            root: Some(root),
            close_button,
        }
    }
}

/// Renders the banner around `content`.
///
/// The close control emits `on_dismissed` directly when pressed.
/// `close_focused` highlights it while it holds keyboard focus.
pub fn view<'a, Message: Clone + 'a>(
    layout: &BannerLayout,
    content: Element<'a, Message>,
    on_dismissed: Message,
    close_focused: bool,
    i18n: &I18n,
) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(content)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    if let Some(close) = layout.close {
        let close_button = button(Text::new(CLOSE_GLYPH).size(typography::BODY))
            .on_press(on_dismissed)
            .padding(spacing::XXS)
            .style(move |theme: &Theme, status| dismiss_button_style(theme, status, close_focused));
        let labelled = tooltip(
            close_button,
            Text::new(i18n.tr_or(close.label_key, DISMISS_LABEL)).size(typography::BODY_SM),
            tooltip::Position::Bottom,
        )
        .gap(spacing::XXS);
        row = row.push(labelled);
    }

    let mut banner = Container::new(row)
        .width(Length::Fixed(sizing::BANNER_WIDTH))
        .padding(spacing::SM)
        .style(banner_container_style);
    if let Some(id) = &layout.id {
        banner = banner.id(Id::from(id.clone()));
    }
    banner.into()
}

fn banner_container_style(theme: &Theme) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: palette::INFO_500,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status, focused: bool) -> button::Style {
    let base = theme.extended_palette().background.base;
    let highlight = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };
    let focus_border = if focused {
        iced::Border {
            color: palette::PRIMARY_500,
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        }
    } else {
        iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        }
    };

    let (background, text_color) = match status {
        button::Status::Active => (None, base.text),
        button::Status::Hovered => (highlight(opacity::OVERLAY_SUBTLE), base.text),
        button::Status::Pressed => (highlight(opacity::OVERLAY_MEDIUM), base.text),
        button::Status::Disabled => (
            None,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
        ),
    };

    button::Style {
        background,
        text_color,
        border: focus_border,
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::banner::focus::ContentTree;

    #[test]
    fn dismissable_banner_renders_close_control() {
        let layout = BannerLayout::from_props(&Props::new());
        assert_eq!(
            layout.close,
            Some(CloseControl {
                label_key: DISMISS_LABEL_KEY
            })
        );

        let explicit = BannerLayout::from_props(&Props::new().dismissable(true));
        assert!(explicit.close.is_some());
    }

    #[test]
    fn non_dismissable_banner_has_no_close_control() {
        let layout = BannerLayout::from_props(&Props::new().dismissable(false));
        assert!(layout.close.is_none());

        let mut tree = ElementTree::new();
        let doc = tree.document();
        let refs = layout.render_into(&mut tree, doc, &[NodeSpec::Text("x".into())]);
        assert!(refs.close_button.is_none());
    }

    #[test]
    fn layout_is_an_atomic_alert() {
        let layout = BannerLayout::from_props(&Props::new());
        assert_eq!(layout.role, Role::Alert);
        assert!(layout.atomic);
    }

    #[test]
    fn id_is_passed_through() {
        let layout = BannerLayout::from_props(&Props::new().with_id("push-rejected"));
        assert_eq!(layout.id.as_deref(), Some("push-rejected"));
    }

    #[test]
    fn render_places_children_and_close_inside_root() {
        let layout = BannerLayout::from_props(&Props::new());
        let mut tree = ElementTree::new();
        let doc = tree.document();
        let refs = layout.render_into(
            &mut tree,
            doc,
            &[NodeSpec::Text("hi".into()), NodeSpec::Link("more".into())],
        );

        let root = refs.root.expect("root rendered");
        let close = refs.close_button.expect("close rendered");
        assert!(tree.contains(root, close));
        assert_eq!(
            tree.kind(close),
            Some(&NodeKind::Button(DISMISS_LABEL.to_string()))
        );
        assert!(tree.first_link(root).is_some());
    }

    #[test]
    fn dismiss_button_style_marks_focus() {
        let theme = Theme::Dark;
        let focused = dismiss_button_style(&theme, button::Status::Active, true);
        let unfocused = dismiss_button_style(&theme, button::Status::Active, false);

        assert_eq!(focused.border.color, palette::PRIMARY_500);
        assert_ne!(focused.border.width, unfocused.border.width);
    }

    #[test]
    fn banner_container_has_background_and_accent() {
        let style = banner_container_style(&Theme::Light);
        assert!(style.background.is_some());
        assert_eq!(style.border.color, palette::INFO_500);
    }
}
