// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo host.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::banner::{self, BannerLayout, ElementId};
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    alignment,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// What the status line reports about the current banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerStatus {
    NotShown,
    FocusPending,
    DismissPending,
    Active,
}

impl BannerStatus {
    pub fn i18n_key(self) -> &'static str {
        match self {
            BannerStatus::NotShown => "demo-status-none",
            BannerStatus::FocusPending => "demo-status-focus-pending",
            BannerStatus::DismissPending => "demo-status-dismiss-pending",
            BannerStatus::Active => "demo-status-idle",
        }
    }
}

/// The banner currently on screen.
pub struct ShownBanner<'a> {
    pub layout: BannerLayout,
    pub message: &'a str,
    pub link: Option<ElementId>,
    pub close_focused: bool,
}

/// Context required to render the demo window.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub banner: Option<ShownBanner<'a>>,
    pub status: BannerStatus,
    pub outside: ElementId,
    pub dismiss_requests: usize,
    pub warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let mut column = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("demo-title")).size(typography::TITLE_SM));

    if let Some(key) = ctx.warning {
        column = column.push(Text::new(i18n.tr(key)).size(typography::BODY_SM));
    }

    if let Some(shown) = ctx.banner {
        let mut content = Column::new()
            .spacing(spacing::XS)
            .push(Text::new(shown.message).size(typography::BODY));
        if let Some(link) = shown.link {
            content = content.push(
                button(Text::new(i18n.tr("demo-link")).size(typography::BODY_SM))
                    .padding(0)
                    .style(button::text)
                    .on_press(Message::Focus(link)),
            );
        }
        column = column.push(banner::view::view(
            &shown.layout,
            content.into(),
            Message::Dismissed,
            shown.close_focused,
            i18n,
        ));
    }

    column = column.push(Text::new(i18n.tr(ctx.status.i18n_key())).size(typography::BODY_SM));

    let controls = Row::new()
        .spacing(spacing::SM)
        .push(button(Text::new(i18n.tr("demo-show-banner"))).on_press(Message::ShowBanner))
        .push(
            button(Text::new(i18n.tr("demo-focus-elsewhere")))
                .style(button::secondary)
                .on_press(Message::Focus(ctx.outside)),
        )
        .push(
            button(Text::new(i18n.tr("demo-blur")))
                .style(button::secondary)
                .on_press(Message::Blur),
        );
    column = column.push(controls).push(
        Text::new(format!(
            "{}: {}",
            i18n.tr("demo-dismissed-count"),
            ctx.dismiss_requests
        ))
        .size(typography::BODY_SM),
    );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_a_translation() {
        let i18n = I18n::default();
        for status in [
            BannerStatus::NotShown,
            BannerStatus::FocusPending,
            BannerStatus::DismissPending,
            BannerStatus::Active,
        ] {
            assert!(!i18n.tr(status.i18n_key()).starts_with("MISSING"));
        }
    }
}
