// SPDX-License-Identifier: MPL-2.0
//! Toast cards, stacked in the bottom-right corner above the page.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, Column, Container, Row, Space, Text};
use iced::{Element, Length, Theme};

/// Layer drawn over the page; empty when nothing is pending.
pub fn overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    if !manager.has_notifications() {
        return Space::new().width(Length::Shrink).height(Length::Shrink).into();
    }

    let cards = manager.visible().map(|notification| card(notification, i18n));

    Container::new(
        Column::with_children(cards)
            .spacing(spacing::XS)
            .align_x(Horizontal::Right),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Bottom)
    .padding(spacing::MD)
    .into()
}

fn card<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
    let accent = notification.severity().accent();
    let message = i18n.tr_with_args(notification.message_key(), &notification.message_args());

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new(glyph(notification.severity()))
                .size(typography::TITLE_SM)
                .style(move |_: &Theme| text::Style {
                    color: Some(accent),
                }),
        )
        .push(
            Text::new(message)
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(
            button(Text::new("×").size(typography::BODY_LG))
                .on_press(Message::Dismiss(notification.id()))
                .padding(spacing::XXS)
                .style(styles::button::dismiss),
        );

    Container::new(row)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| styles::container::toast(theme, accent))
        .into()
}

fn glyph(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✓",
        Severity::Warning => "!",
        Severity::Error => "✕",
    }
}
