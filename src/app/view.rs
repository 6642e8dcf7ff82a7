// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a single centered column: header, tab bar, then either the
//! input surface or the preview, then the results. Toasts float on top.

use super::session::{Phase, Session};
use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use crate::ui::{header, input_panel, preview, results};
use iced::alignment::Horizontal;
use iced::widget::{scrollable, Column, Container, Stack};
use iced::{Element, Length};
use std::time::Duration;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
    pub notifications: &'a notifications::Manager,
    pub theme_mode: ThemeMode,
    pub server_url: &'a str,
    pub spinner_elapsed: Duration,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let session = ctx.session;
    let phase = session.phase();
    let analyzing = phase == Phase::Analyzing;

    let header = header::view(header::ViewContext {
        i18n: ctx.i18n,
        theme_mode: ctx.theme_mode,
        server_url: ctx.server_url,
    })
    .map(Message::Header);

    let input_ctx = input_panel::ViewContext {
        i18n: ctx.i18n,
        tab: session.tab(),
        phase,
        url_draft: session.url_draft(),
        spinner_elapsed: ctx.spinner_elapsed,
    };

    let mut page = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(header)
        .push(input_panel::tab_bar(&input_ctx).map(Message::Input));

    if let Some(surface) = input_panel::surface(&input_ctx) {
        page = page.push(surface.map(Message::Input));
    }

    if phase.shows_preview() {
        if let Some(current) = session.preview() {
            page = page.push(
                preview::view(preview::ViewContext {
                    i18n: ctx.i18n,
                    preview: current,
                    can_submit: session.can_submit(),
                    analyzing,
                })
                .map(Message::Preview),
            );
        }
    }

    let results = results::view(results::ViewContext {
        i18n: ctx.i18n,
        results: session.results(),
        analyzing,
        spinner_elapsed: ctx.spinner_elapsed,
    });
    if let Some(results) = results {
        page = page.push(results.map(Message::Results));
    }

    let centered = Container::new(page)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let base = Container::new(scrollable(centered).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = notifications::overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new().push(base).push(toasts).into()
}
