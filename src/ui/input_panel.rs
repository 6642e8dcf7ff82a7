// SPDX-License-Identifier: MPL-2.0
//! Tab bar and the two input surfaces (drop zone, URL field).

use crate::app::session::{Phase, Tab};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length, Theme,
};
use std::time::Duration;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub tab: Tab,
    pub phase: Phase,
    pub url_draft: &'a str,
    /// Time since the screenshot request started, for the spinner.
    pub spinner_elapsed: Duration,
}

#[derive(Debug, Clone)]
pub enum Message {
    SelectTab(Tab),
    PickFile,
    UrlChanged(String),
    LoadUrl,
}

/// Both tabs, the active one highlighted. Always shown.
pub fn tab_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tab_button = |tab: Tab, key: &str| {
        let style: fn(&Theme, button::Status) -> button::Style = if tab == ctx.tab {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
            .on_press(Message::SelectTab(tab))
            .padding([spacing::XS, spacing::MD])
            .style(style)
    };

    Row::new()
        .spacing(spacing::XS)
        .push(tab_button(Tab::File, "tab-file"))
        .push(tab_button(Tab::Url, "tab-url"))
        .into()
}

/// The active tab's input surface, or the screenshot spinner.
///
/// Returns `None` once a preview is on screen.
pub fn surface<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    match ctx.phase {
        Phase::Collecting => Some(match ctx.tab {
            Tab::File => file_surface(ctx.i18n),
            Tab::Url => url_surface(ctx.i18n, ctx.url_draft),
        }),
        Phase::LoadingPreview => Some(loading(ctx.i18n, ctx.spinner_elapsed)),
        Phase::Previewing | Phase::Analyzing | Phase::Reviewed => None,
    }
}

fn file_surface(i18n: &I18n) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("drop-zone-hint")).size(typography::BODY_LG))
        .push(Text::new(i18n.tr("drop-zone-or")).size(typography::BODY_SM))
        .push(
            button(Text::new(i18n.tr("pick-file-button")))
                .on_press(Message::PickFile)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::drop_zone)
        .into()
}

fn url_surface<'a>(i18n: &I18n, url_draft: &'a str) -> Element<'a, Message> {
    let field = text_input(&i18n.tr("url-placeholder"), url_draft)
        .on_input(Message::UrlChanged)
        .on_submit(Message::LoadUrl)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::URL_FIELD_WIDTH));

    let load = button(Text::new(i18n.tr("load-url-button")))
        .on_press(Message::LoadUrl)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(field)
        .push(load)
        .into()
}

fn loading(i18n: &I18n, elapsed: Duration) -> Element<'_, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(AnimatedSpinner::new(palette::PRIMARY_500, elapsed).into_element())
        .push(Text::new(i18n.tr("loading-preview")).size(typography::BODY))
        .into()
}
