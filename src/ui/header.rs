// SPDX-License-Identifier: MPL-2.0
//! Window header: title, backend address, language and theme controls.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, pick_list, text, Column, Row, Space, Text};
use iced::{alignment::Vertical, Color, Element, Length, Theme};
use unic_langid::LanguageIdentifier;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub server_url: &'a str,
}

#[derive(Debug, Clone)]
pub enum Message {
    CycleTheme,
    LanguageSelected(LanguageIdentifier),
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD))
        .push(muted(ctx.i18n.tr("header-subtitle"), typography::BODY_SM))
        .push(muted(
            ctx.i18n
                .tr_with_args("header-server", &[("url", ctx.server_url)]),
            typography::CAPTION,
        ));

    let language = pick_list(
        ctx.i18n.available_locales.as_slice(),
        Some(ctx.i18n.current_locale().clone()),
        Message::LanguageSelected,
    )
    .placeholder(ctx.i18n.tr("language-label"))
    .text_size(typography::BODY_SM);

    let theme = button(Text::new(ctx.i18n.tr(ctx.theme_mode.i18n_key())).size(typography::BODY_SM))
        .on_press(Message::CycleTheme)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::unselected);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(language)
        .push(theme)
        .into()
}

fn muted<'a>(content: String, size: f32) -> Text<'a> {
    Text::new(content)
        .size(size)
        .style(|theme: &Theme| text::Style {
            color: Some(Color {
                a: opacity::OVERLAY_STRONG,
                ..theme.palette().text
            }),
        })
}
