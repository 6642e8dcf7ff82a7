// SPDX-License-Identifier: MPL-2.0
//! Preview panel: the image to be critiqued and the submit controls.

use crate::app::session::Preview;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, text, Column, Container, Row, Text};
use iced::{alignment::Vertical, Color, ContentFit, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub preview: &'a Preview,
    /// False while any request is in flight.
    pub can_submit: bool,
    pub analyzing: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Analyze,
    StartOver,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let picture = image(ctx.preview.handle.clone())
        .content_fit(ContentFit::ScaleDown)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PREVIEW_MAX_HEIGHT));

    let caption = match ctx.preview.dimensions {
        Some((width, height)) => format!(
            "{} · {}",
            ctx.preview.label,
            ctx.i18n.tr_with_args(
                "preview-dimensions",
                &[
                    ("width", width.to_string().as_str()),
                    ("height", height.to_string().as_str()),
                ],
            )
        ),
        None => ctx.preview.label.clone(),
    };

    let analyze_label = if ctx.analyzing {
        ctx.i18n.tr("analyzing")
    } else {
        ctx.i18n.tr("analyze-button")
    };
    // No on_press means the button renders disabled.
    let analyze = button(Text::new(analyze_label))
        .on_press_maybe(ctx.can_submit.then_some(Message::Analyze))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary);

    let start_over = button(Text::new(ctx.i18n.tr("start-over-button")))
        .on_press(Message::StartOver)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::unselected);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(picture)
        .push(
            Text::new(caption)
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(Color {
                        a: opacity::OVERLAY_STRONG,
                        ..theme.palette().text
                    }),
                }),
        )
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(analyze)
                .push(start_over),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}
