// SPDX-License-Identifier: MPL-2.0
//! Results panel: spinner, error message, or the rendered critique.
//!
//! A report renders as the score block, then the critique blocks, then a
//! caption with whatever metadata the service sent back.

use crate::app::session::ResultsPanel;
use crate::domain::analysis::{AnalysisReport, Block, Inline, ScoreCard};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use chrono::{DateTime, NaiveDateTime};
use iced::font::Weight;
use iced::widget::{button, text, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Color, Element, Font, Length, Theme,
};
use std::time::Duration;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub results: Option<&'a ResultsPanel>,
    pub analyzing: bool,
    pub spinner_elapsed: Duration,
}

#[derive(Debug, Clone)]
pub enum Message {
    CopyContent,
}

/// Returns `None` when there is nothing to show below the preview.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    if ctx.analyzing {
        return Some(analyzing(ctx.i18n, ctx.spinner_elapsed));
    }

    match ctx.results? {
        ResultsPanel::Error(message) => Some(error(message)),
        ResultsPanel::Report(report) => Some(report_panel(ctx.i18n, report)),
    }
}

fn analyzing(i18n: &I18n, elapsed: Duration) -> Element<'_, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(AnimatedSpinner::new(palette::PRIMARY_500, elapsed).into_element())
        .push(Text::new(i18n.tr("analyzing")).size(typography::BODY))
        .into()
}

fn error(message: &str) -> Element<'_, Message> {
    Container::new(Text::new(message).size(typography::BODY))
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::error_panel)
        .into()
}

fn report_panel<'a>(i18n: &I18n, report: &AnalysisReport) -> Element<'a, Message> {
    let heading = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(i18n.tr("results-title")).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("copy-button")).size(typography::BODY_SM))
                .on_press(Message::CopyContent)
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::unselected),
        );

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(heading)
        .push(score_block(i18n, &report.scores()));

    let mut body = Column::new().spacing(spacing::XS);
    for block in report.blocks() {
        body = body.push(render_block(block));
    }
    content = content.push(body);

    if let Some(caption) = metadata_caption(i18n, report) {
        content = content.push(
            Text::new(caption)
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(Color {
                        a: opacity::OVERLAY_MEDIUM,
                        ..theme.palette().text
                    }),
                }),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn score_block<'a>(i18n: &I18n, scores: &ScoreCard) -> Element<'a, Message> {
    let card = |key: &str, value: &str| {
        let content = Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(Text::new(value.to_string()).size(typography::TITLE_LG).font(bold()))
            .push(Text::new(i18n.tr(key)).size(typography::BODY_SM));

        Container::new(content)
            .width(Length::Fixed(sizing::SCORE_CARD_WIDTH))
            .padding(spacing::SM)
            .align_x(Horizontal::Center)
            .style(styles::container::score_card)
    };

    Row::new()
        .spacing(spacing::SM)
        .push(card("score-visual-design", scores.visual_design_or_placeholder()))
        .push(card("score-ux", scores.ux_or_placeholder()))
        .push(card("score-accessibility", scores.accessibility_or_placeholder()))
        .wrap()
        .into()
}

fn render_block<'a>(block: Block) -> Element<'a, Message> {
    match block {
        Block::Heading(spans) => inline_flow(&spans, typography::TITLE_SM, true),
        Block::Text(spans) => inline_flow(&spans, typography::BODY, false),
        Block::ListItem(spans) => Row::new()
            .spacing(spacing::XS)
            .push(Text::new("•").size(typography::BODY))
            .push(inline_flow(&spans, typography::BODY, false))
            .into(),
        Block::Break => Space::new().height(Length::Fixed(spacing::XS)).into(),
    }
}

/// Lays out styled text as words that wrap at the panel edge.
fn inline_flow<'a>(spans: &[Inline], size: f32, force_bold: bool) -> Element<'a, Message> {
    let words = split_words(spans).into_iter().map(|word| {
        let pieces = word.into_iter().map(|piece| {
            let text = Text::new(piece.text).size(size);
            let element: Element<'a, Message> = if piece.bold || force_bold {
                text.font(bold()).into()
            } else {
                text.into()
            };
            element
        });
        let element: Element<'a, Message> = Row::with_children(pieces).into();
        element
    });

    Row::with_children(words)
        .spacing(size * 0.3)
        .wrap()
        .into()
}

fn bold() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::default()
    }
}

/// Run of text inside one word sharing the same weight.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Piece {
    text: String,
    bold: bool,
}

/// Splits spans at whitespace. A word keeps touching spans together, so
/// `**bold**,` stays one word made of a bold and a plain piece.
fn split_words(spans: &[Inline]) -> Vec<Vec<Piece>> {
    let mut words = Vec::new();
    let mut word: Vec<Piece> = Vec::new();

    for span in spans {
        let (content, bold) = match span {
            Inline::Plain(text) => (text, false),
            Inline::Bold(text) => (text, true),
        };

        let mut piece = String::new();
        for ch in content.chars() {
            if ch.is_whitespace() {
                if !piece.is_empty() {
                    word.push(Piece {
                        text: std::mem::take(&mut piece),
                        bold,
                    });
                }
                if !word.is_empty() {
                    words.push(std::mem::take(&mut word));
                }
            } else {
                piece.push(ch);
            }
        }
        if !piece.is_empty() {
            word.push(Piece { text: piece, bold });
        }
    }
    if !word.is_empty() {
        words.push(word);
    }

    words
}

/// `Model: … · Analyzed: … · Request: …`, skipping absent fields.
fn metadata_caption(i18n: &I18n, report: &AnalysisReport) -> Option<String> {
    if !report.has_metadata() {
        return None;
    }

    let mut parts = Vec::new();
    if let Some(model) = &report.model_used {
        parts.push(i18n.tr_with_args("metadata-model", &[("model", model.as_str())]));
    }
    if let Some(at) = &report.analyzed_at {
        parts.push(i18n.tr_with_args("metadata-analyzed-at", &[("time", format_timestamp(at).as_str())]));
    }
    if let Some(id) = &report.request_id {
        parts.push(i18n.tr_with_args("metadata-request", &[("id", id.as_str())]));
    }
    Some(parts.join(" · "))
}

/// Shortens an ISO 8601 timestamp to minutes. Unparseable input is returned as is.
fn format_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M";

    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return at.format(DISPLAY).to_string();
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|at| at.format(DISPLAY).to_string())
        .unwrap_or_else(|_| raw.to_string())
}
