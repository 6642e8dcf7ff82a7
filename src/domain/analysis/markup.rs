// SPDX-License-Identifier: MPL-2.0
//! Line-oriented parser for the small markup subset used in critiques.
//!
//! Supported syntax:
//! - `### heading`
//! - `- list item` (leading indentation allowed)
//! - `**bold**` inside any line
//! - blank lines separate paragraphs
//!
//! Everything else is passed through as plain text. Constructs never nest:
//! a heading or list item holds inline spans, never other blocks.

const HEADING_PREFIX: &str = "### ";
const LIST_PREFIX: &str = "- ";
const BOLD_DELIMITER: &str = "**";

/// Inline span within a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Plain(String),
    Bold(String),
}

/// A block-level node, one per non-blank source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(Vec<Inline>),
    Text(Vec<Inline>),
    ListItem(Vec<Inline>),
    /// Paragraph separation produced by one or more blank lines.
    Break,
}

/// Parses critique text into a flat block list.
///
/// Runs of blank lines collapse into a single [`Block::Break`]; blank lines at
/// the start or end of the content produce nothing.
///
/// # Example
///
/// ```
/// use ui_lens::domain::analysis::{parse_markup, Block, Inline};
///
/// let blocks = parse_markup("### Title\n- **bold** item");
/// assert_eq!(blocks[0], Block::Heading(vec![Inline::Plain("Title".into())]));
/// assert_eq!(
///     blocks[1],
///     Block::ListItem(vec![Inline::Bold("bold".into()), Inline::Plain(" item".into())])
/// );
/// ```
#[must_use]
pub fn parse_markup(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut pending_break = false;

    for line in content.lines() {
        if line.trim().is_empty() {
            pending_break = !blocks.is_empty();
            continue;
        }

        if pending_break {
            blocks.push(Block::Break);
            pending_break = false;
        }

        blocks.push(parse_line(line));
    }

    blocks
}

fn parse_line(line: &str) -> Block {
    if let Some(rest) = line.strip_prefix(HEADING_PREFIX) {
        return Block::Heading(parse_inline(rest.trim()));
    }

    if let Some(rest) = line.trim_start().strip_prefix(LIST_PREFIX) {
        return Block::ListItem(parse_inline(rest.trim_end()));
    }

    Block::Text(parse_inline(line.trim_end()))
}

/// Splits a line into plain and bold spans.
///
/// Delimiters pair left to right. A trailing unmatched `**` is kept as
/// literal text, and an empty pair (`****`) is dropped.
#[must_use]
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find(BOLD_DELIMITER) {
        let after_open = &rest[open + BOLD_DELIMITER.len()..];
        let Some(close) = after_open.find(BOLD_DELIMITER) else {
            break;
        };

        push_plain(&mut spans, &rest[..open]);
        let bold = &after_open[..close];
        if !bold.is_empty() {
            spans.push(Inline::Bold(bold.to_string()));
        }
        rest = &after_open[close + BOLD_DELIMITER.len()..];
    }

    push_plain(&mut spans, rest);
    spans
}

fn push_plain(spans: &mut Vec<Inline>, text: &str) {
    if text.is_empty() {
        return;
    }
    // Merge with a preceding plain span so pass-through text stays in one piece.
    if let Some(Inline::Plain(previous)) = spans.last_mut() {
        previous.push_str(text);
    } else {
        spans.push(Inline::Plain(text.to_string()));
    }
}

/// Concatenates the visible text of a span list, dropping emphasis.
#[must_use]
pub fn plain_text(spans: &[Inline]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Inline::Plain(text) | Inline::Bold(text) => text.as_str(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> Inline {
        Inline::Plain(text.to_string())
    }

    fn bold(text: &str) -> Inline {
        Inline::Bold(text.to_string())
    }

    #[test]
    fn parses_heading_bold_list_and_break() {
        let blocks = parse_markup("### Title\n**bold** text\n- item1\n- item2\n\npara");
        assert_eq!(
            blocks,
            vec![
                Block::Heading(vec![plain("Title")]),
                Block::Text(vec![bold("bold"), plain(" text")]),
                Block::ListItem(vec![plain("item1")]),
                Block::ListItem(vec![plain("item2")]),
                Block::Break,
                Block::Text(vec![plain("para")]),
            ]
        );
    }

    #[test]
    fn blank_line_runs_collapse_to_one_break() {
        let blocks = parse_markup("a\n\n\n\nb");
        assert_eq!(
            blocks,
            vec![
                Block::Text(vec![plain("a")]),
                Block::Break,
                Block::Text(vec![plain("b")]),
            ]
        );
    }

    #[test]
    fn leading_and_trailing_blank_lines_are_dropped() {
        let blocks = parse_markup("\n\n  \nonly\n\n");
        assert_eq!(blocks, vec![Block::Text(vec![plain("only")])]);
    }

    #[test]
    fn indented_list_items_are_recognized() {
        let blocks = parse_markup("    - nested looking item");
        assert_eq!(blocks, vec![Block::ListItem(vec![plain("nested looking item")])]);
    }

    #[test]
    fn dash_without_space_is_plain_text() {
        let blocks = parse_markup("-not a list");
        assert_eq!(blocks, vec![Block::Text(vec![plain("-not a list")])]);
    }

    #[test]
    fn other_heading_levels_pass_through() {
        let blocks = parse_markup("## Section\n#### Deep");
        assert_eq!(
            blocks,
            vec![
                Block::Text(vec![plain("## Section")]),
                Block::Text(vec![plain("#### Deep")]),
            ]
        );
    }

    #[test]
    fn unmatched_bold_delimiter_is_literal() {
        assert_eq!(parse_inline("a **b"), vec![plain("a **b")]);
    }

    #[test]
    fn multiple_bold_spans_on_one_line() {
        assert_eq!(
            parse_inline("**A** and **B**!"),
            vec![bold("A"), plain(" and "), bold("B"), plain("!")]
        );
    }

    #[test]
    fn three_delimiters_keep_the_last_one_literal() {
        assert_eq!(parse_inline("**a** b **c"), vec![bold("a"), plain(" b **c")]);
    }

    #[test]
    fn empty_bold_pair_is_dropped() {
        assert_eq!(parse_inline("x****y"), vec![plain("xy")]);
    }

    #[test]
    fn bold_inside_heading_and_list() {
        let blocks = parse_markup("### **Score** summary\n- **Contrast**: low");
        assert_eq!(
            blocks,
            vec![
                Block::Heading(vec![bold("Score"), plain(" summary")]),
                Block::ListItem(vec![bold("Contrast"), plain(": low")]),
            ]
        );
    }

    #[test]
    fn crlf_line_endings_are_handled() {
        let blocks = parse_markup("### T\r\n\r\nbody\r\n");
        assert_eq!(
            blocks,
            vec![
                Block::Heading(vec![plain("T")]),
                Block::Break,
                Block::Text(vec![plain("body")]),
            ]
        );
    }

    #[test]
    fn plain_text_strips_emphasis() {
        let spans = parse_inline("**Key** finding");
        assert_eq!(plain_text(&spans), "Key finding");
    }

    #[test]
    fn empty_content_yields_no_blocks() {
        assert!(parse_markup("").is_empty());
    }
}
