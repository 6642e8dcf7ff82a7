// SPDX-License-Identifier: MPL-2.0
//! Score extraction from free-form critique text.
//!
//! The service is asked to grade three dimensions and usually writes them as
//! `key: value` somewhere in its answer. Extraction is a plain substring scan:
//! no attempt is made to understand surrounding markup.

/// Marker for the visual design score.
pub const VISUAL_DESIGN_KEY: &str = "visual_design:";
/// Marker for the user experience score.
pub const UX_KEY: &str = "ux:";
/// Marker for the accessibility score.
pub const ACCESSIBILITY_KEY: &str = "accessibility:";

/// Text shown in place of a score the service did not provide.
pub const MISSING_SCORE: &str = "N/A";

/// Scores found in an analysis, each one optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreCard {
    pub visual_design: Option<String>,
    pub ux: Option<String>,
    pub accessibility: Option<String>,
}

impl ScoreCard {
    /// Visual design score, or [`MISSING_SCORE`].
    #[must_use]
    pub fn visual_design_or_placeholder(&self) -> &str {
        self.visual_design.as_deref().unwrap_or(MISSING_SCORE)
    }

    /// User experience score, or [`MISSING_SCORE`].
    #[must_use]
    pub fn ux_or_placeholder(&self) -> &str {
        self.ux.as_deref().unwrap_or(MISSING_SCORE)
    }

    /// Accessibility score, or [`MISSING_SCORE`].
    #[must_use]
    pub fn accessibility_or_placeholder(&self) -> &str {
        self.accessibility.as_deref().unwrap_or(MISSING_SCORE)
    }

    /// Returns true when none of the three scores was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visual_design.is_none() && self.ux.is_none() && self.accessibility.is_none()
    }
}

/// Scans `content` line by line for the three score markers.
///
/// A line is checked for `visual_design:` first, then `ux:`, then
/// `accessibility:`; only the first marker found on a line is used. The value
/// is the first whitespace-delimited token after the marker. Later lines
/// override earlier ones, and an empty token counts as missing.
///
/// # Example
///
/// ```
/// use ui_lens::domain::analysis::extract_scores;
///
/// let scores = extract_scores("visual_design: 8 solid\nux: 7\n");
/// assert_eq!(scores.visual_design.as_deref(), Some("8"));
/// assert_eq!(scores.ux_or_placeholder(), "7");
/// assert_eq!(scores.accessibility_or_placeholder(), "N/A");
/// ```
#[must_use]
pub fn extract_scores(content: &str) -> ScoreCard {
    let mut scores = ScoreCard::default();

    for line in content.lines() {
        if let Some(value) = value_after(line, VISUAL_DESIGN_KEY) {
            scores.visual_design = value;
        } else if let Some(value) = value_after(line, UX_KEY) {
            scores.ux = value;
        } else if let Some(value) = value_after(line, ACCESSIBILITY_KEY) {
            scores.accessibility = value;
        }
    }

    scores
}

/// Outer `None`: marker absent. Inner `None`: marker present but no token.
fn value_after(line: &str, marker: &str) -> Option<Option<String>> {
    let (_, rest) = line.split_once(marker)?;
    Some(rest.split_whitespace().next().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_token_after_each_marker() {
        let content = "Intro\nvisual_design: 8 more text\nux: 7 more\naccessibility: 9";
        let scores = extract_scores(content);
        assert_eq!(scores.visual_design_or_placeholder(), "8");
        assert_eq!(scores.ux_or_placeholder(), "7");
        assert_eq!(scores.accessibility_or_placeholder(), "9");
    }

    #[test]
    fn missing_marker_renders_placeholder() {
        let scores = extract_scores("visual_design: 8\naccessibility: 9");
        assert_eq!(scores.ux, None);
        assert_eq!(scores.ux_or_placeholder(), MISSING_SCORE);
    }

    #[test]
    fn letter_grades_are_kept_verbatim() {
        let scores = extract_scores("- visual_design: A+\n- ux: B\n- accessibility: C+ (contrast)");
        assert_eq!(scores.visual_design.as_deref(), Some("A+"));
        assert_eq!(scores.ux.as_deref(), Some("B"));
        assert_eq!(scores.accessibility.as_deref(), Some("C+"));
    }

    #[test]
    fn later_lines_override_earlier_ones() {
        let scores = extract_scores("ux: 3\nux: 6");
        assert_eq!(scores.ux.as_deref(), Some("6"));
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let scores = extract_scores("visual_design:   \nux: 5");
        assert_eq!(scores.visual_design, None);
        assert_eq!(scores.visual_design_or_placeholder(), "N/A");
    }

    #[test]
    fn only_first_matching_marker_per_line_is_used() {
        // visual_design wins; the ux marker on the same line is ignored.
        let scores = extract_scores("visual_design: 8, ux: 2");
        assert_eq!(scores.visual_design.as_deref(), Some("8,"));
        assert_eq!(scores.ux, None);
    }

    #[test]
    fn marker_may_appear_mid_line() {
        let scores = extract_scores("Overall accessibility: B- due to contrast");
        assert_eq!(scores.accessibility.as_deref(), Some("B-"));
    }

    #[test]
    fn empty_content_yields_empty_card() {
        assert!(extract_scores("").is_empty());
    }
}
