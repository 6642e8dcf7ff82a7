// SPDX-License-Identifier: MPL-2.0
//! Analysis results and the text processing applied to them.
//!
//! - [`AnalysisReport`]: critique content plus optional service metadata
//! - [`scores`]: extraction of the three graded dimensions
//! - [`markup`]: the block/inline node list used for rendering

pub mod markup;
pub mod scores;

pub use markup::{parse_inline, parse_markup, plain_text, Block, Inline};
pub use scores::{extract_scores, ScoreCard, MISSING_SCORE};

/// A successful analysis as returned by the critique service.
///
/// Only `content` is required; the metadata fields are shown as a caption
/// when present and otherwise ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisReport {
    pub content: String,
    pub model_used: Option<String>,
    pub analyzed_at: Option<String>,
    pub source: Option<String>,
    pub focus_areas: Vec<String>,
    pub request_id: Option<String>,
}

impl AnalysisReport {
    /// Creates a report with content and no metadata.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Extracts the score card from the content.
    #[must_use]
    pub fn scores(&self) -> ScoreCard {
        extract_scores(&self.content)
    }

    /// Parses the content into renderable blocks.
    #[must_use]
    pub fn blocks(&self) -> Vec<Block> {
        parse_markup(&self.content)
    }

    /// Returns true when at least one metadata field would appear in the caption.
    #[must_use]
    pub fn has_metadata(&self) -> bool {
        self.model_used.is_some() || self.analyzed_at.is_some() || self.request_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_derives_scores_and_blocks_from_content() {
        let report = AnalysisReport::new("### Scores\nux: 6\n- fine");
        assert_eq!(report.scores().ux.as_deref(), Some("6"));
        assert_eq!(report.blocks().len(), 3);
    }

    #[test]
    fn bare_report_has_no_metadata() {
        let mut report = AnalysisReport::new("x");
        assert!(!report.has_metadata());
        report.request_id = Some("req-1".into());
        assert!(report.has_metadata());
    }
}
