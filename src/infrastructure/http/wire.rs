// SPDX-License-Identifier: MPL-2.0
//! JSON bodies exchanged with the critique service.

use crate::domain::analysis::AnalysisReport;
use serde::Deserialize;
use serde_json::Value;

/// Successful `POST /analyze-ui` body.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResponse {
    pub analysis: AnalysisBody,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub analyzed_at: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
}

/// The `analysis` object. Only `content` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisBody {
    pub content: String,
    #[serde(default)]
    pub focus_areas: Option<Vec<String>>,
    #[serde(default)]
    pub model_used: Option<String>,
    #[serde(default)]
    pub analyzed_at: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

impl From<AnalysisResponse> for AnalysisReport {
    fn from(response: AnalysisResponse) -> Self {
        let AnalysisResponse {
            analysis,
            analyzed_at,
            request_id,
            ..
        } = response;

        AnalysisReport {
            content: analysis.content,
            model_used: analysis.model_used,
            analyzed_at: analysis.analyzed_at.or(analyzed_at),
            source: analysis.source,
            focus_areas: analysis.focus_areas.unwrap_or_default(),
            request_id,
        }
    }
}

/// Error body shape shared by every failing endpoint.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Value,
}

/// Extracts a readable message from an error response body.
///
/// `detail` may be a plain string, an object carrying its own `detail`
/// (the service's 500 path), or a list of validation errors with `msg`.
/// Returns `None` when the body is not JSON or carries nothing usable.
#[must_use]
pub fn error_detail(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    detail_text(&parsed.detail)
}

fn detail_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => {
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        }
        Value::Object(map) => map
            .get("detail")
            .and_then(detail_text)
            .or_else(|| map.get("msg").and_then(detail_text)),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(detail_text).collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
