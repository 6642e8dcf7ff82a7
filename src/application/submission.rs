// SPDX-License-Identifier: MPL-2.0
//! Preview and analysis use cases.
//!
//! Both functions drive an [`AnalysisService`] and return a
//! `Result<_, String>` whose error side is already the text shown in the
//! results panel. The update loop never inspects transport errors itself.

use crate::application::port::AnalysisService;
use crate::domain::analysis::AnalysisReport;
use crate::domain::input::{PageUrl, Source};
use crate::error::Error;

/// Shown when a screenshot request fails without a server `detail`.
pub const PREVIEW_FALLBACK: &str = "Failed to load screenshot";

/// Shown when an analysis request fails without a server `detail`.
pub const ANALYSIS_FALLBACK: &str = "Analysis failed";

/// Prefix for every preview failure shown to the user.
pub const PREVIEW_ERROR_PREFIX: &str = "Error loading URL preview";

const UNEXPECTED_RESPONSE: &str = "unexpected response from server";

/// Fetches the screenshot for `url`.
///
/// On failure the message reads `Error loading URL preview: <reason>` where the
/// reason is the server `detail`, the transport error, or [`PREVIEW_FALLBACK`].
pub async fn load_preview<S: AnalysisService>(
    service: &S,
    url: &PageUrl,
) -> Result<Vec<u8>, String> {
    log::debug!("Requesting screenshot for {url}");

    match service.fetch_screenshot(url).await {
        Ok(bytes) if bytes.is_empty() => {
            log::warn!("Screenshot for {url} came back empty");
            Err(format!("{PREVIEW_ERROR_PREFIX}: {PREVIEW_FALLBACK}"))
        }
        Ok(bytes) => {
            log::debug!("Screenshot for {url}: {} bytes", bytes.len());
            Ok(bytes)
        }
        Err(error) => {
            log::warn!("Screenshot for {url} failed: {error}");
            Err(format!(
                "{PREVIEW_ERROR_PREFIX}: {}",
                describe_failure(&error, PREVIEW_FALLBACK)
            ))
        }
    }
}

/// Runs the critique for whichever source the session holds.
pub async fn run_analysis<S: AnalysisService>(
    service: &S,
    source: &Source,
) -> Result<AnalysisReport, String> {
    log::info!("Submitting analysis for {}", source.label());

    let outcome = match source {
        Source::File(upload) => service.analyze_file(upload).await,
        Source::Url(url) => service.analyze_url(url).await,
    };

    match outcome {
        Ok(report) => {
            log::info!(
                "Analysis complete ({} chars, request {})",
                report.content.len(),
                report.request_id.as_deref().unwrap_or("-")
            );
            Ok(report)
        }
        Err(error) => {
            log::warn!("Analysis of {} failed: {error}", source.label());
            Err(describe_failure(&error, ANALYSIS_FALLBACK))
        }
    }
}

/// Maps a service error to panel text.
///
/// A non-2xx response uses the server detail when it has one. A body that
/// could not be understood gets `<fallback>: unexpected response from server`.
#[must_use]
pub fn describe_failure(error: &Error, fallback: &str) -> String {
    match error {
        Error::Api { detail, .. } if detail.trim().is_empty() => fallback.to_string(),
        Error::Response(_) => format!("{fallback}: {UNEXPECTED_RESPONSE}"),
        other => other.user_message(),
    }
}
