// SPDX-License-Identifier: MPL-2.0
//! Analysis service port definition.
//!
//! This module defines the [`AnalysisService`] trait: the two remote
//! operations the client depends on, a page screenshot and a UI critique.
//!
//! # Design Notes
//!
//! - Futures are `Send` so callers can hand them to `Task::perform`
//! - Implementations are cheap to clone; callers clone before moving into a task
//! - Failures use [`crate::error::Error`]; turning them into user text is the
//!   caller's job (see [`crate::application::submission`])

use crate::domain::analysis::AnalysisReport;
use crate::domain::input::{ImageUpload, PageUrl};
use crate::error::Result;
use std::future::Future;

/// Port for the remote screenshot and analysis endpoints.
///
/// # Example
///
/// ```ignore
/// use ui_lens::application::port::AnalysisService;
///
/// async fn critique(service: &impl AnalysisService, url: &PageUrl) -> String {
///     match service.analyze_url(url).await {
///         Ok(report) => report.content,
///         Err(e) => e.user_message(),
///     }
/// }
/// ```
pub trait AnalysisService: Clone + Send + Sync + 'static {
    /// Fetches a rendered screenshot of `url` as encoded image bytes.
    fn fetch_screenshot(&self, url: &PageUrl) -> impl Future<Output = Result<Vec<u8>>> + Send;

    /// Submits an uploaded image for critique.
    fn analyze_file(
        &self,
        upload: &ImageUpload,
    ) -> impl Future<Output = Result<AnalysisReport>> + Send;

    /// Submits a page URL for critique; the service captures it itself.
    fn analyze_url(&self, url: &PageUrl) -> impl Future<Output = Result<AnalysisReport>> + Send;
}
