// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the critique service.
//!
//! Implements [`AnalysisService`] with `reqwest`:
//!
//! - `GET {base}/screenshot?url=..` with `Accept: image/png`
//! - `POST {base}/analyze-ui` with a multipart `file` part
//! - `POST {base}/analyze-ui?url=..` with an empty body
//!
//! Non-2xx responses become [`Error::Api`] carrying the parsed `detail`
//! (empty when the body has none). Bodies that do not match
//! [`wire::AnalysisResponse`] become [`Error::Response`].

pub mod wire;

use crate::application::port::AnalysisService;
use crate::domain::analysis::AnalysisReport;
use crate::domain::input::{ImageUpload, PageUrl};
use crate::error::{Error, Result};
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use std::time::Duration;

/// Path of the screenshot endpoint.
pub const SCREENSHOT_PATH: &str = "/screenshot";
/// Path of the analysis endpoint.
pub const ANALYZE_PATH: &str = "/analyze-ui";
/// Multipart field name the service expects for uploads.
pub const FILE_FIELD: &str = "file";

const USER_AGENT: &str = concat!("UiLens/", env!("CARGO_PKG_VERSION"));

/// `reqwest`-backed [`AnalysisService`]. Cloning shares the connection pool.
#[derive(Debug, Clone)]
pub struct HttpAnalysisService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAnalysisService {
    /// Builds a client for `base_url`.
    ///
    /// Without a timeout, requests wait as long as the transport allows.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn analyze(&self, request: reqwest::RequestBuilder) -> Result<AnalysisReport> {
        let response = ensure_success(request.send().await?).await?;
        let body: wire::AnalysisResponse = response.json().await?;
        Ok(body.into())
    }
}

/// Turns a non-2xx response into [`Error::Api`].
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.bytes().await.unwrap_or_default();
    let detail = wire::error_detail(&body).unwrap_or_default();
    log::debug!("HTTP {status} from service, detail: {detail:?}");

    Err(Error::Api {
        status: status.as_u16(),
        detail,
    })
}

impl AnalysisService for HttpAnalysisService {
    async fn fetch_screenshot(&self, url: &PageUrl) -> Result<Vec<u8>> {
        let request = self
            .client
            .get(self.endpoint(SCREENSHOT_PATH))
            .query(&[("url", url.as_str())])
            .header(ACCEPT, "image/png");

        let response = ensure_success(request.send().await?).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn analyze_file(&self, upload: &ImageUpload) -> Result<AnalysisReport> {
        let part = Part::bytes(upload.bytes().to_vec())
            .file_name(upload.file_name().to_string())
            .mime_str(upload.mime())?;
        let form = Form::new().part(FILE_FIELD, part);

        self.analyze(self.client.post(self.endpoint(ANALYZE_PATH)).multipart(form))
            .await
    }

    async fn analyze_url(&self, url: &PageUrl) -> Result<AnalysisReport> {
        self.analyze(
            self.client
                .post(self.endpoint(ANALYZE_PATH))
                .query(&[("url", url.as_str())]),
        )
        .await
    }
}
