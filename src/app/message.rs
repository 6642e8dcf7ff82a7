// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::session::{AnalysisTicket, FileTicket, PickTicket, Preview, PreviewTicket};
use crate::domain::analysis::AnalysisReport;
use crate::domain::input::ImageUpload;
use crate::error::Error;
use crate::ui::{header, input_panel, notifications, preview, results};
use std::path::PathBuf;
use std::time::Instant;

/// A file read off disk together with what the preview needs.
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub upload: ImageUpload,
    pub preview: Preview,
}

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded; async results come back tagged with the ticket they answer.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Input(input_panel::Message),
    Preview(preview::Message),
    Results(results::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the open file dialog, tagged with the epoch it opened at.
    FileDialogResult {
        pick: PickTicket,
        path: Option<PathBuf>,
    },
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    FileLoaded {
        ticket: FileTicket,
        path: PathBuf,
        result: Result<LoadedFile, Error>,
    },
    PreviewLoaded {
        ticket: PreviewTicket,
        result: Result<Vec<u8>, String>,
    },
    AnalysisFinished {
        ticket: AnalysisTicket,
        result: Result<AnalysisReport, String>,
    },
    /// Periodic tick for the spinner and toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional service base URL; beats `UI_LENS_SERVER` and the config file.
    pub server: Option<String>,
    /// Optional image path to preload on startup.
    pub file_path: Option<String>,
}
