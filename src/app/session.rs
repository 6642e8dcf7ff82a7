// SPDX-License-Identifier: MPL-2.0
//! Session state and its transitions.
//!
//! The session is owned by [`App`](super::App) and mutated only from the
//! update loop. Every transition that starts async work hands out a ticket
//! stamped with the current epoch; the matching `finish_*` call ignores
//! tickets from an older epoch, so the latest request always wins.
//!
//! ```text
//!             begin_preview            finish_preview(Ok)
//! Collecting ───────────────> LoadingPreview ─────────────> Previewing
//!     ^  │                        │ finish_preview(Err)         │ begin_analysis
//!     │  │ accept_file            v                              v
//!     │  └───────────────────> Previewing <──── accept_file ── Analyzing
//!     │                                                          │ finish_analysis
//!     └──────────── select_tab / start_over ──── (any) ◄──── Reviewed
//! ```

use crate::domain::analysis::AnalysisReport;
use crate::domain::error::InputError;
use crate::domain::input::{ImageUpload, PageUrl, Source};
use iced::widget::image;

/// Input mode. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    File,
    Url,
}

/// Where the session is in the submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Input surface of the active tab is shown.
    #[default]
    Collecting,
    /// A screenshot request is in flight.
    LoadingPreview,
    /// A preview is shown and can be submitted.
    Previewing,
    /// An analysis request is in flight; submit is disabled.
    Analyzing,
    /// The last analysis finished, successfully or not.
    Reviewed,
}

impl Phase {
    /// Returns true while a preview or analysis request is outstanding.
    #[must_use]
    pub fn is_busy(self) -> bool {
        matches!(self, Phase::LoadingPreview | Phase::Analyzing)
    }

    /// Returns true when the preview and analyze button are on screen.
    #[must_use]
    pub fn shows_preview(self) -> bool {
        matches!(self, Phase::Previewing | Phase::Analyzing | Phase::Reviewed)
    }
}

/// The image shown before analysis.
#[derive(Debug, Clone)]
pub struct Preview {
    pub handle: image::Handle,
    /// File name or URL.
    pub label: String,
    pub dimensions: Option<(u32, u32)>,
}

impl Preview {
    /// Builds a preview from encoded image bytes.
    #[must_use]
    pub fn from_bytes(
        bytes: Vec<u8>,
        label: impl Into<String>,
        dimensions: Option<(u32, u32)>,
    ) -> Self {
        Self {
            handle: image::Handle::from_bytes(bytes),
            label: label.into(),
            dimensions,
        }
    }
}

/// Content of the results area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsPanel {
    Report(AnalysisReport),
    Error(String),
}

/// How a file reached the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOrigin {
    Picker,
    Drop,
    CommandLine,
}

/// Proof that a file read was requested at a given epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTicket {
    epoch: u64,
}

/// Epoch at which the file dialog was opened.
///
/// A dialog answer carrying an older epoch arrived after a tab switch or
/// another load and must not touch the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickTicket {
    epoch: u64,
}

/// Proof that a screenshot was requested for `url` at a given epoch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewTicket {
    epoch: u64,
    url: PageUrl,
}

impl PreviewTicket {
    #[must_use]
    pub fn url(&self) -> &PageUrl {
        &self.url
    }
}

/// Proof that an analysis was requested for `source` at a given epoch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTicket {
    epoch: u64,
    source: Source,
}

impl AnalysisTicket {
    #[must_use]
    pub fn source(&self) -> &Source {
        &self.source
    }
}

/// Everything the window shows, minus localization and toasts.
#[derive(Debug, Default)]
pub struct Session {
    tab: Tab,
    source: Option<Source>,
    preview: Option<Preview>,
    phase: Phase,
    results: Option<ResultsPanel>,
    url_draft: String,
    epoch: u64,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn source(&self) -> Option<&Source> {
        self.source.as_ref()
    }

    #[must_use]
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    #[must_use]
    pub fn results(&self) -> Option<&ResultsPanel> {
        self.results.as_ref()
    }

    #[must_use]
    pub fn url_draft(&self) -> &str {
        &self.url_draft
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether the analyze button accepts presses.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.source.is_some() && !self.phase.is_busy()
    }

    pub fn set_url_draft(&mut self, text: String) {
        self.url_draft = text;
    }

    fn bump(&mut self) -> u64 {
        self.epoch = self.epoch.wrapping_add(1);
        self.epoch
    }

    fn clear_work(&mut self) {
        self.source = None;
        self.preview = None;
        self.results = None;
        self.phase = Phase::Collecting;
    }

    /// Switches input mode and resets everything but the URL draft.
    ///
    /// Responses still in flight for the previous state are dropped when
    /// they arrive.
    pub fn select_tab(&mut self, tab: Tab) {
        self.bump();
        self.tab = tab;
        self.clear_work();
    }

    /// Same as re-selecting the current tab.
    pub fn start_over(&mut self) {
        self.select_tab(self.tab);
    }

    /// Checks that the file dialog may open and records the current epoch.
    ///
    /// Opening the dialog does not cancel anything; the answer is checked
    /// with [`is_current_pick`](Self::is_current_pick) when it arrives.
    pub fn begin_pick(&self) -> Result<PickTicket, InputError> {
        if self.phase.is_busy() {
            return Err(InputError::Busy);
        }
        if self.tab != Tab::File {
            return Err(InputError::WrongTab);
        }
        Ok(PickTicket { epoch: self.epoch })
    }

    /// Returns true if nothing happened to the session since the dialog opened.
    #[must_use]
    pub fn is_current_pick(&self, pick: PickTicket) -> bool {
        pick.epoch == self.epoch
    }

    /// Validates that a file may be loaded now and issues a ticket for it.
    ///
    /// Picked and dropped files only count on the file tab. Nothing is
    /// accepted while a preview or an analysis is in flight.
    pub fn begin_file_load(&mut self, origin: FileOrigin) -> Result<FileTicket, InputError> {
        if self.phase.is_busy() {
            return Err(InputError::Busy);
        }
        if origin != FileOrigin::CommandLine && self.tab != Tab::File {
            return Err(InputError::WrongTab);
        }
        Ok(FileTicket { epoch: self.bump() })
    }

    /// Stores a loaded file as the source and shows its preview.
    ///
    /// Returns false, leaving the session untouched, for a stale ticket.
    pub fn accept_file(&mut self, ticket: FileTicket, upload: ImageUpload, preview: Preview) -> bool {
        if ticket.epoch != self.epoch || self.phase.is_busy() {
            return false;
        }
        self.source = Some(Source::File(upload));
        self.preview = Some(preview);
        self.results = None;
        self.phase = Phase::Previewing;
        true
    }

    /// Returns true if `ticket` still refers to the latest request.
    #[must_use]
    pub fn is_current_file(&self, ticket: FileTicket) -> bool {
        ticket.epoch == self.epoch
    }

    /// Parses `raw` and starts loading its screenshot.
    ///
    /// Hides the input surface, any previous preview and any results.
    pub fn begin_preview(&mut self, raw: &str) -> Result<PreviewTicket, InputError> {
        if self.phase == Phase::Analyzing {
            return Err(InputError::Busy);
        }
        let url = PageUrl::parse(raw)?;

        let epoch = self.bump();
        self.clear_work();
        self.phase = Phase::LoadingPreview;
        Ok(PreviewTicket { epoch, url })
    }

    /// Applies a screenshot response.
    ///
    /// On success the URL becomes the source. On failure the error goes to
    /// the results area and the tab's input surface comes back.
    pub fn finish_preview(
        &mut self,
        ticket: PreviewTicket,
        outcome: Result<Preview, String>,
    ) -> bool {
        if ticket.epoch != self.epoch || self.phase != Phase::LoadingPreview {
            return false;
        }
        match outcome {
            Ok(preview) => {
                self.source = Some(Source::Url(ticket.url));
                self.preview = Some(preview);
                self.results = None;
                self.phase = Phase::Previewing;
            }
            Err(message) => {
                self.source = None;
                self.preview = None;
                self.results = Some(ResultsPanel::Error(message));
                self.phase = Phase::Collecting;
            }
        }
        true
    }

    /// Starts an analysis of the current source.
    pub fn begin_analysis(&mut self) -> Result<AnalysisTicket, InputError> {
        if self.phase.is_busy() {
            return Err(InputError::Busy);
        }
        let source = self.source.clone().ok_or(InputError::NoSource)?;

        let epoch = self.bump();
        self.results = None;
        self.phase = Phase::Analyzing;
        Ok(AnalysisTicket { epoch, source })
    }

    /// Applies an analysis response. Always leaves `Analyzing` for a current ticket.
    pub fn finish_analysis(
        &mut self,
        ticket: AnalysisTicket,
        outcome: Result<AnalysisReport, String>,
    ) -> bool {
        if ticket.epoch != self.epoch || self.phase != Phase::Analyzing {
            return false;
        }
        self.results = Some(match outcome {
            Ok(report) => ResultsPanel::Report(report),
            Err(message) => ResultsPanel::Error(message),
        });
        self.phase = Phase::Reviewed;
        true
    }

    /// Raw critique text of the last successful analysis.
    #[must_use]
    pub fn report_content(&self) -> Option<&str> {
        match &self.results {
            Some(ResultsPanel::Report(report)) => Some(report.content.as_str()),
            _ => None,
        }
    }
}
