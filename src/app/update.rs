// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Handlers mutate the session through its transition methods and return
//! the `Task` for whatever async work the transition started. Results come
//! back as messages carrying the ticket they were issued for.

use super::message::{LoadedFile, Message};
use super::session::{FileOrigin, PickTicket, Preview, Session};
use crate::app::config::{self, Config};
use crate::application::port::AnalysisService;
use crate::application::submission;
use crate::domain::error::InputError;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::infrastructure::upload::{self, IMAGE_EXTENSIONS};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::{header, input_panel, preview, results};
use iced::Task;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Mutable view of the `App` handed to every handler.
pub struct UpdateContext<'a, S: AnalysisService> {
    pub i18n: &'a mut I18n,
    pub session: &'a mut Session,
    pub notifications: &'a mut notifications::Manager,
    pub service: Option<&'a S>,
    pub config: &'a mut Config,
    pub theme_mode: &'a mut ThemeMode,
    /// When the in-flight preview or analysis started.
    pub busy_since: &'a mut Option<Instant>,
}

impl<S: AnalysisService> UpdateContext<'_, S> {
    fn reject(&mut self, error: &InputError) {
        log::info!("Rejected input: {error}");
        let mut notification = Notification::warning(error.i18n_key());
        if let InputError::NotAnImage { mime } = error {
            notification = notification.with_arg("mime", mime);
        }
        self.notifications.push(notification);
    }

    /// The service, or an error toast when the HTTP client failed to build.
    fn service(&mut self) -> Option<S> {
        let service = self.service.cloned();
        if service.is_none() {
            self.notifications
                .push(Notification::error("notification-client-error"));
        }
        service
    }

    fn persist_config(&mut self) {
        if let Err(err) = config::save(self.config) {
            log::warn!("Could not save settings: {err}");
            self.notifications
                .push(Notification::error("notification-config-save-error"));
        }
    }
}

// =============================================================================
// Header
// =============================================================================

pub fn handle_header_message<S: AnalysisService>(
    ctx: &mut UpdateContext<'_, S>,
    message: header::Message,
) -> Task<Message> {
    match message {
        header::Message::CycleTheme => {
            *ctx.theme_mode = ctx.theme_mode.next();
            ctx.config.general.theme_mode = *ctx.theme_mode;
            ctx.persist_config();
        }
        header::Message::LanguageSelected(locale) => {
            ctx.config.general.language = Some(locale.to_string());
            ctx.i18n.set_locale(locale);
            ctx.persist_config();
        }
    }
    Task::none()
}

// =============================================================================
// Input panel
// =============================================================================

pub fn handle_input_message<S: AnalysisService>(
    ctx: &mut UpdateContext<'_, S>,
    message: input_panel::Message,
) -> Task<Message> {
    match message {
        input_panel::Message::SelectTab(tab) => {
            ctx.session.select_tab(tab);
            *ctx.busy_since = None;
            Task::none()
        }
        input_panel::Message::PickFile => handle_open_file_dialog(ctx),
        input_panel::Message::UrlChanged(text) => {
            ctx.session.set_url_draft(text);
            Task::none()
        }
        input_panel::Message::LoadUrl => handle_load_url(ctx),
    }
}

/// Opens the native picker filtered to image files.
pub fn handle_open_file_dialog<S: AnalysisService>(
    ctx: &mut UpdateContext<'_, S>,
) -> Task<Message> {
    let pick = match ctx.session.begin_pick() {
        Ok(pick) => pick,
        Err(err) => {
            ctx.reject(&err);
            return Task::none();
        }
    };

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        move |path| Message::FileDialogResult { pick, path },
    )
}

/// Loads the picked file unless the session moved on while the dialog was open.
pub fn handle_file_dialog_result<S: AnalysisService>(
    ctx: &mut UpdateContext<'_, S>,
    pick: PickTicket,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };
    if !ctx.session.is_current_pick(pick) {
        log::debug!(
            "Ignoring picked file {} from an outdated dialog",
            path.display()
        );
        return Task::none();
    }
    handle_file_selected(ctx, path, FileOrigin::Picker)
}

/// Validates and starts reading a picked, dropped or preloaded file.
pub fn handle_file_selected<S: AnalysisService>(
    ctx: &mut UpdateContext<'_, S>,
    path: PathBuf,
    origin: FileOrigin,
) -> Task<Message> {
    let ticket = match ctx.session.begin_file_load(origin) {
        Ok(ticket) => ticket,
        Err(err) => {
            ctx.reject(&err);
            return Task::none();
        }
    };

    log::debug!("Loading {} ({origin:?})", path.display());
    Task::perform(
        async move {
            let result = read_file_off_thread(path.clone()).await;
            (ticket, path, result)
        },
        |(ticket, path, result)| Message::FileLoaded {
            ticket,
            path,
            result,
        },
    )
}

/// Runs [`load_file`] on the blocking pool so large images do not stall the executor.
pub async fn read_file_off_thread(path: PathBuf) -> Result<LoadedFile, Error> {
    tokio::task::spawn_blocking(move || load_file(&path))
        .await
        .map_err(|e| Error::Io(e.to_string()))?
}

/// Reads `path` into an upload plus its preview.
pub fn load_file(path: &Path) -> Result<LoadedFile, Error> {
    let upload = upload::read_upload(path)?;
    let dimensions = upload::image_dimensions(upload.bytes());
    let preview = Preview::from_bytes(upload.bytes().to_vec(), upload.file_name(), dimensions);
    Ok(LoadedFile { upload, preview })
}

pub fn handle_file_loaded<S: AnalysisService>(
    ctx: &mut UpdateContext<'_, S>,
    ticket: super::session::FileTicket,
    path: &Path,
    result: Result<LoadedFile, Error>,
) -> Task<Message> {
    if !ctx.session.is_current_file(ticket) {
        log::debug!("Dropping stale file load for {}", path.display());
        return Task::none();
    }

    match result {
        Ok(LoadedFile { upload, preview }) => {
            ctx.session.accept_file(ticket, upload, preview);
        }
        Err(Error::Input(err)) => ctx.reject(&err),
        Err(err) => {
            log::warn!("Could not read {}: {err}", path.display());
            let file = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            ctx.notifications.push(
                Notification::warning("notification-file-read-error").with_arg("file", file),
            );
        }
    }
    Task::none()
}

fn handle_load_url<S: AnalysisService>(ctx: &mut UpdateContext<'_, S>) -> Task<Message> {
    let Some(service) = ctx.service() else {
        return Task::none();
    };

    let raw = ctx.session.url_draft().to_string();
    let ticket = match ctx.session.begin_preview(&raw) {
        Ok(ticket) => ticket,
        Err(err) => {
            ctx.reject(&err);
            return Task::none();
        }
    };
    *ctx.busy_since = Some(Instant::now());

    Task::perform(
        async move {
            let result = submission::load_preview(&service, ticket.url()).await;
            (ticket, result)
        },
        |(ticket, result)| Message::PreviewLoaded { ticket, result },
    )
}

pub fn handle_preview_loaded<S: AnalysisService>(
    ctx: &mut UpdateContext<'_, S>,
    ticket: super::session::PreviewTicket,
    result: Result<Vec<u8>, String>,
) -> Task<Message> {
    let label = ticket.url().to_string();
    let outcome = result.map(|bytes| {
        let dimensions = upload::image_dimensions(&bytes);
        Preview::from_bytes(bytes, label.as_str(), dimensions)
    });

    if ctx.session.finish_preview(ticket, outcome) {
        *ctx.busy_since = None;
    } else {
        log::debug!("Dropping stale screenshot for {label}");
    }
    Task::none()
}

// =============================================================================
// Preview panel
// =============================================================================

pub fn handle_preview_message<S: AnalysisService>(
    ctx: &mut UpdateContext<'_, S>,
    message: preview::Message,
) -> Task<Message> {
    match message {
        preview::Message::Analyze => handle_analyze(ctx),
        preview::Message::StartOver => {
            ctx.session.start_over();
            *ctx.busy_since = None;
            Task::none()
        }
    }
}

fn handle_analyze<S: AnalysisService>(ctx: &mut UpdateContext<'_, S>) -> Task<Message> {
    let Some(service) = ctx.service() else {
        return Task::none();
    };

    let ticket = match ctx.session.begin_analysis() {
        Ok(ticket) => ticket,
        Err(err) => {
            ctx.reject(&err);
            return Task::none();
        }
    };
    *ctx.busy_since = Some(Instant::now());

    Task::perform(
        async move {
            let result = submission::run_analysis(&service, ticket.source()).await;
            (ticket, result)
        },
        |(ticket, result)| Message::AnalysisFinished { ticket, result },
    )
}

pub fn handle_analysis_finished<S: AnalysisService>(
    ctx: &mut UpdateContext<'_, S>,
    ticket: super::session::AnalysisTicket,
    result: Result<crate::domain::analysis::AnalysisReport, String>,
) -> Task<Message> {
    let i18n = &*ctx.i18n;
    let outcome = result
        .map_err(|message| i18n.tr_with_args("results-error", &[("message", message.as_str())]));

    if ctx.session.finish_analysis(ticket, outcome) {
        *ctx.busy_since = None;
    } else {
        log::debug!("Dropping stale analysis response");
    }
    Task::none()
}

// =============================================================================
// Results panel
// =============================================================================

pub fn handle_results_message<S: AnalysisService>(
    ctx: &mut UpdateContext<'_, S>,
    message: results::Message,
) -> Task<Message> {
    match message {
        results::Message::CopyContent => {
            let Some(content) = ctx.session.report_content() else {
                return Task::none();
            };
            let content = content.to_string();
            ctx.notifications
                .push(Notification::success("notification-copied"));
            iced::clipboard::write(content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[tokio::test]
    async fn file_is_read_on_the_blocking_pool() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("wide.png");
        RgbaImage::from_pixel(40, 10, Rgba([0, 0, 0, 255]))
            .save(&path)
            .expect("write png");

        let loaded = read_file_off_thread(path).await.expect("png loads");
        assert_eq!(loaded.upload.file_name(), "wide.png");
        assert_eq!(loaded.preview.dimensions, Some((40, 10)));
    }

    #[tokio::test]
    async fn missing_file_surfaces_as_io_error() {
        let dir = tempdir().expect("temp dir");
        let result = read_file_off_thread(dir.path().join("absent.png")).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
