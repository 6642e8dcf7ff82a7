// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the session, localization, settings and
//! the HTTP service, and translates messages into side effects like requests,
//! config persistence or toasts. Policy (what is accepted while busy, which
//! response wins) lives in [`session`]; this file only routes.

pub mod config;
mod message;
pub mod paths;
pub mod session;
mod subscription;
mod update;
mod view;

pub use message::{Flags, LoadedFile, Message};

use crate::i18n::fluent::I18n;
use crate::infrastructure::http::HttpAnalysisService;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use session::{FileOrigin, Session};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    session: Session,
    notifications: notifications::Manager,
    /// `None` when the HTTP client could not be built; requests then fail
    /// with a toast instead of panicking at startup.
    service: Option<HttpAnalysisService>,
    /// Base URL shown in the header.
    server_url: String,
    config: Config,
    theme_mode: ThemeMode,
    /// Start of the in-flight preview or analysis, drives the spinner.
    busy_since: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("tab", &self.session.tab())
            .field("phase", &self.session.phase())
            .field("server_url", &self.server_url)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn build_service(server_url: &str, timeout: Option<Duration>) -> Option<HttpAnalysisService> {
    match HttpAnalysisService::new(server_url, timeout) {
        Ok(service) => Some(service),
        Err(err) => {
            log::error!("Could not build HTTP client for {server_url}: {err}");
            None
        }
    }
}

impl App {
    /// Initializes application state and optionally starts loading the image
    /// passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n_dir = paths::get_i18n_override_dir();
        let i18n = I18n::new(flags.lang.clone(), i18n_dir.as_deref(), &config);

        let server_url = config::resolve_server_url(flags.server.as_deref(), &config);
        let service = build_service(&server_url, config.server.request_timeout());
        log::info!("Using analysis service at {server_url}");

        let mut notifications = notifications::Manager::new();
        if let Some(warning) = config_warning {
            notifications.push(Notification::warning(warning));
        }
        if service.is_none() {
            notifications.push(Notification::error("notification-client-error"));
        }

        let mut app = App {
            i18n,
            session: Session::new(),
            notifications,
            service,
            server_url,
            theme_mode: config.general.theme_mode,
            config,
            busy_since: None,
        };

        let task = match flags.file_path {
            Some(path) => app.with_update_context(|ctx| {
                update::handle_file_selected(ctx, PathBuf::from(path), FileOrigin::CommandLine)
            }),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.session.source() {
            Some(source) => format!("{} - {app_name}", source.label()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.session.phase().is_busy(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn with_update_context<R>(
        &mut self,
        f: impl FnOnce(&mut update::UpdateContext<'_, HttpAnalysisService>) -> R,
    ) -> R {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            session: &mut self.session,
            notifications: &mut self.notifications,
            service: self.service.as_ref(),
            config: &mut self.config,
            theme_mode: &mut self.theme_mode,
            busy_since: &mut self.busy_since,
        };
        f(&mut ctx)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.update(notification_message);
                Task::none()
            }
            message => self.with_update_context(|ctx| match message {
                Message::Header(msg) => update::handle_header_message(ctx, msg),
                Message::Input(msg) => update::handle_input_message(ctx, msg),
                Message::Preview(msg) => update::handle_preview_message(ctx, msg),
                Message::Results(msg) => update::handle_results_message(ctx, msg),
                Message::FileDialogResult { pick, path } => {
                    update::handle_file_dialog_result(ctx, pick, path)
                }
                Message::FileDropped(path) => {
                    update::handle_file_selected(ctx, path, FileOrigin::Drop)
                }
                Message::FileLoaded {
                    ticket,
                    path,
                    result,
                } => update::handle_file_loaded(ctx, ticket, &path, result),
                Message::PreviewLoaded { ticket, result } => {
                    update::handle_preview_loaded(ctx, ticket, result)
                }
                Message::AnalysisFinished { ticket, result } => {
                    update::handle_analysis_finished(ctx, ticket, result)
                }
                Message::Tick(_) | Message::Notification(_) => Task::none(),
            }),
        }
    }

    fn spinner_elapsed(&self) -> Duration {
        self.busy_since
            .map(|since| since.elapsed())
            .unwrap_or_default()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            session: &self.session,
            notifications: &self.notifications,
            theme_mode: self.theme_mode,
            server_url: &self.server_url,
            spinner_elapsed: self.spinner_elapsed(),
        })
    }
}
