// SPDX-License-Identifier: MPL-2.0
//! `ui_lens` is a desktop client for a UI-critique service, built with the
//! Iced GUI framework.
//!
//! It sends an uploaded screenshot or a page URL to the service, shows a
//! preview first, and renders the returned scores and recommendations.
//! Localization uses Fluent; preferences live in a small TOML file.

#![doc(html_root_url = "https://docs.rs/ui_lens/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
