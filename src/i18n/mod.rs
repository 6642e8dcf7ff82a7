// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Bundled `.ftl` files embedded at build time, plus user overrides from the
//!   data directory
//! - Runtime language switching
//! - Fallback to `en-US` when a message is missing in the current locale

pub mod fluent;
