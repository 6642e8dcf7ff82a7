// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Server**: Where the critique service lives and how long to wait for it
//! - **Window**: Initial and minimum window size

// ==========================================================================
// Server Defaults
// ==========================================================================

/// Base URL used when neither the CLI, the environment, nor the config names one.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the server base URL.
pub const ENV_SERVER_URL: &str = "UI_LENS_SERVER";

/// Smallest request timeout accepted from the config file (seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Largest request timeout accepted from the config file (seconds).
///
/// Analyses run a vision model and a page capture, so minutes are plausible.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 560.0;
pub const MIN_WINDOW_HEIGHT: f32 = 520.0;
