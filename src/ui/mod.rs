// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! takes a borrowed `ViewContext` and emits its own `Message`, which the app
//! wraps and handles in its update loop.
//!
//! # Panels
//!
//! - [`header`] - Title, backend address, language and theme controls
//! - [`input_panel`] - Tab bar, drop zone and URL field
//! - [`preview`] - Image preview with the Analyze and Start over buttons
//! - [`results`] - Spinner, error panel, or the rendered critique
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Toasts for rejected input and settings problems
//! - [`widgets`] - Canvas spinner
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Colors, spacing, sizing, type scale
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod header;
pub mod input_panel;
pub mod notifications;
pub mod preview;
pub mod results;
pub mod styles;
pub mod theming;
pub mod widgets;
