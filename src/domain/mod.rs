// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types and rules with ZERO external dependencies.
//!
//! Everything here is plain `std` so it can be tested without a runtime,
//! a network, or a window.
//!
//! # Modules
//!
//! - [`analysis`]: Analysis report, score extraction ([`ScoreCard`](analysis::ScoreCard))
//!   and critique markup ([`Block`](analysis::Block), [`Inline`](analysis::Inline))
//! - [`error`]: Domain error types ([`InputError`](error::InputError))
//! - [`input`]: Validated user input ([`ImageUpload`](input::ImageUpload),
//!   [`PageUrl`](input::PageUrl))

pub mod analysis;
pub mod error;
pub mod input;
