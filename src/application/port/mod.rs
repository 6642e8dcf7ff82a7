// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, so the application layer stays
//! independent of the HTTP client.
//!
//! # Available Ports
//!
//! - [`analysis`]: Screenshot retrieval and UI critique

pub mod analysis;

pub use analysis::AnalysisService;
