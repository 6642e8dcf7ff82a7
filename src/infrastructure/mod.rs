// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the ports defined in `application::port`,
//! plus the file system access the input panel needs.
//!
//! # Available Adapters
//!
//! - [`http`]: The critique service over HTTP (implements [`AnalysisService`])
//! - [`upload`]: Reading picked or dropped image files
//!
//! [`AnalysisService`]: crate::application::port::AnalysisService

pub mod http;
pub mod upload;

pub use http::HttpAnalysisService;
pub use upload::read_upload;
