// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`submission`]: Preview and analysis use cases
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer (`app`, `ui`) drives the use cases
//!
//! # Example
//!
//! ```ignore
//! use ui_lens::application::submission::run_analysis;
//! use ui_lens::infrastructure::http::HttpAnalysisService;
//!
//! let service = HttpAnalysisService::new("http://127.0.0.1:8000", None)?;
//! let outcome = run_analysis(&service, &source).await;
//! ```

pub mod port;
pub mod submission;
