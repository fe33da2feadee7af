// ABOUTME: Main library entry point for the daybrief briefing engine
// ABOUTME: Configuration, logging, output formatting and the briefing pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

#![deny(unsafe_code)]

//! # Daybrief
//!
//! Aggregates one day of personal metrics (sleep, vitals, calendar load,
//! medication adherence, training, energy and protein balance) from several
//! independent sources into a morning outlook or an evening wrap-up, then
//! derives qualitative classifications and a short recommendation.
//!
//! ## Architecture
//!
//! - **`daybrief-core`**: Errors, constants and the report model
//! - **`daybrief-intelligence`**: Pure classification rules
//! - **`daybrief-providers`**: Source traits, CLI/SQLite and synthetic providers
//! - **`briefing`**: Mode selection and the fetch coordinator
//! - **`config`**: Environment configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use daybrief::briefing::{generate, select_mode, BriefingContext, Sources};
//! use daybrief::config::BriefingConfig;
//! use daybrief::formatters::{format_output, OutputFormat};
//! use daybrief::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = BriefingConfig::from_env()?;
//!     let mode = select_mode(false, true)?;
//!     let context = BriefingContext::for_date(None, chrono::Local::now().fixed_offset());
//!     let briefing = generate(mode, &Sources::from_config(&config), &config, &context).await?;
//!     println!("{}", format_output(&briefing, OutputFormat::Compact)?);
//!     Ok(())
//! }
//! ```

/// Mode selection and the fetch coordinator
pub mod briefing;

/// Environment configuration
pub mod config;

/// Report output formatting
pub mod formatters;

/// Structured logging setup
pub mod logging;

pub use daybrief_core::{constants, errors, models};
