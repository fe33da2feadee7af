// ABOUTME: Core types and constants for the daybrief briefing engine
// ABOUTME: Foundation crate with error handling, report models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

#![deny(unsafe_code)]

//! # Daybrief Core
//!
//! Foundation crate providing shared types and constants for the daybrief
//! briefing engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Fatal `AppError`/`ErrorCode` and the per-source `SourceError`
//! - **constants**: Thresholds, sentinel labels, metric names and defaults
//! - **models**: Canonical morning/evening report model and its records

/// Unified error handling with `AppError`, `ErrorCode`, and `SourceError`
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Canonical report model (sleep, vitals, calendar, meds, training, nutrition)
pub mod models;
