// ABOUTME: Report output formatting for the daybrief CLI
// ABOUTME: Pretty-printed or single-line JSON via serde_json
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

//! Output formatting
//!
//! Reports are always JSON; the format only decides the layout.

use daybrief_core::errors::AppResult;
use serde::Serialize;
use std::fmt;

/// JSON layout selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented, multi-line JSON (default)
    #[default]
    Pretty,
    /// Single-line JSON
    Compact,
}

impl OutputFormat {
    /// Format selected by the `--compact` flag
    #[must_use]
    pub const fn from_compact_flag(compact: bool) -> Self {
        if compact {
            Self::Compact
        } else {
            Self::Pretty
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Compact => "compact",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serialize `data` in the requested layout
///
/// # Errors
///
/// Returns `SerializationError` if the value cannot be serialized
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> AppResult<String> {
    let rendered = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(data)?,
        OutputFormat::Compact => serde_json::to_string(data)?,
    };
    Ok(rendered)
}
