// ABOUTME: Per-source failure type for isolated provider queries
// ABOUTME: Rendered into warning strings tagged with the failing source name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

use std::time::Duration;
use thiserror::Error;

/// Failure of a single source query.
///
/// Every variant names the failing provider so that the rendered message
/// can be appended to a report's warning list as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    /// The provider could not be reached (process spawn failure, store open failure)
    #[error("{provider} error: unavailable: {details}")]
    Unavailable {
        /// Name of the failing provider
        provider: String,
        /// Underlying failure description
        details: String,
    },

    /// The provider did not answer within the configured timeout
    #[error("{provider} error: timed out after {}s", .timeout.as_secs())]
    Timeout {
        /// Name of the failing provider
        provider: String,
        /// Timeout that elapsed
        timeout: Duration,
    },

    /// The provider process exited unsuccessfully
    #[error("{provider} error: exited with {status}{}", stderr_suffix(.stderr))]
    NonZeroExit {
        /// Name of the failing provider
        provider: String,
        /// Exit status description
        status: String,
        /// Trimmed standard error output
        stderr: String,
    },

    /// The payload could not be parsed
    #[error("{provider} error: malformed payload: {details}")]
    Malformed {
        /// Name of the failing provider
        provider: String,
        /// Parse failure description
        details: String,
    },

    /// A metrics store query failed
    #[error("{provider} error: {query} query failed: {details}")]
    Query {
        /// Name of the failing provider
        provider: String,
        /// Which query failed
        query: String,
        /// Underlying failure description
        details: String,
    },
}

/// Result of a single source query
pub type SourceResult<T> = Result<T, SourceError>;

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

impl SourceError {
    /// Provider could not be reached
    pub fn unavailable(provider: impl Into<String>, details: impl ToString) -> Self {
        Self::Unavailable {
            provider: provider.into(),
            details: details.to_string(),
        }
    }

    /// Payload could not be parsed
    pub fn malformed(provider: impl Into<String>, details: impl ToString) -> Self {
        Self::Malformed {
            provider: provider.into(),
            details: details.to_string(),
        }
    }

    /// Metrics store query failed
    pub fn query(
        provider: impl Into<String>,
        query: impl Into<String>,
        details: impl ToString,
    ) -> Self {
        Self::Query {
            provider: provider.into(),
            query: query.into(),
            details: details.to_string(),
        }
    }

    /// Name of the provider that failed
    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::Unavailable { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::NonZeroExit { provider, .. }
            | Self::Malformed { provider, .. }
            | Self::Query { provider, .. } => provider,
        }
    }

    /// Rename the provider, keeping the failure details.
    ///
    /// Used when one backing command serves several logical sources
    /// (e.g. one calendar command queried per account).
    #[must_use]
    pub fn for_provider(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        match &mut self {
            Self::Unavailable { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::NonZeroExit { provider, .. }
            | Self::Malformed { provider, .. }
            | Self::Query { provider, .. } => *provider = name,
        }
        self
    }
}
