// ABOUTME: daybrief CLI - prints a morning outlook or evening wrap-up as JSON
// ABOUTME: Parses flags, loads environment configuration and runs the briefing pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors
//!
//! Usage:
//! ```bash
//! # Morning outlook for today
//! daybrief
//!
//! # Evening wrap-up for a given date, single-line JSON
//! daybrief --evening --date 2024-01-15 --compact
//!
//! # Demo run without any external tools
//! daybrief --morning --synthetic -v
//! ```

use chrono::{Local, NaiveDate};
use clap::Parser;
use daybrief::briefing::{generate, select_mode, BriefingContext, Sources};
use daybrief::config::BriefingConfig;
use daybrief::formatters::{format_output, OutputFormat};
use daybrief::logging::LoggingConfig;
use daybrief_core::errors::AppResult;
use daybrief_core::models::CalendarAccount;
use daybrief_providers::SyntheticSources;
use std::process::ExitCode;
use tracing::{debug, error};

#[derive(Parser)]
#[command(
    name = "daybrief",
    version,
    about = "Morning outlook and evening wrap-up from personal health, calendar, task and training sources"
)]
struct Cli {
    /// Morning outlook (default)
    #[arg(long)]
    morning: bool,

    /// Evening wrap-up
    #[arg(long)]
    evening: bool,

    /// Target date (default: today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<NaiveDate>,

    /// Single-line JSON output
    #[arg(long)]
    compact: bool,

    /// Use in-memory demo sources instead of the external tools
    #[arg(long)]
    synthetic: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

async fn run(cli: Cli) -> AppResult<String> {
    let mode = select_mode(cli.morning, cli.evening)?;
    let mut config = BriefingConfig::from_env()?;
    let context = BriefingContext::for_date(cli.date, Local::now().fixed_offset());

    let sources = if cli.synthetic {
        if config.calendar_accounts.is_empty() {
            config.calendar_accounts = vec![
                CalendarAccount::new("personal", "demo-personal"),
                CalendarAccount::new("work", "demo-work"),
            ];
        }
        let med_label = config.med_labels.first().cloned().unwrap_or_default();
        Sources::synthetic(SyntheticSources::demo(
            context.now,
            &config.calendar_accounts,
            &med_label,
        ))
    } else {
        Sources::from_config(&config)
    };
    debug!(%mode, synthetic = cli.synthetic, "Sources ready");

    let briefing = generate(mode, &sources, &config, &context).await?;
    format_output(&briefing, OutputFormat::from_compact_flag(cli.compact))
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env(cli.verbose).init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(code = ?e.code, "Briefing failed: {e}");
            eprintln!("Error: {e}");
            ExitCode::from(u8::try_from(e.code.exit_code()).unwrap_or(1))
        }
    }
}
