//! Writedown CLI
//!
//! Computes, prints, and optionally posts the depreciation of one fiscal
//! period of a JSON ledger book.

mod args;
mod logging;
mod render;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use writedown_book::LedgerBook;
use writedown_core::depreciation::{PeriodCloseService, ReportSink};
use writedown_core::fiscal::FiscalPeriod;
use writedown_core::reports::{DepreciationReport, date_text};
use writedown_shared::{AppConfig, AppError, AppResult};

use crate::args::Cli;
use crate::render::{JsonRenderer, TextRenderer};

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match AppConfig::load().map_err(AppError::from) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return exit_code_for(&err);
        }
    };
    logging::init(&config.logging, cli.verbose);

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Depreciation run failed: {err:#}");
            eprintln!("Error: {err:#}");
            err.downcast_ref::<AppError>()
                .map_or(ExitCode::FAILURE, exit_code_for)
        }
    }
}

fn exit_code_for(err: &AppError) -> ExitCode {
    u8::try_from(err.exit_code()).map_or(ExitCode::FAILURE, ExitCode::from)
}

fn run(cli: &Cli, config: &AppConfig) -> anyhow::Result<()> {
    let path = cli
        .book
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.book.path));
    let mut book = LedgerBook::load(&path)
        .map_err(AppError::from)
        .with_context(|| format!("loading book {}", path.display()))?;

    let mut period = resolve_period(&mut book, cli)?;
    info!(
        start = %period.start_date,
        end = %period.end_date,
        "Closing depreciation for period"
    );

    if !PeriodCloseService::has_pending_depreciation(&period, &book).map_err(AppError::from)? {
        println!(
            "No pending depreciation for the period ending {}",
            date_text(period.end_date)
        );
        return Ok(());
    }

    let result = PeriodCloseService::prepare(&period, &book).map_err(AppError::from)?;
    let report = DepreciationReport::new(&config.report.title, &period, result.rows.clone());

    let stdout = io::stdout().lock();
    let rendered = if cli.json {
        JsonRenderer::new(stdout).render(&report)
    } else {
        TextRenderer::new(stdout, &config.report.currency_symbol).render(&report)
    };
    rendered.map_err(AppError::from)?;

    if !cli.commit {
        info!(
            postings = result.postings.len(),
            total = result.total_amount(),
            "Dry run, nothing posted"
        );
        return Ok(());
    }

    match PeriodCloseService::commit(&mut period, result, report, &mut book).map_err(AppError::from)? {
        Some(voucher) => {
            book.save(&path)
                .map_err(AppError::from)
                .with_context(|| format!("saving book {}", path.display()))?;
            eprintln!("Posted depreciation voucher {voucher}");
        }
        None => eprintln!("Nothing to post"),
    }
    Ok(())
}

/// Finds the period ending on `--end`, or adds one when `--start` is given.
fn resolve_period(book: &mut LedgerBook, cli: &Cli) -> AppResult<FiscalPeriod> {
    if let Some(period) = book.period_ending(cli.end) {
        return Ok(period.clone());
    }
    let start = cli.start.ok_or_else(|| {
        AppError::NotFound(format!(
            "no fiscal period ends on {}; pass --start to add one",
            cli.end
        ))
    })?;
    if start > cli.end {
        return Err(AppError::Validation(format!(
            "period start {start} is after its end {}",
            cli.end
        )));
    }

    let period = FiscalPeriod::new(start, cli.end);
    if let Some(existing) = book.data().periods.iter().find(|p| p.overlaps(&period)) {
        return Err(AppError::BusinessRule(format!(
            "period {start} - {} overlaps the existing period {} - {}",
            cli.end, existing.start_date, existing.end_date
        )));
    }
    book.add_period(period.clone());
    info!(start = %start, end = %cli.end, "Added fiscal period");
    Ok(period)
}
