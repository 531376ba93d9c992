//! unitconv - Convert values across length, weight, temperature, speed, and currency
//!
//! Thin presentation layer over the library: parses the command line, wires
//! up the persisted stores, and prints inline status for every operation.
//! Conversion failures (unknown units, unsupported pairings, missing
//! currency codes) are reported inline and never abort the process.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{DateTime, Local};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use unitconv::cli::{
    parse_category_arg, parse_format_arg, Cli, Command, ExportFormat, HistoryCommand, RatesCommand,
};
use unitconv::history::HistoryStore;
use unitconv::rates::{CurrencyConverter, RateStore};
use unitconv::summary::summarize;
use unitconv::units::{unit_info, Category, ConversionRecord, Outcome};
use unitconv::{convert, export};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Convert {
            category,
            from,
            to,
            values,
            reverse,
        } => {
            let category = parse_category_arg(&category)?;
            let (from, to) = if reverse { (to, from) } else { (from, to) };
            run_convert(&cli.data_dir, category, &from, &to, &values).await
        }
        Command::Units { category } => run_units(category.as_deref()),
        Command::Info { unit } => {
            run_info(&unit);
            Ok(())
        }
        Command::History { action } => match action {
            None => run_history_show(&cli.data_dir, ExportFormat::Table),
            Some(HistoryCommand::Show { format }) => {
                run_history_show(&cli.data_dir, parse_format_arg(&format)?)
            }
            Some(HistoryCommand::Clear) => run_history_clear(&cli.data_dir),
        },
        Command::Summary => run_summary(&cli.data_dir),
        Command::Rates { action } => match action {
            RatesCommand::Refresh => run_rates_refresh(&cli.data_dir).await,
            RatesCommand::Show => run_rates_show(&cli.data_dir),
        },
    }
}

/// Converts each value, printing the result and recording it in the history.
async fn run_convert(
    data_dir: &Option<PathBuf>,
    category: Category,
    from: &str,
    to: &str,
    values: &[f64],
) -> Result<(), Box<dyn std::error::Error>> {
    let history = history_store(data_dir)?;
    let currency = if category == Category::Currency {
        Some(CurrencyConverter::new(rate_store(data_dir)?))
    } else {
        None
    };

    for &value in values {
        let outcome = match &currency {
            Some(converter) => converter.convert(value, from, to).await?,
            None => convert::convert(category, from, to, value),
        };

        match &outcome {
            Outcome::Value(result) => println!("{} {} = {} {}", value, from, result, to),
            Outcome::Unavailable(reason) => println!("{} {} -> {}: {}", value, from, to, reason),
        }

        history.append(ConversionRecord::new(value, from, to, outcome))?;
    }

    Ok(())
}

/// Lists the unit catalog for one or all categories.
fn run_units(category: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    match category {
        Some(name) => {
            let category = parse_category_arg(name)?;
            println!("{}: {}", category, category.units().join(", "));
        }
        None => {
            for category in Category::all() {
                println!("{}: {}", category, category.units().join(", "));
            }
        }
    }
    Ok(())
}

/// Prints the informational blurb for a unit.
fn run_info(unit: &str) {
    match unit_info(unit) {
        Some(info) => println!("{}: {}", unit, info),
        None => println!("{}: no additional information available", unit),
    }
}

fn run_history_show(
    data_dir: &Option<PathBuf>,
    format: ExportFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let records = history_store(data_dir)?.load()?;
    match format {
        ExportFormat::Table => {
            if records.is_empty() {
                println!("No history available.");
            } else {
                print_history_table(&records);
            }
        }
        ExportFormat::Csv => print!("{}", export::to_csv(&records)?),
        ExportFormat::Json => println!("{}", export::to_json_pretty(&records)?),
    }
    Ok(())
}

fn run_history_clear(data_dir: &Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    history_store(data_dir)?.clear()?;
    println!("History cleared.");
    Ok(())
}

fn run_summary(data_dir: &Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let records = history_store(data_dir)?.load()?;
    let counts = summarize(&records);
    if counts.is_empty() {
        println!("No conversions recorded yet.");
    } else {
        for (category, count) in counts {
            println!("{:<12} {}", category, count);
        }
    }
    Ok(())
}

async fn run_rates_refresh(data_dir: &Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let converter = CurrencyConverter::new(rate_store(data_dir)?);
    let rates = converter.refresh().await?;
    println!("Fetched {} exchange rates.", rates.len());
    Ok(())
}

fn run_rates_show(data_dir: &Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let store = rate_store(data_dir)?;
    match store.load()? {
        None => println!("No cached rates. Run `unitconv rates refresh` to fetch them."),
        Some(rates) => {
            match store.last_refreshed() {
                Some(modified) => {
                    let local: DateTime<Local> = modified.into();
                    println!(
                        "Cached rates (base USD), refreshed {}:",
                        local.format("%Y-%m-%d %H:%M")
                    );
                }
                None => println!("Cached rates (base USD):"),
            }
            for (code, rate) in &rates {
                println!("{:<6} {}", code, rate);
            }
        }
    }
    Ok(())
}

/// Renders history records as an aligned table.
fn print_history_table(records: &[ConversionRecord]) {
    println!("{:>14}  {:<12} {:<12} Result", "Value", "From", "To");
    for record in records {
        println!(
            "{:>14}  {:<12} {:<12} {}",
            record.value, record.from_unit, record.to_unit, record.outcome
        );
    }
}

/// Opens the history store, honoring a --data-dir override.
fn history_store(data_dir: &Option<PathBuf>) -> Result<HistoryStore, Box<dyn std::error::Error>> {
    match data_dir {
        Some(dir) => Ok(HistoryStore::with_dir(dir.clone())),
        None => HistoryStore::new()
            .ok_or_else(|| "could not determine a data directory; pass --data-dir".into()),
    }
}

/// Opens the rate store, honoring a --data-dir override.
fn rate_store(data_dir: &Option<PathBuf>) -> Result<RateStore, Box<dyn std::error::Error>> {
    match data_dir {
        Some(dir) => Ok(RateStore::with_dir(dir.clone())),
        None => RateStore::new()
            .ok_or_else(|| "could not determine a data directory; pass --data-dir".into()),
    }
}
