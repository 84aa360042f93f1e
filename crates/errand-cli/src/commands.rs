//! Command handlers

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, warn};

use crate::cli::{Cli, Commands};
use crate::output::{output_history, output_record, output_route, output_time_condition};
use errand_app::app::{generate_quote_report, QuoteOptions, QuoteService};
use errand_app::config::Config;
use errand_app::export::export_quotes_to_excel;
use errand_app::repository::{open_history_repo, open_quote_service};
use errand_domain::model::{GeoPoint, MultiStopFactors, PriceFactors, ShoppingFactors};
use errand_domain::repository::QuoteHistoryRepository;
use errand_domain::service::time_condition::kst_hour;
use errand_domain::service::{is_distance_priced, time_condition_at_hour};
use errand_infra::pricing_table_loader::{load_pricing_table, pricing_table_to_toml};
use errand_infra::quote_csv::load_batch_from_csv;
use errand_types::{Error, OutputFormat, Result};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref pricing) = cli.pricing {
        config.pricing_file = Some(pricing.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);
    debug!(?output_format, pricing = ?config.pricing_file, "configuration resolved");

    match cli.command {
        Commands::Quote {
            distance,
            weather,
            time,
            weight,
            stops,
            client_price,
            tip,
            label,
        } => {
            let service = open_quote_service(&config)?;
            let time = time.unwrap_or_else(|| service.time_condition());
            let factors = PriceFactors::try_new(distance, weather, time, weight)?;
            let options = QuoteOptions {
                client_price,
                tip,
                label,
            };
            cmd_quote(&service, factors, stops, &options, output_format)
        }

        Commands::Shopping {
            range,
            items,
            distance,
            weather,
            time,
            heavy,
            client_price,
            tip,
            label,
        } => {
            let service = open_quote_service(&config)?;
            let time = time.unwrap_or_else(|| service.time_condition());
            let factors = ShoppingFactors::try_new(range, items, distance, weather, time, heavy)?;
            if distance > 0.0 && !is_distance_priced(range) {
                warn!(%range, distance, "--distance only applies to --range specific, ignoring it");
            }
            let options = QuoteOptions {
                client_price,
                tip,
                label,
            };
            let record = service.quote_shopping(factors, &options)?;
            output_record(output_format, &record)
        }

        Commands::Route { from, to } => cmd_route(&config, &from, &to, output_format),

        Commands::TimeCondition { hour } => cmd_time_condition(hour, output_format),

        Commands::Batch { csv, output } => cmd_batch(&config, &csv, output, output_format),

        Commands::History {
            limit,
            clear,
            label,
        } => cmd_history(&config, limit, clear, label, output_format),

        Commands::Export { output } => cmd_export(&config, &output),

        Commands::Config {
            show,
            set_output,
            set_history,
            set_store_dir,
            set_pricing_file,
            reset,
        } => cmd_config(
            show,
            set_output,
            set_history,
            set_store_dir,
            set_pricing_file,
            reset,
        ),
    }
}

fn cmd_quote(
    service: &QuoteService,
    factors: PriceFactors,
    stops: Option<u32>,
    options: &QuoteOptions,
    output_format: OutputFormat,
) -> Result<()> {
    let record = match stops {
        Some(total_stops) if total_stops > 1 => service.quote_multi_stop(
            MultiStopFactors {
                factors,
                total_stops,
            },
            options,
        )?,
        _ => service.quote_errand(factors, options)?,
    };
    output_record(output_format, &record)
}

fn cmd_route(config: &Config, from: &GeoPoint, to: &GeoPoint, output_format: OutputFormat) -> Result<()> {
    let table = config.pricing_table()?;
    let route = QuoteService::new(table).route(from, to);
    output_route(output_format, &route)
}

fn cmd_time_condition(hour: Option<u32>, output_format: OutputFormat) -> Result<()> {
    let hour = hour.unwrap_or_else(|| kst_hour(&Utc::now()));
    output_time_condition(output_format, hour, time_condition_at_hour(hour))
}

fn cmd_batch(
    config: &Config,
    csv_path: &Path,
    output: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    if !csv_path.exists() {
        return Err(Error::FileNotFound(format!(
            "CSV file not found: {}",
            csv_path.display()
        )));
    }

    let batch = load_batch_from_csv(csv_path)?;
    eprintln!(
        "Loaded {} rows from {} ({} rejected)",
        batch.rows.len(),
        csv_path.display(),
        batch.rejected.len()
    );

    let service = QuoteService::new(config.pricing_table()?);
    let quotes = service.quote_batch(&batch);

    let content = match output_format {
        OutputFormat::Json => {
            let rows: Vec<_> = quotes
                .iter()
                .map(|q| {
                    serde_json::json!({
                        "line": q.row.line,
                        "label": q.row.label,
                        "quote": q.quote,
                    })
                })
                .collect();
            serde_json::to_string_pretty(&serde_json::json!({
                "quotes": rows,
                "rejected": batch.rejected,
            }))?
        }
        OutputFormat::Table => generate_quote_report(&quotes, &batch.rejected),
    };

    match output {
        Some(path) => {
            std::fs::write(&path, content)?;
            println!("Report written to: {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn cmd_history(
    config: &Config,
    limit: usize,
    clear: bool,
    label: Option<Vec<String>>,
    output_format: OutputFormat,
) -> Result<()> {
    let repo = open_history_repo(config)?;

    if clear {
        let removed = repo.clear()?;
        println!("Cleared {} recorded quotes", removed);
        return Ok(());
    }

    if let Some([id, text]) = label.as_deref() {
        let text = text.trim();
        let text = (!text.is_empty()).then(|| text.to_string());
        let full_id = repo.set_label(id, text.clone())?;
        match text {
            Some(text) => println!("Labelled {}: {}", full_id, text),
            None => println!("Removed label from {}", full_id),
        }
        return Ok(());
    }

    let total = repo.len();
    let records: Vec<_> = repo.all_entries().into_iter().take(limit).collect();
    output_history(output_format, &records, total)
}

fn cmd_export(config: &Config, output: &Path) -> Result<()> {
    let repo = open_history_repo(config)?;
    let records = repo.all_entries();

    if records.is_empty() {
        println!("No recorded quotes to export.");
        return Ok(());
    }

    export_quotes_to_excel(&records, output)?;
    println!("Exported {} quotes to: {}", records.len(), output.display());
    Ok(())
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_history: Option<bool>,
    set_store_dir: Option<PathBuf>,
    set_pricing_file: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(history_enabled) = set_history {
        config.history_enabled = history_enabled;
        modified = true;
    }

    if let Some(store_dir) = set_store_dir {
        config.store_dir = Some(store_dir);
        modified = true;
    }

    if let Some(pricing_file) = set_pricing_file {
        // Refuse a rate card that would fail on every quote
        load_pricing_table(&pricing_file)?;
        config.pricing_file = Some(pricing_file);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration saved");
    }

    if show || !modified {
        println!("{}", config);
    }

    if show {
        let table = config.pricing_table()?;
        println!("Rate card in effect");
        println!("-------------------");
        println!("{}", pricing_table_to_toml(&table)?);
    }

    Ok(())
}
