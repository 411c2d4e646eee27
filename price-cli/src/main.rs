use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use price_cli::{csv_loader, currency, logging};
use price_core::models::{Catalog, FuelType, MIN_YEAR, current_year, year_options};
use price_core::{FormController, FormEvent, MockEstimator};

/// Estimate a used-car price from company, model, fuel type, purchase year
/// and odometer reading.
#[derive(Parser, Debug)]
#[command(name = "car-price")]
#[command(version, about, long_about = None)]
struct Cli {
    /// CSV file with extra catalog entries (columns: company,model)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the car companies in the catalog
    Companies,

    /// List the models available for one company
    Models {
        /// Company name, e.g. "Hyundai"
        company: String,
    },

    /// List the selectable purchase years, newest first
    Years,

    /// Run one price estimation
    Estimate {
        /// Company name, e.g. "Hyundai"
        #[arg(long)]
        company: String,

        /// Full model name, e.g. "Hyundai Grand i10"
        #[arg(long)]
        model: String,

        /// Fuel type: Petrol, Diesel or LPG
        #[arg(long, default_value = "Petrol")]
        fuel: String,

        /// Year of purchase
        #[arg(long, default_value_t = current_year())]
        year: i32,

        /// Kilometers travelled
        #[arg(long, default_value_t = 0)]
        kilometers: u64,

        /// Simulated computation time in milliseconds
        #[arg(long, default_value_t = 1500)]
        delay_ms: u64,

        /// Seed for the stub's random draw (reproducible runs)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the full controller snapshot as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Built-in catalog, optionally extended from a CSV file.
fn build_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    let mut catalog = Catalog::builtin();
    if let Some(path) = path {
        let entries = csv_loader::load_from_file(path)
            .with_context(|| format!("failed to load catalog extension: {}", path.display()))?;
        tracing::info!(
            entries = entries.len(),
            file = %path.display(),
            "catalog extended"
        );
        for entry in entries {
            catalog.add_entry(entry);
        }
    }
    Ok(catalog)
}

#[allow(clippy::too_many_arguments)]
async fn run_estimate(
    catalog: Catalog,
    company: String,
    model: String,
    fuel: String,
    year: i32,
    kilometers: u64,
    delay_ms: u64,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    // The web form constrains these through its option lists; on the command
    // line the same checks happen here, before any state changes.
    if !catalog.contains_company(&company) {
        bail!("unknown company '{company}'; try `car-price companies`");
    }
    let fuel = FuelType::parse(&fuel)
        .with_context(|| format!("unknown fuel type '{fuel}' (expected Petrol, Diesel or LPG)"))?;
    if !(MIN_YEAR..=current_year()).contains(&year) {
        bail!("year {year} is outside [{MIN_YEAR}, {}]", current_year());
    }

    let mut provider = MockEstimator::new().with_latency(Duration::from_millis(delay_ms));
    if let Some(seed) = seed {
        provider = provider.with_seed(seed);
    }
    let mut controller = FormController::new(catalog, Arc::new(provider));

    controller.apply(FormEvent::CompanyChanged(company.clone()));
    if !controller
        .available_models()
        .iter()
        .any(|m| m.eq_ignore_ascii_case(&model))
    {
        bail!("'{model}' is not a {company} model; try `car-price models \"{company}\"`");
    }
    controller.apply(FormEvent::ModelChanged(model));
    controller.apply(FormEvent::FuelTypeChanged(fuel));
    controller.apply(FormEvent::YearChanged(year));
    controller.apply(FormEvent::KilometersChanged(kilometers));

    println!("Calculating estimate...");
    let Some(estimate) = controller.submit().await else {
        bail!("an estimation is already in flight");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&controller.snapshot())?);
    } else {
        println!();
        println!("Estimated price: {}", currency::format_inr(estimate.amount));
        println!(
            "Based on {} model year and {} km driven",
            estimate.year_of_purchase, estimate.kilometers
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();
    let catalog = build_catalog(cli.catalog.as_ref())?;

    match cli.command {
        Command::Companies => {
            for company in catalog.companies() {
                println!("{company}");
            }
        }
        Command::Models { company } => {
            let models = catalog.models_for(&company);
            if models.is_empty() {
                bail!("no models found for '{company}'; try `car-price companies`");
            }
            for model in models {
                println!("{model}");
            }
        }
        Command::Years => {
            for year in year_options() {
                println!("{year}");
            }
        }
        Command::Estimate {
            company,
            model,
            fuel,
            year,
            kilometers,
            delay_ms,
            seed,
            json,
        } => {
            run_estimate(
                catalog, company, model, fuel, year, kilometers, delay_ms, seed, json,
            )
            .await?;
        }
    }

    Ok(())
}
