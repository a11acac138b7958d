//! Command line front end for the TripWeaver planner.
//!
//! Loads a CSV POI catalog, parses the free-text trip query, runs the
//! planning pipeline, and renders the itinerary as text or JSON.

#![forbid(unsafe_code)]

mod error;
mod outline;
mod query;

pub use error::CliError;
pub use outline::OutlineExplainer;
pub use query::{QueryError, canonical_city, parse_query};

use std::io::Write;
use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use tripweaver_core::TripPlan;
use tripweaver_data::{WikipediaDescriber, load_catalog};
use tripweaver_planner::{Planner, PlannerConfig};

/// Plan multi-day city itineraries from a free-text request.
#[derive(Debug, Parser)]
#[command(name = "tripweaver", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build an itinerary for a free-text trip query.
    Plan(PlanArgs),
}

/// Arguments for the `plan` subcommand.
#[derive(Debug, Args)]
struct PlanArgs {
    /// The trip request, e.g. "3 days in Paris visiting museums".
    query: String,

    /// Path to the POI catalog CSV.
    #[arg(long, value_name = "FILE")]
    data: Utf8PathBuf,

    /// Override the day count detected in the query.
    #[arg(long)]
    days: Option<usize>,

    /// Most places scheduled into a single day.
    #[arg(long = "per-day", default_value_t = 4, value_name = "N")]
    per_day: usize,

    /// Lower bound on the ranked candidate pool.
    #[arg(long, default_value_t = 30, value_name = "N")]
    pool: usize,

    /// Emit the plan as pretty-printed JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Enrich places with Wikipedia summaries (needs network access).
    #[arg(long)]
    describe: bool,
}

/// Parse process arguments and run the selected command.
///
/// # Errors
/// Returns a [`CliError`] describing the first failure; argument parsing
/// errors carry clap's own rendering.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    match cli.command {
        Command::Plan(args) => {
            let stdout = std::io::stdout();
            run_plan(&args, &mut stdout.lock())
        }
    }
}

fn run_plan(args: &PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    if !args.data.is_file() {
        return Err(CliError::MissingDataFile {
            path: args.data.clone(),
        });
    }
    let table = load_catalog(args.data.as_std_path()).map_err(|source| CliError::LoadCatalog {
        path: args.data.clone(),
        source,
    })?;

    let mut request = parse_query(&args.query)?;
    if let Some(days) = args.days {
        request = request.with_days(days);
    }

    let mut planner = Planner::new(Arc::new(table))
        .with_config(PlannerConfig {
            per_day_cap: args.per_day,
            candidate_pool: args.pool,
        })
        .with_explainer(OutlineExplainer);
    if args.describe {
        planner = planner.with_describer(WikipediaDescriber::new()?);
    }

    let plan = planner.plan(&request);
    if args.json {
        write_json(writer, &plan)
    } else {
        write_text(writer, &plan)
    }
}

fn write_json(writer: &mut dyn Write, plan: &TripPlan) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(plan)?;
    writeln!(writer, "{rendered}")?;
    Ok(())
}

fn write_text(writer: &mut dyn Write, plan: &TripPlan) -> Result<(), CliError> {
    writeln!(writer, "Trip to {}", plan.city)?;
    if plan.days.is_empty() {
        writeln!(writer, "No places found for this request.")?;
        return Ok(());
    }
    for day in &plan.days {
        writeln!(writer, "Day {}", day.day)?;
        if day.places.is_empty() {
            writeln!(writer, "  (free day)")?;
            continue;
        }
        for place in &day.places {
            writeln!(writer, "  - {} ({})", place.name, place.category)?;
            if let Some(description) = &place.description {
                writeln!(writer, "    {description}")?;
            }
        }
    }
    if let Some(explanation) = &plan.explanation {
        writeln!(writer)?;
        writeln!(writer, "{explanation}")?;
    }
    Ok(())
}
