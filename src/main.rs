use chrono::{Duration, Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::{env, process};
use tidegauge::{Config, TideGauge, TideGaugeError, WaterLevelReport};

const DEFAULT_RANGE_DAYS: i64 = 7;

/// Look up NOAA water levels near a US ZIP code, or ask the ocean assistant a question.
#[derive(Debug, Parser)]
#[command(name = "tidegauge", version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch the water level history of the station closest to a ZIP code
    WaterLevels {
        /// Five digit US ZIP code, e.g. 10001
        #[arg(short, long = "zip", value_name = "ZIP")]
        zip_code: String,

        /// First day of the range (YYYY-MM-DD); defaults to a week before --end
        #[arg(short, long, value_name = "DATE")]
        start: Option<NaiveDate>,

        /// Last day of the range (YYYY-MM-DD); defaults to today
        #[arg(short, long, value_name = "DATE")]
        end: Option<NaiveDate>,

        /// Number of table rows to print
        #[arg(long, default_value_t = 20)]
        rows: usize,
    },
    /// Only report the nearest station to a ZIP code
    Station {
        #[arg(short, long = "zip", value_name = "ZIP")]
        zip_code: String,
    },
    /// Ask the ocean assistant a free-text question
    Ask {
        /// The question, e.g. "why are spring tides higher?"
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    // Set RUST_LOG=info (or debug) to see what each stage is doing.
    env_logger::init();
    let args = Args::parse();

    if let Err(error) = run(args).await {
        eprintln!("Error: {}", error);
        let mut source = error.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), TideGaugeError> {
    let gauge = TideGauge::new(Config::from_env()?)?;

    match args.command {
        Command::WaterLevels {
            zip_code,
            start,
            end,
            rows,
        } => {
            let end = end.unwrap_or_else(|| Local::now().date_naive());
            let start = start.unwrap_or(end - Duration::days(DEFAULT_RANGE_DAYS));
            let report = gauge
                .water_levels()
                .postal_code(&zip_code)
                .start(start)
                .end(end)
                .call()
                .await?;
            print_report(&report, rows);
        }
        Command::Station { zip_code } => {
            let found = gauge.nearest_station(&zip_code).await?;
            println!(
                "{} {}",
                found.location.display_name, found.location.coordinate
            );
            println!(
                "Nearest station: {} (ID: {}) - {:.1} miles away",
                found.station.name, found.station.id, found.distance_miles
            );
        }
        Command::Ask { question } => {
            let answer = gauge.ask(&question.join(" ")).await?;
            println!("{}", answer);
        }
    }
    Ok(())
}

fn print_report(report: &WaterLevelReport, rows: usize) {
    println!(
        "{} {}",
        report.location.display_name, report.location.coordinate
    );
    println!(
        "Nearest station: {} (ID: {}) - {:.1} miles away",
        report.station.name, report.station.id, report.distance_miles
    );
    println!("Product: {}", report.granularity.label());

    match report.series.summary() {
        Some(summary) => println!(
            "{} observations from {} to {}: min {:.2} ft, max {:.2} ft, mean {:.2} ft (MLLW)",
            summary.count,
            summary.first,
            summary.last,
            summary.min_ft,
            summary.max_ft,
            summary.mean_ft
        ),
        None => println!("No usable observations in this range."),
    }

    configure_polars_display(rows);
    match report.series.to_frame() {
        Ok(frame) => println!("{}", frame),
        Err(e) => eprintln!("Could not build table: {}", e),
    }

    #[cfg(feature = "plotting")]
    if !report.series.is_empty() {
        if let Err(e) = tidegauge::chart::plot_series(report) {
            eprintln!("Could not draw chart: {}", e);
        }
    }
}

fn configure_polars_display(rows: usize) {
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    env::set_var("POLARS_FMT_MAX_ROWS", rows.to_string());
}
