use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::DataIndex;
use orchestrator::{
    MovieReport, OrchestratorConfig, RecommendationOrchestrator, ReportMode, UserOutcome,
    UserReport,
};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// movie-recs - catalog validation and genre-based movie recommendations
#[derive(Parser)]
#[command(name = "movie-recs")]
#[command(about = "Validate movie/user catalogs and recommend movies by genre overlap", long_about = None)]
struct Cli {
    /// Path to the movies catalog
    #[arg(long, default_value = "data/movies.txt")]
    movies: PathBuf,

    /// Path to the users catalog
    #[arg(long, default_value = "data/users.txt")]
    users: PathBuf,

    /// Optional JSON config file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate both catalogs and write the recommendations file
    Recommend {
        /// Output file, replaced if it exists
        #[arg(short, long, default_value = "recommendations.txt")]
        output: PathBuf,

        /// Report only the first failure per user
        #[arg(long)]
        strict: bool,

        /// Leave users with no watched movies out of the output
        #[arg(long)]
        skip_empty_history: bool,
    },

    /// Validate both catalogs and print the result of every rule
    Validate {
        /// Print a JSON document instead of colored text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => OrchestratorConfig::from_json_file(path)?,
        None => OrchestratorConfig::default(),
    };

    tracing::debug!("Using config {:?}", config);

    let start = Instant::now();
    let data_index = load_catalogs(&cli.movies, &cli.users)?;
    let (movies, users) = data_index.counts();
    println!(
        "{} Parsed {} movies and {} users in {:?}",
        "✓".green(),
        movies,
        users,
        start.elapsed()
    );

    match cli.command {
        Commands::Recommend {
            output,
            strict,
            skip_empty_history,
        } => {
            if strict {
                config.mode = ReportMode::Strict;
            }
            if skip_empty_history {
                config.skip_users_without_history = true;
            }
            handle_recommend(&data_index, config, &output)?
        }
        Commands::Validate { json } => handle_validate(&data_index, config, json)?,
    }

    Ok(())
}

fn load_catalogs(movies: &Path, users: &Path) -> Result<DataIndex> {
    DataIndex::load_from_files(movies, users).context("Failed to load catalogs")
}

/// Handle the 'recommend' command
fn handle_recommend(data_index: &DataIndex, config: OrchestratorConfig, output: &Path) -> Result<()> {
    let orchestrator = RecommendationOrchestrator::new(config);
    let summary = orchestrator.run_to_file(data_index, output)?;

    println!("{}", "Run summary:".bold().blue());
    println!(
        "{}Movies: {} accepted, {} rejected",
        "• ".green(),
        summary.movies_accepted,
        summary.movies_rejected
    );
    println!(
        "{}Users: {} recommended, {} rejected, {} skipped",
        "• ".green(),
        summary.users_recommended,
        summary.users_rejected,
        summary.users_skipped
    );
    println!(
        "{} Wrote {} lines to {}",
        "✓".green(),
        summary.lines_written,
        output.display()
    );
    Ok(())
}

/// Handle the 'validate' command
fn handle_validate(data_index: &DataIndex, config: OrchestratorConfig, json: bool) -> Result<()> {
    let orchestrator = RecommendationOrchestrator::new(config);
    let movie_report = orchestrator.validate_movies(data_index.movies());
    let user_reports = orchestrator.process_users(data_index.users(), &movie_report.accepted);

    if json {
        let document = json!({
            "movies": movie_report,
            "users": user_reports,
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    print_movie_report(&movie_report);
    print_user_reports(&user_reports);
    Ok(())
}

fn print_check(label: &str, reason: Option<String>) {
    match reason {
        None => println!("{}", format!("Valid {} ✔", label).green().bold()),
        Some(reason) => println!("{}", format!("ERROR: {} is wrong: {}", label, reason).red()),
    }
}

fn separator() {
    println!("-----------------------------------");
}

fn print_movie_report(report: &MovieReport) {
    println!("{}", "Movies".bold().blue());
    separator();
    for check in &report.checks {
        println!("Movie Title: {}", check.title);
        println!("Movie ID: {}", check.id);
        print_check("Title", check.validation.title.reason());
        print_check("ID", check.validation.id.reason());
        separator();
    }
}

fn print_user_reports(reports: &[UserReport]) {
    println!("{}", "Users".bold().blue());
    separator();
    for report in reports {
        println!("User Name: {}", report.name);
        println!("User ID: {}", report.id);
        print_check("Name", report.validation.name.reason());
        print_check("ID", report.validation.id.reason());
        match &report.outcome {
            UserOutcome::Recommended { titles } => {
                let mut titles: Vec<&String> = titles.iter().collect();
                titles.sort();
                for title in titles {
                    println!("{}", format!("Recommended Movie: {}", title).blue());
                }
            }
            UserOutcome::Rejected { errors } if report.validation.is_valid() => {
                for error in errors {
                    println!("{}", error.red());
                }
            }
            UserOutcome::Rejected { .. } => {}
            UserOutcome::Skipped => println!("{}", "Skipped: no watched movies".yellow()),
        }
        separator();
    }
}
