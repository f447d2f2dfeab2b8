//! # Recommendation Orchestrator
//!
//! This module coordinates a full run:
//! 1. Validate every movie, growing the accepted movie-id registry
//! 2. Validate every user, growing the accepted user-id registry
//! 3. Recommend for each accepted user from the accepted movies
//! 4. Write blocks and error lines through the RecommendationWriter
//!
//! Users are processed strictly one at a time. An id enters a registry only
//! after its record has been accepted, so a record is never compared against
//! itself.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use data_loader::{DataIndex, Movie, User};
use pipeline::{FilterPipeline, default_pipeline, recommend_with};
use validation::{IdRegistry, MovieValidation, UserValidation, validate_movie, validate_user};

use crate::config::{OrchestratorConfig, ReportMode};
use crate::writer::RecommendationWriter;

/// Validation result for one movie record
#[derive(Debug, Clone, Serialize)]
pub struct MovieCheck {
    pub title: String,
    pub id: String,
    pub validation: MovieValidation,
}

/// All movie checks plus the movies that made it into the catalog
#[derive(Debug, Clone, Serialize)]
pub struct MovieReport {
    pub checks: Vec<MovieCheck>,
    #[serde(skip)]
    pub accepted: Vec<Movie>,
}

impl MovieReport {
    pub fn rejected(&self) -> impl Iterator<Item = &MovieCheck> {
        self.checks.iter().filter(|check| !check.validation.is_valid())
    }
}

/// What happened to one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UserOutcome {
    /// Accepted; the set may be empty in lenient mode
    Recommended { titles: HashSet<String> },
    /// Error messages in priority order (name, id, no recommendations)
    Rejected { errors: Vec<String> },
    /// Accepted but left out of the output for having no history
    Skipped,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserReport {
    pub name: String,
    pub id: String,
    pub validation: UserValidation,
    pub outcome: UserOutcome,
}

/// Counters for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub movies_accepted: usize,
    pub movies_rejected: usize,
    pub users_recommended: usize,
    pub users_rejected: usize,
    pub users_skipped: usize,
    pub lines_written: usize,
}

/// Format a rule failure the way it appears in the output file
fn error_message(field: &str, value: &str, reason: &str) -> String {
    format!("ERROR: {} {{{}}} is wrong: {}", field, value, reason)
}

fn no_recommendations_message(name: &str) -> String {
    format!("ERROR: No recommendations for user {{{}}}", name)
}

/// Main orchestrator that coordinates validation, recommendation and output
pub struct RecommendationOrchestrator {
    config: OrchestratorConfig,
    filter_pipeline: FilterPipeline,
}

impl RecommendationOrchestrator {
    pub fn new(config: OrchestratorConfig) -> Self {
        Self {
            config,
            filter_pipeline: default_pipeline(),
        }
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Validate movies in file order.
    ///
    /// Only accepted movies enter the registry and the returned catalog.
    pub fn validate_movies(&self, movies: &[Movie]) -> MovieReport {
        let mut registry = IdRegistry::new();
        let mut checks = Vec::with_capacity(movies.len());
        let mut accepted = Vec::new();

        for movie in movies {
            let existing = self
                .config
                .check_movie_id_uniqueness
                .then_some(&registry);
            let validation = validate_movie(movie, existing);

            if validation.is_valid() {
                registry.insert(movie.id.clone());
                accepted.push(movie.clone());
            } else {
                let reasons: Vec<String> =
                    validation.violations().map(ToString::to_string).collect();
                warn!(
                    "Rejected movie {:?} ({}): {}",
                    movie.title,
                    movie.id,
                    reasons.join("; ")
                );
            }

            checks.push(MovieCheck {
                title: movie.title.clone(),
                id: movie.id.clone(),
                validation,
            });
        }

        MovieReport { checks, accepted }
    }

    /// Validate users in file order and recommend for the accepted ones
    pub fn process_users(&self, users: &[User], catalog: &[Movie]) -> Vec<UserReport> {
        let mut registry = IdRegistry::new();
        users
            .iter()
            .map(|user| self.process_user(user, catalog, &mut registry))
            .collect()
    }

    fn process_user(&self, user: &User, catalog: &[Movie], registry: &mut IdRegistry) -> UserReport {
        let validation = validate_user(user, registry);

        // first failure wins: name, then id
        let failures: Vec<String> = [
            validation
                .name
                .reason()
                .map(|reason| error_message("User Name", &user.name, &reason)),
            validation
                .id
                .reason()
                .map(|reason| error_message("User ID", &user.id, &reason)),
        ]
        .into_iter()
        .flatten()
        .collect();

        let outcome = if !failures.is_empty() {
            warn!("Rejected user {:?} ({}): {}", user.name, user.id, failures.join("; "));
            UserOutcome::Rejected { errors: failures }
        } else {
            registry.insert(user.id.clone());
            self.recommend_for(user, catalog)
        };

        UserReport {
            name: user.name.clone(),
            id: user.id.clone(),
            validation,
            outcome,
        }
    }

    /// Outcome for an accepted user
    fn recommend_for(&self, user: &User, catalog: &[Movie]) -> UserOutcome {
        if user.watched.is_empty() && self.config.skip_users_without_history {
            debug!("Skipping user {} with no watch history", user.id);
            return UserOutcome::Skipped;
        }

        let titles = recommend_with(&self.filter_pipeline, &user.watched, catalog);
        debug!("User {} gets {} recommendations", user.id, titles.len());

        if titles.is_empty() && self.config.mode == ReportMode::Strict {
            return UserOutcome::Rejected {
                errors: vec![no_recommendations_message(&user.name)],
            };
        }
        UserOutcome::Recommended { titles }
    }

    /// Write one user's report according to the report mode
    fn write_report<W: Write>(
        &self,
        report: &UserReport,
        writer: &mut RecommendationWriter<W>,
    ) -> Result<()> {
        match &report.outcome {
            UserOutcome::Recommended { titles } => {
                writer.write_recommendation(&report.name, &report.id, titles)
            }
            UserOutcome::Rejected { errors } => match self.config.mode {
                ReportMode::Strict => {
                    let by_priority: Vec<Option<&str>> =
                        errors.iter().map(|e| Some(e.as_str())).collect();
                    writer.write_first_error(&report.name, &report.id, &by_priority)?;
                    Ok(())
                }
                ReportMode::Lenient => errors
                    .iter()
                    .try_for_each(|error| writer.write_error(&report.name, &report.id, error)),
            },
            UserOutcome::Skipped => Ok(()),
        }
    }

    /// Run the whole pipeline over `index`, writing to `writer`
    pub fn run<W: Write>(
        &self,
        index: &DataIndex,
        writer: &mut RecommendationWriter<W>,
    ) -> Result<RunSummary> {
        let start_time = Instant::now();

        let movie_report = self.validate_movies(index.movies());
        info!(
            "Accepted {} of {} movies",
            movie_report.accepted.len(),
            movie_report.checks.len()
        );

        let reports = self.process_users(index.users(), &movie_report.accepted);

        let mut summary = RunSummary {
            movies_accepted: movie_report.accepted.len(),
            movies_rejected: movie_report.checks.len() - movie_report.accepted.len(),
            ..RunSummary::default()
        };
        for report in &reports {
            self.write_report(report, writer)
                .with_context(|| format!("Failed to write report for user {}", report.id))?;
            match report.outcome {
                UserOutcome::Recommended { .. } => summary.users_recommended += 1,
                UserOutcome::Rejected { .. } => summary.users_rejected += 1,
                UserOutcome::Skipped => summary.users_skipped += 1,
            }
        }
        summary.lines_written = writer.lines_written();

        info!(
            "Processed {} users in {:.2?}: {} recommended, {} rejected, {} skipped",
            reports.len(),
            start_time.elapsed(),
            summary.users_recommended,
            summary.users_rejected,
            summary.users_skipped
        );
        Ok(summary)
    }

    /// Run and write the output file at `output_path`, replacing it
    pub fn run_to_file(&self, index: &DataIndex, output_path: &Path) -> Result<RunSummary> {
        let file = File::create(output_path)
            .with_context(|| format!("Failed to create {}", output_path.display()))?;
        let mut writer = RecommendationWriter::new(BufWriter::new(file));
        let summary = self.run(index, &mut writer)?;
        writer.finish()?;
        Ok(summary)
    }
}

impl Default for RecommendationOrchestrator {
    fn default() -> Self {
        Self::new(OrchestratorConfig::default())
    }
}
