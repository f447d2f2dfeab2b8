//! Orchestrator crate for the movie recommendation engine.
//!
//! This crate wires the loader, the validation rules and the recommendation
//! pipeline into a single run, and serializes the results.

pub mod config;
pub mod orchestrator;
pub mod writer;

pub use config::{OrchestratorConfig, ReportMode};
pub use orchestrator::{
    MovieCheck, MovieReport, RecommendationOrchestrator, RunSummary, UserOutcome, UserReport,
};
pub use writer::{RecommendationWriter, strip_ansi};
