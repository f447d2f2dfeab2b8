//! Pipeline for genre-overlap movie recommendations.
//!
//! This crate provides:
//! - WatchContext with the liked genres derived from a watch history
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - `recommend`, the catalog-wide entry point
//!
//! ## Architecture
//! Every catalog movie is a candidate. Filters run in order:
//! 1. AlreadyWatchedFilter removes watched movies
//! 2. GenreOverlapFilter keeps movies sharing a liked genre
//!
//! The surviving titles form the recommendation set. There is no ranking:
//! membership is all that matters.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::recommend;
//!
//! let titles = recommend(&user.watched, index.movies());
//! ```

pub mod context;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod recommend;

// Re-export main types
pub use context::{WatchContext, liked_genres};
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use recommend::{default_pipeline, recommend, recommend_with};
