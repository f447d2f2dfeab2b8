//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to catalog candidates.

use crate::context::WatchContext;
use data_loader::Movie;

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared behind an `Arc`
/// - Candidates are borrowed catalog entries, so filtering never clones a movie
/// - Filters are pure set-membership tests and cannot fail
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership of the list)
    /// * `context` - Watched IDs and liked genres of the current user
    ///
    /// # Returns
    /// The candidates that pass, in their original order
    fn apply<'a>(&self, candidates: Vec<&'a Movie>, context: &WatchContext<'_>) -> Vec<&'a Movie>;
}
