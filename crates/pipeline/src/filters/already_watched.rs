//! Filter to remove movies the user has already watched.
//!
//! This is the first filter in the pipeline: a watched movie is never
//! recommended, whatever its genres.

use crate::context::WatchContext;
use crate::traits::Filter;
use data_loader::Movie;

/// Removes candidates whose id is in the watched set.
///
/// ## Algorithm
/// Uses the HashSet in WatchContext.watched for O(1) lookups.
pub struct AlreadyWatchedFilter;

impl Filter for AlreadyWatchedFilter {
    fn name(&self) -> &str {
        "AlreadyWatchedFilter"
    }

    fn apply<'a>(&self, candidates: Vec<&'a Movie>, context: &WatchContext<'_>) -> Vec<&'a Movie> {
        candidates
            .into_iter()
            .filter(|movie| !context.has_watched(movie))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::MovieId;
    use std::collections::HashSet;

    #[test]
    fn test_already_watched_filter() {
        let catalog = vec![
            Movie::new("One", "O100", ["Action"]),
            Movie::new("Two", "T101", ["Action"]),
            Movie::new("Three", "T200", ["Drama"]),
            Movie::new("Four", "F300", ["Drama"]),
        ];
        let watched: HashSet<MovieId> = ["O100", "T200"].iter().map(|s| s.to_string()).collect();
        let context = WatchContext::build(&watched, &catalog);

        let filtered = AlreadyWatchedFilter.apply(catalog.iter().collect(), &context);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, "T101");
        assert_eq!(filtered[1].id, "F300");
    }

    #[test]
    fn test_duplicate_ids_are_all_removed() {
        let catalog = vec![
            Movie::new("One", "O100", ["Action"]),
            Movie::new("One Again", "O100", ["Action"]),
        ];
        let watched: HashSet<MovieId> = HashSet::from(["O100".to_string()]);
        let context = WatchContext::build(&watched, &catalog);

        assert!(AlreadyWatchedFilter.apply(catalog.iter().collect(), &context).is_empty());
    }
}
