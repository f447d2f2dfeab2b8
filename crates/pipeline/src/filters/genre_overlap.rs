//! Filter to keep only movies sharing a genre with the watch history.

use crate::context::WatchContext;
use crate::traits::Filter;
use data_loader::Movie;

/// Keeps candidates with at least one genre in the liked genres.
///
/// ## Algorithm
/// 1. Liked genres come precomputed in WatchContext
/// 2. For each candidate, check if any of its genres is liked
/// 3. A candidate without genres never matches
pub struct GenreOverlapFilter;

impl Filter for GenreOverlapFilter {
    fn name(&self) -> &str {
        "GenreOverlapFilter"
    }

    fn apply<'a>(&self, candidates: Vec<&'a Movie>, context: &WatchContext<'_>) -> Vec<&'a Movie> {
        if context.liked_genres.is_empty() {
            return Vec::new();
        }
        candidates
            .into_iter()
            .filter(|movie| {
                movie
                    .genres
                    .iter()
                    .any(|genre| context.liked_genres.contains(genre.as_str()))
            })
            .collect()
    }
}
