//! Genre-overlap recommendation.

use crate::context::WatchContext;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{AlreadyWatchedFilter, GenreOverlapFilter};
use data_loader::{Movie, MovieId};
use std::collections::HashSet;

/// The standard pipeline: drop watched movies, then keep genre matches
pub fn default_pipeline() -> FilterPipeline {
    FilterPipeline::new()
        .add_filter(AlreadyWatchedFilter)
        .add_filter(GenreOverlapFilter)
}

/// Recommend titles for a user who watched `watched_ids`.
///
/// ## Algorithm
/// 1. Empty watched set or empty catalog: nothing to recommend
/// 2. Liked genres = union of genres of watched catalog movies
/// 3. Keep unwatched movies sharing at least one liked genre
/// 4. Collect their titles; equal titles collapse into one entry
pub fn recommend(watched_ids: &HashSet<MovieId>, catalog: &[Movie]) -> HashSet<String> {
    recommend_with(&default_pipeline(), watched_ids, catalog)
}

/// Same as [`recommend`] with a caller-supplied pipeline
pub fn recommend_with(
    pipeline: &FilterPipeline,
    watched_ids: &HashSet<MovieId>,
    catalog: &[Movie],
) -> HashSet<String> {
    if watched_ids.is_empty() || catalog.is_empty() {
        return HashSet::new();
    }

    let context = WatchContext::build(watched_ids, catalog);
    tracing::debug!(
        "Recommending from {} watched ids, {} liked genres",
        watched_ids.len(),
        context.liked_genres.len()
    );

    pipeline
        .apply(catalog.iter().collect(), &context)
        .into_iter()
        .map(|movie| movie.title.clone())
        .collect()
}
