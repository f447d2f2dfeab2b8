//! Integration tests for the pipeline.
//!
//! These tests run `recommend` over a small catalog the way the
//! orchestrator does, one user at a time.

use data_loader::{Movie, MovieId};
use pipeline::recommend;
use std::collections::HashSet;

fn create_catalog() -> Vec<Movie> {
    vec![
        Movie::new("ActionOne", "AO123", ["Action"]),
        Movie::new("ActionTwo", "AT321", ["Action"]),
        Movie::new("DramaOne", "DO456", ["Drama"]),
    ]
}

fn ids(values: &[&str]) -> HashSet<MovieId> {
    values.iter().map(|v| v.to_string()).collect()
}

fn titles(values: &[&str]) -> HashSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_single_genre_history() {
    let catalog = create_catalog();
    let result = recommend(&ids(&["AO123"]), &catalog);
    assert_eq!(result, titles(&["ActionTwo"]));
}

#[test]
fn test_two_genre_history() {
    let mut catalog = create_catalog();
    catalog.push(Movie::new("DramaTwo", "DT654", ["Drama"]));

    let result = recommend(&ids(&["AO123", "DO456"]), &catalog);
    assert_eq!(result, titles(&["ActionTwo", "DramaTwo"]));
}

#[test]
fn test_watched_everything() {
    let catalog = create_catalog();
    let result = recommend(&ids(&["AO123", "AT321", "DO456"]), &catalog);
    assert!(result.is_empty());
}

#[test]
fn test_watched_movies_never_recommended() {
    let catalog = vec![
        Movie::new("Alpha", "A001", ["Action", "Comedy"]),
        Movie::new("Beta", "B002", ["Comedy"]),
        Movie::new("Gamma", "G003", ["Action"]),
        Movie::new("Delta", "D004", ["Horror"]),
        Movie::new("Epsilon", "E005", Vec::<String>::new()),
    ];
    let watched = ids(&["A001", "B002"]);
    let result = recommend(&watched, &catalog);

    for movie in &catalog {
        if watched.contains(&movie.id) {
            assert!(!result.contains(&movie.title), "{} was watched", movie.title);
        }
    }
    assert_eq!(result, titles(&["Gamma"]));
}

#[test]
fn test_recommend_is_repeatable() {
    let catalog = create_catalog();
    let watched = ids(&["DO456", "AO123"]);

    let first = recommend(&watched, &catalog);
    let second = recommend(&watched, &catalog);
    assert_eq!(first, second);
}

#[test]
fn test_catalog_order_does_not_matter() {
    let mut catalog = create_catalog();
    catalog.push(Movie::new("Comedy Drama", "CD777", ["Comedy", "Drama"]));
    let watched = ids(&["DO456"]);

    let forward = recommend(&watched, &catalog);
    catalog.reverse();
    let backward = recommend(&watched, &catalog);

    assert_eq!(forward, backward);
    assert_eq!(forward, titles(&["Comedy Drama"]));
}
