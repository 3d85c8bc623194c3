//! Cast resolution registry.
//!
//! This module provides the store that maps a movie's logical cast ids to
//! concrete atlas cells. The mapping is built offline by the asset pipeline
//! (texture packing emits one sheet plus a cast→cell table per movie) and is
//! strictly read-only at playback time, so it can be shared by any number of
//! concurrent playback instances.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cast lookup failure. Resolution is a pure deterministic lookup, so these
/// are reported immediately to the caller; there is nothing to retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The movie name has no entry in the store.
    #[error("unknown movie `{0}`")]
    UnknownMovie(String),
    /// A requested cast id has no cell in the movie's sheet. A frame is never
    /// silently dropped: that would desynchronize the cell sequence from the
    /// frame descriptors.
    #[error("cast {cast} has no cell in movie `{movie}`")]
    UnresolvedCast { movie: String, cast: u32 },
}

/// One movie's packed assets: the atlas sheet key and the cast→cell table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSheet {
    /// Texture atlas key for every cast in this movie.
    pub sheet: String,
    /// Cast id → sub-image id inside the sheet.
    pub cells: FxHashMap<u32, u32>,
}

/// Cells resolved for an ordered cast sequence.
///
/// Invariant: `cells` is parallel to the input sequence, same order and same
/// length, one cell per cast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCells {
    /// Atlas sheet shared by every resolved cell.
    pub sheet: String,
    /// Sub-image ids, parallel to the requested casts.
    pub cells: Vec<u32>,
}

/// Central registry of movie cast tables keyed by movie name.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct CastStore {
    pub movies: FxHashMap<String, MovieSheet>,
}

impl CastStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a movie's sheet and cast table.
    pub fn insert_movie(&mut self, name: impl Into<String>, sheet: MovieSheet) {
        self.movies.insert(name.into(), sheet);
    }

    /// Resolve an ordered cast sequence into the parallel cell sequence.
    ///
    /// Order and length are preserved exactly. Any unmapped cast id fails the
    /// whole resolution.
    pub fn resolve(&self, movie: &str, casts: &[u32]) -> Result<ResolvedCells, ResolveError> {
        let sheet = self
            .movies
            .get(movie)
            .ok_or_else(|| ResolveError::UnknownMovie(movie.to_string()))?;
        let mut cells = Vec::with_capacity(casts.len());
        for &cast in casts {
            let cell = sheet
                .cells
                .get(&cast)
                .copied()
                .ok_or_else(|| ResolveError::UnresolvedCast {
                    movie: movie.to_string(),
                    cast,
                })?;
            cells.push(cell);
        }
        Ok(ResolvedCells {
            sheet: sheet.sheet.clone(),
            cells,
        })
    }

    /// Parse a store from a JSON manifest produced by the asset pipeline.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Loads a cast manifest from a JSON file at the specified path.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let file_content = std::fs::read_to_string(path)?;
        let store = Self::from_json(&file_content)?;
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CastStore {
        let mut store = CastStore::new();
        let mut cells = FxHashMap::default();
        cells.insert(1, 10);
        cells.insert(2, 11);
        cells.insert(3, 12);
        store.insert_movie(
            "intro",
            MovieSheet {
                sheet: "intro_atlas".to_string(),
                cells,
            },
        );
        store
    }

    #[test]
    fn resolve_preserves_order_and_length() {
        let resolved = store().resolve("intro", &[1, 2, 2, 3]).unwrap();
        assert_eq!(resolved.sheet, "intro_atlas");
        assert_eq!(resolved.cells, vec![10, 11, 11, 12]);
    }

    #[test]
    fn resolve_empty_sequence_is_empty() {
        let resolved = store().resolve("intro", &[]).unwrap();
        assert!(resolved.cells.is_empty());
    }

    #[test]
    fn unknown_movie_fails() {
        assert_eq!(
            store().resolve("outro", &[1]),
            Err(ResolveError::UnknownMovie("outro".to_string()))
        );
    }

    #[test]
    fn unresolved_cast_fails_whole_sequence() {
        assert_eq!(
            store().resolve("intro", &[1, 99, 3]),
            Err(ResolveError::UnresolvedCast {
                movie: "intro".to_string(),
                cast: 99,
            })
        );
    }

    #[test]
    fn load_from_file_reads_a_manifest() {
        let path = std::env::temp_dir().join("castplay_manifest_test.json");
        let json = serde_json::to_string(&store()).unwrap();
        std::fs::write(&path, json).unwrap();

        let loaded = CastStore::load_from_file(&path.to_string_lossy()).unwrap();
        let resolved = loaded.resolve("intro", &[1, 3]).unwrap();
        assert_eq!(resolved.sheet, "intro_atlas");
        assert_eq!(resolved.cells, vec![10, 12]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn load_from_file_reports_missing_file() {
        let path = std::env::temp_dir().join("castplay_no_such_manifest.json");
        assert!(CastStore::load_from_file(&path.to_string_lossy()).is_err());
    }

    #[test]
    fn from_json_round_trip() {
        let json = r#"{
            "movies": {
                "intro": {
                    "sheet": "intro_atlas",
                    "cells": { "1": 10, "2": 11 }
                }
            }
        }"#;
        let store = CastStore::from_json(json).unwrap();
        let resolved = store.resolve("intro", &[2, 1]).unwrap();
        assert_eq!(resolved.cells, vec![11, 10]);
    }
}
