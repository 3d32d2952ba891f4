//! Puzzle sets parsed from YAML/JSON.
//!
//! A puzzle pairs an inequality text with its reference solution. Sets are
//! validated on load: a stored solution the engine cannot parse would make
//! every answer to that puzzle come back as a format error, so it is
//! rejected here, at authoring time.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::normalize::normalize;
use crate::parse::parse_solution;

/// Errors that can occur when loading a puzzle set.
#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("Failed to read puzzle file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Puzzle set validation failed: {0}")]
    Validation(String),
}

/// Difficulty of a puzzle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// A single puzzle: the inequality shown to the player and the reference
/// solution answers are validated against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    /// Unique identifier (e.g., "easy-01")
    pub id: String,

    /// The inequality to solve (e.g., "2x + 5 > 13")
    pub inequality: String,

    /// The reference solution (e.g., "x > 4" or "(4, ∞)")
    pub solution: String,

    #[serde(default)]
    pub difficulty: Difficulty,

    /// Optional worked steps shown after solving
    #[serde(default)]
    pub steps: Vec<String>,
}

/// A collection of puzzles, keyed by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleSet {
    pub puzzles: Vec<Puzzle>,
}

impl PuzzleSet {
    /// Parse a puzzle set from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, PuzzleError> {
        let set: PuzzleSet = serde_yaml::from_str(yaml)?;
        set.validate()?;
        Ok(set)
    }

    /// Parse a puzzle set from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, PuzzleError> {
        let set: PuzzleSet = serde_json::from_str(json)?;
        set.validate()?;
        Ok(set)
    }

    /// Parse a puzzle set from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, PuzzleError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a puzzle set from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PuzzleError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Look up a puzzle by id.
    pub fn get(&self, id: &str) -> Option<&Puzzle> {
        self.puzzles.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// Validate the set: ids must be non-empty and unique, and every stored
    /// solution must be accepted by one of the engine's grammars.
    fn validate(&self) -> Result<(), PuzzleError> {
        let mut seen = std::collections::HashSet::new();

        for puzzle in &self.puzzles {
            if puzzle.id.is_empty() {
                return Err(PuzzleError::Validation("empty puzzle id".to_string()));
            }

            if !seen.insert(&puzzle.id) {
                return Err(PuzzleError::Validation(format!(
                    "Duplicate puzzle id: {}",
                    puzzle.id
                )));
            }

            let parses = normalize(&puzzle.solution)
                .ok()
                .and_then(|normalized| parse_solution(&normalized))
                .is_some();
            if !parses {
                return Err(PuzzleError::Validation(format!(
                    "Puzzle {}: reference solution {:?} fits neither grammar",
                    puzzle.id, puzzle.solution
                )));
            }
        }

        Ok(())
    }
}
