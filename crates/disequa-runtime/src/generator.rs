//! Hint and puzzle generation through an LLM provider.
//!
//! Both generators degrade gracefully: a provider failure never reaches the
//! caller as an error. Hints fall back to the fixed per-level text, puzzle
//! generation yields `None` so the host can fall back to a static puzzle
//! set.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use disequa_core::{validate, Difficulty};

use crate::hints::{HintError, HintLevel};
use crate::prompts;
use crate::providers::{ChatMessage, CompletionConfig, LlmProvider};

lazy_static! {
    // Models sometimes wrap JSON answers in markdown fences despite being
    // told not to
    static ref CODE_FENCE: Regex = Regex::new(r"```(?:json)?\s*").unwrap();
}

/// Generates progressive tutoring hints for an inequality.
pub struct HintGenerator<P> {
    provider: P,
    config: CompletionConfig,
}

impl<P: LlmProvider> HintGenerator<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            config: CompletionConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CompletionConfig) -> Self {
        self.config = config;
        self
    }

    /// Generate the next hint for `inequality`, given how many hints the
    /// player has already used (0..=2).
    ///
    /// Errors only on contract violations (empty inequality, hints
    /// exhausted); a provider failure yields the deterministic fallback
    /// hint for the level instead.
    pub async fn hint(&self, inequality: &str, hints_used: u8) -> Result<String, HintError> {
        if inequality.trim().is_empty() {
            return Err(HintError::EmptyInequality);
        }
        let level = HintLevel::from_hints_used(hints_used)?;

        let prompt = prompts::hint_prompt(inequality, level);
        match self
            .provider
            .complete(vec![ChatMessage::user(prompt)], &self.config)
            .await
        {
            Ok(response) => {
                let hint = response.content.trim().to_string();
                if hint.is_empty() {
                    warn!(provider = self.provider.name(), "empty hint from provider, using fallback");
                    Ok(level.fallback_hint().to_string())
                } else {
                    Ok(hint)
                }
            }
            Err(err) => {
                warn!(provider = self.provider.name(), error = %err, "hint generation failed, using fallback");
                Ok(level.fallback_hint().to_string())
            }
        }
    }
}

/// A puzzle descriptor produced by the LLM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPuzzle {
    /// The inequality to solve (e.g., "2x + 5 > 13")
    pub inequality: String,

    /// The reference solution (e.g., "x > 4")
    pub solution: String,

    /// Worked steps, possibly empty
    #[serde(default)]
    pub steps: Vec<String>,
}

/// Generates linear-inequality puzzles through an LLM provider.
pub struct PuzzleGenerator<P> {
    provider: P,
    config: CompletionConfig,
}

impl<P: LlmProvider> PuzzleGenerator<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            config: CompletionConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CompletionConfig) -> Self {
        self.config = config;
        self
    }

    /// Generate a puzzle of the given difficulty.
    ///
    /// Returns `None` on any failure (provider error, malformed JSON, or a
    /// solution the validation engine cannot parse); the host should fall
    /// back to a non-LLM puzzle source.
    pub async fn generate(&self, difficulty: Difficulty) -> Option<GeneratedPuzzle> {
        let prompt = prompts::puzzle_prompt(difficulty);
        let response = match self
            .provider
            .complete(vec![ChatMessage::user(prompt)], &self.config)
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!(provider = self.provider.name(), error = %err, "puzzle generation failed");
                return None;
            }
        };

        let cleaned = CODE_FENCE.replace_all(response.content.trim(), "");
        let puzzle: GeneratedPuzzle = match serde_json::from_str(cleaned.trim()) {
            Ok(puzzle) => puzzle,
            Err(err) => {
                warn!(error = %err, "puzzle response was not valid JSON");
                return None;
            }
        };

        // A solution the engine cannot parse would make the puzzle
        // unanswerable; discard it
        if !validate(&puzzle.solution, &puzzle.solution).correct {
            warn!(solution = %puzzle.solution, "generated solution fits neither grammar");
            return None;
        }

        Some(puzzle)
    }
}
