//! # disequa-runtime
//!
//! Optional LLM-backed hint and puzzle generation for disequa.
//!
//! ## Important
//!
//! This crate is OPTIONAL. Answer validation in `disequa-core` is fully
//! deterministic and never makes LLM calls; nothing in this crate can
//! influence parsing or comparison there.
//!
//! Use this crate when the host wants:
//! - Progressive tutoring hints for an inequality (three levels, Italian)
//! - LLM-authored puzzles as an alternative to a static puzzle set
//!
//! Every LLM failure degrades gracefully: hints fall back to a fixed
//! per-level text, puzzle generation yields `None` and the host falls back
//! to a non-LLM puzzle source.
//!
//! ## Example
//!
//! ```rust,ignore
//! use disequa_runtime::{AnthropicProvider, HintGenerator};
//!
//! let provider = AnthropicProvider::from_env()?;
//! let hints = HintGenerator::new(provider);
//!
//! // First hint for a puzzle the player has not asked about yet
//! let hint = hints.hint("2x + 5 > 13", 0).await?;
//! ```

pub mod generator;
pub mod hints;
pub mod prompts;
pub mod providers;

pub use generator::{GeneratedPuzzle, HintGenerator, PuzzleGenerator};
pub use hints::{HintError, HintLevel, MAX_HINTS};
pub use providers::{
    ChatMessage, CompletionConfig, CompletionResponse, LlmProvider, ProviderError, TokenUsage,
};

#[cfg(feature = "anthropic")]
pub use providers::AnthropicProvider;
