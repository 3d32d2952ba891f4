//! Hint levels and deterministic fallback hints.
//!
//! A puzzle allows three progressive hints. The level is derived from how
//! many hints the player has already used; asking for a fourth is a host
//! contract violation, not something to silently clamp.

use thiserror::Error;

/// Maximum number of hints per puzzle.
pub const MAX_HINTS: u8 = 3;

/// Errors from hint generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HintError {
    #[error("inequality text is empty")]
    EmptyInequality,

    #[error("hints_used must be between 0 and 2, got {0}")]
    HintsExhausted(u8),
}

/// Progressive hint level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintLevel {
    /// General approach, no concrete operation
    General,
    /// First concrete step with a short explanation
    FirstStep,
    /// Full step-by-step walkthrough
    FullWalkthrough,
}

impl HintLevel {
    /// Derive the next hint level from the number of hints already used.
    pub fn from_hints_used(hints_used: u8) -> Result<Self, HintError> {
        match hints_used {
            0 => Ok(Self::General),
            1 => Ok(Self::FirstStep),
            2 => Ok(Self::FullWalkthrough),
            n => Err(HintError::HintsExhausted(n)),
        }
    }

    /// 1-based level number as shown to the player.
    pub fn number(&self) -> u8 {
        match self {
            Self::General => 1,
            Self::FirstStep => 2,
            Self::FullWalkthrough => 3,
        }
    }

    /// Fixed hint text used when the LLM provider is unavailable.
    ///
    /// Immutable per-level mapping; the texts are generic enough to apply
    /// to any one-variable linear inequality.
    pub fn fallback_hint(&self) -> &'static str {
        match self {
            Self::General => {
                "Inizia isolando il termine con la variabile x. \
                 Sposta i numeri dall'altra parte dell'operatore."
            }
            Self::FirstStep => {
                "Ricorda: quando dividi o moltiplichi per un numero negativo, \
                 devi invertire il segno della disequazione."
            }
            Self::FullWalkthrough => {
                "Risolvi passo dopo passo: prima sottrai o aggiungi i termini \
                 costanti, poi dividi per il coefficiente di x."
            }
        }
    }
}
