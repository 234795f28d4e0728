use std::fmt::Display;

/// The pipeline stage that rejected its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Determinization,
    Completion,
    Minimization,
    Equivalence,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Determinization => write!(f, "Determinization"),
            Stage::Completion => write!(f, "Completion"),
            Stage::Minimization => write!(f, "Minimization"),
            Stage::Equivalence => write!(f, "Equivalence"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AutomatonError {
    /// A symbol that is neither a letter of the alphabet nor one of its
    /// markers.
    #[error("symbol {symbol:?} is not part of the alphabet {letters:?} and is not a marker")]
    InvalidSymbol { symbol: char, letters: Vec<char> },

    #[error("state {state} is out of range for an automaton with {state_count} states")]
    StateOutOfRange { state: usize, state_count: usize },

    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),

    /// A pipeline stage was handed an automaton it cannot process.
    #[error("{stage} precondition violated: {reason}")]
    PreconditionViolation { stage: Stage, reason: String },
}

impl AutomatonError {
    pub fn precondition(stage: Stage, reason: impl Into<String>) -> Self {
        AutomatonError::PreconditionViolation {
            stage,
            reason: reason.into(),
        }
    }
}
