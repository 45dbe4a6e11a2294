// src/error.rs
use std::io;

/// Everything that can stop a game from being tabulated.
///
/// The first four variants are structural: the log did not have the shape
/// the scanner relies on, and the game is abandoned as a whole.
#[derive(Debug, thiserror::Error)]
pub enum TallyError {
    #[error("field `{field}` not found")]
    KeyNotFound { field: String },

    #[error("placeholder `{token}` has no value for message `{message}`")]
    UnresolvedPlaceholder { token: String, message: String },

    #[error("malformed event `{event}`: {reason}")]
    MalformedEvent { event: String, reason: &'static str },

    #[error("unknown building in `{event}`")]
    UnknownBuilding { event: String },

    #[error("unknown role `{0}`")]
    UnknownRole(String),

    #[error("turn {turn}: {source}")]
    AtTurn {
        turn: usize,
        #[source]
        source: Box<TallyError>,
    },

    #[error("no log for game `{0}`")]
    LogNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("json export failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl TallyError {
    pub fn key_not_found(field: impl Into<String>) -> Self {
        Self::KeyNotFound { field: field.into() }
    }

    pub fn malformed(event: impl Into<String>, reason: &'static str) -> Self {
        Self::MalformedEvent { event: event.into(), reason }
    }

    /// Attach the turn index a structural error surfaced at.
    pub fn at_turn(self, turn: usize) -> Self {
        match self {
            already @ Self::AtTurn { .. } => already,
            other => Self::AtTurn { turn, source: Box::new(other) },
        }
    }

    /// The innermost error, skipping turn context.
    pub fn root(&self) -> &TallyError {
        match self {
            Self::AtTurn { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T, E = TallyError> = std::result::Result<T, E>;
