//! Domain-level error type used across the engine.
//!
//! Every variant here is an expected, caller-recoverable failure: the command
//! is rejected, the aggregate is untouched, and the transport relays the
//! reason to the player. Contract violations (an attempted phase transition
//! absent from the transition table) are not represented here; those abort
//! via assertion in `domain::transitions`.

use thiserror::Error;

/// The rule a rejected command ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValidationKind {
    GameAlreadyStarted,
    AlreadyJoined,
    RoomFull,
    NotEnoughPlayers,
    WrongState,
    NotYourTurn,
    UnknownPlayer,
    InvalidBid,
    BidExceedsHand,
    HookViolation,
    CardNotInHand,
    SuitViolation,
    NoActiveTrump,
    MissingTrumpColor,
    RoundNotComplete,
    EmptyDeck,
    ParseCard,
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DomainError {
    /// Input/user validation or business rule violation.
    #[error("validation {kind:?}: {detail}")]
    Validation { kind: ValidationKind, detail: String },
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation {
            kind,
            detail: detail.into(),
        }
    }

    /// The kind behind this error, for callers that dispatch on it.
    pub fn kind(&self) -> ValidationKind {
        match self {
            DomainError::Validation { kind, .. } => *kind,
        }
    }
}
