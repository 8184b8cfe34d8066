//! Error taxonomy for move validation.
//!
//! Every variant is a caller-recoverable validation outcome. A failed move
//! never mutates the board; the caller surfaces the message and re-prompts.

/// Reasons a move or resignation can be rejected.
///
/// The first six rule variants correspond one-to-one with the steps of the
/// validator chain; `InvalidCoordinate` is produced during token
/// translation, before the chain runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid coordinate: '{0}'")]
    InvalidCoordinate(String),

    #[error("selected piece contains stones of both colors")]
    MixedColorPiece,

    #[error("selected piece does not belong to the player to move")]
    WrongPlayerTurn,

    #[error("piece cannot travel that far")]
    IllegalDistance,

    #[error("movement direction not supported by piece structure")]
    UnsupportedDirection,

    #[error("path to destination is obstructed")]
    PathObstructed,

    #[error("move would destroy the player's own last ring")]
    SelfEliminationForbidden,

    #[error("game is already over")]
    GameAlreadyOver,
}
