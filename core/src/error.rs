use thiserror::Error;

/// Programmer/usage errors. Expected player-facing branches of play
/// (a declined grant, a rejected fire order) are NOT errors — they are
/// ordinary results carrying a success flag. See `command`.
#[derive(Error, Debug, PartialEq)]
pub enum SimError {
    #[error("game is over: {reason}")]
    GameOver { reason: String },

    #[error("unknown department '{0}'")]
    UnknownDepartment(String),

    #[error("invalid decision: {0}")]
    InvalidDecision(String),

    #[error("no active competitors in the market")]
    NoActiveCompetitors,
}

pub type SimResult<T> = Result<T, SimError>;
