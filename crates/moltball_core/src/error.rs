use thiserror::Error;

/// Contract violations outside the documented input space.
///
/// Incomplete-but-valid inputs (unknown formation code, short roster,
/// missing goalkeeper) never error; the engine substitutes documented
/// fallbacks instead. These variants cover the cases that would otherwise
/// mask an integration bug upstream.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("team '{team}' has an empty roster")]
    EmptyRoster { team: String },

    #[error("{field} must be between 1 and 10, found {value}")]
    IntensityOutOfRange { field: &'static str, value: u8 },

    #[error("duplicate team name: {0}")]
    DuplicateTeam(String),

    #[error("a league needs at least 2 teams, found {0}")]
    NotEnoughTeams(usize),
}

pub type Result<T> = std::result::Result<T, EngineError>;
