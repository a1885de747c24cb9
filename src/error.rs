use thiserror::Error;

use crate::team::TeamId;

/// Failures reported by a [`LeagueStore`](crate::storage::LeagueStore).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("no team with id {0} in storage")]
    UnknownTeam(TeamId),

    #[error("week {0} is already recorded")]
    DuplicateWeek(u32),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeagueError {
    #[error("invalid week {week}: expected 1..={max}")]
    InvalidWeek { week: u32, max: u32 },

    #[error("week {0} has already been played")]
    WeekAlreadyPlayed(u32),

    #[error("week {requested} cannot be played before week {next}")]
    WeekOutOfOrder { requested: u32, next: u32 },

    #[error("invalid strength {strength} for {team}: expected 1..=4")]
    InvalidStrength { team: String, strength: i64 },

    #[error("unknown team: {0}")]
    UnknownTeam(String),

    #[error("team id {0} appears more than once")]
    DuplicateTeamId(TeamId),

    #[error("a season needs at least two teams, got {0}")]
    NotEnoughTeams(usize),

    #[error("season is finished after week {0}")]
    SeasonFinished(u32),

    #[error("title odds need at least one simulation")]
    NoSimulations,

    #[error("invalid config: {0}")]
    Config(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl LeagueError {
    /// True when the request was rejected before any state was touched.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, LeagueError::Storage(_))
    }
}

pub type Result<T> = std::result::Result<T, LeagueError>;
