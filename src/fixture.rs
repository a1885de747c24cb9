#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::team::TeamId;

pub type MatchId = u32;

/// Final score of a simulated match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

/// A played match that has not been stored yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fixture {
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub score: Score,
}

/// Stored match, immutable once written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub home_score: u32,
    pub away_score: u32,
    pub week: u32,
}

impl MatchRecord {
    pub fn from_fixture(id: MatchId, week: u32, fixture: &Fixture) -> Self {
        MatchRecord {
            id,
            home_team_id: fixture.home_team_id,
            away_team_id: fixture.away_team_id,
            home_score: fixture.score.home,
            away_score: fixture.score.away,
            week,
        }
    }

    /// True when both records involve the same two teams, in either orientation.
    pub fn same_pairing(&self, team1: TeamId, team2: TeamId) -> bool {
        (self.home_team_id == team1 && self.away_team_id == team2)
            || (self.home_team_id == team2 && self.away_team_id == team1)
    }
}

/// Named result row handed to the presentation layer.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home: String,
    pub home_score: u32,
    pub away_score: u32,
    pub away: String,
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<20} {} - {:<10} {:<20}",
            self.home, self.home_score, self.away_score, self.away
        )
    }
}
