#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_STRENGTH, MIN_STRENGTH, POINTS_FOR_DRAW, POINTS_FOR_WIN};
use crate::error::{LeagueError, Result};

pub type TeamId = u32;

/// League participant with its season statistics and strength rating.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub points: u32,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,

    /// Relative quality, 1 (weakest) to 4 (strongest)
    pub strength: u8,
}

impl Team {
    /// Create a team with zeroed statistics.
    pub fn new(id: TeamId, name: impl Into<String>, strength: u8) -> Result<Self> {
        let name = name.into();
        check_strength(&name, strength as i64)?;
        Ok(Team {
            id,
            name,
            points: 0,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            strength,
        })
    }

    /// Zero every statistic, keeping identity and strength.
    pub fn reset_stats(&mut self) {
        self.points = 0;
        self.played = 0;
        self.won = 0;
        self.drawn = 0;
        self.lost = 0;
        self.goals_for = 0;
        self.goals_against = 0;
        self.goal_difference = 0;
    }

    /// Whether the table identities hold for this team.
    pub fn is_consistent(&self) -> bool {
        self.played == self.won + self.drawn + self.lost
            && self.goal_difference == self.goals_for as i32 - self.goals_against as i32
            && self.points == POINTS_FOR_WIN * self.won + POINTS_FOR_DRAW * self.drawn
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl Team {
    fn __str__(&self) -> String {
        format!(
            "{}: {} pts | {}-{}-{} | GD {} | str {}",
            self.name, self.points, self.won, self.drawn, self.lost, self.goal_difference, self.strength
        )
    }

    fn __repr__(&self) -> String {
        format!("Team({}, {:?}, strength={})", self.id, self.name, self.strength)
    }
}

/// Reject strengths outside 1..=4.
pub fn check_strength(team: &str, strength: i64) -> Result<u8> {
    if strength < MIN_STRENGTH as i64 || strength > MAX_STRENGTH as i64 {
        return Err(LeagueError::InvalidStrength {
            team: team.to_string(),
            strength,
        });
    }
    Ok(strength as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_team_is_zeroed() {
        let team = Team::new(1, "Chelsea", 3).unwrap();
        assert_eq!(team.points, 0);
        assert_eq!(team.played, 0);
        assert_eq!(team.goal_difference, 0);
        assert_eq!(team.strength, 3);
        assert!(team.is_consistent());
    }

    #[test]
    fn test_strength_bounds() {
        assert!(Team::new(1, "A", 0).is_err());
        assert!(Team::new(1, "A", 5).is_err());
        assert!(Team::new(1, "A", 1).is_ok());
        assert!(Team::new(1, "A", 4).is_ok());

        let err = check_strength("Arsenal", -2).unwrap_err();
        assert_eq!(
            err,
            LeagueError::InvalidStrength {
                team: "Arsenal".to_string(),
                strength: -2
            }
        );
    }

    #[test]
    fn test_reset_stats_keeps_strength() {
        let mut team = Team::new(7, "Liverpool", 2).unwrap();
        team.points = 9;
        team.played = 3;
        team.won = 3;
        team.goals_for = 6;
        team.goal_difference = 6;
        team.reset_stats();

        assert_eq!(team, Team::new(7, "Liverpool", 2).unwrap());
    }
}
