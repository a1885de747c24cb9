use crate::error::StorageError;
use crate::fixture::{Fixture, MatchRecord};
use crate::team::Team;

/// Persistence boundary for a season.
///
/// Implementations own the authoritative team rows and the write-once
/// match log. `commit_week` is the only way results enter storage and must
/// be all-or-nothing.
pub trait LeagueStore {
    /// All teams, in registration order.
    fn teams(&self) -> Result<Vec<Team>, StorageError>;

    /// Every stored match of one week.
    fn matches_for_week(&self, week: u32) -> Result<Vec<MatchRecord>, StorageError>;

    /// The whole match log.
    fn matches(&self) -> Result<Vec<MatchRecord>, StorageError>;

    /// Overwrite one team row.
    /// Overwrite existing team rows as one transaction.
    fn update_teams(&mut self, teams: &[Team]) -> Result<(), StorageError>;

    /// Insert a week's matches and the updated team rows as one transaction.
    fn commit_week(&mut self, week: u32, fixtures: &[Fixture], teams: &[Team]) -> Result<Vec<MatchRecord>, StorageError>;

    /// Drop every match and replace the teams.
    fn reset(&mut self, teams: Vec<Team>) -> Result<(), StorageError>;
}

/// In-process store backing a season.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    teams: Vec<Team>,
    matches: Vec<MatchRecord>,
    next_match_id: u32,
}

impl MemoryStore {
    pub fn new(teams: Vec<Team>) -> Self {
        MemoryStore {
            teams,
            matches: Vec::new(),
            next_match_id: 1,
        }
    }

    /// Rebuild a store from existing rows, continuing the match id sequence.
    pub fn from_parts(teams: Vec<Team>, matches: Vec<MatchRecord>) -> Self {
        let next_match_id = matches.iter().map(|m| m.id).max().map_or(1, |id| id + 1);
        MemoryStore {
            teams,
            matches,
            next_match_id,
        }
    }

    fn team_index(&self, id: u32) -> Result<usize, StorageError> {
        self.teams
            .iter()
            .position(|t| t.id == id)
            .ok_or(StorageError::UnknownTeam(id))
    }
}

impl LeagueStore for MemoryStore {
    fn teams(&self) -> Result<Vec<Team>, StorageError> {
        Ok(self.teams.clone())
    }

    fn matches_for_week(&self, week: u32) -> Result<Vec<MatchRecord>, StorageError> {
        Ok(self.matches.iter().filter(|m| m.week == week).cloned().collect())
    }

    fn matches(&self) -> Result<Vec<MatchRecord>, StorageError> {
        Ok(self.matches.clone())
    }

    fn update_teams(&mut self, teams: &[Team]) -> Result<(), StorageError> {
        let indices = teams
            .iter()
            .map(|t| self.team_index(t.id))
            .collect::<Result<Vec<_>, _>>()?;
        for (idx, team) in indices.into_iter().zip(teams) {
            self.teams[idx] = team.clone();
        }
        Ok(())
    }

    fn commit_week(&mut self, week: u32, fixtures: &[Fixture], teams: &[Team]) -> Result<Vec<MatchRecord>, StorageError> {
        // Validate everything before the first write
        if self.matches.iter().any(|m| m.week == week) {
            return Err(StorageError::DuplicateWeek(week));
        }
        for fixture in fixtures {
            self.team_index(fixture.home_team_id)?;
            self.team_index(fixture.away_team_id)?;
        }
        let indices = teams
            .iter()
            .map(|t| self.team_index(t.id))
            .collect::<Result<Vec<_>, _>>()?;

        let mut records = Vec::with_capacity(fixtures.len());
        for fixture in fixtures {
            let record = MatchRecord::from_fixture(self.next_match_id, week, fixture);
            self.next_match_id += 1;
            self.matches.push(record.clone());
            records.push(record);
        }
        for (idx, team) in indices.into_iter().zip(teams) {
            self.teams[idx] = team.clone();
        }

        Ok(records)
    }

    fn reset(&mut self, teams: Vec<Team>) -> Result<(), StorageError> {
        self.teams = teams;
        self.matches.clear();
        self.next_match_id = 1;
        Ok(())
    }
}
