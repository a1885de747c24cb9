#[cfg(feature = "python")]
use pyo3::prelude::*;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use crate::config::SeasonConfig;
use crate::constants::{ordinal_suffix, MAX_STRENGTH, MIN_STRENGTH};
use crate::error::{LeagueError, Result, StorageError};
use crate::fixture::{Fixture, MatchRecord, MatchResult};
use crate::match_sim::simulate_score;
use crate::pairing::generate_pairings;
use crate::projection::{predict_standings, Prediction};
use crate::storage::{LeagueStore, MemoryStore};
use crate::table::{sort_standings, update_league_table};
use crate::team::{check_strength, Team, TeamId};

/// Everything the presentation layer needs after a week is played.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, Serialize)]
pub struct WeekReport {
    pub week: u32,
    pub results: Vec<MatchResult>,

    /// Full table after the week, best first
    pub standings: Vec<Team>,

    /// Present from the prediction week onward
    pub predictions: Option<Vec<Prediction>>,
}

impl fmt::Display for WeekReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heading = format!("{}{} Week", self.week, ordinal_suffix(self.week));
        writeln!(f, "{}", heading)?;
        writeln!(f)?;

        writeln!(f, "League Table")?;
        writeln!(
            f,
            "{:<20} {:>4} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4}",
            "Team", "PTS", "P", "W", "D", "L", "GD", "Str"
        )?;
        for team in &self.standings {
            writeln!(
                f,
                "{:<20} {:>4} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4}",
                team.name, team.points, team.played, team.won, team.drawn, team.lost, team.goal_difference, team.strength
            )?;
        }
        writeln!(f)?;

        writeln!(f, "{} Match Results", heading)?;
        for result in &self.results {
            writeln!(f, "{}", result)?;
        }

        if let Some(predictions) = &self.predictions {
            writeln!(f)?;
            writeln!(f, "{} Predictions for Championship", heading)?;
            for (idx, prediction) in predictions.iter().enumerate() {
                writeln!(f, "{}. {:<20} {:.2}", idx + 1, prediction.name, prediction.probability)?;
            }
        }
        Ok(())
    }
}

/// One league season: the store, the settings and the random source.
///
/// Weeks are played strictly in order. Each week is simulated against a
/// snapshot of the table and written back through a single
/// `commit_week`, so a storage failure never leaves half a week behind.
pub struct Season<S: LeagueStore = MemoryStore> {
    config: SeasonConfig,
    store: S,
    rng: ChaCha8Rng,
}

impl Season<MemoryStore> {
    /// Start a season with randomly drawn strengths.
    pub fn new(config: SeasonConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = make_rng(config.seed);
        let teams = seed_teams(&config.team_names, &mut rng)?;
        Ok(Season {
            config,
            store: MemoryStore::new(teams),
            rng,
        })
    }

    /// Start a season with explicit strengths, one per configured team name.
    pub fn with_strengths(config: SeasonConfig, strengths: &[u8]) -> Result<Self> {
        config.validate()?;
        if strengths.len() != config.team_names.len() {
            return Err(LeagueError::Config(format!(
                "{} strengths for {} teams",
                strengths.len(),
                config.team_names.len()
            )));
        }
        let teams = config
            .team_names
            .iter()
            .zip(strengths)
            .enumerate()
            .map(|(i, (name, &strength))| Team::new(i as TeamId + 1, name.clone(), strength))
            .collect::<Result<Vec<_>>>()?;

        let rng = make_rng(config.seed);
        Ok(Season {
            config,
            store: MemoryStore::new(teams),
            rng,
        })
    }
}

impl<S: LeagueStore> Season<S> {
    /// Run a season over an existing store that already holds the teams.
    ///
    /// `restart` reseeds from the config's team names, not the store's.
    pub fn with_store(config: SeasonConfig, store: S) -> Result<Self> {
        config.validate()?;
        let teams = store.teams()?;
        if teams.len() < 2 {
            return Err(LeagueError::NotEnoughTeams(teams.len()));
        }
        let mut seen = HashSet::with_capacity(teams.len());
        if let Some(team) = teams.iter().find(|t| !seen.insert(t.id)) {
            return Err(LeagueError::DuplicateTeamId(team.id));
        }
        let rng = make_rng(config.seed);
        Ok(Season { config, store, rng })
    }

    pub fn config(&self) -> &SeasonConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The next week waiting to be played (may be past the last week).
    pub fn next_week(&self) -> Result<u32> {
        let last = self.store.matches()?.iter().map(|m| m.week).max().unwrap_or(0);
        Ok(last + 1)
    }

    pub fn is_finished(&self) -> Result<bool> {
        Ok(self.next_week()? > self.config.weeks)
    }

    /// Play every fixture of `week` and record the results.
    pub fn play_week(&mut self, week: u32) -> Result<WeekReport> {
        if week == 0 || week > self.config.weeks {
            return Err(LeagueError::InvalidWeek {
                week,
                max: self.config.weeks,
            });
        }
        let next = self.next_week()?;
        if week < next {
            return Err(LeagueError::WeekAlreadyPlayed(week));
        }
        if week > next {
            return Err(LeagueError::WeekOutOfOrder { requested: week, next });
        }

        let mut teams = self.store.teams()?;
        let previous = if week > 1 {
            self.store.matches_for_week(week - 1)?
        } else {
            Vec::new()
        };

        let pairings = generate_pairings(&teams, &previous, self.config.max_pairing_attempts, &mut self.rng);
        debug!("week {} paired after {} shuffle(s)", week, pairings.attempts);

        let mut fixtures = Vec::with_capacity(pairings.pairs.len());
        for &(home_id, away_id) in &pairings.pairs {
            let home = position_of(&teams, home_id)?;
            let away = position_of(&teams, away_id)?;

            let score = simulate_score(teams[home].strength, teams[away].strength, &mut self.rng);
            let (home_team, away_team) =
                pair_mut(&mut teams, home, away).ok_or(LeagueError::DuplicateTeamId(home_id))?;
            update_league_table(home_team, away_team, score);
            debug!(
                "week {}: {} {} - {} {}",
                week, teams[home].name, score.home, score.away, teams[away].name
            );

            fixtures.push(Fixture {
                home_team_id: home_id,
                away_team_id: away_id,
                score,
            });
        }

        let records = self.store.commit_week(week, &fixtures, &teams)?;
        info!("week {} complete: {} match(es) recorded", week, records.len());

        let results = name_results(&teams, &records)?;
        sort_standings(&mut teams);
        let predictions = if week >= self.config.prediction_from_week {
            Some(predict_standings(&teams))
        } else {
            None
        };

        Ok(WeekReport {
            week,
            results,
            standings: teams,
            predictions,
        })
    }

    pub fn play_next_week(&mut self) -> Result<WeekReport> {
        let next = self.next_week()?;
        if next > self.config.weeks {
            return Err(LeagueError::SeasonFinished(self.config.weeks));
        }
        self.play_week(next)
    }

    /// Play from the next unplayed week through the last one.
    pub fn play_remaining(&mut self) -> Result<Vec<WeekReport>> {
        let mut reports = Vec::new();
        while !self.is_finished()? {
            reports.push(self.play_next_week()?);
        }
        Ok(reports)
    }

    /// Clear every match and draw fresh strengths for the configured teams.
    pub fn restart(&mut self) -> Result<()> {
        let teams = seed_teams(&self.config.team_names, &mut self.rng)?;
        self.store.reset(teams)?;
        info!("season restarted with {} teams", self.config.team_names.len());
        Ok(())
    }

    /// Current table, best first.
    pub fn standings(&self) -> Result<Vec<Team>> {
        let mut teams = self.store.teams()?;
        sort_standings(&mut teams);
        Ok(teams)
    }

    pub fn predictions(&self) -> Result<Vec<Prediction>> {
        Ok(predict_standings(&self.store.teams()?))
    }

    pub fn results_for_week(&self, week: u32) -> Result<Vec<MatchResult>> {
        let teams = self.store.teams()?;
        name_results(&teams, &self.store.matches_for_week(week)?)
    }

    pub fn team_strengths(&self) -> Result<BTreeMap<String, u8>> {
        Ok(self
            .store
            .teams()?
            .into_iter()
            .map(|t| (t.name, t.strength))
            .collect())
    }

    /// Change strengths by team name. Every entry is checked before any is written.
    pub fn set_strengths(&mut self, strengths: &HashMap<String, i64>) -> Result<()> {
        let mut teams = self.store.teams()?;
        let mut changed = Vec::with_capacity(strengths.len());

        for (name, &strength) in strengths {
            let strength = check_strength(name, strength)?;
            let team = teams
                .iter_mut()
                .find(|t| &t.name == name)
                .ok_or_else(|| LeagueError::UnknownTeam(name.clone()))?;
            team.strength = strength;
            changed.push(team.id);
        }

        teams.retain(|t| changed.contains(&t.id));
        self.store.update_teams(&teams)?;
        Ok(())
    }

    /// Detached in-memory copy of the current state, driven by its own seed.
    pub fn snapshot(&self, seed: u64) -> Result<Season<MemoryStore>> {
        let store = MemoryStore::from_parts(self.store.teams()?, self.store.matches()?);
        Ok(Season {
            config: self.config.clone().with_seed(seed),
            store,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }
}

fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn seed_teams<R: Rng + ?Sized>(names: &[String], rng: &mut R) -> Result<Vec<Team>> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let strength = rng.gen_range(MIN_STRENGTH..=MAX_STRENGTH);
            Team::new(i as TeamId + 1, name.clone(), strength)
        })
        .collect()
}

fn position_of(teams: &[Team], id: TeamId) -> Result<usize> {
    teams
        .iter()
        .position(|t| t.id == id)
        .ok_or(LeagueError::Storage(StorageError::UnknownTeam(id)))
}

/// Two distinct rows of the table, mutably. `None` when both indices are the same row.
fn pair_mut(teams: &mut [Team], a: usize, b: usize) -> Option<(&mut Team, &mut Team)> {
    match a.cmp(&b) {
        Ordering::Less => {
            let (left, right) = teams.split_at_mut(b);
            Some((&mut left[a], &mut right[0]))
        }
        Ordering::Greater => {
            let (left, right) = teams.split_at_mut(a);
            Some((&mut right[0], &mut left[b]))
        }
        Ordering::Equal => None,
    }
}

fn name_results(teams: &[Team], records: &[MatchRecord]) -> Result<Vec<MatchResult>> {
    records
        .iter()
        .map(|m| {
            Ok(MatchResult {
                home: teams[position_of(teams, m.home_team_id)?].name.clone(),
                home_score: m.home_score,
                away_score: m.away_score,
                away: teams[position_of(teams, m.away_team_id)?].name.clone(),
            })
        })
        .collect()
}
