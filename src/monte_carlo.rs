#[cfg(feature = "python")]
use pyo3::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::{LeagueError, Result};
use crate::season::Season;
use crate::storage::LeagueStore;
use crate::team::Team;

/// Simulated chance of finishing top of the table.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TitleOdds {
    pub name: String,

    /// Share of simulated seasons won (0.0-1.0)
    pub probability: f64,

    pub std_error: f64,

    /// 95% normal-approximation interval, clamped to [0, 1]
    pub ci_low: f64,
    pub ci_high: f64,
}

/// Estimate title odds by playing out the rest of the season many times.
///
/// Each run starts from a detached copy of the current table and match log
/// with its own seed drawn from `seed`, so the caller's season is never
/// touched and equal seeds give equal odds.
///
/// # Returns
/// One entry per team, sorted by probability, highest first
pub fn title_odds<S: LeagueStore + Sync>(
    season: &Season<S>,
    n_simulations: usize,
    seed: Option<u64>,
) -> Result<Vec<TitleOdds>> {
    if n_simulations == 0 {
        return Err(LeagueError::NoSimulations);
    }

    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };
    let sim_seeds: Vec<u64> = (0..n_simulations).map(|_| rng.gen::<u64>()).collect();

    let champions: Vec<String> = sim_seeds
        .par_iter()
        .map(|&sim_seed| {
            let mut sim = season.snapshot(sim_seed)?;
            sim.play_remaining()?;
            champion(&sim.store().teams()?)
        })
        .collect::<Result<Vec<_>>>()?;

    let mut wins: HashMap<String, usize> = HashMap::new();
    for name in champions {
        *wins.entry(name).or_insert(0) += 1;
    }

    let normal = Normal::new(0.0, 1.0).map_err(|e| LeagueError::Config(e.to_string()))?;
    let z = normal.inverse_cdf(0.975);
    let n = n_simulations as f64;

    let mut odds: Vec<TitleOdds> = season
        .store()
        .teams()?
        .into_iter()
        .map(|team| {
            let p = *wins.get(&team.name).unwrap_or(&0) as f64 / n;
            let std_error = (p * (1.0 - p) / n).sqrt();
            TitleOdds {
                name: team.name,
                probability: p,
                std_error,
                ci_low: (p - z * std_error).max(0.0),
                ci_high: (p + z * std_error).min(1.0),
            }
        })
        .collect();

    odds.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    Ok(odds)
}

/// Name of the team on top: points, goal difference, goals scored, then name.
fn champion(teams: &[Team]) -> Result<String> {
    teams
        .iter()
        .min_by(|a, b| title_order(a, b))
        .map(|t| t.name.clone())
        .ok_or(LeagueError::NotEnoughTeams(0))
}

fn title_order(a: &Team, b: &Team) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.name.cmp(&b.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeasonConfig;

    fn seeded(seed: u64) -> Season {
        Season::with_strengths(SeasonConfig::default().with_seed(seed), &[3, 2, 4, 1]).unwrap()
    }

    #[test]
    fn test_odds_sum_to_one() {
        let season = seeded(1);
        let odds = title_odds(&season, 400, Some(42)).unwrap();

        assert_eq!(odds.len(), 4);
        let total: f64 = odds.iter().map(|o| o.probability).sum();
        assert!((total - 1.0).abs() < 1e-9);

        for o in &odds {
            assert!(o.ci_low <= o.probability && o.probability <= o.ci_high);
            assert!(o.ci_low >= 0.0 && o.ci_high <= 1.0);
        }
        for pair in odds.windows(2) {
            assert!(pair[0].probability >= pair[1].probability);
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let season = seeded(2);
        let a = title_odds(&season, 200, Some(7)).unwrap();
        let b = title_odds(&season, 200, Some(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_strongest_team_favored() {
        let season = seeded(3);
        let odds = title_odds(&season, 2000, Some(11)).unwrap();
        let city = odds.iter().find(|o| o.name == "Manchester City").unwrap();
        let liverpool = odds.iter().find(|o| o.name == "Liverpool").unwrap();
        assert!(city.probability > liverpool.probability);
    }

    #[test]
    fn test_finished_season_is_certain() {
        let mut season = seeded(4);
        season.play_remaining().unwrap();
        let leader = season.standings().unwrap();

        let odds = title_odds(&season, 50, Some(1)).unwrap();
        assert_eq!(odds[0].probability, 1.0);
        assert_eq!(odds[0].std_error, 0.0);
        assert_eq!(odds[0].name, champion(&leader).unwrap());
        assert!(season.is_finished().unwrap());
    }

    #[test]
    fn test_leaves_season_untouched() {
        let mut season = seeded(5);
        season.play_week(1).unwrap();
        title_odds(&season, 100, Some(9)).unwrap();
        assert_eq!(season.next_week().unwrap(), 2);
    }

    #[test]
    fn test_zero_simulations() {
        let season = seeded(6);
        assert_eq!(title_odds(&season, 0, None).unwrap_err(), LeagueError::NoSimulations);
    }

    #[test]
    fn test_title_order_tiebreaks() {
        let mut a = Team::new(1, "A", 1).unwrap();
        let mut b = Team::new(2, "B", 1).unwrap();
        a.points = 7;
        b.points = 7;
        a.goal_difference = 2;
        b.goal_difference = 2;
        a.goals_for = 5;
        b.goals_for = 6;
        assert_eq!(champion(&[a.clone(), b.clone()]).unwrap(), "B");

        b.goals_for = 5;
        assert_eq!(champion(&[b, a]).unwrap(), "A");
    }
}
