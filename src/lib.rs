//! League Core - round-robin football league simulation.
//!
//! Pairs four teams week by week, simulates strength-biased scores, keeps
//! the league table and projects championship probabilities. Optional
//! Python bindings via PyO3 behind the `python` feature.

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod config;
pub mod constants;
pub mod error;
pub mod fixture;
pub mod match_sim;
pub mod monte_carlo;
pub mod pairing;
pub mod projection;
pub mod season;
pub mod storage;
pub mod table;
pub mod team;

#[cfg(feature = "python")]
mod python;

pub use config::SeasonConfig;
pub use constants::{
    ordinal_suffix, MAX_PAIRING_ATTEMPTS, MAX_STRENGTH, MIN_STRENGTH, POINTS_FOR_DRAW, POINTS_FOR_WIN,
    PREDICTION_FROM_WEEK, SEASON_WEEKS,
};
pub use error::{LeagueError, Result, StorageError};
pub use fixture::{Fixture, MatchRecord, MatchResult, Score};
pub use match_sim::simulate_score;
pub use monte_carlo::{title_odds, TitleOdds};
pub use pairing::{generate_pairings, Pairings};
pub use projection::{predict_standings, Prediction};
pub use season::{Season, WeekReport};
pub use storage::{LeagueStore, MemoryStore};
pub use table::{apply_result, sort_standings, update_league_table};
pub use team::{Team, TeamId};

/// Simulate one score from two strengths.
///
/// Python-friendly wrapper; seeds a fresh generator per call.
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "simulate_score", signature = (home_strength, away_strength, seed = None))]
fn py_simulate_score(home_strength: i64, away_strength: i64, seed: Option<u64>) -> PyResult<(u32, u32)> {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    let home = team::check_strength("home", home_strength)?;
    let away = team::check_strength("away", away_strength)?;
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };
    let score = simulate_score(home, away, &mut rng);
    Ok((score.home, score.away))
}

/// Championship probabilities for a list of teams.
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "predict_standings")]
fn py_predict_standings(teams: Vec<Team>) -> Vec<Prediction> {
    predict_standings(&teams)
}

/// Python module definition
#[cfg(feature = "python")]
#[pymodule]
fn league_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<python::PySeason>()?;
    m.add_class::<Team>()?;
    m.add_class::<MatchResult>()?;
    m.add_class::<Prediction>()?;
    m.add_class::<WeekReport>()?;
    m.add_class::<TitleOdds>()?;

    // Functions
    m.add_function(wrap_pyfunction!(py_simulate_score, m)?)?;
    m.add_function(wrap_pyfunction!(py_predict_standings, m)?)?;

    // Constants
    m.add("POINTS_FOR_WIN", POINTS_FOR_WIN)?;
    m.add("POINTS_FOR_DRAW", POINTS_FOR_DRAW)?;
    m.add("SEASON_WEEKS", SEASON_WEEKS)?;
    m.add("PREDICTION_FROM_WEEK", PREDICTION_FROM_WEEK)?;
    m.add("DEFAULT_TEAMS", constants::DEFAULT_TEAMS.to_vec())?;

    Ok(())
}
