use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use std::collections::{BTreeMap, HashMap};

use crate::config::SeasonConfig;
use crate::error::LeagueError;
use crate::fixture::MatchResult;
use crate::monte_carlo::{title_odds, TitleOdds};
use crate::projection::Prediction;
use crate::season::{Season, WeekReport};
use crate::team::Team;

impl From<LeagueError> for PyErr {
    fn from(err: LeagueError) -> PyErr {
        if err.is_invalid_input() {
            PyValueError::new_err(err.to_string())
        } else {
            PyRuntimeError::new_err(err.to_string())
        }
    }
}

/// Python handle on an in-memory season.
#[pyclass(name = "Season")]
pub struct PySeason {
    inner: Season,
}

#[pymethods]
impl PySeason {
    /// Create a season.
    ///
    /// Strengths are drawn at random unless `strengths` gives one per team.
    #[new]
    #[pyo3(signature = (team_names = None, weeks = None, seed = None, strengths = None))]
    pub fn new(
        team_names: Option<Vec<String>>,
        weeks: Option<u32>,
        seed: Option<u64>,
        strengths: Option<Vec<u8>>,
    ) -> PyResult<Self> {
        let mut config = SeasonConfig::default();
        if let Some(names) = team_names {
            config.team_names = names;
        }
        if let Some(weeks) = weeks {
            config.weeks = weeks;
        }
        config.seed = seed;

        let inner = match strengths {
            Some(strengths) => Season::with_strengths(config, &strengths)?,
            None => Season::new(config)?,
        };
        Ok(PySeason { inner })
    }

    #[getter]
    pub fn next_week(&self) -> PyResult<u32> {
        Ok(self.inner.next_week()?)
    }

    #[getter]
    pub fn is_finished(&self) -> PyResult<bool> {
        Ok(self.inner.is_finished()?)
    }

    pub fn play_week(&mut self, week: u32) -> PyResult<WeekReport> {
        Ok(self.inner.play_week(week)?)
    }

    pub fn play_remaining(&mut self) -> PyResult<Vec<WeekReport>> {
        Ok(self.inner.play_remaining()?)
    }

    pub fn standings(&self) -> PyResult<Vec<Team>> {
        Ok(self.inner.standings()?)
    }

    pub fn predictions(&self) -> PyResult<Vec<Prediction>> {
        Ok(self.inner.predictions()?)
    }

    pub fn results_for_week(&self, week: u32) -> PyResult<Vec<MatchResult>> {
        Ok(self.inner.results_for_week(week)?)
    }

    pub fn team_strengths(&self) -> PyResult<BTreeMap<String, u8>> {
        Ok(self.inner.team_strengths()?)
    }

    pub fn set_strengths(&mut self, strengths: HashMap<String, i64>) -> PyResult<()> {
        Ok(self.inner.set_strengths(&strengths)?)
    }

    pub fn restart(&mut self) -> PyResult<()> {
        Ok(self.inner.restart()?)
    }

    /// Monte Carlo title odds for the rest of the season.
    #[pyo3(signature = (n_simulations = 1000, seed = None))]
    pub fn title_odds(&self, py: Python<'_>, n_simulations: usize, seed: Option<u64>) -> PyResult<Vec<TitleOdds>> {
        let inner = &self.inner;
        Ok(py.allow_threads(|| title_odds(inner, n_simulations, seed))?)
    }

    fn __repr__(&self) -> String {
        format!(
            "Season({} teams, {} weeks)",
            self.inner.config().team_names.len(),
            self.inner.config().weeks
        )
    }
}

#[pymethods]
impl WeekReport {
    fn __str__(&self) -> String {
        self.to_string()
    }
}
