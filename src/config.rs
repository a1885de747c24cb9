use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::constants::{DEFAULT_TEAMS, MAX_PAIRING_ATTEMPTS, PREDICTION_FROM_WEEK, SEASON_WEEKS};
use crate::error::{LeagueError, Result};

/// Season settings, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonConfig {
    pub team_names: Vec<String>,
    pub weeks: u32,
    pub prediction_from_week: u32,
    pub max_pairing_attempts: u32,

    /// Fixed RNG seed; entropy when absent
    pub seed: Option<u64>,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        SeasonConfig {
            team_names: DEFAULT_TEAMS.iter().map(|s| s.to_string()).collect(),
            weeks: SEASON_WEEKS,
            prediction_from_week: PREDICTION_FROM_WEEK,
            max_pairing_attempts: MAX_PAIRING_ATTEMPTS,
            seed: None,
        }
    }
}

impl SeasonConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LeagueError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SeasonConfig = toml::from_str(content)
            .map_err(|e| LeagueError::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.team_names.len() < 2 {
            return Err(LeagueError::NotEnoughTeams(self.team_names.len()));
        }

        let mut seen = HashSet::new();
        for name in &self.team_names {
            if name.trim().is_empty() {
                return Err(LeagueError::Config("team names must not be empty".to_string()));
            }
            if !seen.insert(name.as_str()) {
                return Err(LeagueError::Config(format!("duplicate team name: {}", name)));
            }
        }

        if self.weeks == 0 {
            return Err(LeagueError::Config("a season needs at least one week".to_string()));
        }
        if self.max_pairing_attempts == 0 {
            return Err(LeagueError::Config("max_pairing_attempts must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SeasonConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.team_names.len(), 4);
        assert_eq!(config.weeks, 5);
        assert_eq!(config.prediction_from_week, 4);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = SeasonConfig::from_toml_str("seed = 42\nweeks = 3\n").unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.weeks, 3);
        assert_eq!(config.team_names, SeasonConfig::default().team_names);
        assert_eq!(config.max_pairing_attempts, 100);
    }

    #[test]
    fn test_team_names_from_toml() {
        let config = SeasonConfig::from_toml_str(r#"team_names = ["Ajax", "PSV", "Feyenoord", "AZ"]"#).unwrap();
        assert_eq!(config.team_names[0], "Ajax");
    }

    #[test]
    fn test_rejects_bad_configs() {
        assert!(matches!(
            SeasonConfig::from_toml_str(r#"team_names = ["Solo"]"#),
            Err(LeagueError::NotEnoughTeams(1))
        ));
        assert!(matches!(
            SeasonConfig::from_toml_str(r#"team_names = ["A", "A"]"#),
            Err(LeagueError::Config(_))
        ));
        assert!(matches!(SeasonConfig::from_toml_str("weeks = 0"), Err(LeagueError::Config(_))));
        assert!(matches!(
            SeasonConfig::from_toml_str("max_pairing_attempts = 0"),
            Err(LeagueError::Config(_))
        ));
        assert!(matches!(SeasonConfig::from_toml_str("weeks = \"five\""), Err(LeagueError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            SeasonConfig::load("/nonexistent/league.toml"),
            Err(LeagueError::Config(_))
        ));
    }
}
