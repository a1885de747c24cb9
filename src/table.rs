use std::cmp::Ordering;

use crate::constants::{POINTS_FOR_DRAW, POINTS_FOR_WIN};
use crate::fixture::{MatchRecord, Score};
use crate::team::Team;

/// Fold one match into a team's cumulative statistics.
///
/// Not idempotent: applying the same match twice counts it twice.
pub fn apply_result(team: &mut Team, goals_for: u32, goals_against: u32) {
    team.played += 1;
    team.goals_for += goals_for;
    team.goals_against += goals_against;
    team.goal_difference = team.goals_for as i32 - team.goals_against as i32;

    match goals_for.cmp(&goals_against) {
        Ordering::Greater => {
            team.won += 1;
            team.points += POINTS_FOR_WIN;
        }
        Ordering::Equal => {
            team.drawn += 1;
            team.points += POINTS_FOR_DRAW;
        }
        Ordering::Less => {
            team.lost += 1;
        }
    }
}

/// Apply a final score to both teams of a match.
pub fn update_league_table(home: &mut Team, away: &mut Team, score: Score) {
    apply_result(home, score.home, score.away);
    apply_result(away, score.away, score.home);
}

/// Rebuild a team's statistics from scratch using a match log.
pub fn recompute_from_log(team: &Team, matches: &[MatchRecord]) -> Team {
    let mut rebuilt = team.clone();
    rebuilt.reset_stats();

    for m in matches {
        if m.home_team_id == team.id {
            apply_result(&mut rebuilt, m.home_score, m.away_score);
        } else if m.away_team_id == team.id {
            apply_result(&mut rebuilt, m.away_score, m.home_score);
        }
    }

    rebuilt
}

/// Order teams the way the table is presented: points, then goal difference.
pub fn sort_standings(teams: &mut [Team]) {
    teams.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.goal_difference.cmp(&a.goal_difference))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(home: u32, away: u32, home_score: u32, away_score: u32) -> MatchRecord {
        MatchRecord {
            id: 1,
            home_team_id: home,
            away_team_id: away,
            home_score,
            away_score,
            week: 1,
        }
    }

    #[test]
    fn test_home_win() {
        let mut home = Team::new(1, "Chelsea", 3).unwrap();
        let mut away = Team::new(2, "Arsenal", 2).unwrap();

        update_league_table(&mut home, &mut away, Score { home: 3, away: 1 });

        assert_eq!((home.points, home.won, home.played), (3, 1, 1));
        assert_eq!((home.goals_for, home.goals_against, home.goal_difference), (3, 1, 2));
        assert_eq!((away.points, away.lost, away.played), (0, 1, 1));
        assert_eq!(away.goal_difference, -2);
        assert!(home.is_consistent() && away.is_consistent());
    }

    #[test]
    fn test_draw() {
        let mut home = Team::new(1, "Chelsea", 3).unwrap();
        let mut away = Team::new(2, "Arsenal", 2).unwrap();

        update_league_table(&mut home, &mut away, Score { home: 2, away: 2 });

        assert_eq!((home.points, home.drawn), (1, 1));
        assert_eq!((away.points, away.drawn), (1, 1));
        assert_eq!(home.goal_difference, 0);
    }

    #[test]
    fn test_applying_twice_double_counts() {
        let mut team = Team::new(1, "City", 4).unwrap();
        apply_result(&mut team, 2, 0);
        apply_result(&mut team, 2, 0);
        assert_eq!(team.played, 2);
        assert_eq!(team.points, 6);
        assert_eq!(team.goal_difference, 4);
    }

    #[test]
    fn test_recompute_matches_incremental() {
        let log = vec![record(1, 2, 1, 0), record(3, 1, 2, 2), record(1, 4, 0, 3)];
        let mut incremental = Team::new(1, "Chelsea", 3).unwrap();
        apply_result(&mut incremental, 1, 0);
        apply_result(&mut incremental, 2, 2);
        apply_result(&mut incremental, 0, 3);

        let rebuilt = recompute_from_log(&incremental, &log);
        assert_eq!(rebuilt, incremental);
        assert_eq!(rebuilt.points, 4);
        assert_eq!(rebuilt.goal_difference, -2);
    }

    #[test]
    fn test_sort_standings() {
        let mut a = Team::new(1, "A", 1).unwrap();
        let mut b = Team::new(2, "B", 1).unwrap();
        let mut c = Team::new(3, "C", 1).unwrap();
        a.points = 3;
        a.goal_difference = 1;
        b.points = 3;
        b.goal_difference = 4;
        c.points = 6;
        c.goal_difference = -1;

        let mut teams = vec![a, b, c];
        sort_standings(&mut teams);
        let names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }
}
