#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

use crate::table::sort_standings;
use crate::team::Team;

/// Championship probability for one team, in percent.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub name: String,
    pub probability: f64,
}

/// Goal difference rescaled by the share of its pool (positive or negative).
///
/// Integer arithmetic truncating toward zero. A league where every team
/// sits on zero goal difference has no pool and yields zero.
pub fn adjusted_goal_difference(gd: i32, total_positive_gd: i32, total_negative_gd: i32) -> i32 {
    let pool = total_positive_gd + total_negative_gd;
    if pool == 0 {
        return 0;
    }
    if gd >= 0 {
        gd * total_positive_gd / pool
    } else {
        -gd * total_negative_gd / pool
    }
}

/// Estimate each team's chance of winning the league from points and goal difference.
///
/// Raw score per team is `(points + adjusted GD) / total points * 100`; the
/// raw scores are clamped at zero and normalized to sum to 100. Without any
/// points (or any positive raw score) every team gets an equal share.
///
/// # Returns
/// Predictions sorted by probability, highest first
pub fn predict_standings(teams: &[Team]) -> Vec<Prediction> {
    if teams.is_empty() {
        return Vec::new();
    }

    let mut ordered = teams.to_vec();
    sort_standings(&mut ordered);

    let total_points: u32 = ordered.iter().map(|t| t.points).sum();
    let total_positive_gd: i32 = ordered
        .iter()
        .filter(|t| t.goal_difference >= 0)
        .map(|t| t.goal_difference)
        .sum();
    let total_negative_gd: i32 = ordered
        .iter()
        .filter(|t| t.goal_difference < 0)
        .map(|t| -t.goal_difference)
        .sum();

    let mut predictions: Vec<Prediction> = ordered
        .iter()
        .map(|team| {
            let adjusted = adjusted_goal_difference(team.goal_difference, total_positive_gd, total_negative_gd);
            let raw = if total_points == 0 {
                0.0
            } else {
                (team.points as i64 + adjusted as i64) as f64 / total_points as f64 * 100.0
            };
            Prediction {
                name: team.name.clone(),
                probability: raw.max(0.0),
            }
        })
        .collect();

    let normalize_factor: f64 = predictions.iter().map(|p| p.probability).sum();
    if normalize_factor > 0.0 {
        for prediction in &mut predictions {
            prediction.probability = prediction.probability * 100.0 / normalize_factor;
        }
    } else {
        let share = 100.0 / predictions.len() as f64;
        for prediction in &mut predictions {
            prediction.probability = share;
        }
    }

    // Stable sort keeps table order between equal probabilities
    predictions.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    predictions
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn team(id: u32, name: &str, points: u32, gd: i32) -> Team {
        let mut team = Team::new(id, name, 1).unwrap();
        team.points = points;
        team.goal_difference = gd;
        team
    }

    #[test]
    fn test_adjusted_goal_difference() {
        // pools: +6 / -6
        assert_eq!(adjusted_goal_difference(4, 6, 6), 2);
        assert_eq!(adjusted_goal_difference(2, 6, 6), 1);
        assert_eq!(adjusted_goal_difference(-5, 6, 6), 2);
        assert_eq!(adjusted_goal_difference(-1, 6, 6), 0);
        assert_eq!(adjusted_goal_difference(0, 0, 0), 0);
    }

    #[test]
    fn test_known_values() {
        let teams = vec![
            team(1, "Chelsea", 9, 4),
            team(2, "Arsenal", 6, 2),
            team(3, "City", 3, -1),
            team(4, "Liverpool", 0, -5),
        ];

        let predictions = predict_standings(&teams);
        let names: Vec<&str> = predictions.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Chelsea", "Arsenal", "City", "Liverpool"]);

        // raw: (9+2)/18, (6+1)/18, (3+0)/18, (0+2)/18 -> normalized over 23
        let expected = [11.0, 7.0, 3.0, 2.0];
        let by_name = |name: &str| predictions.iter().find(|p| p.name == name).unwrap().probability;
        assert!((by_name("Chelsea") - expected[0] * 100.0 / 23.0).abs() < 1e-9);
        assert!((by_name("Arsenal") - expected[1] * 100.0 / 23.0).abs() < 1e-9);
        assert!((by_name("City") - expected[2] * 100.0 / 23.0).abs() < 1e-9);
        assert!((by_name("Liverpool") - expected[3] * 100.0 / 23.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_zero_goal_difference() {
        let teams = vec![team(1, "A", 3, 0), team(2, "B", 1, 0), team(3, "C", 1, 0), team(4, "D", 0, 0)];
        let predictions = predict_standings(&teams);

        let total: f64 = predictions.iter().map(|p| p.probability).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert!((predictions[0].probability - 60.0).abs() < 1e-9);
        assert_eq!(predictions[3].name, "D");
        assert_eq!(predictions[3].probability, 0.0);
    }

    #[test]
    fn test_no_points_is_uniform() {
        let teams = vec![team(1, "A", 0, 0), team(2, "B", 0, 0), team(3, "C", 0, 0), team(4, "D", 0, 0)];
        let predictions = predict_standings(&teams);
        for p in &predictions {
            assert!((p.probability - 25.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_empty() {
        assert!(predict_standings(&[]).is_empty());
    }

    #[test]
    fn test_never_negative() {
        let teams = vec![team(1, "A", 12, 10), team(2, "B", 0, -9), team(3, "C", 0, -1)];
        for p in predict_standings(&teams) {
            assert!(p.probability >= 0.0);
        }
    }

    proptest! {
        #[test]
        fn prop_sums_to_100(
            stats in prop::collection::vec((0u32..16, -12i32..13), 2..8)
        ) {
            let teams: Vec<Team> = stats
                .iter()
                .enumerate()
                .map(|(i, &(points, gd))| team(i as u32, &format!("T{}", i), points, gd))
                .collect();

            let predictions = predict_standings(&teams);
            prop_assert_eq!(predictions.len(), teams.len());

            let total: f64 = predictions.iter().map(|p| p.probability).sum();
            prop_assert!((total - 100.0).abs() < 1e-6, "total {}", total);

            for pair in predictions.windows(2) {
                prop_assert!(pair[0].probability >= pair[1].probability);
            }
        }
    }
}
