use rand::Rng;

use crate::constants::{FAVORED_GOAL_CEILING, UNDERDOG_GOAL_CEILING};
use crate::fixture::Score;

/// Simulate the final score of a match from the two strength ratings.
///
/// The stronger side draws from 0..=4 goals and the weaker from 0..=3; if
/// the weaker draw comes out ahead the two values are swapped, so the
/// stronger side never loses. Equal sides draw independently from 0..=4.
/// A goalless draw is replaced by redrawing the stronger side (both sides
/// when equal) from 1..=4.
///
/// # Arguments
/// * `home_strength` - Home side rating (1-4)
/// * `away_strength` - Away side rating (1-4)
/// * `rng` - Random source, usually the season's seeded generator
pub fn simulate_score<R: Rng + ?Sized>(home_strength: u8, away_strength: u8, rng: &mut R) -> Score {
    let (mut home, mut away) = if home_strength > away_strength {
        favored_draw(rng)
    } else if away_strength > home_strength {
        let (favored, underdog) = favored_draw(rng);
        (underdog, favored)
    } else {
        (
            rng.gen_range(0..FAVORED_GOAL_CEILING),
            rng.gen_range(0..FAVORED_GOAL_CEILING),
        )
    };

    if home == 0 && away == 0 {
        if home_strength >= away_strength {
            home = rng.gen_range(1..FAVORED_GOAL_CEILING);
        }
        if away_strength >= home_strength {
            away = rng.gen_range(1..FAVORED_GOAL_CEILING);
        }
    }

    Score { home, away }
}

/// Goals for (favored, underdog), swapped so the underdog never leads.
fn favored_draw<R: Rng + ?Sized>(rng: &mut R) -> (u32, u32) {
    let favored = rng.gen_range(0..FAVORED_GOAL_CEILING);
    let underdog = rng.gen_range(0..UNDERDOG_GOAL_CEILING);
    if underdog > favored {
        (underdog, favored)
    } else {
        (favored, underdog)
    }
}
