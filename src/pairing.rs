use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::fixture::MatchRecord;
use crate::team::{Team, TeamId};

/// Pairings drawn for one week.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pairings {
    /// (home, away) team ids
    pub pairs: Vec<(TeamId, TeamId)>,

    /// Shuffles used, including the first
    pub attempts: u32,

    /// True when every attempt repeated last week and a repeat was accepted
    pub exhausted: bool,
}

/// Partition the teams into (home, away) pairs for a week.
///
/// The list is shuffled and walked two at a time. If any pair met in
/// `previous_week` (either orientation) the whole list is reshuffled. After
/// `max_attempts` shuffles the last one is kept even though it repeats.
/// With an odd team count the final team sits the week out.
pub fn generate_pairings<R: Rng + ?Sized>(
    teams: &[Team],
    previous_week: &[MatchRecord],
    max_attempts: u32,
    rng: &mut R,
) -> Pairings {
    let mut ids: Vec<TeamId> = teams.iter().map(|t| t.id).collect();
    let max_attempts = max_attempts.max(1);
    let mut attempts = 0;

    loop {
        ids.shuffle(rng);
        attempts += 1;

        let pairs = pair_off(&ids);
        if !pairs.iter().any(|&(home, away)| is_repeat(previous_week, home, away)) {
            return Pairings {
                pairs,
                attempts,
                exhausted: false,
            };
        }

        if attempts >= max_attempts {
            warn!(
                "no fresh pairing after {} shuffles, accepting a repeat of last week",
                attempts
            );
            return Pairings {
                pairs,
                attempts,
                exhausted: true,
            };
        }

        debug!("pairing attempt {} repeats last week, reshuffling", attempts);
    }
}

/// Check if two teams already met in the given matches.
pub fn is_repeat(matches: &[MatchRecord], team1: TeamId, team2: TeamId) -> bool {
    matches.iter().any(|m| m.same_pairing(team1, team2))
}

fn pair_off(ids: &[TeamId]) -> Vec<(TeamId, TeamId)> {
    ids.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect()
}
