/// Points awarded for a win
pub const POINTS_FOR_WIN: u32 = 3;

/// Points awarded for a draw
pub const POINTS_FOR_DRAW: u32 = 1;

/// Weakest allowed strength rating
pub const MIN_STRENGTH: u8 = 1;

/// Strongest allowed strength rating
pub const MAX_STRENGTH: u8 = 4;

/// Exclusive upper bound for the favored (or equal-strength) side's goals
pub const FAVORED_GOAL_CEILING: u32 = 5;

/// Exclusive upper bound for the weaker side's goals
pub const UNDERDOG_GOAL_CEILING: u32 = 4;

/// Weeks in a default season
pub const SEASON_WEEKS: u32 = 5;

/// First week whose report carries championship predictions
pub const PREDICTION_FROM_WEEK: u32 = 4;

/// Reshuffles tried before a repeat pairing is accepted
pub const MAX_PAIRING_ATTEMPTS: u32 = 100;

/// Teams seeded into a default season
pub const DEFAULT_TEAMS: [&str; 4] = ["Chelsea", "Arsenal", "Manchester City", "Liverpool"];

/// Ordinal suffix for a week number ("st", "nd", "rd", "th").
pub fn ordinal_suffix(n: u32) -> &'static str {
    if (11..=13).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
