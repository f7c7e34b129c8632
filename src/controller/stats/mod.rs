pub mod course_stats;
pub mod filter;
pub mod goals;
pub mod handicap;
pub mod match_play;
pub mod round_stats;
pub mod sort_utils;
pub mod summary;
pub mod trend;

pub use course_stats::{RANKED_HOLES, compute_course_stats};
pub use filter::{ALL, FilterOptions, RoundLimit, RoundTypeFilter, filter_rounds};
pub use goals::{
    GOAL_DEFS, GoalDef, GoalDirection, GoalKpi, GoalReport, GoalStatus, GoalTarget, GoalTargets,
    evaluate_goals, get_goal_status,
};
pub use handicap::{MIN_HANDICAP_ROUNDS, compute_handicap, differentials_to_use, score_differential};
pub use match_play::compute_match_play_stats;
pub use round_stats::{LAG_PUTT_MIN_FEET, compute_stats};
pub use summary::{build_round_summary, format_vs_par};
pub use trend::{DEFAULT_MOVING_AVERAGE_WINDOW, TrendKpi, compute_moving_average, compute_trend_data};
