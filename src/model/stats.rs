use serde::{Deserialize, Serialize};

use super::score::ScoringDistribution;

/// Aggregate metrics over a set of rounds. Every field is `None` when no
/// rounds were supplied; percentage fields are also `None` whenever their
/// opportunity count was zero.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub avg_score: Option<f64>,
    pub fairway_pct: Option<u32>,
    pub gir_pct: Option<u32>,
    /// Average total putts per round.
    pub avg_putts: Option<f64>,
    pub total_putts: Option<u32>,
    pub scrambling_pct: Option<u32>,
    pub sand_save_pct: Option<u32>,
    pub feet_of_putts_made: Option<f64>,
    pub avg_first_putt_dist: Option<f64>,
    pub fairway_dist: Option<FairwayDist>,
    pub approach_dist: Option<ApproachDist>,
    pub putting_breakdown: Option<PuttingBreakdown>,
    pub putts_per9: Option<f64>,
    pub feet_made_per9: Option<f64>,
    pub penalties_per9: Option<f64>,
    pub putt_make_rate: Option<Vec<PuttBucket>>,
    pub lag_putt3_putt_avoid_pct: Option<u32>,
    pub lag_putt_avg_leave: Option<f64>,
    pub lag_putt_count: Option<u32>,
    pub par_conversion_pct: Option<u32>,
    pub bogey_avoidance_pct: Option<u32>,
    pub bounce_back_rate: Option<u32>,
    pub scoring_by_par: Option<ScoringByPar>,
    pub scoring_avg_par3: Option<f64>,
    pub scoring_avg_par4: Option<f64>,
    pub scoring_avg_par5: Option<f64>,
    pub scoring_distribution: Option<ScoringDistribution>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FairwayDist {
    pub left: u32,
    pub hit: u32,
    pub right: u32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApproachDist {
    pub gir: u32,
    pub long: u32,
    pub short: u32,
    pub left: u32,
    pub right: u32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PuttingBreakdown {
    pub one_putt: u32,
    pub two_putt: u32,
    pub three_putt: u32,
    pub three_plus: u32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParTypeScoring {
    pub avg: f64,
    pub vs_par: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct ScoringByPar {
    pub par3: Option<ParTypeScoring>,
    pub par4: Option<ParTypeScoring>,
    pub par5: Option<ParTypeScoring>,
}

/// Make rate for putts starting inside one distance band.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PuttBucket {
    pub label: String,
    pub attempts: u32,
    pub made: u32,
    /// Whole percent; 0 when there were no attempts.
    pub pct: u32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchStats {
    pub matches_played: u32,
    pub total_points: f64,
    pub total_match_holes: u32,
    pub holes_won: u32,
    pub holes_drawn: u32,
    pub holes_lost: u32,
    pub avg_points_per_match: f64,
    pub win_pct: f64,
    pub draw_pct: f64,
    pub loss_pct: f64,
    pub points_per9: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    pub total_par: i32,
    pub diff: i32,
    /// `+N`, `E` or `-N`.
    pub diff_str: String,
    pub putts: u32,
    pub fairways: u32,
    pub fairway_total: u32,
    pub girs: u32,
    pub bunker_holes: u32,
    pub sand_saves: u32,
    pub feet_of_putts_made: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrendPoint {
    pub date: String,
    pub value: Option<f64>,
}
