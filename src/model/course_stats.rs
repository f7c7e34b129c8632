use serde::{Deserialize, Serialize};

use super::score::ScoringDistribution;
use super::stats::Stats;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FairwayMiss {
    Left,
    Right,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GreenMiss {
    Long,
    Short,
    Left,
    Right,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchSplit {
    pub win_pct: u32,
    pub draw_pct: u32,
    pub loss_pct: u32,
}

/// Cross-round rollup for one course hole.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoleStat {
    pub number: i32,
    pub par: i32,
    pub rounds_with_data: u32,
    pub scoring_avg: Option<f64>,
    pub vs_par: Option<f64>,
    pub distribution: ScoringDistribution,
    pub fairway_pct: Option<u32>,
    pub fairway_miss_dir: Option<FairwayMiss>,
    pub gir_pct: Option<u32>,
    pub gir_miss_dir: Option<GreenMiss>,
    pub avg_putts: Option<f64>,
    pub match_play: Option<MatchSplit>,
}

impl HoleStat {
    /// Zero-valued row for a hole nobody has played yet.
    #[must_use]
    pub fn empty(number: i32, par: i32) -> Self {
        HoleStat {
            number,
            par,
            rounds_with_data: 0,
            scoring_avg: None,
            vs_par: None,
            distribution: ScoringDistribution::default(),
            fairway_pct: None,
            fairway_miss_dir: None,
            gir_pct: None,
            gir_miss_dir: None,
            avg_putts: None,
            match_play: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoundRef {
    pub id: String,
    pub score: i32,
    pub date: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseStats {
    pub course_id: String,
    pub rounds_played: u32,
    pub total_par: i32,
    pub avg_score: Option<f64>,
    pub vs_par: Option<f64>,
    pub best_round: Option<RoundRef>,
    pub worst_round: Option<RoundRef>,
    pub course_stats: Stats,
    pub hole_stats: Vec<HoleStat>,
    pub hardest_holes: Vec<HoleStat>,
    pub easiest_holes: Vec<HoleStat>,
    pub matches_played: u32,
}
