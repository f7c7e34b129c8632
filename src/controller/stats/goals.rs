use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::model::Stats;
use GoalDirection::{Higher, Lower};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GoalDirection {
    Higher,
    Lower,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GoalStatus {
    FarAbove,
    Above,
    Below,
    FarBelow,
}

/// Buckets a KPI against its target. "Above" always means better than the
/// target, whichever direction is better for the KPI.
#[must_use]
pub fn get_goal_status(
    value: Option<f64>,
    target: Option<f64>,
    direction: GoalDirection,
    buffer: f64,
) -> Option<GoalStatus> {
    let (value, target) = (value?, target?);
    let status = match direction {
        GoalDirection::Higher => {
            if value >= target + buffer {
                GoalStatus::FarAbove
            } else if value >= target {
                GoalStatus::Above
            } else if value >= target - buffer {
                GoalStatus::Below
            } else {
                GoalStatus::FarBelow
            }
        }
        GoalDirection::Lower => {
            if value <= target - buffer {
                GoalStatus::FarAbove
            } else if value <= target {
                GoalStatus::Above
            } else if value <= target + buffer {
                GoalStatus::Below
            } else {
                GoalStatus::FarBelow
            }
        }
    };
    Some(status)
}

/// KPIs a player can set a goal for. Each key is a field of [`Stats`].
/// Declaration order is the order of `GOAL_DEFS`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum GoalKpi {
    AvgScore,
    FairwayPct,
    GirPct,
    AvgFirstPuttDist,
    ScramblingPct,
    SandSavePct,
    BogeyAvoidancePct,
    ParConversionPct,
    BounceBackRate,
    PuttsPer9,
    FeetMadePer9,
    PenaltiesPer9,
    ScoringAvgPar3,
    ScoringAvgPar4,
    ScoringAvgPar5,
    LagPutt3PuttAvoidPct,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalDef {
    pub direction: GoalDirection,
    pub default_buffer: f64,
    pub label: &'static str,
    pub unit: &'static str,
}

const fn def(
    direction: GoalDirection,
    default_buffer: f64,
    label: &'static str,
    unit: &'static str,
) -> GoalDef {
    GoalDef {
        direction,
        default_buffer,
        label,
        unit,
    }
}

pub static GOAL_DEFS: [(GoalKpi, GoalDef); 16] = [
    (GoalKpi::AvgScore, def(Lower, 3.0, "Scoring Average", "")),
    (GoalKpi::FairwayPct, def(Higher, 10.0, "Fairways Hit", "%")),
    (GoalKpi::GirPct, def(Higher, 10.0, "Greens in Regulation", "%")),
    (GoalKpi::AvgFirstPuttDist, def(Lower, 5.0, "First Putt Distance", "ft")),
    (GoalKpi::ScramblingPct, def(Higher, 10.0, "Scrambling", "%")),
    (GoalKpi::SandSavePct, def(Higher, 10.0, "Sand Saves", "%")),
    (GoalKpi::BogeyAvoidancePct, def(Higher, 10.0, "Bogey Avoidance", "%")),
    (GoalKpi::ParConversionPct, def(Higher, 10.0, "Par Conversion", "%")),
    (GoalKpi::BounceBackRate, def(Higher, 10.0, "Bounce Back", "%")),
    (GoalKpi::PuttsPer9, def(Lower, 1.0, "Putts per 9", "")),
    (GoalKpi::FeetMadePer9, def(Higher, 10.0, "Feet Made per 9", "ft")),
    (GoalKpi::PenaltiesPer9, def(Lower, 0.5, "Penalties per 9", "")),
    (GoalKpi::ScoringAvgPar3, def(Lower, 0.2, "Par 3 Average", "")),
    (GoalKpi::ScoringAvgPar4, def(Lower, 0.2, "Par 4 Average", "")),
    (GoalKpi::ScoringAvgPar5, def(Lower, 0.2, "Par 5 Average", "")),
    (GoalKpi::LagPutt3PuttAvoidPct, def(Higher, 10.0, "Lag Putt 3-Putt Avoidance", "%")),
];

impl GoalKpi {
    pub const ALL: [GoalKpi; 16] = [
        GoalKpi::AvgScore,
        GoalKpi::FairwayPct,
        GoalKpi::GirPct,
        GoalKpi::AvgFirstPuttDist,
        GoalKpi::ScramblingPct,
        GoalKpi::SandSavePct,
        GoalKpi::BogeyAvoidancePct,
        GoalKpi::ParConversionPct,
        GoalKpi::BounceBackRate,
        GoalKpi::PuttsPer9,
        GoalKpi::FeetMadePer9,
        GoalKpi::PenaltiesPer9,
        GoalKpi::ScoringAvgPar3,
        GoalKpi::ScoringAvgPar4,
        GoalKpi::ScoringAvgPar5,
        GoalKpi::LagPutt3PuttAvoidPct,
    ];

    /// Field name in the serialized [`Stats`] bundle.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            GoalKpi::AvgScore => "avgScore",
            GoalKpi::FairwayPct => "fairwayPct",
            GoalKpi::GirPct => "girPct",
            GoalKpi::AvgFirstPuttDist => "avgFirstPuttDist",
            GoalKpi::ScramblingPct => "scramblingPct",
            GoalKpi::SandSavePct => "sandSavePct",
            GoalKpi::BogeyAvoidancePct => "bogeyAvoidancePct",
            GoalKpi::ParConversionPct => "parConversionPct",
            GoalKpi::BounceBackRate => "bounceBackRate",
            GoalKpi::PuttsPer9 => "puttsPer9",
            GoalKpi::FeetMadePer9 => "feetMadePer9",
            GoalKpi::PenaltiesPer9 => "penaltiesPer9",
            GoalKpi::ScoringAvgPar3 => "scoringAvgPar3",
            GoalKpi::ScoringAvgPar4 => "scoringAvgPar4",
            GoalKpi::ScoringAvgPar5 => "scoringAvgPar5",
            GoalKpi::LagPutt3PuttAvoidPct => "lagPutt3PuttAvoidPct",
        }
    }

    #[must_use]
    pub fn definition(self) -> &'static GoalDef {
        &GOAL_DEFS[self as usize].1
    }
}

impl FromStr for GoalKpi {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GoalKpi::ALL
            .into_iter()
            .find(|kpi| kpi.key() == s)
            .ok_or_else(|| format!("unknown goal kpi: {s}"))
    }
}

impl Stats {
    /// Current value of a goal KPI.
    #[must_use]
    pub fn kpi_value(&self, kpi: GoalKpi) -> Option<f64> {
        let whole = |v: Option<u32>| v.map(f64::from);
        match kpi {
            GoalKpi::AvgScore => self.avg_score,
            GoalKpi::FairwayPct => whole(self.fairway_pct),
            GoalKpi::GirPct => whole(self.gir_pct),
            GoalKpi::AvgFirstPuttDist => self.avg_first_putt_dist,
            GoalKpi::ScramblingPct => whole(self.scrambling_pct),
            GoalKpi::SandSavePct => whole(self.sand_save_pct),
            GoalKpi::BogeyAvoidancePct => whole(self.bogey_avoidance_pct),
            GoalKpi::ParConversionPct => whole(self.par_conversion_pct),
            GoalKpi::BounceBackRate => whole(self.bounce_back_rate),
            GoalKpi::PuttsPer9 => self.putts_per9,
            GoalKpi::FeetMadePer9 => self.feet_made_per9,
            GoalKpi::PenaltiesPer9 => self.penalties_per9,
            GoalKpi::ScoringAvgPar3 => self.scoring_avg_par3,
            GoalKpi::ScoringAvgPar4 => self.scoring_avg_par4,
            GoalKpi::ScoringAvgPar5 => self.scoring_avg_par5,
            GoalKpi::LagPutt3PuttAvoidPct => whole(self.lag_putt3_putt_avoid_pct),
        }
    }
}

/// A player's target for one KPI; `buffer` falls back to the registry default.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct GoalTarget {
    pub target: f64,
    #[serde(default)]
    pub buffer: Option<f64>,
}

pub type GoalTargets = BTreeMap<GoalKpi, GoalTarget>;

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalReport {
    pub kpi: GoalKpi,
    pub label: &'static str,
    pub unit: &'static str,
    pub value: Option<f64>,
    pub target: f64,
    pub status: Option<GoalStatus>,
}

/// Classifies every KPI that has a target, in registry order.
#[must_use]
pub fn evaluate_goals(stats: &Stats, targets: &GoalTargets) -> Vec<GoalReport> {
    GOAL_DEFS
        .iter()
        .filter_map(|(kpi, def)| {
            let goal = targets.get(kpi)?;
            let value = stats.kpi_value(*kpi);
            Some(GoalReport {
                kpi: *kpi,
                label: def.label,
                unit: def.unit,
                value,
                target: goal.target,
                status: get_goal_status(
                    value,
                    Some(goal.target),
                    def.direction,
                    goal.buffer.unwrap_or(def.default_buffer),
                ),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(75.0, GoalDirection::Higher, GoalStatus::FarAbove)]
    #[case(70.0, GoalDirection::Higher, GoalStatus::FarAbove)]
    #[case(65.0, GoalDirection::Higher, GoalStatus::Above)]
    #[case(60.0, GoalDirection::Higher, GoalStatus::Above)]
    #[case(55.0, GoalDirection::Higher, GoalStatus::Below)]
    #[case(45.0, GoalDirection::Higher, GoalStatus::FarBelow)]
    #[case(45.0, GoalDirection::Lower, GoalStatus::FarAbove)]
    #[case(55.0, GoalDirection::Lower, GoalStatus::Above)]
    #[case(65.0, GoalDirection::Lower, GoalStatus::Below)]
    #[case(75.0, GoalDirection::Lower, GoalStatus::FarBelow)]
    fn buckets_against_target(
        #[case] value: f64,
        #[case] direction: GoalDirection,
        #[case] expected: GoalStatus,
    ) {
        assert_eq!(
            get_goal_status(Some(value), Some(60.0), direction, 10.0),
            Some(expected)
        );
    }

    #[test]
    fn missing_value_or_target_has_no_status() {
        assert_eq!(get_goal_status(None, Some(60.0), GoalDirection::Higher, 10.0), None);
        assert_eq!(get_goal_status(Some(60.0), None, GoalDirection::Lower, 10.0), None);
    }

    #[test]
    fn registry_is_in_declaration_order() {
        for (idx, kpi) in GoalKpi::ALL.into_iter().enumerate() {
            assert_eq!(GOAL_DEFS[idx].0, kpi);
            assert_eq!(kpi as usize, idx);
            assert_eq!(kpi.key().parse::<GoalKpi>(), Ok(kpi));
        }
    }

    #[test]
    fn serde_names_match_keys() {
        for kpi in GoalKpi::ALL {
            let json = serde_json::to_value(kpi).unwrap();
            assert_eq!(json, serde_json::Value::String(kpi.key().to_string()));
        }
    }
}
