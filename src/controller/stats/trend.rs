use std::str::FromStr;

use super::handicap::compute_handicap;
use super::round_stats::compute_stats;
use super::sort_utils::sort_oldest_first;
use crate::model::{Round, TrendPoint, round1};

pub const DEFAULT_MOVING_AVERAGE_WINDOW: usize = 5;

/// Metrics that can be charted round by round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrendKpi {
    Handicap,
    AvgScore,
    PuttsPer9,
    FairwayPct,
    GirPct,
    ScramblingPct,
}

impl TrendKpi {
    pub const ALL: [TrendKpi; 6] = [
        TrendKpi::Handicap,
        TrendKpi::AvgScore,
        TrendKpi::PuttsPer9,
        TrendKpi::FairwayPct,
        TrendKpi::GirPct,
        TrendKpi::ScramblingPct,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            TrendKpi::Handicap => "handicap",
            TrendKpi::AvgScore => "avgScore",
            TrendKpi::PuttsPer9 => "puttsPer9",
            TrendKpi::FairwayPct => "fairwayPct",
            TrendKpi::GirPct => "girPct",
            TrendKpi::ScramblingPct => "scramblingPct",
        }
    }
}

impl FromStr for TrendKpi {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrendKpi::ALL
            .into_iter()
            .find(|kpi| kpi.key() == s)
            .ok_or_else(|| format!("unknown trend kpi: {s}"))
    }
}

fn single_round_value(round: &Round, kpi: TrendKpi) -> Option<f64> {
    let stats = compute_stats(std::slice::from_ref(round));
    let value = match kpi {
        TrendKpi::AvgScore => stats.avg_score,
        TrendKpi::PuttsPer9 => stats.putts_per9,
        TrendKpi::FairwayPct => stats.fairway_pct.map(f64::from),
        TrendKpi::GirPct => stats.gir_pct.map(f64::from),
        TrendKpi::ScramblingPct => stats.scrambling_pct.map(f64::from),
        TrendKpi::Handicap => None,
    };
    value.filter(|v| v.is_finite())
}

/// One point per round, oldest first, for the named KPI. Unknown keys and
/// empty input give an empty series.
///
/// The handicap series recomputes the index over every prefix of the
/// date-ordered rounds, so it costs O(n²) in the number of rounds.
#[must_use]
pub fn compute_trend_data(all_rounds: &[Round], kpi_key: &str) -> Vec<TrendPoint> {
    let kpi = match kpi_key.parse::<TrendKpi>() {
        Ok(kpi) => kpi,
        Err(err) => {
            tracing::debug!(%err, "no trend series for key");
            return Vec::new();
        }
    };

    let mut rounds: Vec<&Round> = all_rounds.iter().collect();
    sort_oldest_first(&mut rounds);

    rounds
        .iter()
        .enumerate()
        .map(|(i, round)| {
            let value = match kpi {
                TrendKpi::Handicap => compute_handicap(&rounds[..=i]),
                _ => single_round_value(round, kpi),
            };
            TrendPoint {
                date: round.date.clone(),
                value,
            }
        })
        .collect()
}

/// Backward-looking smoothing: each point averages up to `window` non-null
/// values ending at that point, reaching further back past nulls. A point
/// with nothing to average stays null.
#[must_use]
pub fn compute_moving_average(series: &[TrendPoint], window: usize) -> Vec<TrendPoint> {
    series
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let values: Vec<f64> = series[..=i]
                .iter()
                .rev()
                .filter_map(|p| p.value)
                .take(window)
                .collect();
            let value = (!values.is_empty())
                .then(|| round1(values.iter().sum::<f64>() / values.len() as f64));
            TrendPoint {
                date: point.date.clone(),
                value,
            }
        })
        .collect()
}
