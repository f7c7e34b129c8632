use std::cmp::Ordering;

use crate::model::{HoleStat, Round};

/// Lowest total first; equal totals put the most recent round first.
#[must_use]
pub fn by_score_then_recent(a: &Round, b: &Round) -> Ordering {
    a.total_score
        .cmp(&b.total_score)
        .then_with(|| b.date.cmp(&a.date))
}

/// Orders rounds oldest first. Stable, so same-day rounds keep input order.
pub fn sort_oldest_first(rounds: &mut [&Round]) {
    rounds.sort_by(|a, b| a.date.cmp(&b.date));
}

/// Up to `take` played holes ranked by strokes over par. Holes with equal
/// averages stay in course order.
#[must_use]
pub fn rank_holes(hole_stats: &[HoleStat], hardest_first: bool, take: usize) -> Vec<HoleStat> {
    let mut played: Vec<(&HoleStat, f64)> = hole_stats
        .iter()
        .filter_map(|h| h.vs_par.map(|vs_par| (h, vs_par)))
        .collect();

    played.sort_by(|(_, a), (_, b)| {
        if hardest_first {
            b.total_cmp(a)
        } else {
            a.total_cmp(b)
        }
    });

    played
        .into_iter()
        .take(take)
        .map(|(h, _)| h.clone())
        .collect()
}
