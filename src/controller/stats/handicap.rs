use std::borrow::Borrow;

use crate::model::{Round, round1};

/// Fewest eligible rounds that produce an index.
pub const MIN_HANDICAP_ROUNDS: usize = 3;

const STANDARD_SLOPE: f64 = 113.0;
const BONUS_FOR_EXCELLENCE: f64 = 0.96;

/// Score differential for a rated round, or `None` when the round is not
/// eligible (unrated, or a casual/scramble round).
#[must_use]
pub fn score_differential(round: &Round) -> Option<f64> {
    if !round.round_type.counts_for_handicap() {
        return None;
    }
    let rating = round.course_rating?;
    let slope = round.slope_rating.filter(|&s| s > 0)?;
    Some((f64::from(round.total_score) - rating) * STANDARD_SLOPE / f64::from(slope))
}

/// How many of the lowest differentials count toward the index.
#[must_use]
pub fn differentials_to_use(eligible: usize) -> usize {
    match eligible {
        20.. => 8,
        17..=19 => 7,
        14..=16 => 6,
        11..=13 => 5,
        8..=10 => 4,
        6 | 7 => 3,
        4 | 5 => 2,
        _ => 1,
    }
}

/// Handicap index from the best differentials, one decimal.
#[must_use]
pub fn compute_handicap<R: Borrow<Round>>(rounds: &[R]) -> Option<f64> {
    let mut differentials: Vec<f64> = rounds
        .iter()
        .filter_map(|r| score_differential(Borrow::<Round>::borrow(r)))
        .collect();
    if differentials.len() < MIN_HANDICAP_ROUNDS {
        tracing::debug!(
            eligible = differentials.len(),
            "not enough rated rounds for a handicap"
        );
        return None;
    }

    differentials.sort_by(f64::total_cmp);
    let take = differentials_to_use(differentials.len());
    let best: f64 = differentials.iter().take(take).sum();
    Some(round1(best / take as f64 * BONUS_FOR_EXCELLENCE))
}
