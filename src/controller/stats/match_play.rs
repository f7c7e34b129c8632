use std::borrow::Borrow;

use crate::model::{MatchResult, MatchStats, Round, round1};

/// Points and hole tallies for hole-by-hole match results. Rounds without any
/// recorded match result are ignored.
#[must_use]
pub fn compute_match_play_stats<R: Borrow<Round>>(rounds: &[R]) -> MatchStats {
    let mut stats = MatchStats::default();

    for round in rounds {
        let round: &Round = round.borrow();
        if !round.has_match_results() {
            continue;
        }
        stats.matches_played += 1;

        for result in round.holes.iter().filter_map(|h| h.match_result) {
            stats.total_points += result.points();
            stats.total_match_holes += 1;
            match result {
                MatchResult::Win => stats.holes_won += 1,
                MatchResult::Draw => stats.holes_drawn += 1,
                MatchResult::Loss => stats.holes_lost += 1,
            }
        }
    }

    if stats.matches_played > 0 {
        stats.avg_points_per_match = round1(stats.total_points / f64::from(stats.matches_played));
    }
    if stats.total_match_holes > 0 {
        let holes = f64::from(stats.total_match_holes);
        stats.win_pct = round1(f64::from(stats.holes_won) * 100.0 / holes);
        stats.draw_pct = round1(f64::from(stats.holes_drawn) * 100.0 / holes);
        stats.loss_pct = round1(f64::from(stats.holes_lost) * 100.0 / holes);
        stats.points_per9 = round1(stats.total_points / holes * 9.0);
    }

    tracing::debug!(
        matches = stats.matches_played,
        holes = stats.total_match_holes,
        "computed match play stats"
    );
    stats
}
