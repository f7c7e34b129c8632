use crate::model::{Round, RoundSummary};

#[must_use]
pub fn format_vs_par(diff: i32) -> String {
    match diff {
        d if d > 0 => format!("+{d}"),
        0 => "E".to_string(),
        d => d.to_string(),
    }
}

/// One-line digest of a single round.
#[must_use]
pub fn build_round_summary(round: &Round) -> RoundSummary {
    let total_par = round.total_par();
    let diff = round.total_score - total_par;

    let mut summary = RoundSummary {
        total_par,
        diff,
        diff_str: format_vs_par(diff),
        putts: 0,
        fairways: 0,
        fairway_total: 0,
        girs: 0,
        bunker_holes: 0,
        sand_saves: 0,
        feet_of_putts_made: 0.0,
    };

    for hole in &round.holes {
        summary.putts += hole.putts;
        if hole.par > 3 {
            if hole.fairway_hit {
                summary.fairways += 1;
            }
            if hole.fairway_direction.is_some() {
                summary.fairway_total += 1;
            }
        }
        if hole.gir {
            summary.girs += 1;
        }
        if hole.bunker {
            summary.bunker_holes += 1;
            if hole.par_or_better() {
                summary.sand_saves += 1;
            }
        }
        summary.feet_of_putts_made += hole.made_putt_distance().unwrap_or(0.0);
    }

    summary
}
