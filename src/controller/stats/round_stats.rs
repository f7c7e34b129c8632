use std::borrow::Borrow;

use crate::model::{
    ApproachDist, ApproachResult, FairwayDirection, FairwayDist, HoleResult, ParTypeScoring,
    PuttBucket, PuttingBreakdown, Round, ScoringByPar, ScoringDistribution, Stats, mean1,
    per_nine, pct, round1, round2,
};

/// First putts from at least this far are lag putts.
pub const LAG_PUTT_MIN_FEET: f64 = 20.0;

/// Upper bound (exclusive) and label of each make-rate band; the last band is
/// open-ended.
const PUTT_RANGES: [(f64, &str); 6] = [
    (3.0, "Inside 3 ft"),
    (6.0, "3-6 ft"),
    (10.0, "6-10 ft"),
    (15.0, "10-15 ft"),
    (20.0, "15-20 ft"),
    (f64::INFINITY, "20+ ft"),
];

fn putt_range_index(feet: f64) -> usize {
    PUTT_RANGES
        .iter()
        .position(|&(upper, _)| feet < upper)
        .unwrap_or(PUTT_RANGES.len() - 1)
}

#[derive(Default)]
struct ParTypeTally {
    strokes: i64,
    holes: u32,
}

impl ParTypeTally {
    fn add(&mut self, score: i32) {
        self.strokes += i64::from(score);
        self.holes += 1;
    }

    fn finish(&self, par: i32) -> Option<ParTypeScoring> {
        (self.holes > 0).then(|| {
            let avg = self.strokes as f64 / f64::from(self.holes);
            ParTypeScoring {
                avg: round2(avg),
                vs_par: round2(avg - f64::from(par)),
            }
        })
    }
}

/// Running counters for one pass over every hole of every round.
#[derive(Default)]
struct RoundTally {
    rounds: u32,
    score_total: i64,
    holes: u32,

    fairway_opps: u32,
    fairway_hits: u32,
    fairway_left: u32,
    fairway_right: u32,

    approach_opps: u32,
    gir_hits: u32,
    approach_long: u32,
    approach_short: u32,
    approach_left: u32,
    approach_right: u32,

    total_putts: u32,
    holes_with_putts: u32,
    one_putts: u32,
    two_putts: u32,
    three_putts: u32,
    more_putts: u32,

    penalties: u32,

    scramble_opps: u32,
    scramble_saves: u32,
    sand_opps: u32,
    sand_saves: u32,

    feet_made: f64,
    made_distances: u32,
    first_putt_feet: f64,
    first_distances: u32,
    putt_ranges: [(u32, u32); 6],
    any_putt_distance: bool,

    lag_opps: u32,
    lag_two_putt_or_better: u32,
    lag_leave_feet: f64,
    lag_leaves: u32,

    gir_holes: u32,
    gir_converted: u32,
    par_or_better: u32,
    bounce_opps: u32,
    bounce_backs: u32,

    par3: ParTypeTally,
    par4: ParTypeTally,
    par5: ParTypeTally,
    distribution: ScoringDistribution,
}

impl RoundTally {
    fn add_round(&mut self, round: &Round) {
        self.rounds += 1;
        self.score_total += i64::from(round.total_score);

        let mut prev: Option<&HoleResult> = None;
        for hole in &round.holes {
            self.add_hole(hole, prev);
            prev = Some(hole);
        }
    }

    fn add_hole(&mut self, hole: &HoleResult, prev: Option<&HoleResult>) {
        self.holes += 1;

        if hole.par > 3 {
            if let Some(direction) = hole.fairway_direction {
                self.fairway_opps += 1;
                if hole.fairway_hit {
                    self.fairway_hits += 1;
                }
                match direction {
                    FairwayDirection::Left => self.fairway_left += 1,
                    FairwayDirection::Right => self.fairway_right += 1,
                    FairwayDirection::Hit => {}
                }
            }
        }

        if let Some(approach) = hole.approach_result {
            self.approach_opps += 1;
            if hole.gir {
                self.gir_hits += 1;
            } else {
                match approach {
                    ApproachResult::Long => self.approach_long += 1,
                    ApproachResult::Short => self.approach_short += 1,
                    ApproachResult::Left => self.approach_left += 1,
                    ApproachResult::Right => self.approach_right += 1,
                    ApproachResult::Gir => {}
                }
                self.scramble_opps += 1;
                if hole.par_or_better() {
                    self.scramble_saves += 1;
                }
            }
        }

        self.total_putts += hole.putts;
        if hole.putts > 0 || hole.approach_result.is_some() {
            self.holes_with_putts += 1;
            match hole.putts {
                0 => {}
                1 => self.one_putts += 1,
                2 => self.two_putts += 1,
                3 => self.three_putts += 1,
                _ => self.more_putts += 1,
            }
        }

        self.penalties += hole.penalties;

        if hole.bunker {
            self.sand_opps += 1;
            if hole.par_or_better() {
                self.sand_saves += 1;
            }
        }

        self.add_putt_distances(hole);

        if hole.gir {
            self.gir_holes += 1;
            if hole.par_or_better() {
                self.gir_converted += 1;
            }
        }

        if hole.par_or_better() {
            self.par_or_better += 1;
        }

        match hole.par {
            3 => self.par3.add(hole.score),
            4 => self.par4.add(hole.score),
            p if p >= 5 => self.par5.add(hole.score),
            _ => {}
        }

        self.distribution.record(hole.vs_par());

        if let Some(prev) = prev {
            if prev.score > prev.par {
                self.bounce_opps += 1;
                if hole.par_or_better() {
                    self.bounce_backs += 1;
                }
            }
        }
    }

    fn add_putt_distances(&mut self, hole: &HoleResult) {
        if let Some(made) = hole.made_putt_distance() {
            self.feet_made += made;
            self.made_distances += 1;
        }
        if let Some(first) = hole.first_putt_distance() {
            self.first_putt_feet += first;
            self.first_distances += 1;

            if first >= LAG_PUTT_MIN_FEET {
                self.lag_opps += 1;
                if hole.putts <= 2 {
                    self.lag_two_putt_or_better += 1;
                }
                if let Some(leave) = hole.second_putt_distance() {
                    self.lag_leave_feet += leave;
                    self.lag_leaves += 1;
                }
            }
        }

        // the holed putt is the last recorded entry, same as `made_putt_distance`
        let made_idx = hole.putt_distances.iter().rposition(Option::is_some);
        for (idx, feet) in hole.putt_distances.iter().enumerate() {
            let Some(feet) = feet else { continue };
            self.any_putt_distance = true;
            let range = &mut self.putt_ranges[putt_range_index(*feet)];
            range.0 += 1;
            if Some(idx) == made_idx {
                range.1 += 1;
            }
        }
    }

    fn putt_make_rate(&self) -> Option<Vec<PuttBucket>> {
        if !self.any_putt_distance {
            return None;
        }
        Some(
            PUTT_RANGES
                .iter()
                .zip(self.putt_ranges.iter())
                .map(|(&(_, label), &(attempts, made))| PuttBucket {
                    label: label.to_string(),
                    attempts,
                    made,
                    pct: pct(made, attempts).unwrap_or(0),
                })
                .collect(),
        )
    }

    fn finish(self) -> Stats {
        let scoring_by_par = ScoringByPar {
            par3: self.par3.finish(3),
            par4: self.par4.finish(4),
            par5: self.par5.finish(5),
        };
        let fairway_pct = pct(self.fairway_hits, self.fairway_opps);
        let gir_pct = pct(self.gir_hits, self.approach_opps);

        Stats {
            avg_score: Some(round1(self.score_total as f64 / f64::from(self.rounds))),
            fairway_pct,
            gir_pct,
            avg_putts: Some(round1(f64::from(self.total_putts) / f64::from(self.rounds))),
            total_putts: Some(self.total_putts),
            scrambling_pct: pct(self.scramble_saves, self.scramble_opps),
            sand_save_pct: pct(self.sand_saves, self.sand_opps),
            feet_of_putts_made: (self.made_distances > 0).then_some(self.feet_made),
            avg_first_putt_dist: mean1(self.first_putt_feet, self.first_distances),
            fairway_dist: (self.fairway_opps > 0).then(|| FairwayDist {
                left: pct(self.fairway_left, self.fairway_opps).unwrap_or(0),
                hit: fairway_pct.unwrap_or(0),
                right: pct(self.fairway_right, self.fairway_opps).unwrap_or(0),
            }),
            approach_dist: (self.approach_opps > 0).then(|| ApproachDist {
                gir: gir_pct.unwrap_or(0),
                long: pct(self.approach_long, self.approach_opps).unwrap_or(0),
                short: pct(self.approach_short, self.approach_opps).unwrap_or(0),
                left: pct(self.approach_left, self.approach_opps).unwrap_or(0),
                right: pct(self.approach_right, self.approach_opps).unwrap_or(0),
            }),
            putting_breakdown: (self.holes_with_putts > 0).then(|| PuttingBreakdown {
                one_putt: pct(self.one_putts, self.holes_with_putts).unwrap_or(0),
                two_putt: pct(self.two_putts, self.holes_with_putts).unwrap_or(0),
                three_putt: pct(self.three_putts, self.holes_with_putts).unwrap_or(0),
                three_plus: pct(self.more_putts, self.holes_with_putts).unwrap_or(0),
            }),
            putts_per9: per_nine(f64::from(self.total_putts), self.holes),
            feet_made_per9: if self.made_distances > 0 {
                per_nine(self.feet_made, self.holes)
            } else {
                None
            },
            penalties_per9: per_nine(f64::from(self.penalties), self.holes),
            putt_make_rate: self.putt_make_rate(),
            lag_putt3_putt_avoid_pct: pct(self.lag_two_putt_or_better, self.lag_opps),
            lag_putt_avg_leave: mean1(self.lag_leave_feet, self.lag_leaves),
            lag_putt_count: Some(self.lag_opps),
            par_conversion_pct: pct(self.gir_converted, self.gir_holes),
            bogey_avoidance_pct: pct(self.par_or_better, self.holes),
            bounce_back_rate: pct(self.bounce_backs, self.bounce_opps),
            scoring_avg_par3: scoring_by_par.par3.map(|p| p.avg),
            scoring_avg_par4: scoring_by_par.par4.map(|p| p.avg),
            scoring_avg_par5: scoring_by_par.par5.map(|p| p.avg),
            scoring_by_par: Some(scoring_by_par),
            scoring_distribution: Some(self.distribution.finish()),
        }
    }
}

/// Rolls a set of already-filtered rounds into one metrics bundle.
///
/// An empty input yields `Stats::default()`, every field `None`.
#[must_use]
pub fn compute_stats<R: Borrow<Round>>(rounds: &[R]) -> Stats {
    if rounds.is_empty() {
        return Stats::default();
    }

    let mut tally = RoundTally::default();
    for round in rounds {
        let round: &Round = round.borrow();
        tally.add_round(round);
    }
    tracing::debug!(rounds = tally.rounds, holes = tally.holes, "computed round stats");
    tally.finish()
}
