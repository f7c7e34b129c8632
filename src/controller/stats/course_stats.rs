use ahash::RandomState;
use std::collections::HashMap;

use super::round_stats::compute_stats;
use super::sort_utils::{by_score_then_recent, rank_holes};
use crate::model::{
    ApproachResult, Course, CourseStats, FairwayDirection, FairwayMiss, GreenMiss,
    HoleDefinition, HoleResult, HoleStat, MatchResult, MatchSplit, Round, RoundRef,
    ScoringDistribution, mean1, pct, round1, round2,
};

/// Length of the hardest/easiest hole lists.
pub const RANKED_HOLES: usize = 3;

/// Everything recorded on one course hole across the rounds being rolled up.
#[derive(Default)]
struct HoleTally {
    entries: u32,
    strokes: i64,
    putts: u32,
    distribution: ScoringDistribution,

    fairway_opps: u32,
    fairway_hits: u32,
    missed_left: u32,
    missed_right: u32,

    approach_opps: u32,
    gir_hits: u32,
    long: u32,
    short: u32,
    left: u32,
    right: u32,

    match_holes: u32,
    wins: u32,
    draws: u32,
    losses: u32,
}

impl HoleTally {
    fn add(&mut self, hole: &HoleResult) {
        self.entries += 1;
        self.strokes += i64::from(hole.score);
        self.putts += hole.putts;
        self.distribution.record(hole.vs_par());

        if hole.par > 3 {
            if let Some(direction) = hole.fairway_direction {
                self.fairway_opps += 1;
                if hole.fairway_hit {
                    self.fairway_hits += 1;
                } else {
                    match direction {
                        FairwayDirection::Left => self.missed_left += 1,
                        FairwayDirection::Right => self.missed_right += 1,
                        FairwayDirection::Hit => {}
                    }
                }
            }
        }

        if let Some(approach) = hole.approach_result {
            self.approach_opps += 1;
            if hole.gir {
                self.gir_hits += 1;
            } else {
                match approach {
                    ApproachResult::Long => self.long += 1,
                    ApproachResult::Short => self.short += 1,
                    ApproachResult::Left => self.left += 1,
                    ApproachResult::Right => self.right += 1,
                    ApproachResult::Gir => {}
                }
            }
        }

        if let Some(result) = hole.match_result {
            self.match_holes += 1;
            match result {
                MatchResult::Win => self.wins += 1,
                MatchResult::Draw => self.draws += 1,
                MatchResult::Loss => self.losses += 1,
            }
        }
    }

    /// Left unless right misses strictly outnumber left ones. Holes without
    /// tee-shot data have no direction.
    fn fairway_miss_dir(&self) -> Option<FairwayMiss> {
        if self.fairway_opps == 0 {
            return None;
        }
        if self.missed_right > self.missed_left {
            Some(FairwayMiss::Right)
        } else {
            Some(FairwayMiss::Left)
        }
    }

    /// Most frequent green miss; ties go to the earlier of long, short,
    /// left, right.
    fn gir_miss_dir(&self) -> Option<GreenMiss> {
        let misses = [
            (GreenMiss::Long, self.long),
            (GreenMiss::Short, self.short),
            (GreenMiss::Left, self.left),
            (GreenMiss::Right, self.right),
        ];
        let mut most: Option<(GreenMiss, u32)> = None;
        for (dir, count) in misses {
            if count > most.map_or(0, |(_, c)| c) {
                most = Some((dir, count));
            }
        }
        most.map(|(dir, _)| dir)
    }

    fn finish(self, def: &HoleDefinition) -> HoleStat {
        let scoring_avg = self.strokes as f64 / f64::from(self.entries);
        HoleStat {
            number: def.number,
            par: def.par,
            rounds_with_data: self.entries,
            scoring_avg: Some(round2(scoring_avg)),
            vs_par: Some(round2(scoring_avg - f64::from(def.par))),
            fairway_pct: pct(self.fairway_hits, self.fairway_opps),
            fairway_miss_dir: self.fairway_miss_dir(),
            gir_pct: pct(self.gir_hits, self.approach_opps),
            gir_miss_dir: self.gir_miss_dir(),
            avg_putts: mean1(f64::from(self.putts), self.entries),
            match_play: (self.match_holes > 0).then(|| MatchSplit {
                win_pct: pct(self.wins, self.match_holes).unwrap_or(0),
                draw_pct: pct(self.draws, self.match_holes).unwrap_or(0),
                loss_pct: pct(self.losses, self.match_holes).unwrap_or(0),
            }),
            distribution: self.distribution.finish(),
        }
    }
}

fn round_ref(round: &Round) -> RoundRef {
    RoundRef {
        id: round.id.clone(),
        score: round.total_score,
        date: round.date.clone(),
    }
}

fn empty_course_stats(course_id: &str, course: &Course) -> CourseStats {
    CourseStats {
        course_id: course_id.to_string(),
        rounds_played: 0,
        total_par: course.total_par(),
        avg_score: None,
        vs_par: None,
        best_round: None,
        worst_round: None,
        course_stats: compute_stats::<Round>(&[]),
        hole_stats: course
            .holes
            .iter()
            .map(|def| HoleStat::empty(def.number, def.par))
            .collect(),
        hardest_holes: Vec::new(),
        easiest_holes: Vec::new(),
        matches_played: 0,
    }
}

/// Rolls every round played on `course_id` into course-level and per-hole
/// stats. Rounds of every type count here, casual and scramble included.
#[must_use]
pub fn compute_course_stats(course_id: &str, all_rounds: &[Round], course: &Course) -> CourseStats {
    let rounds: Vec<&Round> = all_rounds
        .iter()
        .filter(|r| r.course_id == course_id)
        .collect();
    if rounds.is_empty() {
        tracing::debug!(course_id, "no rounds played on course");
        return empty_course_stats(course_id, course);
    }

    let total_par = course.total_par();
    let total_strokes: i64 = rounds.iter().map(|r| i64::from(r.total_score)).sum();
    let avg_score = round1(total_strokes as f64 / rounds.len() as f64);

    let mut by_score = rounds.clone();
    by_score.sort_by(|a, b| by_score_then_recent(a, b));

    let mut tallies: HashMap<i32, HoleTally, RandomState> = HashMap::default();
    for round in &rounds {
        for hole in &round.holes {
            tallies.entry(hole.number).or_default().add(hole);
        }
    }

    let hole_stats: Vec<HoleStat> = course
        .holes
        .iter()
        .map(|def| match tallies.remove(&def.number) {
            Some(tally) => tally.finish(def),
            None => HoleStat::empty(def.number, def.par),
        })
        .collect();

    let matches_played = rounds
        .iter()
        .filter(|r| r.round_type.is_match_format() && r.has_match_results())
        .count() as u32;

    tracing::debug!(course_id, rounds = rounds.len(), "computed course stats");

    CourseStats {
        course_id: course_id.to_string(),
        rounds_played: rounds.len() as u32,
        total_par,
        avg_score: Some(avg_score),
        vs_par: Some(round1(avg_score - f64::from(total_par))),
        best_round: by_score.first().map(|r| round_ref(r)),
        worst_round: by_score.last().map(|r| round_ref(r)),
        course_stats: compute_stats(&rounds),
        hardest_holes: rank_holes(&hole_stats, true, RANKED_HOLES),
        easiest_holes: rank_holes(&hole_stats, false, RANKED_HOLES),
        hole_stats,
        matches_played,
    }
}
