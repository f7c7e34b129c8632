#![allow(dead_code)]

use rusty_golf_stats::model::{
    ApproachResult, AppData, Course, FairwayDirection, HoleDefinition, HoleResult, MatchResult,
    Round, RoundType, TeeColor, Tees,
};

pub const EXPORT_JSON: &str = include_str!("../data/export.json");

pub const PARS: [i32; 9] = [4, 3, 5, 4, 4, 3, 4, 5, 4];

/// A played hole; `fairway_hit` and `gir` follow from the recorded directions.
pub fn make_hole(
    number: i32,
    par: i32,
    score: i32,
    putts: u32,
    fairway: Option<FairwayDirection>,
    approach: ApproachResult,
) -> HoleResult {
    HoleResult {
        number,
        par,
        score,
        putts,
        putt_distances: Vec::new(),
        penalties: 0,
        fairway_hit: fairway == Some(FairwayDirection::Hit),
        fairway_direction: fairway,
        gir: approach == ApproachResult::Gir,
        approach_result: Some(approach),
        bunker: false,
        match_result: None,
    }
}

/// Nine holes, par 36, shot 40 with 17 putts. Bogeys on 1, 5, 6 and 8.
pub fn base_holes() -> Vec<HoleResult> {
    use ApproachResult::{Gir, Long, Right, Short};
    use FairwayDirection::{Hit, Left, Right as RightOfFairway};

    vec![
        make_hole(1, 4, 5, 2, Some(Hit), Short),
        make_hole(2, 3, 3, 1, None, Gir),
        make_hole(3, 5, 5, 2, Some(Left), Gir),
        make_hole(4, 4, 4, 2, Some(Hit), Gir),
        make_hole(5, 4, 5, 3, Some(RightOfFairway), Right),
        make_hole(6, 3, 4, 2, None, Long),
        make_hole(7, 4, 4, 1, Some(Hit), Gir),
        make_hole(8, 5, 6, 2, Some(Left), Short),
        make_hole(9, 4, 4, 2, Some(Hit), Gir),
    ]
}

pub fn make_round() -> Round {
    Round {
        id: "1".to_string(),
        course_id: "c1".to_string(),
        course_name: "Test Course".to_string(),
        num_holes: 9,
        date: "2025-06-15".to_string(),
        tees: Some(TeeColor::White),
        round_type: RoundType::Normal,
        course_rating: Some(35.5),
        slope_rating: Some(113),
        total_score: 40,
        holes: base_holes(),
    }
}

pub fn round_with(id: &str, date: &str, total_score: i32) -> Round {
    Round {
        id: id.to_string(),
        date: date.to_string(),
        total_score,
        ..make_round()
    }
}

pub fn rated_round(id: &str, total_score: i32, round_type: RoundType) -> Round {
    Round {
        round_type,
        ..round_with(id, "2025-06-15", total_score)
    }
}

pub fn with_match_results(mut round: Round, results: &[MatchResult]) -> Round {
    for (hole, result) in round.holes.iter_mut().zip(results) {
        hole.match_result = Some(*result);
    }
    round
}

pub fn make_course() -> Course {
    Course {
        id: "c1".to_string(),
        name: "Test Course".to_string(),
        location: "Test City, TS".to_string(),
        num_holes: 9,
        holes: PARS
            .iter()
            .zip(1..)
            .map(|(&par, number)| HoleDefinition { number, par })
            .collect(),
        tees: Tees::default(),
    }
}

pub fn export() -> AppData {
    AppData::from_json_str(EXPORT_JSON).expect("fixture parses")
}
