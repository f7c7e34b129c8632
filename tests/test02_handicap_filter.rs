mod common;

use common::{make_round, rated_round, round_with};
use rusty_golf_stats::model::{Round, RoundType};
use rusty_golf_stats::stats::{
    FilterOptions, RoundLimit, RoundTypeFilter, build_round_summary, compute_handicap,
    filter_rounds, score_differential,
};

fn three_normal_rounds() -> Vec<Round> {
    vec![
        rated_round("1", 40, RoundType::Normal),
        rated_round("2", 38, RoundType::Normal),
        rated_round("3", 42, RoundType::Normal),
    ]
}

#[test]
fn test02_needs_three_eligible_rounds() {
    assert_eq!(compute_handicap::<Round>(&[]), None);
    assert_eq!(compute_handicap(&[make_round()]), None);
    assert_eq!(compute_handicap(&[make_round(), make_round()]), None);
}

#[test]
fn test02_unrated_rounds_are_skipped() {
    let rounds = vec![
        Round {
            course_rating: None,
            ..make_round()
        },
        Round {
            slope_rating: None,
            ..make_round()
        },
        Round {
            course_rating: None,
            slope_rating: None,
            ..make_round()
        },
    ];
    assert_eq!(compute_handicap(&rounds), None);
}

#[test]
fn test02_three_rounds_use_best_differential() {
    let rounds = three_normal_rounds();
    let diffs: Vec<Option<f64>> = rounds.iter().map(score_differential).collect();
    assert_eq!(diffs, vec![Some(4.5), Some(2.5), Some(6.5)]);
    assert_eq!(compute_handicap(&rounds), Some(2.4));
}

#[test]
fn test02_four_rounds_use_best_two() {
    let mut rounds = three_normal_rounds();
    rounds.push(rated_round("4", 39, RoundType::Normal));
    // (2.5 + 3.5) / 2 * 0.96 = 2.88
    assert_eq!(compute_handicap(&rounds), Some(2.9));
}

#[test]
fn test02_casual_and_scramble_rounds_do_not_count() {
    let mut rounds = three_normal_rounds();
    rounds.push(rated_round("4", 30, RoundType::Casual));
    assert_eq!(compute_handicap(&rounds), Some(2.4));

    let rounds = vec![
        rated_round("1", 40, RoundType::Normal),
        rated_round("2", 38, RoundType::Normal),
        rated_round("3", 42, RoundType::Scramble),
    ];
    assert_eq!(compute_handicap(&rounds), None);
}

#[test]
fn test02_league_and_match_play_rounds_count() {
    let rounds = vec![
        rated_round("1", 40, RoundType::League),
        rated_round("2", 38, RoundType::MatchPlay),
        rated_round("3", 42, RoundType::Normal),
    ];
    assert_eq!(compute_handicap(&rounds), Some(2.4));
}

#[test]
fn test02_missing_round_type_reads_as_normal() -> Result<(), Box<dyn std::error::Error>> {
    let mut json = serde_json::to_value(make_round())?;
    json.as_object_mut()
        .ok_or("round is an object")?
        .remove("roundType");
    let round: Round = serde_json::from_value(json)?;
    assert_eq!(round.round_type, RoundType::Normal);
    assert_eq!(compute_handicap(&[round.clone(), round.clone(), round]), Some(4.3));
    Ok(())
}

#[test]
fn test02_slope_scales_differential() {
    let rounds: Vec<Round> = [85, 82, 88]
        .into_iter()
        .map(|score| Round {
            total_score: score,
            course_rating: Some(72.0),
            slope_rating: Some(130),
            ..make_round()
        })
        .collect();
    // 10 * 113 / 130 * 0.96
    assert_eq!(compute_handicap(&rounds), Some(8.3));
}

#[test]
fn test02_zero_slope_is_not_rated() {
    let round = Round {
        slope_rating: Some(0),
        ..make_round()
    };
    assert_eq!(score_differential(&round), None);
}

#[test]
fn test02_accepts_borrowed_rounds() {
    let rounds = three_normal_rounds();
    let refs: Vec<&Round> = rounds.iter().collect();
    assert_eq!(compute_handicap(&refs), Some(2.4));
}

fn dated_rounds() -> Vec<Round> {
    vec![
        round_with("1", "2025-01-10", 40),
        round_with("2", "2025-03-15", 40),
        round_with("3", "2025-06-20", 40),
        round_with("4", "2025-09-05", 40),
        round_with("5", "2025-12-01", 40),
    ]
}

fn ids(rounds: &[&Round]) -> Vec<String> {
    rounds.iter().map(|r| r.id.clone()).collect()
}

#[test]
fn test02_no_filter_sorts_newest_first() {
    let rounds = dated_rounds();
    let result = filter_rounds(&rounds, &FilterOptions::default());
    assert_eq!(ids(&result), vec!["5", "4", "3", "2", "1"]);
}

#[test]
fn test02_date_bounds_are_inclusive() {
    let rounds = dated_rounds();

    let opts = FilterOptions {
        start_date: Some("2025-06-20".to_string()),
        ..FilterOptions::default()
    };
    assert_eq!(ids(&filter_rounds(&rounds, &opts)), vec!["5", "4", "3"]);

    let opts = FilterOptions {
        end_date: Some("2025-06-20".to_string()),
        ..FilterOptions::default()
    };
    assert_eq!(ids(&filter_rounds(&rounds, &opts)), vec!["3", "2", "1"]);

    let opts = FilterOptions {
        start_date: Some("2025-03-01".to_string()),
        end_date: Some("2025-09-30".to_string()),
        ..FilterOptions::default()
    };
    assert_eq!(ids(&filter_rounds(&rounds, &opts)), vec!["4", "3", "2"]);
}

#[test]
fn test02_count_keeps_most_recent() {
    let rounds = dated_rounds();

    let opts = FilterOptions {
        count: Some(RoundLimit::Recent(3)),
        ..FilterOptions::default()
    };
    assert_eq!(ids(&filter_rounds(&rounds, &opts)), vec!["5", "4", "3"]);

    let opts = FilterOptions {
        count: Some(RoundLimit::All),
        ..FilterOptions::default()
    };
    assert_eq!(filter_rounds(&rounds, &opts).len(), 5);

    let opts = FilterOptions {
        start_date: Some("2025-01-01".to_string()),
        count: Some(RoundLimit::Recent(2)),
        ..FilterOptions::default()
    };
    assert_eq!(ids(&filter_rounds(&rounds, &opts)), vec!["5", "4"]);
}

#[test]
fn test02_course_and_round_type_filters() {
    let mut rounds = dated_rounds();
    rounds[0].course_id = "c2".to_string();
    rounds[1].round_type = RoundType::League;
    rounds[2].round_type = RoundType::Casual;

    let opts = FilterOptions {
        course_id: Some("c1".to_string()),
        ..FilterOptions::default()
    };
    assert_eq!(ids(&filter_rounds(&rounds, &opts)), vec!["5", "4", "3", "2"]);

    let opts = FilterOptions {
        course_id: Some("all".to_string()),
        round_type: Some(RoundTypeFilter::All),
        ..FilterOptions::default()
    };
    assert_eq!(filter_rounds(&rounds, &opts).len(), 5);

    let opts = FilterOptions {
        round_type: Some(RoundTypeFilter::Only(RoundType::Normal)),
        ..FilterOptions::default()
    };
    assert_eq!(ids(&filter_rounds(&rounds, &opts)), vec!["5", "4", "1"]);
}

#[test]
fn test02_filter_leaves_input_alone() {
    let rounds = dated_rounds();
    let before = rounds.clone();
    let opts = FilterOptions {
        count: Some(RoundLimit::Recent(2)),
        ..FilterOptions::default()
    };
    let result = filter_rounds(&rounds, &opts);
    assert_eq!(result.len(), 2);
    assert_eq!(rounds, before);
}

#[test]
fn test02_filter_options_from_json() -> Result<(), Box<dyn std::error::Error>> {
    let opts: FilterOptions = serde_json::from_str(
        r#"{ "startDate": "2025-03-01", "count": "2", "courseId": "all", "roundType": "league" }"#,
    )?;
    assert_eq!(opts.count, Some(RoundLimit::Recent(2)));
    assert_eq!(
        opts.round_type,
        Some(RoundTypeFilter::Only(RoundType::League))
    );
    Ok(())
}

#[test]
fn test02_round_summary() {
    let summary = build_round_summary(&make_round());
    assert_eq!(summary.total_par, 36);
    assert_eq!(summary.diff, 4);
    assert_eq!(summary.diff_str, "+4");
    assert_eq!(summary.putts, 17);
    assert_eq!(summary.fairways, 4);
    assert_eq!(summary.fairway_total, 7);
    assert_eq!(summary.girs, 5);
    assert_eq!(summary.feet_of_putts_made, 0.0);
    assert_eq!((summary.bunker_holes, summary.sand_saves), (0, 0));

    let even = build_round_summary(&Round {
        total_score: 36,
        ..make_round()
    });
    assert_eq!((even.diff, even.diff_str.as_str()), (0, "E"));

    let under = build_round_summary(&Round {
        total_score: 34,
        ..make_round()
    });
    assert_eq!((under.diff, under.diff_str.as_str()), (-2, "-2"));
}

#[test]
fn test02_round_summary_putts_and_bunkers() {
    let mut round = make_round();
    round.holes[0].putt_distances = vec![Some(20.0), Some(3.0)];
    round.holes[6].putt_distances = vec![Some(15.0)];
    round.holes[0].bunker = true;
    round.holes[1].bunker = true;

    let summary = build_round_summary(&round);
    assert_eq!(summary.feet_of_putts_made, 18.0);
    assert_eq!(summary.bunker_holes, 2);
    assert_eq!(summary.sand_saves, 1);
}
