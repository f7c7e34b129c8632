use serde::{Deserialize, Serialize};

use super::course::{TeeColor, lenient_tee_color};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FairwayDirection {
    Left,
    Hit,
    Right,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ApproachResult {
    Gir,
    Long,
    Short,
    Left,
    Right,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

impl MatchResult {
    /// Match-play points for one hole: a halved hole is worth half a point.
    #[must_use]
    pub fn points(self) -> f64 {
        match self {
            MatchResult::Win => 1.0,
            MatchResult::Draw => 0.5,
            MatchResult::Loss => 0.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RoundType {
    #[default]
    Normal,
    League,
    MatchPlay,
    Casual,
    Scramble,
}

impl RoundType {
    #[must_use]
    pub fn counts_for_handicap(self) -> bool {
        matches!(
            self,
            RoundType::Normal | RoundType::League | RoundType::MatchPlay
        )
    }

    #[must_use]
    pub fn is_match_format(self) -> bool {
        matches!(self, RoundType::League | RoundType::MatchPlay)
    }
}

impl std::str::FromStr for RoundType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "normal" => Ok(RoundType::Normal),
            "league" => Ok(RoundType::League),
            "match_play" => Ok(RoundType::MatchPlay),
            "casual" => Ok(RoundType::Casual),
            "scramble" => Ok(RoundType::Scramble),
            other => Err(format!("unknown round type: {other}")),
        }
    }
}

/// One hole within one played round.
///
/// `putt_distances` is ordered first putt to last putt, in feet; the final
/// entry is the putt that was holed. Entries may be `None` when the player
/// skipped recording a distance.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", from = "HoleResultRecord")]
pub struct HoleResult {
    pub number: i32,
    pub par: i32,
    pub score: i32,
    pub putts: u32,
    pub putt_distances: Vec<Option<f64>>,
    pub penalties: u32,
    pub fairway_hit: bool,
    pub fairway_direction: Option<FairwayDirection>,
    pub gir: bool,
    pub approach_result: Option<ApproachResult>,
    pub bunker: bool,
    pub match_result: Option<MatchResult>,
}

/// Wire shape of a hole as written by older and newer app versions. Older
/// saves flag bunker holes as `sandSave`; both keys fold into `bunker`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HoleResultRecord {
    number: i32,
    par: i32,
    score: i32,
    #[serde(default)]
    putts: Option<u32>,
    #[serde(default)]
    putt_distances: Option<Vec<Option<f64>>>,
    #[serde(default)]
    penalties: Option<u32>,
    #[serde(default)]
    fairway_hit: Option<bool>,
    #[serde(default)]
    fairway_direction: Option<FairwayDirection>,
    #[serde(default)]
    gir: Option<bool>,
    #[serde(default)]
    approach_result: Option<ApproachResult>,
    #[serde(default)]
    bunker: Option<bool>,
    #[serde(default)]
    sand_save: Option<bool>,
    #[serde(default)]
    match_result: Option<MatchResult>,
}

impl From<HoleResultRecord> for HoleResult {
    fn from(rec: HoleResultRecord) -> Self {
        HoleResult {
            number: rec.number,
            par: rec.par,
            score: rec.score,
            putts: rec.putts.unwrap_or(0),
            putt_distances: rec.putt_distances.unwrap_or_default(),
            penalties: rec.penalties.unwrap_or(0),
            fairway_hit: rec.fairway_hit.unwrap_or(false),
            fairway_direction: rec.fairway_direction,
            gir: rec.gir.unwrap_or(false),
            approach_result: rec.approach_result,
            bunker: rec.bunker.unwrap_or(false) || rec.sand_save.unwrap_or(false),
            match_result: rec.match_result,
        }
    }
}

impl HoleResult {
    #[must_use]
    pub fn vs_par(&self) -> i32 {
        self.score - self.par
    }

    #[must_use]
    pub fn par_or_better(&self) -> bool {
        self.score <= self.par
    }

    /// First recorded putt distance, skipping unrecorded entries.
    #[must_use]
    pub fn first_putt_distance(&self) -> Option<f64> {
        self.putt_distances.iter().flatten().copied().next()
    }

    /// Distance of the holed putt: the last recorded entry.
    #[must_use]
    pub fn made_putt_distance(&self) -> Option<f64> {
        self.putt_distances.iter().rev().flatten().copied().next()
    }

    /// Recorded distance that followed the first recorded putt, i.e. what a
    /// lag putt left.
    #[must_use]
    pub fn second_putt_distance(&self) -> Option<f64> {
        self.putt_distances.iter().flatten().copied().nth(1)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: String,
    pub course_id: String,
    #[serde(default)]
    pub course_name: String,
    pub num_holes: u32,
    /// ISO-8601 `YYYY-MM-DD`; compared lexically.
    pub date: String,
    #[serde(default, deserialize_with = "lenient_tee_color")]
    pub tees: Option<TeeColor>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub round_type: RoundType,
    #[serde(default)]
    pub course_rating: Option<f64>,
    #[serde(default)]
    pub slope_rating: Option<u32>,
    pub total_score: i32,
    pub holes: Vec<HoleResult>,
}

impl Round {
    #[must_use]
    pub fn total_par(&self) -> i32 {
        self.holes.iter().map(|h| h.par).sum()
    }

    #[must_use]
    pub fn has_match_results(&self) -> bool {
        self.holes.iter().any(|h| h.match_result.is_some())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hole_json(extra: &str) -> String {
        format!(r#"{{ "number": 1, "par": 4, "score": 4 {extra} }}"#)
    }

    #[test]
    fn legacy_sand_save_folds_into_bunker() {
        let hole: HoleResult = serde_json::from_str(&hole_json(r#", "sandSave": true"#)).unwrap();
        assert!(hole.bunker);

        let hole: HoleResult =
            serde_json::from_str(&hole_json(r#", "bunker": false, "sandSave": true"#)).unwrap();
        assert!(hole.bunker);
    }

    #[test]
    fn missing_numbers_default_to_zero() {
        let hole: HoleResult = serde_json::from_str(&hole_json(r#", "putts": null"#)).unwrap();
        assert_eq!(hole.putts, 0);
        assert_eq!(hole.penalties, 0);
        assert!(hole.putt_distances.is_empty());
        assert_eq!(hole.approach_result, None);
    }

    #[test]
    fn putt_distance_accessors_skip_unrecorded() {
        let hole: HoleResult =
            serde_json::from_str(&hole_json(r#", "puttDistances": [null, 24, null, 3, null]"#))
                .unwrap();
        assert_eq!(hole.first_putt_distance(), Some(24.0));
        assert_eq!(hole.second_putt_distance(), Some(3.0));
        assert_eq!(hole.made_putt_distance(), Some(3.0));
    }

    #[test]
    fn unknown_tees_load_as_none() {
        let json = |tees: &str| {
            format!(
                r#"{{ "id": "r1", "courseId": "c1", "numHoles": 0, "date": "2025-06-15",
                     "tees": {tees}, "totalScore": 0, "holes": [] }}"#
            )
        };
        let round: Round = serde_json::from_str(&json(r#""middle""#)).unwrap();
        assert_eq!(round.tees, None);
        let round: Round = serde_json::from_str(&json(r#""""#)).unwrap();
        assert_eq!(round.tees, None);
        let round: Round = serde_json::from_str(&json("null")).unwrap();
        assert_eq!(round.tees, None);
        let round: Round = serde_json::from_str(&json(r#""Blue""#)).unwrap();
        assert_eq!(round.tees, Some(TeeColor::Blue));
    }

    #[test]
    fn round_type_defaults_to_normal() {
        let json = r#"{ "id": "r1", "courseId": "c1", "numHoles": 0, "date": "2025-06-15",
                        "roundType": null, "totalScore": 0, "holes": [] }"#;
        let round: Round = serde_json::from_str(json).unwrap();
        assert_eq!(round.round_type, RoundType::Normal);
        assert!(round.round_type.counts_for_handicap());
    }
}
