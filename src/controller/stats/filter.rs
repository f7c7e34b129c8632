use serde::Deserialize;
use std::str::FromStr;

use crate::model::{Round, RoundType};

/// Value used by the dashboard selects to mean "no restriction".
pub const ALL: &str = "all";

/// How many of the most recent rounds to keep.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(try_from = "RoundLimitRepr")]
pub enum RoundLimit {
    All,
    Recent(usize),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RoundLimitRepr {
    Count(usize),
    Text(String),
}

impl TryFrom<RoundLimitRepr> for RoundLimit {
    type Error = String;

    fn try_from(repr: RoundLimitRepr) -> Result<Self, Self::Error> {
        match repr {
            RoundLimitRepr::Count(n) => Ok(RoundLimit::Recent(n)),
            RoundLimitRepr::Text(s) => s.parse(),
        }
    }
}

impl FromStr for RoundLimit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(ALL) {
            return Ok(RoundLimit::All);
        }
        s.parse::<usize>()
            .map(RoundLimit::Recent)
            .map_err(|_| format!("round count must be a number or \"all\", got {s}"))
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(try_from = "String")]
pub enum RoundTypeFilter {
    All,
    Only(RoundType),
}

impl TryFrom<String> for RoundTypeFilter {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromStr for RoundTypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            Ok(RoundTypeFilter::All)
        } else {
            s.parse().map(RoundTypeFilter::Only)
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// Inclusive, `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// Inclusive, `YYYY-MM-DD`.
    pub end_date: Option<String>,
    pub count: Option<RoundLimit>,
    /// `"all"` behaves like `None`.
    pub course_id: Option<String>,
    pub round_type: Option<RoundTypeFilter>,
}

/// Applies course, round-type and date filters, then orders the survivors
/// newest first and keeps at most `count` of them. The input is untouched.
#[must_use]
pub fn filter_rounds<'a>(rounds: &'a [Round], opts: &FilterOptions) -> Vec<&'a Round> {
    let course_id = opts.course_id.as_deref().filter(|id| *id != ALL);
    let round_type = match opts.round_type {
        Some(RoundTypeFilter::Only(t)) => Some(t),
        Some(RoundTypeFilter::All) | None => None,
    };

    let mut filtered: Vec<&Round> = rounds
        .iter()
        .filter(|r| course_id.is_none_or(|id| r.course_id == id))
        .filter(|r| round_type.is_none_or(|t| r.round_type == t))
        .filter(|r| {
            opts.start_date
                .as_deref()
                .is_none_or(|start| r.date.as_str() >= start)
        })
        .filter(|r| {
            opts.end_date
                .as_deref()
                .is_none_or(|end| r.date.as_str() <= end)
        })
        .collect();

    filtered.sort_by(|a, b| b.date.cmp(&a.date));

    if let Some(RoundLimit::Recent(n)) = opts.count {
        filtered.truncate(n);
    }

    tracing::debug!(
        input = rounds.len(),
        kept = filtered.len(),
        "filtered rounds"
    );
    filtered
}
