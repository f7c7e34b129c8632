use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TeeColor {
    Red,
    White,
    Blue,
}

impl FromStr for TeeColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(TeeColor::Red),
            "white" => Ok(TeeColor::White),
            "blue" => Ok(TeeColor::Blue),
            other => Err(format!("unknown tee color: {other}")),
        }
    }
}

/// Reads an optional tee color, dropping values older app versions wrote
/// that no longer name a tee box (`"middle"`, `""`).
///
/// # Errors
///
/// Will return `Err` if the value is neither a string nor null
pub fn lenient_tee_color<'de, D>(deserializer: D) -> Result<Option<TeeColor>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value.parse() {
        Ok(color) => Some(color),
        Err(err) => {
            tracing::debug!(%err, "ignoring tee color");
            None
        }
    }))
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoleDefinition {
    pub number: i32,
    pub par: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tee {
    #[serde(default, deserialize_with = "lenient_tee_color")]
    pub color: Option<TeeColor>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub slope: Option<u32>,
    #[serde(default)]
    pub total_yardage: Option<u32>,
    /// Parallel to `Course::holes`.
    #[serde(default)]
    pub yardages: Vec<u32>,
    #[serde(default)]
    pub handicaps: Vec<u32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Tees {
    #[serde(default)]
    pub red: Option<Tee>,
    #[serde(default)]
    pub white: Option<Tee>,
    #[serde(default)]
    pub blue: Option<Tee>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: String,
    pub num_holes: u32,
    pub holes: Vec<HoleDefinition>,
    #[serde(default)]
    pub tees: Tees,
}

impl Course {
    #[must_use]
    pub fn total_par(&self) -> i32 {
        self.holes.iter().map(|h| h.par).sum()
    }

    #[must_use]
    pub fn tee(&self, color: TeeColor) -> Option<&Tee> {
        match color {
            TeeColor::Red => self.tees.red.as_ref(),
            TeeColor::White => self.tees.white.as_ref(),
            TeeColor::Blue => self.tees.blue.as_ref(),
        }
    }
}
