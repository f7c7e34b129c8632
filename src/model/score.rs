use serde::{Deserialize, Serialize};

/// Scoring-distribution bucket for one hole, from strokes relative to par.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ScoreBucket {
    /// Eagle or better.
    Eagle,
    Birdie,
    Par,
    Bogey,
    Double,
    /// Triple bogey or worse.
    TriplePlus,
}

impl ScoreBucket {
    #[must_use]
    pub fn from_vs_par(diff: i32) -> Self {
        match diff {
            i32::MIN..=-2 => ScoreBucket::Eagle,
            -1 => ScoreBucket::Birdie,
            0 => ScoreBucket::Par,
            1 => ScoreBucket::Bogey,
            2 => ScoreBucket::Double,
            _ => ScoreBucket::TriplePlus,
        }
    }
}

impl From<i32> for ScoreBucket {
    fn from(value: i32) -> Self {
        Self::from_vs_par(value)
    }
}

/// Per-bucket counts plus each bucket's share of `total`, as whole percents.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoringDistribution {
    pub eagle: u32,
    pub birdie: u32,
    pub par: u32,
    pub bogey: u32,
    pub double: u32,
    pub triple: u32,
    pub total: u32,
    pub eagle_pct: u32,
    pub birdie_pct: u32,
    pub par_pct: u32,
    pub bogey_pct: u32,
    pub double_pct: u32,
    pub triple_pct: u32,
}

impl ScoringDistribution {
    pub fn record(&mut self, diff: i32) {
        let slot = match ScoreBucket::from_vs_par(diff) {
            ScoreBucket::Eagle => &mut self.eagle,
            ScoreBucket::Birdie => &mut self.birdie,
            ScoreBucket::Par => &mut self.par,
            ScoreBucket::Bogey => &mut self.bogey,
            ScoreBucket::Double => &mut self.double,
            ScoreBucket::TriplePlus => &mut self.triple,
        };
        *slot += 1;
        self.total += 1;
    }

    /// Fills the percentage fields from the counts. Percentages stay 0 when
    /// nothing was recorded.
    #[must_use]
    pub fn finish(mut self) -> Self {
        let total = self.total;
        let pct = |count: u32| super::pct(count, total).unwrap_or(0);
        self.eagle_pct = pct(self.eagle);
        self.birdie_pct = pct(self.birdie);
        self.par_pct = pct(self.par);
        self.bogey_pct = pct(self.bogey);
        self.double_pct = pct(self.double);
        self.triple_pct = pct(self.triple);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_cover_every_difference() {
        assert_eq!(ScoreBucket::from(-3), ScoreBucket::Eagle);
        assert_eq!(ScoreBucket::from(-2), ScoreBucket::Eagle);
        assert_eq!(ScoreBucket::from(-1), ScoreBucket::Birdie);
        assert_eq!(ScoreBucket::from(0), ScoreBucket::Par);
        assert_eq!(ScoreBucket::from(1), ScoreBucket::Bogey);
        assert_eq!(ScoreBucket::from(2), ScoreBucket::Double);
        assert_eq!(ScoreBucket::from(3), ScoreBucket::TriplePlus);
        assert_eq!(ScoreBucket::from(7), ScoreBucket::TriplePlus);
    }

    #[test]
    fn distribution_percentages() {
        let mut dist = ScoringDistribution::default();
        for diff in [0, 0, 1, -1] {
            dist.record(diff);
        }
        let dist = dist.finish();
        assert_eq!(dist.total, 4);
        assert_eq!(dist.par_pct, 50);
        assert_eq!(dist.bogey_pct, 25);
        assert_eq!(dist.eagle_pct, 0);
    }
}
