/// Rounds half away from zero to `places` decimals. The scaled value is
/// rounded, so a binary tie such as `0.35` goes up to `0.4` where a
/// fixed-point string formatter would print `0.3`.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[must_use]
pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

#[must_use]
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Whole-number percentage of `hits` over `opportunities`, or `None` when
/// there were no opportunities.
#[must_use]
pub fn pct(hits: u32, opportunities: u32) -> Option<u32> {
    if opportunities == 0 {
        return None;
    }
    Some((f64::from(hits) * 100.0 / f64::from(opportunities)).round() as u32)
}

/// Mean to one decimal, `None` for an empty sample.
#[must_use]
pub fn mean1(total: f64, count: u32) -> Option<f64> {
    (count > 0).then(|| round1(total / f64::from(count)))
}

/// Normalizes a total to a nine-hole rate, one decimal.
#[must_use]
pub fn per_nine(total: f64, holes: u32) -> Option<f64> {
    (holes > 0).then(|| round1(total / f64::from(holes) * 9.0))
}
