//! Dominant-altitude estimation.
//!
//! Pure function over plain positions. No ECS dependency.

use flak_core::types::Position;

/// Aggregate for one altitude bin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AltitudeBin {
    pub count: u32,
    pub sum_altitude: f64,
}

impl AltitudeBin {
    pub fn mean(&self) -> f64 {
        self.sum_altitude / self.count as f64
    }
}

/// Mean altitude of the most populated `bin_size`-meter altitude bin.
///
/// Bins are keyed by `floor(z / bin_size)`. On equal counts the bin that
/// received the earliest sample wins. Returns `None` for an empty sample or
/// an unusable bin size.
pub fn estimate_dominant_altitude(positions: &[Position], bin_size: f64) -> Option<f64> {
    if !(bin_size.is_finite() && bin_size > 0.0) {
        return None;
    }

    // Few contacts per zone; a vector keeps first-seen order for the tie-break.
    let mut bins: Vec<(i64, AltitudeBin)> = Vec::new();
    for pos in positions.iter().filter(|p| p.z.is_finite()) {
        let key = (pos.z / bin_size).floor() as i64;
        match bins.iter_mut().find(|(k, _)| *k == key) {
            Some((_, bin)) => {
                bin.count += 1;
                bin.sum_altitude += pos.z;
            }
            None => bins.push((
                key,
                AltitudeBin {
                    count: 1,
                    sum_altitude: pos.z,
                },
            )),
        }
    }

    let mut best: Option<&AltitudeBin> = None;
    for (_, bin) in &bins {
        if best.is_none_or(|b| bin.count > b.count) {
            best = Some(bin);
        }
    }
    best.map(AltitudeBin::mean)
}
