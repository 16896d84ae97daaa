/// Map `v` from `[lo, hi]` onto `[0, 1]`, clamped. A degenerate range maps to a step at `lo`.
pub(crate) fn remap_unit(v: f64, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        return if v >= lo { 1.0 } else { 0.0 };
    }
    ((v - lo) / (hi - lo)).clamp(0.0, 1.0)
}

/// Move `current` toward `target` by `factor` of the remaining distance.
pub(crate) fn approach(current: f64, target: f64, factor: f64) -> f64 {
    current + (target - current) * factor
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub(crate) fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
