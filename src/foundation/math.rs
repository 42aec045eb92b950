/// Clamp `v` into `[lo, hi]`, mapping NaN to `lo`.
pub(crate) fn clamp_or_lo(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() {
        return lo;
    }
    v.max(lo).min(hi)
}

/// Fraction of the way `v` sits through `[start, end]`, clamped to `[0, 1]`.
///
/// An empty or inverted window yields `1` once `v` reaches `start`.
pub(crate) fn window_fraction(v: f64, start: f64, end: f64) -> f64 {
    let span = end - start;
    if span <= 0.0 {
        return if v >= start { 1.0 } else { 0.0 };
    }
    clamp_or_lo((v - start) / span, 0.0, 1.0)
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
