// File: crates/plot-core/src/grid.rs
// Summary: Numeric sequence helpers (linspace/arange), array magnitude, and tick layout.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Half-open range `[start, stop)` in increments of `step`. Empty for a non-positive step.
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || stop <= start { return Vec::new(); }
    let n = ((stop - start) / step).ceil() as usize;
    (0..n).map(|i| start + step * i as f64).collect()
}

/// `[start, stop]` inclusive of `stop`, using the half-step overshoot so rounding
/// never drops the last sample.
pub fn arange_inclusive(start: f64, stop: f64, step: f64) -> Vec<f64> {
    arange(start, stop + step / 2.0, step)
}

/// Largest absolute value across several arrays; `None` if they are all empty.
pub fn abs_max<'a, I>(arrays: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    arrays
        .into_iter()
        .flat_map(|a| a.iter())
        .map(|v| v.abs())
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
}

/// Round tick positions covering `[min, max]` with roughly `target` intervals,
/// stepping by 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min || target == 0 {
        return Vec::new();
    }
    let t = target as f64;
    let span = max - min;
    let raw = if span.is_finite() { span / t } else { max / t - min / t };
    let mag = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * mag)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * mag);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).map(|v| if v.abs() < step * 1e-9 { 0.0 } else { v }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arange_matches_half_step_idiom() {
        let xs = arange_inclusive(0.0, 1.0, 0.1);
        assert_eq!(xs.len(), 11);
        assert!((xs[10] - 1.0).abs() < 1e-12);
        assert!(arange(0.0, 1.0, 0.0).is_empty());
        assert_eq!(arange(0.0, 3.0, 1.0), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn ticks_over_overflowing_span_are_finite() {
        let ticks = nice_ticks(-1e308, 1e308, 6);
        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|t| t.is_finite()));
        assert!(ticks.contains(&0.0));
    }

    #[test]
    fn linspace_endpoints() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn abs_max_over_arrays() {
        let a = [1.0, -7.5, 2.0];
        let b = [3.0];
        assert_eq!(abs_max([&a[..], &b[..]]), Some(7.5));
        assert_eq!(abs_max(Vec::<&[f64]>::new()), None);
    }

    #[test]
    fn nice_ticks_are_round() {
        assert_eq!(nice_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        let t = nice_ticks(-1.0, 1.0, 4);
        assert_eq!(t, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert!(nice_ticks(1.0, 1.0, 5).is_empty());
    }
}
