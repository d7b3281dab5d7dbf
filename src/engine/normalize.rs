// src/engine/normalize.rs

/// Linear min-max rescale of `values` into `[lo, hi]`.
///
/// All-equal input maps every value to `lo`; empty input gives empty output.
/// Non-finite values land on `lo` and take no part in the min/max.
pub fn normalize(values: &[f64], lo: f64, hi: f64) -> Vec<f64> {
    debug_assert!(lo < hi, "normalize: empty target range [{lo}, {hi}]");

    let Some((min, max)) = min_max(values).filter(|(min, max)| max > min) else {
        return vec![lo; values.len()];
    };
    // halved so `max - min` stays finite near f64::MAX
    let span = max / 2.0 - min / 2.0;
    values
        .iter()
        .map(|&v| {
            if !v.is_finite() { return lo; }
            (lo + (v / 2.0 - min / 2.0) / span * (hi - lo)).clamp(lo, hi)
        })
        .collect()
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let mut finite = values.iter().copied().filter(|v| v.is_finite());
    let first = finite.next()?;
    Some(finite.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_ten_fifteen() {
        assert_eq!(normalize(&[5.0, 10.0, 15.0], 0.0, 100.0), vec![0.0, 50.0, 100.0]);
    }

    #[test]
    fn flat_input_collapses_to_lo() {
        assert_eq!(normalize(&[2.5, 2.5, 2.5], 80.0, 350.0), vec![80.0; 3]);
        assert_eq!(normalize(&[7.0], 80.0, 350.0), vec![80.0]);
    }

    #[test]
    fn empty_in_empty_out() {
        assert!(normalize(&[], 0.0, 1.0).is_empty());
    }

    #[test]
    fn huge_spread_stays_in_range() {
        let out = normalize(&[-1e308, 0.0, 1e308], 80.0, 350.0);
        assert_eq!(out, vec![80.0, 215.0, 350.0]);
    }

    #[test]
    fn non_finite_values_sit_at_lo() {
        let out = normalize(&[1.5, f64::INFINITY, f64::NAN, 2.5], 80.0, 350.0);
        assert_eq!(out, vec![80.0, 80.0, 80.0, 350.0]);
        assert_eq!(normalize(&[f64::NAN, f64::NAN], 0.0, 1.0), vec![0.0, 0.0]);
    }

    #[test]
    fn negative_values_and_order_preserved() {
        let out = normalize(&[-1.0, 3.0, 1.0], 80.0, 350.0);
        assert_eq!(out, vec![80.0, 350.0, 215.0]);
    }
}
