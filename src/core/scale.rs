use crate::error::{ChartError, ChartResult};

/// Linear mapping from a numeric domain onto a pixel range.
///
/// Every computation works on halved operands, so any finite domain (up to
/// `-f64::MAX..f64::MAX`) maps without overflowing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Builds a non-flat scale around `[min, max]`.
    ///
    /// A flat range (or one too narrow to divide by, e.g. `0..5e-324`) is
    /// widened by `max(0.5, |v| * 4 * EPSILON)` on each side, which always
    /// moves at least two ulps away from `v`. Sides that would overflow stay
    /// pinned at the data value.
    pub fn covering(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ChartError::InvalidData(
                "scale range must be finite and ordered".to_owned(),
            ));
        }
        if (max / 2.0 - min / 2.0).is_normal() {
            return Self::new(min, max);
        }

        let pad = (min.abs().max(max.abs()) * f64::EPSILON * 4.0).max(0.5);
        let start = Some(min - pad).filter(|value| value.is_finite()).unwrap_or(min);
        let end = Some(max + pad).filter(|value| value.is_finite()).unwrap_or(max);
        Self::new(start, end)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Maps `value` so that `domain_start` lands on `range_start` and
    /// `domain_end` on `range_end`. Passing a reversed range inverts the axis.
    pub fn map(self, value: f64, range_start: f64, range_end: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "pixel range must be finite".to_owned(),
            ));
        }

        let half_span = self.domain_end / 2.0 - self.domain_start / 2.0;
        let normalized = (value / 2.0 - self.domain_start / 2.0) / half_span;
        let pixel = range_start + normalized * (range_end - range_start);
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "value {value} maps outside the representable pixel range"
            )));
        }
        Ok(pixel)
    }

    /// Returns `count` evenly spaced domain values from start to end inclusive.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![self.domain_start],
            _ => {
                let last = (count - 1) as f64;
                (0..count)
                    .map(|i| {
                        let t = i as f64 / last;
                        self.domain_start * (1.0 - t) + self.domain_end * t
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn map_on_reversed_range() {
        let scale = LinearScale::new(0.0, 10.0).expect("scale");
        let px = scale.map(2.5, 100.0, 0.0).expect("map");
        assert!((px - 75.0).abs() <= 1e-9);
    }

    #[test]
    fn rejects_flat_domain() {
        assert!(LinearScale::new(3.0, 3.0).is_err());
    }

    #[test]
    fn ticks_cover_domain_inclusively() {
        let scale = LinearScale::new(0.0, 4.0).expect("scale");
        assert_eq!(scale.ticks(5), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert!(scale.ticks(0).is_empty());
    }

    #[test]
    fn full_finite_domain_maps_without_overflow() {
        let scale = LinearScale::new(-f64::MAX, f64::MAX).expect("scale");
        assert_eq!(scale.map(-f64::MAX, 0.0, 100.0).expect("min"), 0.0);
        assert_eq!(scale.map(f64::MAX, 0.0, 100.0).expect("max"), 100.0);
        assert_eq!(scale.map(0.0, 0.0, 100.0).expect("mid"), 50.0);
        assert!(scale.ticks(5).iter().all(|tick| tick.is_finite()));
        assert_eq!(scale.ticks(5).last(), Some(&f64::MAX));
    }

    #[test]
    fn flat_ranges_widen_at_any_magnitude() {
        for value in [0.0, 1e16, -3e200, f64::MAX, -f64::MAX, f64::MIN_POSITIVE] {
            let scale = LinearScale::covering(value, value).expect("covering");
            let (start, end) = scale.domain();
            assert!(start < end, "flat range at {value} stayed flat");
            let px = scale.map(value, 0.0, 40.0).expect("map");
            assert!((0.0..=40.0).contains(&px));
        }
        assert_eq!(LinearScale::covering(0.0, 0.0).expect("zero").domain(), (-0.5, 0.5));
    }

    #[test]
    fn subnormal_spans_are_widened() {
        let tiny = f64::from_bits(1);
        let scale = LinearScale::covering(0.0, tiny).expect("covering");
        assert_eq!(scale.domain(), (-0.5, 0.5));
        let px = scale.map(tiny, 0.0, 10.0).expect("map");
        assert!((px - 5.0).abs() <= 1e-9);
    }

    #[test]
    fn covering_rejects_unordered_or_non_finite_ranges() {
        assert!(LinearScale::covering(2.0, 1.0).is_err());
        assert!(LinearScale::covering(f64::NAN, 1.0).is_err());
        assert!(LinearScale::covering(0.0, f64::INFINITY).is_err());
    }
}
