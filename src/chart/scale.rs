// ---------------------------------------------------------------------------
// Band scale: discrete ordered domain → equal-width contiguous slots
// ---------------------------------------------------------------------------

/// Maps each domain value to the start of an equal-width band.
///
/// The range may be inverted (`start > end`); the first domain value then
/// occupies the band nearest `start`, e.g. the bottom of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<T> {
    domain: Vec<T>,
    start: f32,
    end: f32,
}

impl<T: PartialEq + Copy> BandScale<T> {
    pub fn new(domain: Vec<T>, range: (f32, f32)) -> Self {
        BandScale {
            domain,
            start: range.0,
            end: range.1,
        }
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    /// Width of one band. Zero for an empty domain.
    pub fn bandwidth(&self) -> f32 {
        if self.domain.is_empty() {
            return 0.0;
        }
        (self.end - self.start).abs() / self.domain.len() as f32
    }

    /// Lower pixel edge of the band holding `value`, or `None` when the
    /// value is not part of the domain.
    pub fn position(&self, value: T) -> Option<f32> {
        let index = self.domain.iter().position(|d| *d == value)?;
        let step = self.bandwidth();
        if self.start <= self.end {
            Some(self.start + step * index as f32)
        } else {
            Some(self.start - step * (index + 1) as f32)
        }
    }

    /// Centre of the band holding `value`; where axis ticks are drawn.
    pub fn center(&self, value: T) -> Option<f32> {
        self.position(value).map(|p| p + self.bandwidth() * 0.5)
    }
}

impl BandScale<i32> {
    /// Band scale over the consecutive integers `lo..=hi`.
    pub fn inclusive(lo: i32, hi: i32, range: (f32, f32)) -> Self {
        BandScale::new((lo..=hi).collect(), range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_split_range_evenly() {
        let scale = BandScale::inclusive(2000, 2003, (0.0, 400.0));
        assert_eq!(scale.bandwidth(), 100.0);
        assert_eq!(scale.position(2000), Some(0.0));
        assert_eq!(scale.position(2003), Some(300.0));
        assert_eq!(scale.center(2001), Some(150.0));
        assert_eq!(scale.position(1999), None);
    }

    #[test]
    fn test_inverted_range_puts_first_value_at_bottom() {
        let months: Vec<usize> = (0..12).collect();
        let scale = BandScale::new(months, (120.0, 0.0));
        assert_eq!(scale.bandwidth(), 10.0);
        // January fills 110..120, December fills 0..10.
        assert_eq!(scale.position(0), Some(110.0));
        assert_eq!(scale.position(11), Some(0.0));
    }

    #[test]
    fn test_empty_domain() {
        let scale: BandScale<i32> = BandScale::new(Vec::new(), (0.0, 100.0));
        assert_eq!(scale.bandwidth(), 0.0);
        assert_eq!(scale.position(1), None);
    }
}
