use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Widest year range the chart will lay out.
pub const MAX_YEAR_SPAN: i64 = 10_000;

/// Most integer legend steps between the variance extremes.
pub const MAX_LEGEND_STEPS: f64 = 1_000.0;

// ---------------------------------------------------------------------------
// VarianceRecord – one (year, month) cell of the heat map
// ---------------------------------------------------------------------------

/// Monthly deviation from the dataset baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarianceRecord {
    pub year: i32,
    /// Calendar month, 1-based (1 = January).
    pub month: u32,
    /// Degrees Celsius relative to the baseline.
    pub variance: f64,
}

impl VarianceRecord {
    /// Zero-based month index as used by the month axis.
    pub fn month_index(&self) -> usize {
        self.month.saturating_sub(1) as usize
    }
}

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("dataset contains no monthly variance records")]
    Empty,
    #[error("base temperature {0} is not a finite number")]
    NonFiniteBaseline(f64),
    #[error("record {index}: month {month} is outside 1..=12")]
    MonthOutOfRange { index: usize, month: u32 },
    #[error("record {index}: variance is not a finite number")]
    NonFiniteVariance { index: usize },
    #[error("years {first}..={last} span more than {MAX_YEAR_SPAN} years")]
    YearSpanTooLarge { first: i32, last: i32 },
    #[error("variance range {min}..={max} needs more than {MAX_LEGEND_STEPS} legend steps")]
    VarianceRangeTooLarge { min: f64, max: f64 },
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded document
// ---------------------------------------------------------------------------

/// The full temperature document, mirroring the JSON wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<VarianceRecord>,
}

impl Dataset {
    /// Check the invariants every later stage relies on.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if !self.base_temperature.is_finite() {
            return Err(DatasetError::NonFiniteBaseline(self.base_temperature));
        }
        if self.monthly_variance.is_empty() {
            return Err(DatasetError::Empty);
        }
        for (index, rec) in self.monthly_variance.iter().enumerate() {
            if !(1..=12).contains(&rec.month) {
                return Err(DatasetError::MonthOutOfRange {
                    index,
                    month: rec.month,
                });
            }
            if !rec.variance.is_finite() {
                return Err(DatasetError::NonFiniteVariance { index });
            }
        }

        let (first, last) = self.year_extent();
        if i64::from(last) - i64::from(first) >= MAX_YEAR_SPAN {
            return Err(DatasetError::YearSpanTooLarge { first, last });
        }
        let (min, max) = self.variance_extent();
        if max.ceil() - min.floor() >= MAX_LEGEND_STEPS {
            return Err(DatasetError::VarianceRangeTooLarge { min, max });
        }
        Ok(())
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.monthly_variance.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.monthly_variance.is_empty()
    }

    /// Earliest and latest year. `(0, 0)` for an empty dataset.
    pub fn year_extent(&self) -> (i32, i32) {
        let mut iter = self.monthly_variance.iter().map(|r| r.year);
        let Some(first) = iter.next() else {
            return (0, 0);
        };
        iter.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)))
    }

    /// Smallest and largest variance. `(0.0, 0.0)` for an empty dataset.
    pub fn variance_extent(&self) -> (f64, f64) {
        if self.is_empty() {
            return (0.0, 0.0);
        }
        self.monthly_variance
            .iter()
            .map(|r| r.variance)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Absolute temperature of a record.
    pub fn temperature_of(&self, record: &VarianceRecord) -> f64 {
        self.base_temperature + record.variance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(year: i32, month: u32, variance: f64) -> VarianceRecord {
        VarianceRecord {
            year,
            month,
            variance,
        }
    }

    fn dataset(records: Vec<VarianceRecord>) -> Dataset {
        Dataset {
            base_temperature: 8.66,
            monthly_variance: records,
        }
    }

    #[test]
    fn test_extents_scan_all_records() {
        let ds = dataset(vec![
            rec(1900, 3, 0.5),
            rec(1753, 1, -2.25),
            rec(2015, 12, 1.75),
        ]);
        assert_eq!(ds.year_extent(), (1753, 2015));
        assert_eq!(ds.variance_extent(), (-2.25, 1.75));
    }

    #[test]
    fn test_empty_extents_are_zero() {
        let ds = dataset(Vec::new());
        assert_eq!(ds.year_extent(), (0, 0));
        assert_eq!(ds.variance_extent(), (0.0, 0.0));
        assert_eq!(ds.validate(), Err(DatasetError::Empty));
    }

    #[test]
    fn test_temperature_adds_baseline() {
        let ds = dataset(vec![rec(1900, 1, -0.8)]);
        let t = ds.temperature_of(&ds.monthly_variance[0]);
        assert!((t - 7.86).abs() < 1e-9);
    }

    #[test]
    fn test_validate_rejects_bad_month() {
        let ds = dataset(vec![rec(1900, 1, 0.0), rec(1900, 13, 0.0)]);
        assert_eq!(
            ds.validate(),
            Err(DatasetError::MonthOutOfRange { index: 1, month: 13 })
        );
    }

    #[test]
    fn test_validate_rejects_nan() {
        let ds = dataset(vec![rec(1900, 1, f64::NAN)]);
        assert_eq!(
            ds.validate(),
            Err(DatasetError::NonFiniteVariance { index: 0 })
        );
        let mut ds = dataset(vec![rec(1900, 1, 0.0)]);
        ds.base_temperature = f64::INFINITY;
        assert!(matches!(
            ds.validate(),
            Err(DatasetError::NonFiniteBaseline(_))
        ));
    }

    #[test]
    fn test_validate_rejects_huge_year_span() {
        let ds = dataset(vec![rec(1, 1, 0.0), rec(2_000_000_000, 1, 0.0)]);
        assert_eq!(
            ds.validate(),
            Err(DatasetError::YearSpanTooLarge { first: 1, last: 2_000_000_000 })
        );
        let ds = dataset(vec![rec(i32::MIN, 1, 0.0), rec(i32::MAX, 1, 0.0)]);
        assert!(matches!(ds.validate(), Err(DatasetError::YearSpanTooLarge { .. })));
    }

    #[test]
    fn test_validate_rejects_huge_variance_range() {
        let ds = dataset(vec![rec(1900, 1, -1e300), rec(1900, 2, 1e300)]);
        assert_eq!(
            ds.validate(),
            Err(DatasetError::VarianceRangeTooLarge { min: -1e300, max: 1e300 })
        );
    }

    #[test]
    fn test_validate_accepts_realistic_bounds() {
        let ds = dataset(vec![rec(1753, 1, -6.976), rec(2015, 12, 5.228)]);
        assert_eq!(ds.validate(), Ok(()));
    }

    #[test]
    fn test_month_index_is_zero_based() {
        assert_eq!(rec(1900, 1, 0.0).month_index(), 0);
        assert_eq!(rec(1900, 12, 0.0).month_index(), 11);
    }
}
