//! Chi-square uniformity statistics.
//!
//! Used by the test-suite and by the CLI `check` command to confirm that a
//! sampler's output over a range is consistent with a uniform distribution.

use serde::Serialize;

use crate::sampler::{EntropySource, Sampler};
use crate::types::{SampleDomain, SampleError, MAX_SAMPLE_COUNT};

/// Largest range [`uniformity_check`] will histogram.
pub const MAX_BUCKETS: usize = MAX_SAMPLE_COUNT;

/// Standard normal quantile for a one-sided significance level of 0.001.
const Z_0_999: f64 = 3.090_232_306_167_813;

/// Pearson chi-square statistic of `observed` against a uniform expectation.
///
/// Returns `0.0` for empty input or zero total.
///
/// # Examples
/// ```
/// use rundomizer_core::stats::chi_square;
///
/// assert_eq!(chi_square(&[10, 10, 10]), 0.0);
/// assert_eq!(chi_square(&[20, 0]), 20.0);
/// ```
pub fn chi_square(observed: &[u64]) -> f64 {
    let total: u64 = observed.iter().sum();
    if observed.is_empty() || total == 0 {
        return 0.0;
    }
    let expected = total as f64 / observed.len() as f64;
    observed
        .iter()
        .map(|&count| {
            let diff = count as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// Chi-square critical value at significance 0.001 for `df` degrees of freedom.
///
/// Uses the Wilson–Hilferty cube approximation, which is within a few percent
/// of the exact quantile for `df >= 2` and slightly conservative for `df = 1`.
/// Returns infinity for `df = 0`.
pub fn chi_square_critical(df: usize) -> f64 {
    if df == 0 {
        return f64::INFINITY;
    }
    let k = df as f64;
    let h = 2.0 / (9.0 * k);
    k * (1.0 - h + Z_0_999 * h.sqrt()).powi(3)
}

/// Summary of a uniformity test over a histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniformityReport {
    /// Number of histogram buckets (domain size)
    pub buckets: usize,
    /// Total number of observations
    pub trials: u64,
    /// Pearson chi-square statistic
    pub statistic: f64,
    /// Critical value at significance 0.001
    pub critical: f64,
    /// Smallest bucket count
    pub min_count: u64,
    /// Largest bucket count
    pub max_count: u64,
}

impl UniformityReport {
    /// Builds a report from per-value counts.
    pub fn from_counts(counts: &[u64]) -> Self {
        Self {
            buckets: counts.len(),
            trials: counts.iter().sum(),
            statistic: chi_square(counts),
            critical: chi_square_critical(counts.len().saturating_sub(1)),
            min_count: counts.iter().copied().min().unwrap_or(0),
            max_count: counts.iter().copied().max().unwrap_or(0),
        }
    }

    /// Returns `true` if uniformity is not rejected at significance 0.001.
    pub fn passes(&self) -> bool {
        self.statistic <= self.critical
    }

    /// Returns `true` if every bucket was hit at least once.
    pub fn covers_domain(&self) -> bool {
        self.min_count > 0
    }
}

/// Draws `trials` integers from `[min, max]` and tests them for uniformity.
///
/// # Errors
///
/// - [`SampleError::InvalidRange`] unless `min < max`
/// - [`SampleError::HistogramTooLarge`] if the range has more than [`MAX_BUCKETS`] values
/// - any error from [`Sampler::sample_int`]
///
/// # Examples
/// ```
/// use rundomizer_core::sampler::{Sampler, SeededEntropy};
/// use rundomizer_core::stats::uniformity_check;
///
/// let mut sampler = Sampler::new(SeededEntropy::from_seed(3));
/// let report = uniformity_check(&mut sampler, 1, 6, 6_000).unwrap();
/// assert_eq!(report.buckets, 6);
/// assert_eq!(report.trials, 6_000);
/// ```
pub fn uniformity_check<E: EntropySource>(
    sampler: &mut Sampler<E>,
    min: i64,
    max: i64,
    trials: u64,
) -> Result<UniformityReport, SampleError> {
    let domain: SampleDomain<'_, ()> = SampleDomain::Range { min, max };
    domain.validate()?;
    let size = domain.size();
    let buckets = usize::try_from(size)
        .ok()
        .filter(|&buckets| buckets <= MAX_BUCKETS)
        .ok_or(SampleError::HistogramTooLarge {
            size,
            limit: MAX_BUCKETS,
        })?;
    let mut counts = vec![0u64; buckets];
    for _ in 0..trials {
        let value = sampler.sample_int(min, max)?;
        counts[(value as i128 - min as i128) as usize] += 1;
    }
    Ok(UniformityReport::from_counts(&counts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_chi_square_empty() {
        assert_eq!(chi_square(&[]), 0.0);
        assert_eq!(chi_square(&[0, 0, 0]), 0.0);
    }

    #[test]
    fn test_chi_square_known_value() {
        // expected 25 each: (5^2 + 5^2 + 0 + 0) / 25
        assert_relative_eq!(chi_square(&[30, 20, 25, 25]), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_critical_values_close_to_tables() {
        // Exact quantiles at alpha = 0.001
        assert_relative_eq!(chi_square_critical(5), 20.515, max_relative = 0.02);
        assert_relative_eq!(chi_square_critical(9), 27.877, max_relative = 0.02);
        assert_relative_eq!(chi_square_critical(99), 148.230, max_relative = 0.01);
        assert!(chi_square_critical(0).is_infinite());
    }

    #[test]
    fn test_report_flags_skewed_histogram() {
        let report = UniformityReport::from_counts(&[1000, 1000, 1000, 0]);
        assert!(!report.passes());
        assert!(!report.covers_domain());
        assert_eq!(report.trials, 3000);
    }

    #[test]
    fn test_report_accepts_flat_histogram() {
        let report = UniformityReport::from_counts(&[1000, 1010, 990, 1000]);
        assert!(report.passes());
        assert!(report.covers_domain());
        assert_eq!(report.min_count, 990);
        assert_eq!(report.max_count, 1010);
    }

    #[test]
    fn test_uniformity_check_rejects_degenerate_range() {
        let mut sampler = Sampler::new(crate::sampler::SeededEntropy::from_seed(1));
        assert_eq!(
            uniformity_check(&mut sampler, 5, 5, 10),
            Err(SampleError::InvalidRange { min: 5, max: 5 })
        );
    }

    #[test]
    fn test_uniformity_check_rejects_oversized_ranges() {
        let mut sampler = Sampler::new(crate::sampler::SeededEntropy::from_seed(1));
        assert_eq!(
            uniformity_check(&mut sampler, i64::MIN, i64::MAX, 10),
            Err(SampleError::HistogramTooLarge {
                size: 1u128 << 64,
                limit: MAX_BUCKETS
            })
        );
        assert_eq!(
            uniformity_check(&mut sampler, 0, 1_000_000_000, 10),
            Err(SampleError::HistogramTooLarge {
                size: 1_000_000_001,
                limit: MAX_BUCKETS
            })
        );
    }

    #[test]
    fn test_uniformity_check_at_bucket_limit() {
        let mut sampler = Sampler::new(crate::sampler::SeededEntropy::from_seed(2));
        let report = uniformity_check(&mut sampler, 1, MAX_BUCKETS as i64, 10).unwrap();
        assert_eq!(report.buckets, MAX_BUCKETS);
        assert_eq!(report.trials, 10);
    }
}
