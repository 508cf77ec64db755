//! Histogram Binning Module
//! Bin edges, counts and the density/cumulative transforms, NumPy compatible.

use crate::config::{BinRule, Bins};
use crate::error::PlotError;
use statrs::statistics::Statistics;

/// Most equal-width bins a count or a width rule may produce.
pub const MAX_BINS: usize = 1_000_000;

/// Bin edges and the height drawn for each bin.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `heights.len() + 1` edges, monotonically increasing.
    pub edges: Vec<f64>,
    pub heights: Vec<f64>,
}

impl Histogram {
    pub fn bin_count(&self) -> usize {
        self.heights.len()
    }

    pub fn widths(&self) -> impl Iterator<Item = f64> + '_ {
        self.edges.windows(2).map(|w| w[1] - w[0])
    }
}

/// Handles histogram binning.
pub struct BinCalculator;

impl BinCalculator {
    /// Bin `values` and apply the density and cumulative transforms.
    pub fn compute(
        values: &[f64],
        bins: &Bins,
        range: Option<(f64, f64)>,
        density: bool,
        cumulative: bool,
    ) -> Result<Histogram, PlotError> {
        let edges = Self::edges(values, bins, range)?;
        let mut heights = Self::counts(values, &edges);

        if density {
            let total: f64 = heights.iter().sum();
            for (height, width) in heights.iter_mut().zip(edges.windows(2).map(|w| w[1] - w[0])) {
                *height /= total * width;
            }
        }

        if cumulative {
            // With density the running sum is of mass, so it ends at 1.
            let mut running = 0.0;
            for (height, width) in heights.iter_mut().zip(edges.windows(2).map(|w| w[1] - w[0])) {
                running += if density { *height * width } else { *height };
                *height = running;
            }
        }

        Ok(Histogram { edges, heights })
    }

    /// Compute bin edges.
    pub fn edges(
        values: &[f64],
        bins: &Bins,
        range: Option<(f64, f64)>,
    ) -> Result<Vec<f64>, PlotError> {
        match bins {
            Bins::Edges(edges) => {
                if edges.len() < 2 {
                    return Err(PlotError::InvalidBins(
                        "at least two bin edges are required".to_string(),
                    ));
                }
                if edges.iter().any(|e| !e.is_finite()) || edges.windows(2).any(|w| w[0] > w[1]) {
                    return Err(PlotError::InvalidBins(
                        "bins must increase monotonically, when an array".to_string(),
                    ));
                }
                Ok(edges.clone())
            }
            Bins::Count(0) => Err(PlotError::InvalidBins("`bins` must be positive".to_string())),
            Bins::Count(count) => {
                let (lo, hi) = Self::outer_edges(values, range)?;
                Self::equal_edges(lo, hi, *count as f64)
            }
            Bins::Rule(rule) => {
                let (lo, hi) = Self::outer_edges(values, range)?;
                let kept: Vec<f64> = values
                    .iter()
                    .copied()
                    .filter(|v| *v >= lo && *v <= hi)
                    .collect();

                let count = if kept.is_empty() {
                    1.0
                } else {
                    let width = Self::rule_width(*rule, &kept);
                    if width > 0.0 {
                        ((hi - lo) / width).ceil().max(1.0)
                    } else {
                        1.0
                    }
                };
                Self::equal_edges(lo, hi, count)
            }
        }
    }

    /// Count values per bin. Bins are half-open except the last, which also
    /// takes its right edge. Values outside the edges are ignored.
    pub fn counts(values: &[f64], edges: &[f64]) -> Vec<f64> {
        let bins = edges.len().saturating_sub(1);
        let mut counts = vec![0.0; bins];
        if bins == 0 {
            return counts;
        }

        let (lo, hi) = (edges[0], edges[bins]);
        for &v in values {
            if !(v >= lo && v <= hi) {
                continue;
            }
            let index = edges.partition_point(|&e| e <= v).saturating_sub(1).min(bins - 1);
            counts[index] += 1.0;
        }
        counts
    }

    fn outer_edges(values: &[f64], range: Option<(f64, f64)>) -> Result<(f64, f64), PlotError> {
        let (mut lo, mut hi) = match range {
            Some((lo, hi)) => {
                if !(lo.is_finite() && hi.is_finite()) {
                    return Err(PlotError::InvalidRange(format!(
                        "supplied range of [{}, {}] is not finite",
                        lo, hi
                    )));
                }
                if lo > hi {
                    return Err(PlotError::InvalidRange(
                        "max must be larger than min in range parameter".to_string(),
                    ));
                }
                (lo, hi)
            }
            None if values.is_empty() => (0.0, 1.0),
            None => {
                if values.iter().any(|v| !v.is_finite()) {
                    return Err(PlotError::InvalidRange(
                        "autodetected range is not finite".to_string(),
                    ));
                }
                let (min, max) = min_max(values);
                (min, max)
            }
        };

        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }
        Ok((lo, hi))
    }

    /// Edges of `count` equal-width bins over `[lo, hi]`.
    fn equal_edges(lo: f64, hi: f64, count: f64) -> Result<Vec<f64>, PlotError> {
        if !(hi - lo).is_finite() || count > MAX_BINS as f64 {
            return Err(PlotError::InvalidBins(format!(
                "too many bins for data range, at most {} finite-sized bins can be created",
                MAX_BINS
            )));
        }
        Ok(Self::linspace(lo, hi, count as usize))
    }

    fn linspace(lo: f64, hi: f64, bins: usize) -> Vec<f64> {
        (0..=bins)
            .map(|i| {
                if i == bins {
                    hi
                } else {
                    lo + (hi - lo) * i as f64 / bins as f64
                }
            })
            .collect()
    }

    /// Bin width suggested by `rule` for non-empty data.
    fn rule_width(rule: BinRule, values: &[f64]) -> f64 {
        let n = values.len() as f64;
        let (min, max) = min_max(values);
        let ptp = max - min;

        let sturges = ptp / (n.log2() + 1.0);
        let fd = || {
            let mut sorted = values.to_vec();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            let iqr = Self::percentile(&sorted, 75.0) - Self::percentile(&sorted, 25.0);
            2.0 * iqr * n.powf(-1.0 / 3.0)
        };

        match rule {
            BinRule::Sturges => sturges,
            BinRule::Sqrt => ptp / n.sqrt(),
            BinRule::Rice => ptp / (2.0 * n.cbrt()),
            BinRule::Scott => {
                let std = values.iter().population_std_dev();
                (24.0 * std::f64::consts::PI.sqrt() / n).cbrt() * std
            }
            BinRule::Fd => fd(),
            BinRule::Auto => {
                let fd = fd();
                if fd > 0.0 {
                    fd.min(sturges)
                } else {
                    sturges
                }
            }
        }
    }

    /// Calculate percentile using linear interpolation (NumPy compatible).
    fn percentile(sorted_values: &[f64], p: f64) -> f64 {
        let n = sorted_values.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted_values[0];
        }

        let rank = (p / 100.0) * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted_values[lower]
        } else {
            sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
        }
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_equal_width_edges() {
        let edges = BinCalculator::edges(&[0.0, 1.0, 4.0], &Bins::Count(4), None).unwrap();
        assert_eq!(edges, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_degenerate_and_empty_ranges() {
        let edges = BinCalculator::edges(&[5.0, 5.0], &Bins::Count(2), None).unwrap();
        assert_eq!(edges, vec![4.5, 5.0, 5.5]);

        let edges = BinCalculator::edges(&[], &Bins::Count(2), None).unwrap();
        assert_eq!(edges, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_last_bin_is_closed() {
        let values = [0.0, 1.0, 2.0, 3.0, 4.0];
        let hist = BinCalculator::compute(&values, &Bins::Count(4), None, false, false).unwrap();
        assert_eq!(hist.heights, vec![1.0, 1.0, 1.0, 2.0]);
        assert_eq!(hist.bin_count(), 4);
    }

    #[test]
    fn test_range_excludes_outliers() {
        let values = [-10.0, 0.5, 1.5, 1.7, 99.0];
        let hist =
            BinCalculator::compute(&values, &Bins::Count(2), Some((0.0, 2.0)), false, false)
                .unwrap();
        assert_eq!(hist.edges, vec![0.0, 1.0, 2.0]);
        assert_eq!(hist.heights, vec![1.0, 2.0]);
    }

    #[test]
    fn test_density_integrates_to_one() {
        let values = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 4.0, 4.0];
        let hist = BinCalculator::compute(&values, &Bins::Count(3), None, true, false).unwrap();
        let area: f64 = hist.heights.iter().zip(hist.widths()).map(|(h, w)| h * w).sum();
        assert!(close(area, 1.0));

        let hist = BinCalculator::compute(&values, &Bins::Count(3), None, true, true).unwrap();
        assert!(close(*hist.heights.last().unwrap(), 1.0));
    }

    #[test]
    fn test_cumulative_counts() {
        let values = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0];
        let hist = BinCalculator::compute(&values, &Bins::Count(3), None, false, true).unwrap();
        assert_eq!(hist.heights, vec![1.0, 3.0, 6.0]);
    }

    #[test]
    fn test_explicit_edges() {
        let bins = Bins::Edges(vec![0.0, 1.0, 10.0]);
        let hist = BinCalculator::compute(&[0.5, 2.0, 9.0, 11.0], &bins, None, false, false).unwrap();
        assert_eq!(hist.heights, vec![1.0, 2.0]);

        assert!(matches!(
            BinCalculator::edges(&[], &Bins::Edges(vec![0.0, 2.0, 1.0]), None),
            Err(PlotError::InvalidBins(_))
        ));
        assert!(BinCalculator::edges(&[], &Bins::Edges(vec![1.0]), None).is_err());
    }

    #[test]
    fn test_invalid_count_and_range() {
        assert!(matches!(
            BinCalculator::edges(&[1.0], &Bins::Count(0), None),
            Err(PlotError::InvalidBins(_))
        ));
        assert!(matches!(
            BinCalculator::edges(&[1.0], &Bins::Count(3), Some((2.0, 1.0))),
            Err(PlotError::InvalidRange(_))
        ));
        assert!(BinCalculator::edges(&[1.0, f64::NAN], &Bins::Count(3), None).is_err());
    }

    #[test]
    fn test_sturges_rule() {
        let values: Vec<f64> = (0..10).map(f64::from).collect();
        let edges = BinCalculator::edges(&values, &Bins::Rule(BinRule::Sturges), None).unwrap();
        assert_eq!(edges.len(), 6);
        assert!(close(edges[0], 0.0));
        assert!(close(edges[5], 9.0));
    }

    #[test]
    fn test_auto_rule_falls_back_to_sturges() {
        // All mass at one value gives a zero interquartile range.
        let values = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 5.0];
        let auto = BinCalculator::edges(&values, &Bins::Rule(BinRule::Auto), None).unwrap();
        let sturges = BinCalculator::edges(&values, &Bins::Rule(BinRule::Sturges), None).unwrap();
        assert_eq!(auto, sturges);
    }

    #[test]
    fn test_rule_bin_counts() {
        let values: Vec<f64> = (0..10).map(f64::from).collect();
        let bins = |rule| {
            BinCalculator::edges(&values, &Bins::Rule(rule), None).unwrap().len() - 1
        };
        assert_eq!(bins(BinRule::Sturges), 5);
        assert_eq!(bins(BinRule::Sqrt), 4);
        assert_eq!(bins(BinRule::Rice), 5);
        assert_eq!(bins(BinRule::Scott), 2);
        assert_eq!(bins(BinRule::Fd), 3);
        assert_eq!(bins(BinRule::Auto), 5);
    }

    #[test]
    fn test_auto_rule_takes_fd_width_with_outlier() {
        let mut values: Vec<f64> = (0..10).map(f64::from).collect();
        values.push(100.0);
        let auto = BinCalculator::edges(&values, &Bins::Rule(BinRule::Auto), None).unwrap();
        let fd = BinCalculator::edges(&values, &Bins::Rule(BinRule::Fd), None).unwrap();
        assert_eq!(auto, fd);
        assert_eq!(auto.len() - 1, 23);
    }

    #[test]
    fn test_too_many_bins() {
        let values = [0.0, 1.0, 2.0, 3.0, 1e300];
        for rule in [BinRule::Auto, BinRule::Fd] {
            assert!(matches!(
                BinCalculator::edges(&values, &Bins::Rule(rule), None),
                Err(PlotError::InvalidBins(_))
            ));
        }
        assert!(matches!(
            BinCalculator::edges(&[1.0, 2.0], &Bins::Count(MAX_BINS + 1), None),
            Err(PlotError::InvalidBins(_))
        ));
        assert!(matches!(
            BinCalculator::edges(&[-1e308, 1e308], &Bins::Count(2), None),
            Err(PlotError::InvalidBins(_))
        ));
    }

    #[test]
    fn test_percentile() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert!(close(BinCalculator::percentile(&sorted, 25.0), 1.75));
        assert!(close(BinCalculator::percentile(&sorted, 100.0), 4.0));
        assert!(BinCalculator::percentile(&[], 50.0).is_nan());
    }
}
