use std::cmp::Ordering;

/// Descriptive statistics over a numeric series. Values keep full f64
/// precision; rounding happens only when a report is formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub stdev: f64,
}

impl Summary {
    /// Reduce `values` to a summary. An empty series has no summary.
    ///
    /// The standard deviation is the sample standard deviation (n−1
    /// divisor); a single observation has no spread, so n == 1 yields
    /// exactly 0.0 rather than NaN.
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len();

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / n as f64;

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        let median = if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        } else {
            sorted[n / 2]
        };

        let stdev = if n > 1 {
            let squared_deviations: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (squared_deviations / (n - 1) as f64).sqrt()
        } else {
            0.0
        };

        Some(Summary {
            min,
            max,
            mean,
            median,
            stdev,
        })
    }
}
