//! Small statistics toolkit: finite-only mean and Pearson correlation.

use serde::Serialize;

/// Minimum number of finite pairs before a correlation is reported.
pub const MIN_CORRELATION_SAMPLES: usize = 3;

/// Arithmetic mean of the finite values in `xs`.
///
/// NaN and infinite values are dropped before averaging. An empty or
/// all-non-finite input yields `0.0`, not a missing-data marker; callers that
/// need to tell "no data" apart must look at their own sample size.
pub fn mean(xs: &[f64]) -> f64 {
    let (sum, count) = xs
        .iter()
        .filter(|x| x.is_finite())
        .fold((0.0, 0usize), |(sum, count), x| (sum + x, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Round to the nearest integer, with halves going toward positive infinity
/// (`-4.5` becomes `-4`, `2.5` becomes `3`).
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Mean of whichever of the two values exist, or `None` if neither does.
pub fn mean_of_present(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some((a + b) / 2.0),
        (Some(v), None) | (None, Some(v)) => Some(v),
        (None, None) => None,
    }
}

/// Result of a Pearson correlation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Correlation {
    /// Correlation coefficient in [-1, 1]; 0 when undefined
    pub r: f64,
    /// Number of finite pairs the coefficient was computed from
    pub n: usize,
}

/// Pearson correlation coefficient of two index-paired sequences.
///
/// Pairs are formed by index up to the shorter length, and any pair with a
/// non-finite side is dropped. With fewer than [`MIN_CORRELATION_SAMPLES`]
/// pairs, or when either side has zero variance, `r` is `0.0`; `n` always
/// reports the number of finite pairs.
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> Correlation {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(&x, &y)| (x, y))
        .collect();
    let n = pairs.len();

    if n < MIN_CORRELATION_SAMPLES {
        return Correlation { r: 0.0, n };
    }

    let mx = pairs.iter().map(|(x, _)| x).sum::<f64>() / n as f64;
    let my = pairs.iter().map(|(_, y)| y).sum::<f64>() / n as f64;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in &pairs {
        let dx = x - mx;
        let dy = y - my;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let den = (var_x * var_y).sqrt();
    if den == 0.0 {
        return Correlation { r: 0.0, n };
    }

    Correlation { r: cov / den, n }
}
