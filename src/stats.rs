//! Posterior summaries over draw sequences.

use ndarray::ArrayView1;
use num_traits::Float;
use std::cmp::Ordering;

/// Summary statistics of one parameter's draw sequence: the posterior mean,
/// standard deviation, and the 2.5%/50%/97.5% quantiles. Downstream table
/// and plot consumers render these; nothing here formats anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PosteriorSummary<T> {
    pub mean: T,
    pub sd: T,
    pub q025: T,
    pub median: T,
    pub q975: T,
}

/// Computes a [`PosteriorSummary`] over a single draw column.
///
/// The standard deviation uses the n-1 denominator and is zero for a single
/// draw. Quantiles are linearly interpolated between order statistics.
pub fn summarize<T: Float>(draws: ArrayView1<T>) -> Result<PosteriorSummary<T>, String> {
    if draws.is_empty() {
        return Err("Expected draws to be non-empty.".into());
    }
    let n = T::from(draws.len()).unwrap();
    let mean = draws.fold(T::zero(), |acc, &x| acc + x) / n;
    let sd = if draws.len() > 1 {
        (draws.fold(T::zero(), |acc, &x| acc + (x - mean) * (x - mean)) / (n - T::one())).sqrt()
    } else {
        T::zero()
    };

    let mut sorted: Vec<T> = draws.to_vec();
    sorted.sort_unstable_by(cmp_float);

    Ok(PosteriorSummary {
        mean,
        sd,
        q025: quantile(&sorted, 0.025),
        median: quantile(&sorted, 0.5),
        q975: quantile(&sorted, 0.975),
    })
}

/// Linearly interpolated quantile of an already sorted slice.
fn quantile<T: Float>(sorted: &[T], q: f64) -> T {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let w = T::from(pos - lo as f64).unwrap();
    sorted[lo] * (T::one() - w) + sorted[hi] * w
}

fn cmp_float<T: Float>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn summary_of_known_sequence() {
        let draws = array![1.0, 2.0, 3.0, 4.0, 5.0];
        let summary = summarize(draws.view()).unwrap();
        assert_abs_diff_eq!(summary.mean, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(summary.sd, 2.5f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(summary.median, 3.0, epsilon = 1e-12);
        // 0.025 * 4 = 0.1 => between the first two order statistics.
        assert_abs_diff_eq!(summary.q025, 1.1, epsilon = 1e-12);
        assert_abs_diff_eq!(summary.q975, 4.9, epsilon = 1e-12);
    }

    #[test]
    fn summary_is_order_invariant() {
        let a = array![5.0, 1.0, 4.0, 2.0, 3.0];
        let b = array![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(summarize(a.view()).unwrap(), summarize(b.view()).unwrap());
    }

    #[test]
    fn single_draw_summary() {
        let draws = array![2.5];
        let summary = summarize(draws.view()).unwrap();
        assert_eq!(summary.mean, 2.5);
        assert_eq!(summary.sd, 0.0);
        assert_eq!(summary.q025, 2.5);
        assert_eq!(summary.median, 2.5);
        assert_eq!(summary.q975, 2.5);
    }

    #[test]
    fn empty_draws_are_rejected() {
        let draws = ndarray::Array1::<f64>::zeros(0);
        assert!(summarize(draws.view()).is_err());
    }
}
