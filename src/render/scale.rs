//! Value to discrete step mapping.
//!
//! The whole sequence shares one scale, so every chunk of a wrapped chart is
//! drawn against the global `min`/`max`. With a palette of `P` glyphs stacked
//! over `rows` terminal rows there are `P * rows` steps; a sample's step is
//!
//! ```text
//! step = trunc(trunc(rel * steps) / span)      clamped to [0, steps - 1]
//! ```
//!
//! where `rel = value - min` and `span = max - min`, both passed through
//! `ln(x + 1)` in log mode. The inner truncation is part of the contract:
//! boundary samples land on the same step they always have.

use crate::core::sequence::Sequence;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    min: f64,
    span: f64,
    steps: usize,
    log: bool,
}

impl Scale {
    /// Scale for `seq` with `steps` discrete levels (`steps >= 1`).
    ///
    /// An empty sequence or a zero span falls back to a span of 1, which
    /// puts every sample on step 0.
    #[must_use]
    pub fn new(seq: &Sequence, steps: usize, log: bool) -> Self {
        let min = seq.min().unwrap_or(0.0);
        let mut span = seq.max().unwrap_or(min) - min;
        if log {
            span = (span + 1.0).ln();
        }
        if span == 0.0 {
            span = 1.0;
        }
        Self {
            min,
            span,
            steps: steps.max(1),
            log,
        }
    }

    #[inline]
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Discrete level of `value`, in `0..steps`.
    #[inline]
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn step(&self, value: f64) -> usize {
        let mut rel = value - self.min;
        if self.log {
            rel = (rel + 1.0).ln();
        }
        // float -> int casts saturate, so out-of-range inputs still clamp
        let step = ((rel * self.steps as f64).trunc() / self.span) as i64;
        let last = i64::try_from(self.steps).unwrap_or(i64::MAX) - 1;
        step.clamp(0, last) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(values: &[f64]) -> Sequence {
        values.iter().map(|&v| (v, None)).collect()
    }

    #[test]
    fn flat_sequence_sits_on_step_zero() {
        let s = seq(&[5.0, 5.0, 5.0]);
        for log in [false, true] {
            let scale = Scale::new(&s, 6, log);
            assert!(s.samples().iter().all(|x| scale.step(x.value) == 0));
        }
    }

    #[test]
    fn extremes_hit_first_and_last_step() {
        let s = seq(&[0.0, 10.0]);
        let scale = Scale::new(&s, 6, false);
        assert_eq!(scale.step(0.0), 0);
        // 10 * 6 / 10 = 6, clamped to 5
        assert_eq!(scale.step(10.0), 5);
    }

    #[test]
    fn linear_steps() {
        let s = seq(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let scale = Scale::new(&s, 6, false);
        let got: Vec<usize> = s.samples().iter().map(|x| scale.step(x.value)).collect();
        // rel*6/4: 0, 1.5, 3, 4.5, 6
        assert_eq!(got, [0, 1, 3, 4, 5]);
    }

    #[test]
    fn product_is_truncated_before_dividing() {
        // rel = 0.3, steps = 6, span = 0.4: trunc(1.8) / 0.4 = 2.5 -> 2,
        // while 1.8 / 0.4 = 4.5 would give 4.
        let s = seq(&[0.0, 0.4]);
        let scale = Scale::new(&s, 6, false);
        assert_eq!(scale.step(0.3), 2);
    }

    #[test]
    fn log_mode_compresses_large_values() {
        let s = seq(&[0.0, 9.0, 99.0, 999.0]);
        let lin = Scale::new(&s, 6, false);
        let log = Scale::new(&s, 6, true);
        assert_eq!(lin.step(9.0), 0);
        assert!(log.step(9.0) > 0);
        assert_eq!(log.step(999.0), 5);
        assert_eq!(log.step(0.0), 0);
    }

    #[test]
    fn huge_step_counts_stay_in_range() {
        let s = seq(&[0.0, 1.0]);
        let scale = Scale::new(&s, usize::MAX, false);
        assert_eq!(scale.step(0.0), 0);
        assert!(scale.step(1.0) < usize::MAX);
    }

    #[test]
    fn empty_sequence_does_not_divide_by_zero() {
        let scale = Scale::new(&Sequence::new(), 3, false);
        assert_eq!(scale.step(0.0), 0);
    }
}
