//! Weighted sampling of integers from a closed range.

use mazewright_checked::{ClosedRange, SignedPercent};

use crate::rng::Rng;

impl Rng {
    /// Draws an integer from `range` with a tunable bias.
    ///
    /// The draw comes from a normal distribution over the normalized range:
    /// `weight` moves the mean from the lower end (`-100`) through the
    /// middle (`0`) to the upper end (`100`), and `variance` widens the
    /// spread the same way. The draw is truncated to the window that keeps
    /// every integer reachable after rounding, so extreme weights pile up
    /// on the end values instead of escaping the range.
    ///
    /// The result always lies inside `range`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazewright_checked::{ClosedRange, SignedPercent};
    /// use mazewright_random::prelude::*;
    ///
    /// let mut rng = Rng::with_seed(1);
    /// let range = ClosedRange::new(4, 25);
    /// let value = rng.weighted_range(range, SignedPercent::new(0), SignedPercent::new(0));
    /// assert!(range.contains(value));
    /// ```
    pub fn weighted_range(
        &mut self,
        range: ClosedRange,
        weight: SignedPercent,
        variance: SignedPercent,
    ) -> i32 {
        let span = range.span();
        if span == 0 {
            return range.lower();
        }

        let mean = f64::from(weight.get() + 100) / 200.0;
        let std_dev = f64::from(variance.get() + 100) / 200.0;

        // Window over the normalized range: each integer, endpoints
        // included, keeps a half-step of rounding room.
        let span = f64::from(span);
        let window_lo = -0.5 / span;
        let window_hi = (span + 0.5) / span;

        let t = self.normal(mean, std_dev).clamp(window_lo, window_hi);
        range.clamp(range.lower() + (t * span).round() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_inside_range() {
        let mut rng = Rng::with_seed(5);
        let range = ClosedRange::new(-7, 13);

        for weight in [-100, -50, 0, 50, 100] {
            for variance in [-100, 0, 100] {
                for _ in 0..1000 {
                    let value = rng.weighted_range(
                        range,
                        SignedPercent::new(weight),
                        SignedPercent::new(variance),
                    );
                    assert!(range.contains(value), "{value} escaped {range}");
                }
            }
        }
    }

    #[test]
    fn neutral_weights_reach_every_value() {
        let mut rng = Rng::with_seed(11);
        let range = ClosedRange::new(0, 99);
        let mut seen = [false; 100];

        for _ in 0..100_000 {
            let value =
                rng.weighted_range(range, SignedPercent::new(0), SignedPercent::new(0));
            seen[value as usize] = true;
        }

        for (value, hit) in seen.iter().enumerate() {
            assert!(hit, "value {value} never drawn");
        }
    }

    #[test]
    fn positive_weight_biases_upward() {
        let mut rng = Rng::with_seed(3);
        let range = ClosedRange::new(0, 99);

        let mut sum: i64 = 0;
        for _ in 0..10_000 {
            let value =
                rng.weighted_range(range, SignedPercent::new(100), SignedPercent::new(0));
            assert!(range.contains(value));
            sum += i64::from(value);
        }

        let mean = sum as f64 / 10_000.0;
        assert!(mean > 70.0, "mean {mean} not biased toward the upper end");
    }

    #[test]
    fn negative_weight_biases_downward() {
        let mut rng = Rng::with_seed(3);
        let range = ClosedRange::new(0, 99);

        let mut sum: i64 = 0;
        for _ in 0..10_000 {
            let value =
                rng.weighted_range(range, SignedPercent::new(-100), SignedPercent::new(0));
            sum += i64::from(value);
        }

        let mean = sum as f64 / 10_000.0;
        assert!(mean < 30.0, "mean {mean} not biased toward the lower end");
    }

    #[test]
    fn zero_span_returns_lower_without_drawing() {
        let mut rng1 = Rng::with_seed(17);
        let mut rng2 = Rng::with_seed(17);
        let range = ClosedRange::new(9, 9);

        assert_eq!(
            rng1.weighted_range(range, SignedPercent::new(100), SignedPercent::new(100)),
            9
        );
        // The degenerate draw consumed nothing from the stream.
        assert_eq!(rng1.range(0, 1000), rng2.range(0, 1000));
    }

    #[test]
    fn seeded_draws_repeat() {
        let mut rng1 = Rng::with_seed(23);
        let mut rng2 = Rng::with_seed(23);
        let range = ClosedRange::new(4, 25);

        for _ in 0..100 {
            assert_eq!(
                rng1.weighted_range(range, SignedPercent::new(30), SignedPercent::new(-20)),
                rng2.weighted_range(range, SignedPercent::new(30), SignedPercent::new(-20)),
            );
        }
    }
}
