/// Uniform-range sampling.
///
/// All random draws in the crate go through [`uniform`], which follows the
/// lerp contract `low + u * (high - low)` with `u` drawn uniformly from
/// `[0, 1)`:
/// - bounds may be given in either order; the draw lands between them,
/// - a zero-width range returns the bound itself,
/// - for `low < high` the result lies in the half-open `[low, high)`.
use rand::Rng;

/// Draws a uniform value from the range spanned by `low` and `high`.
///
/// One value is consumed from `rng` regardless of the range width, so a
/// fixed draw sequence stays aligned across configurations.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    low + rng.random::<f64>() * (high - low)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn draws_stay_in_half_open_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10_000 {
            let x = uniform(&mut rng, -2.0, 3.0);
            assert!((-2.0..3.0).contains(&x), "x={x}");
        }
    }

    #[test]
    fn zero_width_range_is_constant() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            let x = uniform(&mut rng, 1.25, 1.25);
            assert!((x - 1.25).abs() < f64::EPSILON, "x={x}");
        }
    }

    #[test]
    fn inverted_bounds_draw_between_them() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10_000 {
            let x = uniform(&mut rng, 3.0, -2.0);
            assert!(x > -2.0 && x <= 3.0, "x={x}");
        }
    }

    #[test]
    fn draws_are_empirically_uniform() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut bins = [0_u32; 8];
        let n = 80_000;
        for _ in 0..n {
            let x = uniform(&mut rng, 0.0, 8.0);
            bins[x as usize] += 1;
        }
        // Each bin expects n/8 = 10_000 draws; allow a generous 5% band.
        for (bin, &hits) in bins.iter().enumerate() {
            assert!(
                (9_500..=10_500).contains(&hits),
                "bin {bin} has {hits} hits"
            );
        }
    }

    #[test]
    fn zero_width_range_still_consumes_a_draw() {
        let mut a = StdRng::seed_from_u64(5);
        let mut b = StdRng::seed_from_u64(5);

        let _ = uniform(&mut a, 1.0, 1.0);
        let second_a = uniform(&mut a, 0.0, 1.0);

        let _ = uniform(&mut b, 0.0, 10.0);
        let second_b = uniform(&mut b, 0.0, 1.0);

        assert!((second_a - second_b).abs() < f64::EPSILON);
    }
}
