use std::f64::consts::TAU;

use rand::Rng;

use crate::math::sampling;

use super::PolarVector;

/// A polar coordinate system with a single fixed pole.
///
/// The pole can only be set through the constructor. Because it never
/// changes, the world-relative forms of all vectors created by this system
/// stay valid for the system's whole lifetime without recomputation.
///
/// Sampling methods draw from the caller-supplied random generator; the
/// system itself holds no random state.
#[derive(Debug, Clone)]
pub struct PolarSystem {
    pole: PolarVector,
}

impl PolarSystem {
    /// Creates a system centred on `pole`.
    #[must_use]
    pub fn new(pole: PolarVector) -> Self {
        Self { pole }
    }

    /// Returns the centre of the coordinate system.
    #[must_use]
    pub fn pole(&self) -> &PolarVector {
        &self.pole
    }

    /// Generates a random position on a circle around the pole.
    ///
    /// The azimuth is drawn uniformly from `[0, 2*pi)`.
    pub fn point_on_circle<R: Rng + ?Sized>(&self, rng: &mut R, radius: f64) -> PolarVector {
        PolarVector::with_pole(radius, sampling::uniform(rng, 0.0, TAU), &self.pole)
    }

    /// Generates a random position in a segment of a circle.
    ///
    /// The azimuth is drawn uniformly from `[from_azimuth, to_azimuth)`.
    /// Bound ordering is the caller's responsibility and follows the
    /// contract of [`sampling::uniform`]: inverted bounds draw between
    /// them, equal bounds give a constant.
    pub fn point_on_arc<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        radius: f64,
        from_azimuth: f64,
        to_azimuth: f64,
    ) -> PolarVector {
        PolarVector::with_pole(
            radius,
            sampling::uniform(rng, from_azimuth, to_azimuth),
            &self.pole,
        )
    }

    /// Generates a random position on a circle inside a segment centred on
    /// another vector's azimuth.
    ///
    /// The segment extends `azimuth_range` radians to each side of
    /// `relative_to`'s azimuth.
    pub fn point_around<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        radius: f64,
        azimuth_range: f64,
        relative_to: &PolarVector,
    ) -> PolarVector {
        PolarVector::with_pole(
            radius,
            sampling::uniform(
                rng,
                relative_to.azimuth() - azimuth_range,
                relative_to.azimuth() + azimuth_range,
            ),
            &self.pole,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Vector3, TOLERANCE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::FRAC_PI_4;

    fn offset_system() -> PolarSystem {
        PolarSystem::new(PolarVector::from_cartesian(Vector3::new(2.0, 0.0, -1.0)))
    }

    #[test]
    fn circle_points_keep_the_radius_exactly() {
        let system = offset_system();
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..1_000 {
            let v = system.point_on_circle(&mut rng, 4.0);
            assert!((v.radius() - 4.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn circle_azimuths_cover_the_full_turn() {
        let system = offset_system();
        let mut rng = StdRng::seed_from_u64(11);
        let mut bins = [0_u32; 8];
        let n = 8_000;
        for _ in 0..n {
            let v = system.point_on_circle(&mut rng, 1.0);
            assert!((0.0..TAU).contains(&v.azimuth()));
            let bin = ((v.azimuth() / TAU * 8.0) as usize).min(7);
            bins[bin] += 1;
        }
        for (bin, &hits) in bins.iter().enumerate() {
            assert!(hits > 800, "bin {bin} has only {hits} hits");
        }
    }

    #[test]
    fn arc_points_respect_the_bounds() {
        let system = offset_system();
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..1_000 {
            let v = system.point_on_arc(&mut rng, 2.0, 1.0, 2.5);
            assert!((1.0..2.5).contains(&v.azimuth()), "azimuth={}", v.azimuth());
        }
    }

    #[test]
    fn around_points_stay_within_the_segment() {
        let system = offset_system();
        let mut rng = StdRng::seed_from_u64(13);
        let reference = PolarVector::new(1.0, FRAC_PI_4);
        for _ in 0..1_000 {
            let v = system.point_around(&mut rng, 2.0, 0.5, &reference);
            assert!(
                (FRAC_PI_4 - 0.5..FRAC_PI_4 + 0.5).contains(&v.azimuth()),
                "azimuth={}",
                v.azimuth()
            );
        }
    }

    #[test]
    fn returned_vectors_carry_the_system_pole() {
        let system = offset_system();
        let mut rng = StdRng::seed_from_u64(14);
        let v = system.point_on_circle(&mut rng, 3.0);
        let expected = system.pole().cartesian() + v.cartesian();
        assert!((v.world_cartesian() - expected).norm() < TOLERANCE);
    }

    #[test]
    fn zero_azimuth_range_collapses_to_the_reference_azimuth() {
        let system = offset_system();
        let mut rng = StdRng::seed_from_u64(15);
        let reference = PolarVector::new(1.0, 1.25);
        let v = system.point_around(&mut rng, 2.0, 0.0, &reference);
        assert!((v.azimuth() - 1.25).abs() < TOLERANCE);
    }
}
