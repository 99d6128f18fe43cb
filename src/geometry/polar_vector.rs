use crate::math::Vector3;

/// A point expressed in polar coordinates around a pole.
///
/// The polar plane is XZ with the azimuth measured from +X toward +Z:
/// `cartesian = (radius * cos(azimuth), 0, radius * sin(azimuth))`.
///
/// Both Cartesian forms are computed once at construction and the value is
/// immutable afterwards, so the derived fields can never disagree with the
/// polar fields. To change the radius or azimuth, build a new value with
/// [`PolarVector::with_radius`] or [`PolarVector::with_azimuth`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarVector {
    radius: f64,
    azimuth: f64,
    cartesian: Vector3,
    world_cartesian: Vector3,
}

impl PolarVector {
    /// Creates a standalone vector from polar coordinates.
    ///
    /// A standalone vector is its own pole, so the world form equals the
    /// pole-relative form.
    ///
    /// All inputs are accepted: a negative radius flips the point through
    /// the pole, and the azimuth is not normalized to any particular range.
    #[must_use]
    pub fn new(radius: f64, azimuth: f64) -> Self {
        let cartesian = to_cartesian(radius, azimuth);
        Self {
            radius,
            azimuth,
            cartesian,
            world_cartesian: cartesian,
        }
    }

    /// Creates a vector from polar coordinates relative to `pole`.
    ///
    /// The world form is `pole.cartesian() + cartesian`, for use when the
    /// pole of the polar system is not the world origin.
    #[must_use]
    pub fn with_pole(radius: f64, azimuth: f64, pole: &PolarVector) -> Self {
        let cartesian = to_cartesian(radius, azimuth);
        Self {
            radius,
            azimuth,
            cartesian,
            world_cartesian: pole.cartesian + cartesian,
        }
    }

    /// Creates a vector from a Cartesian position (the inverse transform).
    ///
    /// The radius is the magnitude of `position` and the azimuth is
    /// `atan2(z, x)`. Both Cartesian forms keep the position verbatim,
    /// including any Y component.
    #[must_use]
    pub fn from_cartesian(position: Vector3) -> Self {
        Self {
            radius: position.norm(),
            azimuth: position.z.atan2(position.x),
            cartesian: position,
            world_cartesian: position,
        }
    }

    /// Returns the distance from the pole.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the angle in the polar plane, in radians.
    #[must_use]
    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Returns the Cartesian form relative to the pole.
    #[must_use]
    pub fn cartesian(&self) -> &Vector3 {
        &self.cartesian
    }

    /// Returns the Cartesian form relative to the world origin.
    #[must_use]
    pub fn world_cartesian(&self) -> &Vector3 {
        &self.world_cartesian
    }

    /// Returns a new vector at a different radius, same azimuth and pole.
    #[must_use]
    pub fn with_radius(&self, radius: f64) -> Self {
        let pole_offset = self.world_cartesian - self.cartesian;
        let cartesian = to_cartesian(radius, self.azimuth);
        Self {
            radius,
            azimuth: self.azimuth,
            cartesian,
            world_cartesian: pole_offset + cartesian,
        }
    }

    /// Returns a new vector at a different azimuth, same radius and pole.
    #[must_use]
    pub fn with_azimuth(&self, azimuth: f64) -> Self {
        let pole_offset = self.world_cartesian - self.cartesian;
        let cartesian = to_cartesian(self.radius, azimuth);
        Self {
            radius: self.radius,
            azimuth,
            cartesian,
            world_cartesian: pole_offset + cartesian,
        }
    }
}

fn to_cartesian(radius: f64, azimuth: f64) -> Vector3 {
    Vector3::new(radius * azimuth.cos(), 0.0, radius * azimuth.sin())
}
