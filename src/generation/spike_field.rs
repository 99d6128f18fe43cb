use rand::Rng;

use crate::geometry::{PolarSystem, PolarVector};
use crate::math::{sampling, Point3, Vector3};
use crate::mesh::SpikeMesh;

/// How the ring walk advances between rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RingStepping {
    /// The ring index doubles each iteration, visiting rings 1, 2, 4, 8, …
    /// up to the configured count. This reproduces the ring layouts this
    /// generator has always emitted.
    #[default]
    Doubling,
    /// Every ring from 1 to the configured count is visited, for a field
    /// that grows by one spike per ring.
    Linear,
}

/// Parameters controlling spike-field generation.
///
/// Values are taken as-is: degenerate configuration (zero rings, negative
/// radii, a `range` outside its intended domain) produces degenerate or
/// empty output rather than an error.
#[derive(Debug, Clone, Copy)]
pub struct SpikeFieldParams {
    /// Distance between consecutive rings.
    pub radius_step: f64,
    /// Average height of a spike apex above the base plane.
    pub average_height: f64,
    /// Maximal difference between the actual apex height and the average.
    pub height_deviation: f64,
    /// Maximal horizontal offset of an apex from its base centroid, applied
    /// independently on X and Z.
    pub max_top_displacement: f64,
    /// Number of rings.
    pub count: u32,
    /// Half-angle controlling the shape of the base triangles, in radians.
    /// Intended domain is `[0, pi]`; larger values produce overlapping
    /// bases, and zero collapses each base to a line.
    pub range: f64,
    /// Extra ring offset added to the outward radius of each pyramid's far
    /// vertices, so bases stretch toward a more distant ring.
    pub connected_ring_distance: i32,
    /// Ring progression mode.
    pub stepping: RingStepping,
}

impl Default for SpikeFieldParams {
    fn default() -> Self {
        Self {
            radius_step: 1.0,
            average_height: 1.0,
            height_deviation: 0.0,
            max_top_displacement: 0.0,
            count: 1,
            range: 0.0,
            connected_ring_distance: 5,
            stepping: RingStepping::Doubling,
        }
    }
}

/// Generates a spike-field mesh around a world origin.
///
/// The field is a set of concentric rings of pyramids: each pyramid's inner
/// base vertex sits on a ring, its two outer base vertices on a farther
/// circle, and its apex above the base centroid with randomized height and
/// horizontal offset.
pub struct SpikeField {
    origin: Point3,
    params: SpikeFieldParams,
}

impl SpikeField {
    /// Creates a new `SpikeField` generator.
    #[must_use]
    pub fn new(origin: Point3, params: SpikeFieldParams) -> Self {
        Self { origin, params }
    }

    /// Executes the generation, returning the finished buffers.
    ///
    /// Emitted coordinates are pole-relative: the origin anchors the polar
    /// system, and placing the mesh in the world is the caller's concern.
    /// All randomness comes from `rng`, and the draw order is fixed, so a
    /// seeded generator yields identical buffers for identical parameters.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> SpikeMesh {
        let system = PolarSystem::new(PolarVector::from_cartesian(self.origin.coords));
        let mut mesh = SpikeMesh::new();

        // Inner-most ring first; its base circle has radius zero, so the
        // first pyramid grows out of the pole itself. Each visited ring
        // places as many pyramids as its index, at independently drawn
        // azimuths (no even spacing).
        let mut ring: u64 = 1;
        while ring <= u64::from(self.params.count) {
            for _ in 0..ring {
                let inner = system.point_on_circle(rng, self.params.radius_step * (ring - 1) as f64);
                let outward = self.params.radius_step
                    * (ring as f64 + f64::from(self.params.connected_ring_distance));
                self.push_pyramid(&system, rng, &mut mesh, &inner, outward);
            }
            ring = match self.params.stepping {
                RingStepping::Doubling => ring * 2,
                RingStepping::Linear => ring + 1,
            };
        }

        mesh
    }

    /// Appends one pyramid given the inner vertex of its base triangle and
    /// the distance from the pole to the two outer vertices.
    fn push_pyramid<R: Rng + ?Sized>(
        &self,
        system: &PolarSystem,
        rng: &mut R,
        mesh: &mut SpikeMesh,
        origin: &PolarVector,
        radius: f64,
    ) {
        // Two more points on the outer circle complete the base triangle,
        // one on each side of the inner vertex's azimuth.
        let point_b = system.point_on_arc(
            rng,
            radius,
            origin.azimuth(),
            origin.azimuth() + self.params.range,
        );
        let point_c = system.point_on_arc(
            rng,
            radius,
            origin.azimuth() - self.params.range,
            origin.azimuth(),
        );

        let base_a = *origin.cartesian();
        let base_b = *point_b.cartesian();
        let base_c = *point_c.cartesian();

        // The apex is the base centroid plus a random displacement. The
        // draw order (x, height, z) is part of the seeded-output contract.
        let centroid = (base_a + base_b + base_c) / 3.0;
        let sideways = self.params.max_top_displacement;
        let displacement = Vector3::new(
            sampling::uniform(rng, -sideways, sideways),
            self.params.average_height
                + sampling::uniform(
                    rng,
                    -self.params.height_deviation,
                    self.params.height_deviation,
                ),
            sampling::uniform(rng, -sideways, sideways),
        );

        let base_a = Point3::from(base_a);
        let base_b = Point3::from(base_b);
        let base_c = Point3::from(base_c);
        let top = Point3::from(centroid + displacement);

        // One base face plus three lateral faces; vertices stay un-shared.
        mesh.push_triangle(base_a, base_b, base_c);
        mesh.push_triangle(base_a, base_c, top);
        mesh.push_triangle(base_a, top, base_b);
        mesh.push_triangle(base_b, top, base_c);
    }
}
