//! Spike-field demo — generates a field and writes it as a Wavefront OBJ.
//!
//! Usage:
//! ```text
//! cargo run --example spikes            # fixed default seed, spikes.obj
//! cargo run --example spikes -- 1234    # explicit seed
//! ```
//!
//! The output file can be dropped into any OBJ viewer to inspect the field.

use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use spikefield::generation::{SpikeField, SpikeFieldParams};
use spikefield::math::Point3;
use spikefield::mesh::ExportObj;

fn main() -> spikefield::Result<()> {
    // Default: WARN for everything, INFO for this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=spikes=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("spikes=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(0x5EED);
    let mut rng = StdRng::seed_from_u64(seed);

    let params = SpikeFieldParams {
        count: 16,
        average_height: 2.0,
        height_deviation: 0.75,
        max_top_displacement: 0.5,
        range: std::f64::consts::FRAC_PI_3,
        ..SpikeFieldParams::default()
    };

    let mesh = SpikeField::new(Point3::origin(), params).execute(&mut rng);
    info!(
        seed,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated spike field"
    );

    let path = Path::new("spikes.obj");
    ExportObj::new(&mesh).write_to_file(path)?;
    info!("written: {}", path.display());

    Ok(())
}
