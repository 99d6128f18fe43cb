mod polar_system;
mod polar_vector;

pub use polar_system::PolarSystem;
pub use polar_vector::PolarVector;
