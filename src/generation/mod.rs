mod spike_field;

pub use spike_field::{RingStepping, SpikeField, SpikeFieldParams};
