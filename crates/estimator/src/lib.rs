pub mod local_energy;
pub mod stats;

pub use local_energy::{local_energies, local_energy, uniform_ratio};
pub use stats::EnergyStats;
