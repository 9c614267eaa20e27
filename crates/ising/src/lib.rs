//! Sparse action of the transverse-field Ising Hamiltonian on Pauli-Z basis
//! states, for local-energy estimators that never build the full matrix.

pub mod connection;
pub mod elements;
pub mod error;
pub mod hamiltonian;
pub mod operator;
pub mod state;

pub use connection::Connection;
pub use elements::NonzeroElements;
pub use error::{IsingError, IsingResult};
pub use hamiltonian::TransverseIsing;
pub use operator::LocalOperator;

pub type C64 = num_complex::Complex64;
