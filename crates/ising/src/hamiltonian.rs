//! One-dimensional transverse-field Ising chain,
//! ```math
//! H = -h \sum_i \sigma^x_i - \sum_{\langle ij \rangle} \sigma^z_i \sigma^z_j
//! ```
//! in the Pauli-Z basis. The `σzσz` bonds are diagonal; each `σx_i` connects a
//! state to the one with site `i` flipped, always with amplitude `-h`.

use crate::connection::Connection;
use crate::elements::NonzeroElements;
use crate::error::{IsingError, IsingResult};
use crate::operator::LocalOperator;
use crate::C64;

#[derive(Clone, Debug)]
pub struct TransverseIsing {
    n_spins: usize,
    h_field: f64,
    pbc: bool,
    /// Constant part of every result set; slot 0 is overwritten per query.
    template: NonzeroElements,
}

impl TransverseIsing {
    pub fn new(n_spins: usize, h_field: f64, pbc: bool) -> IsingResult<Self> {
        if n_spins == 0 {
            return Err(IsingError::EmptyChain);
        }
        if !h_field.is_finite() {
            return Err(IsingError::NonFiniteField(h_field));
        }

        let mut amplitudes = vec![C64::new(-h_field, 0.0); n_spins + 1];
        amplitudes[0] = C64::new(0.0, 0.0);

        let mut connections = Vec::with_capacity(n_spins + 1);
        connections.push(Connection::Identity);
        connections.extend((0..n_spins).map(Connection::Flip));

        tracing::trace!(n_spins, h_field, pbc, "built transverse-field Ising operator");

        Ok(Self {
            n_spins,
            h_field,
            pbc,
            template: NonzeroElements {
                amplitudes,
                connections,
            },
        })
    }

    pub fn n_spins(&self) -> usize {
        self.n_spins
    }

    pub fn h_field(&self) -> f64 {
        self.h_field
    }

    pub fn is_pbc(&self) -> bool {
        self.pbc
    }

    /// Coupled site pairs `(i, i + 1)`, plus the wraparound `(n - 1, 0)` for
    /// a periodic chain. A periodic single site couples to itself.
    pub fn bonds(&self) -> Vec<(usize, usize)> {
        let mut bonds: Vec<(usize, usize)> = (0..self.n_spins - 1).map(|i| (i, i + 1)).collect();
        if self.pbc {
            bonds.push((self.n_spins - 1, 0));
        }
        bonds
    }

    /// The diagonal element `<s|H|s> = -Σ s_i s_j` over all bonds.
    pub fn diagonal(&self, state: &[i8]) -> IsingResult<f64> {
        crate::state::validate(state, self.n_spins)?;
        Ok(self.zz_energy(state))
    }

    pub fn nonzero_elements(&self, state: &[i8]) -> IsingResult<NonzeroElements> {
        let diag = self.diagonal(state)?;
        let mut out = self.template.clone();
        out.amplitudes[0] = C64::new(diag, 0.0);
        Ok(out)
    }

    /// Fill `out` in place. Every slot is rewritten from this operator, so
    /// a buffer last used by another operator is safe to pass in.
    pub fn nonzero_elements_into(&self, state: &[i8], out: &mut NonzeroElements) -> IsingResult<()> {
        let diag = self.diagonal(state)?;
        out.clone_from(&self.template);
        out.amplitudes[0] = C64::new(diag, 0.0);
        Ok(())
    }

    // `state` must already be validated.
    fn zz_energy(&self, state: &[i8]) -> f64 {
        let mut e: i64 = 0;
        for pair in state.windows(2) {
            e -= pair[0] as i64 * pair[1] as i64;
        }
        if self.pbc {
            e -= state[self.n_spins - 1] as i64 * state[0] as i64;
        }
        e as f64
    }
}

impl LocalOperator for TransverseIsing {
    fn n_sites(&self) -> usize {
        self.n_spins
    }

    fn min_spin_flips(&self) -> usize {
        1
    }

    fn nonzero_elements(&self, state: &[i8]) -> IsingResult<NonzeroElements> {
        TransverseIsing::nonzero_elements(self, state)
    }

    fn nonzero_elements_into(&self, state: &[i8], out: &mut NonzeroElements) -> IsingResult<()> {
        TransverseIsing::nonzero_elements_into(self, state, out)
    }
}
