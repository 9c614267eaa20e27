//! Basis states of the spin chain.
//!
//! A state is a caller-owned slice of Pauli-Z eigenvalues, one `i8` per site,
//! each either `+1` or `-1`. Nothing here takes ownership of a state.

use crate::error::{IsingError, IsingResult};

/// Check that `state` has exactly `n_spins` entries, each `+1` or `-1`.
///
/// The length is checked first, so a short state reports
/// [`IsingError::StateLength`] even if it also holds bad entries.
pub fn validate(state: &[i8], n_spins: usize) -> IsingResult<()> {
    if state.len() != n_spins {
        return Err(IsingError::StateLength {
            expected: n_spins,
            got: state.len(),
        });
    }
    match state.iter().position(|&s| s != 1 && s != -1) {
        Some(site) => Err(IsingError::InvalidSpin {
            site,
            value: state[site],
        }),
        None => Ok(()),
    }
}

/// Fully polarized state, every site `+1`.
pub fn all_up(n: usize) -> Vec<i8> {
    vec![1; n]
}

/// Antiferromagnetic state `+1, -1, +1, ...`.
pub fn neel(n: usize) -> Vec<i8> {
    (0..n).map(|i| if i % 2 == 0 { 1 } else { -1 }).collect()
}

/// Decode the low `n` bits of `bits`; a set bit `k` puts site `k` down.
pub fn from_bits(bits: u64, n: usize) -> IsingResult<Vec<i8>> {
    if n > 64 {
        return Err(IsingError::TooManyBits { n_spins: n });
    }
    Ok((0..n)
        .map(|k| if (bits >> k) & 1 == 1 { -1 } else { 1 })
        .collect())
}

/// Total Z magnetization, the sum of all entries.
pub fn magnetization(state: &[i8]) -> i64 {
    state.iter().map(|&s| s as i64).sum()
}
