use crate::elements::NonzeroElements;
use crate::error::IsingResult;

/// An operator that can list its nonzero matrix elements on a basis state
/// without ever building the full matrix.
pub trait LocalOperator {
    /// Number of sites a queried state must have.
    fn n_sites(&self) -> usize;

    /// Fewest spins flipped by any off-diagonal connection.
    fn min_spin_flips(&self) -> usize;

    /// All `<s'|H|s>` that can be nonzero for `state`, as a fresh value.
    fn nonzero_elements(&self, state: &[i8]) -> IsingResult<NonzeroElements>;

    /// Same as [`nonzero_elements`][Self::nonzero_elements], written into a
    /// caller-owned buffer. On error `out` is left as it was.
    fn nonzero_elements_into(&self, state: &[i8], out: &mut NonzeroElements) -> IsingResult<()> {
        *out = self.nonzero_elements(state)?;
        Ok(())
    }
}
