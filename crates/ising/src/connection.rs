use crate::error::{IsingError, IsingResult};

/// A basis state reachable from a queried state, described by the spins
/// that have to be flipped to get there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connection {
    /// The queried state itself (diagonal element).
    Identity,
    /// The queried state with one site flipped.
    Flip(usize),
}

impl Connection {
    /// Sites flipped by this connection; empty for [`Connection::Identity`].
    pub fn flipped_sites(&self) -> &[usize] {
        match self {
            Connection::Identity => &[],
            Connection::Flip(site) => std::slice::from_ref(site),
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Connection::Identity)
    }

    /// Flip `state` in place. Applying the same connection twice restores it.
    pub fn apply_in_place(&self, state: &mut [i8]) -> IsingResult<()> {
        if let Connection::Flip(site) = *self {
            let n_spins = state.len();
            let s = state
                .get_mut(site)
                .ok_or(IsingError::SiteOutOfRange { site, n_spins })?;
            *s = -*s;
        }
        Ok(())
    }

    /// The connected basis state, leaving `state` untouched.
    pub fn apply(&self, state: &[i8]) -> IsingResult<Vec<i8>> {
        let mut out = state.to_vec();
        self.apply_in_place(&mut out)?;
        Ok(out)
    }
}
