use crate::connection::Connection;
use crate::C64;

/// Nonzero matrix elements `<s'|H|s>` of one query, parallel-indexed.
///
/// Slot 0 always holds the diagonal element paired with
/// [`Connection::Identity`]; the remaining slots hold off-diagonal elements
/// in the operator's fixed site order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NonzeroElements {
    pub(crate) amplitudes: Vec<C64>,
    pub(crate) connections: Vec<Connection>,
}

impl NonzeroElements {
    /// Empty buffer, to be filled by
    /// [`LocalOperator::nonzero_elements_into`][crate::LocalOperator::nonzero_elements_into].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    pub fn amplitudes(&self) -> &[C64] {
        &self.amplitudes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// The diagonal element, `None` only for an unfilled buffer.
    pub fn diagonal(&self) -> Option<C64> {
        self.amplitudes.first().copied()
    }

    /// All `(amplitude, connection)` pairs, diagonal first.
    pub fn iter(&self) -> impl Iterator<Item = (C64, Connection)> + '_ {
        self.amplitudes
            .iter()
            .copied()
            .zip(self.connections.iter().copied())
    }

    /// Off-diagonal pairs only.
    pub fn off_diagonal(&self) -> impl Iterator<Item = (C64, Connection)> + '_ {
        self.iter().skip(1)
    }
}
