use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IsingError {
    /// Returned when constructing an operator for a chain of zero sites.
    #[error("configuration error: spin chain must have at least one site")]
    EmptyChain,

    /// Returned when the transverse field is NaN or infinite.
    #[error("configuration error: transverse field must be finite, got {0}")]
    NonFiniteField(f64),

    /// Returned when a queried state does not have one entry per site.
    #[error("domain error: state has {got} sites, operator expects {expected}")]
    StateLength { expected: usize, got: usize },

    /// Returned when a state entry is not a Pauli-Z eigenvalue.
    #[error("domain error: spin at site {site} is {value}, expected +1 or -1")]
    InvalidSpin { site: usize, value: i8 },

    /// Returned when a bit-encoded state is asked for more sites than a
    /// `u64` holds.
    #[error("domain error: cannot decode {n_spins} sites from 64 bits")]
    TooManyBits { n_spins: usize },

    /// Returned when a flip targets a site past the end of the state.
    #[error("domain error: site {site} out of range for {n_spins} sites")]
    SiteOutOfRange { site: usize, n_spins: usize },
}

impl IsingError {
    /// Errors raised while building an operator.
    pub fn is_configuration(&self) -> bool {
        matches!(self, IsingError::EmptyChain | IsingError::NonFiniteField(_))
    }

    /// Errors raised while querying an operator with a bad state.
    pub fn is_domain(&self) -> bool {
        !self.is_configuration()
    }
}

pub type IsingResult<T> = Result<T, IsingError>;
