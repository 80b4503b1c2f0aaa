/// Errors raised while building a [`Network`](super::Network).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// A per-pore or per-throat array does not have the expected length.
    #[error("Expected {expected} {what}, found {found}.")]
    LengthMismatch {
        /// What the array stores.
        what: &'static str,
        /// The number of pores or throats of the network.
        expected: usize,
        /// The actual length of the array.
        found: usize,
    },
    /// A throat is connected to a pore that does not exist.
    #[error("Throat {throat} is connected to the unknown pore {pore}.")]
    UnknownPore {
        /// The offending throat.
        throat: usize,
        /// The pore id it references.
        pore: usize,
    },
    /// A throat connects a pore to itself.
    #[error("Throat {0} connects a pore to itself.")]
    SelfLoop(usize),
    /// A pore coordinate or throat vertex is NaN or infinite.
    #[error("The {0} contain a non-finite coordinate.")]
    NonFiniteCoordinate(&'static str),
}
