//! The pore-network model consumed by the volume computations.

pub use self::error::NetworkError;
pub use self::network::Network;
pub use self::pore_network::PoreNetwork;

mod error;
mod network;
mod pore_network;
