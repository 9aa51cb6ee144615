//! Core types for the TRON client.
//!
//! Hand-rolled types for addresses, amounts, network configuration, and
//! TRC20 call construction, designed for ergonomic use in client
//! applications. Wire messages live in [`crate::proto`].

mod address;
mod network;
pub mod trc20;
mod units;

pub(crate) use address::encode_check;
pub use address::Address;
pub use network::{Config, Network, NodeConfig, Protocol};
pub use units::{IntoTrx, Trx, SUN_PER_TRX};
