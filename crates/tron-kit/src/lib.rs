//! A clean, ergonomic Rust client for the TRON blockchain.
//!
//! **tron-kit** talks to TRON nodes over both of their wire protocols,
//! gRPC and JSON-over-HTTP, behind one uniform [`Transport`] contract, so
//! endpoints of either kind can be pooled and swapped freely.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tron_kit::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tron_kit::Error> {
//!     // Configure once
//!     let tron = Tron::mainnet().build()?;
//!
//!     // Check balance
//!     let address: Address = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t".parse()?;
//!     let balance = tron.balance(&address).await?;
//!     println!("Balance: {}", balance);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Design Principles
//!
//! 1. **One operation set**: every transport implements the same
//!    [`Transport`] trait, so gRPC and HTTP endpoints are interchangeable
//! 2. **Composable layers**: round-robin pooling and metrics recording are
//!    plain transports wrapping other transports
//! 3. **Configure once**: endpoints, headers, TLS, and timeouts are fixed
//!    at client creation through [`NodeConfig`]
//! 4. **Explicit units**: TRX amounts are a typed [`Trx`] value counted in
//!    SUN, never a bare integer
//! 5. **Structural errors**: sentinel conditions are matched on [`Error`]
//!    variants, not on message text
//!
//! # Core Types
//!
//! - [`Address`] - Validated 21-byte TRON address (base58check or hex)
//! - [`Trx`] - TRX amount with SUN precision
//! - [`PrivateKey`] - secp256k1 signing key for transactions
//! - [`NodeConfig`], [`Config`] - Endpoint and client configuration
//!
//! # String Parsing
//!
//! The core types parse from their human-readable forms:
//!
//! ```
//! use tron_kit::{Address, Trx};
//!
//! let address: Address = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t".parse().unwrap();
//! let amount: Trx = "12.5 TRX".parse().unwrap();
//! assert_eq!(amount.as_sun(), 12_500_000);
//! ```
//!
//! # Wire Messages
//!
//! The protocol messages (accounts, blocks, transactions, contracts) live
//! in [`proto`], shaped after TRON's protobuf schema and shared by both
//! transports: the gRPC transport sends them as protobuf, the HTTP
//! transport as the node's JSON rendering of the same messages.

pub mod client;
pub mod error;
pub mod proto;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{Error, Result, TransportError};
pub use types::*;

// Re-export client types
pub use client::{
    txid, ChainParams, GrpcTransport, HttpTransport, Metrics, MetricsCollector, MetricsTransport,
    PrivateKey, RoundRobinTransport, Transport, Tron, TronBuilder,
};
