//! Client module for interacting with the TRON network.
//!
//! This module provides the transport stack and the high-level client:
//!
//! - [`Tron`] - The main client, the single entry point for common workflows
//! - [`TronBuilder`] - Fluent builder wiring node endpoints and metrics
//! - [`Transport`] - The full node operation set both wire protocols implement
//!
//! # Transports
//!
//! Every transport implements the same [`Transport`] trait, so the layers
//! compose freely:
//!
//! | Transport | Role |
//! |-----------|------|
//! | [`GrpcTransport`] | Binary protocol against a node's wallet service |
//! | [`HttpTransport`] | JSON protocol against a node's HTTP API |
//! | [`RoundRobinTransport`] | Spreads calls over several child transports |
//! | [`MetricsTransport`] | Records latency and outcome around any transport |
//!
//! A typical stack is a metrics decorator over a round-robin pool over one
//! transport per configured node, which is exactly what [`TronBuilder`]
//! assembles.
//!
//! # Signing
//!
//! [`PrivateKey`] holds a secp256k1 key and signs the transactions built by
//! any transport; [`txid`] computes the transaction id a signature commits
//! to.

mod grpc;
mod http;
mod metrics;
mod reconcile;
mod round_robin;
mod signer;
mod transport;
mod tron;

pub use grpc::GrpcTransport;
pub use http::HttpTransport;
pub use metrics::{Metrics, MetricsCollector, MetricsTransport};
pub use round_robin::RoundRobinTransport;
pub use signer::{txid, PrivateKey};
pub use transport::Transport;
pub use tron::{ChainParams, Tron, TronBuilder};
