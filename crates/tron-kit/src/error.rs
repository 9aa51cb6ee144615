//! Error types for tron-kit.
//!
//! Everything fallible in the crate returns [`Error`](enum@Error). Failures
//! that happen inside a transport are additionally wrapped in
//! [`TransportError`] so the caller learns *which* node, protocol, and RPC
//! produced them; [`Error::root`] looks back through that wrapping when code
//! wants to match on the underlying cause.
//!
//! # Pattern Matching Through Transport Wrapping
//!
//! ```rust
//! use tron_kit::{Error, TransportError};
//!
//! let err = Error::Transport(TransportError::new(
//!     "grpc",
//!     "grpc.trongrid.io:50051",
//!     "/protocol.Wallet/GetAccount",
//!     Error::AccountNotFound,
//! ));
//!
//! assert!(matches!(err.root(), Error::AccountNotFound));
//! assert_eq!(err.transport().unwrap().protocol, "grpc");
//! ```

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An RPC failure annotated with the node it happened against.
///
/// `host` is the configured endpoint, `protocol` is `"grpc"` or `"http"`, and
/// `method` is the RPC path (`/protocol.Wallet/GetAccount`) or REST endpoint
/// (`/wallet/getaccount`) that failed.
#[derive(Debug, Error)]
#[error("{protocol} transport error [{host} {method}]: {source}")]
pub struct TransportError {
    pub host: String,
    pub protocol: &'static str,
    pub method: String,
    #[source]
    pub source: Box<Error>,
}

impl TransportError {
    pub fn new(
        protocol: &'static str,
        host: impl Into<String>,
        method: impl Into<String>,
        source: Error,
    ) -> Self {
        Self {
            host: host.into(),
            protocol,
            method: method.into(),
            source: Box::new(source),
        }
    }
}

/// Main error type for tron-kit operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    // ─── Configuration / usage ───
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    #[error("Transport is not connected")]
    NotConnected,

    #[error("Invalid parameters")]
    InvalidParams,

    /// The node answered without the payload the call promises.
    #[error("Empty response from node")]
    NilResponse,

    // ─── Domain validation ───
    #[error("Invalid address")]
    InvalidAddress,

    #[error("Empty address")]
    EmptyAddress,

    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Invalid transaction")]
    InvalidTransaction,

    #[error("Invalid private key")]
    InvalidPrivateKey,

    #[error("Invalid resource type")]
    InvalidResourceType,

    #[error("Account not found")]
    AccountNotFound,

    /// The node accepted the request but rejected the transaction.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    // ─── Transport ───
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("gRPC error: {0}")]
    Grpc(#[from] tonic::Status),

    /// Connection-level gRPC failure (dial, TLS, channel setup).
    #[error("gRPC transport error: {0}")]
    GrpcTransport(#[from] tonic::transport::Error),

    /// HTTP request failure (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx HTTP response, with the body the node sent back.
    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    // ─── Encoding ───
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A response arrived but did not decode into the expected message.
    ///
    /// Carries the raw body text so the offending payload can be inspected.
    #[error("Invalid response body: {source} (body: {body})")]
    Decode {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Invalid base58: {0}")]
    Base58(#[from] bs58::decode::Error),

    // ─── Signing ───
    #[error("Signature error: {0}")]
    Signature(#[from] k256::ecdsa::Error),

    // ─── Observability ───
    /// Metric registration failed, usually a name collision in the registry.
    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}

impl Error {
    /// Create an invalid configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }

    /// Create a transaction failure carrying the node's rejection reason.
    pub fn transaction_failed(msg: impl Into<String>) -> Self {
        Error::TransactionFailed(msg.into())
    }

    /// The error with any [`TransportError`] layers peeled off.
    pub fn root(&self) -> &Error {
        match self {
            Error::Transport(t) => t.source.root(),
            other => other,
        }
    }

    /// The transport annotation, if this error passed through one.
    pub fn transport(&self) -> Option<&TransportError> {
        match self {
            Error::Transport(t) => Some(t),
            _ => None,
        }
    }

    /// Returns true if this error indicates a malformed or missing address.
    pub fn is_invalid_address(&self) -> bool {
        matches!(self.root(), Error::InvalidAddress | Error::EmptyAddress)
    }

    /// Returns true if this error indicates the client was closed or never
    /// connected.
    pub fn is_not_connected(&self) -> bool {
        matches!(self.root(), Error::NotConnected)
    }

    /// Returns true if this error indicates the account does not exist
    /// on-chain.
    pub fn is_account_not_found(&self) -> bool {
        matches!(self.root(), Error::AccountNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Display tests
    // ========================================================================

    #[test]
    fn test_sentinel_display() {
        assert_eq!(
            Error::invalid_config("no nodes configured").to_string(),
            "Invalid client configuration: no nodes configured"
        );
        assert_eq!(
            Error::NotConnected.to_string(),
            "Transport is not connected"
        );
        assert_eq!(Error::InvalidParams.to_string(), "Invalid parameters");
        assert_eq!(Error::NilResponse.to_string(), "Empty response from node");
        assert_eq!(Error::InvalidAddress.to_string(), "Invalid address");
        assert_eq!(Error::EmptyAddress.to_string(), "Empty address");
        assert_eq!(Error::InvalidAmount.to_string(), "Invalid amount");
        assert_eq!(Error::InvalidTransaction.to_string(), "Invalid transaction");
        assert_eq!(Error::InvalidPrivateKey.to_string(), "Invalid private key");
        assert_eq!(
            Error::InvalidResourceType.to_string(),
            "Invalid resource type"
        );
        assert_eq!(Error::AccountNotFound.to_string(), "Account not found");
        assert_eq!(
            Error::transaction_failed("SIGERROR").to_string(),
            "Transaction failed: SIGERROR"
        );
    }

    #[test]
    fn test_http_status_display() {
        let err = Error::HttpStatus {
            status: 503,
            body: "busy".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP status 503: busy");
    }

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::new(
            "http",
            "https://api.trongrid.io",
            "/wallet/getnowblock",
            Error::NilResponse,
        );
        assert_eq!(
            err.to_string(),
            "http transport error [https://api.trongrid.io /wallet/getnowblock]: \
             Empty response from node"
        );
    }

    // ========================================================================
    // Unwrapping tests
    // ========================================================================

    #[test]
    fn test_root_sees_through_nested_transport_wrapping() {
        let inner = Error::Transport(TransportError::new(
            "grpc",
            "grpc.shasta.trongrid.io:50051",
            "/protocol.Wallet/GetNowBlock2",
            Error::NotConnected,
        ));
        let outer = Error::Transport(TransportError::new(
            "grpc",
            "grpc.shasta.trongrid.io:50051",
            "/protocol.Wallet/GetNowBlock2",
            inner,
        ));
        assert!(outer.is_not_connected());
        assert!(matches!(outer.root(), Error::NotConnected));
    }

    #[test]
    fn test_transport_annotation_is_preserved() {
        let err = Error::Transport(TransportError::new(
            "http",
            "https://api.trongrid.io",
            "/wallet/getaccount",
            Error::AccountNotFound,
        ));
        let transport = err.transport().expect("transport annotation");
        assert_eq!(transport.host, "https://api.trongrid.io");
        assert_eq!(transport.protocol, "http");
        assert_eq!(transport.method, "/wallet/getaccount");
        assert!(err.is_account_not_found());
    }

    #[test]
    fn test_source_chain_reaches_the_cause() {
        use std::error::Error as _;

        let err: Error = TransportError::new(
            "grpc",
            "127.0.0.1:50051",
            "/protocol.Wallet/BroadcastTransaction",
            Error::InvalidTransaction,
        )
        .into();
        let source = err.source().expect("source");
        assert_eq!(source.to_string(), "Invalid transaction");
    }

    #[test]
    fn test_root_on_plain_error_is_identity() {
        assert!(matches!(Error::InvalidAmount.root(), Error::InvalidAmount));
        assert!(Error::EmptyAddress.is_invalid_address());
        assert!(!Error::InvalidAmount.is_invalid_address());
    }

    // ========================================================================
    // Conversion tests
    // ========================================================================

    #[test]
    fn test_error_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("JSON error: "));
    }

    #[test]
    fn test_error_from_hex_error() {
        let hex_err = hex::decode("zz").unwrap_err();
        let err: Error = hex_err.into();
        assert!(matches!(err, Error::Hex(_)));
    }

    #[test]
    fn test_error_from_grpc_status() {
        let status = tonic::Status::unavailable("node down");
        let err: Error = status.into();
        assert!(matches!(err, Error::Grpc(_)));
        assert!(err.to_string().contains("node down"));
    }
}
