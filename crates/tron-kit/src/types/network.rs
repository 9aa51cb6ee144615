//! Network identification and node endpoint configuration.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use crate::error::{Error, Result};

/// The wire protocol a node endpoint speaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Protocol {
    /// Binary gRPC protocol (`protocol.Wallet` service).
    #[default]
    Grpc,
    /// JSON-over-HTTP protocol (`/wallet/...` endpoints).
    Http,
}

impl Protocol {
    /// Returns the lowercase protocol tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Grpc => "grpc",
            Protocol::Http => "http",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The TRON network the client is connected to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Network {
    /// TRON mainnet (production network).
    #[default]
    Mainnet,
    /// Shasta testnet.
    Shasta,
    /// Nile testnet.
    Nile,
}

impl Network {
    /// Returns true if this is mainnet.
    pub fn is_mainnet(&self) -> bool {
        matches!(self, Network::Mainnet)
    }

    /// Returns true if this is a test network.
    pub fn is_testnet(&self) -> bool {
        matches!(self, Network::Shasta | Network::Nile)
    }

    /// Returns the network identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Shasta => "shasta",
            Network::Nile => "nile",
        }
    }

    /// The public gRPC endpoint for this network.
    pub fn default_grpc_endpoint(&self) -> &'static str {
        match self {
            Network::Mainnet => "grpc.trongrid.io:50051",
            Network::Shasta => "grpc.shasta.trongrid.io:50051",
            Network::Nile => "grpc.nile.trongrid.io:50051",
        }
    }

    /// The public HTTP API base URL for this network.
    pub fn default_http_endpoint(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://api.trongrid.io",
            Network::Shasta => "https://api.shasta.trongrid.io",
            Network::Nile => "https://nile.trongrid.io",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable configuration for one node endpoint.
///
/// Created once, handed to exactly one transport at construction, never
/// mutated afterwards.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use tron_kit::NodeConfig;
///
/// let node = NodeConfig::grpc("grpc.trongrid.io:50051")
///     .with_header("TRON-PRO-API-KEY", "my-key")
///     .with_timeout(Duration::from_secs(10));
/// assert!(node.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct NodeConfig {
    /// Node address. A scheme-less address is given `https://` or `http://`
    /// at dial time according to `use_tls`; an explicit scheme wins.
    pub address: String,
    /// Wire protocol this endpoint speaks.
    pub protocol: Protocol,
    /// Dial with TLS. Defaults to false for gRPC (public nodes serve
    /// plaintext on 50051) and true for HTTP.
    pub use_tls: bool,
    /// Static headers attached to every outgoing call (gRPC metadata or
    /// HTTP headers), e.g. an API-key header.
    pub headers: HashMap<String, String>,
    /// Per-call timeout. `None` leaves the protocol default in place
    /// (no gRPC deadline; 30 seconds for HTTP).
    pub timeout: Option<Duration>,
}

impl NodeConfig {
    /// Configuration for a gRPC endpoint.
    pub fn grpc(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            protocol: Protocol::Grpc,
            use_tls: false,
            headers: HashMap::new(),
            timeout: None,
        }
    }

    /// Configuration for an HTTP endpoint.
    pub fn http(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            protocol: Protocol::Http,
            use_tls: true,
            headers: HashMap::new(),
            timeout: None,
        }
    }

    /// Attach a static header to every call on this endpoint.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enable or disable TLS for this endpoint.
    pub fn with_tls(mut self, use_tls: bool) -> Self {
        self.use_tls = use_tls;
        self
    }

    /// Check this endpoint configuration. Fails fast, before any transport
    /// is constructed.
    pub fn validate(&self) -> Result<()> {
        if self.address.trim().is_empty() {
            return Err(Error::invalid_config("node address must not be empty"));
        }
        Ok(())
    }
}

/// Client configuration: the node pool and the network it belongs to.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Node endpoints, dispatched round-robin when more than one.
    pub nodes: Vec<NodeConfig>,
    /// Network identity, used as a metrics label and for preset endpoints.
    pub network: Network,
}

impl Config {
    /// Configuration with a single node.
    pub fn new(node: NodeConfig) -> Self {
        Self {
            nodes: vec![node],
            network: Network::default(),
        }
    }

    /// Check the whole configuration. Fails fast, before any transport is
    /// constructed.
    pub fn validate(&self) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(Error::invalid_config("at least one node is required"));
        }
        for node in &self.nodes {
            node.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_display() {
        assert_eq!(Protocol::Grpc.to_string(), "grpc");
        assert_eq!(Protocol::Http.to_string(), "http");
        assert_eq!(Protocol::default(), Protocol::Grpc);
    }

    #[test]
    fn test_network_display() {
        assert_eq!(Network::Mainnet.to_string(), "mainnet");
        assert_eq!(Network::Shasta.to_string(), "shasta");
        assert_eq!(Network::Nile.to_string(), "nile");
    }

    #[test]
    fn test_network_predicates() {
        assert!(Network::Mainnet.is_mainnet());
        assert!(!Network::Mainnet.is_testnet());

        assert!(Network::Shasta.is_testnet());
        assert!(Network::Nile.is_testnet());
    }

    #[test]
    fn test_default_is_mainnet() {
        assert_eq!(Network::default(), Network::Mainnet);
    }

    #[test]
    fn test_network_presets() {
        assert_eq!(
            Network::Mainnet.default_grpc_endpoint(),
            "grpc.trongrid.io:50051"
        );
        assert_eq!(
            Network::Nile.default_http_endpoint(),
            "https://nile.trongrid.io"
        );
    }

    #[test]
    fn test_node_config_builders() {
        let node = NodeConfig::grpc("localhost:50051")
            .with_header("TRON-PRO-API-KEY", "secret")
            .with_timeout(Duration::from_secs(5))
            .with_tls(true);

        assert_eq!(node.protocol, Protocol::Grpc);
        assert!(node.use_tls);
        assert_eq!(node.headers.get("TRON-PRO-API-KEY").unwrap(), "secret");
        assert_eq!(node.timeout, Some(Duration::from_secs(5)));
        assert!(node.validate().is_ok());
    }

    #[test]
    fn test_protocol_defaults() {
        assert!(!NodeConfig::grpc("localhost:50051").use_tls);
        assert!(NodeConfig::http("api.trongrid.io").use_tls);
    }

    #[test]
    fn test_validate_rejects_empty_address() {
        let node = NodeConfig::grpc("   ");
        assert!(matches!(node.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_empty_pool() {
        let config = Config::default();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(err.to_string().contains("at least one node"));
    }

    #[test]
    fn test_config_single_node() {
        let config = Config::new(NodeConfig::http("https://api.trongrid.io"));
        assert_eq!(config.nodes.len(), 1);
        assert!(config.validate().is_ok());
    }
}
