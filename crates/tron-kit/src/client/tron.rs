//! The main TRON client.

use std::fmt;
use std::sync::Arc;

use crate::client::grpc::GrpcTransport;
use crate::client::http::HttpTransport;
use crate::client::metrics::{MetricsCollector, MetricsTransport};
use crate::client::round_robin::RoundRobinTransport;
use crate::client::signer;
use crate::client::transport::Transport;
use crate::error::{Error, Result};
use crate::proto::api::r#return::ResponseCode;
use crate::proto::{api, core};
use crate::types::{trc20, Address, Config, IntoTrx, Network, NodeConfig, Protocol, Trx};

/// Committee-governed chain parameters, decoded from the key/value list the
/// node returns.
///
/// Only the parameters relevant to fee planning are surfaced here; the raw
/// list is available through [`Transport::get_chain_parameters`]. Keys the
/// node does not report stay at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChainParams {
    /// Price of one energy unit in SUN (`getEnergyFee`).
    pub energy_fee: i64,
    /// Price of one bandwidth byte in SUN (`getTransactionFee`).
    pub transaction_fee: i64,
    /// Network-wide energy ceiling (`getTotalEnergyCurrentLimit`).
    pub total_energy_current_limit: i64,
    /// Free bandwidth granted to every account (`getFreeNetLimit`).
    pub free_net_limit: i64,
    /// Fee for explicitly creating an account (`getCreateAccountFee`).
    pub create_account_fee: i64,
    /// Account-creation fee charged inside system contracts
    /// (`getCreateNewAccountFeeInSystemContract`).
    pub create_new_account_fee_in_system_contract: i64,
}

impl From<&core::ChainParameters> for ChainParams {
    fn from(parameters: &core::ChainParameters) -> Self {
        let mut params = Self::default();
        for item in &parameters.chain_parameter {
            match item.key.as_str() {
                "getEnergyFee" => params.energy_fee = item.value,
                "getTransactionFee" => params.transaction_fee = item.value,
                "getTotalEnergyCurrentLimit" => params.total_energy_current_limit = item.value,
                "getFreeNetLimit" => params.free_net_limit = item.value,
                "getCreateAccountFee" => params.create_account_fee = item.value,
                "getCreateNewAccountFeeInSystemContract" => {
                    params.create_new_account_fee_in_system_contract = item.value
                }
                _ => {}
            }
        }
        params
    }
}

/// The main client for interacting with the TRON network.
///
/// `Tron` is a thin facade over one composed [`Transport`]: the builder
/// turns each configured [`NodeConfig`] into a gRPC or HTTP transport,
/// spreads calls over them round-robin when there is more than one, and
/// optionally wraps the stack in a metrics decorator. The facade adds the
/// common workflows (balances, TRX transfers, TRC20 calls) as typed
/// methods; all thirty-plus node operations stay reachable through
/// [`Tron::transport`].
///
/// # Example
///
/// ```rust,no_run
/// use tron_kit::{Address, Tron};
///
/// #[tokio::main]
/// async fn main() -> Result<(), tron_kit::Error> {
///     let tron = Tron::mainnet().build()?;
///
///     let address: Address = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t".parse()?;
///     let balance = tron.balance(&address).await?;
///     println!("balance: {balance}");
///
///     tron.close().await?;
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Tron {
    transport: Arc<dyn Transport>,
    network: Network,
}

impl Tron {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Start building a client for mainnet.
    pub fn mainnet() -> TronBuilder {
        TronBuilder::new(Network::Mainnet)
    }

    /// Start building a client for the Shasta testnet.
    pub fn shasta() -> TronBuilder {
        TronBuilder::new(Network::Shasta)
    }

    /// Start building a client for the Nile testnet.
    pub fn nile() -> TronBuilder {
        TronBuilder::new(Network::Nile)
    }

    /// Connect according to a prepared [`Config`].
    ///
    /// Transports are constructed lazily: no traffic is sent until the
    /// first operation. Use the builder instead when you want metrics
    /// wired in.
    pub fn connect(config: Config) -> Result<Self> {
        config.validate()?;
        let transport = build_transport(&config.nodes)?;
        Ok(Self {
            transport,
            network: config.network,
        })
    }

    /// Wrap an already-composed transport stack.
    ///
    /// The escape hatch for callers assembling their own layering, for
    /// example a custom [`Transport`] implementation or a decorator this
    /// crate does not ship.
    pub fn with_transport(transport: Arc<dyn Transport>, network: Network) -> Self {
        Self { transport, network }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The network this client talks to.
    pub fn network(&self) -> Network {
        self.network
    }

    /// The underlying transport stack, exposing the full node operation
    /// set beyond the facade methods.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    // ========================================================================
    // Account Operations
    // ========================================================================

    /// Fetch the full account record for `address`.
    ///
    /// Returns [`Error::AccountNotFound`] for addresses that have never
    /// appeared on-chain.
    pub async fn account(&self, address: &Address) -> Result<core::Account> {
        let request = core::Account {
            address: address.to_vec(),
            ..Default::default()
        };
        let account = self.transport.get_account(request).await?;
        // Nodes answer unknown addresses with an empty record; the echoed
        // address is the existence check.
        if account.address != address.as_bytes() {
            return Err(Error::AccountNotFound);
        }
        Ok(account)
    }

    /// Fetch the TRX balance of `address`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use tron_kit::*;
    /// # async fn example() -> Result<(), tron_kit::Error> {
    /// let tron = Tron::mainnet().build()?;
    /// let address: Address = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t".parse()?;
    ///
    /// let balance = tron.balance(&address).await?;
    /// println!("{} ({} SUN)", balance, balance.as_sun());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn balance(&self, address: &Address) -> Result<Trx> {
        let account = self.account(address).await?;
        Ok(Trx::from_sun(account.balance))
    }

    /// Whether `address` exists on-chain, which on TRON requires a prior
    /// activating transfer or explicit account creation.
    pub async fn is_account_activated(&self, address: &Address) -> Result<bool> {
        match self.account(address).await {
            Ok(_) => Ok(true),
            Err(err) if err.is_account_not_found() => Ok(false),
            Err(err) => Err(err),
        }
    }

    // ========================================================================
    // Block Operations
    // ========================================================================

    /// Fetch the latest block.
    pub async fn now_block(&self) -> Result<api::BlockExtention> {
        self.transport.get_now_block().await
    }

    /// Fetch a block by height.
    pub async fn block_by_num(&self, num: i64) -> Result<api::BlockExtention> {
        self.transport.get_block_by_num(num).await
    }

    // ========================================================================
    // Transactions
    // ========================================================================

    /// Build an unsigned TRX transfer from `from` to `to`.
    ///
    /// `amount` accepts a typed [`Trx`] or a string such as `"10 TRX"`.
    /// The returned transaction still has to be signed with
    /// [`PrivateKey::sign_transaction`](crate::PrivateKey::sign_transaction)
    /// and submitted through [`broadcast`](Self::broadcast).
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use tron_kit::*;
    /// # async fn example() -> Result<(), tron_kit::Error> {
    /// let tron = Tron::nile().build()?;
    /// let key = PrivateKey::random();
    /// let to: Address = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t".parse()?;
    ///
    /// let mut ext = tron.transfer(&key.address(), &to, Trx::trx(10)).await?;
    /// let mut tx = ext.transaction.take().ok_or(Error::InvalidTransaction)?;
    /// key.sign_transaction(&mut tx)?;
    /// tron.broadcast(tx).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn transfer(
        &self,
        from: &Address,
        to: &Address,
        amount: impl IntoTrx,
    ) -> Result<api::TransactionExtention> {
        let amount = amount.into_trx()?;
        if !amount.is_positive() {
            return Err(Error::InvalidAmount);
        }
        let contract = core::TransferContract {
            owner_address: from.to_vec(),
            to_address: to.to_vec(),
            amount: amount.as_sun(),
        };
        let ext = self.transport.create_transaction(contract).await?;
        if ext == api::TransactionExtention::default() {
            return Err(Error::InvalidTransaction);
        }
        check_result(&ext)?;
        Ok(ext)
    }

    /// Submit a signed transaction and verify the node accepted it.
    ///
    /// A rejection is turned into [`Error::TransactionFailed`] carrying the
    /// node's response code and message.
    pub async fn broadcast(&self, tx: core::Transaction) -> Result<api::Return> {
        let result = self.transport.broadcast_transaction(tx).await?;
        if !result.result {
            return Err(Error::transaction_failed(result.message_str()));
        }
        if result.code != ResponseCode::Success as i32 {
            let code = ResponseCode::try_from(result.code)
                .map(|code| code.as_str_name())
                .unwrap_or("UNKNOWN");
            return Err(Error::transaction_failed(format!(
                "{code}: {}",
                result.message_str()
            )));
        }
        Ok(result)
    }

    // ========================================================================
    // Network Operations
    // ========================================================================

    /// Fetch the committee-governed chain parameters as a typed view.
    pub async fn chain_params(&self) -> Result<ChainParams> {
        let parameters = self.transport.get_chain_parameters().await?;
        Ok(ChainParams::from(&parameters))
    }

    // ========================================================================
    // Smart Contracts
    // ========================================================================

    /// Run a read-only contract call and return the node's evaluation.
    ///
    /// `owner` is the address the node evaluates the call as; pass
    /// [`Address::ZERO`] when the caller does not matter. `data` is the
    /// ABI-encoded selector plus arguments, for example from the
    /// [`trc20`] builders.
    ///
    /// Fails with [`Error::TransactionFailed`] when the node reports an
    /// unsuccessful result code.
    pub async fn trigger_constant(
        &self,
        owner: &Address,
        contract: &Address,
        data: Vec<u8>,
    ) -> Result<api::TransactionExtention> {
        let request = core::TriggerSmartContract {
            owner_address: owner.to_vec(),
            contract_address: contract.to_vec(),
            data,
            ..Default::default()
        };
        let ext = self.transport.trigger_constant_contract(request).await?;
        check_result(&ext)?;
        Ok(ext)
    }

    // ========================================================================
    // TRC20 Tokens
    // ========================================================================

    /// Fetch the TRC20 token balance of `owner`, in the token's smallest
    /// unit.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use tron_kit::*;
    /// # async fn example() -> Result<(), tron_kit::Error> {
    /// let tron = Tron::mainnet().build()?;
    /// let usdt: Address = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t".parse()?;
    /// let owner: Address = "TVGp73KHD7dbV1zUZN2mgYXx8Xbx5UkNCn".parse()?;
    ///
    /// let balance = tron.trc20_balance_of(&owner, &usdt).await?;
    /// let decimals = tron.trc20_decimals(&usdt).await?;
    /// println!("{balance} (10^-{decimals})");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn trc20_balance_of(&self, owner: &Address, contract: &Address) -> Result<u128> {
        let ext = self
            .constant_call(contract, trc20::balance_of_call(owner))
            .await?;
        trc20::decode_uint256(first_constant_result(&ext)?)
    }

    /// Fetch the decimal count of a TRC20 token.
    pub async fn trc20_decimals(&self, contract: &Address) -> Result<u32> {
        let ext = self.constant_call(contract, trc20::decimals_call()).await?;
        let decimals = trc20::decode_uint256(first_constant_result(&ext)?)?;
        u32::try_from(decimals).map_err(|_| Error::InvalidAmount)
    }

    /// Fetch the name of a TRC20 token.
    pub async fn trc20_name(&self, contract: &Address) -> Result<String> {
        let ext = self.constant_call(contract, trc20::name_call()).await?;
        Ok(trc20::decode_string(first_constant_result(&ext)?))
    }

    /// Fetch the ticker symbol of a TRC20 token.
    pub async fn trc20_symbol(&self, contract: &Address) -> Result<String> {
        let ext = self.constant_call(contract, trc20::symbol_call()).await?;
        Ok(trc20::decode_string(first_constant_result(&ext)?))
    }

    /// Build an unsigned TRC20 `transfer(to, amount)` call.
    ///
    /// `amount` is in the token's smallest unit and `fee_limit` caps what
    /// the caller is willing to burn on energy. The fee limit is written
    /// into the built transaction, which changes its raw data, so the
    /// transaction id is recomputed before returning.
    pub async fn trc20_transfer(
        &self,
        from: &Address,
        to: &Address,
        contract: &Address,
        amount: u128,
        fee_limit: impl IntoTrx,
    ) -> Result<api::TransactionExtention> {
        if amount == 0 {
            return Err(Error::InvalidAmount);
        }
        let fee_limit = fee_limit.into_trx()?;
        if !fee_limit.is_positive() {
            return Err(Error::InvalidParams);
        }
        let request = core::TriggerSmartContract {
            owner_address: from.to_vec(),
            contract_address: contract.to_vec(),
            data: trc20::transfer_call(to, amount),
            ..Default::default()
        };
        let mut ext = self.transport.trigger_contract(request).await?;
        check_result(&ext)?;
        apply_fee_limit(&mut ext, fee_limit)?;
        Ok(ext)
    }

    /// Run a read-only contract call as the zero address.
    async fn constant_call(
        &self,
        contract: &Address,
        data: Vec<u8>,
    ) -> Result<api::TransactionExtention> {
        self.trigger_constant(&Address::ZERO, contract, data).await
    }

    // ========================================================================
    // Connection Management
    // ========================================================================

    /// Close the underlying transports.
    pub async fn close(&self) -> Result<()> {
        self.transport.close().await
    }
}

impl fmt::Debug for Tron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tron")
            .field("network", &self.network)
            .finish_non_exhaustive()
    }
}

/// Shared result-code check for transaction-building responses.
fn check_result(ext: &api::TransactionExtention) -> Result<()> {
    if let Some(result) = &ext.result {
        if result.code != ResponseCode::Success as i32 {
            return Err(Error::transaction_failed(result.message_str()));
        }
    }
    Ok(())
}

/// The first constant-call return value, which is where a contract's output
/// lands for read-only calls.
fn first_constant_result(ext: &api::TransactionExtention) -> Result<&[u8]> {
    ext.constant_result
        .first()
        .map(Vec::as_slice)
        .ok_or(Error::NilResponse)
}

/// Write `fee_limit` into a built transaction and refresh its id, since the
/// id is the hash of the raw data just mutated.
fn apply_fee_limit(ext: &mut api::TransactionExtention, fee_limit: Trx) -> Result<()> {
    let tx = ext.transaction.as_mut().ok_or(Error::InvalidTransaction)?;
    let raw = tx.raw_data.as_mut().ok_or(Error::InvalidTransaction)?;
    raw.fee_limit = fee_limit.as_sun();
    ext.txid = signer::txid(tx)?;
    Ok(())
}

fn build_transport(nodes: &[NodeConfig]) -> Result<Arc<dyn Transport>> {
    let mut members: Vec<Arc<dyn Transport>> = Vec::with_capacity(nodes.len());
    for node in nodes {
        let transport: Arc<dyn Transport> = match node.protocol {
            Protocol::Grpc => Arc::new(GrpcTransport::new(node)?),
            Protocol::Http => Arc::new(HttpTransport::new(node)?),
        };
        members.push(transport);
    }
    if members.len() == 1 {
        Ok(members.remove(0))
    } else {
        Ok(Arc::new(RoundRobinTransport::new(members)?))
    }
}

/// Builder for creating a [`Tron`] client.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use tron_kit::{Metrics, NodeConfig, Tron};
///
/// # fn example() -> Result<(), tron_kit::Error> {
/// // Default public endpoint for the network.
/// let tron = Tron::mainnet().build()?;
///
/// // A node pool with an API key and metrics.
/// let registry = prometheus::Registry::new();
/// let tron = Tron::mainnet()
///     .node(NodeConfig::grpc("grpc.trongrid.io:50051").with_header("TRON-PRO-API-KEY", "key"))
///     .node(NodeConfig::http("https://api.trongrid.io").with_header("TRON-PRO-API-KEY", "key"))
///     .metrics(Arc::new(Metrics::new(&registry)?))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct TronBuilder {
    network: Network,
    nodes: Vec<NodeConfig>,
    collector: Option<Arc<dyn MetricsCollector>>,
}

impl TronBuilder {
    fn new(network: Network) -> Self {
        Self {
            network,
            nodes: Vec::new(),
            collector: None,
        }
    }

    /// Add a node endpoint to the pool.
    pub fn node(mut self, node: NodeConfig) -> Self {
        self.nodes.push(node);
        self
    }

    /// Add every endpoint from an iterator to the pool.
    pub fn nodes(mut self, nodes: impl IntoIterator<Item = NodeConfig>) -> Self {
        self.nodes.extend(nodes);
        self
    }

    /// Record request metrics through `collector`.
    pub fn metrics(mut self, collector: Arc<dyn MetricsCollector>) -> Self {
        self.collector = Some(collector);
        self
    }

    /// Build the client.
    ///
    /// When no node was added, the pool defaults to the network's public
    /// gRPC endpoint.
    pub fn build(self) -> Result<Tron> {
        let nodes = if self.nodes.is_empty() {
            vec![NodeConfig::grpc(self.network.default_grpc_endpoint())]
        } else {
            self.nodes
        };
        let config = Config {
            nodes,
            network: self.network,
        };
        config.validate()?;

        let mut transport = build_transport(&config.nodes)?;
        if let Some(collector) = self.collector {
            let total = config.nodes.len() as i64;
            // No health tracking exists: every configured endpoint is
            // reported healthy.
            collector.set_pool_health("tron", total, total, 0);
            transport = Arc::new(MetricsTransport::new(transport, collector));
        }
        Ok(Tron {
            transport,
            network: config.network,
        })
    }
}

impl TryFrom<TronBuilder> for Tron {
    type Error = Error;

    fn try_from(builder: TronBuilder) -> Result<Self> {
        builder.build()
    }
}

impl fmt::Debug for TronBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TronBuilder")
            .field("network", &self.network)
            .field("nodes", &self.nodes)
            .field("metrics", &self.collector.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr() -> Address {
        "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t".parse().unwrap()
    }

    fn param(key: &str, value: i64) -> core::chain_parameters::ChainParameter {
        core::chain_parameters::ChainParameter {
            key: key.to_string(),
            value,
        }
    }

    // ========================================================================
    // Builder tests
    // ========================================================================

    #[tokio::test]
    async fn test_mainnet_builder_defaults() {
        let tron = Tron::mainnet().build().unwrap();
        assert_eq!(tron.network(), Network::Mainnet);
    }

    #[tokio::test]
    async fn test_testnet_builders() {
        assert_eq!(Tron::shasta().build().unwrap().network(), Network::Shasta);
        assert_eq!(Tron::nile().build().unwrap().network(), Network::Nile);
    }

    #[tokio::test]
    async fn test_builder_accepts_mixed_protocols() {
        let tron = Tron::mainnet()
            .node(NodeConfig::grpc("grpc.trongrid.io:50051"))
            .node(NodeConfig::http("https://api.trongrid.io"))
            .build()
            .unwrap();
        assert_eq!(tron.network(), Network::Mainnet);
    }

    #[test]
    fn test_builder_rejects_blank_node_address() {
        let err = Tron::mainnet()
            .node(NodeConfig::grpc("   "))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[tokio::test]
    async fn test_builder_try_from() {
        let tron: Tron = Tron::nile().try_into().unwrap();
        assert_eq!(tron.network(), Network::Nile);
    }

    #[test]
    fn test_connect_requires_nodes() {
        let err = Tron::connect(Config::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[tokio::test]
    async fn test_debug_hides_internals() {
        let tron = Tron::mainnet().build().unwrap();
        let debug = format!("{tron:?}");
        assert!(debug.contains("Tron"));
        assert!(debug.contains("Mainnet"));
    }

    // ========================================================================
    // Validation tests (no node contact)
    // ========================================================================

    #[tokio::test]
    async fn test_transfer_rejects_non_positive_amount() {
        let tron = Tron::mainnet().build().unwrap();
        let err = tron
            .transfer(&Address::ZERO, &addr(), Trx::ZERO)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidAmount));

        let err = tron
            .transfer(&Address::ZERO, &addr(), Trx::sun(-5))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidAmount));
    }

    #[tokio::test]
    async fn test_transfer_accepts_string_amounts() {
        let tron = Tron::mainnet().build().unwrap();
        let err = tron
            .transfer(&Address::ZERO, &addr(), "0 TRX")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidAmount));

        let err = tron
            .transfer(&Address::ZERO, &addr(), "ten TRX")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidAmount));
    }

    #[tokio::test]
    async fn test_trc20_transfer_rejects_zero_amount() {
        let tron = Tron::mainnet().build().unwrap();
        let err = tron
            .trc20_transfer(&addr(), &addr(), &addr(), 0, Trx::trx(10))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidAmount));
    }

    #[tokio::test]
    async fn test_trc20_transfer_rejects_non_positive_fee_limit() {
        let tron = Tron::mainnet().build().unwrap();
        let err = tron
            .trc20_transfer(&addr(), &addr(), &addr(), 1, Trx::ZERO)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParams));
    }

    // ========================================================================
    // Chain parameter tests
    // ========================================================================

    #[test]
    fn test_chain_params_mapping() {
        let parameters = core::ChainParameters {
            chain_parameter: vec![
                param("getEnergyFee", 420),
                param("getTransactionFee", 1000),
                param("getTotalEnergyCurrentLimit", 180_000_000_000),
                param("getFreeNetLimit", 600),
                param("getCreateAccountFee", 100_000),
                param("getCreateNewAccountFeeInSystemContract", 1_000_000),
                param("getWitnessPayPerBlock", 16_000_000),
            ],
        };
        let params = ChainParams::from(&parameters);
        assert_eq!(params.energy_fee, 420);
        assert_eq!(params.transaction_fee, 1000);
        assert_eq!(params.total_energy_current_limit, 180_000_000_000);
        assert_eq!(params.free_net_limit, 600);
        assert_eq!(params.create_account_fee, 100_000);
        assert_eq!(params.create_new_account_fee_in_system_contract, 1_000_000);
    }

    #[test]
    fn test_chain_params_absent_keys_stay_zero() {
        let params = ChainParams::from(&core::ChainParameters::default());
        assert_eq!(params, ChainParams::default());
    }
}
