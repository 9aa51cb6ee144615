//! The transport capability contract.

use async_trait::async_trait;

use crate::error::Result;
use crate::proto::{api, core};

/// The full operation set every node transport implements.
///
/// Both wire protocols (gRPC and HTTP) expose the same logical operations;
/// this trait is the uniform seam callers program against. Implementations
/// are composed freely: [`RoundRobinTransport`](super::RoundRobinTransport)
/// distributes calls over any mix of children, and
/// [`MetricsTransport`](super::MetricsTransport) wraps any transport to
/// record latency and outcome. A typical caller holds
/// `Arc<dyn Transport>` built as `Metrics(RoundRobin([grpc, http, ...]))`.
///
/// # Concurrency
///
/// Every method takes `&self` and must be safe under concurrent invocation
/// from any number of tasks; the distributor and decorator layers route
/// calls to shared instances without locking.
///
/// # Cancellation and deadlines
///
/// Operations are plain futures: dropping one cancels the in-flight network
/// call. Deadlines are the caller's concern, applied with
/// [`tokio::time::timeout`] around any call; a per-endpoint timeout can also
/// be set in [`NodeConfig`](crate::NodeConfig). No method retries, caches,
/// or fails over.
///
/// # Errors
///
/// Failures surface as [`TransportError`](crate::TransportError) carrying
/// the endpoint host, protocol tag, and method name, with the underlying
/// cause available through the error's source chain. Domain sentinels such
/// as [`Error::InvalidConfig`](crate::Error::InvalidConfig) are matched
/// structurally, never by message text.
#[async_trait]
pub trait Transport: Send + Sync {
    // ------------------------------------------------------------------
    // Account operations
    // ------------------------------------------------------------------

    /// Fetch a full account record. The request carries the address to look
    /// up in its `address` field.
    async fn get_account(&self, account: core::Account) -> Result<core::Account>;

    /// Fetch bandwidth/energy usage and limits for an account.
    async fn get_account_resource(
        &self,
        account: core::Account,
    ) -> Result<api::AccountResourceMessage>;

    /// Build an account-creation transaction.
    async fn create_account(
        &self,
        contract: core::AccountCreateContract,
    ) -> Result<api::TransactionExtention>;

    // ------------------------------------------------------------------
    // Block operations
    // ------------------------------------------------------------------

    /// Fetch the latest block.
    async fn get_now_block(&self) -> Result<api::BlockExtention>;

    /// Fetch a block by height.
    async fn get_block_by_num(&self, num: i64) -> Result<api::BlockExtention>;

    /// Fetch a block by its 32-byte id.
    async fn get_block_by_id(&self, id: Vec<u8>) -> Result<core::Block>;

    /// Fetch the blocks in `[start, end)`.
    async fn get_block_by_limit_next(
        &self,
        start: i64,
        end: i64,
    ) -> Result<api::BlockListExtention>;

    /// Fetch the latest `num` blocks.
    async fn get_block_by_latest_num(&self, num: i64) -> Result<api::BlockListExtention>;

    /// Fetch the execution info of every transaction in a block.
    async fn get_transaction_info_by_block_num(
        &self,
        num: i64,
    ) -> Result<api::TransactionInfoList>;

    // ------------------------------------------------------------------
    // Transaction operations
    // ------------------------------------------------------------------

    /// Fetch a transaction by its 32-byte id.
    async fn get_transaction_by_id(&self, id: Vec<u8>) -> Result<core::Transaction>;

    /// Fetch the execution info of a transaction by its 32-byte id.
    async fn get_transaction_info_by_id(&self, id: Vec<u8>) -> Result<core::TransactionInfo>;

    /// Submit a signed transaction to the network.
    async fn broadcast_transaction(&self, tx: core::Transaction) -> Result<api::Return>;

    /// Build an unsigned TRX transfer transaction.
    async fn create_transaction(
        &self,
        contract: core::TransferContract,
    ) -> Result<api::TransactionExtention>;

    // ------------------------------------------------------------------
    // Contract operations
    // ------------------------------------------------------------------

    /// Build a contract-call transaction.
    async fn trigger_contract(
        &self,
        contract: core::TriggerSmartContract,
    ) -> Result<api::TransactionExtention>;

    /// Execute a contract call without broadcasting (read-only call).
    async fn trigger_constant_contract(
        &self,
        contract: core::TriggerSmartContract,
    ) -> Result<api::TransactionExtention>;

    /// Estimate the energy a contract call would consume.
    async fn estimate_energy(
        &self,
        contract: core::TriggerSmartContract,
    ) -> Result<api::EstimateEnergyMessage>;

    /// Build a contract-deployment transaction.
    async fn deploy_contract(
        &self,
        contract: core::CreateSmartContract,
    ) -> Result<api::TransactionExtention>;

    /// Fetch a deployed contract (ABI, bytecode, settings) by address.
    async fn get_contract(&self, address: Vec<u8>) -> Result<core::SmartContract>;

    /// Build a transaction updating a contract's consume-user-resource
    /// percent.
    async fn update_setting(
        &self,
        contract: core::UpdateSettingContract,
    ) -> Result<api::TransactionExtention>;

    /// Build a transaction updating a contract's origin energy limit.
    async fn update_energy_limit(
        &self,
        contract: core::UpdateEnergyLimitContract,
    ) -> Result<api::TransactionExtention>;

    // ------------------------------------------------------------------
    // Resource operations
    // ------------------------------------------------------------------

    /// List V1 resource delegations between two accounts.
    async fn get_delegated_resource(
        &self,
        msg: api::DelegatedResourceMessage,
    ) -> Result<api::DelegatedResourceList>;

    /// List V2 resource delegations between two accounts.
    async fn get_delegated_resource_v2(
        &self,
        msg: api::DelegatedResourceMessage,
    ) -> Result<api::DelegatedResourceList>;

    /// Fetch the V1 delegation index (from/to account lists) of an account.
    async fn get_delegated_resource_account_index(
        &self,
        address: Vec<u8>,
    ) -> Result<core::DelegatedResourceAccountIndex>;

    /// Fetch the V2 delegation index of an account.
    async fn get_delegated_resource_account_index_v2(
        &self,
        address: Vec<u8>,
    ) -> Result<core::DelegatedResourceAccountIndex>;

    /// Fetch the maximum delegatable balance of an account for a resource.
    async fn get_can_delegated_max_size(
        &self,
        msg: api::CanDelegatedMaxSizeRequestMessage,
    ) -> Result<api::CanDelegatedMaxSizeResponseMessage>;

    /// Build a resource-delegation transaction.
    async fn delegate_resource(
        &self,
        contract: core::DelegateResourceContract,
    ) -> Result<api::TransactionExtention>;

    /// Build a transaction reclaiming a resource delegation.
    async fn undelegate_resource(
        &self,
        contract: core::UnDelegateResourceContract,
    ) -> Result<api::TransactionExtention>;

    // ------------------------------------------------------------------
    // Network operations
    // ------------------------------------------------------------------

    /// List the peers known to the node.
    async fn list_nodes(&self) -> Result<api::NodeList>;

    /// Fetch the current committee-governed chain parameters.
    async fn get_chain_parameters(&self) -> Result<core::ChainParameters>;

    /// Fetch the next maintenance-window timestamp in milliseconds.
    async fn get_next_maintenance_time(&self) -> Result<api::NumberMessage>;

    /// Fetch the total transaction count of the chain.
    async fn total_transaction(&self) -> Result<api::NumberMessage>;

    // ------------------------------------------------------------------
    // Connection management
    // ------------------------------------------------------------------

    /// Release held connections. Expected to be called at most once;
    /// implementations treat a repeated close as a no-op.
    async fn close(&self) -> Result<()>;
}
