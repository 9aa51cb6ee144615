//! Round-robin distribution over a set of transports.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::client::transport::Transport;
use crate::error::{Error, Result};
use crate::proto::{api, core};

/// Spreads calls across several transports in strict rotation.
///
/// Every call picks the next transport in line, including calls that end in
/// an error: there is no failover and no health tracking, so a dead endpoint
/// keeps receiving its share and its failures surface to the caller. Mixing
/// protocols in one pool is fine since every member speaks the same trait.
pub struct RoundRobinTransport {
    transports: Vec<Arc<dyn Transport>>,
    counter: AtomicU64,
}

impl RoundRobinTransport {
    /// Build a pool over the given transports.
    ///
    /// Fails with [`Error::InvalidConfig`] when the list is empty.
    pub fn new(transports: Vec<Arc<dyn Transport>>) -> Result<Self> {
        if transports.is_empty() {
            return Err(Error::invalid_config("at least one transport is required"));
        }
        Ok(Self {
            transports,
            counter: AtomicU64::new(0),
        })
    }

    /// Number of transports in the pool.
    pub fn len(&self) -> usize {
        self.transports.len()
    }

    /// Always false: construction rejects an empty pool.
    pub fn is_empty(&self) -> bool {
        self.transports.is_empty()
    }

    /// The transport next in rotation.
    ///
    /// Relaxed is enough here: the counter needs atomicity, not ordering
    /// with other memory.
    fn next(&self) -> &dyn Transport {
        let index = self.counter.fetch_add(1, Ordering::Relaxed) as usize % self.transports.len();
        self.transports[index].as_ref()
    }
}

#[async_trait]
impl Transport for RoundRobinTransport {
    // ------------------------------------------------------------------
    // Account operations
    // ------------------------------------------------------------------

    async fn get_account(&self, account: core::Account) -> Result<core::Account> {
        self.next().get_account(account).await
    }

    async fn get_account_resource(
        &self,
        account: core::Account,
    ) -> Result<api::AccountResourceMessage> {
        self.next().get_account_resource(account).await
    }

    async fn create_account(
        &self,
        contract: core::AccountCreateContract,
    ) -> Result<api::TransactionExtention> {
        self.next().create_account(contract).await
    }

    // ------------------------------------------------------------------
    // Block operations
    // ------------------------------------------------------------------

    async fn get_now_block(&self) -> Result<api::BlockExtention> {
        self.next().get_now_block().await
    }

    async fn get_block_by_num(&self, num: i64) -> Result<api::BlockExtention> {
        self.next().get_block_by_num(num).await
    }

    async fn get_block_by_id(&self, id: Vec<u8>) -> Result<core::Block> {
        self.next().get_block_by_id(id).await
    }

    async fn get_block_by_limit_next(
        &self,
        start: i64,
        end: i64,
    ) -> Result<api::BlockListExtention> {
        self.next().get_block_by_limit_next(start, end).await
    }

    async fn get_block_by_latest_num(&self, num: i64) -> Result<api::BlockListExtention> {
        self.next().get_block_by_latest_num(num).await
    }

    async fn get_transaction_info_by_block_num(
        &self,
        num: i64,
    ) -> Result<api::TransactionInfoList> {
        self.next().get_transaction_info_by_block_num(num).await
    }

    // ------------------------------------------------------------------
    // Transaction operations
    // ------------------------------------------------------------------

    async fn get_transaction_by_id(&self, id: Vec<u8>) -> Result<core::Transaction> {
        self.next().get_transaction_by_id(id).await
    }

    async fn get_transaction_info_by_id(&self, id: Vec<u8>) -> Result<core::TransactionInfo> {
        self.next().get_transaction_info_by_id(id).await
    }

    async fn broadcast_transaction(&self, tx: core::Transaction) -> Result<api::Return> {
        self.next().broadcast_transaction(tx).await
    }

    async fn create_transaction(
        &self,
        contract: core::TransferContract,
    ) -> Result<api::TransactionExtention> {
        self.next().create_transaction(contract).await
    }

    // ------------------------------------------------------------------
    // Contract operations
    // ------------------------------------------------------------------

    async fn trigger_contract(
        &self,
        contract: core::TriggerSmartContract,
    ) -> Result<api::TransactionExtention> {
        self.next().trigger_contract(contract).await
    }

    async fn trigger_constant_contract(
        &self,
        contract: core::TriggerSmartContract,
    ) -> Result<api::TransactionExtention> {
        self.next().trigger_constant_contract(contract).await
    }

    async fn estimate_energy(
        &self,
        contract: core::TriggerSmartContract,
    ) -> Result<api::EstimateEnergyMessage> {
        self.next().estimate_energy(contract).await
    }

    async fn deploy_contract(
        &self,
        contract: core::CreateSmartContract,
    ) -> Result<api::TransactionExtention> {
        self.next().deploy_contract(contract).await
    }

    async fn get_contract(&self, address: Vec<u8>) -> Result<core::SmartContract> {
        self.next().get_contract(address).await
    }

    async fn update_setting(
        &self,
        contract: core::UpdateSettingContract,
    ) -> Result<api::TransactionExtention> {
        self.next().update_setting(contract).await
    }

    async fn update_energy_limit(
        &self,
        contract: core::UpdateEnergyLimitContract,
    ) -> Result<api::TransactionExtention> {
        self.next().update_energy_limit(contract).await
    }

    // ------------------------------------------------------------------
    // Resource operations
    // ------------------------------------------------------------------

    async fn get_delegated_resource(
        &self,
        msg: api::DelegatedResourceMessage,
    ) -> Result<api::DelegatedResourceList> {
        self.next().get_delegated_resource(msg).await
    }

    async fn get_delegated_resource_v2(
        &self,
        msg: api::DelegatedResourceMessage,
    ) -> Result<api::DelegatedResourceList> {
        self.next().get_delegated_resource_v2(msg).await
    }

    async fn get_delegated_resource_account_index(
        &self,
        address: Vec<u8>,
    ) -> Result<core::DelegatedResourceAccountIndex> {
        self.next()
            .get_delegated_resource_account_index(address)
            .await
    }

    async fn get_delegated_resource_account_index_v2(
        &self,
        address: Vec<u8>,
    ) -> Result<core::DelegatedResourceAccountIndex> {
        self.next()
            .get_delegated_resource_account_index_v2(address)
            .await
    }

    async fn get_can_delegated_max_size(
        &self,
        msg: api::CanDelegatedMaxSizeRequestMessage,
    ) -> Result<api::CanDelegatedMaxSizeResponseMessage> {
        self.next().get_can_delegated_max_size(msg).await
    }

    async fn delegate_resource(
        &self,
        contract: core::DelegateResourceContract,
    ) -> Result<api::TransactionExtention> {
        self.next().delegate_resource(contract).await
    }

    async fn undelegate_resource(
        &self,
        contract: core::UnDelegateResourceContract,
    ) -> Result<api::TransactionExtention> {
        self.next().undelegate_resource(contract).await
    }

    // ------------------------------------------------------------------
    // Network operations
    // ------------------------------------------------------------------

    async fn list_nodes(&self) -> Result<api::NodeList> {
        self.next().list_nodes().await
    }

    async fn get_chain_parameters(&self) -> Result<core::ChainParameters> {
        self.next().get_chain_parameters().await
    }

    async fn get_next_maintenance_time(&self) -> Result<api::NumberMessage> {
        self.next().get_next_maintenance_time().await
    }

    async fn total_transaction(&self) -> Result<api::NumberMessage> {
        self.next().total_transaction().await
    }

    // ------------------------------------------------------------------
    // Connection management
    // ------------------------------------------------------------------

    /// Close every member. All members are visited even when one fails; the
    /// last failure is returned.
    async fn close(&self) -> Result<()> {
        let mut result = Ok(());
        for transport in &self.transports {
            if let Err(err) = transport.close().await {
                result = Err(err);
            }
        }
        result
    }
}

impl std::fmt::Debug for RoundRobinTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundRobinTransport")
            .field("transports", &self.transports.len())
            .finish()
    }
}
