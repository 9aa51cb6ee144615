//! Shared test doubles: a scriptable [`Transport`] and a recording
//! [`MetricsCollector`].

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tron_kit::proto::{api, core};
use tron_kit::{Error, MetricsCollector, Result, Transport, TransportError};

/// Ordered record of which pool member served which call.
pub type CallLog = Arc<Mutex<Vec<(usize, &'static str)>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// A transport whose responses are scripted per test.
///
/// Defaults are chosen so the happy path works without setup: `get_account`
/// echoes the request, `broadcast_transaction` accepts, and everything else
/// returns an empty message. Every call is appended to the shared log
/// together with the member id, which is what the pool rotation tests read.
pub struct MockTransport {
    id: usize,
    log: CallLog,
    fail: bool,
    close_fails: bool,
    account: Option<core::Account>,
    ext: Option<api::TransactionExtention>,
    ret: Option<api::Return>,
    closed: Arc<AtomicUsize>,
}

impl MockTransport {
    pub fn ok() -> Self {
        Self::pooled(0, call_log())
    }

    pub fn pooled(id: usize, log: CallLog) -> Self {
        Self {
            id,
            log,
            fail: false,
            close_fails: false,
            account: None,
            ext: None,
            ret: None,
            closed: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Every operation fails with a transport-wrapped `NotConnected`.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::ok()
        }
    }

    pub fn with_account(mut self, account: core::Account) -> Self {
        self.account = Some(account);
        self
    }

    pub fn with_ext(mut self, ext: api::TransactionExtention) -> Self {
        self.ext = Some(ext);
        self
    }

    pub fn with_return(mut self, ret: api::Return) -> Self {
        self.ret = Some(ret);
        self
    }

    pub fn with_failing_close(mut self) -> Self {
        self.close_fails = true;
        self
    }

    /// Handle on the close counter, kept valid after the mock is moved
    /// into an `Arc<dyn Transport>`.
    pub fn closes(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.closed)
    }

    fn touch(&self, method: &'static str) -> Result<()> {
        self.log.lock().unwrap().push((self.id, method));
        if self.fail {
            return Err(Error::Transport(TransportError::new(
                "mock",
                format!("mock-{}", self.id),
                method,
                Error::NotConnected,
            )));
        }
        Ok(())
    }

    fn ext(&self) -> api::TransactionExtention {
        self.ext.clone().unwrap_or_default()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get_account(&self, account: core::Account) -> Result<core::Account> {
        self.touch("GetAccount")?;
        Ok(self.account.clone().unwrap_or(account))
    }

    async fn get_account_resource(
        &self,
        _account: core::Account,
    ) -> Result<api::AccountResourceMessage> {
        self.touch("GetAccountResource")?;
        Ok(Default::default())
    }

    async fn create_account(
        &self,
        _contract: core::AccountCreateContract,
    ) -> Result<api::TransactionExtention> {
        self.touch("CreateAccount")?;
        Ok(self.ext())
    }

    async fn get_now_block(&self) -> Result<api::BlockExtention> {
        self.touch("GetNowBlock")?;
        Ok(Default::default())
    }

    async fn get_block_by_num(&self, _num: i64) -> Result<api::BlockExtention> {
        self.touch("GetBlockByNum")?;
        Ok(Default::default())
    }

    async fn get_block_by_id(&self, _id: Vec<u8>) -> Result<core::Block> {
        self.touch("GetBlockById")?;
        Ok(Default::default())
    }

    async fn get_block_by_limit_next(
        &self,
        _start: i64,
        _end: i64,
    ) -> Result<api::BlockListExtention> {
        self.touch("GetBlockByLimitNext")?;
        Ok(Default::default())
    }

    async fn get_block_by_latest_num(&self, _num: i64) -> Result<api::BlockListExtention> {
        self.touch("GetBlockByLatestNum")?;
        Ok(Default::default())
    }

    async fn get_transaction_info_by_block_num(
        &self,
        _num: i64,
    ) -> Result<api::TransactionInfoList> {
        self.touch("GetTransactionInfoByBlockNum")?;
        Ok(Default::default())
    }

    async fn get_transaction_by_id(&self, _id: Vec<u8>) -> Result<core::Transaction> {
        self.touch("GetTransactionById")?;
        Ok(Default::default())
    }

    async fn get_transaction_info_by_id(&self, _id: Vec<u8>) -> Result<core::TransactionInfo> {
        self.touch("GetTransactionInfoById")?;
        Ok(Default::default())
    }

    async fn broadcast_transaction(&self, _tx: core::Transaction) -> Result<api::Return> {
        self.touch("BroadcastTransaction")?;
        Ok(self.ret.clone().unwrap_or(api::Return {
            result: true,
            ..Default::default()
        }))
    }

    async fn create_transaction(
        &self,
        _contract: core::TransferContract,
    ) -> Result<api::TransactionExtention> {
        self.touch("CreateTransaction")?;
        Ok(self.ext())
    }

    async fn trigger_contract(
        &self,
        _contract: core::TriggerSmartContract,
    ) -> Result<api::TransactionExtention> {
        self.touch("TriggerContract")?;
        Ok(self.ext())
    }

    async fn trigger_constant_contract(
        &self,
        _contract: core::TriggerSmartContract,
    ) -> Result<api::TransactionExtention> {
        self.touch("TriggerConstantContract")?;
        Ok(self.ext())
    }

    async fn estimate_energy(
        &self,
        _contract: core::TriggerSmartContract,
    ) -> Result<api::EstimateEnergyMessage> {
        self.touch("EstimateEnergy")?;
        Ok(Default::default())
    }

    async fn deploy_contract(
        &self,
        _contract: core::CreateSmartContract,
    ) -> Result<api::TransactionExtention> {
        self.touch("DeployContract")?;
        Ok(self.ext())
    }

    async fn get_contract(&self, _address: Vec<u8>) -> Result<core::SmartContract> {
        self.touch("GetContract")?;
        Ok(Default::default())
    }

    async fn update_setting(
        &self,
        _contract: core::UpdateSettingContract,
    ) -> Result<api::TransactionExtention> {
        self.touch("UpdateSetting")?;
        Ok(self.ext())
    }

    async fn update_energy_limit(
        &self,
        _contract: core::UpdateEnergyLimitContract,
    ) -> Result<api::TransactionExtention> {
        self.touch("UpdateEnergyLimit")?;
        Ok(self.ext())
    }

    async fn get_delegated_resource(
        &self,
        _msg: api::DelegatedResourceMessage,
    ) -> Result<api::DelegatedResourceList> {
        self.touch("GetDelegatedResource")?;
        Ok(Default::default())
    }

    async fn get_delegated_resource_v2(
        &self,
        _msg: api::DelegatedResourceMessage,
    ) -> Result<api::DelegatedResourceList> {
        self.touch("GetDelegatedResourceV2")?;
        Ok(Default::default())
    }

    async fn get_delegated_resource_account_index(
        &self,
        _address: Vec<u8>,
    ) -> Result<core::DelegatedResourceAccountIndex> {
        self.touch("GetDelegatedResourceAccountIndex")?;
        Ok(Default::default())
    }

    async fn get_delegated_resource_account_index_v2(
        &self,
        _address: Vec<u8>,
    ) -> Result<core::DelegatedResourceAccountIndex> {
        self.touch("GetDelegatedResourceAccountIndexV2")?;
        Ok(Default::default())
    }

    async fn get_can_delegated_max_size(
        &self,
        _msg: api::CanDelegatedMaxSizeRequestMessage,
    ) -> Result<api::CanDelegatedMaxSizeResponseMessage> {
        self.touch("GetCanDelegatedMaxSize")?;
        Ok(Default::default())
    }

    async fn delegate_resource(
        &self,
        _contract: core::DelegateResourceContract,
    ) -> Result<api::TransactionExtention> {
        self.touch("DelegateResource")?;
        Ok(self.ext())
    }

    async fn undelegate_resource(
        &self,
        _contract: core::UnDelegateResourceContract,
    ) -> Result<api::TransactionExtention> {
        self.touch("UnDelegateResource")?;
        Ok(self.ext())
    }

    async fn list_nodes(&self) -> Result<api::NodeList> {
        self.touch("ListNodes")?;
        Ok(Default::default())
    }

    async fn get_chain_parameters(&self) -> Result<core::ChainParameters> {
        self.touch("GetChainParameters")?;
        Ok(Default::default())
    }

    async fn get_next_maintenance_time(&self) -> Result<api::NumberMessage> {
        self.touch("GetNextMaintenanceTime")?;
        Ok(Default::default())
    }

    async fn total_transaction(&self) -> Result<api::NumberMessage> {
        self.touch("TotalTransaction")?;
        Ok(Default::default())
    }

    async fn close(&self) -> Result<()> {
        self.closed.fetch_add(1, Ordering::SeqCst);
        if self.close_fails {
            return Err(Error::invalid_config(format!("close {}", self.id)));
        }
        Ok(())
    }
}

/// Collector that keeps every observation for later assertions, in the
/// shape of the real Prometheus-backed one.
#[derive(Default)]
pub struct RecordingCollector {
    pub requests: Mutex<Vec<(String, String, String, Duration)>>,
    pub retries: Mutex<Vec<(String, String)>>,
    pub errors: Mutex<Vec<(String, String, String)>>,
    pub pool: Mutex<Vec<(String, i64, i64, i64)>>,
}

impl MetricsCollector for RecordingCollector {
    fn record_request(&self, blockchain: &str, method: &str, status: &str, duration: Duration) {
        self.requests.lock().unwrap().push((
            blockchain.to_string(),
            method.to_string(),
            status.to_string(),
            duration,
        ));
    }

    fn record_retry(&self, blockchain: &str, method: &str) {
        self.retries
            .lock()
            .unwrap()
            .push((blockchain.to_string(), method.to_string()));
    }

    fn set_pool_health(&self, blockchain: &str, total: i64, healthy: i64, disabled: i64) {
        self.pool
            .lock()
            .unwrap()
            .push((blockchain.to_string(), total, healthy, disabled));
    }

    fn record_error(&self, blockchain: &str, method: &str, error_type: &str) {
        self.errors.lock().unwrap().push((
            blockchain.to_string(),
            method.to_string(),
            error_type.to_string(),
        ));
    }
}

/// 32-byte big-endian ABI word holding `value`.
pub fn abi_uint(value: u128) -> Vec<u8> {
    let mut word = vec![0u8; 32];
    word[16..].copy_from_slice(&value.to_be_bytes());
    word
}

/// ABI encoding of a dynamic string: offset word, length word, padded
/// content.
pub fn abi_string(s: &str) -> Vec<u8> {
    let mut data = abi_uint(32);
    data.extend(abi_uint(s.len() as u128));
    let mut bytes = s.as_bytes().to_vec();
    bytes.resize((s.len() + 31) / 32 * 32, 0);
    data.extend(bytes);
    data
}

/// A minimally-populated built transaction, shaped like a node's response
/// to a create/trigger call.
pub fn built_ext() -> api::TransactionExtention {
    api::TransactionExtention {
        transaction: Some(core::Transaction {
            raw_data: Some(core::transaction::Raw {
                ref_block_bytes: vec![0x12, 0x34],
                ref_block_hash: vec![0u8; 8],
                expiration: 1_700_000_060_000,
                timestamp: 1_700_000_000_000,
                ..Default::default()
            }),
            ..Default::default()
        }),
        txid: vec![0u8; 32],
        result: Some(api::Return {
            result: true,
            ..Default::default()
        }),
        ..Default::default()
    }
}
