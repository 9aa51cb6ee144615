//! Call instrumentation: a collector abstraction, a Prometheus
//! implementation, and a transport decorator that feeds it.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, IntGauge, IntGaugeVec, Opts, Registry};

use crate::client::transport::Transport;
use crate::error::{Error, Result};
use crate::proto::{api, core};

/// Sink for transport measurements.
///
/// [`MetricsTransport`] reports through this trait, so callers can plug in
/// their own backend instead of [`Metrics`].
pub trait MetricsCollector: Send + Sync {
    /// Record one finished call with its outcome label (`"success"` or
    /// `"error"`) and wall-clock duration.
    fn record_request(&self, blockchain: &str, method: &str, status: &str, duration: Duration);

    /// Record a retry attempt. Nothing in this crate retries; the hook
    /// exists for retry policies layered on top.
    fn record_retry(&self, blockchain: &str, method: &str);

    /// Publish pool composition. No selection logic reads these gauges; they
    /// are operational visibility only.
    fn set_pool_health(&self, blockchain: &str, total: i64, healthy: i64, disabled: i64);

    /// Record a classified error. The default implementation drops it.
    fn record_error(&self, blockchain: &str, method: &str, error_type: &str) {
        let _ = (blockchain, method, error_type);
    }
}

/// Prometheus-backed [`MetricsCollector`].
///
/// All families are registered against the caller's [`Registry`], so the
/// caller controls exposition and can scope metrics per client.
pub struct Metrics {
    requests_total: IntCounterVec,
    request_duration: HistogramVec,
    in_flight: IntGauge,
    errors_total: IntCounterVec,
    retries_total: IntCounterVec,
    pool_total: IntGaugeVec,
    pool_healthy: IntGaugeVec,
    pool_disabled: IntGaugeVec,
}

impl Metrics {
    /// Create the metric families and register them.
    ///
    /// Fails with [`Error::Metrics`] if a family name is already taken in
    /// the registry.
    pub fn new(registry: &Registry) -> Result<Self> {
        let requests_total = IntCounterVec::new(
            Opts::new("tron_rpc_requests_total", "Total number of RPC requests"),
            &["blockchain", "method", "status"],
        )?;
        let request_duration = HistogramVec::new(
            HistogramOpts::new("tron_rpc_duration_seconds", "RPC request duration in seconds"),
            &["blockchain", "method"],
        )?;
        let in_flight = IntGauge::new(
            "tron_rpc_in_flight",
            "Number of RPC requests currently in progress",
        )?;
        let errors_total = IntCounterVec::new(
            Opts::new("tron_rpc_errors_total", "Total number of RPC errors by type"),
            &["blockchain", "method", "error_type"],
        )?;
        let retries_total = IntCounterVec::new(
            Opts::new("tron_rpc_retries_total", "Total number of RPC retries"),
            &["blockchain", "method"],
        )?;
        let pool_total = IntGaugeVec::new(
            Opts::new("tron_rpc_pool_total", "Transports configured in the pool"),
            &["blockchain"],
        )?;
        let pool_healthy = IntGaugeVec::new(
            Opts::new("tron_rpc_pool_healthy", "Transports currently considered healthy"),
            &["blockchain"],
        )?;
        let pool_disabled = IntGaugeVec::new(
            Opts::new("tron_rpc_pool_disabled", "Transports currently disabled"),
            &["blockchain"],
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(request_duration.clone()))?;
        registry.register(Box::new(in_flight.clone()))?;
        registry.register(Box::new(errors_total.clone()))?;
        registry.register(Box::new(retries_total.clone()))?;
        registry.register(Box::new(pool_total.clone()))?;
        registry.register(Box::new(pool_healthy.clone()))?;
        registry.register(Box::new(pool_disabled.clone()))?;

        Ok(Self {
            requests_total,
            request_duration,
            in_flight,
            errors_total,
            retries_total,
            pool_total,
            pool_healthy,
            pool_disabled,
        })
    }

    /// Mark one more request in progress.
    pub fn inc_in_flight(&self) {
        self.in_flight.inc();
    }

    /// Mark one request finished.
    pub fn dec_in_flight(&self) {
        self.in_flight.dec();
    }
}

impl MetricsCollector for Metrics {
    fn record_request(&self, blockchain: &str, method: &str, status: &str, duration: Duration) {
        self.requests_total
            .with_label_values(&[blockchain, method, status])
            .inc();
        self.request_duration
            .with_label_values(&[blockchain, method])
            .observe(duration.as_secs_f64());
    }

    fn record_retry(&self, blockchain: &str, method: &str) {
        self.retries_total
            .with_label_values(&[blockchain, method])
            .inc();
    }

    fn set_pool_health(&self, blockchain: &str, total: i64, healthy: i64, disabled: i64) {
        self.pool_total.with_label_values(&[blockchain]).set(total);
        self.pool_healthy
            .with_label_values(&[blockchain])
            .set(healthy);
        self.pool_disabled
            .with_label_values(&[blockchain])
            .set(disabled);
    }

    fn record_error(&self, blockchain: &str, method: &str, error_type: &str) {
        self.errors_total
            .with_label_values(&[blockchain, method, error_type])
            .inc();
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics").finish_non_exhaustive()
    }
}

/// Bucket an error into the `error_type` label.
///
/// Substring matching over the rendered message. Upstream wording is not a
/// stable contract, so this stays best-effort and feeds labels only.
fn classify_error(err: &Error) -> &'static str {
    let text = err.to_string().to_lowercase();
    if text.contains("deadline exceeded") || text.contains("timed out") || text.contains("timeout")
    {
        "timeout"
    } else if text.contains("connection refused")
        || text.contains("connection reset")
        || text.contains("no route to host")
        || text.contains("network is unreachable")
    {
        "connection"
    } else if text.contains("canceled") {
        "canceled"
    } else if text.contains("unavailable") {
        "unavailable"
    } else {
        "other"
    }
}

/// Decorator that reports every call to a [`MetricsCollector`].
///
/// A pure observer: the wrapped transport's result or error comes back
/// bit-for-bit unchanged, and nothing is recorded until the call returns.
pub struct MetricsTransport {
    inner: Arc<dyn Transport>,
    collector: Arc<dyn MetricsCollector>,
    blockchain: String,
}

impl MetricsTransport {
    /// Wrap `inner`, labeling measurements with the default `"tron"`
    /// blockchain tag.
    pub fn new(inner: Arc<dyn Transport>, collector: Arc<dyn MetricsCollector>) -> Self {
        Self::with_blockchain(inner, collector, "tron")
    }

    /// Wrap `inner` with an explicit blockchain tag, for callers running
    /// several chains against one collector.
    pub fn with_blockchain(
        inner: Arc<dyn Transport>,
        collector: Arc<dyn MetricsCollector>,
        blockchain: impl Into<String>,
    ) -> Self {
        Self {
            inner,
            collector,
            blockchain: blockchain.into(),
        }
    }

    fn record<T>(&self, method: &str, start: Instant, result: &Result<T>) {
        let status = if result.is_ok() { "success" } else { "error" };
        if let Err(err) = result {
            self.collector
                .record_error(&self.blockchain, method, classify_error(err));
        }
        self.collector
            .record_request(&self.blockchain, method, status, start.elapsed());
    }
}

#[async_trait]
impl Transport for MetricsTransport {
    // ------------------------------------------------------------------
    // Account operations
    // ------------------------------------------------------------------

    async fn get_account(&self, account: core::Account) -> Result<core::Account> {
        let start = Instant::now();
        let result = self.inner.get_account(account).await;
        self.record("GetAccount", start, &result);
        result
    }

    async fn get_account_resource(
        &self,
        account: core::Account,
    ) -> Result<api::AccountResourceMessage> {
        let start = Instant::now();
        let result = self.inner.get_account_resource(account).await;
        self.record("GetAccountResource", start, &result);
        result
    }

    async fn create_account(
        &self,
        contract: core::AccountCreateContract,
    ) -> Result<api::TransactionExtention> {
        let start = Instant::now();
        let result = self.inner.create_account(contract).await;
        self.record("CreateAccount", start, &result);
        result
    }

    // ------------------------------------------------------------------
    // Block operations
    // ------------------------------------------------------------------

    async fn get_now_block(&self) -> Result<api::BlockExtention> {
        let start = Instant::now();
        let result = self.inner.get_now_block().await;
        self.record("GetNowBlock", start, &result);
        result
    }

    async fn get_block_by_num(&self, num: i64) -> Result<api::BlockExtention> {
        let start = Instant::now();
        let result = self.inner.get_block_by_num(num).await;
        self.record("GetBlockByNum", start, &result);
        result
    }

    async fn get_block_by_id(&self, id: Vec<u8>) -> Result<core::Block> {
        let start = Instant::now();
        let result = self.inner.get_block_by_id(id).await;
        self.record("GetBlockById", start, &result);
        result
    }

    async fn get_block_by_limit_next(
        &self,
        start_num: i64,
        end_num: i64,
    ) -> Result<api::BlockListExtention> {
        let start = Instant::now();
        let result = self.inner.get_block_by_limit_next(start_num, end_num).await;
        self.record("GetBlockByLimitNext", start, &result);
        result
    }

    async fn get_block_by_latest_num(&self, num: i64) -> Result<api::BlockListExtention> {
        let start = Instant::now();
        let result = self.inner.get_block_by_latest_num(num).await;
        self.record("GetBlockByLatestNum", start, &result);
        result
    }

    async fn get_transaction_info_by_block_num(
        &self,
        num: i64,
    ) -> Result<api::TransactionInfoList> {
        let start = Instant::now();
        let result = self.inner.get_transaction_info_by_block_num(num).await;
        self.record("GetTransactionInfoByBlockNum", start, &result);
        result
    }

    // ------------------------------------------------------------------
    // Transaction operations
    // ------------------------------------------------------------------

    async fn get_transaction_by_id(&self, id: Vec<u8>) -> Result<core::Transaction> {
        let start = Instant::now();
        let result = self.inner.get_transaction_by_id(id).await;
        self.record("GetTransactionById", start, &result);
        result
    }

    async fn get_transaction_info_by_id(&self, id: Vec<u8>) -> Result<core::TransactionInfo> {
        let start = Instant::now();
        let result = self.inner.get_transaction_info_by_id(id).await;
        self.record("GetTransactionInfoById", start, &result);
        result
    }

    async fn broadcast_transaction(&self, tx: core::Transaction) -> Result<api::Return> {
        let start = Instant::now();
        let result = self.inner.broadcast_transaction(tx).await;
        self.record("BroadcastTransaction", start, &result);
        result
    }

    async fn create_transaction(
        &self,
        contract: core::TransferContract,
    ) -> Result<api::TransactionExtention> {
        let start = Instant::now();
        let result = self.inner.create_transaction(contract).await;
        self.record("CreateTransaction", start, &result);
        result
    }

    // ------------------------------------------------------------------
    // Contract operations
    // ------------------------------------------------------------------

    async fn trigger_contract(
        &self,
        contract: core::TriggerSmartContract,
    ) -> Result<api::TransactionExtention> {
        let start = Instant::now();
        let result = self.inner.trigger_contract(contract).await;
        self.record("TriggerContract", start, &result);
        result
    }

    async fn trigger_constant_contract(
        &self,
        contract: core::TriggerSmartContract,
    ) -> Result<api::TransactionExtention> {
        let start = Instant::now();
        let result = self.inner.trigger_constant_contract(contract).await;
        self.record("TriggerConstantContract", start, &result);
        result
    }

    async fn estimate_energy(
        &self,
        contract: core::TriggerSmartContract,
    ) -> Result<api::EstimateEnergyMessage> {
        let start = Instant::now();
        let result = self.inner.estimate_energy(contract).await;
        self.record("EstimateEnergy", start, &result);
        result
    }

    async fn deploy_contract(
        &self,
        contract: core::CreateSmartContract,
    ) -> Result<api::TransactionExtention> {
        let start = Instant::now();
        let result = self.inner.deploy_contract(contract).await;
        self.record("DeployContract", start, &result);
        result
    }

    async fn get_contract(&self, address: Vec<u8>) -> Result<core::SmartContract> {
        let start = Instant::now();
        let result = self.inner.get_contract(address).await;
        self.record("GetContract", start, &result);
        result
    }

    async fn update_setting(
        &self,
        contract: core::UpdateSettingContract,
    ) -> Result<api::TransactionExtention> {
        let start = Instant::now();
        let result = self.inner.update_setting(contract).await;
        self.record("UpdateSetting", start, &result);
        result
    }

    async fn update_energy_limit(
        &self,
        contract: core::UpdateEnergyLimitContract,
    ) -> Result<api::TransactionExtention> {
        let start = Instant::now();
        let result = self.inner.update_energy_limit(contract).await;
        self.record("UpdateEnergyLimit", start, &result);
        result
    }

    // ------------------------------------------------------------------
    // Resource operations
    // ------------------------------------------------------------------

    async fn get_delegated_resource(
        &self,
        msg: api::DelegatedResourceMessage,
    ) -> Result<api::DelegatedResourceList> {
        let start = Instant::now();
        let result = self.inner.get_delegated_resource(msg).await;
        self.record("GetDelegatedResource", start, &result);
        result
    }

    async fn get_delegated_resource_v2(
        &self,
        msg: api::DelegatedResourceMessage,
    ) -> Result<api::DelegatedResourceList> {
        let start = Instant::now();
        let result = self.inner.get_delegated_resource_v2(msg).await;
        self.record("GetDelegatedResourceV2", start, &result);
        result
    }

    async fn get_delegated_resource_account_index(
        &self,
        address: Vec<u8>,
    ) -> Result<core::DelegatedResourceAccountIndex> {
        let start = Instant::now();
        let result = self.inner.get_delegated_resource_account_index(address).await;
        self.record("GetDelegatedResourceAccountIndex", start, &result);
        result
    }

    async fn get_delegated_resource_account_index_v2(
        &self,
        address: Vec<u8>,
    ) -> Result<core::DelegatedResourceAccountIndex> {
        let start = Instant::now();
        let result = self
            .inner
            .get_delegated_resource_account_index_v2(address)
            .await;
        self.record("GetDelegatedResourceAccountIndexV2", start, &result);
        result
    }

    async fn get_can_delegated_max_size(
        &self,
        msg: api::CanDelegatedMaxSizeRequestMessage,
    ) -> Result<api::CanDelegatedMaxSizeResponseMessage> {
        let start = Instant::now();
        let result = self.inner.get_can_delegated_max_size(msg).await;
        self.record("GetCanDelegatedMaxSize", start, &result);
        result
    }

    async fn delegate_resource(
        &self,
        contract: core::DelegateResourceContract,
    ) -> Result<api::TransactionExtention> {
        let start = Instant::now();
        let result = self.inner.delegate_resource(contract).await;
        self.record("DelegateResource", start, &result);
        result
    }

    async fn undelegate_resource(
        &self,
        contract: core::UnDelegateResourceContract,
    ) -> Result<api::TransactionExtention> {
        let start = Instant::now();
        let result = self.inner.undelegate_resource(contract).await;
        self.record("UnDelegateResource", start, &result);
        result
    }

    // ------------------------------------------------------------------
    // Network operations
    // ------------------------------------------------------------------

    async fn list_nodes(&self) -> Result<api::NodeList> {
        let start = Instant::now();
        let result = self.inner.list_nodes().await;
        self.record("ListNodes", start, &result);
        result
    }

    async fn get_chain_parameters(&self) -> Result<core::ChainParameters> {
        let start = Instant::now();
        let result = self.inner.get_chain_parameters().await;
        self.record("GetChainParameters", start, &result);
        result
    }

    async fn get_next_maintenance_time(&self) -> Result<api::NumberMessage> {
        let start = Instant::now();
        let result = self.inner.get_next_maintenance_time().await;
        self.record("GetNextMaintenanceTime", start, &result);
        result
    }

    async fn total_transaction(&self) -> Result<api::NumberMessage> {
        let start = Instant::now();
        let result = self.inner.total_transaction().await;
        self.record("TotalTransaction", start, &result);
        result
    }

    // ------------------------------------------------------------------
    // Connection management
    // ------------------------------------------------------------------

    async fn close(&self) -> Result<()> {
        self.inner.close().await
    }
}

impl std::fmt::Debug for MetricsTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsTransport")
            .field("blockchain", &self.blockchain)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Value of the first metric in `name` whose labels all match.
    fn sample(registry: &Registry, name: &str, labels: &[(&str, &str)]) -> Option<f64> {
        for family in registry.gather() {
            if family.get_name() != name {
                continue;
            }
            for metric in family.get_metric() {
                let matches = labels.iter().all(|(k, v)| {
                    metric
                        .get_label()
                        .iter()
                        .any(|pair| pair.get_name() == *k && pair.get_value() == *v)
                });
                if matches {
                    if metric.has_counter() {
                        return Some(metric.get_counter().get_value());
                    }
                    if metric.has_gauge() {
                        return Some(metric.get_gauge().get_value());
                    }
                    if metric.has_histogram() {
                        return Some(metric.get_histogram().get_sample_count() as f64);
                    }
                }
            }
        }
        None
    }

    // ========================================================================
    // Collector tests
    // ========================================================================

    #[test]
    fn test_record_request_counts_and_times() {
        let registry = Registry::new();
        let metrics = Metrics::new(&registry).unwrap();

        metrics.record_request("tron", "GetNowBlock", "success", Duration::from_millis(100));

        let count = sample(
            &registry,
            "tron_rpc_requests_total",
            &[
                ("blockchain", "tron"),
                ("method", "GetNowBlock"),
                ("status", "success"),
            ],
        );
        assert_eq!(count, Some(1.0));

        let observations = sample(
            &registry,
            "tron_rpc_duration_seconds",
            &[("blockchain", "tron"), ("method", "GetNowBlock")],
        );
        assert_eq!(observations, Some(1.0));
    }

    #[test]
    fn test_record_retry_counts() {
        let registry = Registry::new();
        let metrics = Metrics::new(&registry).unwrap();

        metrics.record_retry("tron", "GetNowBlock");
        metrics.record_retry("tron", "GetNowBlock");

        let count = sample(
            &registry,
            "tron_rpc_retries_total",
            &[("blockchain", "tron"), ("method", "GetNowBlock")],
        );
        assert_eq!(count, Some(2.0));
    }

    #[test]
    fn test_set_pool_health_sets_all_gauges() {
        let registry = Registry::new();
        let metrics = Metrics::new(&registry).unwrap();

        metrics.set_pool_health("tron", 5, 4, 1);

        let labels = [("blockchain", "tron")];
        assert_eq!(sample(&registry, "tron_rpc_pool_total", &labels), Some(5.0));
        assert_eq!(
            sample(&registry, "tron_rpc_pool_healthy", &labels),
            Some(4.0)
        );
        assert_eq!(
            sample(&registry, "tron_rpc_pool_disabled", &labels),
            Some(1.0)
        );
    }

    #[test]
    fn test_in_flight_inc_dec() {
        let registry = Registry::new();
        let metrics = Metrics::new(&registry).unwrap();

        metrics.inc_in_flight();
        metrics.inc_in_flight();
        assert_eq!(sample(&registry, "tron_rpc_in_flight", &[]), Some(2.0));

        metrics.dec_in_flight();
        assert_eq!(sample(&registry, "tron_rpc_in_flight", &[]), Some(1.0));
    }

    #[test]
    fn test_record_error_labels_by_type() {
        let registry = Registry::new();
        let metrics = Metrics::new(&registry).unwrap();

        metrics.record_error("tron", "GetAccount", "timeout");

        let count = sample(
            &registry,
            "tron_rpc_errors_total",
            &[
                ("blockchain", "tron"),
                ("method", "GetAccount"),
                ("error_type", "timeout"),
            ],
        );
        assert_eq!(count, Some(1.0));
    }

    #[test]
    fn test_double_registration_is_rejected() {
        let registry = Registry::new();
        let _metrics = Metrics::new(&registry).unwrap();

        let err = Metrics::new(&registry).unwrap_err();
        assert!(matches!(err, Error::Metrics(_)));
    }

    // ========================================================================
    // Classification tests
    // ========================================================================

    #[test]
    fn test_classify_error_taxonomy() {
        let cases = [
            ("deadline exceeded while awaiting headers", "timeout"),
            ("operation timed out", "timeout"),
            ("tcp connect error: Connection refused", "connection"),
            ("connection reset by peer", "connection"),
            ("no route to host", "connection"),
            ("network is unreachable", "connection"),
            ("operation was canceled", "canceled"),
            ("status: Unavailable, message: node down", "unavailable"),
        ];
        for (text, expected) in cases {
            let err = Error::transaction_failed(text);
            assert_eq!(classify_error(&err), expected, "message: {text}");
        }
    }

    #[test]
    fn test_classify_error_falls_back_to_other() {
        assert_eq!(classify_error(&Error::AccountNotFound), "other");
        assert_eq!(classify_error(&Error::InvalidAddress), "other");
    }
}
