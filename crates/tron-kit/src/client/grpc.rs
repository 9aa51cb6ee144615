//! Binary transport speaking the node's `protocol.Wallet` gRPC service.

use async_trait::async_trait;
use tonic::metadata::{Ascii, KeyAndValueRef, MetadataKey, MetadataMap, MetadataValue};
use tonic::service::interceptor::InterceptedService;
use tonic::service::Interceptor;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};

use crate::client::transport::Transport;
use crate::error::{Error, Result, TransportError};
use crate::proto::wallet::WalletClient;
use crate::proto::{api, core};
use crate::types::NodeConfig;

/// Decode ceiling for ordinary calls.
const MAX_DECODE_BYTES: usize = 1024 * 1024 * 100;

/// Decode ceiling for block-shaped responses, which carry whole transaction
/// lists and outgrow the ordinary limit on busy ranges.
const BLOCK_MAX_DECODE_BYTES: usize = 320_000_000;

type Stub = WalletClient<InterceptedService<Channel, HeaderInterceptor>>;

/// Injects the configured static headers into every outgoing request as
/// ASCII metadata.
#[derive(Clone)]
struct HeaderInterceptor {
    metadata: MetadataMap,
}

impl Interceptor for HeaderInterceptor {
    fn call(
        &mut self,
        mut request: tonic::Request<()>,
    ) -> std::result::Result<tonic::Request<()>, tonic::Status> {
        for entry in self.metadata.iter() {
            if let KeyAndValueRef::Ascii(key, value) = entry {
                request.metadata_mut().insert(key.clone(), value.clone());
            }
        }
        Ok(request)
    }
}

/// gRPC transport for a single endpoint.
///
/// The channel connects lazily: construction never touches the network, and
/// the first call dials. Two stubs share the one channel because the decode
/// ceiling is a stub-level setting; block-shaped calls go through the larger
/// one.
pub struct GrpcTransport {
    address: String,
    client: Stub,
    block_client: Stub,
}

impl GrpcTransport {
    /// Build a transport for one node entry.
    ///
    /// Fails with [`Error::InvalidConfig`] on an empty address or a static
    /// header that is not legal gRPC metadata, and with a transport error if
    /// the address does not parse as a URI. A scheme-less address gets
    /// `https://` or `http://` according to `use_tls`.
    pub fn new(config: &NodeConfig) -> Result<Self> {
        config.validate()?;

        let mut address = config.address.trim().to_string();
        if !address.contains("://") {
            let scheme = if config.use_tls { "https" } else { "http" };
            address = format!("{scheme}://{address}");
        }

        let mut metadata = MetadataMap::new();
        for (name, value) in &config.headers {
            let key: MetadataKey<Ascii> = name
                .parse()
                .map_err(|_| Error::invalid_config(format!("invalid header name: {name}")))?;
            let value: MetadataValue<Ascii> = value
                .parse()
                .map_err(|_| Error::invalid_config(format!("invalid value for header {name}")))?;
            metadata.insert(key, value);
        }

        let mut endpoint = Endpoint::from_shared(address.clone())?;
        if config.use_tls {
            endpoint = endpoint.tls_config(ClientTlsConfig::new().with_native_roots())?;
        }
        if let Some(timeout) = config.timeout {
            endpoint = endpoint.timeout(timeout);
        }
        let channel = endpoint.connect_lazy();

        let interceptor = HeaderInterceptor { metadata };
        let client = WalletClient::with_interceptor(channel.clone(), interceptor.clone())
            .max_decoding_message_size(MAX_DECODE_BYTES);
        let block_client = WalletClient::with_interceptor(channel, interceptor)
            .max_decoding_message_size(BLOCK_MAX_DECODE_BYTES);

        Ok(Self {
            address,
            client,
            block_client,
        })
    }

    /// The normalized address this transport dials.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// A stub clone for an ordinary call. Stubs are cheap handles over the
    /// shared channel; cloning per call keeps `&self` shareable.
    fn client(&self) -> Stub {
        self.client.clone()
    }

    /// A stub clone with the block-response decode ceiling.
    fn block_client(&self) -> Stub {
        self.block_client.clone()
    }

    /// Wrap a call failure with this transport's identity and the RPC path.
    fn wrap(&self, method: &'static str, status: tonic::Status) -> Error {
        Error::Transport(TransportError::new(
            "grpc",
            self.address.clone(),
            method,
            status.into(),
        ))
    }
}

#[async_trait]
impl Transport for GrpcTransport {
    // ------------------------------------------------------------------
    // Account operations
    // ------------------------------------------------------------------

    async fn get_account(&self, account: core::Account) -> Result<core::Account> {
        let response = self
            .client()
            .get_account(account)
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/GetAccount", s))?;
        Ok(response.into_inner())
    }

    async fn get_account_resource(
        &self,
        account: core::Account,
    ) -> Result<api::AccountResourceMessage> {
        let response = self
            .client()
            .get_account_resource(account)
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/GetAccountResource", s))?;
        Ok(response.into_inner())
    }

    async fn create_account(
        &self,
        contract: core::AccountCreateContract,
    ) -> Result<api::TransactionExtention> {
        let response = self
            .client()
            .create_account2(contract)
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/CreateAccount2", s))?;
        Ok(response.into_inner())
    }

    // ------------------------------------------------------------------
    // Block operations
    // ------------------------------------------------------------------

    async fn get_now_block(&self) -> Result<api::BlockExtention> {
        let response = self
            .client()
            .get_now_block2(api::EmptyMessage::default())
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/GetNowBlock2", s))?;
        Ok(response.into_inner())
    }

    async fn get_block_by_num(&self, num: i64) -> Result<api::BlockExtention> {
        let response = self
            .block_client()
            .get_block_by_num2(api::NumberMessage { num })
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/GetBlockByNum2", s))?;
        Ok(response.into_inner())
    }

    async fn get_block_by_id(&self, id: Vec<u8>) -> Result<core::Block> {
        let response = self
            .block_client()
            .get_block_by_id(api::BytesMessage { value: id })
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/GetBlockById", s))?;
        Ok(response.into_inner())
    }

    async fn get_block_by_limit_next(
        &self,
        start: i64,
        end: i64,
    ) -> Result<api::BlockListExtention> {
        let request = api::BlockLimit {
            start_num: start,
            end_num: end,
        };
        let response = self
            .block_client()
            .get_block_by_limit_next2(request)
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/GetBlockByLimitNext2", s))?;
        Ok(response.into_inner())
    }

    async fn get_block_by_latest_num(&self, num: i64) -> Result<api::BlockListExtention> {
        let response = self
            .block_client()
            .get_block_by_latest_num2(api::NumberMessage { num })
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/GetBlockByLatestNum2", s))?;
        Ok(response.into_inner())
    }

    async fn get_transaction_info_by_block_num(
        &self,
        num: i64,
    ) -> Result<api::TransactionInfoList> {
        let response = self
            .block_client()
            .get_transaction_info_by_block_num(api::NumberMessage { num })
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/GetTransactionInfoByBlockNum", s))?;
        Ok(response.into_inner())
    }

    // ------------------------------------------------------------------
    // Transaction operations
    // ------------------------------------------------------------------

    async fn get_transaction_by_id(&self, id: Vec<u8>) -> Result<core::Transaction> {
        let response = self
            .client()
            .get_transaction_by_id(api::BytesMessage { value: id })
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/GetTransactionById", s))?;
        Ok(response.into_inner())
    }

    async fn get_transaction_info_by_id(&self, id: Vec<u8>) -> Result<core::TransactionInfo> {
        let response = self
            .client()
            .get_transaction_info_by_id(api::BytesMessage { value: id })
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/GetTransactionInfoById", s))?;
        Ok(response.into_inner())
    }

    async fn broadcast_transaction(&self, tx: core::Transaction) -> Result<api::Return> {
        let response = self
            .client()
            .broadcast_transaction(tx)
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/BroadcastTransaction", s))?;
        Ok(response.into_inner())
    }

    async fn create_transaction(
        &self,
        contract: core::TransferContract,
    ) -> Result<api::TransactionExtention> {
        let response = self
            .client()
            .create_transaction2(contract)
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/CreateTransaction2", s))?;
        Ok(response.into_inner())
    }

    // ------------------------------------------------------------------
    // Contract operations
    // ------------------------------------------------------------------

    async fn trigger_contract(
        &self,
        contract: core::TriggerSmartContract,
    ) -> Result<api::TransactionExtention> {
        let response = self
            .client()
            .trigger_contract(contract)
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/TriggerContract", s))?;
        Ok(response.into_inner())
    }

    async fn trigger_constant_contract(
        &self,
        contract: core::TriggerSmartContract,
    ) -> Result<api::TransactionExtention> {
        let response = self
            .client()
            .trigger_constant_contract(contract)
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/TriggerConstantContract", s))?;
        Ok(response.into_inner())
    }

    async fn estimate_energy(
        &self,
        contract: core::TriggerSmartContract,
    ) -> Result<api::EstimateEnergyMessage> {
        let response = self
            .client()
            .estimate_energy(contract)
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/EstimateEnergy", s))?;
        Ok(response.into_inner())
    }

    async fn deploy_contract(
        &self,
        contract: core::CreateSmartContract,
    ) -> Result<api::TransactionExtention> {
        let response = self
            .client()
            .deploy_contract(contract)
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/DeployContract", s))?;
        Ok(response.into_inner())
    }

    async fn get_contract(&self, address: Vec<u8>) -> Result<core::SmartContract> {
        let response = self
            .client()
            .get_contract(api::BytesMessage { value: address })
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/GetContract", s))?;
        Ok(response.into_inner())
    }

    async fn update_setting(
        &self,
        contract: core::UpdateSettingContract,
    ) -> Result<api::TransactionExtention> {
        let response = self
            .client()
            .update_setting(contract)
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/UpdateSetting", s))?;
        Ok(response.into_inner())
    }

    async fn update_energy_limit(
        &self,
        contract: core::UpdateEnergyLimitContract,
    ) -> Result<api::TransactionExtention> {
        let response = self
            .client()
            .update_energy_limit(contract)
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/UpdateEnergyLimit", s))?;
        Ok(response.into_inner())
    }

    // ------------------------------------------------------------------
    // Resource operations
    // ------------------------------------------------------------------

    async fn get_delegated_resource(
        &self,
        msg: api::DelegatedResourceMessage,
    ) -> Result<api::DelegatedResourceList> {
        let response = self
            .client()
            .get_delegated_resource(msg)
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/GetDelegatedResource", s))?;
        Ok(response.into_inner())
    }

    async fn get_delegated_resource_v2(
        &self,
        msg: api::DelegatedResourceMessage,
    ) -> Result<api::DelegatedResourceList> {
        let response = self
            .client()
            .get_delegated_resource_v2(msg)
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/GetDelegatedResourceV2", s))?;
        Ok(response.into_inner())
    }

    async fn get_delegated_resource_account_index(
        &self,
        address: Vec<u8>,
    ) -> Result<core::DelegatedResourceAccountIndex> {
        let response = self
            .client()
            .get_delegated_resource_account_index(api::BytesMessage { value: address })
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/GetDelegatedResourceAccountIndex", s))?;
        Ok(response.into_inner())
    }

    async fn get_delegated_resource_account_index_v2(
        &self,
        address: Vec<u8>,
    ) -> Result<core::DelegatedResourceAccountIndex> {
        let response = self
            .client()
            .get_delegated_resource_account_index_v2(api::BytesMessage { value: address })
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/GetDelegatedResourceAccountIndexV2", s))?;
        Ok(response.into_inner())
    }

    async fn get_can_delegated_max_size(
        &self,
        msg: api::CanDelegatedMaxSizeRequestMessage,
    ) -> Result<api::CanDelegatedMaxSizeResponseMessage> {
        let response = self
            .client()
            .get_can_delegated_max_size(msg)
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/GetCanDelegatedMaxSize", s))?;
        Ok(response.into_inner())
    }

    async fn delegate_resource(
        &self,
        contract: core::DelegateResourceContract,
    ) -> Result<api::TransactionExtention> {
        let response = self
            .client()
            .delegate_resource(contract)
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/DelegateResource", s))?;
        Ok(response.into_inner())
    }

    async fn undelegate_resource(
        &self,
        contract: core::UnDelegateResourceContract,
    ) -> Result<api::TransactionExtention> {
        let response = self
            .client()
            .un_delegate_resource(contract)
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/UnDelegateResource", s))?;
        Ok(response.into_inner())
    }

    // ------------------------------------------------------------------
    // Network operations
    // ------------------------------------------------------------------

    async fn list_nodes(&self) -> Result<api::NodeList> {
        let response = self
            .client()
            .list_nodes(api::EmptyMessage::default())
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/ListNodes", s))?;
        Ok(response.into_inner())
    }

    async fn get_chain_parameters(&self) -> Result<core::ChainParameters> {
        let response = self
            .client()
            .get_chain_parameters(api::EmptyMessage::default())
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/GetChainParameters", s))?;
        Ok(response.into_inner())
    }

    async fn get_next_maintenance_time(&self) -> Result<api::NumberMessage> {
        let response = self
            .client()
            .get_next_maintenance_time(api::EmptyMessage::default())
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/GetNextMaintenanceTime", s))?;
        Ok(response.into_inner())
    }

    async fn total_transaction(&self) -> Result<api::NumberMessage> {
        let response = self
            .client()
            .total_transaction(api::EmptyMessage::default())
            .await
            .map_err(|s| self.wrap("/protocol.Wallet/TotalTransaction", s))?;
        Ok(response.into_inner())
    }

    // ------------------------------------------------------------------
    // Connection management
    // ------------------------------------------------------------------

    async fn close(&self) -> Result<()> {
        // The channel hangs up when the last stub drops.
        Ok(())
    }
}

impl std::fmt::Debug for GrpcTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrpcTransport")
            .field("address", &self.address)
            .finish()
    }
}
