//! Client stub for the `protocol.Wallet` gRPC service, written the way
//! `tonic-build` lays one out. Only the unary RPCs the transport layer calls
//! are present.

use tonic::codegen::{http, Body, Bytes, GrpcMethod, InterceptedService, StdError};

use super::{api, core};

#[derive(Debug, Clone)]
pub struct WalletClient<T> {
    inner: tonic::client::Grpc<T>,
}

impl WalletClient<tonic::transport::Channel> {
    pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
    where
        D: TryInto<tonic::transport::Endpoint>,
        D::Error: Into<StdError>,
    {
        let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
        Ok(Self::new(conn))
    }
}

impl<T> WalletClient<T>
where
    T: tonic::client::GrpcService<tonic::body::BoxBody>,
    T::Error: Into<StdError>,
    T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
    <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
{
    pub fn new(inner: T) -> Self {
        let inner = tonic::client::Grpc::new(inner);
        Self { inner }
    }

    pub fn with_interceptor<F>(inner: T, interceptor: F) -> WalletClient<InterceptedService<T, F>>
    where
        F: tonic::service::Interceptor,
        T::ResponseBody: Default,
        T: tonic::codegen::Service<
            http::Request<tonic::body::BoxBody>,
            Response = http::Response<
                <T as tonic::client::GrpcService<tonic::body::BoxBody>>::ResponseBody,
            >,
        >,
        <T as tonic::codegen::Service<http::Request<tonic::body::BoxBody>>>::Error:
            Into<StdError> + std::marker::Send + std::marker::Sync,
    {
        WalletClient::new(InterceptedService::new(inner, interceptor))
    }

    /// Limits the maximum size of a decoded message.
    ///
    /// Default: `4MB`
    #[must_use]
    pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
        self.inner = self.inner.max_decoding_message_size(limit);
        self
    }

    /// Limits the maximum size of an encoded message.
    ///
    /// Default: `usize::MAX`
    #[must_use]
    pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
        self.inner = self.inner.max_encoding_message_size(limit);
        self
    }

    pub async fn get_account(
        &mut self,
        request: impl tonic::IntoRequest<core::Account>,
    ) -> std::result::Result<tonic::Response<core::Account>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/GetAccount");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "GetAccount"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn get_account_resource(
        &mut self,
        request: impl tonic::IntoRequest<core::Account>,
    ) -> std::result::Result<tonic::Response<api::AccountResourceMessage>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/GetAccountResource");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "GetAccountResource"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn create_account2(
        &mut self,
        request: impl tonic::IntoRequest<core::AccountCreateContract>,
    ) -> std::result::Result<tonic::Response<api::TransactionExtention>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/CreateAccount2");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "CreateAccount2"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn get_now_block2(
        &mut self,
        request: impl tonic::IntoRequest<api::EmptyMessage>,
    ) -> std::result::Result<tonic::Response<api::BlockExtention>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/GetNowBlock2");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "GetNowBlock2"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn get_block_by_num2(
        &mut self,
        request: impl tonic::IntoRequest<api::NumberMessage>,
    ) -> std::result::Result<tonic::Response<api::BlockExtention>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/GetBlockByNum2");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "GetBlockByNum2"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn get_block_by_id(
        &mut self,
        request: impl tonic::IntoRequest<api::BytesMessage>,
    ) -> std::result::Result<tonic::Response<core::Block>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/GetBlockById");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "GetBlockById"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn get_block_by_limit_next2(
        &mut self,
        request: impl tonic::IntoRequest<api::BlockLimit>,
    ) -> std::result::Result<tonic::Response<api::BlockListExtention>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/GetBlockByLimitNext2");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "GetBlockByLimitNext2"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn get_block_by_latest_num2(
        &mut self,
        request: impl tonic::IntoRequest<api::NumberMessage>,
    ) -> std::result::Result<tonic::Response<api::BlockListExtention>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/GetBlockByLatestNum2");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "GetBlockByLatestNum2"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn get_transaction_info_by_block_num(
        &mut self,
        request: impl tonic::IntoRequest<api::NumberMessage>,
    ) -> std::result::Result<tonic::Response<api::TransactionInfoList>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path =
            http::uri::PathAndQuery::from_static("/protocol.Wallet/GetTransactionInfoByBlockNum");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "GetTransactionInfoByBlockNum"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn get_transaction_by_id(
        &mut self,
        request: impl tonic::IntoRequest<api::BytesMessage>,
    ) -> std::result::Result<tonic::Response<core::Transaction>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/GetTransactionById");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "GetTransactionById"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn get_transaction_info_by_id(
        &mut self,
        request: impl tonic::IntoRequest<api::BytesMessage>,
    ) -> std::result::Result<tonic::Response<core::TransactionInfo>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/GetTransactionInfoById");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "GetTransactionInfoById"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn broadcast_transaction(
        &mut self,
        request: impl tonic::IntoRequest<core::Transaction>,
    ) -> std::result::Result<tonic::Response<api::Return>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/BroadcastTransaction");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "BroadcastTransaction"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn create_transaction2(
        &mut self,
        request: impl tonic::IntoRequest<core::TransferContract>,
    ) -> std::result::Result<tonic::Response<api::TransactionExtention>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/CreateTransaction2");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "CreateTransaction2"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn trigger_contract(
        &mut self,
        request: impl tonic::IntoRequest<core::TriggerSmartContract>,
    ) -> std::result::Result<tonic::Response<api::TransactionExtention>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/TriggerContract");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "TriggerContract"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn trigger_constant_contract(
        &mut self,
        request: impl tonic::IntoRequest<core::TriggerSmartContract>,
    ) -> std::result::Result<tonic::Response<api::TransactionExtention>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/TriggerConstantContract");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "TriggerConstantContract"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn estimate_energy(
        &mut self,
        request: impl tonic::IntoRequest<core::TriggerSmartContract>,
    ) -> std::result::Result<tonic::Response<api::EstimateEnergyMessage>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/EstimateEnergy");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "EstimateEnergy"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn deploy_contract(
        &mut self,
        request: impl tonic::IntoRequest<core::CreateSmartContract>,
    ) -> std::result::Result<tonic::Response<api::TransactionExtention>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/DeployContract");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "DeployContract"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn get_contract(
        &mut self,
        request: impl tonic::IntoRequest<api::BytesMessage>,
    ) -> std::result::Result<tonic::Response<core::SmartContract>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/GetContract");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "GetContract"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn update_setting(
        &mut self,
        request: impl tonic::IntoRequest<core::UpdateSettingContract>,
    ) -> std::result::Result<tonic::Response<api::TransactionExtention>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/UpdateSetting");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "UpdateSetting"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn update_energy_limit(
        &mut self,
        request: impl tonic::IntoRequest<core::UpdateEnergyLimitContract>,
    ) -> std::result::Result<tonic::Response<api::TransactionExtention>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/UpdateEnergyLimit");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "UpdateEnergyLimit"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn get_delegated_resource(
        &mut self,
        request: impl tonic::IntoRequest<api::DelegatedResourceMessage>,
    ) -> std::result::Result<tonic::Response<api::DelegatedResourceList>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/GetDelegatedResource");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "GetDelegatedResource"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn get_delegated_resource_v2(
        &mut self,
        request: impl tonic::IntoRequest<api::DelegatedResourceMessage>,
    ) -> std::result::Result<tonic::Response<api::DelegatedResourceList>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/GetDelegatedResourceV2");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "GetDelegatedResourceV2"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn get_delegated_resource_account_index(
        &mut self,
        request: impl tonic::IntoRequest<api::BytesMessage>,
    ) -> std::result::Result<tonic::Response<core::DelegatedResourceAccountIndex>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static(
            "/protocol.Wallet/GetDelegatedResourceAccountIndex",
        );
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "GetDelegatedResourceAccountIndex"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn get_delegated_resource_account_index_v2(
        &mut self,
        request: impl tonic::IntoRequest<api::BytesMessage>,
    ) -> std::result::Result<tonic::Response<core::DelegatedResourceAccountIndex>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static(
            "/protocol.Wallet/GetDelegatedResourceAccountIndexV2",
        );
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "GetDelegatedResourceAccountIndexV2"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn get_can_delegated_max_size(
        &mut self,
        request: impl tonic::IntoRequest<api::CanDelegatedMaxSizeRequestMessage>,
    ) -> std::result::Result<
        tonic::Response<api::CanDelegatedMaxSizeResponseMessage>,
        tonic::Status,
    > {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/GetCanDelegatedMaxSize");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "GetCanDelegatedMaxSize"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn delegate_resource(
        &mut self,
        request: impl tonic::IntoRequest<core::DelegateResourceContract>,
    ) -> std::result::Result<tonic::Response<api::TransactionExtention>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/DelegateResource");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "DelegateResource"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn un_delegate_resource(
        &mut self,
        request: impl tonic::IntoRequest<core::UnDelegateResourceContract>,
    ) -> std::result::Result<tonic::Response<api::TransactionExtention>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/UnDelegateResource");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "UnDelegateResource"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn list_nodes(
        &mut self,
        request: impl tonic::IntoRequest<api::EmptyMessage>,
    ) -> std::result::Result<tonic::Response<api::NodeList>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/ListNodes");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "ListNodes"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn get_chain_parameters(
        &mut self,
        request: impl tonic::IntoRequest<api::EmptyMessage>,
    ) -> std::result::Result<tonic::Response<core::ChainParameters>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/GetChainParameters");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "GetChainParameters"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn get_next_maintenance_time(
        &mut self,
        request: impl tonic::IntoRequest<api::EmptyMessage>,
    ) -> std::result::Result<tonic::Response<api::NumberMessage>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/GetNextMaintenanceTime");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "GetNextMaintenanceTime"));
        self.inner.unary(req, path, codec).await
    }

    pub async fn total_transaction(
        &mut self,
        request: impl tonic::IntoRequest<api::EmptyMessage>,
    ) -> std::result::Result<tonic::Response<api::NumberMessage>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/protocol.Wallet/TotalTransaction");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new("protocol.Wallet", "TotalTransaction"));
        self.inner.unary(req, path, codec).await
    }
}
