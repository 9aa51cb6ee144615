//! REST transport speaking a node's HTTP wallet API.
//!
//! The REST surface returns a JSON dialect that differs from the canonical
//! message encoding: bytes fields arrive hex-encoded, a handful of keys are
//! spelled differently, and contract payloads come unwrapped. Responses are
//! passed through [`reconcile`] and its block-shaped variants before decoding;
//! the few endpoints whose shape is too irregular for the generic pass are
//! decoded through bespoke records and mapped field by field.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::client::reconcile::{reconcile, reconcile_block, reconcile_block_list};
use crate::client::transport::Transport;
use crate::error::{Error, Result, TransportError};
use crate::proto::{api, core};
use crate::types::{encode_check, Address, NodeConfig};

/// Applied when a node entry does not set its own request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Account record as `/wallet/getaccount` returns it.
///
/// The address arrives in base58check text and several fields are spelled
/// in ways the generic reconciler would mistranslate, so this endpoint maps
/// explicitly.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawAccount {
    address: String,
    balance: i64,
    create_time: i64,
    latest_opration_time: i64,
    latest_consume_time: i64,
    latest_consume_free_time: i64,
    net_window_size: i64,
    net_window_optimized: bool,
}

impl RawAccount {
    fn into_account(self) -> core::Account {
        // An address the node sends in an unexpected form is left empty
        // rather than failing the whole record.
        let address = Address::from_base58(&self.address)
            .map(|a| a.to_vec())
            .unwrap_or_default();
        core::Account {
            address,
            balance: self.balance,
            create_time: self.create_time,
            latest_opration_time: self.latest_opration_time,
            latest_consume_time: self.latest_consume_time,
            latest_consume_free_time: self.latest_consume_free_time,
            net_window_size: self.net_window_size,
            net_window_optimized: self.net_window_optimized,
            ..Default::default()
        }
    }
}

/// Resource quotas as `/wallet/getaccountresource` spells them, with its
/// mix of lowerCamel and UpperCamel keys.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawAccountResources {
    #[serde(rename = "freeNetLimit")]
    free_net_limit: i64,
    #[serde(rename = "freeNetUsed")]
    free_net_used: i64,
    #[serde(rename = "NetLimit")]
    net_limit: i64,
    #[serde(rename = "NetUsed")]
    net_used: i64,
    #[serde(rename = "TotalNetLimit")]
    total_net_limit: i64,
    #[serde(rename = "TotalNetWeight")]
    total_net_weight: i64,
    #[serde(rename = "EnergyLimit")]
    energy_limit: i64,
    #[serde(rename = "EnergyUsed")]
    energy_used: i64,
    #[serde(rename = "TotalEnergyLimit")]
    total_energy_limit: i64,
    #[serde(rename = "TotalEnergyWeight")]
    total_energy_weight: i64,
}

impl RawAccountResources {
    fn into_message(self) -> api::AccountResourceMessage {
        api::AccountResourceMessage {
            free_net_limit: self.free_net_limit,
            free_net_used: self.free_net_used,
            net_limit: self.net_limit,
            net_used: self.net_used,
            total_net_limit: self.total_net_limit,
            total_net_weight: self.total_net_weight,
            energy_limit: self.energy_limit,
            energy_used: self.energy_used,
            total_energy_limit: self.total_energy_limit,
            total_energy_weight: self.total_energy_weight,
        }
    }
}

/// Constant-call response; `constant_result` arrives as hex strings rather
/// than the base64 the canonical form would carry.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConstantCall {
    result: RawCallStatus,
    constant_result: Vec<String>,
    energy_used: i64,
    energy_penalty: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCallStatus {
    result: bool,
}

impl RawConstantCall {
    fn into_extention(self) -> Result<api::TransactionExtention> {
        let mut constant_result = Vec::with_capacity(self.constant_result.len());
        for encoded in &self.constant_result {
            constant_result.push(hex::decode(encoded)?);
        }
        Ok(api::TransactionExtention {
            result: Some(api::Return {
                result: self.result.result,
                ..Default::default()
            }),
            constant_result,
            energy_used: self.energy_used,
            energy_penalty: self.energy_penalty,
            ..Default::default()
        })
    }
}

/// REST transport for a single HTTP endpoint.
///
/// Built from one [`NodeConfig`] entry. Static headers are baked into the
/// underlying client and sent with every request; the per-node timeout
/// (default 30s) bounds each call end to end.
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport for one node entry.
    ///
    /// Fails with [`Error::InvalidConfig`] on an empty address or a static
    /// header that is not a legal HTTP header. A scheme-less address gets
    /// `https://` or `http://` according to `use_tls` (an explicit scheme
    /// wins), and a trailing slash is dropped so endpoint paths append
    /// verbatim.
    pub fn new(config: &NodeConfig) -> Result<Self> {
        config.validate()?;

        let mut address = config.address.trim().to_string();
        if !address.contains("://") {
            let scheme = if config.use_tls { "https" } else { "http" };
            address = format!("{scheme}://{address}");
        }
        let base_url = address.trim_end_matches('/').to_string();

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        for (name, value) in &config.headers {
            let parsed_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| Error::invalid_config(format!("invalid header name: {name}")))?;
            let parsed_value = HeaderValue::from_str(value)
                .map_err(|_| Error::invalid_config(format!("invalid value for header {name}")))?;
            headers.insert(parsed_name, parsed_value);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .default_headers(headers)
            .build()?;

        Ok(Self { base_url, client })
    }

    /// The normalized base URL this transport talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Wrap a failure with this transport's identity and the endpoint path.
    fn wrap(&self, endpoint: &str, source: Error) -> Error {
        Error::Transport(TransportError::new(
            "http",
            self.base_url.clone(),
            endpoint,
            source,
        ))
    }

    /// POST a JSON body and return the response text.
    ///
    /// Every failure up to and including a non-success status is wrapped
    /// with the endpoint path; status failures carry the body the node sent
    /// back.
    async fn post_raw(&self, endpoint: &str, body: Value) -> Result<String> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(endpoint, "http post");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.wrap(endpoint, e.into()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.wrap(endpoint, e.into()))?;

        if !status.is_success() {
            return Err(self.wrap(
                endpoint,
                Error::HttpStatus {
                    status: status.as_u16(),
                    body: text,
                },
            ));
        }
        Ok(text)
    }

    /// POST and decode the response text directly.
    async fn post<T: DeserializeOwned>(&self, endpoint: &str, body: Value) -> Result<T> {
        let text = self.post_raw(endpoint, body).await?;
        serde_json::from_str(&text).map_err(|e| {
            self.wrap(
                endpoint,
                Error::Decode {
                    body: text,
                    source: e,
                },
            )
        })
    }

    /// Decode an already-reconciled JSON tree, reporting the reconciled
    /// form on failure.
    fn decode<T: DeserializeOwned>(&self, endpoint: &str, value: Value) -> Result<T> {
        T::deserialize(&value).map_err(|e| {
            self.wrap(
                endpoint,
                Error::Decode {
                    body: value.to_string(),
                    source: e,
                },
            )
        })
    }

    /// POST, run the generic reconciliation pass, decode.
    async fn post_reconciled<T: DeserializeOwned>(&self, endpoint: &str, body: Value) -> Result<T> {
        let value = self.post::<Value>(endpoint, body).await?;
        self.decode(endpoint, reconcile(value))
    }

    /// POST, apply the single-block reshape, decode.
    async fn post_block(&self, endpoint: &str, body: Value) -> Result<api::BlockExtention> {
        let value = self.post::<Value>(endpoint, body).await?;
        self.decode(endpoint, reconcile_block(value))
    }

    /// POST, apply the block-list reshape, decode.
    async fn post_block_list(
        &self,
        endpoint: &str,
        body: Value,
    ) -> Result<api::BlockListExtention> {
        let value = self.post::<Value>(endpoint, body).await?;
        self.decode(endpoint, reconcile_block_list(value))
    }
}

/// Request body shared by the three contract-call endpoints. `call_value`
/// is only sent when positive, as the node rejects a zero there.
fn trigger_body(contract: &core::TriggerSmartContract) -> Value {
    let mut body = json!({
        "owner_address": encode_check(&contract.owner_address),
        "contract_address": encode_check(&contract.contract_address),
        "data": hex::encode(&contract.data),
        "visible": true,
    });
    if contract.call_value > 0 {
        body["call_value"] = json!(contract.call_value);
    }
    body
}

/// Resource code spelled the way the REST API expects (`"ENERGY"`), falling
/// back to the raw number for values outside the known set.
fn resource_name(code: i32) -> String {
    core::ResourceCode::try_from(code)
        .map(|r| r.as_str_name().to_string())
        .unwrap_or_else(|_| code.to_string())
}

#[async_trait]
impl Transport for HttpTransport {
    // ------------------------------------------------------------------
    // Account operations
    // ------------------------------------------------------------------

    async fn get_account(&self, account: core::Account) -> Result<core::Account> {
        let body = json!({
            "address": encode_check(&account.address),
            "visible": true,
        });
        let raw: RawAccount = self.post("/wallet/getaccount", body).await?;
        Ok(raw.into_account())
    }

    async fn get_account_resource(
        &self,
        account: core::Account,
    ) -> Result<api::AccountResourceMessage> {
        let body = json!({
            "address": encode_check(&account.address),
            "visible": true,
        });
        let raw: RawAccountResources = self.post("/wallet/getaccountresource", body).await?;
        Ok(raw.into_message())
    }

    async fn create_account(
        &self,
        contract: core::AccountCreateContract,
    ) -> Result<api::TransactionExtention> {
        let body = json!({
            "owner_address": encode_check(&contract.owner_address),
            "account_address": encode_check(&contract.account_address),
            "visible": true,
        });
        self.post("/wallet/createaccount", body).await
    }

    // ------------------------------------------------------------------
    // Block operations
    // ------------------------------------------------------------------

    async fn get_now_block(&self) -> Result<api::BlockExtention> {
        self.post_block("/wallet/getnowblock", json!({})).await
    }

    async fn get_block_by_num(&self, num: i64) -> Result<api::BlockExtention> {
        self.post_block("/wallet/getblockbynum", json!({ "num": num }))
            .await
    }

    async fn get_block_by_id(&self, id: Vec<u8>) -> Result<core::Block> {
        // core::Block nests plain transactions rather than extentions, so
        // the generic pass is the right shape here.
        let body = json!({ "value": hex::encode(&id) });
        self.post_reconciled("/wallet/getblockbyid", body).await
    }

    async fn get_block_by_limit_next(
        &self,
        start: i64,
        end: i64,
    ) -> Result<api::BlockListExtention> {
        let body = json!({ "startNum": start, "endNum": end });
        self.post_block_list("/wallet/getblockbylimitnext", body)
            .await
    }

    async fn get_block_by_latest_num(&self, num: i64) -> Result<api::BlockListExtention> {
        self.post_block_list("/wallet/getblockbylatestnum", json!({ "num": num }))
            .await
    }

    async fn get_transaction_info_by_block_num(
        &self,
        num: i64,
    ) -> Result<api::TransactionInfoList> {
        // This endpoint returns a bare JSON array; reconcile each entry and
        // wrap the lot under the key the typed list expects.
        let endpoint = "/wallet/gettransactioninfobyblocknum";
        let items: Vec<Value> = self.post(endpoint, json!({ "num": num })).await?;
        let wrapped = json!({
            "transactionInfo": items.into_iter().map(reconcile).collect::<Vec<_>>(),
        });
        self.decode(endpoint, wrapped)
    }

    // ------------------------------------------------------------------
    // Transaction operations
    // ------------------------------------------------------------------

    async fn get_transaction_by_id(&self, id: Vec<u8>) -> Result<core::Transaction> {
        let body = json!({ "value": hex::encode(&id) });
        self.post("/wallet/gettransactionbyid", body).await
    }

    async fn get_transaction_info_by_id(&self, id: Vec<u8>) -> Result<core::TransactionInfo> {
        let body = json!({ "value": hex::encode(&id) });
        self.post("/wallet/gettransactioninfobyid", body).await
    }

    async fn broadcast_transaction(&self, tx: core::Transaction) -> Result<api::Return> {
        let endpoint = "/wallet/broadcasttransaction";
        let mut body = serde_json::to_value(&tx).map_err(|e| self.wrap(endpoint, e.into()))?;
        if let Value::Object(map) = &mut body {
            map.insert("visible".to_string(), Value::Bool(true));
        }
        self.post(endpoint, body).await
    }

    async fn create_transaction(
        &self,
        contract: core::TransferContract,
    ) -> Result<api::TransactionExtention> {
        let body = json!({
            "owner_address": encode_check(&contract.owner_address),
            "to_address": encode_check(&contract.to_address),
            "amount": contract.amount,
            "visible": true,
        });
        self.post("/wallet/createtransaction", body).await
    }

    // ------------------------------------------------------------------
    // Contract operations
    // ------------------------------------------------------------------

    async fn trigger_contract(
        &self,
        contract: core::TriggerSmartContract,
    ) -> Result<api::TransactionExtention> {
        let mut body = trigger_body(&contract);
        if contract.call_token_value > 0 {
            body["call_token_value"] = json!(contract.call_token_value);
            body["token_id"] = json!(contract.token_id);
        }
        self.post("/wallet/triggersmartcontract", body).await
    }

    async fn trigger_constant_contract(
        &self,
        contract: core::TriggerSmartContract,
    ) -> Result<api::TransactionExtention> {
        let endpoint = "/wallet/triggerconstantcontract";
        let raw: RawConstantCall = self.post(endpoint, trigger_body(&contract)).await?;
        raw.into_extention().map_err(|e| self.wrap(endpoint, e))
    }

    async fn estimate_energy(
        &self,
        contract: core::TriggerSmartContract,
    ) -> Result<api::EstimateEnergyMessage> {
        self.post("/wallet/estimateenergy", trigger_body(&contract))
            .await
    }

    async fn deploy_contract(
        &self,
        contract: core::CreateSmartContract,
    ) -> Result<api::TransactionExtention> {
        let new_contract = contract.new_contract.as_ref().ok_or(Error::InvalidParams)?;
        let mut body = json!({
            "owner_address": encode_check(&contract.owner_address),
            "name": new_contract.name,
            "bytecode": hex::encode(&new_contract.bytecode),
            "consume_user_resource_percent": new_contract.consume_user_resource_percent,
            "origin_energy_limit": new_contract.origin_energy_limit,
            "visible": true,
        });
        if let Some(abi) = &new_contract.abi {
            if let Ok(abi_json) = serde_json::to_value(abi) {
                body["abi"] = abi_json;
            }
        }
        self.post("/wallet/deploycontract", body).await
    }

    async fn get_contract(&self, address: Vec<u8>) -> Result<core::SmartContract> {
        let body = json!({
            "value": encode_check(&address),
            "visible": true,
        });
        self.post("/wallet/getcontract", body).await
    }

    async fn update_setting(
        &self,
        contract: core::UpdateSettingContract,
    ) -> Result<api::TransactionExtention> {
        let body = json!({
            "owner_address": encode_check(&contract.owner_address),
            "contract_address": encode_check(&contract.contract_address),
            "consume_user_resource_percent": contract.consume_user_resource_percent,
            "visible": true,
        });
        self.post("/wallet/updatesetting", body).await
    }

    async fn update_energy_limit(
        &self,
        contract: core::UpdateEnergyLimitContract,
    ) -> Result<api::TransactionExtention> {
        let body = json!({
            "owner_address": encode_check(&contract.owner_address),
            "contract_address": encode_check(&contract.contract_address),
            "origin_energy_limit": contract.origin_energy_limit,
            "visible": true,
        });
        self.post("/wallet/updateenergylimit", body).await
    }

    // ------------------------------------------------------------------
    // Resource operations
    // ------------------------------------------------------------------

    async fn get_delegated_resource(
        &self,
        msg: api::DelegatedResourceMessage,
    ) -> Result<api::DelegatedResourceList> {
        let body = json!({
            "fromAddress": encode_check(&msg.from_address),
            "toAddress": encode_check(&msg.to_address),
            "visible": true,
        });
        self.post("/wallet/getdelegatedresource", body).await
    }

    async fn get_delegated_resource_v2(
        &self,
        msg: api::DelegatedResourceMessage,
    ) -> Result<api::DelegatedResourceList> {
        let body = json!({
            "fromAddress": encode_check(&msg.from_address),
            "toAddress": encode_check(&msg.to_address),
            "visible": true,
        });
        self.post("/wallet/getdelegatedresourcev2", body).await
    }

    async fn get_delegated_resource_account_index(
        &self,
        address: Vec<u8>,
    ) -> Result<core::DelegatedResourceAccountIndex> {
        let body = json!({
            "value": encode_check(&address),
            "visible": true,
        });
        self.post("/wallet/getdelegatedresourceaccountindex", body)
            .await
    }

    async fn get_delegated_resource_account_index_v2(
        &self,
        address: Vec<u8>,
    ) -> Result<core::DelegatedResourceAccountIndex> {
        let body = json!({
            "value": encode_check(&address),
            "visible": true,
        });
        self.post("/wallet/getdelegatedresourceaccountindexv2", body)
            .await
    }

    async fn get_can_delegated_max_size(
        &self,
        msg: api::CanDelegatedMaxSizeRequestMessage,
    ) -> Result<api::CanDelegatedMaxSizeResponseMessage> {
        let body = json!({
            "owner_address": encode_check(&msg.owner_address),
            "type": msg.r#type,
            "visible": true,
        });
        self.post("/wallet/getcandelegatedmaxsize", body).await
    }

    async fn delegate_resource(
        &self,
        contract: core::DelegateResourceContract,
    ) -> Result<api::TransactionExtention> {
        let mut body = json!({
            "owner_address": encode_check(&contract.owner_address),
            "receiver_address": encode_check(&contract.receiver_address),
            "balance": contract.balance,
            "resource": resource_name(contract.resource),
            "lock": contract.lock,
            "visible": true,
        });
        if contract.lock_period > 0 {
            body["lock_period"] = json!(contract.lock_period);
        }
        self.post("/wallet/delegateresource", body).await
    }

    async fn undelegate_resource(
        &self,
        contract: core::UnDelegateResourceContract,
    ) -> Result<api::TransactionExtention> {
        let body = json!({
            "owner_address": encode_check(&contract.owner_address),
            "receiver_address": encode_check(&contract.receiver_address),
            "balance": contract.balance,
            "resource": resource_name(contract.resource),
            "visible": true,
        });
        self.post("/wallet/undelegateresource", body).await
    }

    // ------------------------------------------------------------------
    // Network operations
    // ------------------------------------------------------------------

    async fn list_nodes(&self) -> Result<api::NodeList> {
        self.post("/wallet/listnodes", json!({})).await
    }

    async fn get_chain_parameters(&self) -> Result<core::ChainParameters> {
        self.post("/wallet/getchainparameters", json!({})).await
    }

    async fn get_next_maintenance_time(&self) -> Result<api::NumberMessage> {
        self.post("/wallet/getnextmaintenancetime", json!({})).await
    }

    async fn total_transaction(&self) -> Result<api::NumberMessage> {
        self.post("/wallet/totaltransaction", json!({})).await
    }

    // ------------------------------------------------------------------
    // Connection management
    // ------------------------------------------------------------------

    async fn close(&self) -> Result<()> {
        // The connection pool is released when the client drops.
        Ok(())
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .finish()
    }
}
