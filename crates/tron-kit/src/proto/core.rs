//! Chain-level messages from `core/Tron.proto` and `core/contract/*.proto`.

use serde_with::base64::Base64;
use serde_with::serde_as;

use crate::proto::serde_helpers::{enum_serde, is_default};

// ─── Enumerations ───

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AccountType {
    Normal = 0,
    AssetIssue = 1,
    Contract = 2,
}

impl AccountType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::AssetIssue => "AssetIssue",
            Self::Contract => "Contract",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "Normal" => Some(Self::Normal),
            "AssetIssue" => Some(Self::AssetIssue),
            "Contract" => Some(Self::Contract),
            _ => None,
        }
    }
}

enum_serde!(pub(crate) mod account_type_serde for AccountType);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ResourceCode {
    Bandwidth = 0,
    Energy = 1,
    TronPower = 2,
}

impl ResourceCode {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Bandwidth => "BANDWIDTH",
            Self::Energy => "ENERGY",
            Self::TronPower => "TRON_POWER",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "BANDWIDTH" => Some(Self::Bandwidth),
            "ENERGY" => Some(Self::Energy),
            "TRON_POWER" => Some(Self::TronPower),
            _ => None,
        }
    }
}

enum_serde!(pub(crate) mod resource_code_serde for ResourceCode);

// ─── google.protobuf.Any ───

/// `google.protobuf.Any`, carried by [`transaction::Contract::parameter`].
///
/// The JSON impls follow the protobuf convention: the object is the flattened
/// contract message with an extra `"@type"` key holding the type URL. Contract
/// types outside the vendored registry keep their URL and an empty payload
/// instead of failing the surrounding document.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Any {
    #[prost(string, tag = "1")]
    pub type_url: String,
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
}

fn short_type_name(type_url: &str) -> &str {
    type_url.rsplit('/').next().unwrap_or(type_url)
}

fn any_fields_to_json<M>(value: &[u8]) -> Result<serde_json::Value, String>
where
    M: prost::Message + serde::Serialize + Default,
{
    let message = M::decode(value).map_err(|e| format!("decode contract parameter: {e}"))?;
    serde_json::to_value(&message).map_err(|e| format!("encode contract parameter: {e}"))
}

fn any_fields_from_json<M>(fields: serde_json::Value) -> Result<Vec<u8>, String>
where
    M: prost::Message + serde::de::DeserializeOwned,
{
    let message: M =
        serde_json::from_value(fields).map_err(|e| format!("decode contract parameter: {e}"))?;
    Ok(message.encode_to_vec())
}

macro_rules! contract_registry {
    ($( $name:literal => $ty:ty ),+ $(,)?) => {
        fn decode_registered(
            type_url: &str,
            value: &[u8],
        ) -> Option<Result<serde_json::Value, String>> {
            match short_type_name(type_url) {
                $( $name => Some(any_fields_to_json::<$ty>(value)), )+
                _ => None,
            }
        }

        fn encode_registered(
            type_url: &str,
            fields: serde_json::Value,
        ) -> Option<Result<Vec<u8>, String>> {
            match short_type_name(type_url) {
                $( $name => Some(any_fields_from_json::<$ty>(fields)), )+
                _ => None,
            }
        }
    };
}

contract_registry! {
    "protocol.TransferContract" => TransferContract,
    "protocol.TransferAssetContract" => TransferAssetContract,
    "protocol.AccountCreateContract" => AccountCreateContract,
    "protocol.TriggerSmartContract" => TriggerSmartContract,
    "protocol.CreateSmartContract" => CreateSmartContract,
    "protocol.UpdateSettingContract" => UpdateSettingContract,
    "protocol.UpdateEnergyLimitContract" => UpdateEnergyLimitContract,
    "protocol.FreezeBalanceV2Contract" => FreezeBalanceV2Contract,
    "protocol.UnfreezeBalanceV2Contract" => UnfreezeBalanceV2Contract,
    "protocol.WithdrawBalanceContract" => WithdrawBalanceContract,
    "protocol.DelegateResourceContract" => DelegateResourceContract,
    "protocol.UnDelegateResourceContract" => UnDelegateResourceContract,
}

impl serde::Serialize for Any {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::{Error as _, SerializeMap as _};

        let fields = match decode_registered(&self.type_url, &self.value) {
            Some(Ok(serde_json::Value::Object(fields))) => fields,
            Some(Ok(_)) => {
                return Err(S::Error::custom("contract parameter is not a JSON object"));
            }
            Some(Err(err)) => return Err(S::Error::custom(err)),
            None => serde_json::Map::new(),
        };

        let mut map = serializer.serialize_map(Some(fields.len() + 1))?;
        map.serialize_entry("@type", &self.type_url)?;
        for (key, value) in &fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> serde::Deserialize<'de> for Any {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;

        let mut fields = serde_json::Map::deserialize(deserializer)?;
        let Some(type_url) = fields.remove("@type") else {
            if fields.is_empty() {
                return Ok(Self::default());
            }
            return Err(D::Error::custom("contract parameter is missing \"@type\""));
        };
        let type_url = type_url
            .as_str()
            .ok_or_else(|| D::Error::custom("\"@type\" must be a string"))?
            .to_owned();

        let value = match encode_registered(&type_url, serde_json::Value::Object(fields)) {
            Some(Ok(bytes)) => bytes,
            Some(Err(err)) => return Err(D::Error::custom(err)),
            None => Vec::new(),
        };

        Ok(Self { type_url, value })
    }
}

// ─── Accounts ───

#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Account {
    #[prost(bytes = "vec", tag = "1")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub account_name: Vec<u8>,
    #[prost(enumeration = "AccountType", tag = "2")]
    #[serde(with = "account_type_serde", skip_serializing_if = "is_default")]
    pub r#type: i32,
    #[prost(bytes = "vec", tag = "3")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub address: Vec<u8>,
    #[prost(int64, tag = "4")]
    #[serde(skip_serializing_if = "is_default")]
    pub balance: i64,
    #[prost(int64, tag = "8")]
    #[serde(skip_serializing_if = "is_default")]
    pub net_usage: i64,
    #[prost(int64, tag = "9")]
    #[serde(skip_serializing_if = "is_default")]
    pub create_time: i64,
    /// Field name carries a historical typo in the protocol definition.
    #[prost(int64, tag = "10")]
    #[serde(skip_serializing_if = "is_default")]
    pub latest_opration_time: i64,
    #[prost(int64, tag = "11")]
    #[serde(skip_serializing_if = "is_default")]
    pub allowance: i64,
    #[prost(int64, tag = "12")]
    #[serde(skip_serializing_if = "is_default")]
    pub latest_withdraw_time: i64,
    #[prost(bool, tag = "14")]
    #[serde(skip_serializing_if = "is_default")]
    pub is_witness: bool,
    #[prost(int64, tag = "19")]
    #[serde(skip_serializing_if = "is_default")]
    pub free_net_usage: i64,
    #[prost(int64, tag = "21")]
    #[serde(skip_serializing_if = "is_default")]
    pub latest_consume_time: i64,
    #[prost(int64, tag = "22")]
    #[serde(skip_serializing_if = "is_default")]
    pub latest_consume_free_time: i64,
    #[prost(int64, tag = "24")]
    #[serde(skip_serializing_if = "is_default")]
    pub net_window_size: i64,
    #[prost(bool, tag = "25")]
    #[serde(skip_serializing_if = "is_default")]
    pub net_window_optimized: bool,
    #[prost(message, optional, tag = "26")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_resource: Option<account::AccountResource>,
    #[prost(message, repeated, tag = "34")]
    #[serde(rename = "frozenV2", skip_serializing_if = "Vec::is_empty")]
    pub frozen_v2: Vec<account::FreezeV2>,
}

pub mod account {
    use crate::proto::serde_helpers::is_default;

    #[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
    #[serde(default)]
    pub struct AccountResource {
        #[prost(int64, tag = "1")]
        #[serde(skip_serializing_if = "is_default")]
        pub energy_usage: i64,
        #[prost(int64, tag = "3")]
        #[serde(skip_serializing_if = "is_default")]
        pub latest_consume_time_for_energy: i64,
        #[prost(int64, tag = "9")]
        #[serde(skip_serializing_if = "is_default")]
        pub energy_window_size: i64,
        #[prost(int64, tag = "10")]
        #[serde(
            rename = "delegated_frozenV2_balance_for_energy",
            skip_serializing_if = "is_default"
        )]
        pub delegated_frozen_v2_balance_for_energy: i64,
        #[prost(int64, tag = "11")]
        #[serde(
            rename = "acquired_delegated_frozenV2_balance_for_energy",
            skip_serializing_if = "is_default"
        )]
        pub acquired_delegated_frozen_v2_balance_for_energy: i64,
        #[prost(bool, tag = "12")]
        #[serde(skip_serializing_if = "is_default")]
        pub energy_window_optimized: bool,
    }

    #[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
    #[serde(default)]
    pub struct FreezeV2 {
        #[prost(enumeration = "super::ResourceCode", tag = "1")]
        #[serde(with = "super::resource_code_serde", skip_serializing_if = "is_default")]
        pub r#type: i32,
        #[prost(int64, tag = "2")]
        #[serde(skip_serializing_if = "is_default")]
        pub amount: i64,
    }
}

// ─── Transactions ───

/// A signed (or to-be-signed) transaction.
#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Transaction {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_data: Option<transaction::Raw>,
    #[prost(bytes = "vec", repeated, tag = "2")]
    #[serde_as(as = "Vec<Base64>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub signature: Vec<Vec<u8>>,
    #[prost(message, repeated, tag = "5")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ret: Vec<transaction::Result>,
}

pub mod transaction {
    use serde_with::base64::Base64;
    use serde_with::serde_as;

    use crate::proto::serde_helpers::{enum_serde, is_default};

    /// The portion of a transaction covered by the signature. The transaction
    /// id is the SHA-256 of this message's binary encoding.
    #[serde_as]
    #[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
    #[serde(default)]
    pub struct Raw {
        #[prost(bytes = "vec", tag = "1")]
        #[serde_as(as = "Base64")]
        #[serde(skip_serializing_if = "Vec::is_empty")]
        pub ref_block_bytes: Vec<u8>,
        #[prost(int64, tag = "3")]
        #[serde(skip_serializing_if = "is_default")]
        pub ref_block_num: i64,
        #[prost(bytes = "vec", tag = "4")]
        #[serde_as(as = "Base64")]
        #[serde(skip_serializing_if = "Vec::is_empty")]
        pub ref_block_hash: Vec<u8>,
        #[prost(int64, tag = "8")]
        #[serde(skip_serializing_if = "is_default")]
        pub expiration: i64,
        #[prost(bytes = "vec", tag = "10")]
        #[serde_as(as = "Base64")]
        #[serde(skip_serializing_if = "Vec::is_empty")]
        pub data: Vec<u8>,
        #[prost(message, repeated, tag = "11")]
        #[serde(skip_serializing_if = "Vec::is_empty")]
        pub contract: Vec<Contract>,
        #[prost(int64, tag = "14")]
        #[serde(skip_serializing_if = "is_default")]
        pub timestamp: i64,
        #[prost(int64, tag = "18")]
        #[serde(skip_serializing_if = "is_default")]
        pub fee_limit: i64,
    }

    #[serde_as]
    #[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
    #[serde(default)]
    pub struct Contract {
        #[prost(enumeration = "contract::ContractType", tag = "1")]
        #[serde(with = "contract_type_serde", skip_serializing_if = "is_default")]
        pub r#type: i32,
        #[prost(message, optional, tag = "2")]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub parameter: Option<super::Any>,
        #[prost(bytes = "vec", tag = "3")]
        #[serde_as(as = "Base64")]
        #[serde(skip_serializing_if = "Vec::is_empty")]
        pub provider: Vec<u8>,
        #[prost(bytes = "vec", tag = "4")]
        #[serde_as(as = "Base64")]
        #[serde(rename = "ContractName", skip_serializing_if = "Vec::is_empty")]
        pub contract_name: Vec<u8>,
        #[prost(int32, tag = "5")]
        #[serde(rename = "Permission_id", skip_serializing_if = "is_default")]
        pub permission_id: i32,
    }

    pub mod contract {
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
        )]
        #[repr(i32)]
        pub enum ContractType {
            AccountCreateContract = 0,
            TransferContract = 1,
            TransferAssetContract = 2,
            VoteAssetContract = 3,
            VoteWitnessContract = 4,
            WitnessCreateContract = 5,
            AssetIssueContract = 6,
            WitnessUpdateContract = 8,
            ParticipateAssetIssueContract = 9,
            AccountUpdateContract = 10,
            FreezeBalanceContract = 11,
            UnfreezeBalanceContract = 12,
            WithdrawBalanceContract = 13,
            UnfreezeAssetContract = 14,
            UpdateAssetContract = 15,
            ProposalCreateContract = 16,
            ProposalApproveContract = 17,
            ProposalDeleteContract = 18,
            SetAccountIdContract = 19,
            CustomContract = 20,
            CreateSmartContract = 30,
            TriggerSmartContract = 31,
            GetContract = 32,
            UpdateSettingContract = 33,
            ExchangeCreateContract = 41,
            ExchangeInjectContract = 42,
            ExchangeWithdrawContract = 43,
            ExchangeTransactionContract = 44,
            UpdateEnergyLimitContract = 45,
            AccountPermissionUpdateContract = 46,
            ClearAbiContract = 48,
            UpdateBrokerageContract = 49,
            ShieldedTransferContract = 51,
            MarketSellAssetContract = 52,
            MarketCancelOrderContract = 53,
            FreezeBalanceV2Contract = 54,
            UnfreezeBalanceV2Contract = 55,
            WithdrawExpireUnfreezeContract = 56,
            DelegateResourceContract = 57,
            UnDelegateResourceContract = 58,
            CancelAllUnfreezeV2Contract = 59,
        }

        impl ContractType {
            pub fn as_str_name(&self) -> &'static str {
                match self {
                    Self::AccountCreateContract => "AccountCreateContract",
                    Self::TransferContract => "TransferContract",
                    Self::TransferAssetContract => "TransferAssetContract",
                    Self::VoteAssetContract => "VoteAssetContract",
                    Self::VoteWitnessContract => "VoteWitnessContract",
                    Self::WitnessCreateContract => "WitnessCreateContract",
                    Self::AssetIssueContract => "AssetIssueContract",
                    Self::WitnessUpdateContract => "WitnessUpdateContract",
                    Self::ParticipateAssetIssueContract => "ParticipateAssetIssueContract",
                    Self::AccountUpdateContract => "AccountUpdateContract",
                    Self::FreezeBalanceContract => "FreezeBalanceContract",
                    Self::UnfreezeBalanceContract => "UnfreezeBalanceContract",
                    Self::WithdrawBalanceContract => "WithdrawBalanceContract",
                    Self::UnfreezeAssetContract => "UnfreezeAssetContract",
                    Self::UpdateAssetContract => "UpdateAssetContract",
                    Self::ProposalCreateContract => "ProposalCreateContract",
                    Self::ProposalApproveContract => "ProposalApproveContract",
                    Self::ProposalDeleteContract => "ProposalDeleteContract",
                    Self::SetAccountIdContract => "SetAccountIdContract",
                    Self::CustomContract => "CustomContract",
                    Self::CreateSmartContract => "CreateSmartContract",
                    Self::TriggerSmartContract => "TriggerSmartContract",
                    Self::GetContract => "GetContract",
                    Self::UpdateSettingContract => "UpdateSettingContract",
                    Self::ExchangeCreateContract => "ExchangeCreateContract",
                    Self::ExchangeInjectContract => "ExchangeInjectContract",
                    Self::ExchangeWithdrawContract => "ExchangeWithdrawContract",
                    Self::ExchangeTransactionContract => "ExchangeTransactionContract",
                    Self::UpdateEnergyLimitContract => "UpdateEnergyLimitContract",
                    Self::AccountPermissionUpdateContract => "AccountPermissionUpdateContract",
                    Self::ClearAbiContract => "ClearABIContract",
                    Self::UpdateBrokerageContract => "UpdateBrokerageContract",
                    Self::ShieldedTransferContract => "ShieldedTransferContract",
                    Self::MarketSellAssetContract => "MarketSellAssetContract",
                    Self::MarketCancelOrderContract => "MarketCancelOrderContract",
                    Self::FreezeBalanceV2Contract => "FreezeBalanceV2Contract",
                    Self::UnfreezeBalanceV2Contract => "UnfreezeBalanceV2Contract",
                    Self::WithdrawExpireUnfreezeContract => "WithdrawExpireUnfreezeContract",
                    Self::DelegateResourceContract => "DelegateResourceContract",
                    Self::UnDelegateResourceContract => "UnDelegateResourceContract",
                    Self::CancelAllUnfreezeV2Contract => "CancelAllUnfreezeV2Contract",
                }
            }

            pub fn from_str_name(value: &str) -> Option<Self> {
                match value {
                    "AccountCreateContract" => Some(Self::AccountCreateContract),
                    "TransferContract" => Some(Self::TransferContract),
                    "TransferAssetContract" => Some(Self::TransferAssetContract),
                    "VoteAssetContract" => Some(Self::VoteAssetContract),
                    "VoteWitnessContract" => Some(Self::VoteWitnessContract),
                    "WitnessCreateContract" => Some(Self::WitnessCreateContract),
                    "AssetIssueContract" => Some(Self::AssetIssueContract),
                    "WitnessUpdateContract" => Some(Self::WitnessUpdateContract),
                    "ParticipateAssetIssueContract" => Some(Self::ParticipateAssetIssueContract),
                    "AccountUpdateContract" => Some(Self::AccountUpdateContract),
                    "FreezeBalanceContract" => Some(Self::FreezeBalanceContract),
                    "UnfreezeBalanceContract" => Some(Self::UnfreezeBalanceContract),
                    "WithdrawBalanceContract" => Some(Self::WithdrawBalanceContract),
                    "UnfreezeAssetContract" => Some(Self::UnfreezeAssetContract),
                    "UpdateAssetContract" => Some(Self::UpdateAssetContract),
                    "ProposalCreateContract" => Some(Self::ProposalCreateContract),
                    "ProposalApproveContract" => Some(Self::ProposalApproveContract),
                    "ProposalDeleteContract" => Some(Self::ProposalDeleteContract),
                    "SetAccountIdContract" => Some(Self::SetAccountIdContract),
                    "CustomContract" => Some(Self::CustomContract),
                    "CreateSmartContract" => Some(Self::CreateSmartContract),
                    "TriggerSmartContract" => Some(Self::TriggerSmartContract),
                    "GetContract" => Some(Self::GetContract),
                    "UpdateSettingContract" => Some(Self::UpdateSettingContract),
                    "ExchangeCreateContract" => Some(Self::ExchangeCreateContract),
                    "ExchangeInjectContract" => Some(Self::ExchangeInjectContract),
                    "ExchangeWithdrawContract" => Some(Self::ExchangeWithdrawContract),
                    "ExchangeTransactionContract" => Some(Self::ExchangeTransactionContract),
                    "UpdateEnergyLimitContract" => Some(Self::UpdateEnergyLimitContract),
                    "AccountPermissionUpdateContract" => {
                        Some(Self::AccountPermissionUpdateContract)
                    }
                    "ClearABIContract" => Some(Self::ClearAbiContract),
                    "UpdateBrokerageContract" => Some(Self::UpdateBrokerageContract),
                    "ShieldedTransferContract" => Some(Self::ShieldedTransferContract),
                    "MarketSellAssetContract" => Some(Self::MarketSellAssetContract),
                    "MarketCancelOrderContract" => Some(Self::MarketCancelOrderContract),
                    "FreezeBalanceV2Contract" => Some(Self::FreezeBalanceV2Contract),
                    "UnfreezeBalanceV2Contract" => Some(Self::UnfreezeBalanceV2Contract),
                    "WithdrawExpireUnfreezeContract" => Some(Self::WithdrawExpireUnfreezeContract),
                    "DelegateResourceContract" => Some(Self::DelegateResourceContract),
                    "UnDelegateResourceContract" => Some(Self::UnDelegateResourceContract),
                    "CancelAllUnfreezeV2Contract" => Some(Self::CancelAllUnfreezeV2Contract),
                    _ => None,
                }
            }
        }
    }

    enum_serde!(pub(crate) mod contract_type_serde for contract::ContractType);

    #[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
    #[serde(default)]
    pub struct Result {
        #[prost(int64, tag = "1")]
        #[serde(skip_serializing_if = "is_default")]
        pub fee: i64,
        #[prost(enumeration = "result::Code", tag = "2")]
        #[serde(with = "result_code_serde", skip_serializing_if = "is_default")]
        pub ret: i32,
        #[prost(enumeration = "result::ContractResult", tag = "3")]
        #[serde(
            rename = "contractRet",
            with = "contract_result_serde",
            skip_serializing_if = "is_default"
        )]
        pub contract_ret: i32,
    }

    pub mod result {
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
        )]
        #[repr(i32)]
        pub enum Code {
            Sucess = 0,
            Failed = 1,
        }

        impl Code {
            pub fn as_str_name(&self) -> &'static str {
                match self {
                    // The protocol definition spells it this way.
                    Self::Sucess => "SUCESS",
                    Self::Failed => "FAILED",
                }
            }

            pub fn from_str_name(value: &str) -> Option<Self> {
                match value {
                    "SUCESS" => Some(Self::Sucess),
                    "FAILED" => Some(Self::Failed),
                    _ => None,
                }
            }
        }

        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
        )]
        #[repr(i32)]
        pub enum ContractResult {
            Default = 0,
            Success = 1,
            Revert = 2,
            BadJumpDestination = 3,
            OutOfMemory = 4,
            PrecompiledContract = 5,
            StackTooSmall = 6,
            StackTooLarge = 7,
            IllegalOperation = 8,
            StackOverflow = 9,
            OutOfEnergy = 10,
            OutOfTime = 11,
            JvmStackOverFlow = 12,
            Unknown = 13,
            TransferFailed = 14,
            InvalidCode = 15,
        }

        impl ContractResult {
            pub fn as_str_name(&self) -> &'static str {
                match self {
                    Self::Default => "DEFAULT",
                    Self::Success => "SUCCESS",
                    Self::Revert => "REVERT",
                    Self::BadJumpDestination => "BAD_JUMP_DESTINATION",
                    Self::OutOfMemory => "OUT_OF_MEMORY",
                    Self::PrecompiledContract => "PRECOMPILED_CONTRACT",
                    Self::StackTooSmall => "STACK_TOO_SMALL",
                    Self::StackTooLarge => "STACK_TOO_LARGE",
                    Self::IllegalOperation => "ILLEGAL_OPERATION",
                    Self::StackOverflow => "STACK_OVERFLOW",
                    Self::OutOfEnergy => "OUT_OF_ENERGY",
                    Self::OutOfTime => "OUT_OF_TIME",
                    Self::JvmStackOverFlow => "JVM_STACK_OVER_FLOW",
                    Self::Unknown => "UNKNOWN",
                    Self::TransferFailed => "TRANSFER_FAILED",
                    Self::InvalidCode => "INVALID_CODE",
                }
            }

            pub fn from_str_name(value: &str) -> Option<Self> {
                match value {
                    "DEFAULT" => Some(Self::Default),
                    "SUCCESS" => Some(Self::Success),
                    "REVERT" => Some(Self::Revert),
                    "BAD_JUMP_DESTINATION" => Some(Self::BadJumpDestination),
                    "OUT_OF_MEMORY" => Some(Self::OutOfMemory),
                    "PRECOMPILED_CONTRACT" => Some(Self::PrecompiledContract),
                    "STACK_TOO_SMALL" => Some(Self::StackTooSmall),
                    "STACK_TOO_LARGE" => Some(Self::StackTooLarge),
                    "ILLEGAL_OPERATION" => Some(Self::IllegalOperation),
                    "STACK_OVERFLOW" => Some(Self::StackOverflow),
                    "OUT_OF_ENERGY" => Some(Self::OutOfEnergy),
                    "OUT_OF_TIME" => Some(Self::OutOfTime),
                    "JVM_STACK_OVER_FLOW" => Some(Self::JvmStackOverFlow),
                    "UNKNOWN" => Some(Self::Unknown),
                    "TRANSFER_FAILED" => Some(Self::TransferFailed),
                    "INVALID_CODE" => Some(Self::InvalidCode),
                    _ => None,
                }
            }
        }
    }

    enum_serde!(pub(crate) mod result_code_serde for result::Code);
    enum_serde!(pub(crate) mod contract_result_serde for result::ContractResult);
}

/// Execution record of a confirmed transaction.
#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransactionInfo {
    #[prost(bytes = "vec", tag = "1")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub id: Vec<u8>,
    #[prost(int64, tag = "2")]
    #[serde(skip_serializing_if = "is_default")]
    pub fee: i64,
    #[prost(int64, tag = "3")]
    #[serde(rename = "blockNumber", skip_serializing_if = "is_default")]
    pub block_number: i64,
    #[prost(int64, tag = "4")]
    #[serde(rename = "blockTimeStamp", skip_serializing_if = "is_default")]
    pub block_time_stamp: i64,
    #[prost(bytes = "vec", repeated, tag = "5")]
    #[serde_as(as = "Vec<Base64>")]
    #[serde(rename = "contractResult", skip_serializing_if = "Vec::is_empty")]
    pub contract_result: Vec<Vec<u8>>,
    #[prost(bytes = "vec", tag = "6")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contract_address: Vec<u8>,
    #[prost(message, optional, tag = "7")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<ResourceReceipt>,
    #[prost(message, repeated, tag = "8")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub log: Vec<transaction_info::Log>,
    #[prost(enumeration = "transaction_info::Code", tag = "9")]
    #[serde(with = "transaction_info::code_serde", skip_serializing_if = "is_default")]
    pub result: i32,
    #[prost(bytes = "vec", tag = "10")]
    #[serde_as(as = "Base64")]
    #[serde(rename = "resMessage", skip_serializing_if = "Vec::is_empty")]
    pub res_message: Vec<u8>,
    #[prost(int64, tag = "15")]
    #[serde(skip_serializing_if = "is_default")]
    pub withdraw_amount: i64,
    #[prost(int64, tag = "16")]
    #[serde(skip_serializing_if = "is_default")]
    pub unfreeze_amount: i64,
    #[prost(message, repeated, tag = "17")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub internal_transactions: Vec<InternalTransaction>,
}

pub mod transaction_info {
    use serde_with::base64::Base64;
    use serde_with::serde_as;

    use crate::proto::serde_helpers::enum_serde;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Code {
        Sucess = 0,
        Failed = 1,
    }

    impl Code {
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Sucess => "SUCESS",
                Self::Failed => "FAILED",
            }
        }

        pub fn from_str_name(value: &str) -> Option<Self> {
            match value {
                "SUCESS" => Some(Self::Sucess),
                "FAILED" => Some(Self::Failed),
                _ => None,
            }
        }
    }

    enum_serde!(pub(crate) mod code_serde for Code);

    #[serde_as]
    #[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
    #[serde(default)]
    pub struct Log {
        #[prost(bytes = "vec", tag = "1")]
        #[serde_as(as = "Base64")]
        #[serde(skip_serializing_if = "Vec::is_empty")]
        pub address: Vec<u8>,
        #[prost(bytes = "vec", repeated, tag = "2")]
        #[serde_as(as = "Vec<Base64>")]
        #[serde(skip_serializing_if = "Vec::is_empty")]
        pub topics: Vec<Vec<u8>>,
        #[prost(bytes = "vec", tag = "3")]
        #[serde_as(as = "Base64")]
        #[serde(skip_serializing_if = "Vec::is_empty")]
        pub data: Vec<u8>,
    }
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ResourceReceipt {
    #[prost(int64, tag = "1")]
    #[serde(skip_serializing_if = "is_default")]
    pub energy_usage: i64,
    #[prost(int64, tag = "2")]
    #[serde(skip_serializing_if = "is_default")]
    pub energy_fee: i64,
    #[prost(int64, tag = "3")]
    #[serde(skip_serializing_if = "is_default")]
    pub origin_energy_usage: i64,
    #[prost(int64, tag = "4")]
    #[serde(skip_serializing_if = "is_default")]
    pub energy_usage_total: i64,
    #[prost(int64, tag = "5")]
    #[serde(skip_serializing_if = "is_default")]
    pub net_usage: i64,
    #[prost(int64, tag = "6")]
    #[serde(skip_serializing_if = "is_default")]
    pub net_fee: i64,
    #[prost(enumeration = "transaction::result::ContractResult", tag = "7")]
    #[serde(
        with = "transaction::contract_result_serde",
        skip_serializing_if = "is_default"
    )]
    pub result: i32,
    #[prost(int64, tag = "8")]
    #[serde(skip_serializing_if = "is_default")]
    pub energy_penalty_total: i64,
}

#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InternalTransaction {
    #[prost(bytes = "vec", tag = "1")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hash: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caller_address: Vec<u8>,
    #[prost(bytes = "vec", tag = "3")]
    #[serde_as(as = "Base64")]
    #[serde(rename = "transferTo_address", skip_serializing_if = "Vec::is_empty")]
    pub transfer_to_address: Vec<u8>,
    #[prost(message, repeated, tag = "4")]
    #[serde(rename = "callValueInfo", skip_serializing_if = "Vec::is_empty")]
    pub call_value_info: Vec<internal_transaction::CallValueInfo>,
    #[prost(bytes = "vec", tag = "5")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub note: Vec<u8>,
    #[prost(bool, tag = "6")]
    #[serde(skip_serializing_if = "is_default")]
    pub rejected: bool,
    #[prost(string, tag = "7")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub extra: String,
}

pub mod internal_transaction {
    use crate::proto::serde_helpers::is_default;

    #[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
    #[serde(default)]
    pub struct CallValueInfo {
        #[prost(int64, tag = "1")]
        #[serde(rename = "callValue", skip_serializing_if = "is_default")]
        pub call_value: i64,
        #[prost(string, tag = "2")]
        #[serde(rename = "tokenId", skip_serializing_if = "String::is_empty")]
        pub token_id: String,
    }
}

// ─── Blocks ───

#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BlockHeader {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_data: Option<block_header::Raw>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub witness_signature: Vec<u8>,
}

pub mod block_header {
    use serde_with::base64::Base64;
    use serde_with::serde_as;

    use crate::proto::serde_helpers::is_default;

    #[serde_as]
    #[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
    #[serde(default)]
    pub struct Raw {
        #[prost(int64, tag = "1")]
        #[serde(skip_serializing_if = "is_default")]
        pub timestamp: i64,
        #[prost(bytes = "vec", tag = "2")]
        #[serde_as(as = "Base64")]
        #[serde(rename = "txTrieRoot", skip_serializing_if = "Vec::is_empty")]
        pub tx_trie_root: Vec<u8>,
        #[prost(bytes = "vec", tag = "3")]
        #[serde_as(as = "Base64")]
        #[serde(rename = "parentHash", skip_serializing_if = "Vec::is_empty")]
        pub parent_hash: Vec<u8>,
        #[prost(int64, tag = "7")]
        #[serde(skip_serializing_if = "is_default")]
        pub number: i64,
        #[prost(int64, tag = "8")]
        #[serde(skip_serializing_if = "is_default")]
        pub witness_id: i64,
        #[prost(bytes = "vec", tag = "9")]
        #[serde_as(as = "Base64")]
        #[serde(skip_serializing_if = "Vec::is_empty")]
        pub witness_address: Vec<u8>,
        #[prost(int32, tag = "10")]
        #[serde(skip_serializing_if = "is_default")]
        pub version: i32,
        #[prost(bytes = "vec", tag = "11")]
        #[serde_as(as = "Base64")]
        #[serde(rename = "accountStateRoot", skip_serializing_if = "Vec::is_empty")]
        pub account_state_root: Vec<u8>,
    }
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Block {
    #[prost(message, repeated, tag = "1")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transactions: Vec<Transaction>,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_header: Option<BlockHeader>,
}

// ─── Chain state ───

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChainParameters {
    #[prost(message, repeated, tag = "1")]
    #[serde(rename = "chainParameter", skip_serializing_if = "Vec::is_empty")]
    pub chain_parameter: Vec<chain_parameters::ChainParameter>,
}

pub mod chain_parameters {
    use crate::proto::serde_helpers::is_default;

    #[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
    #[serde(default)]
    pub struct ChainParameter {
        #[prost(string, tag = "1")]
        #[serde(skip_serializing_if = "String::is_empty")]
        pub key: String,
        #[prost(int64, tag = "2")]
        #[serde(skip_serializing_if = "is_default")]
        pub value: i64,
    }
}

#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DelegatedResource {
    #[prost(bytes = "vec", tag = "1")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub from: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub to: Vec<u8>,
    #[prost(int64, tag = "3")]
    #[serde(skip_serializing_if = "is_default")]
    pub frozen_balance_for_bandwidth: i64,
    #[prost(int64, tag = "4")]
    #[serde(skip_serializing_if = "is_default")]
    pub frozen_balance_for_energy: i64,
    #[prost(int64, tag = "5")]
    #[serde(skip_serializing_if = "is_default")]
    pub expire_time_for_bandwidth: i64,
    #[prost(int64, tag = "6")]
    #[serde(skip_serializing_if = "is_default")]
    pub expire_time_for_energy: i64,
}

#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DelegatedResourceAccountIndex {
    #[prost(bytes = "vec", tag = "1")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub account: Vec<u8>,
    #[prost(bytes = "vec", repeated, tag = "2")]
    #[serde_as(as = "Vec<Base64>")]
    #[serde(rename = "fromAccounts", skip_serializing_if = "Vec::is_empty")]
    pub from_accounts: Vec<Vec<u8>>,
    #[prost(bytes = "vec", repeated, tag = "3")]
    #[serde_as(as = "Vec<Base64>")]
    #[serde(rename = "toAccounts", skip_serializing_if = "Vec::is_empty")]
    pub to_accounts: Vec<Vec<u8>>,
    #[prost(int64, tag = "4")]
    #[serde(skip_serializing_if = "is_default")]
    pub timestamp: i64,
}

// ─── Smart contracts ───

#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SmartContract {
    #[prost(bytes = "vec", tag = "1")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub origin_address: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contract_address: Vec<u8>,
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abi: Option<smart_contract::Abi>,
    #[prost(bytes = "vec", tag = "4")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bytecode: Vec<u8>,
    #[prost(int64, tag = "5")]
    #[serde(skip_serializing_if = "is_default")]
    pub call_value: i64,
    #[prost(int64, tag = "6")]
    #[serde(skip_serializing_if = "is_default")]
    pub consume_user_resource_percent: i64,
    #[prost(string, tag = "7")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[prost(int64, tag = "8")]
    #[serde(skip_serializing_if = "is_default")]
    pub origin_energy_limit: i64,
    #[prost(bytes = "vec", tag = "9")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub code_hash: Vec<u8>,
    #[prost(bytes = "vec", tag = "10")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trx_hash: Vec<u8>,
    #[prost(int32, tag = "11")]
    #[serde(skip_serializing_if = "is_default")]
    pub version: i32,
}

pub mod smart_contract {
    /// Contract ABI. The repeated field really is called `entrys` upstream.
    #[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
    #[serde(default)]
    pub struct Abi {
        #[prost(message, repeated, tag = "1")]
        #[serde(rename = "entrys", skip_serializing_if = "Vec::is_empty")]
        pub entrys: Vec<abi::Entry>,
    }

    pub mod abi {
        use crate::proto::serde_helpers::{enum_serde, is_default};

        #[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        pub struct Entry {
            #[prost(bool, tag = "1")]
            #[serde(skip_serializing_if = "is_default")]
            pub anonymous: bool,
            #[prost(bool, tag = "2")]
            #[serde(skip_serializing_if = "is_default")]
            pub constant: bool,
            #[prost(string, tag = "3")]
            #[serde(skip_serializing_if = "String::is_empty")]
            pub name: String,
            #[prost(message, repeated, tag = "4")]
            #[serde(skip_serializing_if = "Vec::is_empty")]
            pub inputs: Vec<entry::Param>,
            #[prost(message, repeated, tag = "5")]
            #[serde(skip_serializing_if = "Vec::is_empty")]
            pub outputs: Vec<entry::Param>,
            #[prost(enumeration = "entry::EntryType", tag = "6")]
            #[serde(with = "entry_type_serde", skip_serializing_if = "is_default")]
            pub r#type: i32,
            #[prost(bool, tag = "7")]
            #[serde(skip_serializing_if = "is_default")]
            pub payable: bool,
            #[prost(enumeration = "entry::StateMutabilityType", tag = "8")]
            #[serde(
                rename = "stateMutability",
                with = "state_mutability_serde",
                skip_serializing_if = "is_default"
            )]
            pub state_mutability: i32,
        }

        pub mod entry {
            use crate::proto::serde_helpers::is_default;

            #[derive(
                Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
            )]
            #[repr(i32)]
            pub enum EntryType {
                UnknownEntryType = 0,
                Constructor = 1,
                Function = 2,
                Event = 3,
                Fallback = 4,
                Receive = 5,
                Error = 6,
            }

            impl EntryType {
                pub fn as_str_name(&self) -> &'static str {
                    match self {
                        Self::UnknownEntryType => "UnknownEntryType",
                        Self::Constructor => "Constructor",
                        Self::Function => "Function",
                        Self::Event => "Event",
                        Self::Fallback => "Fallback",
                        Self::Receive => "Receive",
                        Self::Error => "Error",
                    }
                }

                pub fn from_str_name(value: &str) -> Option<Self> {
                    match value {
                        "UnknownEntryType" => Some(Self::UnknownEntryType),
                        "Constructor" => Some(Self::Constructor),
                        "Function" => Some(Self::Function),
                        "Event" => Some(Self::Event),
                        "Fallback" => Some(Self::Fallback),
                        "Receive" => Some(Self::Receive),
                        "Error" => Some(Self::Error),
                        _ => None,
                    }
                }
            }

            #[derive(
                Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
            )]
            #[repr(i32)]
            pub enum StateMutabilityType {
                UnknownMutabilityType = 0,
                Pure = 1,
                View = 2,
                Nonpayable = 3,
                Payable = 4,
            }

            impl StateMutabilityType {
                pub fn as_str_name(&self) -> &'static str {
                    match self {
                        Self::UnknownMutabilityType => "UnknownMutabilityType",
                        Self::Pure => "Pure",
                        Self::View => "View",
                        Self::Nonpayable => "Nonpayable",
                        Self::Payable => "Payable",
                    }
                }

                pub fn from_str_name(value: &str) -> Option<Self> {
                    match value {
                        "UnknownMutabilityType" => Some(Self::UnknownMutabilityType),
                        "Pure" => Some(Self::Pure),
                        "View" => Some(Self::View),
                        "Nonpayable" => Some(Self::Nonpayable),
                        "Payable" => Some(Self::Payable),
                        _ => None,
                    }
                }
            }

            #[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
            #[serde(default)]
            pub struct Param {
                #[prost(bool, tag = "1")]
                #[serde(skip_serializing_if = "is_default")]
                pub indexed: bool,
                #[prost(string, tag = "2")]
                #[serde(skip_serializing_if = "String::is_empty")]
                pub name: String,
                #[prost(string, tag = "3")]
                #[serde(skip_serializing_if = "String::is_empty")]
                pub r#type: String,
            }
        }

        enum_serde!(pub(crate) mod entry_type_serde for entry::EntryType);
        enum_serde!(pub(crate) mod state_mutability_serde for entry::StateMutabilityType);
    }
}

// ─── Contract parameters ───

#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransferContract {
    #[prost(bytes = "vec", tag = "1")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub owner_address: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub to_address: Vec<u8>,
    #[prost(int64, tag = "3")]
    #[serde(skip_serializing_if = "is_default")]
    pub amount: i64,
}

#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransferAssetContract {
    #[prost(bytes = "vec", tag = "1")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub asset_name: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub owner_address: Vec<u8>,
    #[prost(bytes = "vec", tag = "3")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub to_address: Vec<u8>,
    #[prost(int64, tag = "4")]
    #[serde(skip_serializing_if = "is_default")]
    pub amount: i64,
}

#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AccountCreateContract {
    #[prost(bytes = "vec", tag = "1")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub owner_address: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub account_address: Vec<u8>,
    #[prost(enumeration = "AccountType", tag = "3")]
    #[serde(with = "account_type_serde", skip_serializing_if = "is_default")]
    pub r#type: i32,
}

#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TriggerSmartContract {
    #[prost(bytes = "vec", tag = "1")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub owner_address: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contract_address: Vec<u8>,
    #[prost(int64, tag = "3")]
    #[serde(skip_serializing_if = "is_default")]
    pub call_value: i64,
    #[prost(bytes = "vec", tag = "4")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<u8>,
    #[prost(int64, tag = "5")]
    #[serde(skip_serializing_if = "is_default")]
    pub call_token_value: i64,
    #[prost(int64, tag = "6")]
    #[serde(skip_serializing_if = "is_default")]
    pub token_id: i64,
}

#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CreateSmartContract {
    #[prost(bytes = "vec", tag = "1")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub owner_address: Vec<u8>,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_contract: Option<SmartContract>,
    #[prost(int64, tag = "3")]
    #[serde(skip_serializing_if = "is_default")]
    pub call_token_value: i64,
    #[prost(int64, tag = "4")]
    #[serde(skip_serializing_if = "is_default")]
    pub token_id: i64,
}

#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UpdateSettingContract {
    #[prost(bytes = "vec", tag = "1")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub owner_address: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contract_address: Vec<u8>,
    #[prost(int64, tag = "3")]
    #[serde(skip_serializing_if = "is_default")]
    pub consume_user_resource_percent: i64,
}

#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UpdateEnergyLimitContract {
    #[prost(bytes = "vec", tag = "1")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub owner_address: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contract_address: Vec<u8>,
    #[prost(int64, tag = "3")]
    #[serde(skip_serializing_if = "is_default")]
    pub origin_energy_limit: i64,
}

#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FreezeBalanceV2Contract {
    #[prost(bytes = "vec", tag = "1")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub owner_address: Vec<u8>,
    #[prost(int64, tag = "2")]
    #[serde(skip_serializing_if = "is_default")]
    pub frozen_balance: i64,
    #[prost(enumeration = "ResourceCode", tag = "3")]
    #[serde(with = "resource_code_serde", skip_serializing_if = "is_default")]
    pub resource: i32,
}

#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UnfreezeBalanceV2Contract {
    #[prost(bytes = "vec", tag = "1")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub owner_address: Vec<u8>,
    #[prost(int64, tag = "2")]
    #[serde(skip_serializing_if = "is_default")]
    pub unfreeze_balance: i64,
    #[prost(enumeration = "ResourceCode", tag = "3")]
    #[serde(with = "resource_code_serde", skip_serializing_if = "is_default")]
    pub resource: i32,
}

#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WithdrawBalanceContract {
    #[prost(bytes = "vec", tag = "1")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub owner_address: Vec<u8>,
}

#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DelegateResourceContract {
    #[prost(bytes = "vec", tag = "1")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub owner_address: Vec<u8>,
    #[prost(enumeration = "ResourceCode", tag = "2")]
    #[serde(with = "resource_code_serde", skip_serializing_if = "is_default")]
    pub resource: i32,
    #[prost(int64, tag = "3")]
    #[serde(skip_serializing_if = "is_default")]
    pub balance: i64,
    #[prost(bytes = "vec", tag = "4")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub receiver_address: Vec<u8>,
    #[prost(bool, tag = "5")]
    #[serde(skip_serializing_if = "is_default")]
    pub lock: bool,
    #[prost(int64, tag = "6")]
    #[serde(skip_serializing_if = "is_default")]
    pub lock_period: i64,
}

#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UnDelegateResourceContract {
    #[prost(bytes = "vec", tag = "1")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub owner_address: Vec<u8>,
    #[prost(enumeration = "ResourceCode", tag = "2")]
    #[serde(with = "resource_code_serde", skip_serializing_if = "is_default")]
    pub resource: i32,
    #[prost(int64, tag = "3")]
    #[serde(skip_serializing_if = "is_default")]
    pub balance: i64,
    #[prost(bytes = "vec", tag = "4")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub receiver_address: Vec<u8>,
}

// ============================================================================
// Tests
// ============================================================================
