//! Wallet API messages from `api/api.proto`: request wrappers and the
//! extended response envelopes returned by the `2`-suffixed RPCs.

use serde_with::base64::Base64;
use serde_with::serde_as;

use super::core;
use crate::proto::serde_helpers::{enum_serde, is_default};

/// Broadcast / execution status attached to most write responses.
#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Return {
    #[prost(bool, tag = "1")]
    #[serde(skip_serializing_if = "is_default")]
    pub result: bool,
    #[prost(enumeration = "r#return::ResponseCode", tag = "2")]
    #[serde(with = "response_code_serde", skip_serializing_if = "is_default")]
    pub code: i32,
    #[prost(bytes = "vec", tag = "3")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub message: Vec<u8>,
}

impl Return {
    /// Human-readable rejection reason, decoded from the message bytes.
    pub fn message_str(&self) -> String {
        String::from_utf8_lossy(&self.message).into_owned()
    }
}

pub mod r#return {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum ResponseCode {
        Success = 0,
        /// Signature did not verify.
        Sigerror = 1,
        ContractValidateError = 2,
        ContractExeError = 3,
        BandwithError = 4,
        DupTransactionError = 5,
        TaposError = 6,
        TooBigTransactionError = 7,
        TransactionExpirationError = 8,
        ServerBusy = 9,
        NoConnection = 10,
        NotEnoughEffectiveConnection = 11,
        OtherError = 20,
    }

    impl ResponseCode {
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Success => "SUCCESS",
                Self::Sigerror => "SIGERROR",
                Self::ContractValidateError => "CONTRACT_VALIDATE_ERROR",
                Self::ContractExeError => "CONTRACT_EXE_ERROR",
                Self::BandwithError => "BANDWITH_ERROR",
                Self::DupTransactionError => "DUP_TRANSACTION_ERROR",
                Self::TaposError => "TAPOS_ERROR",
                Self::TooBigTransactionError => "TOO_BIG_TRANSACTION_ERROR",
                Self::TransactionExpirationError => "TRANSACTION_EXPIRATION_ERROR",
                Self::ServerBusy => "SERVER_BUSY",
                Self::NoConnection => "NO_CONNECTION",
                Self::NotEnoughEffectiveConnection => "NOT_ENOUGH_EFFECTIVE_CONNECTION",
                Self::OtherError => "OTHER_ERROR",
            }
        }

        pub fn from_str_name(value: &str) -> Option<Self> {
            match value {
                "SUCCESS" => Some(Self::Success),
                "SIGERROR" => Some(Self::Sigerror),
                "CONTRACT_VALIDATE_ERROR" => Some(Self::ContractValidateError),
                "CONTRACT_EXE_ERROR" => Some(Self::ContractExeError),
                "BANDWITH_ERROR" => Some(Self::BandwithError),
                "DUP_TRANSACTION_ERROR" => Some(Self::DupTransactionError),
                "TAPOS_ERROR" => Some(Self::TaposError),
                "TOO_BIG_TRANSACTION_ERROR" => Some(Self::TooBigTransactionError),
                "TRANSACTION_EXPIRATION_ERROR" => Some(Self::TransactionExpirationError),
                "SERVER_BUSY" => Some(Self::ServerBusy),
                "NO_CONNECTION" => Some(Self::NoConnection),
                "NOT_ENOUGH_EFFECTIVE_CONNECTION" => Some(Self::NotEnoughEffectiveConnection),
                "OTHER_ERROR" => Some(Self::OtherError),
                _ => None,
            }
        }
    }
}

enum_serde!(pub(crate) mod response_code_serde for r#return::ResponseCode);

/// Transaction plus the metadata the node derives while building it.
#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransactionExtention {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<core::Transaction>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub txid: Vec<u8>,
    #[prost(bytes = "vec", repeated, tag = "3")]
    #[serde_as(as = "Vec<Base64>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub constant_result: Vec<Vec<u8>>,
    #[prost(message, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Return>,
    #[prost(int64, tag = "5")]
    #[serde(skip_serializing_if = "is_default")]
    pub energy_used: i64,
    #[prost(message, repeated, tag = "6")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub internal_transactions: Vec<core::InternalTransaction>,
    #[prost(int64, tag = "7")]
    #[serde(skip_serializing_if = "is_default")]
    pub energy_penalty: i64,
}

#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BlockExtention {
    #[prost(message, repeated, tag = "1")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transactions: Vec<TransactionExtention>,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_header: Option<core::BlockHeader>,
    #[prost(bytes = "vec", tag = "3")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blockid: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BlockListExtention {
    #[prost(message, repeated, tag = "1")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub block: Vec<BlockExtention>,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransactionInfoList {
    #[prost(message, repeated, tag = "1")]
    #[serde(rename = "transactionInfo", skip_serializing_if = "Vec::is_empty")]
    pub transaction_info: Vec<core::TransactionInfo>,
}

/// Bandwidth and energy quota of an account. The upstream definition mixes
/// casing styles; the serde names follow it exactly.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AccountResourceMessage {
    #[prost(int64, tag = "1")]
    #[serde(rename = "freeNetUsed", skip_serializing_if = "is_default")]
    pub free_net_used: i64,
    #[prost(int64, tag = "2")]
    #[serde(rename = "freeNetLimit", skip_serializing_if = "is_default")]
    pub free_net_limit: i64,
    #[prost(int64, tag = "3")]
    #[serde(rename = "NetUsed", skip_serializing_if = "is_default")]
    pub net_used: i64,
    #[prost(int64, tag = "4")]
    #[serde(rename = "NetLimit", skip_serializing_if = "is_default")]
    pub net_limit: i64,
    #[prost(int64, tag = "7")]
    #[serde(rename = "TotalNetLimit", skip_serializing_if = "is_default")]
    pub total_net_limit: i64,
    #[prost(int64, tag = "8")]
    #[serde(rename = "TotalNetWeight", skip_serializing_if = "is_default")]
    pub total_net_weight: i64,
    #[prost(int64, tag = "13")]
    #[serde(rename = "EnergyUsed", skip_serializing_if = "is_default")]
    pub energy_used: i64,
    #[prost(int64, tag = "14")]
    #[serde(rename = "EnergyLimit", skip_serializing_if = "is_default")]
    pub energy_limit: i64,
    #[prost(int64, tag = "15")]
    #[serde(rename = "TotalEnergyLimit", skip_serializing_if = "is_default")]
    pub total_energy_limit: i64,
    #[prost(int64, tag = "16")]
    #[serde(rename = "TotalEnergyWeight", skip_serializing_if = "is_default")]
    pub total_energy_weight: i64,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NodeList {
    #[prost(message, repeated, tag = "1")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<Node>,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Node {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Address {
    #[prost(bytes = "vec", tag = "1")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub host: Vec<u8>,
    #[prost(int32, tag = "2")]
    #[serde(skip_serializing_if = "is_default")]
    pub port: i32,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EmptyMessage {}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NumberMessage {
    #[prost(int64, tag = "1")]
    #[serde(skip_serializing_if = "is_default")]
    pub num: i64,
}

#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BytesMessage {
    #[prost(bytes = "vec", tag = "1")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BlockLimit {
    #[prost(int64, tag = "1")]
    #[serde(rename = "startNum", skip_serializing_if = "is_default")]
    pub start_num: i64,
    #[prost(int64, tag = "2")]
    #[serde(rename = "endNum", skip_serializing_if = "is_default")]
    pub end_num: i64,
}

#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DelegatedResourceMessage {
    #[prost(bytes = "vec", tag = "1")]
    #[serde_as(as = "Base64")]
    #[serde(rename = "fromAddress", skip_serializing_if = "Vec::is_empty")]
    pub from_address: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde_as(as = "Base64")]
    #[serde(rename = "toAddress", skip_serializing_if = "Vec::is_empty")]
    pub to_address: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DelegatedResourceList {
    #[prost(message, repeated, tag = "1")]
    #[serde(rename = "delegatedResource", skip_serializing_if = "Vec::is_empty")]
    pub delegated_resource: Vec<core::DelegatedResource>,
}

#[serde_as]
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CanDelegatedMaxSizeRequestMessage {
    #[prost(int32, tag = "1")]
    #[serde(skip_serializing_if = "is_default")]
    pub r#type: i32,
    #[prost(bytes = "vec", tag = "2")]
    #[serde_as(as = "Base64")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub owner_address: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CanDelegatedMaxSizeResponseMessage {
    #[prost(int64, tag = "1")]
    #[serde(skip_serializing_if = "is_default")]
    pub max_size: i64,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EstimateEnergyMessage {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Return>,
    #[prost(int64, tag = "2")]
    #[serde(skip_serializing_if = "is_default")]
    pub energy_required: i64,
}
