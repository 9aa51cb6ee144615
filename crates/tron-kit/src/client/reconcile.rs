//! Reconciliation of node HTTP JSON into canonical protobuf JSON.
//!
//! The node's HTTP API emits JSON that a canonical protobuf-JSON decoder
//! cannot read directly:
//!
//! 1. Byte-valued fields (addresses, hashes, signatures, call data) are hex
//!    encoded instead of base64.
//! 2. A few field names differ from the canonical spelling (`blockID`,
//!    `txID`).
//! 3. Embedded `Any` messages arrive as `{"type_url": T, "value": {...}}`
//!    instead of `{"@type": T, ...fields...}`.
//!
//! [`reconcile`] is a pure structural rewrite fixing all three, carrying the
//! field name a value was found under as explicit context so the hex
//! conversion only touches known byte fields. [`reconcile_block`] and
//! [`reconcile_block_list`] extend it for the two responses whose structure
//! (not just leaf encoding) differs from the canonical messages.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::{Map, Value};

/// Rewrite a node HTTP response into canonical protobuf JSON.
///
/// Already-canonical input passes through unchanged.
pub fn reconcile(value: Value) -> Value {
    reconcile_field(value, "")
}

/// The generic pass, parameterized by the field name the value was found
/// under.
fn reconcile_field(value: Value, field_name: &str) -> Value {
    match value {
        Value::Object(mut map) => {
            // Node-style Any: exactly two keys, a string type_url and an
            // object value. Flatten into the canonical @type form.
            if map.len() == 2
                && map.get("type_url").is_some_and(Value::is_string)
                && map.get("value").is_some_and(Value::is_object)
            {
                if let (Some(url), Some(Value::Object(inner))) =
                    (map.remove("type_url"), map.remove("value"))
                {
                    let mut out = Map::new();
                    out.insert("@type".to_string(), url);
                    for (key, val) in inner {
                        let reconciled = reconcile_field(val, &key);
                        out.insert(key, reconciled);
                    }
                    return Value::Object(out);
                }
            }

            let mut out = Map::new();
            for (key, val) in map {
                // The pre-rename key is the recursion context.
                let out_key = rename_field(&key).to_string();
                let reconciled = reconcile_field(val, &key);
                out.insert(out_key, reconciled);
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| reconcile_field(item, field_name))
                .collect(),
        ),
        Value::String(s) => {
            if is_bytes_field(field_name) && is_hex_string(&s) {
                Value::String(hex_to_base64(&s))
            } else {
                Value::String(s)
            }
        }
        other => other,
    }
}

/// Rewrite a single-block response into the extended block message shape.
///
/// The HTTP API returns a block's transactions as flat transaction objects
/// with an embedded `txID`; the canonical message nests each one as
/// `{"transaction": {...}, "txid": ...}`.
pub fn reconcile_block(value: Value) -> Value {
    let Value::Object(map) = value else {
        return reconcile(value);
    };

    let mut out = Map::new();
    for (key, val) in map {
        let out_key = rename_field(&key).to_string();
        if out_key == "transactions" {
            if let Value::Array(txs) = val {
                let wrapped = txs.into_iter().map(wrap_transaction_extention).collect();
                out.insert(out_key, Value::Array(wrapped));
            } else {
                out.insert(out_key, reconcile(val));
            }
        } else {
            out.insert(out_key, reconcile(val));
        }
    }
    Value::Object(out)
}

/// Rewrite a block-list response into the extended block-list message shape.
///
/// The HTTP API may return a bare array of blocks; the canonical message is
/// an object with a `block` list.
pub fn reconcile_block_list(value: Value) -> Value {
    match value {
        Value::Array(blocks) => {
            let blocks = blocks.into_iter().map(reconcile_block).collect();
            let mut out = Map::new();
            out.insert("block".to_string(), Value::Array(blocks));
            Value::Object(out)
        }
        Value::Object(mut map) => match map.remove("block") {
            Some(Value::Array(blocks)) => {
                let blocks = blocks.into_iter().map(reconcile_block).collect();
                let mut out = Map::new();
                out.insert("block".to_string(), Value::Array(blocks));
                for (key, val) in map {
                    let out_key = rename_field(&key).to_string();
                    let reconciled = reconcile(val);
                    out.insert(out_key, reconciled);
                }
                Value::Object(out)
            }
            Some(other) => {
                map.insert("block".to_string(), other);
                reconcile(Value::Object(map))
            }
            None => reconcile(Value::Object(map)),
        },
        other => reconcile(other),
    }
}

/// Split a flat transaction object into the `{"transaction", "txid"}`
/// envelope of the extended transaction message.
fn wrap_transaction_extention(tx: Value) -> Value {
    let Value::Object(mut map) = tx else {
        return reconcile(tx);
    };

    let txid = match map.remove("txID") {
        Some(Value::String(s)) if is_hex_string(&s) => Some(Value::String(hex_to_base64(&s))),
        Some(Value::String(s)) => Some(Value::String(s)),
        // A non-string id has no canonical place; drop it.
        _ => None,
    };

    let mut out = Map::new();
    out.insert("transaction".to_string(), reconcile(Value::Object(map)));
    if let Some(txid) = txid {
        out.insert("txid".to_string(), txid);
    }
    Value::Object(out)
}

fn rename_field(name: &str) -> &str {
    match name {
        "blockID" => "blockid",
        "txID" => "txid",
        _ => name,
    }
}

/// Field names whose string values carry hex-encoded bytes in the node's
/// HTTP JSON.
fn is_bytes_field(name: &str) -> bool {
    matches!(
        name,
        // Transaction and block identifiers
        "txid" | "txID" | "blockid" | "blockID" | "id" | "parentHash" | "txTrieRoot"
        // Address fields across the contract messages
        | "owner_address" | "ownerAddress"
        | "to_address" | "toAddress"
        | "contract_address" | "contractAddress"
        | "receiver_address" | "receiverAddress"
        | "resource_receiver_address" | "resourceReceiverAddress"
        | "origin_address" | "originAddress"
        | "caller_address" | "callerAddress"
        | "transferTo_address" | "transferToAddress"
        | "account_address" | "accountAddress"
        | "witness_address" | "witnessAddress"
        | "frozen_address" | "frozenAddress"
        // Signatures and opaque data
        | "witness_signature" | "witnessSignature" | "signature" | "data" | "bytecode"
        | "code_hash" | "codeHash" | "asset_name" | "assetName" | "url" | "description"
        // Log and event fields
        | "address" | "topics"
        // Internal transaction and result fields
        | "hash" | "note" | "token_info" | "callValueInfo" | "extra"
        | "contractResult" | "resMessage" | "contract_result"
    )
}

/// Non-empty, even length, hex digits only. Deliberately conservative: a
/// string that fails any of these is left untouched even under a
/// byte-carrying field name.
fn is_hex_string(s: &str) -> bool {
    !s.is_empty() && s.len() % 2 == 0 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

fn hex_to_base64(s: &str) -> String {
    match hex::decode(s) {
        Ok(bytes) => BASE64.encode(bytes),
        Err(_) => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::proto::api;

    #[test]
    fn test_canonical_input_is_unchanged() {
        // Base64 payloads with non-hex characters, @type markers in place,
        // numbers and booleans as-is: nothing for the pass to do.
        let doc = json!({
            "txid": "Cgs=",
            "raw_data": {
                "contract": [{
                    "parameter": {
                        "@type": "type.googleapis.com/protocol.TransferContract",
                        "owner_address": "QWFhYWFhYWFhYWFhYWFhYWFhYWE=",
                        "amount": 1000000,
                    },
                    "type": "TransferContract",
                }],
                "expiration": 1700000000000i64,
            },
            "visible": true,
            "signature": null,
        });

        assert_eq!(reconcile(doc.clone()), doc);
    }

    #[test]
    fn test_any_pattern_flattens() {
        let input = json!({
            "type_url": "type.googleapis.com/protocol.TransferContract",
            "value": {"owner_address": "0a0b"},
        });
        let expected = json!({
            "@type": "type.googleapis.com/protocol.TransferContract",
            "owner_address": "Cgs=",
        });
        assert_eq!(reconcile(input), expected);
    }

    #[test]
    fn test_any_pattern_requires_exact_shape() {
        // Three keys: not the Any pattern, value recursed normally.
        let input = json!({
            "type_url": "X",
            "value": {"owner_address": "0a0b"},
            "extra": 1,
        });
        let out = reconcile(input);
        assert!(out.get("@type").is_none());
        assert_eq!(out["value"]["owner_address"], "Cgs=");

        // value is not an object: not the Any pattern.
        let input = json!({"type_url": "X", "value": "0a0b"});
        let out = reconcile(input);
        assert!(out.get("@type").is_none());
        assert_eq!(out["value"], "0a0b");
    }

    #[test]
    fn test_hex_detection_is_conservative() {
        // Odd length, non-hex characters, empty: all left alone.
        let input = json!({
            "txid": "abc",
            "signature": ["0a0g"],
            "data": "",
            "owner_address": "0A0B",
        });
        let out = reconcile(input);
        assert_eq!(out["txid"], "abc");
        assert_eq!(out["signature"][0], "0a0g");
        assert_eq!(out["data"], "");
        // Uppercase hex is still hex.
        assert_eq!(out["owner_address"], "Cgs=");
    }

    #[test]
    fn test_hex_outside_byte_fields_is_untouched() {
        let input = json!({"contract_name": "abcd", "owner_address": "abcd"});
        let out = reconcile(input);
        assert_eq!(out["contract_name"], "abcd");
        assert_eq!(
            out["owner_address"],
            BASE64.encode(hex::decode("abcd").unwrap())
        );
    }

    #[test]
    fn test_field_renames_use_original_key_as_context() {
        let input = json!({"blockID": "0a0b", "txID": "0c0d"});
        let out = reconcile(input);
        assert_eq!(out, json!({"blockid": "Cgs=", "txid": "DA0="}));
    }

    #[test]
    fn test_array_elements_share_field_context() {
        let input = json!({"topics": ["0a0b", "0c0d"], "log": [{"address": "0a0b"}]});
        let out = reconcile(input);
        assert_eq!(out["topics"], json!(["Cgs=", "DA0="]));
        assert_eq!(out["log"][0]["address"], "Cgs=");
    }

    #[test]
    fn test_scalars_pass_through() {
        assert_eq!(reconcile(json!(42)), json!(42));
        assert_eq!(reconcile(json!(true)), json!(true));
        assert_eq!(reconcile(json!(null)), json!(null));
        assert_eq!(reconcile(json!("0a0b")), json!("0a0b"));
    }

    #[test]
    fn test_block_transform_wraps_transactions() {
        let input = json!({
            "blockID": "00000000000000ab0a0b0c0d0a0b0c0d0a0b0c0d0a0b0c0d0a0b0c0d0a0b0c0d",
            "block_header": {
                "raw_data": {"number": 171, "parentHash": "0a0b"},
                "witness_signature": "0c0d",
            },
            "transactions": [
                {"txID": "0a0b", "raw_data": {"expiration": 1}},
                {"txID": 5, "raw_data": {}},
            ],
        });

        let out = reconcile_block(input);

        // Transactions are re-wrapped with the id hoisted out.
        assert_eq!(out["transactions"][0]["txid"], "Cgs=");
        assert_eq!(
            out["transactions"][0]["transaction"]["raw_data"]["expiration"],
            1
        );
        assert!(out["transactions"][1].get("txid").is_none());
        assert!(out["transactions"][1]["transaction"]["raw_data"].is_object());

        // Nested header fields keep their own context.
        assert_eq!(out["block_header"]["raw_data"]["parentHash"], "Cgs=");
        assert_eq!(out["block_header"]["witness_signature"], "DA0=");

        // The top-level id is renamed but its value keeps the node encoding:
        // the wrapper reconciles sibling values without a field context.
        assert_eq!(
            out["blockid"],
            "00000000000000ab0a0b0c0d0a0b0c0d0a0b0c0d0a0b0c0d0a0b0c0d0a0b0c0d"
        );
    }

    #[test]
    fn test_block_transform_non_object_falls_through() {
        assert_eq!(reconcile_block(json!("x")), json!("x"));
        let out = reconcile_block(json!({"transactions": 5}));
        assert_eq!(out, json!({"transactions": 5}));
    }

    #[test]
    fn test_block_list_from_bare_array() {
        let input = json!([
            {"transactions": [{"txID": "0a0b", "raw_data": {"timestamp": 1}}]},
            {"transactions": [{"txID": "0c0d", "raw_data": {"timestamp": 2}}]},
        ]);

        let out = reconcile_block_list(input);
        let blocks = out["block"].as_array().unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0]["transactions"][0]["txid"], "Cgs=");
        assert_eq!(blocks[1]["transactions"][0]["txid"], "DA0=");
    }

    #[test]
    fn test_block_list_object_with_block_key() {
        let input = json!({
            "block": [{"transactions": [{"txID": "0a0b"}]}],
            "other": 7,
        });
        let out = reconcile_block_list(input);
        assert_eq!(out["block"][0]["transactions"][0]["txid"], "Cgs=");
        assert_eq!(out["other"], 7);
    }

    #[test]
    fn test_block_list_object_without_block_array() {
        let input = json!({"block": "not-a-list", "txID": "0a0b"});
        let out = reconcile_block_list(input);
        assert_eq!(out["block"], "not-a-list");
        assert_eq!(out["txid"], "Cgs=");
    }

    #[test]
    fn test_block_list_decodes_into_typed_message() {
        // Two blocks as the node sends them, transactions flat with txID.
        let input = json!([
            {
                "blockID": "0000000000000001aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
                "block_header": {
                    "raw_data": {
                        "number": 1,
                        "parentHash": "0a0b",
                        "txTrieRoot": "0c0d",
                        "witness_address": "410102030405060708090a0b0c0d0e0f1011121314",
                        "timestamp": 1700000000000i64,
                    },
                    "witness_signature": "0e0f",
                },
                "transactions": [{
                    "txID": "0a0b",
                    "raw_data": {"expiration": 99, "timestamp": 98},
                    "ret": [{"contractRet": "SUCCESS"}],
                }],
            },
            {
                "block_header": {"raw_data": {"number": 2}},
                "transactions": [{"txID": "0c0d", "raw_data": {}}],
            },
        ]);

        let reconciled = reconcile_block_list(input);
        let list: api::BlockListExtention = serde_json::from_value(reconciled).unwrap();

        assert_eq!(list.block.len(), 2);

        let first = &list.block[0];
        let header = first.block_header.as_ref().unwrap();
        let raw = header.raw_data.as_ref().unwrap();
        assert_eq!(raw.number, 1);
        assert_eq!(raw.parent_hash, vec![0x0a, 0x0b]);
        assert_eq!(header.witness_signature, vec![0x0e, 0x0f]);

        assert_eq!(first.transactions.len(), 1);
        let tx = &first.transactions[0];
        assert_eq!(tx.txid, vec![0x0a, 0x0b]);
        let inner = tx.transaction.as_ref().unwrap();
        assert_eq!(inner.raw_data.as_ref().unwrap().expiration, 99);

        let second = &list.block[1];
        let second_header = second.block_header.as_ref().unwrap();
        assert_eq!(second_header.raw_data.as_ref().unwrap().number, 2);
        assert_eq!(second.transactions[0].txid, vec![0x0c, 0x0d]);
    }
}
