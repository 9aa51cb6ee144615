//! Facade semantics over a scripted transport: account lookups, transfer
//! and broadcast checks, and TRC20 encode/decode round trips.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use tron_kit::proto::api::r#return::ResponseCode;
use tron_kit::proto::{api, core};
use tron_kit::{
    trc20, txid, Address, Error, MetricsCollector, MetricsTransport, Network, NodeConfig, Tron,
    Trx,
};

use crate::support::{abi_string, abi_uint, built_ext, MockTransport, RecordingCollector};

fn facade(mock: MockTransport) -> Tron {
    Tron::with_transport(Arc::new(mock), Network::Mainnet)
}

fn addr(fill: u8) -> Address {
    let mut bytes = [fill; Address::LENGTH];
    bytes[0] = Address::PREFIX;
    Address::from_bytes(&bytes).unwrap()
}

fn usdt() -> Address {
    "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t".parse().unwrap()
}

/// A constant-call response carrying `data` as its only return value.
fn constant_ext(data: Vec<u8>) -> api::TransactionExtention {
    api::TransactionExtention {
        constant_result: vec![data],
        result: Some(api::Return {
            result: true,
            ..Default::default()
        }),
        ..Default::default()
    }
}

// =============================================================================
// Account lookups
// =============================================================================

#[tokio::test]
async fn test_account_returns_the_node_record() {
    let tron = facade(MockTransport::ok());

    let account = tron.account(&addr(0x11)).await.unwrap();
    assert_eq!(account.address, addr(0x11).to_vec());
}

#[tokio::test]
async fn test_unknown_account_maps_to_not_found() {
    // An empty record means the node has never seen the address.
    let tron = facade(MockTransport::ok().with_account(core::Account::default()));

    let err = tron.account(&addr(0x11)).await.unwrap_err();
    assert!(matches!(err, Error::AccountNotFound));
}

#[tokio::test]
async fn test_balance_is_typed_sun() {
    let record = core::Account {
        address: addr(0x11).to_vec(),
        balance: 12_500_000,
        ..Default::default()
    };
    let tron = facade(MockTransport::ok().with_account(record));

    let balance = tron.balance(&addr(0x11)).await.unwrap();
    assert_eq!(balance, Trx::sun(12_500_000));
    assert_eq!(balance.as_trx(), 12);
}

#[tokio::test]
async fn test_is_account_activated() {
    let tron = facade(MockTransport::ok());
    assert!(tron.is_account_activated(&addr(0x11)).await.unwrap());

    let tron = facade(MockTransport::ok().with_account(core::Account::default()));
    assert!(!tron.is_account_activated(&addr(0x11)).await.unwrap());
}

#[tokio::test]
async fn test_transport_failure_is_not_swallowed_by_activation_check() {
    let tron = facade(MockTransport::failing());

    let err = tron.is_account_activated(&addr(0x11)).await.unwrap_err();
    assert!(matches!(err.root(), Error::NotConnected));
}

// =============================================================================
// Transfers and broadcast
// =============================================================================

#[tokio::test]
async fn test_transfer_builds_unsigned_transaction() {
    let tron = facade(MockTransport::ok().with_ext(built_ext()));

    let ext = tron
        .transfer(&addr(0x11), &addr(0x22), Trx::trx(5))
        .await
        .unwrap();
    assert!(ext.transaction.is_some());
}

#[tokio::test]
async fn test_transfer_rejects_empty_node_response() {
    // Default mock answer is an all-empty extension.
    let tron = facade(MockTransport::ok());

    let err = tron
        .transfer(&addr(0x11), &addr(0x22), Trx::trx(5))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidTransaction));
}

#[tokio::test]
async fn test_transfer_surfaces_node_rejection() {
    let mut rejected = built_ext();
    rejected.result = Some(api::Return {
        result: false,
        code: ResponseCode::ContractValidateError as i32,
        message: b"Validate TransferContract error, balance is not sufficient.".to_vec(),
    });
    let tron = facade(MockTransport::ok().with_ext(rejected));

    let err = tron
        .transfer(&addr(0x11), &addr(0x22), Trx::trx(5))
        .await
        .unwrap_err();
    match err {
        Error::TransactionFailed(message) => {
            assert!(message.contains("balance is not sufficient"))
        }
        other => panic!("expected TransactionFailed, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_broadcast_accepts_successful_result() {
    let tron = facade(MockTransport::ok());

    let result = tron.broadcast(core::Transaction::default()).await.unwrap();
    assert!(result.result);
}

#[tokio::test]
async fn test_broadcast_rejection_carries_message() {
    let tron = facade(MockTransport::ok().with_return(api::Return {
        result: false,
        message: b"Tapos check error.".to_vec(),
        ..Default::default()
    }));

    let err = tron
        .broadcast(core::Transaction::default())
        .await
        .unwrap_err();
    match err {
        Error::TransactionFailed(message) => assert!(message.contains("Tapos check error")),
        other => panic!("expected TransactionFailed, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_broadcast_nonzero_code_carries_code_name() {
    let tron = facade(MockTransport::ok().with_return(api::Return {
        result: true,
        code: ResponseCode::Sigerror as i32,
        message: b"signature miss match".to_vec(),
    }));

    let err = tron
        .broadcast(core::Transaction::default())
        .await
        .unwrap_err();
    let text = err.to_string();
    assert!(text.contains("SIGERROR"), "got: {text}");
    assert!(text.contains("signature miss match"), "got: {text}");
}

// =============================================================================
// Constant calls
// =============================================================================

#[tokio::test]
async fn test_trigger_constant_returns_node_evaluation() {
    let transport = MockTransport::ok().with_ext(constant_ext(abi_uint(7)));
    let tron = facade(transport);

    let ext = tron
        .trigger_constant(&addr(0x11), &usdt(), trc20::decimals_call())
        .await
        .unwrap();
    assert_eq!(ext.constant_result, vec![abi_uint(7)]);
}

// =============================================================================
// TRC20
// =============================================================================

#[tokio::test]
async fn test_trc20_balance_of_decodes_uint() {
    let transport = MockTransport::ok().with_ext(constant_ext(abi_uint(1_000_000)));
    let tron = facade(transport);

    let balance = tron.trc20_balance_of(&addr(0x11), &usdt()).await.unwrap();
    assert_eq!(balance, 1_000_000);
}

#[tokio::test]
async fn test_trc20_decimals() {
    let tron = facade(MockTransport::ok().with_ext(constant_ext(abi_uint(6))));

    assert_eq!(tron.trc20_decimals(&usdt()).await.unwrap(), 6);
}

#[tokio::test]
async fn test_trc20_name_decodes_dynamic_string() {
    let transport = MockTransport::ok().with_ext(constant_ext(abi_string("Tether USD")));
    let tron = facade(transport);

    assert_eq!(tron.trc20_name(&usdt()).await.unwrap(), "Tether USD");
}

#[tokio::test]
async fn test_trc20_symbol() {
    let transport = MockTransport::ok().with_ext(constant_ext(abi_string("USDT")));
    let tron = facade(transport);

    assert_eq!(tron.trc20_symbol(&usdt()).await.unwrap(), "USDT");
}

#[tokio::test]
async fn test_trc20_missing_result_is_nil_response() {
    let tron = facade(MockTransport::ok());

    let err = tron.trc20_decimals(&usdt()).await.unwrap_err();
    assert!(matches!(err, Error::NilResponse));
}

#[tokio::test]
async fn test_trc20_revert_surfaces_contract_message() {
    let reverted = api::TransactionExtention {
        result: Some(api::Return {
            result: false,
            code: ResponseCode::ContractExeError as i32,
            message: b"REVERT opcode executed".to_vec(),
        }),
        ..Default::default()
    };
    let tron = facade(MockTransport::ok().with_ext(reverted));

    let err = tron.trc20_balance_of(&addr(0x11), &usdt()).await.unwrap_err();
    match err {
        Error::TransactionFailed(message) => assert!(message.contains("REVERT")),
        other => panic!("expected TransactionFailed, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_trc20_transfer_sets_fee_limit_and_recomputes_txid() {
    let tron = facade(MockTransport::ok().with_ext(built_ext()));

    let ext = tron
        .trc20_transfer(&addr(0x11), &addr(0x22), &usdt(), 1_000, Trx::trx(10))
        .await
        .unwrap();

    let tx = ext.transaction.as_ref().unwrap();
    assert_eq!(tx.raw_data.as_ref().unwrap().fee_limit, 10_000_000);
    // The id commits to the raw data, so the placeholder the node sent must
    // have been replaced by the hash of the mutated transaction.
    assert_ne!(ext.txid, vec![0u8; 32]);
    assert_eq!(ext.txid, txid(tx).unwrap());
}

// =============================================================================
// Wiring
// =============================================================================

#[tokio::test]
async fn test_facade_close_reaches_transport() {
    let mock = MockTransport::ok();
    let closes = mock.closes();
    let tron = facade(mock);

    tron.close().await.unwrap();
    assert_eq!(closes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_facade_over_metrics_decorator_records_calls() {
    let collector = Arc::new(RecordingCollector::default());
    let stack = MetricsTransport::new(
        Arc::new(MockTransport::ok()),
        Arc::clone(&collector) as Arc<dyn MetricsCollector>,
    );
    let tron = Tron::with_transport(Arc::new(stack), Network::Nile);

    tron.now_block().await.unwrap();

    let requests = collector.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].1, "GetNowBlock");
}

#[tokio::test]
async fn test_builder_publishes_pool_health_once() {
    let collector = Arc::new(RecordingCollector::default());
    let _tron = Tron::mainnet()
        .node(NodeConfig::grpc("grpc.trongrid.io:50051"))
        .node(NodeConfig::http("https://api.trongrid.io"))
        .metrics(Arc::clone(&collector) as Arc<dyn MetricsCollector>)
        .build()
        .unwrap();

    let pool = collector.pool.lock().unwrap();
    assert_eq!(pool.as_slice(), &[("tron".to_string(), 2, 2, 0)]);
}
