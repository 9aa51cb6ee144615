//! Node Pools and Metrics
//!
//! Demonstrates spreading load across several endpoints (mixing gRPC and
//! HTTP) and observing the client through a Prometheus registry.
//!
//! Run: cargo run --example node_pool
//!
//! Optional environment variable:
//!   TRONGRID_API_KEY - attached to every call as TRON-PRO-API-KEY

use std::sync::Arc;

use prometheus::{Encoder, Registry, TextEncoder};
use tron_kit::*;

#[tokio::main]
async fn main() -> Result<()> {
    println!("tron-kit Node Pool Example\n");

    // ========================================================================
    // Build a pool: two gRPC endpoints and one HTTP endpoint
    // ========================================================================

    let mut grpc = NodeConfig::grpc("grpc.trongrid.io:50051");
    let mut http = NodeConfig::http("https://api.trongrid.io");

    if let Ok(key) = std::env::var("TRONGRID_API_KEY") {
        grpc = grpc.with_header("TRON-PRO-API-KEY", key.clone());
        http = http.with_header("TRON-PRO-API-KEY", key);
    }

    let registry = Registry::new();
    let metrics = Arc::new(Metrics::new(&registry)?);

    let tron = Tron::mainnet()
        .node(grpc)
        .node(NodeConfig::grpc("grpc.trongrid.io:50051"))
        .node(http)
        .metrics(metrics)
        .build()?;

    // ========================================================================
    // Fan out reads; the pool rotates through the endpoints
    // ========================================================================

    let calls: Vec<_> = (0..6)
        .map(|_| {
            let tron = tron.clone();
            async move { tron.now_block().await }
        })
        .collect();

    let mut heights = Vec::new();
    for result in futures::future::join_all(calls).await {
        let block = result?;
        let height = block
            .block_header
            .as_ref()
            .and_then(|h| h.raw_data.as_ref())
            .map(|raw| raw.number)
            .unwrap_or_default();
        heights.push(height);
    }
    heights.sort_unstable();
    println!("Observed heights: {heights:?}");

    // Every endpoint also answers TRC20 reads the same way
    let usdt: Address = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t".parse()?;
    let symbol = tron.trc20_symbol(&usdt).await?;
    println!("Token: {symbol}");

    tron.close().await?;

    // ========================================================================
    // Dump what the registry collected
    // ========================================================================

    let mut buf = Vec::new();
    TextEncoder::new()
        .encode(&registry.gather(), &mut buf)
        .expect("encode metrics");
    println!("\n--- Prometheus output ---");
    println!("{}", String::from_utf8_lossy(&buf));

    Ok(())
}
