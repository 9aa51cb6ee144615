//! Quickstart - Essential TRON operations
//!
//! Covers: blocks, accounts, TRX balances, TRC20 reads, transfer + broadcast
//!
//! Run: cargo run --example quickstart
//!
//! Set an environment variable for the write examples:
//!   TRON_PRIVATE_KEY=<64 hex chars>   (a funded Nile testnet key)

use tron_kit::*;

// ============================================================================
// 1. Read chain data (read-only, no credentials needed)
// ============================================================================

async fn read_example() -> Result<()> {
    println!("=== Read Example ===\n");

    let tron = Tron::nile().build()?;

    // The latest block
    let block = tron.now_block().await?;
    let height = block
        .block_header
        .as_ref()
        .and_then(|h| h.raw_data.as_ref())
        .map(|raw| raw.number)
        .unwrap_or_default();
    println!("Nile is at block {height}");

    // A well-known Nile faucet address
    let faucet: Address = "TXYZopYRdj2D9XRtbG411XZZ3kM5VkAeBf".parse()?;

    let balance = tron.balance(&faucet).await?;
    println!("Faucet balance: {balance}");

    let activated = tron.is_account_activated(&faucet).await?;
    println!("Faucet activated: {activated}");

    // Current network parameters
    let params = tron.chain_params().await?;
    println!("Energy fee: {} SUN", params.energy_fee);

    tron.close().await?;
    Ok(())
}

// ============================================================================
// 2. TRC20 token reads (mainnet USDT)
// ============================================================================

async fn trc20_example() -> Result<()> {
    println!("\n=== TRC20 Example ===\n");

    let tron = Tron::mainnet().build()?;

    let usdt: Address = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t".parse()?;

    let name = tron.trc20_name(&usdt).await?;
    let symbol = tron.trc20_symbol(&usdt).await?;
    let decimals = tron.trc20_decimals(&usdt).await?;
    println!("{name} ({symbol}), {decimals} decimals");

    // Balance of the token contract itself
    let balance = tron.trc20_balance_of(&usdt, &usdt).await?;
    println!("Contract holds {balance} base units");

    tron.close().await?;
    Ok(())
}

// ============================================================================
// 3. Transfer TRX (requires a funded key)
// ============================================================================

async fn transfer_example(tron: &Tron, key: &PrivateKey) -> Result<()> {
    println!("\n=== Transfer Example ===\n");

    let from = key.address();
    let to: Address = "TXYZopYRdj2D9XRtbG411XZZ3kM5VkAeBf".parse()?;

    // Build the unsigned transaction on the node
    let mut ext = tron.transfer(&from, &to, Trx::trx(1)).await?;
    let mut tx = ext.transaction.take().ok_or(Error::InvalidTransaction)?;

    // Sign locally, then submit
    key.sign_transaction(&mut tx)?;
    let receipt = tron.broadcast(tx).await?;
    println!("Sent 1 TRX: accepted={}", receipt.result);

    Ok(())
}

// ============================================================================
// 4. Transfer a TRC20 token (requires a funded key)
// ============================================================================

async fn trc20_transfer_example(tron: &Tron, key: &PrivateKey) -> Result<()> {
    println!("\n=== TRC20 Transfer Example ===\n");

    let from = key.address();
    let to: Address = "TXYZopYRdj2D9XRtbG411XZZ3kM5VkAeBf".parse()?;
    // Nile USDT
    let usdt: Address = "TXLAQ63Xg1NAzckPwKHvzw7CSEmLMEqcdj".parse()?;

    // 0.1 USDT (6 decimals), capped at 20 TRX of energy
    let mut ext = tron
        .trc20_transfer(&from, &to, &usdt, 100_000, Trx::trx(20))
        .await?;
    let mut tx = ext.transaction.take().ok_or(Error::InvalidTransaction)?;

    key.sign_transaction(&mut tx)?;
    let receipt = tron.broadcast(tx).await?;
    println!("Sent 0.1 USDT: accepted={}", receipt.result);

    Ok(())
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    println!("tron-kit Quickstart Examples\n");

    // Read examples work without credentials
    read_example().await?;
    trc20_example().await?;

    match std::env::var("TRON_PRIVATE_KEY") {
        Ok(hex) => {
            let key: PrivateKey = hex.parse()?;
            println!("\nSigning as {}", key.address());

            let tron = Tron::nile().build()?;
            transfer_example(&tron, &key).await?;
            trc20_transfer_example(&tron, &key).await?;
            tron.close().await?;
        }
        Err(_) => {
            println!("\n---");
            println!("Set TRON_PRIVATE_KEY to run the write examples.");
            println!("Get Nile testnet TRX at: https://nileex.io/join/getJoinPage");
        }
    }

    Ok(())
}
