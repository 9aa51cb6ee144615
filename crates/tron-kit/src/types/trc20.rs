//! TRC20 call-data construction and result parsing.
//!
//! TRC20 is the TRON flavor of the ERC20 fungible-token standard; calls are
//! made by triggering the token contract with ABI-encoded call data. Only
//! the read/transfer subset needed by the client is covered here.

use crate::error::{Error, Result};
use crate::types::Address;

/// `transfer(address,uint256)` selector.
pub const TRANSFER_SELECTOR: [u8; 4] = [0xa9, 0x05, 0x9c, 0xbb];
/// `balanceOf(address)` selector.
pub const BALANCE_OF_SELECTOR: [u8; 4] = [0x70, 0xa0, 0x82, 0x31];
/// `decimals()` selector.
pub const DECIMALS_SELECTOR: [u8; 4] = [0x31, 0x3c, 0xe5, 0x67];
/// `name()` selector.
pub const NAME_SELECTOR: [u8; 4] = [0x06, 0xfd, 0xde, 0x03];
/// `symbol()` selector.
pub const SYMBOL_SELECTOR: [u8; 4] = [0x95, 0xd8, 0x9b, 0x41];

/// Call data for `transfer(address,uint256)`.
///
/// The address is the 20-byte account hash (network prefix stripped) left
/// padded to a 32-byte word; the amount is a 32-byte big-endian word.
pub fn transfer_call(to: &Address, amount: u128) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + 32 + 32);
    data.extend_from_slice(&TRANSFER_SELECTOR);
    push_address_word(&mut data, to);
    push_uint_word(&mut data, amount);
    data
}

/// Call data for `balanceOf(address)`.
pub fn balance_of_call(owner: &Address) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + 32);
    data.extend_from_slice(&BALANCE_OF_SELECTOR);
    push_address_word(&mut data, owner);
    data
}

/// Call data for `decimals()`.
pub fn decimals_call() -> Vec<u8> {
    DECIMALS_SELECTOR.to_vec()
}

/// Call data for `name()`.
pub fn name_call() -> Vec<u8> {
    NAME_SELECTOR.to_vec()
}

/// Call data for `symbol()`.
pub fn symbol_call() -> Vec<u8> {
    SYMBOL_SELECTOR.to_vec()
}

fn push_address_word(data: &mut Vec<u8>, address: &Address) {
    data.extend_from_slice(&[0u8; 12]);
    data.extend_from_slice(address.evm_bytes());
}

fn push_uint_word(data: &mut Vec<u8>, amount: u128) {
    data.extend_from_slice(&[0u8; 16]);
    data.extend_from_slice(&amount.to_be_bytes());
}

/// Decode a single `uint256` return word.
///
/// Fails with [`Error::InvalidAmount`] when the result is shorter than one
/// word or the value does not fit a `u128`.
pub fn decode_uint256(data: &[u8]) -> Result<u128> {
    if data.len() < 32 {
        return Err(Error::InvalidAmount);
    }
    let word = &data[..32];
    if word[..16].iter().any(|&b| b != 0) {
        return Err(Error::InvalidAmount);
    }
    let mut low = [0u8; 16];
    low.copy_from_slice(&word[16..]);
    Ok(u128::from_be_bytes(low))
}

/// Decode a `string` return value.
///
/// Handles the standard dynamic encoding (offset word, length word, UTF-8
/// data) and falls back to trimming a fixed `bytes32`-style result, which
/// some older token contracts return for `name()`/`symbol()`.
pub fn decode_string(data: &[u8]) -> String {
    if let Some(s) = decode_dynamic_string(data) {
        return s;
    }
    let trimmed: Vec<u8> = data.iter().copied().take_while(|&b| b != 0).collect();
    String::from_utf8_lossy(&trimmed).into_owned()
}

fn decode_dynamic_string(data: &[u8]) -> Option<String> {
    if data.len() < 64 {
        return None;
    }
    let offset = word_as_usize(&data[..32])?;
    let payload_start = offset.checked_add(32)?;
    let length_word = data.get(offset..payload_start)?;
    let length = word_as_usize(length_word)?;
    let bytes = data.get(payload_start..payload_start.checked_add(length)?)?;
    Some(String::from_utf8_lossy(bytes).into_owned())
}

/// A 32-byte word as usize, if it fits.
fn word_as_usize(word: &[u8]) -> Option<usize> {
    if word.len() != 32 || word[..24].iter().any(|&b| b != 0) {
        return None;
    }
    let mut tail = [0u8; 8];
    tail.copy_from_slice(&word[24..]);
    usize::try_from(u64::from_be_bytes(tail)).ok()
}
