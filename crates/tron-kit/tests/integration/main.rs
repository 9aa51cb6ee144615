//! Integration tests for tron-kit.
//!
//! Everything here runs against in-process mock transports; no node or
//! network access is required.
//!
//! Run with: `cargo test --test integration`

mod support;

mod facade;
mod transport_pool;
