//! Crypto data adapters
//!
//! Five tool servers, each wrapping one third-party crypto data API behind a
//! fixed catalogue of read-only operations:
//! - Arkham Intelligence (on-chain attribution and flows)
//! - CoinGecko (market data, plus local time helpers)
//! - Codex (GraphQL token search)
//! - DefiLlama (TVL, yields, prices and volumes)
//! - Elfa (social mentions)
//!
//! Every call goes through the same path: the parameter builder turns typed
//! arguments into a wire request, the dispatcher sends it over a shared
//! transport, and the outcome comes back as text.

pub mod adapter;
pub mod config;
pub mod dispatch;
pub mod params;
pub mod server;
pub mod tools;
pub mod transport;

mod error;

// Re-export commonly used types
pub use adapter::Adapter;
pub use config::{AdapterConfig, AdapterKind, Config};
pub use dispatch::ResultValue;
pub use error::{Error, Result};
pub use server::Server;
