//! Data-access facade for the remote table store. Whether the console runs
//! remote-backed or in demo mode is decided by exactly two configuration
//! strings; nothing here probes the network.

pub mod client;
pub mod query;

pub use client::TableClient;
pub use query::Query;

use crate::config::StoreConfig;

/// True only when both the store endpoint and the access key are configured.
pub fn remote_available(config: &StoreConfig) -> bool {
    !config.url.trim().is_empty() && !config.service_key.trim().is_empty()
}

/// A handle to the remote store, or `None` when it is not configured.
pub fn remote_handle(config: &StoreConfig) -> Option<TableClient> {
    if remote_available(config) {
        Some(TableClient::new(config.url.trim(), &config.service_key))
    } else {
        None
    }
}
