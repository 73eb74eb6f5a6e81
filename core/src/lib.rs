use std::path::PathBuf;

use anyhow::Context;

pub mod error;
pub mod flow;
pub mod network;
pub mod service;
pub mod store;
pub mod validate;

pub use error::WalletError;
pub use flow::{FlowState, ImportFlow, PassphraseOutcome};
pub use network::{AccountApi, AccountEntry, ImportRequest, NodeClient};
pub use service::{ImportOutcome, ImportService, Navigation};
pub use store::SessionStore;
pub use validate::{
    validate_confirmation, validate_passphrase, validate_private_key, PassphraseError,
};

/// API base of a node running on this machine with default settings.
pub const DEFAULT_NODE_URL: &str = "http://127.0.0.1:8001/api";

/// XDG-compliant data directory for session state.
/// Linux: `~/.local/share/keyport/`, macOS: `~/Library/Application Support/keyport/`
pub fn data_dir() -> error::Result<PathBuf> {
    let dir = dirs::data_dir()
        .context("Cannot determine data directory")?
        .join("keyport");
    Ok(dir)
}
