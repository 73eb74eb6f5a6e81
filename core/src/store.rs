//! Persisted session state: the entries the original web client kept
//! in browser local storage.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WalletError};
use crate::network::AccountEntry;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionData {
    #[serde(default)]
    new_account_address: String,
    #[serde(default)]
    address_alias: String,
    /// Stringified boolean ("true"/"false"), matching the persisted
    /// contract of the original client. Empty before any import.
    #[serde(default)]
    encrypted: String,
}

/// Session store backed by a single JSON file, so the address, alias
/// and protection flag are always written together.
///
/// Path: `data_dir()/session.json`
pub struct SessionStore {
    path: PathBuf,
    data: SessionData,
}

impl SessionStore {
    /// Open (or create) the session store at the default data directory.
    pub fn open() -> Result<Self> {
        let path = crate::data_dir()?.join("session.json");
        Self::open_at(path)
    }

    /// Open (or create) the session store at a specific path.
    pub fn open_at(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .map_err(|e| WalletError::Storage(format!("Failed to read session state: {e}")))?;
            serde_json::from_str(&raw).unwrap_or_default()
        } else {
            SessionData::default()
        };
        Ok(Self { path, data })
    }

    /// Record a successful import: the new address, a cleared alias and
    /// the protection flag. One write covers all three entries.
    pub fn record_import(&mut self, address: &str, encrypted: bool) -> Result<()> {
        self.data.new_account_address = address.to_string();
        self.data.address_alias.clear();
        self.data.encrypted = encrypted.to_string();
        self.save()
    }

    /// Record the account entering the wallet view: the single-account
    /// refresh path, or an explicit pick on the selection screen.
    pub fn record_active_account(&mut self, entry: &AccountEntry) -> Result<()> {
        self.data.new_account_address = entry.address.clone();
        self.data.encrypted = entry.encrypted.to_string();
        self.save()
    }

    pub fn address(&self) -> &str {
        &self.data.new_account_address
    }

    pub fn address_alias(&self) -> &str {
        &self.data.address_alias
    }

    /// The raw persisted flag: `"true"`, `"false"`, or empty before any
    /// import has been recorded.
    pub fn encrypted_flag(&self) -> &str {
        &self.data.encrypted
    }

    pub fn is_encrypted(&self) -> bool {
        self.data.encrypted == "true"
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                WalletError::Storage(format!("Failed to create data directory: {e}"))
            })?;
        }
        let raw = serde_json::to_string_pretty(&self.data)
            .map_err(|e| WalletError::Storage(format!("Failed to encode session state: {e}")))?;
        std::fs::write(&self.path, raw)
            .map_err(|e| WalletError::Storage(format!("Failed to write session state: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> SessionStore {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.keep().join("session.json");
        SessionStore::open_at(path).unwrap()
    }

    #[test]
    fn fresh_store_is_empty() {
        let store = temp_store();
        assert_eq!(store.address(), "");
        assert_eq!(store.encrypted_flag(), "");
        assert!(!store.is_encrypted());
    }

    #[test]
    fn unprotected_import_persists_false() {
        let mut store = temp_store();
        store.record_import("0xADDR", false).unwrap();
        assert_eq!(store.address(), "0xADDR");
        assert_eq!(store.encrypted_flag(), "false");
        assert!(!store.is_encrypted());
    }

    #[test]
    fn protected_import_persists_true() {
        let mut store = temp_store();
        store.record_import("0xADDR", true).unwrap();
        assert_eq!(store.encrypted_flag(), "true");
        assert!(store.is_encrypted());
    }

    #[test]
    fn import_clears_stale_alias() {
        let mut store = temp_store();
        store.data.address_alias = "my old account".into();
        store.record_import("0xADDR", false).unwrap();
        assert_eq!(store.address_alias(), "");
    }

    #[test]
    fn state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.keep().join("session.json");

        let mut store = SessionStore::open_at(path.clone()).unwrap();
        store.record_import("0xADDR", true).unwrap();
        drop(store);

        let reopened = SessionStore::open_at(path).unwrap();
        assert_eq!(reopened.address(), "0xADDR");
        assert_eq!(reopened.encrypted_flag(), "true");
    }

    #[test]
    fn active_account_overwrites_address_and_flag() {
        let mut store = temp_store();
        store.record_import("0xADDR", true).unwrap();
        store
            .record_active_account(&AccountEntry {
                address: "0xOTHER".into(),
                encrypted: false,
            })
            .unwrap();
        assert_eq!(store.address(), "0xOTHER");
        assert_eq!(store.encrypted_flag(), "false");
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.keep().join("session.json");
        std::fs::write(&path, "not json").unwrap();
        let store = SessionStore::open_at(path).unwrap();
        assert_eq!(store.address(), "");
    }
}
