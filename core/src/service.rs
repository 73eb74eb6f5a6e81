//! Import service: submits the request and reconciles the account list.

use std::sync::Arc;

use crate::error::{Result, WalletError};
use crate::network::{AccountApi, AccountEntry, ImportRequest};

/// Settled result of an import submission.
///
/// The caller owns persistence and navigation; nothing is written here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The node accepted the key and returned the account address.
    Imported { address: String, encrypted: bool },
    /// The node answered `success: false`; the server message verbatim.
    Rejected { message: String },
    /// The request never settled. The original client rendered this
    /// like a success and refreshed the list anyway; callers decide.
    TransportLost,
}

/// Where to go after a successful account-list refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Exactly one account: straight into the wallet view.
    Wallet(AccountEntry),
    /// Zero or several accounts: the selection view, with the full list.
    AccountSelect(Vec<AccountEntry>),
}

pub struct ImportService {
    api: Arc<dyn AccountApi>,
}

impl ImportService {
    pub fn new(api: Arc<dyn AccountApi>) -> Self {
        Self { api }
    }

    /// Submit an import request. All three ways the call can settle are
    /// folded into [`ImportOutcome`]; transport failures do not error.
    pub async fn submit_import(&self, request: &ImportRequest) -> ImportOutcome {
        let encrypted = request.encrypted();
        match self.api.import_private_key(request).await {
            Ok(reply) if reply.success => ImportOutcome::Imported {
                address: reply.data.value,
                encrypted,
            },
            Ok(reply) => ImportOutcome::Rejected {
                message: reply.data.msg,
            },
            Err(_) => ImportOutcome::TransportLost,
        }
    }

    /// Fetch the account list and decide the navigation target.
    pub async fn refresh_accounts(&self) -> Result<Navigation> {
        let reply = self.api.account_list().await?;
        if !reply.success {
            return Err(WalletError::Api(
                "Node rejected the account list request.".into(),
            ));
        }
        let mut list = reply.data.list;
        if list.len() == 1 {
            Ok(Navigation::Wallet(list.remove(0)))
        } else {
            Ok(Navigation::AccountSelect(list))
        }
    }
}
