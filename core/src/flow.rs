//! Two-step import flow: key entry, then the password dialog.

use zeroize::Zeroizing;

use crate::error::{Result, WalletError};
use crate::network::ImportRequest;
use crate::validate::validate_private_key;

/// Result of the password-capture dialog.
///
/// There is no third outcome: a confirmed pass-phrase is always
/// non-empty and already validated by the dialog, and `Skipped` is the
/// explicit "proceed without protection" escape hatch.
#[derive(Debug, Clone)]
pub enum PassphraseOutcome {
    Protected(Zeroizing<String>),
    Skipped,
}

impl PassphraseOutcome {
    /// The request password field: the pass-phrase, or empty when skipped.
    pub fn password(&self) -> &str {
        match self {
            Self::Protected(pass) => pass.as_str(),
            Self::Skipped => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    AwaitingPassphrase,
    Submitting,
}

/// State machine guarding the import flow.
///
/// Transitions out of order are rejected, so a submission cannot be
/// fired twice even if the UI re-triggers while a request is in flight.
#[derive(Debug)]
pub struct ImportFlow {
    state: FlowState,
    key: Zeroizing<String>,
}

impl Default for ImportFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportFlow {
    pub fn new() -> Self {
        Self {
            state: FlowState::Idle,
            key: Zeroizing::new(String::new()),
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Validate the key and move to `AwaitingPassphrase` (the caller
    /// opens the password dialog on success).
    pub fn begin(&mut self, key_input: &str) -> Result<()> {
        if self.state != FlowState::Idle {
            return Err(WalletError::Validation(
                "An import is already in progress.".into(),
            ));
        }
        let key = validate_private_key(key_input)?;
        self.key = Zeroizing::new(key);
        self.state = FlowState::AwaitingPassphrase;
        Ok(())
    }

    /// Consume the dialog outcome and produce the immutable request,
    /// entering `Submitting`.
    pub fn resolve(&mut self, outcome: &PassphraseOutcome) -> Result<ImportRequest> {
        if self.state != FlowState::AwaitingPassphrase {
            return Err(WalletError::Validation(
                "No import awaiting a password.".into(),
            ));
        }
        self.state = FlowState::Submitting;
        Ok(ImportRequest {
            pri_key: self.key.as_str().to_string(),
            password: outcome.password().to_string(),
        })
    }

    /// Return to `Idle`, wiping the held key. Used both when the dialog
    /// is dismissed and when a submission settles.
    pub fn reset(&mut self) {
        self.state = FlowState::Idle;
        self.key = Zeroizing::new(String::new());
    }
}
