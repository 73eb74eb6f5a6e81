//! Field validators for the key-entry form and the password dialog.

use thiserror::Error;

use crate::error::{Result, WalletError};

/// Punctuation accepted by the pass-phrase complexity rule.
const PASSPHRASE_SYMBOLS: &str = "~!@#$%^&*()";

/// One variant per inline message the password dialog can show.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PassphraseError {
    #[error("Password must be set.")]
    Empty,
    #[error("Weak password: use 8-21 letters, digits or ~!@#$%^&*(), mixing at least two kinds.")]
    Weak,
    #[error("Please confirm the password.")]
    ConfirmEmpty,
    #[error("Passwords don't match.")]
    Mismatch,
}

/// Trim and require a non-empty private key. Key syntax is checked by
/// the node, not here.
pub fn validate_private_key(input: &str) -> Result<String> {
    let key = input.trim();
    if key.is_empty() {
        return Err(WalletError::Validation("Private key must be set.".into()));
    }
    Ok(key.to_string())
}

/// Complexity rule for an optional wallet password: 8 to 21 characters,
/// drawn only from letters, digits and `~!@#$%^&*()`, with at least two
/// of those three classes present.
pub fn validate_passphrase(pass: &str) -> std::result::Result<(), PassphraseError> {
    if pass.is_empty() {
        return Err(PassphraseError::Empty);
    }
    let len = pass.chars().count();
    if !(8..=21).contains(&len) {
        return Err(PassphraseError::Weak);
    }
    let mut letters = false;
    let mut digits = false;
    let mut symbols = false;
    for c in pass.chars() {
        if c.is_ascii_alphabetic() {
            letters = true;
        } else if c.is_ascii_digit() {
            digits = true;
        } else if PASSPHRASE_SYMBOLS.contains(c) {
            symbols = true;
        } else {
            return Err(PassphraseError::Weak);
        }
    }
    if u8::from(letters) + u8::from(digits) + u8::from(symbols) < 2 {
        return Err(PassphraseError::Weak);
    }
    Ok(())
}

/// The confirmation field must be non-empty and equal to `pass`.
pub fn validate_confirmation(pass: &str, check: &str) -> std::result::Result<(), PassphraseError> {
    if check.is_empty() {
        return Err(PassphraseError::ConfirmEmpty);
    }
    if check != pass {
        return Err(PassphraseError::Mismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_key_is_trimmed() {
        assert_eq!(validate_private_key("  abc123  ").unwrap(), "abc123");
    }

    #[test]
    fn private_key_empty_rejected() {
        assert!(validate_private_key("").is_err());
        assert!(validate_private_key("   \t ").is_err());
    }

    #[test]
    fn passphrase_accepts_two_class_values() {
        validate_passphrase("Abc12345").unwrap();
        validate_passphrase("Abc12345!").unwrap();
        validate_passphrase("12345678!").unwrap();
        validate_passphrase("abcdefg~").unwrap();
        // Boundary lengths
        validate_passphrase("a1a1a1a1").unwrap();
        validate_passphrase("a1a1a1a1a1a1a1a1a1a1a").unwrap();
    }

    #[test]
    fn passphrase_rejects_single_class_values() {
        assert_eq!(validate_passphrase("12345678"), Err(PassphraseError::Weak));
        assert_eq!(validate_passphrase("abcdefgh"), Err(PassphraseError::Weak));
        assert_eq!(
            validate_passphrase("~!@#$%^&*("),
            Err(PassphraseError::Weak)
        );
    }

    #[test]
    fn passphrase_rejects_bad_lengths() {
        assert_eq!(validate_passphrase("a1b2c3!"), Err(PassphraseError::Weak));
        assert_eq!(
            validate_passphrase("a1a1a1a1a1a1a1a1a1a1a1"),
            Err(PassphraseError::Weak)
        );
    }

    #[test]
    fn passphrase_rejects_foreign_characters() {
        assert_eq!(validate_passphrase("Abc 1234"), Err(PassphraseError::Weak));
        assert_eq!(validate_passphrase("Abc-1234"), Err(PassphraseError::Weak));
        assert_eq!(validate_passphrase("Abc12345_"), Err(PassphraseError::Weak));
        assert_eq!(validate_passphrase("Äbc12345"), Err(PassphraseError::Weak));
    }

    #[test]
    fn passphrase_empty_is_its_own_error() {
        assert_eq!(validate_passphrase(""), Err(PassphraseError::Empty));
    }

    #[test]
    fn confirmation_requires_equality() {
        validate_confirmation("Abc12345", "Abc12345").unwrap();
        assert_eq!(
            validate_confirmation("Abc12345", "abc12345"),
            Err(PassphraseError::Mismatch)
        );
    }

    #[test]
    fn confirmation_empty_is_its_own_error() {
        assert_eq!(
            validate_confirmation("Abc12345", ""),
            Err(PassphraseError::ConfirmEmpty)
        );
    }
}
