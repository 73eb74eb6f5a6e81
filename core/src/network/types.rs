//! Wire types for the node's account API.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Body of `POST /account/import/pri`. Holds key material, so the
/// buffers are wiped on drop.
///
/// `password` is the empty string when the user declined protection;
/// [`ImportRequest::encrypted`] is true exactly when it is non-empty.
#[derive(Clone, Serialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    pub pri_key: String,
    pub password: String,
}

impl ImportRequest {
    /// Whether the import asks the node to encrypt the key.
    pub fn encrypted(&self) -> bool {
        !self.password.is_empty()
    }
}

impl std::fmt::Debug for ImportRequest {
    // Never print key material.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImportRequest")
            .field("encrypted", &self.encrypted())
            .finish_non_exhaustive()
    }
}

/// Response envelope of the import endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportReply {
    pub success: bool,
    #[serde(default)]
    pub data: ImportData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportData {
    /// Address of the imported account, present on success.
    #[serde(default)]
    pub value: String,
    /// Server-provided message, present on failure.
    #[serde(default)]
    pub msg: String,
}

/// Response envelope of `GET /account`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountListReply {
    pub success: bool,
    #[serde(default)]
    pub data: AccountListData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountListData {
    #[serde(default)]
    pub list: Vec<AccountEntry>,
}

/// One account known to the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountEntry {
    pub address: String,
    pub encrypted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_request_wire_shape() {
        let req = ImportRequest {
            pri_key: "abc123".into(),
            password: String::new(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"priKey": "abc123", "password": ""})
        );
    }

    #[test]
    fn encrypted_iff_password_nonempty() {
        let skipped = ImportRequest {
            pri_key: "abc123".into(),
            password: String::new(),
        };
        assert!(!skipped.encrypted());

        let protected = ImportRequest {
            pri_key: "abc123".into(),
            password: "Abc12345!".into(),
        };
        assert!(protected.encrypted());
    }

    #[test]
    fn import_reply_failure_carries_message() {
        let reply: ImportReply = serde_json::from_str(
            r#"{"success": false, "data": {"msg": "invalid key format"}}"#,
        )
        .unwrap();
        assert!(!reply.success);
        assert_eq!(reply.data.msg, "invalid key format");
        assert!(reply.data.value.is_empty());
    }

    #[test]
    fn account_list_reply_decodes() {
        let reply: AccountListReply = serde_json::from_str(
            r#"{"success": true, "data": {"list": [
                {"address": "0xAAA", "encrypted": true},
                {"address": "0xBBB", "encrypted": false}
            ]}}"#,
        )
        .unwrap();
        assert!(reply.success);
        assert_eq!(reply.data.list.len(), 2);
        assert!(reply.data.list[0].encrypted);
    }

    #[test]
    fn missing_data_defaults() {
        let reply: ImportReply = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(reply.data.value.is_empty());
        let list: AccountListReply = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(list.data.list.is_empty());
    }
}
