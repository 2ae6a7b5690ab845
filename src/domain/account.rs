//! Account domain types.
//!
//! Represents the identities the application can act as, as reported by the
//! platform's account registry.

use serde::{Deserialize, Serialize};

/// Account type used when none is configured.
pub const DEFAULT_ACCOUNT_TYPE: &str = "com.google";

/// A named identity the application can act as.
///
/// The name is unique among accounts of the same type and is normally an
/// email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    /// Unique account name, usually the account's email address.
    pub name: String,
    /// Type tag of the account registry entry.
    #[serde(rename = "type", default = "default_account_type")]
    pub account_type: String,
}

impl Account {
    /// Creates a new account.
    pub fn new(name: impl Into<String>, account_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            account_type: account_type.into(),
        }
    }

    /// Returns true if this account belongs to the given registry type.
    pub fn is_type(&self, account_type: &str) -> bool {
        self.account_type == account_type
    }
}

fn default_account_type() -> String {
    DEFAULT_ACCOUNT_TYPE.to_string()
}
