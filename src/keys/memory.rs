//! An in-memory [`KeyStore`] for keys the application already holds.
//!
//! 用于应用程序已持有密钥的内存 [`KeyStore`]。

use super::{Credentials, IdentityKeyStore, KeyStore, PrivateKey};
use crate::error::InitializationError;
use std::collections::HashMap;
use zeroize::Zeroizing;

struct Entry {
    key: rsa::RsaPrivateKey,
    key_password: Zeroizing<String>,
}

/// An in-memory key store for applications that already hold their keys.
///
/// The store is guarded by one store password, each entry by its own key
/// password. When the identity names no alias, a store with exactly one
/// entry returns that entry. `store_type` is not interpreted.
///
/// 内存密钥库：整个库由库口令保护，每个条目由各自的密钥口令保护。
pub struct MemoryKeyStore {
    location: Option<String>,
    store_password: Zeroizing<String>,
    entries: HashMap<String, Entry>,
}

impl MemoryKeyStore {
    pub fn new(store_password: impl Into<String>) -> Self {
        Self {
            location: None,
            store_password: Zeroizing::new(store_password.into()),
            entries: HashMap::new(),
        }
    }

    /// Only answers identities whose location is unset or equal to `location`.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn insert_rsa(
        mut self,
        alias: impl Into<String>,
        key: rsa::RsaPrivateKey,
        key_password: impl Into<String>,
    ) -> Self {
        self.entries.insert(
            alias.into(),
            Entry {
                key,
                key_password: Zeroizing::new(key_password.into()),
            },
        );
        self
    }

    fn entry(&self, alias: Option<&str>) -> Result<(&str, &Entry), InitializationError> {
        if let Some(alias) = alias {
            return self
                .entries
                .get_key_value(alias)
                .map(|(alias, entry)| (alias.as_str(), entry))
                .ok_or_else(|| InitializationError::KeyStore(format!("no key entry `{alias}`")));
        }

        let mut entries = self.entries.iter();
        match (entries.next(), entries.next()) {
            (Some((alias, entry)), None) => Ok((alias.as_str(), entry)),
            (None, _) => Err(InitializationError::KeyStore("key store is empty".into())),
            _ => Err(InitializationError::KeyStore(format!(
                "key alias required to choose among {} entries",
                self.entries.len()
            ))),
        }
    }
}

impl KeyStore for MemoryKeyStore {
    fn private_key(
        &self,
        identity: &IdentityKeyStore,
        credentials: &Credentials,
    ) -> Result<PrivateKey, InitializationError> {
        if let (Some(expected), Some(requested)) = (&self.location, &identity.location) {
            if expected != requested {
                return Err(InitializationError::KeyStore(format!(
                    "no key store at `{requested}`"
                )));
            }
        }
        if credentials.store_password() != self.store_password.as_str() {
            return Err(InitializationError::KeyStore(
                "key store password is incorrect".into(),
            ));
        }
        let (alias, entry) = self.entry(identity.alias.as_deref())?;
        if credentials.key_password() != entry.key_password.as_str() {
            return Err(InitializationError::KeyStore(format!(
                "key password is incorrect for `{alias}`"
            )));
        }
        Ok(PrivateKey::Rsa(entry.key.clone()))
    }
}
