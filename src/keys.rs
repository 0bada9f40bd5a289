//! Key-store locator, credentials and private key material.
//!
//! 密钥库定位信息、凭据与私钥材料。

pub mod memory;
pub mod provider;

pub use memory::MemoryKeyStore;
pub use provider::KeyStore;

use crate::common::properties::{self, property, Properties};
use crate::error::InitializationError;
use std::fmt;
use zeroize::Zeroizing;

/// Private key material handed out by a [`KeyStore`].
///
/// 由 [`KeyStore`] 提供的私钥材料。
pub enum PrivateKey {
    Rsa(rsa::RsaPrivateKey),
}

impl From<rsa::RsaPrivateKey> for PrivateKey {
    fn from(key: rsa::RsaPrivateKey) -> Self {
        PrivateKey::Rsa(key)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrivateKey::Rsa(_) => f.write_str("PrivateKey::Rsa(..)"),
        }
    }
}

/// Where the identity key store lives and which entry to use.
///
/// 身份密钥库的位置以及要使用的条目。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityKeyStore {
    pub location: Option<String>,
    pub store_type: Option<String>,
    pub alias: Option<String>,
}

impl IdentityKeyStore {
    pub fn from_properties(properties: &Properties) -> Self {
        let owned = |key| property(properties, key).map(str::to_string);
        Self {
            location: owned(properties::IDENTITY_LOCATION),
            store_type: owned(properties::IDENTITY_TYPE),
            alias: owned(properties::IDENTITY_ALIAS),
        }
    }
}

/// The two secrets required to open the identity key store.
///
/// 打开身份密钥库所需的两个口令，在内存中会被清零。
pub struct Credentials {
    store_password: Zeroizing<String>,
    key_password: Zeroizing<String>,
}

impl Credentials {
    pub fn new(store_password: impl Into<String>, key_password: impl Into<String>) -> Self {
        Self {
            store_password: Zeroizing::new(store_password.into()),
            key_password: Zeroizing::new(key_password.into()),
        }
    }

    /// Reads both passwords, failing on the first one that is absent or empty.
    pub fn from_properties(properties: &Properties) -> Result<Self, InitializationError> {
        let store_password = property(properties, properties::IDENTITY_STORE_PASSWORD).ok_or(
            InitializationError::MissingCredential(properties::IDENTITY_STORE_PASSWORD),
        )?;
        let key_password = property(properties, properties::IDENTITY_KEY_PASSWORD).ok_or(
            InitializationError::MissingCredential(properties::IDENTITY_KEY_PASSWORD),
        )?;
        Ok(Self::new(store_password, key_password))
    }

    pub fn store_password(&self) -> &str {
        &self.store_password
    }

    pub fn key_password(&self) -> &str {
        &self.key_password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("store_password", &"<redacted>")
            .field("key_password", &"<redacted>")
            .finish()
    }
}
