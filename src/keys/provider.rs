//! Defines the key-store collaborator trait.
//!
//! 定义密钥库协作者 trait。

use super::{Credentials, IdentityKeyStore, PrivateKey};
use crate::error::InitializationError;

/// A source of private keys for the decryptor.
///
/// Users implement this for their own key management systems (PKCS#12 files or
/// HSM bridges) so that initialization can obtain the identity key without
/// this crate understanding the storage format.
///
/// 私钥来源。用户为自己的密钥管理系统实现此 trait。
pub trait KeyStore: Send + Sync {
    /// Opens the identity key store and returns the selected private key.
    ///
    /// Implementations must verify both passwords and must not include either
    /// of them in returned errors.
    fn private_key(
        &self,
        identity: &IdentityKeyStore,
        credentials: &Credentials,
    ) -> Result<PrivateKey, InitializationError>;
}
