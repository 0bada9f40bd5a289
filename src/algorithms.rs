//! Construction of concrete cipher capabilities from configuration and keys.
//!
//! 根据配置和密钥构造具体的密码能力。

pub mod asymmetric;

pub use asymmetric::{RsaCapability, RsaPadding};

use crate::capability::CipherCapability;
use crate::common::config::DecryptionConfig;
use crate::error::InitializationError;
use crate::keys::PrivateKey;
use crate::provider::Provider;

/// Builds the decrypt-mode capability for `config` around `key`.
///
/// The cipher type is passed through opaquely by the configuration; the RSA
/// backend only accepts it when absent or `asymmetric`.
///
/// 为 `config` 围绕 `key` 构造解密模式的密码能力。
pub fn create_cipher(
    config: &DecryptionConfig,
    provider: Provider,
    key: PrivateKey,
) -> Result<Box<dyn CipherCapability>, InitializationError> {
    if !provider.is_registered() {
        return Err(InitializationError::UnsupportedAlgorithm(format!(
            "provider `{}` is not registered",
            provider.name()
        )));
    }

    let algorithm = config.algorithm();
    if let Some(cipher_type) = config.cipher_type() {
        if !cipher_type.eq_ignore_ascii_case("asymmetric") {
            return Err(InitializationError::UnsupportedAlgorithm(format!(
                "`{algorithm}` with cipher type `{cipher_type}`"
            )));
        }
    }

    match key {
        PrivateKey::Rsa(key) => {
            let padding = RsaPadding::from_algorithm(algorithm).ok_or_else(|| {
                InitializationError::UnsupportedAlgorithm(format!("`{algorithm}` for an RSA key"))
            })?;
            Ok(Box::new(RsaCapability::new(key, padding)))
        }
    }
}
