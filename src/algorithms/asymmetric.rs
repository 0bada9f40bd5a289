//! RSA decrypt capability over the `rsa` crate.
//!
//! 基于 `rsa` crate 的 RSA 解密能力。

use crate::capability::CipherCapability;
use crate::error::CipherError;
use rsa::traits::PublicKeyParts;
use rsa::rand_core::OsRng;
use rsa::{Oaep, Pkcs1v15Encrypt, RsaPrivateKey};
use sha2::Sha256;

/// RSA padding schemes understood by [`RsaCapability`].
///
/// [`RsaCapability`] 支持的 RSA 填充方案。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RsaPadding {
    /// PKCS#1 v1.5 encryption padding.
    ///
    /// PKCS#1 v1.5 加密填充。
    Pkcs1v15,
    /// OAEP with SHA-256 as both the label digest and the MGF1 digest.
    ///
    /// 以 SHA-256 作为标签摘要和 MGF1 摘要的 OAEP。
    OaepSha256,
}

impl RsaPadding {
    /// Maps an algorithm identifier to its padding scheme.
    ///
    /// Bare `RSA` means PKCS#1 v1.5, matching what the encrypting side uses
    /// for that name.
    pub fn from_algorithm(algorithm: &str) -> Option<Self> {
        const PKCS1: [&str; 2] = ["RSA", "RSA/ECB/PKCS1Padding"];
        const OAEP_SHA256: [&str; 2] = [
            "RSA/ECB/OAEPWithSHA-256AndMGF1Padding",
            "RSA/ECB/OAEPWithSHA256AndMGF1Padding",
        ];

        let known = |names: &[&str]| names.iter().any(|n| n.eq_ignore_ascii_case(algorithm));
        if known(PKCS1.as_slice()) {
            Some(RsaPadding::Pkcs1v15)
        } else if known(OAEP_SHA256.as_slice()) {
            Some(RsaPadding::OaepSha256)
        } else {
            None
        }
    }
}

/// Decrypt-only RSA cipher bound to one private key.
///
/// Every call is blinded with a fresh factor from the operating system RNG.
///
/// 绑定单个私钥的仅解密 RSA 密码器。每次调用都使用操作系统随机数生成器进行盲化。
pub struct RsaCapability {
    key: RsaPrivateKey,
    padding: RsaPadding,
}

impl RsaCapability {
    pub fn new(key: RsaPrivateKey, padding: RsaPadding) -> Self {
        Self { key, padding }
    }

    pub fn padding(&self) -> RsaPadding {
        self.padding
    }

    /// Largest ciphertext accepted by one call: the modulus size in bytes.
    pub fn max_block_size(&self) -> usize {
        self.key.size()
    }
}

impl CipherCapability for RsaCapability {
    fn decrypt(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        let max = self.max_block_size();
        if block.is_empty() || block.len() > max {
            return Err(CipherError::InvalidBlockSize {
                len: block.len(),
                max,
            });
        }
        let plaintext = match self.padding {
            RsaPadding::Pkcs1v15 => {
                self.key
                    .decrypt_blinded(&mut OsRng, Pkcs1v15Encrypt, block)?
            }
            RsaPadding::OaepSha256 => {
                self.key
                    .decrypt_blinded(&mut OsRng, Oaep::new::<Sha256>(), block)?
            }
        };
        Ok(plaintext)
    }
}
