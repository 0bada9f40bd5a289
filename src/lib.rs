//! `vault-decrypt` is a configuration-driven decryption library for
//! secure-vault style encrypted parameters. It decodes an encrypted payload,
//! decrypts it with an RSA private key (splitting long ciphertexts into
//! fixed-size blocks) and optionally re-encodes the plaintext.

pub mod algorithms;
pub mod body;
pub mod capability;
pub mod codec;
pub mod common;
pub mod error;
pub mod keys;
pub mod pipeline;
pub mod provider;

pub use capability::{CipherCapability, Serialized, StatefulCipher};
pub use codec::EncodingKind;
pub use common::config::{DecryptionConfig, DecryptionConfigBuilder};
pub use common::mode::ProcessingMode;
pub use common::properties::Properties;
pub use common::{DECRYPT_BLOCK_SIZE, ENCRYPT_BLOCK_SIZE};
pub use error::{Error, Result};
pub use pipeline::{DecryptionContext, DecryptionPipeline};

pub mod prelude {
    pub use crate::body::ChunkedDecryptor;
    pub use crate::capability::{CipherCapability, Serialized, StatefulCipher};
    pub use crate::codec::EncodingKind;
    pub use crate::common::config::DecryptionConfig;
    pub use crate::common::mode::ProcessingMode;
    pub use crate::common::properties::Properties;
    pub use crate::error::{
        CipherError, DecryptionError, EncodingError, Error, InitializationError, Result,
    };
    pub use crate::keys::{Credentials, IdentityKeyStore, KeyStore, MemoryKeyStore, PrivateKey};
    pub use crate::pipeline::DecryptionPipeline;
    pub use crate::provider::Provider;
}
