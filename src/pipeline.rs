//! The decryption entry point: decode, decrypt, encode.
//!
//! 解密入口：解码、解密、编码。

use crate::algorithms::create_cipher;
use crate::body::ChunkedDecryptor;
use crate::capability::CipherCapability;
use crate::common::config::DecryptionConfig;
use crate::common::properties::Properties;
use crate::error::{DecryptionError, Error, Result};
use crate::keys::{Credentials, IdentityKeyStore, KeyStore};
use crate::provider;
use parking_lot::RwLock;
use std::sync::Arc;
use zeroize::Zeroizing;

/// An immutable (config, capability) pair. Every decrypt call runs against
/// exactly one context from start to finish.
pub struct DecryptionContext {
    config: DecryptionConfig,
    capability: Box<dyn CipherCapability>,
}

impl DecryptionContext {
    pub fn new(config: DecryptionConfig, capability: Box<dyn CipherCapability>) -> Self {
        Self { config, capability }
    }

    /// Opens the identity key from `key_store` and builds a context from
    /// `properties`.
    ///
    /// Both passwords are checked before the key store is touched.
    pub fn from_properties(properties: &Properties, key_store: &dyn KeyStore) -> Result<Self> {
        let identity = IdentityKeyStore::from_properties(properties);
        let credentials = Credentials::from_properties(properties)?;
        let config = DecryptionConfig::from_properties(properties)?;
        let provider = provider::resolve(config.provider());
        let key = key_store.private_key(&identity, &credentials)?;
        let capability = create_cipher(&config, provider, key)?;
        Ok(Self::new(config, capability))
    }

    pub fn config(&self) -> &DecryptionConfig {
        &self.config
    }

    /// Decodes `input`, decrypts it and encodes the plaintext.
    ///
    /// Block-limited algorithms go through [`ChunkedDecryptor`]; any other
    /// algorithm gets a single capability call on the whole buffer.
    pub fn decrypt(&self, input: &[u8]) -> Result<Vec<u8>> {
        let ciphertext = self.config.input_encoding().decode(input)?;

        let plaintext = if self.config.is_block_limited() {
            ChunkedDecryptor::new(&*self.capability)
                .with_mode(self.config.mode())
                .decrypt(&ciphertext)?
        } else {
            self.capability
                .decrypt(&ciphertext)
                .map(Zeroizing::new)
                .map_err(|source| DecryptionError::Whole { source })?
        };

        Ok(self
            .config
            .output_encoding()
            .encode(&plaintext)
            .into_owned())
    }
}

/// A shareable decryptor whose configuration and key can be swapped at runtime.
///
/// Re-initialization builds the new context completely before publishing it,
/// so in-flight calls finish against the context they started with and a
/// failed re-initialization leaves the current context in place.
#[derive(Default)]
pub struct DecryptionPipeline {
    current: RwLock<Option<Arc<DecryptionContext>>>,
}

impl DecryptionPipeline {
    /// A pipeline that rejects every call until [`init`](Self::init) succeeds.
    pub fn uninitialized() -> Self {
        Self::default()
    }

    /// Builds an initialized pipeline from configuration properties.
    pub fn new(properties: &Properties, key_store: &dyn KeyStore) -> Result<Self> {
        let pipeline = Self::uninitialized();
        pipeline.init(properties, key_store)?;
        Ok(pipeline)
    }

    /// Builds an initialized pipeline around an existing capability.
    pub fn with_capability<C: CipherCapability + 'static>(
        config: DecryptionConfig,
        capability: C,
    ) -> Self {
        let pipeline = Self::uninitialized();
        pipeline.replace(config, capability);
        pipeline
    }

    #[tracing::instrument(level = "debug", skip_all, err)]
    pub fn init(&self, properties: &Properties, key_store: &dyn KeyStore) -> Result<()> {
        let context = DecryptionContext::from_properties(properties, key_store)?;
        self.install(context);
        Ok(())
    }

    /// Atomically swaps in a new config and capability.
    pub fn replace<C: CipherCapability + 'static>(&self, config: DecryptionConfig, capability: C) {
        self.install(DecryptionContext::new(config, Box::new(capability)));
    }

    fn install(&self, context: DecryptionContext) {
        let config = context.config();
        tracing::info!(
            algorithm = config.algorithm(),
            input_encoding = %config.input_encoding(),
            output_encoding = %config.output_encoding(),
            mode = %config.mode(),
            "decryptor initialized"
        );
        *self.current.write() = Some(Arc::new(context));
    }

    pub fn is_initialized(&self) -> bool {
        self.current.read().is_some()
    }

    /// The context new calls currently run against.
    pub fn snapshot(&self) -> Result<Arc<DecryptionContext>> {
        self.current.read().clone().ok_or(Error::NotInitialized)
    }

    pub fn config(&self) -> Option<DecryptionConfig> {
        self.current
            .read()
            .as_ref()
            .map(|context| context.config().clone())
    }

    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.snapshot()?.decrypt(ciphertext)
    }

    /// Convenience for textual payloads such as property values.
    pub fn decrypt_str(&self, ciphertext: &str) -> Result<Vec<u8>> {
        self.decrypt(ciphertext.as_bytes())
    }

    /// Runs [`decrypt`](Self::decrypt) on the tokio blocking pool.
    #[cfg(feature = "async")]
    pub async fn decrypt_async(&self, ciphertext: Vec<u8>) -> Result<Vec<u8>> {
        let context = self.snapshot()?;
        tokio::task::spawn_blocking(move || context.decrypt(&ciphertext)).await?
    }
}
