use super::mode::ProcessingMode;
use super::properties::{self, property, Properties};
use super::{is_block_limited, DEFAULT_ALGORITHM};
use crate::codec::EncodingKind;
use crate::error::InitializationError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable parameters of a decryption snapshot.
///
/// 解密快照的不可变参数。
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecryptionConfig {
    algorithm: String,
    cipher_type: Option<String>,
    provider: Option<String>,
    input_encoding: EncodingKind,
    output_encoding: EncodingKind,
    mode: ProcessingMode,
}

impl Default for DecryptionConfig {
    fn default() -> Self {
        DecryptionConfigBuilder::new().build()
    }
}

impl DecryptionConfig {
    pub fn builder() -> DecryptionConfigBuilder {
        DecryptionConfigBuilder::new()
    }

    /// Reads the algorithm section of `properties`, applying the defaults
    /// `RSA`, base64 input, no output encoding and ordinary processing.
    pub fn from_properties(properties: &Properties) -> Result<Self, InitializationError> {
        let mut builder = DecryptionConfigBuilder::new();
        if let Some(algorithm) = property(properties, properties::ALGORITHM) {
            builder = builder.algorithm(algorithm);
        }
        if let Some(cipher_type) = property(properties, properties::CIPHER_TYPE) {
            builder = builder.cipher_type(cipher_type);
        }
        if let Some(provider) = property(properties, properties::PROVIDER) {
            builder = builder.provider(provider);
        }
        if let Some(kind) = parse_property(properties, properties::INPUT_ENCODING)? {
            builder = builder.input_encoding(kind);
        }
        if let Some(kind) = parse_property(properties, properties::OUTPUT_ENCODING)? {
            builder = builder.output_encoding(kind);
        }
        if let Some(mode) = parse_property(properties, properties::PROCESSING_MODE)? {
            builder = builder.mode(mode);
        }
        Ok(builder.build())
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn cipher_type(&self) -> Option<&str> {
        self.cipher_type.as_deref()
    }

    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    pub fn input_encoding(&self) -> EncodingKind {
        self.input_encoding
    }

    pub fn output_encoding(&self) -> EncodingKind {
        self.output_encoding
    }

    pub fn mode(&self) -> ProcessingMode {
        self.mode
    }

    /// Whether decryption goes through the chunked path.
    pub fn is_block_limited(&self) -> bool {
        is_block_limited(&self.algorithm)
    }
}

fn parse_property<T: std::str::FromStr>(
    properties: &Properties,
    key: &'static str,
) -> Result<Option<T>, InitializationError> {
    property(properties, key)
        .map(|value| {
            value.parse().map_err(|_| InitializationError::InvalidProperty {
                key,
                value: value.to_string(),
            })
        })
        .transpose()
}

pub struct DecryptionConfigBuilder {
    algorithm: String,
    cipher_type: Option<String>,
    provider: Option<String>,
    input_encoding: EncodingKind,
    output_encoding: EncodingKind,
    mode: ProcessingMode,
}

impl Default for DecryptionConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DecryptionConfigBuilder {
    pub fn new() -> Self {
        Self {
            algorithm: DEFAULT_ALGORITHM.to_string(),
            cipher_type: None,
            provider: None,
            input_encoding: EncodingKind::Base64,
            output_encoding: EncodingKind::None,
            mode: ProcessingMode::Ordinary,
        }
    }

    pub fn algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    pub fn cipher_type(mut self, cipher_type: impl Into<String>) -> Self {
        self.cipher_type = Some(cipher_type.into());
        self
    }

    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn input_encoding(mut self, kind: EncodingKind) -> Self {
        self.input_encoding = kind;
        self
    }

    pub fn output_encoding(mut self, kind: EncodingKind) -> Self {
        self.output_encoding = kind;
        self
    }

    pub fn mode(mut self, mode: ProcessingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn build(self) -> DecryptionConfig {
        DecryptionConfig {
            algorithm: self.algorithm,
            cipher_type: self.cipher_type,
            provider: self.provider,
            input_encoding: self.input_encoding,
            output_encoding: self.output_encoding,
            mode: self.mode,
        }
    }
}
