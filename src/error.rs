use thiserror::Error;

/// Failure reported by a [`CipherCapability`](crate::capability::CipherCapability)
/// for a single buffer.
#[derive(Debug, Error)]
pub enum CipherError {
    #[error("block of {len} bytes exceeds the cipher limit of {max} bytes")]
    InvalidBlockSize { len: usize, max: usize },

    #[error("RSA operation failed: {0}")]
    Rsa(#[from] rsa::Error),

    #[error("cipher provider error: {0}")]
    Provider(String),
}

/// Errors raised while building a decryption snapshot from configuration.
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("mandatory credential `{0}` was not provided")]
    MissingCredential(&'static str),

    #[error("invalid value `{value}` for property `{key}`")]
    InvalidProperty { key: &'static str, value: String },

    #[error("unsupported algorithm or cipher type: {0}")]
    UnsupportedAlgorithm(String),

    #[error("key store error: {0}")]
    KeyStore(String),
}

/// Input did not match the configured input encoding.
#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("malformed base64 input: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("malformed hex input: {0}")]
    Hex(#[from] hex::FromHexError),
}

#[derive(Debug, Error)]
pub enum DecryptionError {
    /// A chunk of the block-limited path failed. `index` is zero based.
    #[error("decryption failed at chunk {index}")]
    Block {
        index: usize,
        #[source]
        source: CipherError,
    },

    #[error("decryption failed")]
    Whole {
        #[source]
        source: CipherError,
    },
}

impl DecryptionError {
    /// Index of the failing chunk, when the chunked path was used.
    pub fn chunk_index(&self) -> Option<usize> {
        match self {
            DecryptionError::Block { index, .. } => Some(*index),
            DecryptionError::Whole { .. } => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Initialization(#[from] InitializationError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Decryption(#[from] DecryptionError),

    #[error("decryptor has not been initialized")]
    NotInitialized,

    #[error("异步任务错误: {0}")]
    AsyncTaskError(String),
}

#[cfg(feature = "async")]
impl From<tokio::task::JoinError> for Error {
    fn from(e: tokio::task::JoinError) -> Self {
        Error::AsyncTaskError(e.to_string())
    }
}

// 定义一个统一的 Result 类型
pub type Result<T> = std::result::Result<T, Error>;
