//! Block-chunked decryption for ciphers with a fixed per-call input limit.
//!
//! 针对单次输入长度受限的密码算法的分块解密。

pub(crate) mod ordinary;
pub(crate) mod parallel;

use crate::capability::CipherCapability;
use crate::common::mode::ProcessingMode;
use crate::common::DECRYPT_BLOCK_SIZE;
use crate::error::DecryptionError;
use zeroize::Zeroizing;

/// Splits ciphertext into [`DECRYPT_BLOCK_SIZE`] chunks, decrypts each one
/// independently and concatenates the plaintexts in input order.
///
/// The chunks are `ciphertext.chunks(DECRYPT_BLOCK_SIZE)`: zero or more full
/// chunks followed by at most one shorter final chunk. An empty ciphertext
/// yields no chunk, so the capability is never called with an empty buffer.
///
/// 将密文按 [`DECRYPT_BLOCK_SIZE`] 切分，逐块独立解密，并按输入顺序拼接明文。
pub struct ChunkedDecryptor<'a, C: ?Sized> {
    capability: &'a C,
    mode: ProcessingMode,
}

/// Concatenates block plaintexts into one buffer reserved at the exact total.
///
/// 将各块明文拼接到按总长度精确预留的缓冲区中。
pub(crate) fn assemble(blocks: Vec<Zeroizing<Vec<u8>>>) -> Zeroizing<Vec<u8>> {
    let total = blocks.iter().map(|block| block.len()).sum();
    let mut plaintext = Zeroizing::new(Vec::with_capacity(total));
    for block in &blocks {
        plaintext.extend_from_slice(block);
    }
    plaintext
}

impl<'a, C: CipherCapability + ?Sized> ChunkedDecryptor<'a, C> {
    pub fn new(capability: &'a C) -> Self {
        Self {
            capability,
            mode: ProcessingMode::Ordinary,
        }
    }

    pub fn with_mode(mut self, mode: ProcessingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ProcessingMode {
        self.mode
    }

    /// Number of chunks a ciphertext of `len` bytes is split into.
    pub fn chunk_count(len: usize) -> usize {
        len.div_ceil(DECRYPT_BLOCK_SIZE)
    }

    /// Decrypts every chunk of `ciphertext`.
    ///
    /// On failure the reported chunk is the lowest failing index. Ordinary mode
    /// stops at that chunk; parallel mode attempts every chunk first. Either
    /// way the partial plaintext is zeroized and dropped.
    ///
    /// 失败时报告索引最小的失败块。部分明文会被清零并丢弃。
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>, DecryptionError> {
        tracing::debug!(
            len = ciphertext.len(),
            chunks = Self::chunk_count(ciphertext.len()),
            mode = %self.mode,
            "chunked decryption"
        );
        match self.mode {
            ProcessingMode::Ordinary => {
                ordinary::decrypt_blocks(self.capability, ciphertext, DECRYPT_BLOCK_SIZE)
            }
            ProcessingMode::Parallel => {
                parallel::decrypt_blocks(self.capability, ciphertext, DECRYPT_BLOCK_SIZE)
            }
        }
    }
}
