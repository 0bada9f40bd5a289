//! Implements the ordinary (single-threaded, in-memory) chunked decryption.
//!
//! 实现普通（单线程、内存中）分块解密。

use crate::capability::CipherCapability;
use crate::error::DecryptionError;
use zeroize::Zeroizing;

/// Decrypts a ciphertext block by block, sequentially.
///
/// 顺序逐块解密密文。
pub(crate) fn decrypt_blocks<C: CipherCapability + ?Sized>(
    capability: &C,
    ciphertext: &[u8],
    block_size: usize,
) -> Result<Zeroizing<Vec<u8>>, DecryptionError> {
    let blocks = ciphertext
        .chunks(block_size)
        .enumerate()
        .map(|(index, block)| {
            capability
                .decrypt(block)
                .map(Zeroizing::new)
                .map_err(|source| DecryptionError::Block { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(super::assemble(blocks))
}
