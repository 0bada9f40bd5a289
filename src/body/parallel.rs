//! Implements parallel, in-memory chunked decryption on the rayon pool.
//!
//! 在 rayon 线程池上实现并行、内存中的分块解密。

use crate::capability::CipherCapability;
use crate::error::{CipherError, DecryptionError};
use rayon::prelude::*;
use zeroize::Zeroizing;

/// Decrypts all blocks in parallel and reassembles them in input order.
///
/// Every block is attempted. The reported failure is the one with the lowest
/// index, so the error matches what the sequential path would return.
///
/// 并行解密所有数据块，并按输入顺序重新组装。
pub(crate) fn decrypt_blocks<C: CipherCapability + ?Sized>(
    capability: &C,
    ciphertext: &[u8],
    block_size: usize,
) -> Result<Zeroizing<Vec<u8>>, DecryptionError> {
    let decrypted_blocks: Vec<Result<Zeroizing<Vec<u8>>, CipherError>> = ciphertext
        .par_chunks(block_size)
        .map(|block| capability.decrypt(block).map(Zeroizing::new))
        .collect();

    let blocks = decrypted_blocks
        .into_iter()
        .enumerate()
        .map(|(index, block)| block.map_err(|source| DecryptionError::Block { index, source }))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(super::assemble(blocks))
}
