//! The decrypt-one-buffer seam between the pipeline and a concrete cipher.
//!
//! 管道与具体密码实现之间的单缓冲区解密接口。

use crate::error::CipherError;
use parking_lot::Mutex;

/// A cipher bound to a private key and fixed to decrypt mode.
///
/// Implementations must tolerate concurrent calls: the chunked path may call
/// `decrypt` from several rayon workers at once, and one pipeline snapshot is
/// shared by every caller. Ciphers that keep mutable state should implement
/// [`StatefulCipher`] and be wrapped in [`Serialized`] instead.
///
/// 绑定私钥并固定为解密模式的密码器，必须支持并发调用。
pub trait CipherCapability: Send + Sync {
    /// Decrypts one buffer into plaintext.
    ///
    /// On the chunked path the buffer is never empty and never longer than
    /// [`DECRYPT_BLOCK_SIZE`](crate::common::DECRYPT_BLOCK_SIZE).
    fn decrypt(&self, block: &[u8]) -> Result<Vec<u8>, CipherError>;
}

impl<C: CipherCapability + ?Sized> CipherCapability for Box<C> {
    fn decrypt(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        (**self).decrypt(block)
    }
}

/// A cipher object that is not safe for concurrent use.
///
/// 不支持并发使用的密码器对象。
pub trait StatefulCipher: Send {
    fn decrypt_block(&mut self, block: &[u8]) -> Result<Vec<u8>, CipherError>;
}

/// Serializes every decrypt call of a [`StatefulCipher`] behind a mutex.
///
/// 用互斥锁串行化 [`StatefulCipher`] 的每次解密调用。
pub struct Serialized<T> {
    inner: Mutex<T>,
}

impl<T: StatefulCipher> Serialized<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }

    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

impl<T: StatefulCipher> CipherCapability for Serialized<T> {
    fn decrypt(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.inner.lock().decrypt_block(block)
    }
}
