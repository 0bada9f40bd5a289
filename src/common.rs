pub mod config;
pub mod mode;
pub mod properties;

/// Ciphertext block size consumed by one RSA decrypt call on the chunked path.
pub const DECRYPT_BLOCK_SIZE: usize = 128;

/// Plaintext block size the encrypting side feeds into one RSA encrypt call.
///
/// Never used for decryption. This is a convention of the encrypting side and
/// sits below the 117-byte PKCS#1 v1.5 limit of a 1024-bit key.
pub const ENCRYPT_BLOCK_SIZE: usize = 100;

/// Algorithm identifier that selects the chunked path.
pub const DEFAULT_ALGORITHM: &str = "RSA";

/// Returns `true` if `algorithm` names the block-limited RSA family.
pub fn is_block_limited(algorithm: &str) -> bool {
    algorithm.eq_ignore_ascii_case(DEFAULT_ALGORITHM)
}
