/// Remark Crypto Library
///
/// Field-level encryption for personally identifying comment content.
/// A single AES-256-GCM key protects every field; each encrypted blob is
/// self-contained (`nonce || ciphertext || tag`).
pub mod encrypt;
pub mod keys;

use thiserror::Error;

pub use encrypt::FieldCipher;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("invalid encryption key: {0}")]
    InvalidKey(String),

    #[error("encryption failed")]
    Encryption,

    /// Integrity check failed: the blob was tampered with, truncated, or the
    /// key is wrong.
    #[error("ciphertext failed authentication")]
    AuthenticationFailure,
}
