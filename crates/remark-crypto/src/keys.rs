use aes_gcm::aead::OsRng;
use aes_gcm::aead::rand_core::RngCore;

use crate::CryptoError;

/// Generate a random 256-bit key for AES-256-GCM.
pub fn generate_key() -> [u8; 32] {
    let mut key = [0u8; 32];
    OsRng.fill_bytes(&mut key);
    key
}

/// Encode a key as lowercase hex, the format used in configuration.
pub fn key_to_hex(key: &[u8; 32]) -> String {
    hex::encode(key)
}

/// Decode a 64-character hex key.
pub fn key_from_hex(encoded: &str) -> Result<[u8; 32], CryptoError> {
    let bytes = hex::decode(encoded.trim()).map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| CryptoError::InvalidKey(format!("expected 32 bytes, got {}", len)))
}
