// Challenge derivation binding both parties' nonces.

use crate::crypto::hash::{hash_sha256, SHA256_SIZE};

/// A 32-byte SHA-256 challenge over `(nonce1, nonce2)`.
pub type Challenge = [u8; SHA256_SIZE];

/// Compute the handshake challenge for `nonce1` and `nonce2`.
///
/// Input layout (32 bytes, hashed as a whole):
///   [nonce1: 8B little-endian][nonce2: 8B little-endian][zero: 16B]
///
/// The trailing zero bytes are part of the wire contract; peers hashing a
/// tight 16-byte buffer will not interoperate.
pub fn hash_to_challenge(nonce1: u64, nonce2: u64) -> Challenge {
    let mut input = [0u8; SHA256_SIZE];
    input[0..8].copy_from_slice(&nonce1.to_le_bytes());
    input[8..16].copy_from_slice(&nonce2.to_le_bytes());
    hash_sha256(&input)
}
