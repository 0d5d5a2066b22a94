// Cryptographic hashing: SHA-256.

use sha2::{Digest, Sha256};

/// Size in bytes of a SHA-256 digest.
pub const SHA256_SIZE: usize = 32;

/// SHA-256 hash of `data`, returning a 32-byte digest.
pub fn hash_sha256(data: &[u8]) -> [u8; SHA256_SIZE] {
    Sha256::digest(data).into()
}
