// Crypto module declarations

pub mod hash;
pub mod nonce;
