// Nonce generation for handshake acts.
//
// The protocol logic never touches a global RNG; every act that needs fresh
// randomness takes a `NonceSource`. Production code uses the OS CSPRNG,
// tests and simulations plug in a seeded or fixed source.

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

/// A supplier of 64-bit handshake nonces.
///
/// Sources are `Send` so a driver holding one can move to another thread or task.
pub trait NonceSource: Send {
    /// Produce the next nonce. Never fails.
    fn next_nonce(&mut self) -> u64;
}

impl<T: NonceSource + ?Sized> NonceSource for Box<T> {
    fn next_nonce(&mut self) -> u64 {
        (**self).next_nonce()
    }
}

/// Nonces drawn from the operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsNonceSource;

impl NonceSource for OsNonceSource {
    fn next_nonce(&mut self) -> u64 {
        OsRng.next_u64()
    }
}

/// Reproducible nonces from a seeded `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededNonceSource {
    rng: StdRng,
}

impl SeededNonceSource {
    /// Create a source whose output depends only on `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl NonceSource for SeededNonceSource {
    fn next_nonce(&mut self) -> u64 {
        self.rng.next_u64()
    }
}

/// Always yields the same nonce. Only useful for interop vectors and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedNonce(pub u64);

impl NonceSource for FixedNonce {
    fn next_nonce(&mut self) -> u64 {
        self.0
    }
}
