// PeerHandshake — three-act challenge handshake between two network peers.
//
// Crate root: module declarations and public re-exports.

pub mod config;
pub mod crypto;
pub mod error;
pub mod handshake;

// Re-export key types at crate root for convenience.
pub use config::{HandshakeConfig, NonceSourceConfig};
pub use crypto::nonce::{FixedNonce, NonceSource, OsNonceSource, SeededNonceSource};
pub use error::{HandshakeError, Result};
pub use handshake::challenge::{hash_to_challenge, Challenge};
pub use handshake::messages::{Act1Message, Act2Message, Act3Message};
pub use handshake::protocol::{Initiator, Responder};
pub use handshake::state::{HandshakeOutcome, Role};
