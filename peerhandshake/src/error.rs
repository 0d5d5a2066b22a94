// PeerHandshake error types

use thiserror::Error;

use crate::handshake::state::Role;

/// Top-level error type for the PeerHandshake crate.
#[derive(Debug, Error)]
pub enum HandshakeError {
    // ── Handshake errors ────────────────────────────────────────────────
    /// The challenge received from `Role` differs from the locally derived one.
    #[error("unexpected {0}'s challenge")]
    UnexpectedChallenge(Role),

    #[error("unsupported protocol: [{0}]")]
    UnsupportedProtocol(String),

    #[error("invalid handshake state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    // ── Config errors ───────────────────────────────────────────────────
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("could not read configuration: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("could not parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl HandshakeError {
    /// True when the peer sent a message that does not match what this side
    /// derived or expects. Such a handshake must be torn down by the caller.
    pub fn is_peer_mismatch(&self) -> bool {
        matches!(
            self,
            HandshakeError::UnexpectedChallenge(_) | HandshakeError::UnsupportedProtocol(_)
        )
    }
}

/// Crate-level result alias.
pub type Result<T> = std::result::Result<T, HandshakeError>;
