// Handshake messages exchanged during the three-act protocol.
//
// Each message is expected to be signed with the sender's static private key
// by the transport before it goes on the wire; this crate neither signs nor
// verifies.

use serde::{Deserialize, Serialize};

use crate::handshake::challenge::Challenge;

/// Act 1: Initiator -> Responder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Act1Message {
    /// Initiator's fresh nonce.
    pub nonce1: u64,
    /// Protocol identifier the initiator runs.
    pub protocol1: String,
}

/// Act 2: Responder -> Initiator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Act2Message {
    /// Responder's fresh nonce.
    pub nonce2: u64,
    /// `hash_to_challenge(nonce1, nonce2)` as computed by the responder.
    pub challenge: Challenge,
    /// Protocol identifier the responder runs.
    pub protocol2: String,
}

/// Act 3: Initiator -> Responder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Act3Message {
    /// The challenge as recomputed by the initiator.
    pub challenge: Challenge,
}
