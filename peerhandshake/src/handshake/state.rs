// Handshake state: roles, outcome, and the runtime view of each role.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::handshake::challenge::Challenge;
use crate::handshake::initiator::{InitiatorAct1, InitiatorAct2};
use crate::handshake::responder::{ResponderAct1, ResponderAct3};

/// Which end of the handshake a party plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Initiator,
    Responder,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Initiator => "initiator",
            Role::Responder => "responder",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a completed handshake, handed to the transport/identity layer.
///
/// Both sides of a successful run hold equal `nonce1`, `nonce2` and
/// `challenge`; only `role` differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandshakeOutcome {
    pub role: Role,
    pub nonce1: u64,
    pub nonce2: u64,
    pub challenge: Challenge,
}

/// Runtime state of an [`Initiator`](crate::handshake::protocol::Initiator).
#[derive(Debug)]
pub enum InitiatorState {
    /// Nothing sent yet.
    Idle(InitiatorAct1),
    /// Act 1 sent, waiting for act 2.
    AwaitingActTwo(InitiatorAct2),
    /// Act 2 verified and act 3 emitted.
    Complete(HandshakeOutcome),
    /// A check failed; the handshake must be discarded.
    Failed,
}

impl InitiatorState {
    /// Human-readable label for the current state (used in error messages).
    pub fn label(&self) -> &'static str {
        match self {
            InitiatorState::Idle(_) => "Idle",
            InitiatorState::AwaitingActTwo(_) => "AwaitingActTwo",
            InitiatorState::Complete(_) => "Complete",
            InitiatorState::Failed => "Failed",
        }
    }
}

/// Runtime state of a [`Responder`](crate::handshake::protocol::Responder).
#[derive(Debug)]
pub enum ResponderState {
    /// Waiting for act 1.
    Idle(ResponderAct1),
    /// Act 2 sent, waiting for act 3.
    AwaitingActThree(ResponderAct3),
    /// Act 3 verified.
    Complete(HandshakeOutcome),
    /// A check failed; the handshake must be discarded.
    Failed,
}

impl ResponderState {
    /// Human-readable label for the current state (used in error messages).
    pub fn label(&self) -> &'static str {
        match self {
            ResponderState::Idle(_) => "Idle",
            ResponderState::AwaitingActThree(_) => "AwaitingActThree",
            ResponderState::Complete(_) => "Complete",
            ResponderState::Failed => "Failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_display_matches_error_wording() {
        assert_eq!(Role::Initiator.to_string(), "initiator");
        assert_eq!(Role::Responder.to_string(), "responder");
    }

    #[test]
    fn labels() {
        assert_eq!(InitiatorState::Failed.label(), "Failed");
        assert_eq!(ResponderState::Idle(ResponderAct1::new("/p")).label(), "Idle");
    }
}
