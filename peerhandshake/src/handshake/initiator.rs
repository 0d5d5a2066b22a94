// Initiator side of the handshake as a chain of immutable act snapshots.
//
//   InitiatorAct1 --gen_act_one--> InitiatorAct2 --recv_act_two--> InitiatorAct3
//
// Every transition consumes the previous snapshot, so a rejected act 2 leaves
// nothing behind that could be reused.

use crate::crypto::nonce::NonceSource;
use crate::error::{HandshakeError, Result};
use crate::handshake::challenge::{hash_to_challenge, Challenge};
use crate::handshake::messages::{Act1Message, Act2Message, Act3Message};
use crate::handshake::state::{HandshakeOutcome, Role};

/// Initiator before anything has been sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitiatorAct1 {
    protocol: String,
}

impl InitiatorAct1 {
    /// Start a handshake for `protocol`.
    pub fn new(protocol: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
        }
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Draw `nonce1` and produce the act 1 message.
    pub fn gen_act_one<N>(self, nonces: &mut N) -> (InitiatorAct2, Act1Message)
    where
        N: NonceSource + ?Sized,
    {
        let nonce1 = nonces.next_nonce();
        tracing::debug!(nonce1, protocol = %self.protocol, "initiator generated act 1");

        let message = Act1Message {
            nonce1,
            protocol1: self.protocol.clone(),
        };
        let next = InitiatorAct2 {
            nonce1,
            protocol: self.protocol,
        };
        (next, message)
    }
}

/// Initiator after sending act 1, waiting for the responder's act 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitiatorAct2 {
    nonce1: u64,
    protocol: String,
}

impl InitiatorAct2 {
    pub fn nonce1(&self) -> u64 {
        self.nonce1
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Validate the responder's act 2.
    ///
    /// The protocol identifier must match ours and the challenge must equal
    /// `hash_to_challenge(nonce1, message.nonce2)`. Otherwise the handshake
    /// has to be aborted.
    pub fn recv_act_two(self, message: Act2Message) -> Result<InitiatorAct3> {
        if message.protocol2 != self.protocol {
            tracing::warn!(
                expected = %self.protocol,
                received = %message.protocol2,
                "initiator rejected act 2: unsupported protocol"
            );
            return Err(HandshakeError::UnsupportedProtocol(message.protocol2));
        }

        let expected = hash_to_challenge(self.nonce1, message.nonce2);
        if expected != message.challenge {
            tracing::warn!(
                nonce1 = self.nonce1,
                nonce2 = message.nonce2,
                "initiator rejected act 2: unexpected challenge"
            );
            return Err(HandshakeError::UnexpectedChallenge(Role::Responder));
        }

        tracing::debug!(nonce1 = self.nonce1, nonce2 = message.nonce2, "initiator accepted act 2");
        Ok(InitiatorAct3 {
            nonce1: self.nonce1,
            nonce2: message.nonce2,
            challenge: expected,
        })
    }
}

/// Initiator holding a verified challenge, ready to send act 3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitiatorAct3 {
    nonce1: u64,
    nonce2: u64,
    challenge: Challenge,
}

impl InitiatorAct3 {
    pub fn nonce1(&self) -> u64 {
        self.nonce1
    }

    pub fn nonce2(&self) -> u64 {
        self.nonce2
    }

    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    /// The act 3 message echoing the verified challenge.
    pub fn gen_act_three(&self) -> Act3Message {
        tracing::debug!(nonce1 = self.nonce1, nonce2 = self.nonce2, "initiator generated act 3");
        Act3Message {
            challenge: self.challenge,
        }
    }

    /// Close out the initiator's side of the handshake.
    pub fn finish(self) -> HandshakeOutcome {
        HandshakeOutcome {
            role: Role::Initiator,
            nonce1: self.nonce1,
            nonce2: self.nonce2,
            challenge: self.challenge,
        }
    }
}
