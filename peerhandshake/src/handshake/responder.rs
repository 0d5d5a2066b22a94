// Responder side of the handshake as a chain of immutable act snapshots.
//
//   ResponderAct1 --recv_act_one--> ResponderAct2 --gen_act_two--> ResponderAct3
//                                                  --recv_act_three--> outcome

use crate::crypto::nonce::NonceSource;
use crate::error::{HandshakeError, Result};
use crate::handshake::challenge::{hash_to_challenge, Challenge};
use crate::handshake::messages::{Act1Message, Act2Message, Act3Message};
use crate::handshake::state::{HandshakeOutcome, Role};

/// Responder before act 1 arrives. Holds no handshake data yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponderAct1 {
    protocol: String,
}

impl ResponderAct1 {
    pub fn new(protocol: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
        }
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Accept the initiator's act 1.
    ///
    /// There is no expectation on `nonce1`; only the protocol identifier is
    /// checked.
    pub fn recv_act_one(self, message: Act1Message) -> Result<ResponderAct2> {
        if message.protocol1 != self.protocol {
            tracing::warn!(
                expected = %self.protocol,
                received = %message.protocol1,
                "responder rejected act 1: unsupported protocol"
            );
            return Err(HandshakeError::UnsupportedProtocol(message.protocol1));
        }

        tracing::debug!(nonce1 = message.nonce1, "responder accepted act 1");
        Ok(ResponderAct2 {
            nonce1: message.nonce1,
            protocol: self.protocol,
        })
    }
}

/// Responder holding `nonce1`, ready to answer with act 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponderAct2 {
    nonce1: u64,
    protocol: String,
}

impl ResponderAct2 {
    pub fn nonce1(&self) -> u64 {
        self.nonce1
    }

    /// Draw `nonce2`, derive the challenge and produce the act 2 message.
    pub fn gen_act_two<N>(self, nonces: &mut N) -> (ResponderAct3, Act2Message)
    where
        N: NonceSource + ?Sized,
    {
        let nonce2 = nonces.next_nonce();
        let challenge = hash_to_challenge(self.nonce1, nonce2);
        tracing::debug!(nonce1 = self.nonce1, nonce2, "responder generated act 2");

        let message = Act2Message {
            nonce2,
            challenge,
            protocol2: self.protocol,
        };
        let next = ResponderAct3 {
            nonce1: self.nonce1,
            nonce2,
            challenge,
        };
        (next, message)
    }
}

/// Responder waiting for the initiator to echo the challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponderAct3 {
    nonce1: u64,
    nonce2: u64,
    challenge: Challenge,
}

impl ResponderAct3 {
    pub fn nonce1(&self) -> u64 {
        self.nonce1
    }

    pub fn nonce2(&self) -> u64 {
        self.nonce2
    }

    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    /// Compare the initiator's echoed challenge with ours. On a match the
    /// handshake is complete from the responder's side.
    pub fn recv_act_three(self, message: Act3Message) -> Result<HandshakeOutcome> {
        if message.challenge != self.challenge {
            tracing::warn!(
                nonce1 = self.nonce1,
                nonce2 = self.nonce2,
                "responder rejected act 3: unexpected challenge"
            );
            return Err(HandshakeError::UnexpectedChallenge(Role::Initiator));
        }

        tracing::debug!(nonce1 = self.nonce1, nonce2 = self.nonce2, "responder accepted act 3");
        Ok(HandshakeOutcome {
            role: Role::Responder,
            nonce1: self.nonce1,
            nonce2: self.nonce2,
            challenge: self.challenge,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::nonce::FixedNonce;

    const PROTO: &str = "/test/1";

    fn act1(nonce1: u64) -> Act1Message {
        Act1Message {
            nonce1,
            protocol1: PROTO.into(),
        }
    }

    #[test]
    fn recv_act_one_stores_nonce() {
        let act2 = ResponderAct1::new(PROTO).recv_act_one(act1(1337)).unwrap();
        assert_eq!(act2.nonce1(), 1337);
    }

    #[test]
    fn recv_act_one_rejects_foreign_protocol() {
        let msg = Act1Message {
            nonce1: 1,
            protocol1: "/other/1".into(),
        };
        let err = ResponderAct1::new(PROTO).recv_act_one(msg).unwrap_err();
        assert!(matches!(err, HandshakeError::UnsupportedProtocol(_)));
    }

    #[test]
    fn gen_act_two_derives_challenge() {
        let act2 = ResponderAct1::new(PROTO).recv_act_one(act1(1337)).unwrap();
        let (act3, msg) = act2.gen_act_two(&mut FixedNonce(1410));
        assert_eq!(msg.nonce2, 1410);
        assert_eq!(msg.protocol2, PROTO);
        assert_eq!(msg.challenge, hash_to_challenge(1337, 1410));
        assert_eq!(act3.challenge(), &msg.challenge);
    }

    #[test]
    fn recv_act_three_accepts_echo() {
        let act2 = ResponderAct1::new(PROTO).recv_act_one(act1(3)).unwrap();
        let (act3, msg) = act2.gen_act_two(&mut FixedNonce(4));
        let outcome = act3
            .recv_act_three(Act3Message {
                challenge: msg.challenge,
            })
            .unwrap();
        assert_eq!(outcome.role, Role::Responder);
        assert_eq!(outcome.challenge, hash_to_challenge(3, 4));
    }

    #[test]
    fn recv_act_three_rejects_wrong_challenge() {
        let act2 = ResponderAct1::new(PROTO).recv_act_one(act1(3)).unwrap();
        let (act3, mut msg) = act2.gen_act_two(&mut FixedNonce(4));
        msg.challenge[0] ^= 0x80;
        let err = act3
            .recv_act_three(Act3Message {
                challenge: msg.challenge,
            })
            .unwrap_err();
        assert!(matches!(err, HandshakeError::UnexpectedChallenge(Role::Initiator)));
    }
}
