// PeerHandshake protocol drivers: 3-message challenge exchange.
//
//   Initiator                         Responder
//     |--- Act1Message {nonce1} ---->|
//     |<-- Act2Message {nonce2, ch} -|
//     |--- Act3Message {ch} -------->|
//     |==== authenticated channel ===|
//
// The drivers keep the act snapshots in a runtime enum so a connection object
// can own a handshake across I/O boundaries. Transport, framing and message
// signing belong to the caller.

use std::mem;

use crate::config::HandshakeConfig;
use crate::crypto::nonce::NonceSource;
use crate::error::{HandshakeError, Result};
use crate::handshake::initiator::InitiatorAct1;
use crate::handshake::messages::{Act1Message, Act2Message, Act3Message};
use crate::handshake::responder::ResponderAct1;
use crate::handshake::state::{HandshakeOutcome, InitiatorState, ResponderState, Role};

fn invalid_transition(role: Role, from: &'static str, to: &'static str) -> HandshakeError {
    tracing::warn!(%role, from, to, "rejected out-of-order handshake step");
    HandshakeError::InvalidStateTransition {
        from: from.into(),
        to: to.into(),
    }
}

// ── Initiator ────────────────────────────────────────────────────────────

/// Client-side (initiator) of the handshake.
pub struct Initiator<N: NonceSource = Box<dyn NonceSource>> {
    nonces: N,
    state: InitiatorState,
}

impl Initiator<Box<dyn NonceSource>> {
    /// Create an initiator whose protocol and nonce source come from `config`.
    pub fn from_config(config: &HandshakeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config, config.build_nonce_source()))
    }
}

impl<N: NonceSource> Initiator<N> {
    /// Create a new initiator drawing nonces from `nonces`.
    pub fn new(config: &HandshakeConfig, nonces: N) -> Self {
        Self {
            nonces,
            state: InitiatorState::Idle(InitiatorAct1::new(config.protocol.clone())),
        }
    }

    /// Act 1: generate the opening message.
    pub fn create_act_one(&mut self) -> Result<Act1Message> {
        match mem::replace(&mut self.state, InitiatorState::Failed) {
            InitiatorState::Idle(act1) => {
                let (act2, message) = act1.gen_act_one(&mut self.nonces);
                self.state = InitiatorState::AwaitingActTwo(act2);
                Ok(message)
            }
            other => {
                let from = other.label();
                self.state = other;
                Err(invalid_transition(Role::Initiator, from, "AwaitingActTwo"))
            }
        }
    }

    /// Act 2 (initiator side): verify the responder's answer, produce act 3.
    ///
    /// On any verification failure the initiator moves to `Failed`.
    pub fn process_act_two(&mut self, message: Act2Message) -> Result<Act3Message> {
        match mem::replace(&mut self.state, InitiatorState::Failed) {
            InitiatorState::AwaitingActTwo(act2) => {
                let act3 = act2.recv_act_two(message)?;
                let reply = act3.gen_act_three();
                self.state = InitiatorState::Complete(act3.finish());
                Ok(reply)
            }
            other => {
                let from = other.label();
                self.state = other;
                Err(invalid_transition(Role::Initiator, from, "Complete"))
            }
        }
    }

    pub fn state(&self) -> &InitiatorState {
        &self.state
    }

    /// The handshake outcome once act 3 has been produced.
    pub fn outcome(&self) -> Option<&HandshakeOutcome> {
        match &self.state {
            InitiatorState::Complete(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, InitiatorState::Failed)
    }
}

// ── Responder ────────────────────────────────────────────────────────────

/// Server-side (responder) of the handshake.
pub struct Responder<N: NonceSource = Box<dyn NonceSource>> {
    nonces: N,
    state: ResponderState,
}

impl Responder<Box<dyn NonceSource>> {
    /// Create a responder whose protocol and nonce source come from `config`.
    pub fn from_config(config: &HandshakeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config, config.build_nonce_source()))
    }
}

impl<N: NonceSource> Responder<N> {
    /// Create a new responder drawing nonces from `nonces`.
    pub fn new(config: &HandshakeConfig, nonces: N) -> Self {
        Self {
            nonces,
            state: ResponderState::Idle(ResponderAct1::new(config.protocol.clone())),
        }
    }

    /// Act 1 (responder side): accept the initiator's nonce, produce act 2.
    pub fn process_act_one(&mut self, message: Act1Message) -> Result<Act2Message> {
        match mem::replace(&mut self.state, ResponderState::Failed) {
            ResponderState::Idle(act1) => {
                let act2 = act1.recv_act_one(message)?;
                let (act3, reply) = act2.gen_act_two(&mut self.nonces);
                self.state = ResponderState::AwaitingActThree(act3);
                Ok(reply)
            }
            other => {
                let from = other.label();
                self.state = other;
                Err(invalid_transition(Role::Responder, from, "AwaitingActThree"))
            }
        }
    }

    /// Act 3 (responder side): check the echoed challenge to complete the
    /// handshake.
    pub fn process_act_three(&mut self, message: Act3Message) -> Result<()> {
        match mem::replace(&mut self.state, ResponderState::Failed) {
            ResponderState::AwaitingActThree(act3) => {
                let outcome = act3.recv_act_three(message)?;
                self.state = ResponderState::Complete(outcome);
                Ok(())
            }
            other => {
                let from = other.label();
                self.state = other;
                Err(invalid_transition(Role::Responder, from, "Complete"))
            }
        }
    }

    pub fn state(&self) -> &ResponderState {
        &self.state
    }

    /// The handshake outcome once act 3 has been verified.
    pub fn outcome(&self) -> Option<&HandshakeOutcome> {
        match &self.state {
            ResponderState::Complete(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, ResponderState::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::nonce::SeededNonceSource;

    #[test]
    fn full_handshake() {
        let config = HandshakeConfig::default();
        let mut initiator = Initiator::new(&config, SeededNonceSource::from_seed(1));
        let mut responder = Responder::new(&config, SeededNonceSource::from_seed(2));

        // Step 1: initiator -> responder
        let act1 = initiator.create_act_one().unwrap();

        // Step 2: responder answers with act 2
        let act2 = responder.process_act_one(act1).unwrap();

        // Step 3: initiator verifies, returns act 3
        let act3 = initiator.process_act_two(act2).unwrap();

        // Step 4: responder verifies act 3
        responder.process_act_three(act3).unwrap();

        let ours = initiator.outcome().unwrap();
        let theirs = responder.outcome().unwrap();
        assert_eq!(ours.challenge, theirs.challenge);
        assert_eq!(ours.role, Role::Initiator);
        assert_eq!(theirs.role, Role::Responder);
    }

    #[test]
    fn out_of_order_call_keeps_state() {
        let config = HandshakeConfig::default();
        let mut responder = Responder::new(&config, SeededNonceSource::from_seed(3));
        let err = responder
            .process_act_three(Act3Message { challenge: [0; 32] })
            .unwrap_err();
        assert!(matches!(err, HandshakeError::InvalidStateTransition { .. }));
        assert_eq!(responder.state().label(), "Idle");
    }
}
