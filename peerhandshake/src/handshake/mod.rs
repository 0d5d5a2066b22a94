// Handshake module declarations

pub mod challenge;
pub mod initiator;
pub mod messages;
pub mod protocol;
pub mod responder;
pub mod state;
