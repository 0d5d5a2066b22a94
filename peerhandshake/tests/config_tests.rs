// Integration tests for handshake configuration loading.

use std::fs;

use peerhandshake::config::DEFAULT_PROTOCOL;
use peerhandshake::{HandshakeConfig, HandshakeError, NonceSourceConfig};

#[test]
fn empty_object_uses_defaults() {
    let config = HandshakeConfig::from_json_str("{}").unwrap();
    assert_eq!(config, HandshakeConfig::default());
    assert_eq!(config.protocol, DEFAULT_PROTOCOL);
}

#[test]
fn seeded_source_parses() {
    let config =
        HandshakeConfig::from_json_str(r#"{ "nonce_source": { "kind": "seeded", "seed": 42 } }"#)
            .unwrap();
    assert_eq!(config.nonce_source, NonceSourceConfig::Seeded { seed: 42 });
}

#[test]
fn unknown_nonce_kind_fails_to_parse() {
    let err =
        HandshakeConfig::from_json_str(r#"{ "nonce_source": { "kind": "lavalamp" } }"#).unwrap_err();
    assert!(matches!(err, HandshakeError::ConfigParse(_)));
}

#[test]
fn whitespace_in_protocol_rejected() {
    let err = HandshakeConfig::from_json_str(r#"{ "protocol": "/a b/1" }"#).unwrap_err();
    assert!(matches!(err, HandshakeError::Config(_)));
}

#[test]
fn load_from_file() {
    let path = std::env::temp_dir().join(format!("peerhandshake-config-{}.json", std::process::id()));
    fs::write(&path, r#"{ "protocol": "/file/1" }"#).unwrap();
    let config = HandshakeConfig::from_file(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(config.protocol, "/file/1");
}

#[test]
fn missing_file_reports_read_error() {
    let path = std::env::temp_dir().join("peerhandshake-does-not-exist.json");
    let err = HandshakeConfig::from_file(path).unwrap_err();
    assert!(matches!(err, HandshakeError::ConfigRead(_)));
}
