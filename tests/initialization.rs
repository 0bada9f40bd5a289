//! Initialization from properties: credentials, key store lookup, algorithm
//! selection and re-initialization.

mod common;

use common::{fixture_key, fixture_props, fixture_store, props, Echo, FIXTURE_CIPHERTEXT_B64};
use vault_decrypt::prelude::*;

/// Panics if it is ever consulted.
struct UnreachableStore;

impl KeyStore for UnreachableStore {
    fn private_key(
        &self,
        _identity: &IdentityKeyStore,
        _credentials: &Credentials,
    ) -> std::result::Result<PrivateKey, InitializationError> {
        panic!("key store must not be opened without credentials");
    }
}

fn init_error(properties: &Properties, store: &dyn KeyStore) -> InitializationError {
    let pipeline = DecryptionPipeline::uninitialized();
    let err = pipeline.init(properties, store).unwrap_err();
    assert!(!pipeline.is_initialized());
    match err {
        Error::Initialization(err) => err,
        other => panic!("expected an initialization error, got {other:?}"),
    }
}

#[test]
fn test_missing_store_password_fails_fast() {
    let properties = props(&[
        ("keystore.identity.location", "memory"),
        ("keystore.identity.key.password", "key-secret"),
    ]);
    let err = init_error(&properties, &UnreachableStore);
    assert!(matches!(
        err,
        InitializationError::MissingCredential("keystore.identity.store.password")
    ));
}

#[test]
fn test_missing_key_password_fails_fast() {
    let properties = props(&[("keystore.identity.store.password", "store-secret")]);
    let err = init_error(&properties, &UnreachableStore);
    assert!(matches!(
        err,
        InitializationError::MissingCredential("keystore.identity.key.password")
    ));
}

#[test]
fn test_wrong_passwords_are_not_echoed() {
    let mut properties = fixture_props(&[]);
    properties.insert(
        "keystore.identity.store.password".into(),
        "guess-one".into(),
    );
    let err = init_error(&properties, &fixture_store());
    assert!(matches!(err, InitializationError::KeyStore(_)));
    assert!(!err.to_string().contains("guess-one"));

    let mut properties = fixture_props(&[]);
    properties.insert("keystore.identity.key.password".into(), "guess-two".into());
    let err = init_error(&properties, &fixture_store());
    assert!(matches!(err, InitializationError::KeyStore(_)));
    assert!(!err.to_string().contains("guess-two"));
}

#[test]
fn test_unknown_alias_and_location() {
    let err = init_error(
        &fixture_props(&[("keystore.identity.alias", "other")]),
        &fixture_store(),
    );
    assert!(matches!(err, InitializationError::KeyStore(_)));

    let store = fixture_store().with_location("vault-a");
    let err = init_error(
        &fixture_props(&[("keystore.identity.location", "vault-b")]),
        &store,
    );
    assert!(matches!(err, InitializationError::KeyStore(_)));
}

#[test]
fn test_alias_may_be_omitted_for_single_entry() {
    let mut properties = fixture_props(&[]);
    properties.remove("keystore.identity.alias");
    let pipeline = DecryptionPipeline::new(&properties, &fixture_store()).unwrap();
    assert!(pipeline.is_initialized());

    let store = fixture_store().insert_rsa("second", fixture_key(), "key-secret");
    let err = init_error(&properties, &store);
    assert!(matches!(err, InitializationError::KeyStore(_)));
}

#[test]
fn test_unsupported_algorithm_and_cipher_type() {
    let err = init_error(&fixture_props(&[("algorithm", "AES")]), &fixture_store());
    assert!(matches!(err, InitializationError::UnsupportedAlgorithm(_)));

    let err = init_error(
        &fixture_props(&[("cipherType", "symmetric")]),
        &fixture_store(),
    );
    assert!(matches!(err, InitializationError::UnsupportedAlgorithm(_)));
}

#[test]
fn test_invalid_encoding_property() {
    let err = init_error(
        &fixture_props(&[("inputEncoding", "base58")]),
        &fixture_store(),
    );
    assert!(matches!(
        err,
        InitializationError::InvalidProperty {
            key: "inputEncoding",
            ..
        }
    ));
}

#[test]
fn test_unknown_provider_is_ignored() {
    common::init_tracing();
    let pipeline = DecryptionPipeline::new(
        &fixture_props(&[("provider", "BC")]),
        &fixture_store(),
    )
    .unwrap();
    assert!(pipeline.is_initialized());
    assert_eq!(pipeline.config().unwrap().provider(), Some("BC"));
}

#[test]
fn test_failed_reinit_keeps_current_context() {
    let pipeline = DecryptionPipeline::new(&fixture_props(&[]), &fixture_store()).unwrap();
    let before = pipeline.decrypt_str(FIXTURE_CIPHERTEXT_B64).unwrap();

    let err = pipeline
        .init(&props(&[("algorithm", "RSA")]), &UnreachableStore)
        .unwrap_err();
    assert!(matches!(err, Error::Initialization(_)));

    assert!(pipeline.is_initialized());
    assert_eq!(pipeline.decrypt_str(FIXTURE_CIPHERTEXT_B64).unwrap(), before);
}

#[test]
fn test_reinit_replaces_config_and_capability() {
    let pipeline = DecryptionPipeline::with_capability(
        DecryptionConfig::builder().algorithm("AES").build(),
        Echo::default(),
    );
    assert_eq!(pipeline.decrypt_str("QUJD").unwrap(), b"ABC");

    pipeline
        .init(&fixture_props(&[]), &fixture_store())
        .unwrap();
    let config = pipeline.config().unwrap();
    assert_eq!(config.algorithm(), "RSA");
    assert_eq!(
        pipeline.decrypt_str(FIXTURE_CIPHERTEXT_B64).unwrap(),
        common::FIXTURE_PLAINTEXT
    );
}
