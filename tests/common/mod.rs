//! Shared mock capabilities and fixtures for the integration tests.
#![allow(dead_code)]

use parking_lot::Mutex;
use rsa::pkcs8::DecodePrivateKey;
use rsa::RsaPrivateKey;
use vault_decrypt::error::CipherError;
use vault_decrypt::{CipherCapability, Properties};
use vault_decrypt::keys::MemoryKeyStore;

pub const FIXTURE_KEY_PEM: &str = include_str!("../fixtures/identity_rsa1024.pem");
/// Base64 of three PKCS#1 v1.5 blocks, each encrypting 100 plaintext bytes or fewer.
pub const FIXTURE_CIPHERTEXT_B64: &str = include_str!("../fixtures/ciphertext_pkcs1.b64");
pub const FIXTURE_PLAINTEXT: &[u8] = include_bytes!("../fixtures/plaintext.txt");

pub const STORE_PASSWORD: &str = "store-secret";
pub const KEY_PASSWORD: &str = "key-secret";
pub const ALIAS: &str = "identity";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn fixture_key() -> RsaPrivateKey {
    RsaPrivateKey::from_pkcs8_pem(FIXTURE_KEY_PEM).unwrap()
}

pub fn fixture_store() -> MemoryKeyStore {
    MemoryKeyStore::new(STORE_PASSWORD).insert_rsa(ALIAS, fixture_key(), KEY_PASSWORD)
}

pub fn props(pairs: &[(&str, &str)]) -> Properties {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Properties accepted by [`fixture_store`], plus `extra`.
pub fn fixture_props(extra: &[(&str, &str)]) -> Properties {
    let mut properties = props(&[
        ("keystore.identity.location", "memory"),
        ("keystore.identity.alias", ALIAS),
        ("keystore.identity.store.password", STORE_PASSWORD),
        ("keystore.identity.key.password", KEY_PASSWORD),
    ]);
    properties.extend(props(extra));
    properties
}

/// Returns its input unchanged and counts calls.
#[derive(Default)]
pub struct Echo {
    pub calls: Mutex<Vec<usize>>,
}

impl CipherCapability for Echo {
    fn decrypt(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.calls.lock().push(block.len());
        Ok(block.to_vec())
    }
}

/// Maps a full all-zero block to 96 `X` bytes and anything else to a
/// description of its length.
pub struct ZeroBlocks;

impl ZeroBlocks {
    pub fn tail(len: usize) -> Vec<u8> {
        format!("tail:{len}").into_bytes()
    }
}

impl CipherCapability for ZeroBlocks {
    fn decrypt(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        if block.len() == 128 && block.iter().all(|b| *b == 0) {
            Ok(vec![b'X'; 96])
        } else {
            Ok(Self::tail(block.len()))
        }
    }
}

/// Fails on every block whose first byte equals `poison`.
pub struct Poisoned {
    pub poison: u8,
}

impl CipherCapability for Poisoned {
    fn decrypt(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        if block[0] == self.poison {
            Err(CipherError::Provider("padding check failed".into()))
        } else {
            Ok(block[..1].to_vec())
        }
    }
}
