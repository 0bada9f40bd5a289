use std::collections::HashMap;

/// Flat key/value parameters handed over by the external property loader.
pub type Properties = HashMap<String, String>;

pub const ALGORITHM: &str = "algorithm";
pub const PROVIDER: &str = "provider";
pub const CIPHER_TYPE: &str = "cipherType";
pub const INPUT_ENCODING: &str = "inputEncoding";
pub const OUTPUT_ENCODING: &str = "outputEncoding";
pub const PROCESSING_MODE: &str = "processingMode";

pub const IDENTITY_LOCATION: &str = "keystore.identity.location";
pub const IDENTITY_TYPE: &str = "keystore.identity.type";
pub const IDENTITY_ALIAS: &str = "keystore.identity.alias";
pub const IDENTITY_STORE_PASSWORD: &str = "keystore.identity.store.password";
pub const IDENTITY_KEY_PASSWORD: &str = "keystore.identity.key.password";

/// Looks up `key`, trimming the value. Empty values count as absent.
pub fn property<'a>(properties: &'a Properties, key: &str) -> Option<&'a str> {
    properties
        .get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}
