//! Process-wide registration of crypto providers.
//!
//! Registration is explicit and idempotent: registering a provider a second
//! time is a no-op. Unrecognized provider names are ignored and the default
//! provider is used instead.

use std::sync::OnceLock;

/// A crypto backend that can be selected through the `provider` property.
///
/// 可通过 `provider` 属性选择的密码学后端。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Provider {
    /// No provider was requested, or the requested one is unknown.
    #[default]
    Default,
    /// The RustCrypto `rsa` backend, requested as `rustcrypto`.
    RustCrypto,
}

static RUSTCRYPTO: OnceLock<()> = OnceLock::new();

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Default => "default",
            Provider::RustCrypto => "rustcrypto",
        }
    }

    /// Maps a configured provider name to a provider, ignoring unknown names.
    pub fn from_name(name: Option<&str>) -> Provider {
        match name.map(str::trim).filter(|name| !name.is_empty()) {
            None => Provider::Default,
            Some(name) if name.eq_ignore_ascii_case(Provider::RustCrypto.name()) => {
                Provider::RustCrypto
            }
            Some(name) => {
                tracing::warn!(provider = name, "unknown crypto provider ignored, using default");
                Provider::Default
            }
        }
    }

    /// Registers the provider for the whole process.
    ///
    /// Returns `true` only for the call that performed the registration.
    pub fn register(self) -> bool {
        match self {
            Provider::Default => false,
            Provider::RustCrypto => {
                let mut registered_now = false;
                RUSTCRYPTO.get_or_init(|| registered_now = true);
                if registered_now {
                    tracing::debug!(provider = self.name(), "crypto provider registered");
                }
                registered_now
            }
        }
    }

    pub fn is_registered(self) -> bool {
        match self {
            Provider::Default => true,
            Provider::RustCrypto => RUSTCRYPTO.get().is_some(),
        }
    }
}

/// Resolves the configured provider name and registers the result.
pub fn resolve(name: Option<&str>) -> Provider {
    let provider = Provider::from_name(name);
    provider.register();
    provider
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Provider::from_name(None), Provider::Default);
        assert_eq!(Provider::from_name(Some("")), Provider::Default);
        assert_eq!(Provider::from_name(Some("RustCrypto")), Provider::RustCrypto);
        assert_eq!(Provider::from_name(Some("BC")), Provider::Default);
    }

    #[test]
    fn test_registration_is_idempotent() {
        // Another test may have registered already, so only the second call is certain.
        Provider::RustCrypto.register();
        assert!(!Provider::RustCrypto.register());
        assert!(Provider::RustCrypto.is_registered());
        assert_eq!(resolve(Some("rustcrypto")), Provider::RustCrypto);
    }

    #[test]
    fn test_default_needs_no_registration() {
        assert!(!Provider::Default.register());
        assert!(Provider::Default.is_registered());
    }
}
