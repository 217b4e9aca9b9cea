//! Credential resolution
//!
//! API keys come from the environment (a `.env` file is loaded by the binary
//! before this runs). They are wrapped in [`SecretString`] as soon as they are
//! read and only exposed when the transport client is built.

use super::{AdapterKind, Config, CredentialPlacement};
use crate::{Error, Result};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

/// Everything the transport client needs for one adapter process
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    pub kind: AdapterKind,
    /// Base URL without any credential segment
    pub root: Url,
    pub timeout: Duration,
    pub credential: Option<SecretString>,
}

impl AdapterConfig {
    /// Resolve configuration for `kind`, reading its API key from the environment
    pub fn from_env(kind: AdapterKind, config: &Config) -> Result<Self> {
        let credential = std::env::var(kind.credential_env())
            .ok()
            .filter(|key| !key.is_empty())
            .map(SecretString::from);
        Self::resolve(kind, config, credential)
    }

    /// Resolve configuration with an explicit credential
    pub fn resolve(
        kind: AdapterKind,
        config: &Config,
        credential: Option<SecretString>,
    ) -> Result<Self> {
        if credential.is_none() {
            if kind.requires_credential() {
                return Err(Error::Config(format!(
                    "{} environment variable is required",
                    kind.credential_env()
                )));
            }
            tracing::warn!(
                adapter = %kind,
                env = kind.credential_env(),
                "No API key set - requests will be sent without credentials"
            );
        }

        Ok(Self {
            kind,
            root: config.base_url(kind)?,
            timeout: config.timeout(),
            credential,
        })
    }

    /// Base URL every request path is appended to.
    ///
    /// For path-segment credentials the key is part of this URL, so the
    /// returned string must never be logged.
    pub fn base_url(&self) -> String {
        let root = self.root.as_str().trim_end_matches('/');
        match (self.kind.credential_placement(), &self.credential) {
            (CredentialPlacement::PathSegment, Some(key)) => {
                format!("{}/{}", root, key.expose_secret())
            }
            _ => root.to_string(),
        }
    }

    /// Credential header name and value, when the key travels in a header
    pub fn credential_header(&self) -> Option<(&'static str, &str)> {
        match (self.kind.credential_placement(), &self.credential) {
            (CredentialPlacement::Header(name), Some(key)) => Some((name, key.expose_secret())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(value: &str) -> Option<SecretString> {
        Some(SecretString::from(value.to_string()))
    }

    #[test]
    fn test_defillama_refuses_to_start_without_key() {
        let err = AdapterConfig::resolve(AdapterKind::DefiLlama, &Config::default(), None)
            .unwrap_err();
        assert!(err.to_string().contains("DEFILLAMA_API_KEY"));
    }

    #[test]
    fn test_defillama_key_in_path() {
        let config =
            AdapterConfig::resolve(AdapterKind::DefiLlama, &Config::default(), key("abc123"))
                .unwrap();
        assert_eq!(config.base_url(), "https://pro-api.llama.fi/abc123");
        assert!(config.credential_header().is_none());
    }

    #[test]
    fn test_header_adapters_start_without_key() {
        for kind in [
            AdapterKind::Arkham,
            AdapterKind::CoinGecko,
            AdapterKind::Codex,
            AdapterKind::Elfa,
        ] {
            let config = AdapterConfig::resolve(kind, &Config::default(), None).unwrap();
            assert!(config.credential_header().is_none());
        }
    }

    #[test]
    fn test_credential_header_names() {
        let config =
            AdapterConfig::resolve(AdapterKind::CoinGecko, &Config::default(), key("k")).unwrap();
        assert_eq!(config.credential_header(), Some(("x-cg-pro-api-key", "k")));
        assert_eq!(config.base_url(), "https://pro-api.coingecko.com/api/v3");

        let config =
            AdapterConfig::resolve(AdapterKind::Elfa, &Config::default(), key("e")).unwrap();
        assert_eq!(config.credential_header(), Some(("x-elfa-api-key", "e")));
        assert_eq!(config.base_url(), "https://api.elfa.ai/v1");
    }

    #[test]
    fn test_debug_output_redacts_key() {
        let config =
            AdapterConfig::resolve(AdapterKind::Arkham, &Config::default(), key("topsecret"))
                .unwrap();
        assert!(!format!("{:?}", config).contains("topsecret"));
    }
}
