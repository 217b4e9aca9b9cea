//! Configuration for the data adapters
//!
//! Each adapter wraps exactly one third-party API. The fixed facts about that
//! API (host, credential header, static headers) live on [`AdapterKind`]; the
//! few knobs an operator may turn (timeout, base URL overrides) come from an
//! optional JSON config file.

pub mod credentials;

use crate::{Error, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use url::Url;

pub use credentials::AdapterConfig;

/// Request timeout applied to every outbound call
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The five wrapped APIs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum AdapterKind {
    #[serde(rename = "arkham")]
    #[value(name = "arkham")]
    Arkham,
    #[serde(rename = "coingecko")]
    #[value(name = "coingecko")]
    CoinGecko,
    #[serde(rename = "codex")]
    #[value(name = "codex")]
    Codex,
    #[serde(rename = "defillama")]
    #[value(name = "defillama")]
    DefiLlama,
    #[serde(rename = "elfa")]
    #[value(name = "elfa")]
    Elfa,
}

/// Where an adapter's API key travels on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialPlacement {
    /// Sent as the value of a fixed request header
    Header(&'static str),
    /// Appended to the base URL as a path segment
    PathSegment,
}

/// How a failed call is rendered back to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStyle {
    /// `Error: <description>`
    Plain,
    /// `{"error": "<description>"}`
    JsonEnvelope,
}

impl AdapterKind {
    pub const ALL: [AdapterKind; 5] = [
        AdapterKind::Arkham,
        AdapterKind::CoinGecko,
        AdapterKind::Codex,
        AdapterKind::DefiLlama,
        AdapterKind::Elfa,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AdapterKind::Arkham => "arkham",
            AdapterKind::CoinGecko => "cg",
            AdapterKind::Codex => "codex",
            AdapterKind::DefiLlama => "defillama",
            AdapterKind::Elfa => "elfa",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            AdapterKind::Arkham => "https://api.arkhamintelligence.com",
            AdapterKind::CoinGecko => "https://pro-api.coingecko.com/api/v3/",
            AdapterKind::Codex => "https://graph.codex.io",
            AdapterKind::DefiLlama => "https://pro-api.llama.fi",
            AdapterKind::Elfa => "https://api.elfa.ai/v1",
        }
    }

    /// Environment variable holding the API key
    pub fn credential_env(&self) -> &'static str {
        match self {
            AdapterKind::Arkham => "ARKHAM_API_KEY",
            AdapterKind::CoinGecko => "CG_API_KEY",
            AdapterKind::Codex => "CODEX_API_KEY",
            AdapterKind::DefiLlama => "DEFILLAMA_API_KEY",
            AdapterKind::Elfa => "ELFA_API_KEY",
        }
    }

    pub fn credential_placement(&self) -> CredentialPlacement {
        match self {
            AdapterKind::Arkham => CredentialPlacement::Header("API-Key"),
            AdapterKind::CoinGecko => CredentialPlacement::Header("x-cg-pro-api-key"),
            AdapterKind::Codex => CredentialPlacement::Header("Authorization"),
            AdapterKind::DefiLlama => CredentialPlacement::PathSegment,
            AdapterKind::Elfa => CredentialPlacement::Header("x-elfa-api-key"),
        }
    }

    /// Whether the process must refuse to start without a key.
    ///
    /// Only DefiLlama enforces this; the others start anyway and let the
    /// first call fail with the API's own authentication error.
    pub fn requires_credential(&self) -> bool {
        matches!(self, AdapterKind::DefiLlama)
    }

    /// Headers sent on every request besides the credential
    pub fn static_headers(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            AdapterKind::CoinGecko | AdapterKind::DefiLlama => &[("accept", "application/json")],
            AdapterKind::Codex => &[("Content-Type", "application/json")],
            AdapterKind::Arkham | AdapterKind::Elfa => &[],
        }
    }

    pub fn failure_style(&self) -> FailureStyle {
        match self {
            AdapterKind::Codex => FailureStyle::JsonEnvelope,
            _ => FailureStyle::Plain,
        }
    }
}

impl std::fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Operator configuration, loaded from an optional JSON file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Per-request timeout (seconds)
    pub timeout_secs: u64,
    /// Base URL overrides keyed by adapter
    pub base_urls: HashMap<AdapterKind, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            base_urls: HashMap::new(),
        }
    }
}

impl Config {
    /// Load a config file, falling back to defaults for absent keys
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        if config.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be positive".to_string()));
        }
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base URL (before any credential segment) for an adapter
    pub fn base_url(&self, kind: AdapterKind) -> Result<Url> {
        let raw = self
            .base_urls
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| kind.default_base_url());
        Url::parse(raw).map_err(|e| Error::Config(format!("Invalid base URL for {}: {}", kind, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(
            config.base_url(AdapterKind::CoinGecko).unwrap().as_str(),
            "https://pro-api.coingecko.com/api/v3/"
        );
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"base_urls": {{"elfa": "http://127.0.0.1:9000/v1"}}}}"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(
            config.base_url(AdapterKind::Elfa).unwrap().as_str(),
            "http://127.0.0.1:9000/v1"
        );
        assert_eq!(
            config.base_url(AdapterKind::Arkham).unwrap().as_str(),
            "https://api.arkhamintelligence.com/"
        );
    }

    #[test]
    fn test_load_rejects_zero_timeout() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"timeout_secs": 0}}"#).unwrap();
        assert!(matches!(Config::load(file.path()), Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_base_url() {
        let mut config = Config::default();
        config
            .base_urls
            .insert(AdapterKind::Codex, "not a url".to_string());
        assert!(config.base_url(AdapterKind::Codex).is_err());
    }

    #[test]
    fn test_only_defillama_requires_credential() {
        let enforcing: Vec<_> = AdapterKind::ALL
            .iter()
            .filter(|k| k.requires_credential())
            .collect();
        assert_eq!(enforcing, vec![&AdapterKind::DefiLlama]);
        assert_eq!(
            AdapterKind::DefiLlama.credential_placement(),
            CredentialPlacement::PathSegment
        );
    }
}
