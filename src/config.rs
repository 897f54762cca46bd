// config.rs
use crate::domain::FilterProfile;
use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://capstone-server-aclw.onrender.com/api/";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_WORKERS: usize = 8;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrowserConfig {
    /// Base of the remote catalog API. Always ends with '/'.
    pub api_base: Url,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub filter_profile: FilterProfile,
    /// Command line of an external speech-to-text program, if any.
    pub speech_command: Option<String>,
}

impl BrowserConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup` so tests need not touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_base = parse_base_url(&get("LISTINGS_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.into()))?;

        let bind_addr = get("LISTINGS_BIND")
            .unwrap_or_else(|| DEFAULT_BIND.into())
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: "LISTINGS_BIND",
                reason: e.to_string(),
            })?;

        let max_workers = match get("LISTINGS_WORKERS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "LISTINGS_WORKERS",
                        reason: format!("expected a positive integer, got {raw:?}"),
                    })
                }
            },
            None => DEFAULT_WORKERS,
        };

        let filter_profile = match get("LISTINGS_FILTER_PROFILE") {
            Some(raw) => FilterProfile::parse(&raw).ok_or_else(|| ConfigError::Invalid {
                var: "LISTINGS_FILTER_PROFILE",
                reason: format!("expected \"full\" or \"compact\", got {raw:?}"),
            })?,
            None => FilterProfile::Full,
        };

        Ok(Self {
            api_base,
            bind_addr,
            max_workers,
            filter_profile,
            speech_command: get("LISTINGS_SPEECH_COMMAND"),
        })
    }
}

// Url::join drops the last path segment unless the base ends with '/'.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut raw = raw.trim().to_string();
    if !raw.ends_with('/') {
        raw.push('/');
    }
    let url = Url::parse(&raw).map_err(|e| ConfigError::Invalid {
        var: "LISTINGS_API_BASE",
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::Invalid {
            var: "LISTINGS_API_BASE",
            reason: "not a base URL".into(),
        });
    }
    Ok(url)
}
