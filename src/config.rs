use std::time::Duration;

use thiserror::Error;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Process-wide settings, read once before the server binds.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream ticker endpoint; the pair id is appended verbatim.
    pub api_url: String,
    pub listen_addr: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = required(&lookup, "API_URL")?;
        let port = required(&lookup, "PORT")?;

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                    var: "REQUEST_TIMEOUT_SECS",
                    reason: e.to_string(),
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            api_url,
            listen_addr: listen_addr(&port),
            request_timeout,
        })
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

/// Accepts `":8080"`, `"8080"` or a full `"host:port"`.
fn listen_addr(port: &str) -> String {
    let port = port.trim();
    if let Some(stripped) = port.strip_prefix(':') {
        format!("0.0.0.0:{}", stripped)
    } else if port.chars().all(|c| c.is_ascii_digit()) {
        format!("0.0.0.0:{}", port)
    } else {
        port.to_string()
    }
}
