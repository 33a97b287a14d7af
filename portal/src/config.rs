//! Environment-driven configuration for the portal client.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the API server; `/api` is appended per request.
    pub api_base_url: String,
    /// Where the session file lives between runs.
    pub session_file: PathBuf,
    /// Optional per-request timeout. Unset means the transport's defaults.
    pub request_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let api_base_url =
            env::var("PORTAL_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());

        let session_file = env::var("PORTAL_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("portal-session.json"));

        let request_timeout = match env::var("PORTAL_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw
                    .parse()
                    .map_err(|_| "PORTAL_REQUEST_TIMEOUT_SECS must be a valid number")?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        Ok(Self {
            api_base_url,
            session_file,
            request_timeout,
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err("PORTAL_API_URL must be an http(s) URL".to_string());
        }

        if let Some(timeout) = self.request_timeout {
            if timeout.is_zero() || timeout > Duration::from_secs(300) {
                return Err(
                    "PORTAL_REQUEST_TIMEOUT_SECS must be between 1 and 300".to_string()
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str, timeout: Option<Duration>) -> Config {
        Config {
            api_base_url: url.to_string(),
            session_file: PathBuf::from("portal-session.json"),
            request_timeout: timeout,
        }
    }

    #[test]
    fn test_validate_accepts_http_urls() {
        assert!(config("http://127.0.0.1:8080", None).validate().is_ok());
        assert!(config("https://portal.example.com", Some(Duration::from_secs(10)))
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(config("ftp://example.com", None).validate().is_err());
        assert!(config("http://ok", Some(Duration::ZERO)).validate().is_err());
        assert!(config("http://ok", Some(Duration::from_secs(301)))
            .validate()
            .is_err());
    }
}
