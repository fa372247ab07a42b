use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Base URL of the finance REST API, without a trailing slash.
    pub backend_url: String,
    /// Per-request timeout for backend fetches. None leaves it to the transport.
    pub request_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: env::var("CHARTS_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("CHARTS_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(7071),
            backend_url: env::var("CHARTS_BACKEND_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "http://127.0.0.1:8080".into()),
            request_timeout: env::var("CHARTS_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
