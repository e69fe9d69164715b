use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;
use env_helpers::get_env_default;

use super::InfraError;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Browser origin allowed to call the API (the marketing site).
    pub cors_origin: HeaderValue,
    /// Filter used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// JSON log file. `None` disables file logging.
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InfraError> {
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 5000)));

        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:5173"))
                .parse()
                .map_err(|_| InfraError::ConfigInvalid {
                    var: "CORS_ORIGIN",
                    reason: "must be a valid header value",
                })?;

        let log_filter: String = get_env_default(
            "LOG_FILTER",
            "waitlist_api=debug,tower_http=debug".to_string(),
        );

        let log_file: String = get_env_default("LOG_FILE", "app.log".to_string());
        let log_file = (!log_file.trim().is_empty()).then(|| PathBuf::from(log_file));

        Ok(Self {
            bind_addr,
            cors_origin,
            log_filter,
            log_file,
        })
    }
}
