//! Server settings parsed from environment variables.
//!
//! The server only hosts the rendered shell and the hydration bundle, so
//! the settings are limited to where to listen. `ARCHAIVE_API_BASE` is read
//! for the startup log line; the browser bundle has its own copy baked in at
//! compile time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub bind_addr: String,
    pub api_base: String,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `ARCHAIVE_API_BASE`: default `http://localhost:8080`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_blank(lookup("PORT")) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let bind_addr = non_blank(lookup("BIND_ADDR")).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        if bind_addr.contains(char::is_whitespace) {
            return Err(ConfigError::Invalid { var: "BIND_ADDR", value: bind_addr });
        }
        let api_base = non_blank(lookup("ARCHAIVE_API_BASE"))
            .map(|b| b.trim_end_matches('/').to_owned())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_owned());

        Ok(Self { port, bind_addr, api_base })
    }

    /// `host:port` string for `TcpListener::bind`.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
