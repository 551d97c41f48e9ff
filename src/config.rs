//! Server configuration read from the environment (and `.env` when present).

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `HOST`, default `0.0.0.0`.
    pub host: String,
    /// `PORT`, default `4000`.
    pub port: u16,
    /// `GRAPHQL_PATH`, default `/graphql`.
    pub graphql_path: String,
    /// `GRAPHIQL`: serve the GraphiQL page on `GET {graphql_path}`.
    pub graphiql: bool,
    /// `BODY_LIMIT_BYTES`, default 1 MiB.
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            graphql_path: "/graphql".to_string(),
            graphiql: true,
            body_limit: 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// Loads `.env` (if any) then reads the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(host) = lookup("HOST") {
            if host.trim().is_empty() {
                return Err(invalid("HOST", host));
            }
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup("PORT") {
            config.port = port.trim().parse().map_err(|_| invalid("PORT", port))?;
        }
        if let Some(path) = lookup("GRAPHQL_PATH") {
            if !path.starts_with('/') || path.len() < 2 {
                return Err(invalid("GRAPHQL_PATH", path));
            }
            config.graphql_path = path;
        }
        if let Some(flag) = lookup("GRAPHIQL") {
            config.graphiql = parse_flag(&flag).ok_or_else(|| invalid("GRAPHIQL", flag))?;
        }
        if let Some(limit) = lookup("BODY_LIMIT_BYTES") {
            config.body_limit = match limit.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(invalid("BODY_LIMIT_BYTES", limit)),
            };
        }
        Ok(config)
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn invalid(key: &'static str, value: String) -> ConfigError {
    ConfigError::Invalid { key, value }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
