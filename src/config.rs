//! Process configuration loaded from environment variables

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid HOST `{value}`")]
    InvalidHost {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("invalid PORT `{value}`")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind, `HOST`
    pub host: IpAddr,

    /// Listen port, `PORT`
    pub port: u16,

    /// Serve the GraphiQL explorer on `GET /graphql`, `GRAPHIQL`
    pub graphiql: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
            graphiql: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidHost { value, source })?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => defaults.port,
        };

        let graphiql = lookup("GRAPHIQL")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(defaults.graphiql);

        Ok(Self {
            host,
            port,
            graphiql,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
