// src/config.rs
use std::net::{Ipv4Addr, SocketAddr};

use crate::error::StartupError;

pub const DEFAULT_PORT: u16 = 10000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl Config {
    /// Reads `PORT`, after loading a `.env` file if one exists.
    pub fn from_env() -> Result<Self, StartupError> {
        dotenvy::dotenv().ok();
        let port = std::env::var("PORT").ok();
        Self::from_port_var(port.as_deref())
    }

    pub fn from_port_var(value: Option<&str>) -> Result<Self, StartupError> {
        let raw = match value.map(str::trim) {
            None | Some("") => return Ok(Self::default()),
            Some(raw) => raw,
        };

        let port = raw.parse::<u16>().map_err(|source| StartupError::InvalidPort {
            value: raw.to_string(),
            source,
        })?;

        Ok(Self { port })
    }

    /// Always listens on every interface.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_10000() {
        assert_eq!(Config::from_port_var(None).unwrap().port, 10000);
        assert_eq!(Config::from_port_var(Some("  ")).unwrap().port, 10000);
    }

    #[test]
    fn parses_explicit_port() {
        assert_eq!(Config::from_port_var(Some("8080")).unwrap().port, 8080);
        assert_eq!(Config::from_port_var(Some(" 3000\n")).unwrap().port, 3000);
    }

    #[test]
    fn rejects_invalid_port() {
        for bad in ["abc", "70000", "-1", "80.5"] {
            let err = Config::from_port_var(Some(bad)).unwrap_err();
            assert!(matches!(err, StartupError::InvalidPort { ref value, .. } if value == bad));
        }
    }

    #[test]
    fn binds_all_interfaces() {
        let addr = Config { port: 4242 }.socket_addr();
        assert_eq!(addr.to_string(), "0.0.0.0:4242");
    }
}
