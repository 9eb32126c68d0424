//! Server settings from `SITE_BIND_ADDR` and `SITE_DIST_DIR`

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

pub const BIND_ADDR_ENV: &str = "SITE_BIND_ADDR";
pub const DIST_DIR_ENV: &str = "SITE_DIST_DIR";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_DIST_DIR: &str = "dist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub bind_address: SocketAddr,
    pub dist_dir: PathBuf,
}

impl SiteConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind = value(BIND_ADDR_ENV, DEFAULT_BIND_ADDR);
        let bind_address = bind
            .parse()
            .with_context(|| format!("{} is not a socket address: {}", BIND_ADDR_ENV, bind))?;

        Ok(Self {
            bind_address,
            dist_dir: PathBuf::from(value(DIST_DIR_ENV, DEFAULT_DIST_DIR)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_overrides_and_blank_values() {
        let config = SiteConfig::from_lookup(lookup(&[
            (BIND_ADDR_ENV, " 0.0.0.0:3000 "),
            (DIST_DIR_ENV, "   "),
        ]))
        .unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
    }

    #[test]
    fn test_invalid_bind_address() {
        let err = SiteConfig::from_lookup(lookup(&[(BIND_ADDR_ENV, "localhost")])).unwrap_err();
        assert!(err.to_string().contains(BIND_ADDR_ENV));
    }
}
