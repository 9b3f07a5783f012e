use std::env;

use super::error::SystemError;

const DEFAULT_ACTOR_BUFFER: usize = 32;
const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime settings of a [`ShopSystem`](super::ShopSystem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    /// Channel capacity of each table actor.
    pub actor_buffer: usize,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            actor_buffer: DEFAULT_ACTOR_BUFFER,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ShopConfig {
    /// Reads `SHOP_ACTOR_BUFFER` and `RUST_LOG`, after loading `.env` if present.
    pub fn from_env() -> Result<Self, SystemError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SystemError> {
        let actor_buffer = match lookup("SHOP_ACTOR_BUFFER") {
            None => DEFAULT_ACTOR_BUFFER,
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or_else(|| SystemError::Config(format!("Invalid SHOP_ACTOR_BUFFER: {raw:?}")))?,
        };
        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            actor_buffer,
            log_filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ShopConfig::from_lookup(lookup(&[])).unwrap(), ShopConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = ShopConfig::from_lookup(lookup(&[("SHOP_ACTOR_BUFFER", "8"), ("RUST_LOG", "debug")])).unwrap();
        assert_eq!(config.actor_buffer, 8);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_invalid_buffer() {
        for raw in ["0", "-1", "lots"] {
            let err = ShopConfig::from_lookup(lookup(&[("SHOP_ACTOR_BUFFER", raw)])).unwrap_err();
            assert!(matches!(err, SystemError::Config(_)), "{raw}");
        }
    }
}
