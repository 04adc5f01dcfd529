//! Service configuration from the environment (and `.env` via dotenvy).

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },

    #[error("SERVICE_FEE_RATE must be between 0 and 1, got {0}")]
    FeeRateOutOfRange(Decimal),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// JSON listing catalog; the seed catalog is used when unset
    pub catalog_path: Option<PathBuf>,
    /// Applied to listings without their own rate
    pub service_fee_rate: Decimal,
    pub default_page_size: usize,
    pub reviews_page_size: usize,
    pub cache_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            catalog_path: None,
            service_fee_rate: dec!(0.12),
            default_page_size: 4,
            reviews_page_size: 6,
            cache_ttl: Duration::from_secs(600),
        }
    }
}

impl Config {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let service_fee_rate = parse_or(&lookup, "SERVICE_FEE_RATE", defaults.service_fee_rate)?;
        if service_fee_rate < Decimal::ZERO || service_fee_rate > Decimal::ONE {
            return Err(ConfigError::FeeRateOutOfRange(service_fee_rate));
        }

        let default_page_size = parse_or(&lookup, "DEFAULT_PAGE_SIZE", defaults.default_page_size)?;
        if default_page_size == 0 {
            return Err(ConfigError::Zero("DEFAULT_PAGE_SIZE"));
        }

        let reviews_page_size = parse_or(&lookup, "REVIEWS_PAGE_SIZE", defaults.reviews_page_size)?;
        if reviews_page_size == 0 {
            return Err(ConfigError::Zero("REVIEWS_PAGE_SIZE"));
        }

        let cache_ttl_secs: u64 = parse_or(&lookup, "CACHE_TTL_SECS", defaults.cache_ttl.as_secs())?;
        if cache_ttl_secs == 0 {
            return Err(ConfigError::Zero("CACHE_TTL_SECS"));
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            catalog_path: lookup("CATALOG_PATH")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            service_fee_rate,
            default_page_size,
            reviews_page_size,
            cache_ttl: Duration::from_secs(cache_ttl_secs),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.service_fee_rate, dec!(0.12));
        assert_eq!(config.default_page_size, 4);
        assert_eq!(config.reviews_page_size, 6);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("SERVICE_FEE_RATE", "0.1"),
            ("CATALOG_PATH", "/srv/listings.json"),
            ("DEFAULT_PAGE_SIZE", "12"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.service_fee_rate, dec!(0.1));
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/listings.json")));
        assert_eq!(config.default_page_size, 12);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(matches!(
            config_from(&[("PORT", "http")]),
            Err(ConfigError::Invalid { key: "PORT", .. })
        ));
        assert!(matches!(
            config_from(&[("SERVICE_FEE_RATE", "1.5")]),
            Err(ConfigError::FeeRateOutOfRange(_))
        ));
        assert!(matches!(
            config_from(&[("DEFAULT_PAGE_SIZE", "0")]),
            Err(ConfigError::Zero("DEFAULT_PAGE_SIZE"))
        ));
    }
}
