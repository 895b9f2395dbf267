use models::sale_price::SalePriceWindow;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Reads `name` through `lookup`, falling back to `default` when it is unset
pub fn parse_var<T, F>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

/// Looks a variable up in the process environment, after `.env` has been loaded
pub fn env_lookup(name: &str) -> Option<String> {
    dotenvy::var(name).ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            max_connections: parse_var(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?,
        })
    }
}

/// Knobs for hotel and room searches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub sale_price_window: SalePriceWindow,
    pub default_page_size: u64,
    pub max_page_size: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            sale_price_window: SalePriceWindow::AllTimeSales,
            default_page_size: 20,
            max_page_size: 100,
        }
    }
}

impl SearchConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            sale_price_window: parse_var(
                &lookup,
                "SALE_PRICE_WINDOW",
                defaults.sale_price_window,
            )?,
            default_page_size: parse_var(&lookup, "DEFAULT_PAGE_SIZE", defaults.default_page_size)?,
            max_page_size: parse_var(&lookup, "MAX_PAGE_SIZE", defaults.max_page_size)?,
        };

        if config.max_page_size == 0 {
            return Err(ConfigError::Invalid {
                name: "MAX_PAGE_SIZE",
                value: config.max_page_size.to_string(),
            });
        }
        if config.default_page_size == 0 || config.default_page_size > config.max_page_size {
            return Err(ConfigError::Invalid {
                name: "DEFAULT_PAGE_SIZE",
                value: config.default_page_size.to_string(),
            });
        }

        Ok(config)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_database_url_is_required() {
        assert_eq!(
            DatabaseConfig::from_lookup(lookup(&[])),
            Err(ConfigError::Missing("DATABASE_URL"))
        );

        let config =
            DatabaseConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/hotel")]))
                .unwrap();
        assert_eq!(config.max_connections, 10);
    }

    #[test]
    fn test_search_defaults() {
        assert_eq!(
            SearchConfig::from_lookup(lookup(&[])).unwrap(),
            SearchConfig::default()
        );
    }

    #[test]
    fn test_search_overrides() {
        let config = SearchConfig::from_lookup(lookup(&[
            ("SALE_PRICE_WINDOW", "active"),
            ("MAX_PAGE_SIZE", "50"),
            ("DEFAULT_PAGE_SIZE", " 10 "),
        ]))
        .unwrap();

        assert_eq!(config.sale_price_window, SalePriceWindow::ActiveOnly);
        assert_eq!(config.max_page_size, 50);
        assert_eq!(config.default_page_size, 10);
    }

    #[test]
    fn test_invalid_values_are_reported() {
        assert!(matches!(
            SearchConfig::from_lookup(lookup(&[("SALE_PRICE_WINDOW", "never")])),
            Err(ConfigError::Invalid {
                name: "SALE_PRICE_WINDOW",
                ..
            })
        ));
        assert!(SearchConfig::from_lookup(lookup(&[("DEFAULT_PAGE_SIZE", "500")])).is_err());
        assert!(SearchConfig::from_lookup(lookup(&[("MAX_PAGE_SIZE", "0")])).is_err());
    }
}
