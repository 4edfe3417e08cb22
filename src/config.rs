use crate::constants::*;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Optional Overpass interpreter override (single endpoint, e.g. a local
    /// mirror). When absent the built-in endpoint rotation is used.
    pub overpass_url: Option<String>,
    pub place_cache_ttl: u64,
    pub place_cache_max_entries: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let place_cache_ttl: u64 = env::var("PLACE_CACHE_TTL")
            .unwrap_or_else(|_| DEFAULT_PLACE_CACHE_TTL_SECONDS.to_string())
            .parse()
            .map_err(|_| "Invalid PLACE_CACHE_TTL")?;

        let place_cache_max_entries: u64 = env::var("PLACE_CACHE_MAX_ENTRIES")
            .unwrap_or_else(|_| DEFAULT_PLACE_CACHE_MAX_ENTRIES.to_string())
            .parse()
            .map_err(|_| "Invalid PLACE_CACHE_MAX_ENTRIES")?;

        if place_cache_max_entries == 0 {
            return Err("PLACE_CACHE_MAX_ENTRIES must be greater than 0".to_string());
        }

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            overpass_url: env::var("OVERPASS_URL").ok(),
            place_cache_ttl,
            place_cache_max_entries,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_address_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 5000,
            overpass_url: None,
            place_cache_ttl: 900,
            place_cache_max_entries: 1_000,
        };
        assert_eq!(config.server_address(), "127.0.0.1:5000");
    }
}
