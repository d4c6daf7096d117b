use std::env;
use std::net::SocketAddr;

use tracing::warn;

/// Environment-derived configuration, loaded once at startup and passed
/// down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub mongo_uri: String,
    pub db_name: String,
    pub server_addr: SocketAddr,
    /// Allowed CORS origin. `None` means the permissive default, which is
    /// fine when the client is served from this same process.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            mongo_uri: var_or("MONGO_URI", "mongodb://localhost:27017"),
            db_name: var_or("DB_NAME", "voting-app"),
            server_addr: var_or("SERVER_ADDR", "0.0.0.0:5000")
                .parse()
                .expect("SERVER_ADDR must be a valid socket address"),
            cors_origin: env::var("CORS_ORIGIN").ok(),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        warn!("{key} not set, using default: {default}");
        default.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_env_is_empty() {
        env::remove_var("MONGO_URI");
        env::remove_var("DB_NAME");
        env::remove_var("SERVER_ADDR");
        env::remove_var("CORS_ORIGIN");

        let config = Config::load();
        assert_eq!(config.mongo_uri, "mongodb://localhost:27017");
        assert_eq!(config.db_name, "voting-app");
        assert_eq!(config.server_addr.port(), 5000);
        assert!(config.cors_origin.is_none());
    }
}
