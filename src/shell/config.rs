use anyhow::Context;

pub const DEFAULT_PORT: u16 = 9000;

/// Credentials for a networked record store backend. Recognized and reported
/// at startup; the in-memory store runs without them.
#[derive(Debug, Clone)]
pub struct StoreCredentials {
    pub user: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub store_credentials: Option<StoreCredentials>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let store_credentials = match (std::env::var("DB_USER"), std::env::var("DB_PASSWORD")) {
            (Ok(user), Ok(password)) => Some(StoreCredentials { user, password }),
            _ => None,
        };

        Ok(Self {
            port,
            store_credentials,
        })
    }
}
