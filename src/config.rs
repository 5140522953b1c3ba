use std::env;
use std::sync::OnceLock;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub host: String,
    pub port: u16,
    pub db_url: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    fn get_env_or(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            host: Self::get_env_or("HOST", "0.0.0.0"),
            port: Self::get_env_or("PORT", "8080").parse().unwrap_or(8080),
            db_url: Self::get_env("POSTGRES_URI"),
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

pub fn config() -> &'static EnvConfig {
    CONFIG.get().expect("Not initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_reads_the_initialized_value() {
        CONFIG.get_or_init(|| EnvConfig {
            host: "127.0.0.1".to_string(),
            port: 9090,
            db_url: "sqlite::memory:".to_string(),
        });
        assert_eq!(config().port, 9090);
        assert_eq!(config().host, "127.0.0.1");
    }
}
