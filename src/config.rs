use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_DRAFT_PATH: &str = "./job_draft.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    /// Postgres URL. Without it the service keeps documents in memory.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub draft_path: PathBuf,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: get_env_opt("DATABASE_URL"),
            database_max_connections: get_env_parse_or(
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            )?,
            draft_path: get_env_opt("DRAFT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DRAFT_PATH)),
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match get_env_opt(name) {
        Some(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        None => Ok(default),
    }
}

pub fn init_config() -> Result<&'static Config> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    get_config()
}

pub fn get_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("Configuration has not been initialized".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_falls_back_when_unset() {
        env::remove_var("JOB_BOARD_TEST_UNSET_LIMIT");
        let value: u32 = get_env_parse_or("JOB_BOARD_TEST_UNSET_LIMIT", 7).unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn parse_or_rejects_garbage() {
        env::set_var("JOB_BOARD_TEST_BAD_LIMIT", "many");
        let err = get_env_parse_or::<u32>("JOB_BOARD_TEST_BAD_LIMIT", 7).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn blank_optional_values_count_as_missing() {
        env::set_var("JOB_BOARD_TEST_BLANK_URL", "   ");
        assert_eq!(get_env_opt("JOB_BOARD_TEST_BLANK_URL"), None);
    }
}
