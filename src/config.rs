use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

/// Fallback admin credential kept for local development parity.
/// Deployments must override ADMIN_PASSWORD.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub admin_password: String,
    pub sendgrid_api_key: Option<String>,
    pub notify_to: Option<String>,
    pub notify_from: Option<String>,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let admin_password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
            tracing::warn!("ADMIN_PASSWORD not set - falling back to the insecure default");
            DEFAULT_ADMIN_PASSWORD.to_string()
        });

        let sendgrid_api_key = env::var("SENDGRID_API_KEY").ok();
        if sendgrid_api_key.is_none() {
            tracing::warn!("SENDGRID_API_KEY not found - email notifications disabled");
        }

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: get_env("DATABASE_URL")?,
            admin_password,
            sendgrid_api_key,
            notify_to: env::var("INQUIRY_NOTIFY_TO").ok(),
            notify_from: env::var("INQUIRY_NOTIFY_FROM").ok(),
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
