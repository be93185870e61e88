use std::env;
use std::net::{IpAddr, SocketAddr};

use anyhow::Context;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/registrations.db";
pub const DEFAULT_LOG_FILTER: &str = "regform=debug,tower_http=debug,axum::rejection=trace";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub environment: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;
        let environment = current_environment();

        Ok(Self {
            database_url,
            host,
            port,
            environment,
        })
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip = self
            .host
            .parse::<IpAddr>()
            .with_context(|| format!("HOST is not a valid IP address: {}", self.host))?;
        Ok(SocketAddr::from((ip, self.port)))
    }
}

fn current_environment() -> String {
    env::var("ENVIRONMENT")
        .unwrap_or_else(|_| "development".to_string())
        .to_ascii_lowercase()
}
