use std::{env, net::SocketAddr};

use crate::error::AppError;

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub listen_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://vehicle_reports.db".to_string());

        // Hosting platforms assign the port dynamically via PORT.
        let port: u16 = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|err| AppError::Config(format!("invalid PORT: {err}")))?,
            Err(_) => DEFAULT_PORT,
        };
        let listen_addr = SocketAddr::from(([0, 0, 0, 0], port));

        Ok(Self {
            database_url,
            listen_addr,
        })
    }
}
