use std::{env, path::PathBuf};

use machine_learning::artifact::DEFAULT_MODEL_PATH;

use crate::error::ServiceErr;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

/// Where the service listens and which model it serves.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub model_path: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl ServiceConfig {
    /// Reads `HOST`, `PORT` and `MODEL_PATH` from the environment.
    ///
    /// # Errors
    /// Returns `ServiceErr::InvalidConfig` if `PORT` isn't a valid port number.
    pub fn from_env() -> Result<Self, ServiceErr> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServiceErr>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }

        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|e| ServiceErr::InvalidConfig(format!("PORT={port}: {e}")))?;
        }

        if let Some(path) = lookup("MODEL_PATH") {
            config.model_path = PathBuf::from(path);
        }

        Ok(config)
    }

    /// Returns the `host:port` pair to bind to.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
