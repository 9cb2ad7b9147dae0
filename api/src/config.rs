use pl_shared::{AppConfig, Environment, ServerConfig, VerifyProviderConfig};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub verify: VerifyProviderConfig,
}

impl Config {
    pub fn from_env() -> Self {
        let AppConfig {
            environment,
            server,
            verify,
        } = AppConfig::from_env();

        Config {
            environment,
            server,
            verify,
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }

    pub fn bind_address(&self) -> String {
        self.server.bind_address()
    }
}
