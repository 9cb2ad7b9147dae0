//! Configuration module with business-specific sub-modules
//!
//! - `environment` - Environment detection and default log level
//! - `server` - HTTP server binding and limits
//! - `verify` - SMS verification provider credentials and timeouts

pub mod environment;
pub mod server;
pub mod verify;

use serde::{Deserialize, Serialize};

pub use environment::Environment;
pub use server::ServerConfig;
pub use verify::{ProviderCredentials, VerifyProviderConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Verification provider configuration
    pub verify: VerifyProviderConfig,
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            verify: VerifyProviderConfig::from_env(),
        }
    }
}
