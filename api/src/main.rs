use actix_web::HttpServer;
use anyhow::Context;
use dotenvy::dotenv;
use log::{info, warn};

use pl_api::app::{build_state, create_app};
use pl_api::config::Config;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = Config::from_env();

    // Initialize logger
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.environment.default_log_level()),
    );

    info!("Starting PharmaLead API Server ({})", config.environment);

    if !config.verify.has_credentials() {
        warn!(
            "Missing {:?}; SMS verification runs in development mode and accepts any 6-digit code",
            config.verify.missing_credentials()
        );
        if config.is_production() {
            warn!("Development-mode verification is active in production");
        }
    }

    let state = build_state(&config.verify).context("failed to initialize verification backend")?;
    info!(
        "Verification method: {}",
        state.verification_service.method()
    );

    let bind_address = config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let max_payload_size = config.server.max_payload_size;

    let mut server = HttpServer::new(move || create_app(state.clone(), max_payload_size))
        .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server error")
}
