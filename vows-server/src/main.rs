use anyhow::Context;
use vows_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, logging)
    setup_environment()?;

    print_banner();

    tracing::info!("Vows server starting...");

    // 2. Configuration
    let config = Config::from_env();
    config.validate()?;
    if config.is_development() && config.site_password.is_none() {
        tracing::warn!("SITE_PASSWORD not set, using the development password");
    }

    // 3. State
    let state = ServerState::initialize(&config)
        .with_context(|| format!("failed to open database in {}", config.work_dir))?;

    // 4. HTTP server
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
