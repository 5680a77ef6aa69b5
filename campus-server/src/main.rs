use campus_server::config::ServerConfig;
use campus_server::logging::init_logger;
use campus_server::web::{AppState, create_router};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    init_logger();

    let config = ServerConfig::from_env();
    let state = AppState::new(config.planner.clone());
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %config.bind_addr, "Campus Navigator listening");
    info!("  GET  /health             - Health check");
    info!("  POST /route              - Plan a route (JSON network)");
    info!("  POST /route/description  - Plan a route (text description)");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server stopped");
        std::process::exit(1);
    }
}
