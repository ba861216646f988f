use anyhow::Result;
use axum::Router;
use smart_building_sim::{api, config, controller, telemetry};

use config::Config;
use telemetry::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cfg = Config::load()?;

    let app_state = controller::AppState::new(cfg.clone());
    let app: Router = api::router(app_state.clone(), &cfg);

    let cancel = controller::spawn_controller_tasks(&app_state, &cfg);

    let addr = cfg.server.socket_addr()?;
    info!(
        %addr,
        tick_period_ms = cfg.sim.tick_period_ms,
        "starting smart building simulation service"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            telemetry::shutdown_signal().await;
            cancel.cancel();
        })
        .await?;

    info!("shutdown complete");
    Ok(())
}
