pub mod handlers;
pub mod middlewares;
pub mod router;
pub mod state;

use crate::{conf::settings, prelude::Result};
use router::build_routes;

pub async fn listen() -> Result<()> {
    let listener =
        tokio::net::TcpListener::bind(format!("0.0.0.0:{}", settings.listen_port.clone())).await?;
    tracing::info!(
        "{} accepting connections at port {}, probes at /livez and /healthz",
        settings.service_name,
        settings.listen_port
    );
    tokio::select! {
        r = axum::serve(listener, build_routes().await?) => {
            tracing::warn!("{} stopped serving unexpectedly: {:?}", settings.service_name, &r)
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("received interrupt, shutting down {}", settings.service_name);
        }
    }
    Ok(())
}
