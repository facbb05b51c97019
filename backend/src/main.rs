//! Service entry point: wires configuration, persistence, and the HTTP
//! server.

use std::sync::Arc;

use actix_web::{HttpServer, web};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::state::HttpState;
use backend::middleware::hits::HitCounter;
use backend::outbound::persistence::{
    DbPool, DieselChirpRepository, DieselUserRepository, PoolConfig,
};
use backend::server::build_app;
use backend::server::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let pool = DbPool::new(PoolConfig::new(config.database_url.clone()))
        .await
        .map_err(std::io::Error::other)?;

    let state = HttpState::new(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselChirpRepository::new(pool)),
        config.platform,
    );
    let counter = web::Data::new(HitCounter::new());

    let bind_addr = config.bind_addr;
    let server = HttpServer::new(move || {
        build_app(state.clone(), counter.clone(), &config.assets_dir)
    })
    .bind(bind_addr)?;

    info!(%bind_addr, "listening");
    server.run().await
}
