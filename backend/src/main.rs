//! Backend entry-point: wires configuration, persistence, and the HTTP
//! server.

use std::env;
use std::net::SocketAddr;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig};
use backend::server::{create_server, RemoteWriteSettings, ServerConfig};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;

    let remote_write = RemoteWriteSettings::load()
        .map_err(|e| std::io::Error::other(format!("remote write configuration invalid: {e}")))?;

    let mut config = ServerConfig::new(bind_addr).with_remote_write(remote_write);
    match env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = DbPool::new(PoolConfig::new(database_url))
                .await
                .map_err(|e| std::io::Error::other(format!("database pool failed: {e}")))?;
            config = config.with_db_pool(pool);
        }
        Err(_) => {
            warn!("DATABASE_URL is not set; serving with fixture repositories");
        }
    }

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
