//! Users API entry-point: loads settings, prepares storage and serves HTTP.

use std::backtrace::Backtrace;

use mockable::DefaultEnv;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use users_api::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use users_api::server::{ServerConfig, create_server};
use users_api::settings::ServerSettings;

/// Log every panic with its location and a captured backtrace before the
/// unwind reaches `CatchPanic` or a worker thread boundary.
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_default();
        error!(
            panic = %info,
            %location,
            backtrace = %Backtrace::force_capture(),
            "panic"
        );
    }));
}

async fn connect_database(database_url: &str, max_size: u32) -> std::io::Result<DbPool> {
    run_pending_migrations(database_url)
        .await
        .map_err(std::io::Error::other)?;
    DbPool::new(PoolConfig::new(database_url).with_max_size(max_size))
        .await
        .map_err(std::io::Error::other)
}

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
    install_panic_hook();

    let settings = ServerSettings::from_env(&DefaultEnv::new()).map_err(std::io::Error::other)?;
    let mut config = ServerConfig::new(settings.bind_addr);
    match settings.database_url.as_deref() {
        Some(url) => {
            let pool = connect_database(url, settings.pool_max_size).await?;
            config = config.with_db_pool(pool);
        }
        None => warn!("DATABASE_URL not set; users are kept in memory for this process only"),
    }

    create_server(config)?.await?;
    info!("Shutting down");
    Ok(())
}
