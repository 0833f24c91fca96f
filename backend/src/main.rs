//! Backend entry-point: loads settings, prepares the store and serves the
//! registry endpoints.

mod server;

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use personnel::config::ServerSettings;
use personnel::domain::RegistryOptions;
use personnel::inbound::http::health::HealthState;
use personnel::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};

use server::{ServerConfig, create_server};

fn load_settings<I, T>(args: I) -> std::io::Result<ServerSettings>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    ServerSettings::load_from_iter(args)
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))
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

    let settings = load_settings(std::env::args_os())?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::other(format!("invalid bind address: {e}")))?;

    let mut config = ServerConfig::new(bind_addr).with_options(RegistryOptions {
        verify_department_exists: settings.verify_department_exists,
    });

    if let Some(database_url) = settings.database_url() {
        if settings.run_migrations {
            run_pending_migrations(database_url)
                .await
                .map_err(std::io::Error::other)?;
        }
        let pool = DbPool::new(
            PoolConfig::new(database_url).with_max_size(settings.pool_max_size()),
        )
        .await
        .map_err(std::io::Error::other)?;
        config = config.with_db_pool(pool);
    } else if settings.run_migrations {
        warn!("run_migrations is set but no database_url is configured");
    }

    info!(
        bind_addr = %config.bind_addr(),
        verify_department_exists = settings.verify_department_exists,
        "starting personnel server"
    );
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}

#[cfg(test)]
mod tests {
    use super::*;
    use env_lock::lock_env;

    #[test]
    fn settings_load_through_the_binary_entry_point() {
        let _guard = lock_env([
            ("PERSONNEL_BIND_ADDR", None),
            ("PERSONNEL_DATABASE_URL", None),
            ("PERSONNEL_VERIFY_DEPARTMENT_EXISTS", Some("true".to_owned())),
        ]);

        let settings = load_settings(["personnel"]).expect("settings load");

        assert!(settings.verify_department_exists);
        assert_eq!(
            settings.bind_addr().expect("default address"),
            "0.0.0.0:8080"
                .parse::<std::net::SocketAddr>()
                .expect("literal parses")
        );
    }
}
