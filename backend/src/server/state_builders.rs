//! Builders for the HTTP state from the configured store.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use personnel::domain::{RegistryOptions, RegistryService};
use personnel::inbound::http::state::HttpState;
use personnel::outbound::memory::InMemoryRegistryStore;
use personnel::outbound::persistence::{
    DbPool, DieselDepartmentRepository, DieselEmployeeRepository,
};

use super::ServerConfig;

fn build_diesel_state(pool: &DbPool, options: RegistryOptions) -> HttpState {
    let departments = Arc::new(DieselDepartmentRepository::new(pool.clone()));
    let employees = Arc::new(DieselEmployeeRepository::new(pool.clone()));
    HttpState::from_service(Arc::new(
        RegistryService::new(departments, employees).with_options(options),
    ))
}

fn build_memory_state(options: RegistryOptions) -> HttpState {
    let store = Arc::new(InMemoryRegistryStore::new());
    HttpState::from_service(Arc::new(
        RegistryService::new(store.clone(), store).with_options(options),
    ))
}

/// Build the shared HTTP state, using PostgreSQL when a pool is configured.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!("registry backed by PostgreSQL");
            build_diesel_state(pool, config.options)
        }
        None => {
            info!("registry backed by in-memory store");
            build_memory_state(config.options)
        }
    };
    web::Data::new(state)
}
