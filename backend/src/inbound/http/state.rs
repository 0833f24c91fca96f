//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{RegistryCommand, RegistryQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub command: Arc<dyn RegistryCommand>,
    pub query: Arc<dyn RegistryQuery>,
}

impl HttpState {
    /// Bundle the driving ports handed to every handler.
    pub fn new(command: Arc<dyn RegistryCommand>, query: Arc<dyn RegistryQuery>) -> Self {
        Self { command, query }
    }

    /// Build state from one service implementing both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use personnel::domain::RegistryService;
    /// use personnel::inbound::http::state::HttpState;
    /// use personnel::outbound::memory::InMemoryRegistryStore;
    ///
    /// let store = Arc::new(InMemoryRegistryStore::new());
    /// let service = Arc::new(RegistryService::new(store.clone(), store));
    /// let _state = HttpState::from_service(service);
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: RegistryCommand + RegistryQuery + 'static,
    {
        Self {
            command: service.clone(),
            query: service,
        }
    }
}
