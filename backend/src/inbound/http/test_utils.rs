//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};
use serde_json::Value;

use crate::domain::{RegistryOptions, RegistryService};
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryRegistryStore;

/// Builder for an app wired to a fresh in-memory store.
#[derive(Debug, Default)]
pub struct TestApp {
    options: RegistryOptions,
}

impl TestApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: RegistryOptions) -> Self {
        self.options = options;
        self
    }

    /// Initialise the service with the same routing the server uses.
    pub async fn init(
        self,
    ) -> impl Service<
        actix_http::Request,
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
    > {
        let store = Arc::new(InMemoryRegistryStore::new());
        let service =
            Arc::new(RegistryService::new(store.clone(), store).with_options(self.options));
        let state = web::Data::new(HttpState::from_service(service));
        test::init_service(
            App::new()
                .app_data(state)
                .configure(configure),
        )
        .await
    }
}

/// POST `body` as JSON to `uri`.
pub async fn post_json<S, B>(app: &S, uri: &str, body: Value) -> ServiceResponse<B>
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri(uri)
        .set_json(body)
        .to_request();
    test::call_service(app, req).await
}
