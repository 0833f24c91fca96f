//! HTTP inbound adapter exposing REST endpoints.

pub mod departments;
pub mod employees;
pub mod error;
pub mod health;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register the registry endpoints and their extractor configuration.
///
/// Each collection answers on both `/departments` and `/departments/`. The
/// caller provides [`state::HttpState`] as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .app_data(validation::query_config())
        .service(
            web::resource(["/departments", "/departments/"])
                .route(web::get().to(departments::list_departments))
                .route(web::post().to(departments::create_department)),
        )
        .service(
            web::resource(["/employees", "/employees/"])
                .route(web::get().to(employees::list_employees))
                .route(web::post().to(employees::create_employee)),
        );
}
