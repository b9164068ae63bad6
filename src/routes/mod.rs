// Route exports
pub mod teams;

use actix_web::web;

pub use teams::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(teams::configure),
    );
}
