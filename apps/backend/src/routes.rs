use actix_web::web;

use crate::{health, ws};

/// Configure application routes for the server and for test harnesses.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Root greeting: /
    cfg.service(web::resource("/").route(web::get().to(health::root)));

    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Realtime game transport: /ws
    cfg.service(web::resource("/ws").route(web::get().to(ws::session::upgrade)));
}
