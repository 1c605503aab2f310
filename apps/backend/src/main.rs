use actix_web::{web, App, HttpServer};
use skirmish_backend::routes;
use skirmish_backend::state::app_state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("SKIRMISH_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("SKIRMISH_PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ SKIRMISH_PORT must be a valid port number");
            std::process::exit(1);
        });

    println!("🚀 Starting Skirmish Backend on http://{}:{}", host, port);

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(AppState::new());

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
