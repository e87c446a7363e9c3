use actix_web::{web, App, HttpServer};
use backend::middleware::access_gate::AccessGate;
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::route_policy::RoutePolicy;
use backend::middleware::structured_logger::StructuredLogger;
use backend::routes;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker-compose env_file, or sourced manually for local dev).
    let host = std::env::var("TASKFORGE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("TASKFORGE_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ TASKFORGE_PORT must be a valid port number");
            std::process::exit(1);
        });

    let jwt = match std::env::var("TASKFORGE_JWT_SECRET") {
        Ok(jwt) => jwt,
        Err(_) => {
            eprintln!("❌ TASKFORGE_JWT_SECRET must be set");
            std::process::exit(1);
        }
    };
    let security_config = SecurityConfig::new(jwt.as_bytes());

    let app_state = AppState::new(security_config);
    let data = web::Data::new(app_state);

    println!("🚀 Starting Taskforge backend on http://{}:{}", host, port);

    HttpServer::new(move || {
        // Wrap order (innermost first): the gate guards the routes, CORS
        // answers preflights before they reach the gate, the logger sees
        // every outcome, and RequestTrace scopes the trace id around it all.
        App::new()
            .app_data(data.clone())
            .wrap(AccessGate::new(RoutePolicy::new(routes::access_rules())))
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
