use actix_web::{web, App, HttpServer};
use library_backend::config::db::DbProfile;
use library_backend::config::server::ServerConfig;
use library_backend::infra::state::build_state;
use library_backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use library_backend::routes;
use library_backend::telemetry;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or sourced manually for local dev).
    let server = match ServerConfig::from_env() {
        Ok(server) => server,
        Err(e) => {
            error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };

    // Schema is owned by the migration CLI; the app only connects.
    let app_state = match build_state()
        .with_db(DbProfile::Prod)
        .assume_schema_ready()
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(host = %server.host, port = server.port, "starting library backend");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
