use actix_web::{web, App, HttpServer};
use sleeper::config::db::DbSettings;
use sleeper::config::server::ServerConfig;
use sleeper::infra::state::build_state;
use sleeper::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use sleeper::{routes, telemetry};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = telemetry::init_tracing() {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let server_config = match ServerConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };

    let db_settings = match DbSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "invalid database configuration");
            std::process::exit(1);
        }
    };

    // The store must open before we accept traffic.
    let app_state = match build_state().with_db(db_settings).build().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to open sleeper store");
            std::process::exit(1);
        }
    };

    info!(
        host = %server_config.host,
        port = server_config.port,
        "starting sleeper service"
    );

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server_config.host.as_str(), server_config.port))?
    .run()
    .await
}
