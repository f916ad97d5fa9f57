use api::routes::routes;
use api::state::AppState;
use axum::Router;
use common::config::Config;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing_appender::rolling;

#[tokio::main]
async fn main() {
    // Mandatory secrets are checked here; the process refuses to start
    // without DATABASE_URL and JWT_SECRET.
    let config = Config::init(".env");
    let _log_guard = init_logging(&config.log_file);

    let pool = db::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    db::migrate(&pool).await.expect("Failed to apply schema");

    let state = AppState::new(pool);
    let cors = CorsLayer::very_permissive();

    let app: Router = routes(state).layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid address");

    tracing::info!(
        "Starting {} on http://{}:{}",
        config.project_name,
        config.host,
        config.port
    );

    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Server crashed");
}

fn init_logging(log_file: &str) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer().with_writer(file_writer).with_ansi(false);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_ansi(true);

    let env_filter =
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("api=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    guard
}
