use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, Method};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use backend::routes::configure_routes;
use backend::seed;
use backend::shared::{config, data::db};
use backend::storage::{DynStorage, MemStorage, SqliteStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                // Keep SQL statement logging out of the application log
                "info,sqlx=warn,sea_orm=warn".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::load_config()?;

    let storage: DynStorage = match config.storage.backend.as_str() {
        "memory" => {
            tracing::info!("using in-memory storage");
            Arc::new(MemStorage::new())
        }
        "sqlite" => {
            let db_path = config::get_database_path(&config)?;
            tracing::info!("using sqlite storage at {}", db_path.display());
            let conn = db::connect(&db_path.to_string_lossy()).await?;
            db::create_schema(&conn).await?;
            Arc::new(SqliteStorage::new(conn))
        }
        other => anyhow::bail!("unknown storage backend: {other}"),
    };

    if config.storage.seed {
        seed::seed_if_empty(storage.as_ref())
            .await
            .map_err(|e| anyhow::anyhow!("seeding failed: {e}"))?;
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = configure_routes(storage)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], config.server.port).into();
    tracing::info!("binding server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "port {} is already in use; is another instance running?",
                    config.server.port
                );
            } else {
                tracing::error!("failed to bind to port {}: {}", config.server.port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
