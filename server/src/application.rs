//! Server entry point: axum router, the `/test-db` probe, and the
//! Dioxus application mount.

use axum::http::StatusCode;
use axum::routing::get;
use axum::Json;
use dioxus::prelude::*;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use tower_http::trace::TraceLayer;

use crate::database;

/// Launch the fullstack server hosting `app`.
pub fn launch(app: fn() -> Element) {
    tokio::runtime::Runtime::new()
        .expect("failed to start tokio runtime")
        .block_on(launch_server(app));
}

async fn launch_server(app: fn() -> Element) {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Custom routes go ahead of the Dioxus mount so they are matched first.
    let router = axum::Router::new()
        .route("/test-db", get(test_db))
        .serve_dioxus_application(ServeConfigBuilder::default(), app)
        .layer(TraceLayer::new_for_http());

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus_cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");
    tracing::info!("listening on {addr}");

    axum::serve(listener, router.into_make_service())
        .await
        .expect("server exited unexpectedly");
}

#[derive(Serialize)]
struct DbStatus {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Connectivity probe that round-trips a query through the pool.
async fn test_db() -> (StatusCode, Json<DbStatus>) {
    match database_time().await {
        Ok(time) => (
            StatusCode::OK,
            Json(DbStatus {
                success: true,
                time: Some(time),
                error: None,
            }),
        ),
        Err(error) => {
            tracing::error!("database probe failed: {error:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DbStatus {
                    success: false,
                    time: None,
                    error: Some(error.to_string()),
                }),
            )
        }
    }
}

async fn database_time() -> anyhow::Result<String> {
    let pool = database::connection_pool().await?;
    let (now,): (time::OffsetDateTime,) = sqlx::query_as("SELECT NOW()").fetch_one(pool).await?;
    Ok(now.format(&Rfc3339)?)
}
