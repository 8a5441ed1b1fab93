//! Marque is a small multi-tenant bookmark manager.

#[forbid(unsafe_code)]
#[deny(missing_docs, unused_mut)]
mod auth;
mod bookmark;
mod crypto;
mod database;
pub mod error;
mod middleware;
mod router;
mod token;
mod user;

pub mod config;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::Router;
use axum::http::{Method, header};
pub use error::ServerError;
use tower::ServiceBuilder;
use tower_http::LatencyUnit;
use tower_http::cors::{Any, CorsLayer};
use tower_http::sensitive_headers::SetSensitiveHeadersLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};

/// MUST NEVER be used in production.
#[cfg(test)]
pub async fn make_request(
    app: Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: String,
) -> axum::http::Response<axum::body::Body> {
    use axum::extract::Request;
    use tower::util::ServiceExt;

    let mut request = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    app.oneshot(request.body(axum::body::Body::from(body)).unwrap())
        .await
        .unwrap()
}

/// State sharing between routes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::Configuration>,
    pub db: database::Database,
    pub crypto: Arc<crypto::Crypto>,
    pub token: token::TokenManager,
}

/// Create router.
pub fn app(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        // Add high level tracing/logging to all requests.
        .layer(
            TraceLayer::new_for_http()
                .on_body_chunk(|chunk: &Bytes, latency: Duration, _span: &tracing::Span| {
                    tracing::trace!(size_bytes = chunk.len(), latency = ?latency, "sending body chunk")
                })
                .make_span_with(DefaultMakeSpan::new().include_headers(true).level(tracing::Level::INFO))
                .on_request(DefaultOnRequest::new())
                .on_response(DefaultOnResponse::new().include_headers(true).latency_unit(LatencyUnit::Micros)),
        )
        // Set a timeout.
        .layer(TimeoutLayer::new(Duration::from_secs(10)))
        // Remove senstive headers from trace.
        .layer(SetSensitiveHeadersLayer::new([header::AUTHORIZATION, header::COOKIE]))
        // Add CORS preflight support.
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE, Method::OPTIONS])
                .allow_headers(Any)
                .vary([header::AUTHORIZATION]),
        );

    Router::new()
        // `POST /auth/signup` and `POST /auth/signin`. No authorization.
        .nest("/auth", router::auth::router())
        // `/users/@me` routes. Authorization required.
        .nest("/users", router::users::router(state.clone()))
        // `/bookmarks` routes. Authorization required.
        .nest("/bookmarks", router::bookmarks::router(state.clone()))
        .with_state(state)
        .layer(middleware)
}

/// Initialize the application state.
pub async fn initialize_state() -> Result<AppState, Box<dyn std::error::Error>>
{
    // read configuration file. let it in memory.
    let config = config::Configuration::default().read()?;

    let db = match config.postgres {
        Some(ref config) => {
            database::Database::new(
                &config.address,
                &config
                    .username
                    .clone()
                    .unwrap_or(database::DEFAULT_CREDENTIALS.into()),
                &config
                    .password
                    .clone()
                    .unwrap_or(database::DEFAULT_CREDENTIALS.into()),
                &config
                    .database
                    .clone()
                    .unwrap_or(database::DEFAULT_DATABASE_NAME.into()),
                config.pool_size.unwrap_or(database::DEFAULT_POOL_SIZE),
            )
            .await?
        },
        None => {
            tracing::error!("missing `postgres` entry on `config.yaml` file");
            std::process::exit(0);
        },
    };

    // execute migrations scripts on start.
    sqlx::migrate!().run(&db.postgres).await?;

    let secret = std::env::var("SECRET")
        .expect("missing `SECRET` environnement variable");

    let crypto = Arc::new(crypto::Crypto::new(config.argon2.clone())?);
    let token = token::TokenManager::new(&config.url, &secret);

    Ok(AppState {
        config,
        db,
        crypto,
        token,
    })
}

/// Serve the application until SIGINT or SIGTERM.
pub async fn serve(state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse::<u16>()?;
    let listener =
        tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

    tracing::info!(%port, "server started");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
