use crate::errors::StartupError;
use axum::Router;
use ferrous_blacklist_api::{create_lookup_routes, AppState};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn start_web_server(bind_addr: &str, state: AppState) -> Result<(), StartupError> {
    info!(
        bind_address = %bind_addr,
        entries = state.lookup.blacklist().len(),
        "Starting lookup server"
    );

    let listener = bind(bind_addr).await?;

    info!("Lookup server started successfully");

    serve(listener, state).await
}

async fn bind(bind_addr: &str) -> Result<TcpListener, StartupError> {
    TcpListener::bind(bind_addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: bind_addr.to_string(),
            source,
        })
}

async fn serve(listener: TcpListener, state: AppState) -> Result<(), StartupError> {
    axum::serve(listener, create_app(state))
        .await
        .map_err(StartupError::Serve)
}

fn create_app(state: AppState) -> Router {
    create_lookup_routes(state).layer(TraceLayer::new_for_http().make_span_with(
        |request: &axum::http::Request<_>| {
            tracing::debug_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
            )
        },
    ))
}
