//! HTTP boundary for the leaderboard. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /leaderboard?limit=N` — top N users (default 50, at most 500).
//! - `GET /search?q=...` — case-insensitive username search, at most 20 results.
//! - `GET /users/:username` — a single user with their live rank.
//! - `POST /users` — `{ "username": ..., "rating": ... }`, inserts or updates a rating.
//! - `GET|POST /simulate` — applies a burst of random rating updates.
//! - `GET /health` — `{ "ok": true, "users": N }`.
//!
//! Every response carries permissive CORS headers.
pub mod api_structs;
pub mod error;

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    middleware,
    response::Response,
    routing::{get, post},
    Json, Router
};
use tracing::{debug, error, info};

use crate::{
    api::{
        api_structs::{HealthResponse, LeaderboardQuery, SearchQuery, SimulateResponse, UpsertRequest},
        error::ApiError
    },
    model::{
        registry::RankedRegistry,
        simulation::{simulate, SimulationSettings},
        structures::user::User
    }
};

/// Shared state handed to every handler. The registry is owned by the
/// process and injected here; handlers never reach for a global.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RankedRegistry>,
    pub simulation: SimulationSettings
}

impl AppState {
    pub fn new(registry: Arc<RankedRegistry>, simulation: SimulationSettings) -> AppState {
        AppState { registry, simulation }
    }
}

/// Build the axum `Router` serving the leaderboard.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler).options(preflight_handler))
        .route("/leaderboard", get(leaderboard_handler).options(preflight_handler))
        .route("/search", get(search_handler).options(preflight_handler))
        .route("/users", post(upsert_handler).options(preflight_handler))
        .route("/users/:username", get(user_handler).options(preflight_handler))
        .route(
            "/simulate",
            get(simulate_handler).post(simulate_handler).options(preflight_handler)
        )
        .layer(middleware::map_response(with_cors_headers))
        .with_state(state)
}

/// Serve the leaderboard at `addr` (e.g. `"0.0.0.0:8080"`) until Ctrl-C.
pub async fn serve(state: AppState, addr: &str) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, stopping server"),
        Err(e) => {
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await
        }
    }
}

async fn with_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS, PATCH, DELETE")
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Origin, Content-Type, X-Auth-Token")
    );

    response
}

async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        users: state.registry.len()
    })
}

async fn leaderboard_handler(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>
) -> Json<Vec<User>> {
    let limit = query.limit();
    debug!("Fetching top {} users", limit);

    Json(state.registry.top_n(limit))
}

async fn search_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>
) -> Result<Json<Vec<User>>, ApiError> {
    let q = match query.q.as_deref() {
        Some(q) if !q.is_empty() => q,
        _ => return Err(ApiError::BadRequest("Query parameter 'q' is required".to_string()))
    };
    debug!("Searching users matching {:?}", q);

    Ok(Json(state.registry.search(q)))
}

async fn user_handler(State(state): State<AppState>, Path(username): Path<String>) -> Result<Json<User>, ApiError> {
    debug!("Fetching user {}", username);
    Ok(Json(state.registry.get_user(&username)?))
}

async fn upsert_handler(
    State(state): State<AppState>,
    Json(request): Json<UpsertRequest>
) -> Result<Json<User>, ApiError> {
    if request.username.is_empty() {
        return Err(ApiError::BadRequest("Field 'username' must not be empty".to_string()));
    }

    debug!("Setting rating of {} to {}", request.username, request.rating);
    state.registry.upsert(&request.username, request.rating);

    Ok(Json(state.registry.get_user(&request.username)?))
}

async fn simulate_handler(State(state): State<AppState>) -> Json<SimulateResponse> {
    let applied = simulate(&state.registry, state.simulation, &mut rand::rng());

    Json(SimulateResponse {
        message: format!("Simulated {} random updates", applied)
    })
}
