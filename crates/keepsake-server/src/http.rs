//! HTTP routes for the token service.

use crate::token::{AccessToken, VideoGrants};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use log::{error, info};
use serde::Deserialize;
use serde_json::json;

/// Health endpoint path.
pub const HEALTH_PATH: &str = "/health";
/// Token endpoint path.
pub const TOKEN_PATH: &str = "/getToken";

/// Signing credentials shared with the token handler.
#[derive(Clone)]
pub struct TokenState {
    /// API key used as the token issuer.
    pub api_key: String,
    /// API secret used for signing.
    pub api_secret: String,
}

/// Build the token and health routes.
pub fn token_routes() -> Router<TokenState> {
    Router::new()
        .route(TOKEN_PATH, get(get_token))
        .route(HEALTH_PATH, get(health))
}

/// Assemble the full router with state applied.
pub fn router(state: TokenState) -> Router {
    token_routes().with_state(state)
}

/// Bind the address and serve the router until shutdown.
pub async fn serve(addr: &str, state: TokenState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("token server listening (addr={addr})");
    axum::serve(listener, router(state)).await
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

fn default_identity() -> String {
    "default-identity".to_string()
}

fn default_name() -> String {
    "Agent User".to_string()
}

fn default_room() -> String {
    "my-agent-room".to_string()
}

#[derive(Debug, Deserialize)]
struct TokenParams {
    #[serde(default = "default_identity")]
    identity: String,
    #[serde(default = "default_name")]
    name: String,
    #[serde(default = "default_room")]
    room: String,
}

async fn get_token(
    State(state): State<TokenState>,
    Query(params): Query<TokenParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let jwt = AccessToken::new(state.api_key, state.api_secret)
        .with_identity(params.identity)
        .with_name(params.name)
        .with_grants(VideoGrants {
            room_join: true,
            room: params.room,
            can_publish: true,
            can_subscribe: true,
            hidden: false,
            recorder: false,
        })
        .to_jwt()
        .map_err(|err| ApiError::Internal(err.to_string()))?;
    Ok(Json(json!({ "jwt": jwt })))
}

/// API error mapped onto HTTP statuses.
#[derive(Debug)]
pub enum ApiError {
    /// Unexpected failure while handling a request.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Internal(message) => {
                error!("token request failed: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": message })),
                )
                    .into_response()
            }
        }
    }
}
