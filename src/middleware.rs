//! Middlewares for routes.

use axum::extract::State;
use axum::http::header;

use crate::AppState;
use crate::ServerError;
use crate::error::Result;
use crate::user::UserRepository;

const BEARER: &str = "Bearer ";

/// Authentication middleware for protected routes.
///
/// Decodes the bearer token, loads the matching user and inserts it as
/// a request extension. Any failure answers 401 before a handler runs.
pub async fn auth(
    State(state): State<AppState>,
    mut req: axum::extract::Request,
    next: axum::middleware::Next,
) -> Result<axum::response::Response> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(ServerError::Unauthorized)?;
    let token = token.strip_prefix(BEARER).unwrap_or(token);

    let claims = state
        .token
        .decode(token)
        .map_err(|_| ServerError::Unauthorized)?;

    let user = UserRepository::new(state.db.postgres.clone())
        .find_by_id(claims.sub)
        .await?
        .ok_or(ServerError::Unauthorized)?;

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
