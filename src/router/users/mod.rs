//! Users-related HTTP API.
mod get;
mod update;

use axum::routing::{get, patch};
use axum::{Router, middleware};

use crate::AppState;

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        // `GET /users/@me` goes to `get`. Authorization required.
        .route("/@me", get(get::handler))
        // `PATCH /users/@me` goes to `update`. Authorization required.
        .route("/@me", patch(update::handler))
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::middleware::auth,
        ))
}
