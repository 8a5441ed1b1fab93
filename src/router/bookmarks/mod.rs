//! Bookmarks-related HTTP API.
mod create;
mod delete;
mod get;
mod list;
mod update;

use axum::routing::{delete, get, patch, post};
use axum::{Router, middleware};

use crate::AppState;

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        // `GET /bookmarks` goes to `list`. Authorization required.
        .route("/", get(list::handler))
        // `POST /bookmarks` goes to `create`. Authorization required.
        .route("/", post(create::handler))
        // `GET /bookmarks/:ID` goes to `get`. Authorization required.
        .route("/{bookmark_id}", get(get::handler))
        // `PATCH /bookmarks/:ID` goes to `update`. Authorization required.
        .route("/{bookmark_id}", patch(update::handler))
        // `DELETE /bookmarks/:ID` goes to `delete`. Authorization required.
        .route("/{bookmark_id}", delete(delete::handler))
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::middleware::auth,
        ))
}
