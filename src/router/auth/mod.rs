//! Registration and login HTTP API.
pub mod signin;
pub mod signup;

use axum::Router;
use axum::routing::post;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        // `POST /auth/signup` goes to `signup`.
        .route("/signup", post(signup::handler))
        // `POST /auth/signin` goes to `signin`.
        .route("/signin", post(signin::handler))
}
