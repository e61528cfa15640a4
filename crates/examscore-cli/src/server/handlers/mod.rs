//! API request handlers.

mod meta;
mod statistics;
mod students;

pub use meta::*;
pub use statistics::*;
pub use students::*;

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Success envelope: `{"success": true, "data": ...}`.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

/// Wrap query output in the success envelope.
///
/// Query results borrow from the store, so they are serialized here, while
/// the state they borrow from is still alive.
pub fn success<T: Serialize>(data: T) -> Response {
    Json(ApiResponse {
        success: true,
        data,
    })
    .into_response()
}
