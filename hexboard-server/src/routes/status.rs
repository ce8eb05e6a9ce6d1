//! Status endpoint

use axum::Json;
use hexboard_core::NODE_COUNT;
use serde::Serialize;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub nodes: usize,
}

pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        nodes: NODE_COUNT,
    })
}
