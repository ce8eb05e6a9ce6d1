//! Breadth-first traversal endpoint

use crate::error::ApiError;
use crate::state::ServerState;
use axum::{
    extract::{Path, State},
    Json,
};
use hexboard_core::{distances, Step};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct TraversalResponse {
    pub start: usize,
    pub order: Vec<usize>,
    /// Hop count from `start`, indexed by pip
    pub distances: Vec<usize>,
    pub steps: Vec<Step>,
}

/// Level-order walk from `start`
pub async fn get_traversal(
    State(state): State<Arc<ServerState>>,
    Path(start): Path<usize>,
) -> Result<Json<TraversalResponse>, ApiError> {
    let graph = state.read();
    let steps = graph.bfs(start)?.steps();

    Ok(Json(TraversalResponse {
        start,
        order: steps.iter().map(|step| step.index).collect(),
        distances: distances(&graph, start)?,
        steps,
    }))
}
