//! Whole-board endpoints

use super::nodes::NodeView;
use crate::error::ApiError;
use crate::state::ServerState;
use axum::{extract::State, Json};
use hexboard_core::selection;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Serialize)]
pub struct BoardInfo {
    pub node_count: usize,
    pub nodes: Vec<NodeView>,
    pub active: Vec<usize>,
}

/// Get board geometry with current node flags
pub async fn get_board(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<BoardInfo>, ApiError> {
    let graph = state.read();
    let nodes = (0..graph.len())
        .map(|i| NodeView::from_graph(&graph, i))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(BoardInfo {
        node_count: graph.len(),
        nodes,
        active: selection::active_positions(&graph),
    }))
}

/// Clear every selection and ownership flag
pub async fn reset_board(State(state): State<Arc<ServerState>>) -> Json<Value> {
    let mut graph = state.write();
    selection::reset_all(&mut graph);
    tracing::info!("Board reset");

    Json(json!({
        "success": true,
        "active": selection::active_count(&graph),
    }))
}

/// Selected positions
pub async fn get_active(State(state): State<Arc<ServerState>>) -> Json<Value> {
    let graph = state.read();
    Json(json!({
        "positions": selection::active_positions(&graph),
        "count": selection::active_count(&graph),
    }))
}
