//! Single-node endpoints: read, hover highlight, toggle

use crate::error::ApiError;
use crate::state::ServerState;
use axum::{
    extract::{Path, State},
    Json,
};
use hexboard_core::{highlight_in, selection, Graph, Highlight, Position};
use serde::Serialize;
use std::sync::Arc;

/// A node as the board page sees it
#[derive(Clone, Debug, Serialize)]
pub struct NodeView {
    pub index: usize,
    pub title: String,
    pub x: f32,
    pub y: f32,
    pub is_corner: bool,
    pub selected: bool,
    pub owned_by_red: bool,
    pub owned_by_blue: bool,
    pub neighbors: Vec<usize>,
}

impl NodeView {
    pub fn from_graph(graph: &Graph, index: usize) -> Result<Self, ApiError> {
        let node = graph.node(index)?;
        let pos = graph.position(index)?;
        Ok(Self {
            index,
            title: Position::title(index),
            x: pos.x,
            y: pos.y,
            is_corner: pos.is_corner,
            selected: node.selected,
            owned_by_red: node.owned_by_red,
            owned_by_blue: node.owned_by_blue,
            neighbors: node.neighbor_ids().map(|id| id.index()).collect(),
        })
    }
}

/// Get one node
pub async fn get_node(
    State(state): State<Arc<ServerState>>,
    Path(index): Path<usize>,
) -> Result<Json<NodeView>, ApiError> {
    let graph = state.read();
    Ok(Json(NodeView::from_graph(&graph, index)?))
}

/// Neighbors to highlight while hovering a node
pub async fn get_highlight(
    State(state): State<Arc<ServerState>>,
    Path(index): Path<usize>,
) -> Result<Json<Highlight>, ApiError> {
    let adjacency = state.read().adjacency();
    Ok(Json(highlight_in(&adjacency, index)?))
}

/// Toggle a node's selected flag
pub async fn toggle_node(
    State(state): State<Arc<ServerState>>,
    Path(index): Path<usize>,
) -> Result<Json<NodeView>, ApiError> {
    let mut graph = state.write();
    let selected = selection::toggle(&mut graph, index)?;
    tracing::info!("Position {} {}", index + 1, if selected { "selected" } else { "cleared" });
    Ok(Json(NodeView::from_graph(&graph, index)?))
}
