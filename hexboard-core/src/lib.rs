//! HEXBOARD Core - Board model for the 37-pip hexagonal board
//!
//! This crate provides:
//! - Board geometry (pip positions in percentage coordinates)
//! - The static adjacency table
//! - The node graph built from geometry + adjacency
//! - Breadth-first traversal over the graph
//! - Selection state (toggle, reset, hover highlight)

pub mod adjacency;
pub mod board;
pub mod error;
pub mod graph;
pub mod selection;
pub mod traversal;

// Re-exports for convenient access
pub use adjacency::{neighbors_of, AdjacencyTable};
pub use board::{position, Position, MAX_NEIGHBORS, NODE_COUNT, POSITIONS};
pub use error::{BoardError, Result};
pub use graph::{get_node, Graph, Node, NodeId, Player};
pub use selection::{
    active_count, active_positions, highlight_in, hover_highlight, reset_all, toggle, Highlight,
};
pub use traversal::{bfs_order, distances, log_visit, traverse, try_traverse, Bfs, Step, Visit};

/// Build the board graph from geometry and adjacency
pub fn build_graph(positions: &[Position], adjacency: AdjacencyTable) -> Result<Graph> {
    Graph::build(positions, adjacency)
}
