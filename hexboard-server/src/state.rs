//! Server state management
//!
//! One board graph shared by every request.

use hexboard_core::Graph;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Server-wide shared state
pub struct ServerState {
    board: RwLock<Graph>,
}

impl ServerState {
    pub fn new() -> Self {
        Self::with_graph(Graph::standard())
    }

    pub fn with_graph(graph: Graph) -> Self {
        Self {
            board: RwLock::new(graph),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Graph> {
        self.board.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Graph> {
        self.board.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}
