//! Node graph built from board geometry and the adjacency table
//!
//! Nodes live in a single arena owned by [`Graph`]; neighbor slots hold
//! [`NodeId`]s into that arena rather than references.

use crate::adjacency::AdjacencyTable;
use crate::board::{Position, MAX_NEIGHBORS, POSITIONS};
use crate::error::{check_index, BoardError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// TYPES
// ============================================================================

/// Node identifier (index into the arena, equal to the pip index)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// The two parties that can claim a pip
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Red,
    Blue,
}

/// A pip in the graph
///
/// The two ownership flags are independent; both set at once is a legal state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub index: NodeId,
    pub owned_by_red: bool,
    pub owned_by_blue: bool,
    /// Active flag the interaction layer toggles on click
    pub selected: bool,
    /// Filled left to right in adjacency order; trailing slots stay `None`
    pub neighbors: [Option<NodeId>; MAX_NEIGHBORS],
}

impl Node {
    fn new(index: usize) -> Self {
        Self {
            index: NodeId(index),
            owned_by_red: false,
            owned_by_blue: false,
            selected: false,
            neighbors: [None; MAX_NEIGHBORS],
        }
    }

    /// Populated neighbor slots, in slot order
    pub fn neighbor_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.neighbors.iter().flatten().copied()
    }

    pub fn degree(&self) -> usize {
        self.neighbors.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_owned_by(&self, player: Player) -> bool {
        match player {
            Player::Red => self.owned_by_red,
            Player::Blue => self.owned_by_blue,
        }
    }

    pub fn set_owner(&mut self, player: Player, owned: bool) {
        match player {
            Player::Red => self.owned_by_red = owned,
            Player::Blue => self.owned_by_blue = owned,
        }
    }

    /// Neither party owns this pip
    pub fn is_free(&self) -> bool {
        !self.owned_by_red && !self.owned_by_blue
    }

    pub(crate) fn clear_owners(&mut self) {
        self.owned_by_red = false;
        self.owned_by_blue = false;
    }
}

// ============================================================================
// GRAPH
// ============================================================================

/// One node per board position, wired from an adjacency table
#[derive(Clone, Debug, Serialize)]
pub struct Graph {
    positions: Vec<Position>,
    #[serde(skip)]
    adjacency: AdjacencyTable,
    nodes: Vec<Node>,
}

impl Graph {
    /// Build the graph: one node per position, then fill neighbor slots
    /// from `adjacency` in table order.
    pub fn build(positions: &[Position], adjacency: AdjacencyTable) -> Result<Self> {
        if positions.len() != adjacency.len() {
            return Err(BoardError::InvalidAdjacency(format!(
                "{} positions but {} adjacency entries",
                positions.len(),
                adjacency.len()
            )));
        }

        #[cfg(debug_assertions)]
        adjacency.validate()?;

        let nodes = wire(&adjacency);
        tracing::debug!("Built board graph with {} nodes", nodes.len());

        Ok(Self {
            positions: positions.to_vec(),
            adjacency,
            nodes,
        })
    }

    /// Build from the compiled-in geometry and adjacency table
    pub fn standard() -> Self {
        let adjacency = AdjacencyTable::standard();
        debug_assert!(adjacency.validate().is_ok());
        Self {
            positions: POSITIONS.to_vec(),
            adjacency,
            nodes: wire(&adjacency),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, index: usize) -> Result<&Node> {
        let index = check_index(index, self.nodes.len())?;
        Ok(&self.nodes[index])
    }

    pub fn node_mut(&mut self, index: usize) -> Result<&mut Node> {
        let index = check_index(index, self.nodes.len())?;
        Ok(&mut self.nodes[index])
    }

    /// Resolve a neighbor slot to its node
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn position(&self, index: usize) -> Result<Position> {
        let index = check_index(index, self.positions.len())?;
        Ok(self.positions[index])
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn adjacency(&self) -> AdjacencyTable {
        self.adjacency
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::standard()
    }
}

/// One node per table entry, neighbor slots filled in table order
fn wire(adjacency: &AdjacencyTable) -> Vec<Node> {
    adjacency
        .iter()
        .map(|(i, list)| {
            let mut node = Node::new(i);
            for (slot, &j) in list.iter().enumerate().take(MAX_NEIGHBORS) {
                node.neighbors[slot] = Some(NodeId(j));
            }
            node
        })
        .collect()
}

/// Read accessor for a node by index
pub fn get_node(graph: &Graph, index: usize) -> Result<&Node> {
    graph.node(index)
}
