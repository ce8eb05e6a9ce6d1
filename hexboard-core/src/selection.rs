//! Click and hover state: toggling pips, resetting the board, neighbor highlight
//!
//! Selecting a pip marks it as owned by Red. There is no turn order and no
//! capture rule; Blue ownership is only ever set directly on a node.

use crate::adjacency::AdjacencyTable;
use crate::error::Result;
use crate::graph::{Graph, Player};
use serde::{Deserialize, Serialize};

/// Pips to light up while the pointer rests on `focus`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub focus: usize,
    pub neighbors: Vec<usize>,
}

/// Flip the selected flag of a pip and return the new value
pub fn toggle(graph: &mut Graph, index: usize) -> Result<bool> {
    let node = graph.node_mut(index)?;
    node.selected = !node.selected;
    if node.selected {
        node.set_owner(Player::Red, true);
    } else {
        node.clear_owners();
    }
    tracing::debug!(index, selected = node.selected, "Toggled pip");
    Ok(node.selected)
}

/// Deselect every pip and clear both ownership flags
pub fn reset_all(graph: &mut Graph) {
    for node in graph.nodes_mut() {
        node.selected = false;
        node.clear_owners();
    }
    tracing::debug!("Board reset");
}

/// Indices of selected pips, ascending
pub fn active_positions(graph: &Graph) -> Vec<usize> {
    graph
        .nodes()
        .iter()
        .filter(|node| node.selected)
        .map(|node| node.index.index())
        .collect()
}

pub fn active_count(graph: &Graph) -> usize {
    graph.nodes().iter().filter(|node| node.selected).count()
}

/// Neighbors to highlight on hover, from the standard table
pub fn hover_highlight(index: usize) -> Result<Highlight> {
    highlight_in(&AdjacencyTable::standard(), index)
}

pub fn highlight_in(adjacency: &AdjacencyTable, index: usize) -> Result<Highlight> {
    Ok(Highlight {
        focus: index,
        neighbors: adjacency.neighbors_of(index)?.to_vec(),
    })
}
