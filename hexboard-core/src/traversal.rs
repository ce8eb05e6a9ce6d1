//! Breadth-first traversal over the node graph
//!
//! Nodes are marked visited when dequeued. A node may sit in the queue more
//! than once, but is only ever yielded the first time it comes off.

use crate::error::{check_index, BoardError, Result};
use crate::graph::{Graph, Node, NodeId};
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::collections::VecDeque;

/// A visited node and its hop distance from the start
#[derive(Clone, Copy, Debug)]
pub struct Visit<'g> {
    pub node: &'g Node,
    pub depth: usize,
}

/// Owned record of one visit: pip index and hop distance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Step {
    pub index: usize,
    pub depth: usize,
}

/// Lazy level-order walk from a start node. Single consumer.
#[derive(Debug)]
pub struct Bfs<'g> {
    graph: &'g Graph,
    queue: VecDeque<(NodeId, usize)>,
    visited: FxHashSet<usize>,
}

impl<'g> Bfs<'g> {
    pub fn new(graph: &'g Graph, start: usize) -> Result<Self> {
        let start = check_index(start, graph.len())?;
        let mut queue = VecDeque::with_capacity(graph.len());
        queue.push_back((NodeId(start), 0));
        Ok(Self {
            graph,
            queue,
            visited: FxHashSet::default(),
        })
    }

    /// Advance to the next unvisited node, reporting its depth
    pub fn next_visit(&mut self) -> Option<Visit<'g>> {
        while let Some((id, depth)) = self.queue.pop_front() {
            let Some(node) = self.graph.get(id) else {
                continue;
            };
            if !self.visited.insert(id.index()) {
                continue;
            }
            for next in node.neighbor_ids() {
                if !self.visited.contains(&next.index()) {
                    self.queue.push_back((next, depth + 1));
                }
            }
            return Some(Visit { node, depth });
        }
        None
    }

    /// Drain the walk into `(index, depth)` records
    pub fn steps(mut self) -> Vec<Step> {
        let mut steps = Vec::with_capacity(self.graph.len());
        while let Some(visit) = self.next_visit() {
            steps.push(Step {
                index: visit.node.index.index(),
                depth: visit.depth,
            });
        }
        steps
    }
}

impl<'g> Iterator for Bfs<'g> {
    type Item = &'g Node;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_visit().map(|visit| visit.node)
    }
}

impl Graph {
    pub fn bfs(&self, start: usize) -> Result<Bfs<'_>> {
        Bfs::new(self, start)
    }
}

/// Call `visit` once per node reachable from `start`, in level order
pub fn traverse<F>(graph: &Graph, start: usize, mut visit: F) -> Result<()>
where
    F: FnMut(&Node),
{
    for node in graph.bfs(start)? {
        visit(node);
    }
    Ok(())
}

/// Like [`traverse`], but the first visitor error aborts the walk
pub fn try_traverse<F, E>(graph: &Graph, start: usize, mut visit: F) -> std::result::Result<(), E>
where
    F: FnMut(&Node) -> std::result::Result<(), E>,
    E: From<BoardError>,
{
    for node in graph.bfs(start)? {
        visit(node)?;
    }
    Ok(())
}

/// Node indices in visit order
pub fn bfs_order(graph: &Graph, start: usize) -> Result<Vec<usize>> {
    Ok(graph.bfs(start)?.map(|node| node.index.index()).collect())
}

/// Hop count from `start` to every node; unreachable nodes get `usize::MAX`
pub fn distances(graph: &Graph, start: usize) -> Result<Vec<usize>> {
    let mut dist = vec![usize::MAX; graph.len()];
    let mut bfs = graph.bfs(start)?;
    while let Some(visit) = bfs.next_visit() {
        dist[visit.node.index.index()] = visit.depth;
    }
    Ok(dist)
}

/// Diagnostic hook for a node
pub fn log_visit(node: &Node, note: &str) {
    tracing::debug!("Node {} - note: {}", node.index.index(), note);
}
