//! Adjacency table for the 37-pip hexagonal board
//!
//! Two pips are neighbors when they sit in the same column one row apart, or
//! in adjacent columns half a row apart. This table drives both hover
//! highlighting and graph construction.

use crate::board::{MAX_NEIGHBORS, NODE_COUNT};
use crate::error::{check_index, BoardError, Result};
use serde::Serialize;

/// Neighbor lists, ascending, indexed by pip
const STANDARD: [&[usize]; NODE_COUNT] = [
    &[1, 2, 3],               // 0
    &[0, 2, 4, 5],            // 1
    &[0, 1, 3, 5, 6, 7],      // 2
    &[0, 2, 7, 8],            // 3
    &[1, 5, 9, 10],           // 4
    &[1, 2, 4, 6, 10, 11],    // 5
    &[2, 5, 7, 11, 12, 13],   // 6
    &[2, 3, 6, 8, 13, 14],    // 7
    &[3, 7, 14, 15],          // 8
    &[4, 10, 16],             // 9
    &[4, 5, 9, 11, 16, 17],   // 10
    &[5, 6, 10, 12, 17, 18],  // 11
    &[6, 11, 13, 18, 19, 20], // 12
    &[6, 7, 12, 14, 20, 21],  // 13
    &[7, 8, 13, 15, 21, 22],  // 14
    &[8, 14, 22],             // 15
    &[9, 10, 17, 23],         // 16
    &[10, 11, 16, 18, 23, 24], // 17
    &[11, 12, 17, 19, 24, 25], // 18
    &[12, 18, 20, 25, 26, 27], // 19
    &[12, 13, 19, 21, 27, 28], // 20
    &[13, 14, 20, 22, 28, 29], // 21
    &[14, 15, 21, 29],        // 22
    &[16, 17, 24, 30],        // 23
    &[17, 18, 23, 25, 30, 31], // 24
    &[18, 19, 24, 26, 31, 32], // 25
    &[19, 25, 27, 32, 33, 34], // 26
    &[19, 20, 26, 28, 34, 35], // 27
    &[20, 21, 27, 29, 35, 36], // 28
    &[21, 22, 28, 36],        // 29
    &[23, 24, 31],            // 30
    &[24, 25, 30, 32],        // 31
    &[25, 26, 31, 33],        // 32
    &[26, 32, 34],            // 33
    &[26, 27, 33, 35],        // 34
    &[27, 28, 34, 36],        // 35
    &[28, 29, 35],            // 36
];

/// Static mapping from pip index to its neighbor indices
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AdjacencyTable {
    lists: &'static [&'static [usize]],
}

impl AdjacencyTable {
    /// Wrap an arbitrary static table. Call [`validate`](Self::validate) before trusting it.
    pub const fn new(lists: &'static [&'static [usize]]) -> Self {
        Self { lists }
    }

    /// The board's compiled-in table
    pub const fn standard() -> Self {
        Self::new(&STANDARD)
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Ordered neighbor indices of `index`
    pub fn neighbors_of(&self, index: usize) -> Result<&'static [usize]> {
        let index = check_index(index, self.lists.len())?;
        Ok(self.lists[index])
    }

    pub fn degree(&self, index: usize) -> Result<usize> {
        self.neighbors_of(index).map(<[usize]>::len)
    }

    pub fn are_adjacent(&self, a: usize, b: usize) -> Result<bool> {
        check_index(b, self.lists.len())?;
        Ok(self.neighbors_of(a)?.contains(&b))
    }

    /// Iterate `(index, neighbors)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'static [usize])> + '_ {
        self.lists.iter().copied().enumerate()
    }

    /// Check range, self-loops, degree, duplicates and symmetry
    pub fn validate(&self) -> Result<()> {
        let len = self.lists.len();
        for (i, list) in self.iter() {
            if list.len() > MAX_NEIGHBORS {
                return Err(BoardError::InvalidAdjacency(format!(
                    "node {} has {} neighbors (max {})",
                    i,
                    list.len(),
                    MAX_NEIGHBORS
                )));
            }
            for (k, &j) in list.iter().enumerate() {
                if j >= len {
                    return Err(BoardError::InvalidAdjacency(format!(
                        "node {} lists neighbor {} outside 0..{}",
                        i, j, len
                    )));
                }
                if j == i {
                    return Err(BoardError::InvalidAdjacency(format!(
                        "node {} lists itself as a neighbor",
                        i
                    )));
                }
                if list[..k].contains(&j) {
                    return Err(BoardError::InvalidAdjacency(format!(
                        "node {} lists neighbor {} twice",
                        i, j
                    )));
                }
                if !self.lists[j].contains(&i) {
                    return Err(BoardError::InvalidAdjacency(format!(
                        "edge {} -> {} has no reverse edge",
                        i, j
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for AdjacencyTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Neighbors of `index` in the standard table
pub fn neighbors_of(index: usize) -> Result<&'static [usize]> {
    AdjacencyTable::standard().neighbors_of(index)
}
