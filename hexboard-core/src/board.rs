//! Board geometry: pip positions in percentage coordinates

use crate::error::{check_index, Result};
use serde::{Deserialize, Serialize};

/// Number of pips on the board
pub const NODE_COUNT: usize = 37;

/// Maximum neighbors of any pip (a fully interior one)
pub const MAX_NEIGHBORS: usize = 6;

/// A pip's location, as a percentage of board width/height from the top-left corner
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub is_corner: bool,
}

impl Position {
    pub const fn new(x: f32, y: f32, is_corner: bool) -> Self {
        Self { x, y, is_corner }
    }

    /// Human-facing label for the pip at `index` (1-based)
    pub fn title(index: usize) -> String {
        format!("Position {}", index + 1)
    }
}

/// Pip positions, index = node identity.
///
/// The board is a hexagon of side 4 laid out as vertical columns of
/// 4, 5, 6, 7, 6, 5, 4 pips. Indices are listed in the visual row order of
/// the board image, so a single "row" below mixes several columns.
pub const POSITIONS: [Position; NODE_COUNT] = [
    // Top corner
    Position::new(50.0, 9.0, true),
    // 1-3
    Position::new(36.5, 16.5, true),
    Position::new(50.0, 23.0, false),
    Position::new(63.5, 16.5, true),
    // 4-8
    Position::new(23.0, 23.0, true),
    Position::new(36.5, 30.0, false),
    Position::new(50.0, 36.5, false),
    Position::new(63.5, 30.0, false),
    Position::new(77.0, 23.0, true),
    // 9-15
    Position::new(9.7, 30.0, true),
    Position::new(23.0, 36.5, false),
    Position::new(36.5, 43.0, false),
    Position::new(50.0, 50.0, false),
    Position::new(63.5, 43.0, false),
    Position::new(77.0, 36.5, false),
    Position::new(90.2, 30.0, true),
    // 16-22
    Position::new(9.7, 43.0, true),
    Position::new(23.0, 50.0, false),
    Position::new(36.5, 57.0, false),
    Position::new(50.0, 63.5, false),
    Position::new(63.5, 57.0, false),
    Position::new(77.0, 50.0, false),
    Position::new(90.2, 43.0, true),
    // 23-29
    Position::new(9.7, 57.0, true),
    Position::new(23.0, 63.5, false),
    Position::new(36.5, 70.1, false),
    Position::new(50.0, 77.0, false),
    Position::new(63.5, 70.1, false),
    Position::new(77.0, 63.5, false),
    Position::new(90.2, 57.0, true),
    // 30-36, bottom boundary
    Position::new(9.7, 70.1, true),
    Position::new(23.0, 77.0, true),
    Position::new(36.5, 83.5, true),
    Position::new(50.0, 90.5, true),
    Position::new(63.5, 83.5, true),
    Position::new(77.0, 77.0, true),
    Position::new(90.2, 70.1, true),
];

/// Look up a pip position by index
pub fn position(index: usize) -> Result<Position> {
    let index = check_index(index, NODE_COUNT)?;
    Ok(POSITIONS[index])
}
