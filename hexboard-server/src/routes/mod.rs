//! HTTP route handlers

pub mod board;
pub mod nodes;
pub mod status;
pub mod traverse;
