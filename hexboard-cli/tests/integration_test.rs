//! Integration tests for the hexboard binary
//!
//! Runs the built CLI and checks its output against the board model.

use hexboard_core::{bfs_order, neighbors_of, Graph};
use serde_json::Value;
use std::process::{Command, Output};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn hexboard(args: &[&str]) -> Output {
    hexboard_with_log(args, "warn")
}

fn hexboard_with_log(args: &[&str], filter: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hexboard"))
        .args(args)
        .env("RUST_LOG", filter)
        .output()
        .expect("failed to run hexboard binary")
}

fn stdout_json(output: &Output) -> Value {
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

// ============================================================================
// COMMANDS
// ============================================================================

#[test]
fn test_neighbors_json() {
    let json = stdout_json(&hexboard(&["neighbors", "12", "--json"]));
    assert_eq!(json["focus"], 12);

    let listed: Vec<usize> = json["neighbors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_u64().unwrap() as usize)
        .collect();
    assert_eq!(listed, neighbors_of(12).unwrap());
}

#[test]
fn test_neighbors_text() {
    let output = hexboard(&["neighbors", "0"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "0 -> [1, 2, 3]");
}

#[test]
fn test_neighbors_out_of_range_fails() {
    let output = hexboard(&["neighbors", "37"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("out of range"));
}

#[test]
fn test_traverse_json_matches_library() {
    let json = stdout_json(&hexboard(&["traverse", "0", "--json"]));
    let steps = json.as_array().unwrap();

    let order: Vec<usize> = steps
        .iter()
        .map(|s| s["index"].as_u64().unwrap() as usize)
        .collect();
    assert_eq!(order, bfs_order(&Graph::standard(), 0).unwrap());
    assert_eq!(steps[0]["depth"], 0);
    assert_eq!(steps.last().unwrap()["depth"], 6);
}

#[test]
fn test_traverse_text_groups_by_depth() {
    let output = hexboard(&["traverse", "12"]);
    assert!(output.status.success());

    let text = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "depth 0: 12");
    assert_eq!(lines[1], "depth 1: 6 11 13 18 19 20");
}

#[test]
fn test_traverse_logs_each_visit_at_debug() {
    let output = hexboard_with_log(&["traverse", "0", "--json"], "debug");
    let json = stdout_json(&output);
    assert_eq!(json.as_array().unwrap().len(), 37);

    let stderr = String::from_utf8_lossy(&output.stderr);
    let logged = stderr.lines().filter(|l| l.contains("note: visited")).count();
    assert_eq!(logged, 37);
    assert!(stderr.contains("Node 33 - note: visited"));
}

#[test]
fn test_board_json() {
    let json = stdout_json(&hexboard(&["board", "--json"]));
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 37);

    let corners = rows.iter().filter(|r| r["is_corner"] == true).count();
    assert_eq!(corners, 18);
    assert_eq!(rows[30]["degree"], 3);
}
