//! Terminal inspection commands: `board`, `neighbors`, `traverse`

use anyhow::Result;
use clap::Args;
use hexboard_core::{hover_highlight, log_visit, Graph, Position, Step};
use serde::Serialize;

#[derive(Args)]
pub struct BoardArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct NeighborsArgs {
    /// Pip index (0-36)
    pub index: usize,

    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct TraverseArgs {
    /// Start pip index (0-36)
    pub start: usize,

    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct BoardRow {
    index: usize,
    title: String,
    x: f32,
    y: f32,
    is_corner: bool,
    degree: usize,
}

fn board_rows(graph: &Graph) -> Vec<BoardRow> {
    graph
        .nodes()
        .iter()
        .zip(graph.positions())
        .map(|(node, pos)| BoardRow {
            index: node.index.index(),
            title: Position::title(node.index.index()),
            x: pos.x,
            y: pos.y,
            is_corner: pos.is_corner,
            degree: node.degree(),
        })
        .collect()
}

fn walk(graph: &Graph, start: usize) -> Result<Vec<Step>> {
    Ok(graph.bfs(start)?.steps())
}

pub fn run_board(args: BoardArgs) -> Result<()> {
    let rows = board_rows(&Graph::standard());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{:>5}  {:<12} {:>6} {:>6}  {:<6} {}", "index", "title", "x", "y", "corner", "degree");
    for row in &rows {
        println!(
            "{:>5}  {:<12} {:>6.1} {:>6.1}  {:<6} {}",
            row.index, row.title, row.x, row.y, row.is_corner, row.degree
        );
    }
    Ok(())
}

pub fn run_neighbors(args: NeighborsArgs) -> Result<()> {
    let highlight = hover_highlight(args.index)?;

    if args.json {
        println!("{}", serde_json::to_string(&highlight)?);
    } else {
        let list: Vec<String> = highlight.neighbors.iter().map(ToString::to_string).collect();
        println!("{} -> [{}]", highlight.focus, list.join(", "));
    }
    Ok(())
}

pub fn run_traverse(args: TraverseArgs) -> Result<()> {
    let graph = Graph::standard();
    let steps = walk(&graph, args.start)?;
    for step in &steps {
        log_visit(graph.node(step.index)?, "visited");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }

    let mut depth = None;
    for step in &steps {
        if depth != Some(step.depth) {
            if depth.is_some() {
                println!();
            }
            print!("depth {}:", step.depth);
            depth = Some(step.depth);
        }
        print!(" {}", step.index);
    }
    println!();
    Ok(())
}
