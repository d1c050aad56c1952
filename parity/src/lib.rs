mod conv;
mod parser;


pub use conv::arena_file_to_arena;
pub use parser::parse_arena;
use solver::{Parity, Player};

#[derive(Debug)]
pub struct Successor {
    pub id: usize,
    /// Acceptance level of the edge, if it has one.
    pub level: Option<usize>,
}

#[derive(Debug)]
pub struct Node {
    pub id: usize,
    pub owner: Player,
    pub successors: Vec<Successor>,
}

#[derive(Debug)]
pub struct ArenaFile {
    pub vertex_count: usize,
    pub start: usize,
    pub parity: Parity,
    /// The player whose win from `start` makes the game realizable.
    pub acceptance: Player,
    pub nodes: Vec<Node>,
}
