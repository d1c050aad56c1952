//! Zielonka's recursive algorithm for two-player parity games, with the
//! attractor computation it is built on.

pub mod arena;
pub mod attractor;
pub mod deadline;
pub mod error;
pub mod graph;
pub mod index;
pub mod priority;
pub mod solve;
pub mod zielonka;

#[cfg(test)]
mod test;

// Ordered, so that iteration and therefore the solver are deterministic.
pub type Set<T> = std::collections::BTreeSet<T>;

pub use arena::{parity_of, AccMark, Arena, Edge, Parity, Player, Priority, VertexId};
pub use deadline::{Clock, Deadline, SystemClock};
pub use error::SolveError;
pub use graph::{ParityGraph, SubArena};
pub use solve::{solve, solve_game, solve_regions, Outcome, Solution};
