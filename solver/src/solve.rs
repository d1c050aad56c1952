use log::debug;

use crate::arena::{Arena, Parity, Player, VertexId};
use crate::deadline::{Clock, Deadline};
use crate::error::SolveError;
use crate::graph::{ParityGraph, SubArena};
use crate::index::{AsIndex, IndexedVec};
use crate::priority::Game;
use crate::zielonka::zielonka;
use crate::Set;

/// The winning regions of a whole game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    pub w0: Set<VertexId>,
    pub w1: Set<VertexId>,
}

impl Solution {
    /// The winner from `v`, failing unless `v` is in exactly one region.
    pub fn winner_of(&self, v: VertexId) -> Result<Player, SolveError> {
        match (self.w0.contains(&v), self.w1.contains(&v)) {
            (true, false) => Ok(Player::Even),
            (false, true) => Ok(Player::Odd),
            (in_w0, in_w1) => Err(SolveError::InconsistentPartition { vertex: v, in_w0, in_w1 }),
        }
    }

    /// Checks that the regions partition the vertices `0..vertex_count`.
    pub fn validate(&self, vertex_count: usize) -> Result<(), SolveError> {
        for v in (0..vertex_count).map(VertexId) {
            self.winner_of(v)?;
        }

        let stray = self.w0.iter().chain(&self.w1).find(|v| v.to_usize() >= vertex_count);
        match stray {
            Some(&vertex) => Err(SolveError::InconsistentPartition {
                vertex,
                in_w0: self.w0.contains(&vertex),
                in_w1: self.w1.contains(&vertex),
            }),
            None => Ok(()),
        }
    }

    /// The winner of every vertex, indexed by vertex.
    pub fn state_winners(
        &self,
        vertex_count: usize,
    ) -> Result<IndexedVec<VertexId, Player>, SolveError> {
        (0..vertex_count).map(|v| self.winner_of(VertexId(v))).collect()
    }
}

/// The outcome of a solve from a start vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub winner: Player,
    pub solution: Solution,
}

/// Solves `arena` under `parity` and reports who wins from `start`.
pub fn solve<C: Clock>(
    arena: &Arena,
    parity: Parity,
    start: VertexId,
    deadline: &Deadline<C>,
) -> Result<Outcome, SolveError> {
    if !arena.contains(start) {
        return Err(SolveError::UnknownVertex { vertex: start });
    }

    let solution = solve_regions(arena, parity, deadline)?;
    let winner = solution.winner_of(start)?;

    debug!("Player {winner} wins from vertex {start}");

    Ok(Outcome { winner, solution })
}

/// Computes the winning regions of every vertex of `arena` under `parity`.
pub fn solve_regions<C: Clock>(
    arena: &Arena,
    parity: Parity,
    deadline: &Deadline<C>,
) -> Result<Solution, SolveError> {
    let game = Game::new(arena, parity)?;
    solve_game(&game, parity, deadline)
}

/// Computes the winning regions of any game exposing priorities directly.
pub fn solve_game<G, C>(
    game: &G,
    parity: Parity,
    deadline: &Deadline<C>,
) -> Result<Solution, SolveError>
where
    G: ParityGraph,
    C: Clock,
{
    let sub = SubArena::full(game);
    debug!("Solving {} vertices ({} even) under parity {parity:?}", sub.len(), sub.even.len());

    let (w0, w1) = zielonka(game, sub, parity, deadline)?.into_regions();
    let solution = Solution { w0, w1 };
    solution.validate(game.vertex_count())?;

    debug!(
        "|W0| = {}, |W1| = {}, solved in {:?}",
        solution.w0.len(),
        solution.w1.len(),
        deadline.elapsed()
    );

    Ok(solution)
}
