use log::debug;

use crate::arena::{Arena, Edge, Parity, Player, Priority, VertexId};
use crate::error::SolveError;
use crate::graph::ParityGraph;
use crate::index::IndexedVec;

/// The priority of an edge leaving `src`: its single acceptance level.
pub fn edge_priority(src: VertexId, edge: &Edge) -> Result<Priority, SolveError> {
    match edge.acc.single_level() {
        Some(level) => Ok(Priority(i64::from(level))),
        None => Err(SolveError::BadAcceptance { src, dst: edge.dst, tags: edge.acc.count() }),
    }
}

/// The priority of vertex `v`: the extremal priority among its outgoing edges.
pub fn vertex_priority(arena: &Arena, v: VertexId, parity: Parity) -> Result<Priority, SolveError> {
    let mut edges = arena.edges_of(v).iter();
    let first = edges.next().ok_or(SolveError::NoSuccessors { vertex: v })?;

    edges.try_fold(edge_priority(v, first)?, |p, edge| {
        Ok(parity.extremum(p, edge_priority(v, edge)?))
    })
}

/// An arena together with the priorities of its even vertices under one
/// parity convention.
///
/// Building it validates the whole arena, so that a malformed input is
/// rejected before solving starts.
pub struct Game<'a> {
    arena: &'a Arena,
    priorities: IndexedVec<VertexId, Option<Priority>>,
}

impl<'a> Game<'a> {
    pub fn new(arena: &'a Arena, parity: Parity) -> Result<Self, SolveError> {
        let priorities = arena
            .vertices()
            .map(|v| match arena.owner_of(v) {
                Player::Even => vertex_priority(arena, v, parity).map(Some),
                Player::Odd if arena.edges_of(v).is_empty() => {
                    Err(SolveError::NoSuccessors { vertex: v })
                }
                Player::Odd => Ok(None),
            })
            .collect::<Result<IndexedVec<_, _>, _>>()?;

        debug!("Extracted {parity:?} priorities of {} vertices", priorities.len());

        Ok(Game { arena, priorities })
    }
}

impl ParityGraph for Game<'_> {
    fn vertex_count(&self) -> usize {
        self.arena.vertex_count()
    }

    fn player_of(&self, v: VertexId) -> Player {
        self.arena.owner_of(v)
    }

    fn successors_of(&self, v: VertexId) -> impl Iterator<Item = VertexId> {
        self.arena.edges_of(v).iter().map(|e| e.dst)
    }

    fn priority_of(&self, v: VertexId) -> Option<Priority> {
        self.priorities[v]
    }
}
