use crate::arena::{Player, Priority, VertexId};
use crate::Set;

/// Read-only view of a parity game, as consumed by the solver.
pub trait ParityGraph {
    fn vertex_count(&self) -> usize;

    fn player_of(&self, v: VertexId) -> Player;

    fn successors_of(&self, v: VertexId) -> impl Iterator<Item = VertexId>;

    /// The priority of `v`. Only even vertices have one.
    fn priority_of(&self, v: VertexId) -> Option<Priority>;

    fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertex_count()).map(VertexId)
    }
}

/// The vertices of the induced sub-arena a solver step works on.
///
/// `even` and `odd` always partition `all`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubArena {
    pub all: Set<VertexId>,
    pub even: Set<VertexId>,
    pub odd: Set<VertexId>,
}

impl SubArena {
    pub fn new(all: Set<VertexId>, even: Set<VertexId>) -> Self {
        debug_assert!(even.is_subset(&all));
        let odd = all.difference(&even).copied().collect();
        SubArena { all, even, odd }
    }

    /// The whole game.
    pub fn full(game: &impl ParityGraph) -> Self {
        let all = game.vertices().collect::<Set<_>>();
        let even = all.iter().copied().filter(|&v| game.player_of(v) == Player::Even).collect();
        SubArena::new(all, even)
    }

    /// The sub-arena induced by the vertices not in `removed`.
    pub fn without(&self, removed: &Set<VertexId>) -> Self {
        SubArena {
            all: self.all.difference(removed).copied().collect(),
            even: self.even.difference(removed).copied().collect(),
            odd: self.odd.difference(removed).copied().collect(),
        }
    }

    pub fn owned_by(&self, player: Player) -> &Set<VertexId> {
        match player {
            Player::Even => &self.even,
            Player::Odd => &self.odd,
        }
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}
