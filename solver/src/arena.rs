use std::fmt;

use crate::index::{new_index, AsIndex, IndexedVec};

new_index!(pub index VertexId);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Player {
    /// Player 0, the player whose vertices carry priorities.
    Even,
    /// Player 1, owning the unlabelled vertices.
    Odd,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Even => Player::Odd,
            Player::Odd => Player::Even,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Even => f.write_str("even"),
            Player::Odd => f.write_str("odd"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(pub i64);

impl Priority {
    pub fn player(self) -> Player {
        parity_of(self)
    }
}

/// The player favoured by plays whose deciding priority is `priority`.
pub fn parity_of(priority: Priority) -> Player {
    match priority.0.rem_euclid(2) {
        0 => Player::Even,
        _ => Player::Odd,
    }
}

/// Which extremal priority seen infinitely often decides a play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parity {
    Max,
    Min,
}

impl Parity {
    pub fn extremum(self, a: Priority, b: Priority) -> Priority {
        match self {
            Parity::Max => a.max(b),
            Parity::Min => a.min(b),
        }
    }
}

/// Set of acceptance levels an edge belongs to.
///
/// Edges leaving an even vertex must belong to exactly one level, which is
/// the priority of the edge.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AccMark(u64);

impl AccMark {
    pub const EMPTY: AccMark = AccMark(0);
    pub const MAX_LEVELS: usize = u64::BITS as usize;

    /// The mark containing only `level`. Panics if `level >= MAX_LEVELS`.
    pub fn level(level: usize) -> AccMark {
        assert!(level < Self::MAX_LEVELS, "acceptance level {level} out of range");
        AccMark(1 << level)
    }

    pub fn from_bits(bits: u64) -> AccMark {
        AccMark(bits)
    }

    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// The only level in this mark, if there is exactly one.
    pub fn single_level(self) -> Option<u32> {
        match self.count() {
            1 => Some(self.0.trailing_zeros()),
            _ => None,
        }
    }
}

impl fmt::Debug for AccMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let levels = (0..u64::BITS).filter(|&l| self.0 & (1 << l) != 0);
        f.debug_set().entries(levels).finish()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub dst: VertexId,
    pub acc: AccMark,
}

/// An explicit game arena, as delivered by arena construction.
///
/// The solver only ever borrows it immutably.
#[derive(Clone, Debug, Default)]
pub struct Arena {
    owners: IndexedVec<VertexId, Player>,
    edges: IndexedVec<VertexId, Vec<Edge>>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, owner: Player) -> VertexId {
        self.edges.push(Vec::new());
        self.owners.push(owner)
    }

    pub fn add_edge(&mut self, src: VertexId, dst: VertexId, acc: AccMark) {
        assert!(self.contains(dst), "edge {src} -> {dst} leads to an unknown vertex");
        self.edges[src].push(Edge { dst, acc });
    }

    pub fn vertex_count(&self) -> usize {
        self.owners.len()
    }

    pub fn contains(&self, v: VertexId) -> bool {
        v.to_usize() < self.owners.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        self.owners.indexes()
    }

    pub fn owner_of(&self, v: VertexId) -> Player {
        self.owners[v]
    }

    pub fn edges_of(&self, v: VertexId) -> &[Edge] {
        &self.edges[v]
    }
}
