mod zielonka;

use std::cell::Cell;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::Rng;

use crate::arena::{AccMark, Arena, Player, VertexId};
use crate::deadline::Clock;
use crate::graph::ParityGraph;
use crate::Set;

/// Parses rows of the form `<id> <owner> <succ>[@<level>],...;`, with owner
/// `0` for even and `1` for odd. Ids must be `0..n` in order.
fn parse_arena(source: &str) -> Arena {
    let mut arena = Arena::new();

    let rows = source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let rest = line.strip_suffix(';').unwrap();
            let (id, rest) = rest.split_once(' ').unwrap();
            let (owner, successors) = rest.split_once(' ').unwrap_or((rest, ""));

            let id = id.parse::<usize>().unwrap();
            let owner = if owner == "0" { Player::Even } else { Player::Odd };
            let successors = successors
                .split(',')
                .filter(|s| !s.is_empty())
                .map(|s| match s.split_once('@') {
                    Some((dst, level)) => {
                        (dst.parse::<usize>().unwrap(), AccMark::level(level.parse().unwrap()))
                    }
                    None => (s.parse::<usize>().unwrap(), AccMark::EMPTY),
                })
                .collect::<Vec<_>>();

            assert_eq!(arena.add_vertex(owner), VertexId(id));
            successors
        })
        .collect::<Vec<_>>();

    for (src, successors) in rows.into_iter().enumerate() {
        for (dst, acc) in successors {
            arena.add_edge(VertexId(src), VertexId(dst), acc);
        }
    }

    arena
}

fn set(ids: impl IntoIterator<Item = usize>) -> Set<VertexId> {
    ids.into_iter().map(VertexId).collect()
}

/// A total bipartite arena with `odd` odd vertices followed by `even` even
/// vertices, each with one to three successors.
fn random_arena(rng: &mut StdRng, odd: usize, even: usize, levels: usize) -> Arena {
    let mut arena = Arena::new();
    let odds = (0..odd).map(|_| arena.add_vertex(Player::Odd)).collect::<Vec<_>>();
    let evens = (0..even).map(|_| arena.add_vertex(Player::Even)).collect::<Vec<_>>();

    for &u in &odds {
        for _ in 0..rng.gen_range(1..=3) {
            let v = evens[rng.gen_range(0..even)];
            arena.add_edge(u, v, AccMark::EMPTY);
        }
    }

    for &u in &evens {
        for _ in 0..rng.gen_range(1..=3) {
            let v = odds[rng.gen_range(0..odd)];
            arena.add_edge(u, v, AccMark::level(rng.gen_range(0..levels)));
        }
    }

    arena
}

/// Checks that `region` is a trap for the opponent of `player`: the player
/// can always stay and the opponent can never leave.
fn assert_trap(game: &impl ParityGraph, region: &Set<VertexId>, player: Player) {
    for &v in region {
        let mut succs = game.successors_of(v);
        if game.player_of(v) == player {
            assert!(succs.any(|u| region.contains(&u)), "{player} cannot stay from {v}");
        } else {
            assert!(succs.all(|u| region.contains(&u)), "{} can leave from {v}", player.opponent());
        }
    }
}

/// A clock that only moves when told to.
struct ManualClock {
    now: Cell<Instant>,
}

impl ManualClock {
    fn new() -> Self {
        ManualClock { now: Cell::new(Instant::now()) }
    }

    fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// A clock that moves forward by a fixed step every time it is read.
struct TickingClock {
    now: Cell<Instant>,
    step: Duration,
}

impl TickingClock {
    fn new(step: Duration) -> Self {
        TickingClock { now: Cell::new(Instant::now()), step }
    }
}

impl Clock for TickingClock {
    fn now(&self) -> Instant {
        let now = self.now.get();
        self.now.set(now + self.step);
        now
    }
}
