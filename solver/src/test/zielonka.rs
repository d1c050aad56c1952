use itertools::iproduct;
use rand::rngs::StdRng;
use rand::SeedableRng;
use test_log::test;

use super::{assert_trap, parse_arena, random_arena, set};
use crate::arena::{Parity, Player, Priority, VertexId};
use crate::deadline::Deadline;
use crate::error::SolveError;
use crate::graph::{ParityGraph, SubArena};
use crate::index::IndexedVec;
use crate::priority::Game;
use crate::solve::solve_game;
use crate::zielonka::{zielonka, Partition};
use crate::Set;

/// A game with priorities given directly rather than through edge marks.
#[derive(Default)]
struct TestGame {
    players: IndexedVec<VertexId, Player>,
    priorities: IndexedVec<VertexId, Option<Priority>>,
    successors: IndexedVec<VertexId, Vec<VertexId>>,
}

impl TestGame {
    fn new(vertices: Vec<(Player, Option<i64>, Vec<usize>)>) -> Self {
        let mut game = TestGame::default();
        for (player, priority, successors) in vertices {
            game.players.push(player);
            game.priorities.push(priority.map(Priority));
            game.successors.push(successors.into_iter().map(VertexId).collect());
        }
        game
    }
}

impl ParityGraph for TestGame {
    fn vertex_count(&self) -> usize {
        self.players.len()
    }

    fn player_of(&self, v: VertexId) -> Player {
        self.players[v]
    }

    fn successors_of(&self, v: VertexId) -> impl Iterator<Item = VertexId> {
        self.successors[v].iter().copied()
    }

    fn priority_of(&self, v: VertexId) -> Option<Priority> {
        self.priorities[v]
    }
}

fn index(player: Player) -> usize {
    match player {
        Player::Even => 0,
        Player::Odd => 1,
    }
}

fn naive_attractor(
    game: &impl ParityGraph,
    all: &Set<VertexId>,
    mut attr: Set<VertexId>,
    player: Player,
) -> Set<VertexId> {
    loop {
        let before = attr.len();
        for &v in all {
            let succs = game.successors_of(v).filter(|u| all.contains(u)).collect::<Vec<_>>();
            let enters = match game.player_of(v) == player {
                true => succs.iter().any(|u| attr.contains(u)),
                false => succs.iter().all(|u| attr.contains(u)),
            };
            if enters {
                attr.insert(v);
            }
        }
        if attr.len() == before {
            return attr;
        }
    }
}

/// Textbook recursive Zielonka, returning `[W0, W1]`.
fn reference(game: &impl ParityGraph, all: Set<VertexId>, parity: Parity) -> [Set<VertexId>; 2] {
    let even = all.iter().copied().filter(|&v| game.player_of(v) == Player::Even);
    let Some(m) =
        even.clone().map(|v| game.priority_of(v).unwrap()).reduce(|a, b| parity.extremum(a, b))
    else {
        assert!(all.is_empty());
        return [Set::new(), Set::new()];
    };

    let (i, j) = (index(m.player()), index(m.player().opponent()));
    let top = even.filter(|&v| game.priority_of(v) == Some(m)).collect();
    let attr = naive_attractor(game, &all, top, m.player());

    let mut w = reference(game, all.difference(&attr).copied().collect(), parity);
    if w[j].is_empty() {
        w[i].extend(attr);
        return w;
    }

    let escape = naive_attractor(game, &all, w[j].clone(), m.player().opponent());
    let mut w = reference(game, all.difference(&escape).copied().collect(), parity);
    w[j].extend(escape);
    w
}

const SPLIT: &str = "
    0 1 1;
    1 0 0@2,2@1;
    2 1 3;
    3 0 2@1;
    4 1 5,3;
    5 0 4@0;
";

#[test]
fn split_regions() {
    let arena = parse_arena(SPLIT);
    let game = Game::new(&arena, Parity::Max).unwrap();
    let sub = SubArena::full(&game);

    let partition = zielonka(&game, sub, Parity::Max, &Deadline::none()).unwrap();
    assert_eq!(
        partition,
        Partition { supported: set([0, 1]), other: set([2, 3, 4, 5]), player: Some(Player::Even) }
    );
    assert_eq!(partition.into_regions(), (set([0, 1]), set([2, 3, 4, 5])));
}

#[test]
fn empty_sub_arena() {
    let arena = parse_arena(SPLIT);
    let game = Game::new(&arena, Parity::Max).unwrap();

    let partition = zielonka(&game, SubArena::default(), Parity::Max, &Deadline::none()).unwrap();
    assert_eq!(partition, Partition::default());
}

#[test]
fn oriented_swaps_for_the_opponent() {
    let partition =
        Partition { supported: set([0]), other: set([1]), player: Some(Player::Odd) };

    assert_eq!(partition.clone().oriented(Player::Odd), (set([0]), set([1])));
    assert_eq!(partition.clone().oriented(Player::Even), (set([1]), set([0])));
    assert_eq!(partition.into_regions(), (set([1]), set([0])));
}

#[test]
fn negative_priorities() {
    let game = TestGame::new(vec![
        (Player::Even, Some(-3), vec![1]),
        (Player::Odd, None, vec![0]),
        (Player::Even, Some(-2), vec![3]),
        (Player::Odd, None, vec![2]),
    ]);

    let solution = solve_game(&game, Parity::Max, &Deadline::none()).unwrap();
    assert_eq!(solution.w0, set([2, 3]));
    assert_eq!(solution.w1, set([0, 1]));

    // Under parity min -3 is the most relevant priority, but the components
    // are independent.
    let solution = solve_game(&game, Parity::Min, &Deadline::none()).unwrap();
    assert_eq!(solution.w0, set([2, 3]));
    assert_eq!(solution.w1, set([0, 1]));
}

#[test]
fn odd_only_sub_arena_is_a_sink() {
    let game = TestGame::new(vec![(Player::Odd, None, vec![0])]);

    let err = zielonka(&game, SubArena::full(&game), Parity::Max, &Deadline::none()).unwrap_err();
    assert_eq!(err, SolveError::SinkDetected { remaining: vec![VertexId(0)] });
}

#[test]
fn sink_found_after_removing_an_attractor() {
    // 1 and 2 only move between each other and never meet a priority.
    let game = TestGame::new(vec![
        (Player::Even, Some(0), vec![1]),
        (Player::Odd, None, vec![2]),
        (Player::Odd, None, vec![1]),
    ]);

    let err = solve_game(&game, Parity::Max, &Deadline::none()).unwrap_err();
    assert_eq!(err, SolveError::SinkDetected { remaining: vec![VertexId(1), VertexId(2)] });
    assert!(err.is_malformed());
}

#[test]
fn missing_priority() {
    let game = TestGame::new(vec![(Player::Even, None, vec![1]), (Player::Odd, None, vec![0])]);

    let err = solve_game(&game, Parity::Max, &Deadline::none()).unwrap_err();
    assert_eq!(err, SolveError::MissingPriority { vertex: VertexId(0) });
}

#[test]
fn matches_recursive_reference() {
    let mut rng = StdRng::seed_from_u64(42);

    for (_, parity) in iproduct!(0..100, [Parity::Max, Parity::Min]) {
        let arena = random_arena(&mut rng, 10, 15, 8);
        let game = Game::new(&arena, parity).unwrap();

        let solution = solve_game(&game, parity, &Deadline::none()).unwrap();
        let [w0, w1] = reference(&game, game.vertices().collect(), parity);

        assert_eq!(solution.w0, w0);
        assert_eq!(solution.w1, w1);

        assert_trap(&game, &solution.w0, Player::Even);
        assert_trap(&game, &solution.w1, Player::Odd);
    }
}
