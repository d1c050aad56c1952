use log::{debug, trace};

use crate::arena::{Parity, Player, Priority, VertexId};
use crate::attractor::attractor;
use crate::deadline::{Clock, Deadline};
use crate::error::SolveError;
use crate::graph::{ParityGraph, SubArena};
use crate::Set;

/// The result of solving a sub-arena.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    /// Region won by `player`.
    pub supported: Set<VertexId>,
    /// Region won by the opponent of `player`.
    pub other: Set<VertexId>,
    /// The player supported by the step that produced this partition, `None`
    /// for an empty sub-arena.
    pub player: Option<Player>,
}

impl Partition {
    /// The regions won by `player` and by its opponent, in this order.
    pub fn oriented(self, player: Player) -> (Set<VertexId>, Set<VertexId>) {
        match self.player {
            Some(p) if p != player => (self.other, self.supported),
            _ => (self.supported, self.other),
        }
    }

    /// The regions won by `Even` and `Odd`, in this order.
    pub fn into_regions(self) -> (Set<VertexId>, Set<VertexId>) {
        self.oriented(Player::Even)
    }
}

enum Task {
    /// Solve a sub-arena and push its partition on the result stack.
    Solve(SubArena),
    /// Combine the solution of `sub \ attr` with the supported player's attractor `attr`.
    Combine { sub: SubArena, attr: Set<VertexId>, player: Player },
    /// Add the opponent's attractor `attr` to the solution of `sub \ attr`.
    Escape { attr: Set<VertexId>, player: Player },
}

/// Partitions `sub` into the regions won by each player using Zielonka's
/// algorithm.
///
/// The two nested solves of each step are driven by an explicit stack
/// rather than native recursion, so deep decompositions do not grow the
/// thread stack.
pub fn zielonka<G, C>(
    game: &G,
    sub: SubArena,
    parity: Parity,
    deadline: &Deadline<C>,
) -> Result<Partition, SolveError>
where
    G: ParityGraph,
    C: Clock,
{
    let mut tasks = vec![Task::Solve(sub)];
    let mut results = Vec::<Partition>::new();
    let mut steps = 0usize;

    while let Some(task) = tasks.pop() {
        match task {
            Task::Solve(sub) => {
                deadline.check()?;
                steps += 1;

                if sub.even.is_empty() {
                    // Any vertex left only has odd vertices to move to, or none at all.
                    if !sub.is_empty() {
                        return Err(SolveError::SinkDetected {
                            remaining: sub.all.into_iter().collect(),
                        });
                    }
                    results.push(Partition::default());
                    continue;
                }

                let m = extremal_priority(game, &sub, parity)?;
                let player = m.player();
                let top = sub
                    .even
                    .iter()
                    .copied()
                    .filter(|&v| game.priority_of(v) == Some(m))
                    .collect::<Set<_>>();

                trace!("V = {:?}", sub.all);
                trace!("m = {m:?}, player = {player}, M = {top:?}");

                let attr = attractor(game, &sub, &top, player, deadline)?;
                trace!("R = {attr:?}");

                let rest = sub.without(&attr);
                tasks.push(Task::Combine { sub, attr, player });
                tasks.push(Task::Solve(rest));
            }
            Task::Combine { sub, attr, player } => {
                let (mut won, lost) = pop(&mut results).oriented(player);

                if lost.is_empty() {
                    // The opponent cannot escape anywhere in the residual game.
                    won.extend(attr);
                    results.push(Partition { supported: won, other: lost, player: Some(player) });
                    continue;
                }

                let opponent = player.opponent();
                let escape = attractor(game, &sub, &lost, opponent, deadline)?;
                trace!("S = {escape:?}");

                let rest = sub.without(&escape);
                tasks.push(Task::Escape { attr: escape, player });
                tasks.push(Task::Solve(rest));
            }
            Task::Escape { attr, player } => {
                let (won, mut lost) = pop(&mut results).oriented(player);
                lost.extend(attr);
                results.push(Partition { supported: won, other: lost, player: Some(player) });
            }
        }
    }

    debug!("Zielonka performed {steps} steps");

    Ok(pop(&mut results))
}

fn pop(results: &mut Vec<Partition>) -> Partition {
    results.pop().expect("every solve task pushes exactly one partition")
}

fn extremal_priority<G: ParityGraph>(
    game: &G,
    sub: &SubArena,
    parity: Parity,
) -> Result<Priority, SolveError> {
    let mut extremum = None;
    for &v in &sub.even {
        let p = game.priority_of(v).ok_or(SolveError::MissingPriority { vertex: v })?;
        extremum = Some(match extremum {
            Some(m) => parity.extremum(m, p),
            None => p,
        });
    }

    // Callers only ask for non-empty sets of even vertices.
    extremum.ok_or(SolveError::SinkDetected { remaining: sub.all.iter().copied().collect() })
}
