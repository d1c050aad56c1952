use log::trace;

use crate::arena::{Player, VertexId};
use crate::deadline::{Clock, Deadline};
use crate::error::SolveError;
use crate::graph::{ParityGraph, SubArena};
use crate::Set;

/// Computes the attractor of `player` to `target` inside `sub`: the vertices
/// from which `player` can force the play into `target`.
///
/// Only edges between vertices of `sub` are considered. The result contains
/// `target` and is contained in `sub.all`.
pub fn attractor<G, C>(
    game: &G,
    sub: &SubArena,
    target: &Set<VertexId>,
    player: Player,
    deadline: &Deadline<C>,
) -> Result<Set<VertexId>, SolveError>
where
    G: ParityGraph,
    C: Clock,
{
    debug_assert!(target.is_subset(&sub.all));

    let own = sub.owned_by(player);
    let mut attr = target.clone();

    // Every round but the last adds a vertex, so |V| rounds always reach the fixpoint.
    for round in 0..sub.len() {
        deadline.check()?;

        let staged = sub
            .all
            .iter()
            .copied()
            .filter(|v| !attr.contains(v))
            .filter(|&v| {
                let mut succs = game.successors_of(v).filter(|u| sub.all.contains(u));
                match own.contains(&v) {
                    // The player can choose to enter.
                    true => succs.any(|u| attr.contains(&u)),
                    // The opponent is forced to enter.
                    false => succs.all(|u| attr.contains(&u)),
                }
            })
            .collect::<Set<_>>();

        if staged.is_empty() {
            trace!("Attractor of {player} reached its fixpoint after {round} rounds");
            break;
        }

        attr.extend(staged);
    }

    Ok(attr)
}
