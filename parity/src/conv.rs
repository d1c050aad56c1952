use anyhow::{bail, Context, Result};
use solver::index::IndexedSet;
use solver::{AccMark, Arena, Player, VertexId};

use crate::ArenaFile;

/// Builds the arena described by `file`, together with its start vertex and
/// the file id of every vertex.
pub fn arena_file_to_arena(
    file: &ArenaFile,
) -> Result<(Arena, VertexId, IndexedSet<VertexId, usize>)> {
    if file.vertex_count != file.nodes.len() {
        bail!("Header declares {} vertices but {} are listed", file.vertex_count, file.nodes.len())
    }

    let mut ids = IndexedSet::<VertexId, usize>::default();
    let mut arena = Arena::new();
    for node in &file.nodes {
        let (_, is_new) = ids.insert_full(node.id);
        if !is_new {
            bail!("Vertex {} is declared twice", node.id)
        }
        arena.add_vertex(node.owner);
    }

    for (i, node) in file.nodes.iter().enumerate() {
        let v = VertexId(i);
        for succ in &node.successors {
            let dst = ids
                .get_index_of(&succ.id)
                .with_context(|| format!("Vertex {} has unknown successor {}", node.id, succ.id))?;

            let acc = match (node.owner, succ.level) {
                (Player::Even, Some(level)) if level < AccMark::MAX_LEVELS => AccMark::level(level),
                (Player::Even, Some(level)) => {
                    bail!("Edge {} -> {} has level {level}, which is out of range", node.id, succ.id)
                }
                // Left to the solver, which reports it as a malformed edge.
                (Player::Even, None) => AccMark::EMPTY,
                (Player::Odd, Some(level)) => {
                    bail!("Edge {} -> {} of odd vertex has level {level}", node.id, succ.id)
                }
                (Player::Odd, None) => AccMark::EMPTY,
            };

            arena.add_edge(v, dst, acc);
        }
    }

    let start = ids
        .get_index_of(&file.start)
        .with_context(|| format!("Start vertex {} doesn't exist", file.start))?;

    Ok((arena, start, ids))
}
