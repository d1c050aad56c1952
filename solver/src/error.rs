use std::time::Duration;

use thiserror::Error;

use crate::arena::VertexId;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("vertex {vertex} has no outgoing edges")]
    NoSuccessors { vertex: VertexId },

    #[error("edge {src} -> {dst} belongs to {tags} acceptance levels, expected exactly one")]
    BadAcceptance { src: VertexId, dst: VertexId, tags: u32 },

    #[error("even vertex {vertex} has no priority")]
    MissingPriority { vertex: VertexId },

    #[error("sink nodes detected: {} odd vertices have no even successors", remaining.len())]
    SinkDetected { remaining: Vec<VertexId> },

    #[error("deadline exceeded: {elapsed:?} elapsed, budget {budget:?}")]
    DeadlineExceeded { elapsed: Duration, budget: Duration },

    #[error("vertex {vertex} is in W0: {in_w0}, in W1: {in_w1}")]
    InconsistentPartition { vertex: VertexId, in_w0: bool, in_w1: bool },

    #[error("vertex {vertex} is not part of the arena")]
    UnknownVertex { vertex: VertexId },
}

impl SolveError {
    /// Whether the error is caused by an ill-formed arena.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            SolveError::NoSuccessors { .. }
                | SolveError::BadAcceptance { .. }
                | SolveError::MissingPriority { .. }
                | SolveError::SinkDetected { .. }
        )
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, SolveError::DeadlineExceeded { .. })
    }
}
