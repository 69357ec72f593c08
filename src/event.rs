use crate::node::{CellState, Node};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EventKind {
    /// The node was discovered and pushed onto the frontier.
    Visited,
    /// The node is part of the final path.
    PathStep,
}

impl EventKind {
    /// The state a cell takes when the event is revealed.
    pub fn target_state(self) -> CellState {
        match self {
            EventKind::Visited => CellState::Visited,
            EventKind::PathStep => CellState::PathMarked,
        }
    }

    /// Whether a cell currently in `state` may be recolored by this kind of event. Start, end
    /// and walls never are.
    pub fn may_recolor(self, state: CellState) -> bool {
        match self {
            EventKind::Visited => state == CellState::Empty,
            EventKind::PathStep => matches!(state, CellState::Empty | CellState::Visited),
        }
    }
}

/// An instruction to recolor one cell, `delay_ms` after the previous event of the same run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VisualizationEvent {
    pub kind: EventKind,
    pub node: Node,
    pub delay_ms: u64,
}

impl VisualizationEvent {
    pub fn visited(node: Node, delay_ms: u64) -> VisualizationEvent {
        VisualizationEvent {
            kind: EventKind::Visited,
            node,
            delay_ms,
        }
    }
    pub fn path_step(node: Node, delay_ms: u64) -> VisualizationEvent {
        VisualizationEvent {
            kind: EventKind::PathStep,
            node,
            delay_ms,
        }
    }
}

/// A single cell recolor as handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellChange {
    pub row: i32,
    pub col: i32,
    pub from: CellState,
    pub to: CellState,
    /// Virtual time at which the change was applied.
    pub at_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guards_protect_fixed_cells() {
        for kind in [EventKind::Visited, EventKind::PathStep] {
            for state in [CellState::Start, CellState::End, CellState::Wall] {
                assert!(!kind.may_recolor(state));
            }
            assert!(kind.may_recolor(CellState::Empty));
            assert!(!kind.may_recolor(kind.target_state()));
        }
        assert!(EventKind::PathStep.may_recolor(CellState::Visited));
        assert!(!EventKind::Visited.may_recolor(CellState::PathMarked));
    }
}
