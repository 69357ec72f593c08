//! Deferred reveal of search progress.
//!
//! A search computes its whole run eagerly and hands back an ordered list of
//! [VisualizationEvent]s. The [Scheduler] keeps those events in one queue and releases them
//! against a virtual clock: each event becomes due `delay_ms` after the event before it, and
//! [advance](Scheduler::advance) applies everything that is due, in order, to the grid. Every
//! effective recolor is handed to a [Renderer] as a [CellChange].
//!
//! Applying an event only recolors a cell whose current state still allows it (see
//! [EventKind::may_recolor](crate::event::EventKind::may_recolor)), so start, end and wall
//! cells survive any stale event and replaying an event is harmless. Edits made to the grid
//! while events are pending are not otherwise coordinated with the queue.
use log::{debug, warn};
use std::collections::VecDeque;

use crate::event::{CellChange, VisualizationEvent};
use crate::grid::Grid;

/// Receives cell recolors as they are revealed.
pub trait Renderer {
    fn apply(&mut self, change: &CellChange);
}

impl Renderer for Vec<CellChange> {
    fn apply(&mut self, change: &CellChange) {
        self.push(*change);
    }
}

/// Discards every change.
impl Renderer for () {
    fn apply(&mut self, _: &CellChange) {}
}

#[derive(Clone, Copy, Debug)]
struct ScheduledEvent {
    due_ms: u64,
    event: VisualizationEvent,
}

#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    queue: VecDeque<ScheduledEvent>,
    now_ms: u64,
    last_due_ms: u64,
}

impl Scheduler {
    pub fn new() -> Scheduler {
        Scheduler::default()
    }

    /// Appends events behind anything still pending. Returns the virtual time at which the last
    /// of them becomes due.
    pub fn schedule<I>(&mut self, events: I) -> u64
    where
        I: IntoIterator<Item = VisualizationEvent>,
    {
        let mut cursor = self.last_due_ms.max(self.now_ms);
        let before = self.queue.len();
        for event in events {
            cursor = cursor.saturating_add(event.delay_ms);
            self.queue.push_back(ScheduledEvent {
                due_ms: cursor,
                event,
            });
        }
        self.last_due_ms = cursor;
        debug!(
            "Scheduled {} events, queue ends at {} ms",
            self.queue.len() - before,
            cursor
        );
        cursor
    }

    /// Moves the clock forward by `elapsed_ms` and applies every event that is due. Returns the
    /// number of cells actually recolored.
    pub fn advance<R: Renderer + ?Sized>(
        &mut self,
        elapsed_ms: u64,
        grid: &mut Grid,
        renderer: &mut R,
    ) -> usize {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
        let mut applied = 0;
        while let Some(scheduled) = self.queue.front().copied() {
            if scheduled.due_ms > self.now_ms {
                break;
            }
            self.queue.pop_front();
            if apply_event(&scheduled.event, scheduled.due_ms, grid, renderer) {
                applied += 1;
            }
        }
        applied
    }

    /// Applies every pending event, moving the clock to the end of the queue.
    pub fn drain<R: Renderer + ?Sized>(&mut self, grid: &mut Grid, renderer: &mut R) -> usize {
        let remaining = self.remaining_ms();
        self.advance(remaining, grid, renderer)
    }

    /// Drops every pending event and returns how many were dropped.
    pub fn cancel(&mut self) -> usize {
        let dropped = self.queue.len();
        self.queue.clear();
        self.last_due_ms = self.now_ms;
        if dropped > 0 {
            debug!("Cancelled {} pending events", dropped);
        }
        dropped
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }
    /// Virtual time left until the last pending event is due.
    pub fn remaining_ms(&self) -> u64 {
        self.last_due_ms.saturating_sub(self.now_ms)
    }
    /// Virtual time at which everything scheduled so far has been revealed, counted from the
    /// scheduler's creation.
    pub fn total_duration_ms(&self) -> u64 {
        self.last_due_ms.max(self.now_ms)
    }
}

fn apply_event<R: Renderer + ?Sized>(
    event: &VisualizationEvent,
    at_ms: u64,
    grid: &mut Grid,
    renderer: &mut R,
) -> bool {
    let p = event.node.point();
    let Some(current) = grid.state_at(p) else {
        warn!(
            "Dropping {:?} event for ({}, {}): outside the grid",
            event.kind, event.node.row, event.node.col
        );
        return false;
    };
    if !event.kind.may_recolor(current) {
        return false;
    }
    let to = event.kind.target_state();
    grid.set_state_at(p, to);
    renderer.apply(&CellChange {
        row: event.node.row,
        col: event.node.col,
        from: current,
        to,
        at_ms,
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{CellState, Node};

    fn grid_3() -> Grid {
        Grid::with_endpoints(3, (0, 0), (2, 2)).unwrap()
    }

    fn visited(row: i32, col: i32) -> VisualizationEvent {
        VisualizationEvent::visited(Node::new(row, col, CellState::Empty), 5)
    }

    #[test]
    fn releases_events_by_virtual_time() {
        let mut grid = grid_3();
        let mut scheduler = Scheduler::new();
        let end = scheduler.schedule([visited(0, 1), visited(1, 0), visited(1, 1)]);
        assert_eq!(end, 15);
        let mut changes: Vec<CellChange> = vec![];
        assert_eq!(scheduler.advance(4, &mut grid, &mut changes), 0);
        assert_eq!(scheduler.advance(1, &mut grid, &mut changes), 1);
        assert_eq!(scheduler.advance(10, &mut grid, &mut changes), 2);
        assert!(scheduler.is_idle());
        let cells = changes
            .iter()
            .map(|c| (c.row, c.col, c.at_ms))
            .collect::<Vec<_>>();
        assert_eq!(cells, vec![(0, 1, 5), (1, 0, 10), (1, 1, 15)]);
        assert_eq!(grid.count(CellState::Visited), 3);
    }

    #[test]
    fn never_recolors_fixed_cells() {
        let mut grid = grid_3();
        grid.set_wall(1, 1, true);
        let mut scheduler = Scheduler::new();
        let end = grid.end();
        scheduler.schedule([
            visited(0, 0),
            visited(1, 1),
            VisualizationEvent::path_step(end, 5),
            visited(7, 7),
        ]);
        let mut changes: Vec<CellChange> = vec![];
        assert_eq!(scheduler.drain(&mut grid, &mut changes), 0);
        assert!(changes.is_empty());
        assert_eq!(grid.state(0, 0), Some(CellState::Start));
        assert_eq!(grid.state(1, 1), Some(CellState::Wall));
        assert_eq!(grid.state(2, 2), Some(CellState::End));
    }

    #[test]
    fn path_step_overrides_visited_once() {
        let mut grid = grid_3();
        let mut scheduler = Scheduler::new();
        let cell = Node::new(0, 1, CellState::Empty);
        scheduler.schedule([
            VisualizationEvent::visited(cell, 5),
            VisualizationEvent::path_step(cell, 5),
            VisualizationEvent::path_step(cell, 5),
            VisualizationEvent::visited(cell, 5),
        ]);
        let mut changes: Vec<CellChange> = vec![];
        assert_eq!(scheduler.drain(&mut grid, &mut changes), 2);
        assert_eq!(grid.state(0, 1), Some(CellState::PathMarked));
        assert_eq!(changes[1].from, CellState::Visited);
    }

    #[test]
    fn later_runs_queue_behind_pending_events() {
        let mut grid = grid_3();
        let mut scheduler = Scheduler::new();
        scheduler.schedule([visited(0, 1)]);
        scheduler.advance(2, &mut grid, &mut ());
        assert_eq!(scheduler.schedule([visited(1, 0)]), 10);
        assert_eq!(scheduler.remaining_ms(), 8);
    }

    #[test]
    fn cancel_drops_pending_events() {
        let mut grid = grid_3();
        let mut scheduler = Scheduler::new();
        scheduler.schedule([visited(0, 1), visited(1, 0)]);
        scheduler.advance(5, &mut grid, &mut ());
        assert_eq!(scheduler.cancel(), 1);
        assert_eq!(scheduler.remaining_ms(), 0);
        assert_eq!(scheduler.drain(&mut grid, &mut ()), 0);
        assert_eq!(grid.state(1, 0), Some(CellState::Empty));
        assert_eq!(scheduler.schedule([visited(1, 0)]), 10);
    }

    #[test]
    fn duration_sums_delays() {
        let mut grid = grid_3();
        let mut scheduler = Scheduler::new();
        assert_eq!(scheduler.total_duration_ms(), 0);
        scheduler.schedule([visited(0, 1), visited(1, 0)]);
        assert_eq!(scheduler.total_duration_ms(), 10);
        scheduler.advance(3, &mut grid, &mut ());
        scheduler.schedule([visited(1, 1)]);
        assert_eq!(scheduler.total_duration_ms(), 15);
        scheduler.drain(&mut grid, &mut ());
        assert_eq!(scheduler.total_duration_ms(), 15);
        assert_eq!(scheduler.now_ms(), 15);
    }

    #[test]
    fn huge_ticks_saturate_the_clock() {
        let mut grid = grid_3();
        let mut scheduler = Scheduler::new();
        scheduler.schedule([visited(0, 1)]);
        assert_eq!(scheduler.advance(u64::MAX, &mut grid, &mut ()), 1);
        assert_eq!(scheduler.advance(u64::MAX, &mut grid, &mut ()), 0);
        assert_eq!(scheduler.now_ms(), u64::MAX);
        assert_eq!(scheduler.remaining_ms(), 0);
    }
}
