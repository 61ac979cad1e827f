// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Single-view frontier
//!
//! `RankedFrontier` keeps pending cells in one indexed heap ordered by a
//! single `CostStrategy`. It is the building block the dual frontier doubles
//! up, and it is useful on its own whenever one ordering is enough.
//!
//! Operations
//! - `push` / `pop` / `top`: `O(log n)` / `O(log n)` / `O(1)`.
//! - `contract(threshold)`: drops every cell the strategy certifies cannot
//!   improve on `threshold`, then heapifies the survivors in `O(n)`.
//! - `set_best_bound(loup)`: stores `loup` and re-ranks when the strategy
//!   depends on it.
//! - `flush`: drops everything; sequence numbers keep counting so ties
//!   still resolve in global insertion order afterwards.

use crate::{
    arena::{CellArena, CellId},
    cell::Cell,
    cost::CostStrategy,
    error::FrontierError,
    heap::{HeapEntry, IndexedHeap},
    monitor::{frontier_monitor::FrontierMonitor, no_op::NoOperationMonitor},
    num::BoundNumeric,
    policy::View,
    stats::FrontierStatistics,
};

/// A frontier ranked by one cost strategy.
#[derive(Clone, Debug)]
pub struct RankedFrontier<T, M = NoOperationMonitor<T>>
where
    T: BoundNumeric,
    M: FrontierMonitor<T>,
{
    cells: CellArena<T>,
    heap: IndexedHeap<T>,
    strategy: CostStrategy,
    best_bound: T,
    statistics: FrontierStatistics,
    monitor: M,
}

impl<T> RankedFrontier<T, NoOperationMonitor<T>>
where
    T: BoundNumeric,
{
    /// Creates an empty frontier with no known bound.
    #[inline]
    pub fn new(strategy: CostStrategy) -> Self {
        Self::with_monitor(strategy, NoOperationMonitor::new())
    }

    /// Creates an empty frontier with the given best-known bound.
    #[inline]
    pub fn with_best_bound(strategy: CostStrategy, best_bound: T) -> Self {
        let mut frontier = Self::new(strategy);
        frontier.best_bound = best_bound;
        frontier
    }
}

impl<T, M> RankedFrontier<T, M>
where
    T: BoundNumeric,
    M: FrontierMonitor<T>,
{
    /// Creates an empty frontier reporting to `monitor`.
    #[inline]
    pub fn with_monitor(strategy: CostStrategy, monitor: M) -> Self {
        Self {
            cells: CellArena::new(),
            heap: IndexedHeap::new(),
            strategy,
            best_bound: T::infinity(),
            statistics: FrontierStatistics::default(),
            monitor,
        }
    }

    #[inline]
    pub fn strategy(&self) -> CostStrategy {
        self.strategy
    }

    #[inline]
    pub fn best_bound(&self) -> T {
        self.best_bound
    }

    #[inline]
    pub fn statistics(&self) -> &FrontierStatistics {
        &self.statistics
    }

    #[inline]
    pub fn monitor(&self) -> &M {
        &self.monitor
    }

    #[inline]
    pub fn monitor_mut(&mut self) -> &mut M {
        &mut self.monitor
    }

    /// Returns the number of pending cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cells are pending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cost of `cell` under this frontier's strategy and current
    /// best-known bound.
    #[inline]
    pub fn cost_of(&self, cell: &Cell<T>) -> T {
        self.strategy.cost(cell, self.best_bound)
    }

    /// Returns the cost the heap currently ranks `id` by.
    #[inline]
    pub fn recorded_cost(&self, id: CellId) -> Option<T> {
        self.heap.cost_of(id)
    }

    /// Returns the cost of the cell `pop` would return.
    #[inline]
    pub fn top_cost(&self) -> Option<T> {
        self.heap.peek_entry().map(|entry| entry.cost)
    }

    /// Returns the pending cell behind `id`.
    #[inline]
    pub fn get(&self, id: CellId) -> Option<&Cell<T>> {
        self.cells.get(id)
    }

    /// Returns an iterator over the pending cells in no particular order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &Cell<T>)> + '_ {
        self.cells.iter()
    }

    /// Inserts `cell` and returns its handle.
    pub fn push(&mut self, cell: Cell<T>) -> CellId {
        let cost = self.strategy.cost(&cell, self.best_bound);
        let seq = self.cells.next_seq();
        let id = self.cells.insert(cell);
        self.heap.push(id, cost, seq);

        self.statistics.on_push(self.cells.len());
        if let Some(cell) = self.cells.get(id) {
            self.monitor.on_push(id, cell, &self.statistics);
        }
        id
    }

    /// Removes and returns the cell with the smallest cost.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::EmptyFrontier`] if no cells are pending.
    ///
    /// # Panics
    ///
    /// Panics if the heap refers to a cell the arena does not hold.
    pub fn pop(&mut self) -> Result<Cell<T>, FrontierError> {
        let id = self.heap.pop().ok_or(FrontierError::EmptyFrontier)?;
        let cell = match self.cells.remove(id) {
            Some(cell) => cell,
            None => panic!(
                "{}",
                FrontierError::InconsistentView {
                    view: View::First,
                    cell: Some(id),
                    reason: "queued handle has no cell",
                }
            ),
        };

        self.statistics.on_pop(View::First);
        self.monitor.on_pop(View::First, &cell, &self.statistics);
        Ok(cell)
    }

    /// Returns the cell `pop` would return, without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::EmptyFrontier`] if no cells are pending.
    pub fn top(&self) -> Result<&Cell<T>, FrontierError> {
        let id = self.heap.peek().ok_or(FrontierError::EmptyFrontier)?;
        self.cells.get(id).ok_or(FrontierError::InconsistentView {
            view: View::First,
            cell: Some(id),
            reason: "queued handle has no cell",
        })
    }

    /// Removes every cell the strategy certifies cannot improve on
    /// `threshold` and returns how many were removed.
    pub fn contract(&mut self, threshold: T) -> usize {
        let strategy = self.strategy;
        let dominated: Vec<CellId> = self
            .cells
            .iter()
            .filter(|&(_, cell)| strategy.is_dominated(cell, threshold))
            .map(|(id, _)| id)
            .collect();

        self.statistics.on_contraction(dominated.len());
        for &id in &dominated {
            if let Some(cell) = self.cells.remove(id) {
                self.monitor
                    .on_prune(&cell, View::First, threshold, &self.statistics);
            }
        }

        if !dominated.is_empty() {
            self.rebuild();
        }
        dominated.len()
    }

    /// Recomputes every cost from the current best-known bound.
    pub fn reorder(&mut self) {
        self.rebuild();
        self.statistics.on_reorder();
        self.monitor.on_reorder(View::First, &self.statistics);
    }

    /// Stores a new best-known bound, re-ranking if the strategy uses it.
    pub fn set_best_bound(&mut self, best_bound: T) {
        let previous = self.store_best_bound(best_bound);
        if self.strategy.depends_on_best_bound() {
            self.reorder();
        }
        self.notify_best_bound(previous);
    }

    /// Stores a new best-known bound and contracts by it. Returns the number
    /// of cells removed.
    pub fn update_best_bound(&mut self, best_bound: T) -> usize {
        let previous = self.store_best_bound(best_bound);
        let pruned = self.contract(best_bound);
        // A non-empty contraction already rebuilt with the new bound.
        if pruned == 0 && self.strategy.depends_on_best_bound() {
            self.reorder();
        }
        self.notify_best_bound(previous);
        pruned
    }

    /// Drops every pending cell and returns how many were dropped.
    pub fn flush(&mut self) -> usize {
        let dropped = self.cells.clear();
        self.heap.clear();
        self.statistics.on_flush(dropped);
        self.monitor.on_flush(dropped, &self.statistics);
        dropped
    }

    /// Checks the heap invariant and that heap and arena hold the same
    /// cells.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::InconsistentView`] describing the first
    /// violation found.
    pub fn check_consistency(&self) -> Result<(), FrontierError> {
        self.heap
            .validate()
            .map_err(|(cell, reason)| FrontierError::InconsistentView {
                view: View::First,
                cell,
                reason,
            })?;

        if let Some(id) = self.heap.ids().find(|&id| !self.cells.contains(id)) {
            return Err(FrontierError::InconsistentView {
                view: View::First,
                cell: Some(id),
                reason: "queued handle has no cell",
            });
        }
        if self.heap.len() != self.cells.len() {
            return Err(FrontierError::InconsistentView {
                view: View::First,
                cell: None,
                reason: "pending cells missing from the view",
            });
        }
        Ok(())
    }

    /// Stores `best_bound` and returns the previous value. Callers notify the
    /// monitor once the frontier reflects the new bound.
    #[inline]
    fn store_best_bound(&mut self, best_bound: T) -> T {
        debug_assert!(
            !best_bound.is_nan(),
            "called `RankedFrontier::set_best_bound` with NaN"
        );
        let previous = self.best_bound;
        self.best_bound = best_bound;
        self.statistics.on_bound_update();
        previous
    }

    #[inline]
    fn notify_best_bound(&mut self, previous: T) {
        self.monitor
            .on_best_bound_updated(previous, self.best_bound, &self.statistics);
    }

    fn rebuild(&mut self) {
        let strategy = self.strategy;
        let best_bound = self.best_bound;
        self.heap
            .rebuild(self.cells.iter_with_seq().map(|(id, seq, cell)| HeapEntry {
                cost: strategy.cost(cell, best_bound),
                seq,
                id,
            }));
    }
}

impl<T, M> std::fmt::Display for RankedFrontier<T, M>
where
    T: BoundNumeric,
    M: FrontierMonitor<T>,
{
    /// Lists the pending cells in pop order.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "RankedFrontier(strategy: {}, best bound: {}, cells: {})",
            self.strategy,
            self.best_bound,
            self.len()
        )?;
        for id in self.heap.sorted_ids() {
            if let Some(cell) = self.cells.get(id) {
                writeln!(f, "  {}: {}", id, cell)?;
            }
        }
        Ok(())
    }
}
