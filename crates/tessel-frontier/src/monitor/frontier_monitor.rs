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

//! Frontier monitoring interface
//!
//! Declares the `FrontierMonitor` trait. Frontiers call it after every state
//! change, passing their `FrontierStatistics` for telemetry.
//!
//! Lifecycle highlights
//! - push → pop | prune → (reorder → bound update) → ... → flush
//! - Single-view frontiers report every event against `View::First`.
//!
//! Design notes
//! - Methods take `&mut self`; monitors are assumed single-threaded.
//! - Keep callbacks lightweight; avoid blocking I/O in hot paths.

use crate::{
    arena::CellId, cell::Cell, num::BoundNumeric, policy::View, stats::FrontierStatistics,
};

/// Trait for observing a frontier.
pub trait FrontierMonitor<T>
where
    T: BoundNumeric,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called after a cell was inserted.
    fn on_push(&mut self, id: CellId, cell: &Cell<T>, statistics: &FrontierStatistics);
    /// Called after `view` supplied a popped cell, just before the cell is
    /// handed to the caller.
    fn on_pop(&mut self, view: View, cell: &Cell<T>, statistics: &FrontierStatistics);
    /// Called for every cell discarded by contraction. `view` names the
    /// strategy that certified the cell cannot improve on `threshold`.
    fn on_prune(
        &mut self,
        cell: &Cell<T>,
        view: View,
        threshold: T,
        statistics: &FrontierStatistics,
    );
    /// Called when the best-known bound changed, after the frontier has
    /// pruned and re-ranked for it.
    fn on_best_bound_updated(&mut self, previous: T, current: T, statistics: &FrontierStatistics);
    /// Called after `view` was rebuilt with freshly computed costs.
    fn on_reorder(&mut self, view: View, statistics: &FrontierStatistics);
    /// Called after the frontier was emptied by `flush`.
    fn on_flush(&mut self, discarded: usize, statistics: &FrontierStatistics);
}

impl<T> std::fmt::Debug for dyn FrontierMonitor<T>
where
    T: BoundNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FrontierMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn FrontierMonitor<T>
where
    T: BoundNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FrontierMonitor({})", self.name())
    }
}
