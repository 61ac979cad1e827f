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

//! Monitoring combinators for frontiers
//!
//! Provides `CompositeFrontierMonitor`, a fan-out monitor that forwards every
//! event to its children in insertion order. This lets you mix logging and
//! custom telemetry without coupling them to the frontier.

use crate::{
    arena::CellId, cell::Cell, monitor::frontier_monitor::FrontierMonitor, num::BoundNumeric,
    policy::View, stats::FrontierStatistics,
};

/// A frontier monitor that forwards events to all of its children.
pub struct CompositeFrontierMonitor<'a, T>
where
    T: BoundNumeric,
{
    monitors: Vec<Box<dyn FrontierMonitor<T> + 'a>>,
}

impl<'a, T> Default for CompositeFrontierMonitor<'a, T>
where
    T: BoundNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeFrontierMonitor<'a, T>
where
    T: BoundNumeric,
{
    /// Creates a new empty `CompositeFrontierMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeFrontierMonitor` with room for `capacity`
    /// monitors.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: FrontierMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn FrontierMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns the child monitors.
    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn FrontierMonitor<T> + 'a>] {
        &self.monitors
    }

    /// Returns the number of child monitors.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if there are no child monitors.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> FromIterator<Box<dyn FrontierMonitor<T> + 'a>> for CompositeFrontierMonitor<'a, T>
where
    T: BoundNumeric,
{
    #[inline(always)]
    fn from_iter<I: IntoIterator<Item = Box<dyn FrontierMonitor<T> + 'a>>>(iter: I) -> Self {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> std::fmt::Debug for CompositeFrontierMonitor<'a, T>
where
    T: BoundNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.monitors.iter().map(|m| m.name()))
            .finish()
    }
}

impl<'a, T> FrontierMonitor<T> for CompositeFrontierMonitor<'a, T>
where
    T: BoundNumeric,
{
    fn name(&self) -> &str {
        "CompositeFrontierMonitor"
    }

    fn on_push(&mut self, id: CellId, cell: &Cell<T>, statistics: &FrontierStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_push(id, cell, statistics);
        }
    }

    fn on_pop(&mut self, view: View, cell: &Cell<T>, statistics: &FrontierStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_pop(view, cell, statistics);
        }
    }

    fn on_prune(
        &mut self,
        cell: &Cell<T>,
        view: View,
        threshold: T,
        statistics: &FrontierStatistics,
    ) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_prune(cell, view, threshold, statistics);
        }
    }

    fn on_best_bound_updated(&mut self, previous: T, current: T, statistics: &FrontierStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_best_bound_updated(previous, current, statistics);
        }
    }

    fn on_reorder(&mut self, view: View, statistics: &FrontierStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_reorder(view, statistics);
        }
    }

    fn on_flush(&mut self, discarded: usize, statistics: &FrontierStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_flush(discarded, statistics);
        }
    }
}
