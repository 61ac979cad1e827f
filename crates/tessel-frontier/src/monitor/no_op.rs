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

use crate::{
    arena::CellId, cell::Cell, monitor::frontier_monitor::FrontierMonitor, num::BoundNumeric,
    policy::View, stats::FrontierStatistics,
};

/// A monitor that ignores every event. Frontiers use it when no monitor is
/// supplied.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NoOperationMonitor<T>
where
    T: BoundNumeric,
{
    _phantom: std::marker::PhantomData<T>,
}

impl<T> NoOperationMonitor<T>
where
    T: BoundNumeric,
{
    /// Creates a new `NoOperationMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> FrontierMonitor<T> for NoOperationMonitor<T>
where
    T: BoundNumeric,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }

    #[inline(always)]
    fn on_push(&mut self, _id: CellId, _cell: &Cell<T>, _statistics: &FrontierStatistics) {}

    #[inline(always)]
    fn on_pop(&mut self, _view: View, _cell: &Cell<T>, _statistics: &FrontierStatistics) {}

    #[inline(always)]
    fn on_prune(
        &mut self,
        _cell: &Cell<T>,
        _view: View,
        _threshold: T,
        _statistics: &FrontierStatistics,
    ) {
    }

    #[inline(always)]
    fn on_best_bound_updated(
        &mut self,
        _previous: T,
        _current: T,
        _statistics: &FrontierStatistics,
    ) {
    }

    #[inline(always)]
    fn on_reorder(&mut self, _view: View, _statistics: &FrontierStatistics) {}

    #[inline(always)]
    fn on_flush(&mut self, _discarded: usize, _statistics: &FrontierStatistics) {}
}
