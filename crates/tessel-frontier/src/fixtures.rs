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

//! Cell fixtures shared by the frontier tests.
//!
//! Cell `i` has the box `(-1)^i * i * base`, where `base` is
//! `[[5, 15], [15, 25]]` or its four-dimensional extension
//! `[[5, 15], [15, 25], [25, 35], [35, 45]]`.

use crate::{
    arena::CellId, cell::Cell, monitor::frontier_monitor::FrontierMonitor, policy::View,
    stats::FrontierStatistics,
};
use tessel_core::math::{interval::Interval, interval_vector::IntervalVector};

pub(crate) const NUM_CELLS: usize = 10;

pub(crate) fn base_box(dims: usize) -> IntervalVector<f64> {
    let bounds = [[5.0, 15.0], [15.0, 25.0], [25.0, 35.0], [35.0, 45.0]];
    IntervalVector::from_bounds(&bounds[..dims])
}

#[inline]
pub(crate) fn sign_scaled(i: usize) -> f64 {
    let magnitude = i as f64;
    if i % 2 == 0 { magnitude } else { -magnitude }
}

/// Bare cells: entire estimate, zero weight.
pub(crate) fn bare_cells(dims: usize) -> Vec<Cell<f64>> {
    let base = base_box(dims);
    (0..NUM_CELLS)
        .map(|i| Cell::new(&base * sign_scaled(i)))
        .collect()
}

/// Cells sharing the estimate `base[0] * base[1]` and weight `pu`.
pub(crate) fn annotated_cells(dims: usize, pu: f64) -> Vec<Cell<f64>> {
    let base = base_box(dims);
    let pf = base[0] * base[1];
    (0..NUM_CELLS)
        .map(|i| {
            Cell::new(&base * sign_scaled(i))
                .with_bound_estimate(pf)
                .with_heuristic_weight(pu)
        })
        .collect()
}

/// Cells whose estimate is the product of their own first two components,
/// i.e. `i^2 * [75, 375]`.
pub(crate) fn self_estimated_cells(dims: usize, pu: f64) -> Vec<Cell<f64>> {
    let base = base_box(dims);
    (0..NUM_CELLS)
        .map(|i| {
            let region = &base * sign_scaled(i);
            let pf: Interval<f64> = region[0] * region[1];
            Cell::new(region)
                .with_bound_estimate(pf)
                .with_heuristic_weight(pu)
        })
        .collect()
}

/// Records the statistics a monitor sees at each best-bound update:
/// `(previous, current, cells_pruned, reorders)`.
#[derive(Debug, Default)]
pub(crate) struct BoundRecorder {
    pub(crate) updates: Vec<(f64, f64, u64, u64)>,
}

impl FrontierMonitor<f64> for BoundRecorder {
    fn name(&self) -> &str {
        "BoundRecorder"
    }

    fn on_push(&mut self, _id: CellId, _cell: &Cell<f64>, _statistics: &FrontierStatistics) {}

    fn on_pop(&mut self, _view: View, _cell: &Cell<f64>, _statistics: &FrontierStatistics) {}

    fn on_prune(
        &mut self,
        _cell: &Cell<f64>,
        _view: View,
        _threshold: f64,
        _statistics: &FrontierStatistics,
    ) {
    }

    fn on_best_bound_updated(&mut self, previous: f64, current: f64, statistics: &FrontierStatistics) {
        self.updates
            .push((previous, current, statistics.cells_pruned, statistics.reorders));
    }

    fn on_reorder(&mut self, _view: View, _statistics: &FrontierStatistics) {}

    fn on_flush(&mut self, _discarded: usize, _statistics: &FrontierStatistics) {}
}
