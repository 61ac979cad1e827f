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

//! The cell record.
//!
//! A `Cell<T>` is one pending sub-region of the search space together with
//! the annotations the optimizer attaches before queueing it:
//!
//! - `region`: the box the cell covers.
//! - `bound_estimate` (`pf`): an enclosure of the objective over the box,
//!   produced by the evaluator. Defaults to `(-inf, +inf)`.
//! - `heuristic_weight` (`pu`): an exploration weight independent of the
//!   objective bound. Defaults to `0`.
//! - `bound_snapshot`: the best-known bound when the cell was created. Kept
//!   for diagnostics only. Defaults to `+inf`.
//! - `depth`: the branching depth that produced the cell.
//!
//! Frontiers compute costs once, at insertion or re-ranking time, so a cell's
//! annotations are fixed while it is queued: the frontier hands out shared
//! references only.

use crate::num::BoundNumeric;
use tessel_core::math::{interval::Interval, interval_vector::IntervalVector};

/// A pending sub-region plus its numeric annotations.
#[derive(Clone, PartialEq)]
pub struct Cell<T>
where
    T: BoundNumeric,
{
    region: IntervalVector<T>,
    bound_estimate: Interval<T>,
    heuristic_weight: T,
    bound_snapshot: T,
    depth: u32,
}

impl<T> Cell<T>
where
    T: BoundNumeric,
{
    /// Creates a cell covering `region` with default annotations.
    #[inline]
    pub fn new(region: IntervalVector<T>) -> Self {
        Self {
            region,
            bound_estimate: Interval::entire(),
            heuristic_weight: T::zero(),
            bound_snapshot: T::infinity(),
            depth: 0,
        }
    }

    /// Sets the objective enclosure.
    #[inline]
    pub fn with_bound_estimate(mut self, bound_estimate: Interval<T>) -> Self {
        self.bound_estimate = bound_estimate;
        self
    }

    /// Sets the heuristic weight.
    #[inline]
    pub fn with_heuristic_weight(mut self, heuristic_weight: T) -> Self {
        self.heuristic_weight = heuristic_weight;
        self
    }

    /// Sets the best-known bound snapshot.
    #[inline]
    pub fn with_bound_snapshot(mut self, bound_snapshot: T) -> Self {
        self.bound_snapshot = bound_snapshot;
        self
    }

    /// Sets the branching depth.
    #[inline]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Returns the box the cell covers.
    #[inline]
    pub fn region(&self) -> &IntervalVector<T> {
        &self.region
    }

    /// Returns the objective enclosure (`pf`).
    #[inline]
    pub fn bound_estimate(&self) -> Interval<T> {
        self.bound_estimate
    }

    /// Returns the heuristic weight (`pu`).
    #[inline]
    pub fn heuristic_weight(&self) -> T {
        self.heuristic_weight
    }

    /// Returns the best-known bound recorded when the cell was created.
    #[inline]
    pub fn bound_snapshot(&self) -> T {
        self.bound_snapshot
    }

    /// Returns the branching depth.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Replaces the objective enclosure.
    #[inline]
    pub fn set_bound_estimate(&mut self, bound_estimate: Interval<T>) {
        self.bound_estimate = bound_estimate;
    }

    /// Replaces the heuristic weight.
    #[inline]
    pub fn set_heuristic_weight(&mut self, heuristic_weight: T) {
        self.heuristic_weight = heuristic_weight;
    }

    /// Replaces the best-known bound snapshot.
    #[inline]
    pub fn set_bound_snapshot(&mut self, bound_snapshot: T) {
        self.bound_snapshot = bound_snapshot;
    }

    /// Consumes the cell and returns its box, e.g. to hand it to a bisector.
    #[inline]
    pub fn into_region(self) -> IntervalVector<T> {
        self.region
    }
}

impl<T> std::fmt::Debug for Cell<T>
where
    T: BoundNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("region", &self.region)
            .field("bound_estimate", &self.bound_estimate)
            .field("heuristic_weight", &self.heuristic_weight)
            .field("bound_snapshot", &self.bound_snapshot)
            .field("depth", &self.depth)
            .finish()
    }
}

impl<T> std::fmt::Display for Cell<T>
where
    T: BoundNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} pf={} pu={} depth={}",
            self.region, self.bound_estimate, self.heuristic_weight, self.depth
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> IntervalVector<f64> {
        IntervalVector::from_bounds(&[[5.0, 15.0], [15.0, 25.0]])
    }

    #[test]
    fn test_defaults() {
        let c = Cell::new(region());
        assert_eq!(c.region(), &region());
        assert_eq!(c.bound_estimate(), Interval::entire());
        assert_eq!(c.heuristic_weight(), 0.0);
        assert_eq!(c.bound_snapshot(), f64::INFINITY);
        assert_eq!(c.depth(), 0);
    }

    #[test]
    fn test_builder_methods() {
        let c = Cell::new(region())
            .with_bound_estimate(Interval::new(1.0, 2.0))
            .with_heuristic_weight(0.5)
            .with_bound_snapshot(100.0)
            .with_depth(3);
        assert_eq!(c.bound_estimate(), Interval::new(1.0, 2.0));
        assert_eq!(c.heuristic_weight(), 0.5);
        assert_eq!(c.bound_snapshot(), 100.0);
        assert_eq!(c.depth(), 3);
    }

    #[test]
    fn test_setters_and_into_region() {
        let mut c = Cell::new(region());
        c.set_bound_estimate(Interval::point(4.0));
        c.set_heuristic_weight(2.0);
        c.set_bound_snapshot(10.0);
        assert_eq!(c.bound_estimate(), Interval::point(4.0));
        assert_eq!(c.heuristic_weight(), 2.0);
        assert_eq!(c.bound_snapshot(), 10.0);
        assert_eq!(c.into_region(), region());
    }

    #[test]
    fn test_display() {
        let c = Cell::new(region()).with_bound_estimate(Interval::new(1.0, 2.0));
        assert_eq!(
            format!("{}", c),
            "([5, 15] ; [15, 25]) pf=[1, 2] pu=0 depth=0"
        );
    }
}
