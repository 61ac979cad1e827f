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

//! Ranking strategies
//!
//! A `CostStrategy` maps a cell to an orderable cost; the frontier pops the
//! cell with the smallest cost first. Strategies are stateless apart from the
//! best-known bound `loup`, which is passed in explicitly.
//!
//! Strategies
//! - `GoalLowerBound`: lower bound of the goal variable's component.
//! - `GoalUpperBound`: upper bound of the goal variable's component.
//! - `EstimateLowerBound` / `EstimateUpperBound`: bounds of `pf`.
//! - `HeuristicWeight`: largest `pu` first.
//! - `Tightness`: `-(loup - pf.lb) / diam(pf)`, i.e. the cell whose enclosure
//!   lies furthest below `loup` relative to its width comes first.
//! - `WeightedTightness`: the same ratio scaled by `pu`.
//! - `GoalOverWeightedTightness`: goal lower bound divided by the weighted
//!   ratio.
//!
//! The last three depend on `loup`; a frontier re-ranks them whenever `loup`
//! changes. The others never need re-ranking.
//!
//! Pruning
//! Every strategy also names the lower bound it can certify for a cell: the
//! goal component's lower bound for goal-variable strategies and `pf.lb` for
//! the others. A cell is dominated by a threshold when that certified bound
//! is strictly greater than it.
//!
//! NaN handling
//! Costs that evaluate to NaN (a degenerate `pf` yielding `0 / 0`, an
//! unbounded `pf` yielding `inf / inf`, or a missing goal component) are
//! mapped to `+inf`, so such cells sink to the bottom of the view and the
//! heap order stays total.

use crate::{cell::Cell, num::BoundNumeric};

/// A ranking policy over cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CostStrategy {
    /// Smallest lower bound of the goal variable first.
    GoalLowerBound { goal_var: usize },
    /// Smallest upper bound of the goal variable first.
    GoalUpperBound { goal_var: usize },
    /// Smallest `pf.lb` first.
    EstimateLowerBound,
    /// Smallest `pf.ub` first.
    EstimateUpperBound,
    /// Largest `pu` first.
    HeuristicWeight,
    /// `-(loup - pf.lb) / diam(pf)`.
    Tightness,
    /// `-pu * (loup - pf.lb) / diam(pf)`.
    WeightedTightness,
    /// `goal.lb / (pu * (loup - pf.lb) / diam(pf))`.
    GoalOverWeightedTightness { goal_var: usize },
}

impl CostStrategy {
    /// Returns the cost of `cell` under this strategy given the best-known
    /// bound. The result is never NaN.
    #[inline]
    pub fn cost<T>(&self, cell: &Cell<T>, best_bound: T) -> T
    where
        T: BoundNumeric,
    {
        let raw = match *self {
            CostStrategy::GoalLowerBound { goal_var } => goal_lb(cell, goal_var),
            CostStrategy::GoalUpperBound { goal_var } => goal_ub(cell, goal_var),
            CostStrategy::EstimateLowerBound => cell.bound_estimate().lb(),
            CostStrategy::EstimateUpperBound => cell.bound_estimate().ub(),
            CostStrategy::HeuristicWeight => -cell.heuristic_weight(),
            CostStrategy::Tightness => -tightness(cell, best_bound),
            CostStrategy::WeightedTightness => {
                -(cell.heuristic_weight() * tightness(cell, best_bound))
            }
            CostStrategy::GoalOverWeightedTightness { goal_var } => {
                goal_lb(cell, goal_var) / (cell.heuristic_weight() * tightness(cell, best_bound))
            }
        };

        if raw.is_nan() { T::infinity() } else { raw }
    }

    /// Returns `true` if costs under this strategy change with the
    /// best-known bound.
    #[inline]
    pub fn depends_on_best_bound(&self) -> bool {
        matches!(
            self,
            CostStrategy::Tightness
                | CostStrategy::WeightedTightness
                | CostStrategy::GoalOverWeightedTightness { .. }
        )
    }

    /// Returns the lower bound on the objective this strategy certifies for
    /// `cell`. Returns `-inf` when nothing can be certified (e.g. the goal
    /// component is missing).
    #[inline]
    pub fn certified_lower_bound<T>(&self, cell: &Cell<T>) -> T
    where
        T: BoundNumeric,
    {
        let lb = match *self {
            CostStrategy::GoalLowerBound { goal_var }
            | CostStrategy::GoalUpperBound { goal_var }
            | CostStrategy::GoalOverWeightedTightness { goal_var } => goal_lb(cell, goal_var),
            CostStrategy::EstimateLowerBound
            | CostStrategy::EstimateUpperBound
            | CostStrategy::HeuristicWeight
            | CostStrategy::Tightness
            | CostStrategy::WeightedTightness => cell.bound_estimate().lb(),
        };

        if lb.is_nan() { T::neg_infinity() } else { lb }
    }

    /// Returns `true` if `cell` provably cannot improve on `threshold`.
    #[inline]
    pub fn is_dominated<T>(&self, cell: &Cell<T>, threshold: T) -> bool
    where
        T: BoundNumeric,
    {
        self.certified_lower_bound(cell) > threshold
    }

    /// Returns a short, stable name for logs.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            CostStrategy::GoalLowerBound { .. } => "GoalLowerBound",
            CostStrategy::GoalUpperBound { .. } => "GoalUpperBound",
            CostStrategy::EstimateLowerBound => "EstimateLowerBound",
            CostStrategy::EstimateUpperBound => "EstimateUpperBound",
            CostStrategy::HeuristicWeight => "HeuristicWeight",
            CostStrategy::Tightness => "Tightness",
            CostStrategy::WeightedTightness => "WeightedTightness",
            CostStrategy::GoalOverWeightedTightness { .. } => "GoalOverWeightedTightness",
        }
    }
}

impl std::fmt::Display for CostStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostStrategy::GoalLowerBound { goal_var }
            | CostStrategy::GoalUpperBound { goal_var }
            | CostStrategy::GoalOverWeightedTightness { goal_var } => {
                write!(f, "{}(goal_var: {})", self.name(), goal_var)
            }
            _ => write!(f, "{}", self.name()),
        }
    }
}

#[inline(always)]
fn goal_lb<T>(cell: &Cell<T>, goal_var: usize) -> T
where
    T: BoundNumeric,
{
    cell.region().get(goal_var).map_or(T::nan(), |iv| iv.lb())
}

#[inline(always)]
fn goal_ub<T>(cell: &Cell<T>, goal_var: usize) -> T
where
    T: BoundNumeric,
{
    cell.region().get(goal_var).map_or(T::nan(), |iv| iv.ub())
}

/// `(loup - pf.lb) / diam(pf)`.
#[inline(always)]
fn tightness<T>(cell: &Cell<T>, best_bound: T) -> T
where
    T: BoundNumeric,
{
    let pf = cell.bound_estimate();
    (best_bound - pf.lb()) / pf.diam()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_core::math::{interval::Interval, interval_vector::IntervalVector};

    fn cell() -> Cell<f64> {
        let region = IntervalVector::from_bounds(&[[5.0, 15.0], [15.0, 25.0]]);
        let pf = region[0] * region[1];
        Cell::new(region)
            .with_bound_estimate(pf)
            .with_heuristic_weight(0.2)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_bound_strategies() {
        let c = cell();
        assert_eq!(CostStrategy::GoalLowerBound { goal_var: 1 }.cost(&c, 0.0), 15.0);
        assert_eq!(CostStrategy::GoalUpperBound { goal_var: 1 }.cost(&c, 0.0), 25.0);
        assert_eq!(CostStrategy::EstimateLowerBound.cost(&c, 0.0), 75.0);
        assert_eq!(CostStrategy::EstimateUpperBound.cost(&c, 0.0), 375.0);
        assert_eq!(CostStrategy::HeuristicWeight.cost(&c, 0.0), -0.2);
    }

    #[test]
    fn test_blended_strategies() {
        let c = cell();
        // pf = [75, 375], diam 300, loup 100 => ratio 25 / 300.
        let ratio = 25.0 / 300.0;
        assert!(close(CostStrategy::Tightness.cost(&c, 100.0), -ratio));
        assert!(close(CostStrategy::WeightedTightness.cost(&c, 100.0), -0.2 * ratio));
        assert!(close(
            CostStrategy::GoalOverWeightedTightness { goal_var: 0 }.cost(&c, 100.0),
            5.0 / (0.2 * ratio)
        ));
    }

    #[test]
    fn test_blended_costs_follow_best_bound() {
        let c = cell();
        let loose = CostStrategy::Tightness.cost(&c, 1000.0);
        let tight = CostStrategy::Tightness.cost(&c, 100.0);
        assert!(loose < tight);
        // Bound-only strategies ignore loup.
        let s = CostStrategy::GoalLowerBound { goal_var: 0 };
        assert_eq!(s.cost(&c, 1000.0), s.cost(&c, 100.0));
    }

    #[test]
    fn test_depends_on_best_bound() {
        assert!(!CostStrategy::GoalLowerBound { goal_var: 0 }.depends_on_best_bound());
        assert!(!CostStrategy::GoalUpperBound { goal_var: 0 }.depends_on_best_bound());
        assert!(!CostStrategy::EstimateLowerBound.depends_on_best_bound());
        assert!(!CostStrategy::EstimateUpperBound.depends_on_best_bound());
        assert!(!CostStrategy::HeuristicWeight.depends_on_best_bound());
        assert!(CostStrategy::Tightness.depends_on_best_bound());
        assert!(CostStrategy::WeightedTightness.depends_on_best_bound());
        assert!(CostStrategy::GoalOverWeightedTightness { goal_var: 0 }.depends_on_best_bound());
    }

    #[test]
    fn test_nan_costs_become_infinite() {
        // Degenerate pf with loup == pf.lb gives 0 / 0.
        let c = Cell::new(IntervalVector::from_bounds(&[[0.0, 1.0]]))
            .with_bound_estimate(Interval::point(3.0))
            .with_heuristic_weight(1.0);
        assert_eq!(CostStrategy::Tightness.cost(&c, 3.0), f64::INFINITY);

        // Missing goal component.
        let s = CostStrategy::GoalLowerBound { goal_var: 5 };
        assert_eq!(s.cost(&c, 0.0), f64::INFINITY);
        assert_eq!(s.certified_lower_bound(&c), f64::NEG_INFINITY);
        assert!(!s.is_dominated(&c, -1e300));
    }

    #[test]
    fn test_unbounded_estimate_sinks() {
        let c = Cell::new(IntervalVector::from_bounds(&[[0.0, 1.0]]));
        // pf = entire: (inf - -inf) / inf is NaN.
        assert_eq!(CostStrategy::Tightness.cost(&c, f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_certified_lower_bound_and_dominance() {
        let c = cell();
        let goal = CostStrategy::GoalUpperBound { goal_var: 1 };
        assert_eq!(goal.certified_lower_bound(&c), 15.0);
        assert!(goal.is_dominated(&c, 14.0));
        assert!(!goal.is_dominated(&c, 15.0));

        let est = CostStrategy::WeightedTightness;
        assert_eq!(est.certified_lower_bound(&c), 75.0);
        assert!(est.is_dominated(&c, 50.0));
        assert!(!est.is_dominated(&c, 100.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", CostStrategy::GoalLowerBound { goal_var: 1 }),
            "GoalLowerBound(goal_var: 1)"
        );
        assert_eq!(format!("{}", CostStrategy::WeightedTightness), "WeightedTightness");
    }
}
