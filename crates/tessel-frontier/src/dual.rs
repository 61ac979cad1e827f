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

//! Two-view frontier
//!
//! `DualFrontier` ranks one set of pending cells under two cost strategies at
//! once and lets an `AlternationPolicy` decide which ranking supplies each
//! pop. Typical use pairs a bound-driven ordering (goal lower bound) with a
//! feasibility-driven one (weighted tightness), so the search alternates
//! between closing the gap and finding better incumbents.
//!
//! Layout
//! - One `CellArena` owns the cells. Each view is an `IndexedHeap` of
//!   handles with its own costs, so a cell popped from one view is removed
//!   from the other in `O(log n)` through that view's position table.
//! - Both views always hold exactly the arena's handles. `check_consistency`
//!   verifies this along with the heap order of each view.
//!
//! Best-known bound
//! - `set_best_bound` stores `loup` and rebuilds only the views whose
//!   strategy depends on it.
//! - `update_best_bound` is the entry point for an improved incumbent: it
//!   stores `loup`, contracts by it and re-ranks, rebuilding each view at most
//!   once.
//!
//! Contraction
//! A cell survives `contract(threshold)` only if neither strategy certifies
//! that it cannot improve on `threshold`. The survivor set is computed before
//! anything is mutated; both views are then rebuilt from it.
//!
//! Failure modes
//! - `pop`/`top` on an empty frontier return `FrontierError::EmptyFrontier`.
//! - A popped cell without a twin in the other view means the frontier is
//!   corrupt; `pop` panics before mutating anything.

use crate::{
    arena::{CellArena, CellId},
    cell::Cell,
    config::FrontierConfig,
    cost::CostStrategy,
    error::FrontierError,
    heap::{HeapEntry, IndexedHeap},
    monitor::{frontier_monitor::FrontierMonitor, no_op::NoOperationMonitor},
    num::BoundNumeric,
    policy::{AlternationPolicy, Alternator, View},
    stats::FrontierStatistics,
};

const VIEWS: [View; 2] = [View::First, View::Second];

#[inline(always)]
fn slot(view: View) -> usize {
    match view {
        View::First => 0,
        View::Second => 1,
    }
}

/// A frontier ranked by two cost strategies over one set of cells.
#[derive(Clone, Debug)]
pub struct DualFrontier<T, M = NoOperationMonitor<T>>
where
    T: BoundNumeric,
    M: FrontierMonitor<T>,
{
    cells: CellArena<T>,
    views: [IndexedHeap<T>; 2],
    strategies: [CostStrategy; 2],
    alternator: Alternator,
    best_bound: T,
    statistics: FrontierStatistics,
    monitor: M,
}

impl<T> DualFrontier<T, NoOperationMonitor<T>>
where
    T: BoundNumeric,
{
    /// Creates an empty frontier with strict alternation and no known bound.
    #[inline]
    pub fn new(first: CostStrategy, second: CostStrategy) -> Self {
        Self::build(FrontierConfig::new(first, second), NoOperationMonitor::new())
    }

    /// Creates an empty frontier from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::InvalidConfig`] if `config` does not
    /// validate.
    #[inline]
    pub fn from_config(config: FrontierConfig<T>) -> Result<Self, FrontierError> {
        Self::with_monitor(config, NoOperationMonitor::new())
    }
}

impl<T, M> DualFrontier<T, M>
where
    T: BoundNumeric,
    M: FrontierMonitor<T>,
{
    /// Creates an empty frontier from a configuration, reporting to
    /// `monitor`.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::InvalidConfig`] if `config` does not
    /// validate.
    pub fn with_monitor(config: FrontierConfig<T>, monitor: M) -> Result<Self, FrontierError> {
        config.validate()?;
        Ok(Self::build(config, monitor))
    }

    fn build(config: FrontierConfig<T>, monitor: M) -> Self {
        Self {
            cells: CellArena::new(),
            views: [IndexedHeap::new(), IndexedHeap::new()],
            strategies: [config.first, config.second],
            alternator: Alternator::new(config.alternation),
            best_bound: config.initial_best_bound,
            statistics: FrontierStatistics::default(),
            monitor,
        }
    }

    /// Returns the strategy ranking `view`.
    #[inline]
    pub fn strategy(&self, view: View) -> CostStrategy {
        self.strategies[slot(view)]
    }

    #[inline]
    pub fn policy(&self) -> AlternationPolicy {
        self.alternator.policy()
    }

    /// Returns the view that supplies the next pop.
    #[inline]
    pub fn current_view(&self) -> View {
        self.alternator.current()
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

    /// Returns the cost of `cell` in `view` under the current best-known
    /// bound.
    #[inline]
    pub fn cost_of(&self, view: View, cell: &Cell<T>) -> T {
        self.strategy(view).cost(cell, self.best_bound)
    }

    /// Returns the cost `view` currently ranks `id` by.
    #[inline]
    pub fn recorded_cost(&self, view: View, id: CellId) -> Option<T> {
        self.views[slot(view)].cost_of(id)
    }

    #[inline]
    pub fn get(&self, id: CellId) -> Option<&Cell<T>> {
        self.cells.get(id)
    }

    /// Returns an iterator over the pending cells in no particular order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &Cell<T>)> + '_ {
        self.cells.iter()
    }

    /// Inserts `cell` into both views and returns its handle.
    pub fn push(&mut self, cell: Cell<T>) -> CellId {
        let first_cost = self.strategies[0].cost(&cell, self.best_bound);
        let second_cost = self.strategies[1].cost(&cell, self.best_bound);
        let seq = self.cells.next_seq();
        let id = self.cells.insert(cell);
        self.views[0].push(id, first_cost, seq);
        self.views[1].push(id, second_cost, seq);

        self.statistics.on_push(self.cells.len());
        if let Some(cell) = self.cells.get(id) {
            self.monitor.on_push(id, cell, &self.statistics);
        }
        id
    }

    /// Removes and returns the best cell of the current view, removes its
    /// twin from the other view and advances the alternation.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::EmptyFrontier`] if no cells are pending.
    ///
    /// # Panics
    ///
    /// Panics if the selected cell is missing from the other view or from the
    /// arena. Neither view is mutated in that case.
    pub fn pop(&mut self) -> Result<Cell<T>, FrontierError> {
        let source = self.alternator.current();
        let twin = source.other();
        let id = self.views[slot(source)]
            .peek()
            .ok_or(FrontierError::EmptyFrontier)?;

        if !self.views[slot(twin)].contains(id) {
            panic!(
                "{}",
                FrontierError::InconsistentView {
                    view: twin,
                    cell: Some(id),
                    reason: "missing twin",
                }
            );
        }
        let cell = match self.cells.remove(id) {
            Some(cell) => cell,
            None => panic!(
                "{}",
                FrontierError::InconsistentView {
                    view: source,
                    cell: Some(id),
                    reason: "queued handle has no cell",
                }
            ),
        };
        self.views[slot(source)].pop();
        self.views[slot(twin)].remove(id);
        self.alternator.advance();

        self.statistics.on_pop(source);
        self.monitor.on_pop(source, &cell, &self.statistics);
        Ok(cell)
    }

    /// Returns the cell `pop` would return now, without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::EmptyFrontier`] if no cells are pending.
    pub fn top(&self) -> Result<&Cell<T>, FrontierError> {
        let view = self.alternator.current();
        let id = self.views[slot(view)]
            .peek()
            .ok_or(FrontierError::EmptyFrontier)?;
        self.cells.get(id).ok_or(FrontierError::InconsistentView {
            view,
            cell: Some(id),
            reason: "queued handle has no cell",
        })
    }

    /// Stores a new best-known bound and re-ranks every view whose strategy
    /// depends on it.
    pub fn set_best_bound(&mut self, best_bound: T) {
        let previous = self.store_best_bound(best_bound);
        self.reorder_dependent_views();
        self.notify_best_bound(previous);
    }

    /// Removes every cell that either strategy certifies cannot improve on
    /// `threshold` and returns how many were removed.
    pub fn contract(&mut self, threshold: T) -> usize {
        let [first, second] = self.strategies;
        let dominated: Vec<(CellId, View)> = self
            .cells
            .iter()
            .filter_map(|(id, cell)| {
                if first.is_dominated(cell, threshold) {
                    Some((id, View::First))
                } else if second.is_dominated(cell, threshold) {
                    Some((id, View::Second))
                } else {
                    None
                }
            })
            .collect();

        self.statistics.on_contraction(dominated.len());
        for &(id, view) in &dominated {
            if let Some(cell) = self.cells.remove(id) {
                self.monitor
                    .on_prune(&cell, view, threshold, &self.statistics);
            }
        }

        if !dominated.is_empty() {
            for view in VIEWS {
                self.rebuild_view(view);
            }
        }
        dominated.len()
    }

    /// Stores an improved best-known bound, contracts by it and re-ranks.
    /// Returns the number of cells removed.
    pub fn update_best_bound(&mut self, best_bound: T) -> usize {
        let previous = self.store_best_bound(best_bound);
        let pruned = self.contract(best_bound);
        // A non-empty contraction already rebuilt both views with the new
        // bound.
        if pruned == 0 {
            self.reorder_dependent_views();
        }
        self.notify_best_bound(previous);
        pruned
    }

    /// Recomputes every cost in both views.
    pub fn reorder(&mut self) {
        for view in VIEWS {
            self.reorder_view(view);
        }
    }

    /// Drops every pending cell and returns how many were dropped. The
    /// alternation state is kept.
    pub fn flush(&mut self) -> usize {
        let dropped = self.cells.clear();
        for heap in self.views.iter_mut() {
            heap.clear();
        }
        self.statistics.on_flush(dropped);
        self.monitor.on_flush(dropped, &self.statistics);
        dropped
    }

    /// Checks the heap invariant of both views and that both views hold
    /// exactly the arena's cells.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::InconsistentView`] describing the first
    /// violation found.
    pub fn check_consistency(&self) -> Result<(), FrontierError> {
        for view in VIEWS {
            let heap = &self.views[slot(view)];
            heap.validate()
                .map_err(|(cell, reason)| FrontierError::InconsistentView {
                    view,
                    cell,
                    reason,
                })?;

            if heap.len() != self.cells.len() {
                return Err(FrontierError::InconsistentView {
                    view,
                    cell: None,
                    reason: "view size differs from the number of pending cells",
                });
            }
            if let Some(id) = heap.ids().find(|&id| !self.cells.contains(id)) {
                return Err(FrontierError::InconsistentView {
                    view,
                    cell: Some(id),
                    reason: "queued handle has no cell",
                });
            }
            let other = &self.views[slot(view.other())];
            if let Some(id) = heap.ids().find(|&id| !other.contains(id)) {
                return Err(FrontierError::InconsistentView {
                    view: view.other(),
                    cell: Some(id),
                    reason: "missing twin",
                });
            }
        }
        Ok(())
    }

    /// Stores `best_bound` and returns the previous value. Callers notify the
    /// monitor once the frontier reflects the new bound.
    #[inline]
    fn store_best_bound(&mut self, best_bound: T) -> T {
        debug_assert!(
            !best_bound.is_nan(),
            "called `DualFrontier::set_best_bound` with NaN"
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

    fn reorder_dependent_views(&mut self) {
        for view in VIEWS {
            if self.strategy(view).depends_on_best_bound() {
                self.reorder_view(view);
            }
        }
    }

    fn reorder_view(&mut self, view: View) {
        self.rebuild_view(view);
        self.statistics.on_reorder();
        self.monitor.on_reorder(view, &self.statistics);
    }

    fn rebuild_view(&mut self, view: View) {
        let strategy = self.strategy(view);
        let best_bound = self.best_bound;
        self.views[slot(view)].rebuild(self.cells.iter_with_seq().map(|(id, seq, cell)| {
            HeapEntry {
                cost: strategy.cost(cell, best_bound),
                seq,
                id,
            }
        }));
    }
}

impl<T, M> std::fmt::Display for DualFrontier<T, M>
where
    T: BoundNumeric,
    M: FrontierMonitor<T>,
{
    /// Lists the pending cells in first-view order.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "DualFrontier(first: {}, second: {}, alternation: {}, best bound: {}, cells: {})",
            self.strategies[0],
            self.strategies[1],
            self.alternator.policy(),
            self.best_bound,
            self.len()
        )?;
        for id in self.views[0].sorted_ids() {
            if let Some(cell) = self.cells.get(id) {
                writeln!(f, "  {}: {}", id, cell)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ConfigError,
        fixtures::{
            BoundRecorder, annotated_cells, bare_cells, base_box, self_estimated_cells,
            sign_scaled,
        },
        ranked::RankedFrontier,
    };
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use tessel_core::math::{interval::Interval, interval_vector::IntervalVector};

    const GOAL_LB: CostStrategy = CostStrategy::GoalLowerBound { goal_var: 1 };

    fn frontier(
        second: CostStrategy,
        alternation: AlternationPolicy,
        best_bound: f64,
    ) -> DualFrontier<f64> {
        let config = FrontierConfig::builder()
            .first(GOAL_LB)
            .second(second)
            .alternation(alternation)
            .initial_best_bound(best_bound)
            .build()
            .unwrap();
        DualFrontier::from_config(config).unwrap()
    }

    fn sorted_ids(frontier: &DualFrontier<f64>) -> Vec<CellId> {
        let mut ids: Vec<CellId> = frontier.iter().map(|(id, _)| id).collect();
        ids.sort();
        ids
    }

    #[test]
    fn test_push_then_pop_everything() {
        let mut f = DualFrontier::new(
            CostStrategy::GoalLowerBound { goal_var: 0 },
            CostStrategy::WeightedTightness,
        );
        for cell in bare_cells(2) {
            f.push(cell);
        }
        for _ in 0..10 {
            f.pop().unwrap();
        }
        assert!(f.is_empty());
        assert_eq!(f.pop().unwrap_err(), FrontierError::EmptyFrontier);
        assert_eq!(f.top().unwrap_err(), FrontierError::EmptyFrontier);
    }

    #[test]
    fn test_random_alternation_drains_consistently() {
        let mut f = frontier(
            CostStrategy::WeightedTightness,
            AlternationPolicy::Percentage {
                first_percent: 50,
                seed: 3,
            },
            100.0,
        );
        let base = base_box(2);
        for i in 0..10 {
            f.push(
                Cell::new(&base * sign_scaled(i))
                    .with_bound_estimate(base[0])
                    .with_heuristic_weight(0.5),
            );
        }
        for remaining in (0..10).rev() {
            f.pop().unwrap();
            assert_eq!(f.len(), remaining);
            assert!(f.check_consistency().is_ok());
        }
        let stats = f.statistics();
        assert_eq!(stats.pops_first + stats.pops_second, 10);
    }

    #[test]
    fn test_first_only_after_two_pops() {
        let mut f = frontier(
            CostStrategy::WeightedTightness,
            AlternationPolicy::Percentage {
                first_percent: 100,
                seed: 0,
            },
            100.0,
        );
        for cell in annotated_cells(4, 0.2) {
            f.push(cell);
        }
        f.pop().unwrap();
        f.pop().unwrap();
        assert_eq!(f.len(), 8);
        assert_eq!(f.statistics().pops_first, 2);
        assert_eq!(f.top().unwrap().region(), &(&base_box(4) * sign_scaled(5)));
    }

    #[test]
    fn test_contract_between_pops() {
        let mut f = frontier(CostStrategy::WeightedTightness, AlternationPolicy::FirstOnly, 10.0);
        for cell in annotated_cells(4, 0.2) {
            f.push(cell);
        }
        f.pop().unwrap();
        f.pop().unwrap();
        // Only the goal lower bound 120 exceeds 100; pf.lb = 75 does not.
        assert_eq!(f.contract(100.0), 1);
        f.pop().unwrap();
        f.pop().unwrap();
        assert_eq!(f.len(), 5);
        assert!(f.check_consistency().is_ok());

        let text = f.to_string();
        assert!(text.starts_with(
            "DualFrontier(first: GoalLowerBound(goal_var: 1), second: WeightedTightness, \
             alternation: FirstOnly, best bound: 10, cells: 5)"
        ));
        assert_eq!(text.lines().count(), 6);
        assert_eq!(f.flush(), 5);
        assert!(f.is_empty());
    }

    #[test]
    fn test_identical_frontiers_agree_after_reorder() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let weights: Vec<f64> = (0..10).map(|_| rng.random_range(0.0..1.0)).collect();
        let mut a = frontier(CostStrategy::WeightedTightness, AlternationPolicy::Strict, 100.0);
        let mut b = frontier(CostStrategy::WeightedTightness, AlternationPolicy::Strict, 100.0);
        for (cell, &w) in annotated_cells(4, 0.0).into_iter().zip(weights.iter()) {
            a.push(cell.clone().with_heuristic_weight(w));
            b.push(cell.with_heuristic_weight(w));
        }
        for _ in 0..2 {
            assert_eq!(a.pop().unwrap(), b.pop().unwrap());
        }
        a.reorder();
        b.reorder();
        for _ in 0..2 {
            assert_eq!(a.pop().unwrap(), b.pop().unwrap());
        }
        assert_eq!(a.top().unwrap(), b.top().unwrap());
        assert_eq!(a.len(), 6);
        assert_eq!(b.len(), 6);
        assert_eq!(a.flush(), 6);
        assert_eq!(a.len(), 0);
    }

    #[test]
    fn test_contract_keeps_cells_admissible_under_both_strategies() {
        let mut f = frontier(CostStrategy::WeightedTightness, AlternationPolicy::Strict, f64::INFINITY);
        let cells = self_estimated_cells(2, 0.2);
        for cell in cells.iter().cloned() {
            f.push(cell);
        }
        f.set_best_bound(100.0);

        let expected = cells
            .iter()
            .filter(|c| !GOAL_LB.is_dominated(*c, 100.0))
            .filter(|c| !CostStrategy::WeightedTightness.is_dominated(*c, 100.0))
            .count();
        // pf.lb = 75 * i^2 leaves cells 0 and 1.
        assert_eq!(expected, 2);
        assert_eq!(f.contract(100.0), 8);
        assert_eq!(f.len(), expected);
        assert!(f.check_consistency().is_ok());
        for (_, cell) in f.iter() {
            assert!(!GOAL_LB.is_dominated(cell, 100.0));
            assert!(!CostStrategy::WeightedTightness.is_dominated(cell, 100.0));
        }
    }

    #[test]
    fn test_views_stay_equal_under_random_operations() {
        let mut rng = ChaCha8Rng::seed_from_u64(2025);
        let mut f = frontier(
            CostStrategy::Tightness,
            AlternationPolicy::Quota {
                first: 3,
                second: 2,
            },
            1000.0,
        );

        for _ in 0..600 {
            match rng.random_range(0..20) {
                0..=10 => {
                    let lb: f64 = rng.random_range(-50.0..50.0);
                    let width: f64 = rng.random_range(0.1..20.0);
                    let est: f64 = rng.random_range(-100.0..100.0);
                    let cell = Cell::new(IntervalVector::from_bounds(&[
                        [0.0, 1.0],
                        [lb, lb + width],
                    ]))
                    .with_bound_estimate(Interval::new(est, est + width))
                    .with_heuristic_weight(rng.random_range(0.0..1.0));
                    f.push(cell);
                }
                11..=15 => {
                    let _ = f.pop();
                }
                16 => {
                    let threshold = rng.random_range(0.0..100.0);
                    f.contract(threshold);
                }
                17 => {
                    let bound = rng.random_range(0.0..1000.0);
                    f.update_best_bound(bound);
                }
                18 => {
                    f.set_best_bound(rng.random_range(0.0..1000.0));
                }
                _ => {
                    if rng.random_range(0..10) == 0 {
                        f.flush();
                    }
                }
            }
            assert!(f.check_consistency().is_ok());
        }
    }

    #[test]
    fn test_reorder_keeps_the_set() {
        let mut f = frontier(CostStrategy::Tightness, AlternationPolicy::Strict, 1000.0);
        for cell in self_estimated_cells(2, 0.5) {
            f.push(cell);
        }
        let before = sorted_ids(&f);
        f.set_best_bound(500.0);
        f.reorder();
        assert_eq!(sorted_ids(&f), before);
        assert!(f.check_consistency().is_ok());
        for (id, cell) in f.iter() {
            assert_eq!(
                f.recorded_cost(View::Second, id),
                Some(f.cost_of(View::Second, cell))
            );
        }
    }

    #[test]
    fn test_set_best_bound_reranks_dependent_view_only() {
        let mut f = frontier(CostStrategy::Tightness, AlternationPolicy::Strict, 1000.0);
        for cell in self_estimated_cells(2, 0.5) {
            f.push(cell);
        }
        f.set_best_bound(500.0);
        assert_eq!(f.statistics().reorders, 1);
        assert_eq!(f.statistics().bound_updates, 1);
        assert_eq!(f.best_bound(), 500.0);
    }

    #[test]
    fn test_update_best_bound_prunes_and_reranks() {
        let mut f = frontier(CostStrategy::Tightness, AlternationPolicy::Strict, f64::INFINITY);
        for cell in self_estimated_cells(2, 0.5) {
            f.push(cell);
        }
        assert_eq!(f.update_best_bound(100.0), 8);
        assert_eq!(f.len(), 2);
        assert_eq!(f.best_bound(), 100.0);
        for view in [View::First, View::Second] {
            for (id, cell) in f.iter() {
                assert_eq!(f.recorded_cost(view, id), Some(f.cost_of(view, cell)));
            }
        }

        // Nothing left to prune: the dependent view is still re-ranked.
        let reorders = f.statistics().reorders;
        assert_eq!(f.update_best_bound(90.0), 0);
        assert_eq!(f.statistics().reorders, reorders + 1);
    }

    #[test]
    fn test_quota_visits_views_in_pattern() {
        let mut f = frontier(
            CostStrategy::EstimateUpperBound,
            AlternationPolicy::Quota {
                first: 2,
                second: 1,
            },
            f64::INFINITY,
        );
        for cell in bare_cells(2) {
            f.push(cell);
        }
        let mut views = Vec::new();
        while !f.is_empty() {
            views.push(f.current_view());
            f.pop().unwrap();
        }
        use View::{First as A, Second as B};
        assert_eq!(views, vec![A, A, B, A, A, B, A, A, B, A]);
        assert_eq!(f.statistics().pops_first, 7);
        assert_eq!(f.statistics().pops_second, 3);
    }

    #[test]
    fn test_second_view_pop_removes_twin() {
        let mut f = frontier(CostStrategy::HeuristicWeight, AlternationPolicy::SecondOnly, f64::INFINITY);
        let mut ids = Vec::new();
        for (i, cell) in bare_cells(2).into_iter().enumerate() {
            ids.push(f.push(cell.with_heuristic_weight(i as f64)));
        }
        // Largest weight first.
        let popped = f.pop().unwrap();
        assert_eq!(popped.heuristic_weight(), 9.0);
        assert!(f.get(ids[9]).is_none());
        assert_eq!(f.recorded_cost(View::First, ids[9]), None);
        assert!(f.check_consistency().is_ok());
    }

    #[test]
    fn test_percentage_is_reproducible() {
        let policy = AlternationPolicy::Percentage {
            first_percent: 30,
            seed: 99,
        };
        let drain = || {
            let mut f = frontier(CostStrategy::EstimateUpperBound, policy, f64::INFINITY);
            for cell in self_estimated_cells(2, 0.1) {
                f.push(cell);
            }
            let mut order = Vec::new();
            while let Ok(cell) = f.pop() {
                order.push(cell);
            }
            order
        };
        assert_eq!(drain(), drain());
    }

    #[test]
    fn test_top_matches_pop() {
        let mut f = frontier(
            CostStrategy::EstimateUpperBound,
            AlternationPolicy::Percentage {
                first_percent: 50,
                seed: 1,
            },
            f64::INFINITY,
        );
        for cell in self_estimated_cells(2, 0.1) {
            f.push(cell);
        }
        while !f.is_empty() {
            let peeked = f.top().unwrap().clone();
            assert_eq!(f.top().unwrap(), &peeked);
            assert_eq!(f.pop().unwrap(), peeked);
        }
    }

    #[test]
    fn test_from_config_rejects_invalid_policy() {
        let config = FrontierConfig {
            alternation: AlternationPolicy::Quota {
                first: 0,
                second: 0,
            },
            ..FrontierConfig::<f64>::default()
        };
        assert_eq!(
            DualFrontier::from_config(config).unwrap_err(),
            FrontierError::InvalidConfig(ConfigError::EmptyQuota)
        );
    }

    #[test]
    fn test_flush_keeps_alternation_and_counts() {
        let mut f = frontier(CostStrategy::EstimateUpperBound, AlternationPolicy::Strict, f64::INFINITY);
        for cell in bare_cells(2) {
            f.push(cell);
        }
        f.pop().unwrap();
        assert_eq!(f.current_view(), View::Second);
        assert_eq!(f.flush(), 9);
        assert_eq!(f.current_view(), View::Second);
        assert_eq!(f.statistics().cells_flushed, 9);
        assert!(f.check_consistency().is_ok());
    }

    #[test]
    fn test_single_view_dual_matches_ranked_frontier() {
        for strategy in [
            CostStrategy::GoalLowerBound { goal_var: 1 },
            CostStrategy::GoalUpperBound { goal_var: 1 },
            CostStrategy::GoalLowerBound { goal_var: 3 },
        ] {
            let mut ranked = RankedFrontier::new(strategy);
            let config = FrontierConfig::builder()
                .first(strategy)
                .second(CostStrategy::WeightedTightness)
                .alternation(AlternationPolicy::FirstOnly)
                .build()
                .unwrap();
            let mut dual = DualFrontier::from_config(config).unwrap();
            for cell in bare_cells(4) {
                ranked.push(cell.clone());
                dual.push(cell);
            }

            for _ in 0..2 {
                assert_eq!(ranked.pop().unwrap(), dual.pop().unwrap());
            }
            assert_eq!(ranked.top().unwrap(), dual.top().unwrap());
            assert_eq!(ranked.len(), dual.len());
            assert_eq!(dual.len(), 8);
        }
    }

    #[test]
    fn test_goal_and_estimate_orderings_agree_when_estimate_is_goal() {
        // pf is the goal component itself, so both rankings see the same key.
        let cells: Vec<Cell<f64>> = bare_cells(4)
            .into_iter()
            .map(|cell| {
                let goal = cell.region()[1];
                cell.with_bound_estimate(goal)
            })
            .collect();

        let mut by_goal = RankedFrontier::new(GOAL_LB);
        let mut by_estimate = RankedFrontier::new(CostStrategy::EstimateLowerBound);
        let config = FrontierConfig::builder()
            .first(CostStrategy::EstimateLowerBound)
            .second(GOAL_LB)
            .alternation(AlternationPolicy::Strict)
            .build()
            .unwrap();
        let mut mixed = DualFrontier::from_config(config).unwrap();
        for cell in cells {
            by_goal.push(cell.clone());
            by_estimate.push(cell.clone());
            mixed.push(cell);
        }

        for _ in 0..2 {
            let expected = by_goal.pop().unwrap();
            // Strict alternation of two equivalent rankings pops the same
            // sequence as either ranking alone.
            assert_eq!(mixed.pop().unwrap(), expected);
            assert_eq!(by_estimate.pop().unwrap(), expected);
        }
        assert_eq!(by_goal.top().unwrap(), mixed.top().unwrap());
        assert_eq!(by_goal.top().unwrap(), by_estimate.top().unwrap());
        assert_eq!(by_goal.top().unwrap().region(), &(&base_box(4) * sign_scaled(5)));
        assert_eq!(by_goal.len(), by_estimate.len());
        assert_eq!(by_goal.len(), mixed.len());
    }

    #[test]
    fn test_bound_update_is_reported_after_pruning() {
        let config = FrontierConfig::builder()
            .first(GOAL_LB)
            .second(CostStrategy::Tightness)
            .build()
            .unwrap();
        let mut f = DualFrontier::with_monitor(config, BoundRecorder::default()).unwrap();
        for cell in self_estimated_cells(2, 0.5) {
            f.push(cell);
        }
        assert_eq!(f.update_best_bound(100.0), 8);
        assert_eq!(f.update_best_bound(90.0), 0);

        let updates = &f.monitor().updates;
        assert_eq!(updates.len(), 2);
        // Each report already reflects the contraction and re-ranking it
        // triggered.
        assert_eq!(updates[0], (f64::INFINITY, 100.0, 8, 0));
        assert_eq!(updates[1], (100.0, 90.0, 8, 1));
    }
}
