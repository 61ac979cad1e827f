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
use std::time::{Duration, Instant};

const RULE_WIDTH: usize = 96;

/// Prints a progress table to standard output while a frontier is in use.
///
/// A line is printed at most once per `log_interval`, and the clock is only
/// consulted when the pop counter matches `clock_check_mask`.
#[derive(Debug, Clone)]
pub struct LogFrontierMonitor<T>
where
    T: BoundNumeric,
{
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    header_printed: bool,
    best_bound: Option<T>,
}

impl<T> LogFrontierMonitor<T>
where
    T: BoundNumeric,
{
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_log_time: now,
            log_interval,
            clock_check_mask,
            header_printed: false,
            best_bound: None,
        }
    }

    /// Returns the last best-known bound reported to this monitor.
    #[inline(always)]
    pub fn best_bound(&self) -> Option<T> {
        self.best_bound
    }

    #[inline(always)]
    fn ensure_header(&mut self) {
        if self.header_printed {
            return;
        }
        self.header_printed = true;
        println!(
            "{:<9} | {:<12} | {:<12} | {:<10} | {:<10} | {:<10} | {:<14}",
            "Elapsed", "Pushed", "Popped", "Live", "High water", "Pruned", "Best bound"
        );
        println!("{}", "-".repeat(RULE_WIDTH));
    }

    #[inline(always)]
    fn best_bound_field(&self) -> String {
        match self.best_bound {
            Some(bound) if bound.is_finite() => format!("{}", bound),
            _ => "Inf".to_string(),
        }
    }

    fn log_line(&mut self, stats: &FrontierStatistics) {
        self.ensure_header();

        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();
        let live = stats
            .cells_pushed
            .saturating_sub(stats.cells_popped)
            .saturating_sub(stats.cells_pruned)
            .saturating_sub(stats.cells_flushed);

        println!(
            "{:<9} | {:<12} | {:<12} | {:<10} | {:<10} | {:<10} | {:<14}",
            format!("{:.1}s", elapsed),
            stats.cells_pushed,
            stats.cells_popped,
            live,
            stats.high_water,
            stats.cells_pruned,
            self.best_bound_field()
        );

        self.last_log_time = now;
    }
}

impl<T> Default for LogFrontierMonitor<T>
where
    T: BoundNumeric,
{
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl<T> std::fmt::Display for LogFrontierMonitor<T>
where
    T: BoundNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogFrontierMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl<T> FrontierMonitor<T> for LogFrontierMonitor<T>
where
    T: BoundNumeric,
{
    fn name(&self) -> &str {
        "LogFrontierMonitor"
    }

    fn on_push(&mut self, _id: CellId, _cell: &Cell<T>, _statistics: &FrontierStatistics) {}

    fn on_pop(&mut self, _view: View, _cell: &Cell<T>, statistics: &FrontierStatistics) {
        if (statistics.cells_popped & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(statistics);
        }
    }

    fn on_prune(
        &mut self,
        _cell: &Cell<T>,
        _view: View,
        _threshold: T,
        _statistics: &FrontierStatistics,
    ) {
    }

    fn on_best_bound_updated(&mut self, _previous: T, current: T, statistics: &FrontierStatistics) {
        self.best_bound = Some(current);
        self.log_line(statistics);
    }

    fn on_reorder(&mut self, _view: View, _statistics: &FrontierStatistics) {}

    fn on_flush(&mut self, discarded: usize, statistics: &FrontierStatistics) {
        self.ensure_header();
        println!("{}", "-".repeat(RULE_WIDTH));
        println!(
            "Frontier flushed: {} cells discarded, {} popped, {} pruned.",
            discarded, statistics.cells_popped, statistics.cells_pruned
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_and_display() {
        let monitor = LogFrontierMonitor::<f64>::default();
        assert_eq!(
            monitor.to_string(),
            "LogFrontierMonitor(log_interval: 1s, clock_check_mask: 4095)"
        );
        assert_eq!(monitor.best_bound(), None);
        assert_eq!(FrontierMonitor::<f64>::name(&monitor), "LogFrontierMonitor");
    }

    #[test]
    fn test_tracks_best_bound() {
        let mut monitor = LogFrontierMonitor::<f64>::new(Duration::from_secs(3600), 0);
        let stats = FrontierStatistics::default();
        monitor.on_best_bound_updated(f64::INFINITY, 12.5, &stats);
        assert_eq!(monitor.best_bound(), Some(12.5));
        assert!(monitor.header_printed);
        monitor.on_best_bound_updated(12.5, 3.0, &stats);
        assert_eq!(monitor.best_bound(), Some(3.0));
    }
}
