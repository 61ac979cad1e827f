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

use crate::policy::View;

/// Counters collected by a frontier over its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrontierStatistics {
    /// Cells inserted.
    pub cells_pushed: u64,
    /// Cells handed back to the caller by `pop`.
    pub cells_popped: u64,
    /// Pops served by the first view.
    pub pops_first: u64,
    /// Pops served by the second view.
    pub pops_second: u64,
    /// Cells discarded by contraction.
    pub cells_pruned: u64,
    /// Cells discarded by `flush`.
    pub cells_flushed: u64,
    /// Number of contraction passes.
    pub contractions: u64,
    /// Number of view rebuilds triggered by re-ranking.
    pub reorders: u64,
    /// Number of best-known bound updates.
    pub bound_updates: u64,
    /// Largest number of cells held at once.
    pub high_water: u64,
}

impl FrontierStatistics {
    #[inline]
    pub fn on_push(&mut self, live: usize) {
        self.cells_pushed = self.cells_pushed.saturating_add(1);
        self.high_water = self.high_water.max(live as u64);
    }

    #[inline]
    pub fn on_pop(&mut self, view: View) {
        self.cells_popped = self.cells_popped.saturating_add(1);
        match view {
            View::First => self.pops_first = self.pops_first.saturating_add(1),
            View::Second => self.pops_second = self.pops_second.saturating_add(1),
        }
    }

    /// Records one contraction pass that discarded `pruned` cells.
    #[inline]
    pub fn on_contraction(&mut self, pruned: usize) {
        self.contractions = self.contractions.saturating_add(1);
        self.cells_pruned = self.cells_pruned.saturating_add(pruned as u64);
    }

    #[inline]
    pub fn on_reorder(&mut self) {
        self.reorders = self.reorders.saturating_add(1);
    }

    #[inline]
    pub fn on_bound_update(&mut self) {
        self.bound_updates = self.bound_updates.saturating_add(1);
    }

    #[inline]
    pub fn on_flush(&mut self, flushed: usize) {
        self.cells_flushed = self.cells_flushed.saturating_add(flushed as u64);
    }
}

impl std::fmt::Display for FrontierStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tessel Frontier Statistics:")?;
        writeln!(f, "  Cells pushed:         {}", self.cells_pushed)?;
        writeln!(f, "  Cells popped:         {}", self.cells_popped)?;
        writeln!(f, "    from first view:    {}", self.pops_first)?;
        writeln!(f, "    from second view:   {}", self.pops_second)?;
        writeln!(f, "  Cells pruned:         {}", self.cells_pruned)?;
        writeln!(f, "  Cells flushed:        {}", self.cells_flushed)?;
        writeln!(f, "  Contractions:         {}", self.contractions)?;
        writeln!(f, "  Reorders:             {}", self.reorders)?;
        writeln!(f, "  Bound updates:        {}", self.bound_updates)?;
        writeln!(f, "  High water:           {}", self.high_water)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut s = FrontierStatistics::default();
        s.on_push(1);
        s.on_push(2);
        s.on_pop(View::First);
        s.on_pop(View::Second);
        s.on_pop(View::Second);
        s.on_contraction(3);
        s.on_contraction(0);
        s.on_reorder();
        s.on_bound_update();
        s.on_flush(4);
        s.on_push(1);

        assert_eq!(s.cells_pushed, 3);
        assert_eq!(s.cells_popped, 3);
        assert_eq!(s.pops_first, 1);
        assert_eq!(s.pops_second, 2);
        assert_eq!(s.cells_pruned, 3);
        assert_eq!(s.contractions, 2);
        assert_eq!(s.reorders, 1);
        assert_eq!(s.bound_updates, 1);
        assert_eq!(s.cells_flushed, 4);
        assert_eq!(s.high_water, 2);
    }

    #[test]
    fn test_saturation() {
        let mut s = FrontierStatistics {
            cells_pushed: u64::MAX,
            ..Default::default()
        };
        s.on_push(0);
        assert_eq!(s.cells_pushed, u64::MAX);
    }

    #[test]
    fn test_display_mentions_every_counter() {
        let text = FrontierStatistics::default().to_string();
        for label in [
            "Cells pushed",
            "Cells popped",
            "Cells pruned",
            "Reorders",
            "High water",
        ] {
            assert!(text.contains(label), "missing `{}` in {}", label, text);
        }
    }
}
