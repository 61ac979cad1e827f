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

//! Identity-indexed binary min-heap.
//!
//! `IndexedHeap<T>` orders `CellId` handles by `(cost, seq)`: smallest cost
//! first, equal costs in insertion order. Alongside the array-backed heap it
//! keeps `positions`, a table from handle to current heap slot that is
//! rewritten on every swap. That table is what lets a dual frontier delete
//! a cell's twin from the middle of the other view in `O(log n)`.
//!
//! Costs are computed by the owning frontier; this type never sees cells.
//! `rebuild` replaces the whole content in `O(n)` (Floyd heapify), which is
//! how contraction and re-ranking restore the heap invariant.

use crate::{arena::CellId, num::BoundNumeric};
use std::cmp::Ordering;

/// Marker for handles that are not in the heap.
const NOT_QUEUED: usize = usize::MAX;

#[derive(Clone, Copy, Debug)]
pub(crate) struct HeapEntry<T>
where
    T: BoundNumeric,
{
    pub(crate) cost: T,
    pub(crate) seq: u64,
    pub(crate) id: CellId,
}

impl<T> HeapEntry<T>
where
    T: BoundNumeric,
{
    /// Returns `true` if `self` must be popped before `other`.
    #[inline(always)]
    fn precedes(&self, other: &Self) -> bool {
        match self.cost.partial_cmp(&other.cost) {
            Some(Ordering::Less) => true,
            Some(Ordering::Greater) => false,
            _ => self.seq < other.seq,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct IndexedHeap<T>
where
    T: BoundNumeric,
{
    entries: Vec<HeapEntry<T>>,
    positions: Vec<usize>,
}

impl<T> Default for IndexedHeap<T>
where
    T: BoundNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IndexedHeap<T>
where
    T: BoundNumeric,
{
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub(crate) fn contains(&self, id: CellId) -> bool {
        self.position(id).is_some()
    }

    /// Returns the cost recorded for `id`.
    #[inline]
    pub(crate) fn cost_of(&self, id: CellId) -> Option<T> {
        self.position(id).map(|p| self.entries[p].cost)
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<CellId> {
        self.entries.first().map(|e| e.id)
    }

    #[inline]
    pub(crate) fn peek_entry(&self) -> Option<&HeapEntry<T>> {
        self.entries.first()
    }

    /// Inserts `id`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `id` is already queued.
    #[inline]
    pub(crate) fn push(&mut self, id: CellId, cost: T, seq: u64) {
        debug_assert!(
            !self.contains(id),
            "called `IndexedHeap::push` with {} which is already queued",
            id
        );
        let slot = self.entries.len();
        self.entries.push(HeapEntry { cost, seq, id });
        self.set_position(id, slot);
        self.sift_up(slot);
    }

    /// Removes and returns the handle with the smallest `(cost, seq)`.
    #[inline]
    pub(crate) fn pop(&mut self) -> Option<CellId> {
        if self.entries.is_empty() {
            return None;
        }
        Some(self.remove_at(0).id)
    }

    /// Removes `id` from anywhere in the heap. Returns `false` if it was not
    /// queued.
    #[inline]
    pub(crate) fn remove(&mut self, id: CellId) -> bool {
        match self.position(id) {
            Some(slot) => {
                self.remove_at(slot);
                true
            }
            None => false,
        }
    }

    /// Removes every handle.
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    /// Replaces the content with `entries` and restores the heap invariant
    /// bottom-up.
    pub(crate) fn rebuild<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = HeapEntry<T>>,
    {
        self.clear();
        self.entries.extend(entries);
        for slot in 0..self.entries.len() {
            let id = self.entries[slot].id;
            debug_assert!(
                !self.contains(id),
                "called `IndexedHeap::rebuild` with duplicate handle {}",
                id
            );
            self.set_position(id, slot);
        }
        for slot in (0..self.entries.len() / 2).rev() {
            self.sift_down(slot);
        }
    }

    /// Returns an iterator over the queued handles in heap-array order.
    #[inline]
    pub(crate) fn ids(&self) -> impl Iterator<Item = CellId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    /// Returns the queued handles sorted in pop order, without mutating.
    pub(crate) fn sorted_ids(&self) -> Vec<CellId> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| {
            if a.precedes(b) {
                Ordering::Less
            } else if b.precedes(a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        sorted.into_iter().map(|e| e.id).collect()
    }

    /// Checks the heap order and the position table. Returns a description
    /// of the first violation found.
    pub(crate) fn validate(&self) -> Result<(), (Option<CellId>, &'static str)> {
        for (slot, entry) in self.entries.iter().enumerate() {
            if self.position(entry.id) != Some(slot) {
                return Err((Some(entry.id), "position table does not match heap slot"));
            }
            if slot > 0 {
                let parent = &self.entries[(slot - 1) / 2];
                if entry.precedes(parent) {
                    return Err((Some(entry.id), "heap order violated"));
                }
            }
        }
        let tracked = self.positions.iter().filter(|&&p| p != NOT_QUEUED).count();
        if tracked != self.entries.len() {
            return Err((None, "position table tracks handles that are not queued"));
        }
        Ok(())
    }

    #[inline(always)]
    fn position(&self, id: CellId) -> Option<usize> {
        match self.positions.get(id.get()) {
            Some(&p) if p != NOT_QUEUED => Some(p),
            _ => None,
        }
    }

    #[inline(always)]
    fn set_position(&mut self, id: CellId, slot: usize) {
        let index = id.get();
        if index >= self.positions.len() {
            self.positions.resize(index + 1, NOT_QUEUED);
        }
        self.positions[index] = slot;
    }

    #[inline]
    fn remove_at(&mut self, slot: usize) -> HeapEntry<T> {
        let removed = self.entries.swap_remove(slot);
        self.positions[removed.id.get()] = NOT_QUEUED;

        if slot < self.entries.len() {
            self.positions[self.entries[slot].id.get()] = slot;
            // The entry moved into `slot` may need to travel either way.
            if slot > 0 && self.entries[slot].precedes(&self.entries[(slot - 1) / 2]) {
                self.sift_up(slot);
            } else {
                self.sift_down(slot);
            }
        }
        removed
    }

    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        self.positions[self.entries[a].id.get()] = a;
        self.positions[self.entries[b].id.get()] = b;
    }

    #[inline]
    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.entries[slot].precedes(&self.entries[parent]) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    #[inline]
    fn sift_down(&mut self, mut slot: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.entries[right].precedes(&self.entries[left]) {
                right
            } else {
                left
            };
            if !self.entries[child].precedes(&self.entries[slot]) {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
    }
}
