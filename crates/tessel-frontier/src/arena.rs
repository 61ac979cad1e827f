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

//! Cell arena
//!
//! `CellArena<T>` owns every live cell of a frontier and hands out `CellId`
//! handles. Heap views store handles only, so a cell exists exactly once no
//! matter how many views rank it, and "the same cell" always means "the same
//! handle".
//!
//! Slots freed by `remove` are reused by later insertions. Each insertion
//! also receives a sequence number from a counter that only ever grows (it
//! survives `clear`); views use it to break cost ties in insertion order.

use crate::{cell::Cell, num::BoundNumeric};
use tessel_core::utils::index::{TypedIndex, TypedIndexTag};

/// Tag for cell handles.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct CellTag;

impl TypedIndexTag for CellTag {
    const NAME: &'static str = "CellId";
}

/// A handle to a cell held by a frontier.
pub type CellId = TypedIndex<CellTag>;

#[derive(Clone, Debug)]
struct Occupied<T>
where
    T: BoundNumeric,
{
    cell: Cell<T>,
    seq: u64,
}

/// A slab of cells addressed by `CellId`.
#[derive(Clone, Debug)]
pub struct CellArena<T>
where
    T: BoundNumeric,
{
    slots: Vec<Option<Occupied<T>>>,
    free: Vec<usize>,
    len: usize,
    next_seq: u64,
}

impl<T> Default for CellArena<T>
where
    T: BoundNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CellArena<T>
where
    T: BoundNumeric,
{
    /// Creates an empty arena.
    #[inline]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
            next_seq: 0,
        }
    }

    /// Creates an empty arena with room for `capacity` cells.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
            next_seq: 0,
        }
    }

    /// Returns the number of live cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns one past the largest handle index currently allocated.
    #[inline]
    pub fn id_bound(&self) -> usize {
        self.slots.len()
    }

    /// Returns the sequence number the next insertion will receive.
    #[inline]
    pub(crate) fn next_seq(&self) -> u64 {
        self.next_seq
    }

    /// Stores `cell` and returns its handle.
    #[inline]
    pub fn insert(&mut self, cell: Cell<T>) -> CellId {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.saturating_add(1);
        let occupied = Some(Occupied { cell, seq });

        self.len += 1;
        match self.free.pop() {
            Some(index) => {
                debug_assert!(
                    self.slots[index].is_none(),
                    "called `CellArena::insert` with an occupied free slot {}",
                    index
                );
                self.slots[index] = occupied;
                CellId::new(index)
            }
            None => {
                self.slots.push(occupied);
                CellId::new(self.slots.len() - 1)
            }
        }
    }

    /// Removes the cell behind `id` and returns it, or `None` if `id` is not
    /// live.
    #[inline]
    pub fn remove(&mut self, id: CellId) -> Option<Cell<T>> {
        let occupied = self.slots.get_mut(id.get())?.take()?;
        self.free.push(id.get());
        self.len -= 1;
        Some(occupied.cell)
    }

    /// Returns the cell behind `id`.
    #[inline]
    pub fn get(&self, id: CellId) -> Option<&Cell<T>> {
        self.slot(id).map(|o| &o.cell)
    }

    /// Returns the insertion sequence number of the cell behind `id`.
    #[inline]
    pub fn seq(&self, id: CellId) -> Option<u64> {
        self.slot(id).map(|o| o.seq)
    }

    /// Returns `true` if `id` refers to a live cell.
    #[inline]
    pub fn contains(&self, id: CellId) -> bool {
        self.slot(id).is_some()
    }

    /// Drops every cell and returns how many were dropped. Handles are
    /// invalidated; sequence numbers keep counting.
    #[inline]
    pub fn clear(&mut self) -> usize {
        let dropped = self.len;
        self.slots.clear();
        self.free.clear();
        self.len = 0;
        dropped
    }

    /// Returns an iterator over the live cells and their handles, in handle
    /// order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &Cell<T>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|o| (CellId::new(i), &o.cell)))
    }

    /// Returns an iterator over the live handles with their sequence numbers.
    #[inline]
    pub(crate) fn iter_with_seq(&self) -> impl Iterator<Item = (CellId, u64, &Cell<T>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|o| (CellId::new(i), o.seq, &o.cell)))
    }

    #[inline(always)]
    fn slot(&self, id: CellId) -> Option<&Occupied<T>> {
        self.slots.get(id.get()).and_then(Option::as_ref)
    }
}
