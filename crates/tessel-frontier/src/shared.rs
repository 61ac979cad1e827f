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

//! # Sharing a Frontier Between Workers
//!
//! Frontiers are single-threaded. This module provides the two pieces a
//! multi-threaded optimizer needs on top of them:
//!
//! - `SharedBestBound`: the best-known bound `loup` as an `AtomicU64` holding
//!   the bits of an `f64`. Reads are lock-free; `tighten` installs a
//!   candidate only if it is strictly smaller, via a compare-exchange loop.
//! - `SharedFrontier`: a `DualFrontier` behind a `std::sync::Mutex`. Every
//!   operation takes the lock for its duration. `top` returns a clone since a
//!   reference cannot outlive the guard.
//!
//! A lock poisoned by a panicking worker is reported as
//! `FrontierError::Poisoned` instead of propagating the panic.
//!
//! ## Usage
//!
//! ```rust
//! use tessel_frontier::cost::CostStrategy;
//! use tessel_frontier::dual::DualFrontier;
//! use tessel_frontier::shared::{SharedBestBound, SharedFrontier};
//!
//! let frontier = SharedFrontier::new(DualFrontier::<f64>::new(
//!     CostStrategy::GoalLowerBound { goal_var: 0 },
//!     CostStrategy::WeightedTightness,
//! ));
//! let loup = SharedBestBound::new();
//!
//! if loup.tighten(42.0) {
//!     frontier.update_best_bound(loup.get()).unwrap();
//! }
//! assert!(frontier.is_empty().unwrap());
//! ```

use crate::{
    arena::CellId,
    cell::Cell,
    dual::DualFrontier,
    error::FrontierError,
    monitor::{frontier_monitor::FrontierMonitor, no_op::NoOperationMonitor},
    num::BoundNumeric,
};
use std::sync::{
    Mutex, MutexGuard,
    atomic::{AtomicU64, Ordering},
};

/// A best-known bound readable and tightenable from many threads.
///
/// Starts at `+inf`, meaning no solution is known.
#[derive(Debug)]
pub struct SharedBestBound {
    bits: AtomicU64,
}

impl Default for SharedBestBound {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SharedBestBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SharedBestBound({})", self.get())
    }
}

impl SharedBestBound {
    #[inline]
    pub fn new() -> Self {
        Self::with_value(f64::INFINITY)
    }

    #[inline]
    pub fn with_value(value: f64) -> Self {
        Self {
            bits: AtomicU64::new(value.to_bits()),
        }
    }

    /// Returns the current bound.
    #[inline]
    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }

    /// Returns the current bound converted to `T`, or `None` if it is not
    /// representable.
    #[inline]
    pub fn get_as<T>(&self) -> Option<T>
    where
        T: BoundNumeric,
    {
        num_traits::cast(self.get())
    }

    /// Installs `candidate` if it is strictly smaller than the current bound.
    /// Returns `true` if it was installed. NaN is never installed.
    pub fn tighten(&self, candidate: f64) -> bool {
        if candidate.is_nan() {
            return false;
        }

        let mut current = self.bits.load(Ordering::Acquire);
        loop {
            if candidate >= f64::from_bits(current) {
                return false;
            }
            match self.bits.compare_exchange_weak(
                current,
                candidate.to_bits(),
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return true,
                Err(observed) => current = observed,
            }
        }
    }
}

/// A dual frontier guarded by a mutex.
#[derive(Debug)]
pub struct SharedFrontier<T, M = NoOperationMonitor<T>>
where
    T: BoundNumeric,
    M: FrontierMonitor<T>,
{
    inner: Mutex<DualFrontier<T, M>>,
}

impl<T, M> SharedFrontier<T, M>
where
    T: BoundNumeric,
    M: FrontierMonitor<T>,
{
    #[inline]
    pub fn new(frontier: DualFrontier<T, M>) -> Self {
        Self {
            inner: Mutex::new(frontier),
        }
    }

    #[inline]
    fn lock(&self) -> Result<MutexGuard<'_, DualFrontier<T, M>>, FrontierError> {
        self.inner.lock().map_err(|_| FrontierError::Poisoned)
    }

    #[inline]
    pub fn push(&self, cell: Cell<T>) -> Result<CellId, FrontierError> {
        Ok(self.lock()?.push(cell))
    }

    #[inline]
    pub fn pop(&self) -> Result<Cell<T>, FrontierError> {
        self.lock()?.pop()
    }

    /// Returns a copy of the cell `pop` would return now.
    #[inline]
    pub fn top(&self) -> Result<Cell<T>, FrontierError> {
        self.lock()?.top().cloned()
    }

    #[inline]
    pub fn len(&self) -> Result<usize, FrontierError> {
        Ok(self.lock()?.len())
    }

    #[inline]
    pub fn is_empty(&self) -> Result<bool, FrontierError> {
        Ok(self.lock()?.is_empty())
    }

    #[inline]
    pub fn set_best_bound(&self, best_bound: T) -> Result<(), FrontierError> {
        self.lock()?.set_best_bound(best_bound);
        Ok(())
    }

    #[inline]
    pub fn contract(&self, threshold: T) -> Result<usize, FrontierError> {
        Ok(self.lock()?.contract(threshold))
    }

    #[inline]
    pub fn update_best_bound(&self, best_bound: T) -> Result<usize, FrontierError> {
        Ok(self.lock()?.update_best_bound(best_bound))
    }

    #[inline]
    pub fn reorder(&self) -> Result<(), FrontierError> {
        self.lock()?.reorder();
        Ok(())
    }

    #[inline]
    pub fn flush(&self) -> Result<usize, FrontierError> {
        Ok(self.lock()?.flush())
    }

    /// Runs `f` with exclusive access to the frontier, for sequences of
    /// operations that must not interleave with other workers.
    #[inline]
    pub fn with_lock<R, F>(&self, f: F) -> Result<R, FrontierError>
    where
        F: FnOnce(&mut DualFrontier<T, M>) -> R,
    {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }

    /// Consumes the wrapper and returns the frontier.
    #[inline]
    pub fn into_inner(self) -> Result<DualFrontier<T, M>, FrontierError> {
        self.inner.into_inner().map_err(|_| FrontierError::Poisoned)
    }
}
