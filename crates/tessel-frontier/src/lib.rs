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

//! Tessel-Frontier: cell frontiers for interval branch-and-bound
//!
//! The frontier decides which pending cell an interval optimizer explores
//! next and discards cells that can no longer improve on the best-known
//! bound (`loup`). It does not split, contract, or evaluate boxes; those
//! collaborators produce cells and consume the ones popped here.
//!
//! Core flow
//! - Build a `config::FrontierConfig` naming two `cost::CostStrategy`s and an
//!   `policy::AlternationPolicy`.
//! - Create a `dual::DualFrontier` from it (or a `ranked::RankedFrontier` when
//!   one ordering is enough).
//! - `push` cells as the evaluator annotates them, `pop` the next one to
//!   branch on, and call `update_best_bound` whenever the incumbent improves.
//!
//! Design highlights
//! - One arena owns every live cell; each view is an indexed binary heap over
//!   `CellId` handles, so removing a cell's twin from the other view is
//!   `O(log n)`.
//! - `loup` is threaded explicitly; strategies that depend on it are re-ranked
//!   when it changes, the others are left untouched.
//! - Contraction computes the surviving set once and rebuilds every view from
//!   it, so the views can never disagree on membership.
//! - Equal costs pop in insertion order.
//!
//! Assumptions and guarantees
//! - Frontiers are single-threaded; wrap them in `shared::SharedFrontier`
//!   when several workers share one.
//! - A cell is owned by the frontier until it is popped, pruned or flushed.
//!
//! Module map
//! - `arena`: slab of live cells and the `CellId` handle.
//! - `cell`: the cell record.
//! - `config`: construction surface and validation.
//! - `cost`: ranking strategies.
//! - `dual`: the two-view frontier.
//! - `error`: error taxonomy.
//! - `heap`: identity-indexed binary heap.
//! - `monitor`: observation hooks (log, composite, no-op).
//! - `num`: numeric bounds for cost values.
//! - `policy`: view alternation state machine.
//! - `ranked`: the single-view frontier.
//! - `shared`: cross-thread best bound and mutex-guarded frontier.
//! - `stats`: counters.

pub mod arena;
pub mod cell;
pub mod config;
pub mod cost;
pub mod dual;
pub mod error;
#[cfg(test)]
mod fixtures;
mod heap;
pub mod monitor;
pub mod num;
pub mod policy;
pub mod ranked;
pub mod shared;
pub mod stats;
