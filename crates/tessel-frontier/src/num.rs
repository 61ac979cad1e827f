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

//! # Bound Numeric Trait
//!
//! `BoundNumeric` collects the capabilities the frontier needs from a bound
//! value into a single alias: IEEE floating point semantics through
//! `num_traits::Float` (infinities stand for "no bound yet"), formatting for
//! monitors, and `Send + Sync` so frontiers can move between worker threads.
//!
//! Costs are kept free of NaN (see `cost`), which makes the partial order of
//! `Float` total on every value a heap ever compares.

use num_traits::Float;
use std::cmp::Ordering;

/// A trait alias for the bound and cost values stored in a frontier.
/// In practice this is `f64` or `f32`.
pub trait BoundNumeric:
    Float + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
}

impl<T> BoundNumeric for T where
    T: Float + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
}

/// Compares two bound values, treating incomparable pairs as equal.
///
/// Frontier costs never contain NaN, so the fallback only matters for
/// caller-provided values.
#[inline(always)]
pub fn compare<T>(a: T, b: T) -> Ordering
where
    T: BoundNumeric,
{
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
