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

//! # Tessel Core
//!
//! Numeric primitives shared by the Tessel frontier crates. The frontier
//! itself treats bounds as opaque orderable values; this crate provides the
//! concrete carriers the optimizer attaches to a cell.
//!
//! ## Modules
//!
//! - `math`: Closed intervals `[lb, ub]` over any `num_traits::Float`, and
//!   `IntervalVector`, the axis-aligned box a cell covers.
//! - `utils`: Phantom-tagged, strongly typed indices (`TypedIndex<T>`) used to
//!   keep cell handles and heap slots apart.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
pub mod utils;
