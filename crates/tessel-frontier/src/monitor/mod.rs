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

//! Monitoring utilities for frontiers
//!
//! Defines the `FrontierMonitor` trait plus lightweight implementations to
//! observe a frontier without touching its logic.
//!
//! Components
//! - `frontier_monitor`: the monitoring interface.
//! - `composite`: fan-out monitor.
//! - `log`: periodic console progress reporting.
//! - `no_op`: zero-overhead placeholder and the frontiers' default.
//!
//! Notes
//! - Callbacks take `&mut self` and run on the hot path; keep them cheap.
//! - Callbacks observe; they cannot alter what the frontier does.

pub mod composite;
pub mod frontier_monitor;
pub mod log;
pub mod no_op;
