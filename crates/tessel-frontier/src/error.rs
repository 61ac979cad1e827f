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

//! Frontier errors
//!
//! - `FrontierError::EmptyFrontier` is the ordinary termination signal of a
//!   branch-and-bound search: `pop`/`top` on an empty frontier.
//! - `FrontierError::InvalidConfig` rejects a construction request.
//! - `FrontierError::InconsistentView` describes a broken internal invariant.
//!   `check_consistency` reports it; the hot path panics instead, since a
//!   frontier in that state would silently corrupt the search result.
//! - `FrontierError::Poisoned` is returned by `SharedFrontier` after a thread
//!   panicked while holding the lock.

use crate::{arena::CellId, policy::View};

/// The error type for frontier configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A percentage alternation policy was given a value above 100.
    PercentageOutOfRange(u8),
    /// A quota alternation policy was given zero pops for both views.
    EmptyQuota,
    /// The initial best-known bound is NaN.
    NanBestBound,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PercentageOutOfRange(p) => {
                write!(f, "Alternation percentage must be within 0..=100, got {}", p)
            }
            Self::EmptyQuota => write!(f, "Alternation quota must allow at least one pop"),
            Self::NanBestBound => write!(f, "Initial best-known bound must not be NaN"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// The error type for frontier operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontierError {
    /// `pop` or `top` was called on an empty frontier.
    EmptyFrontier,
    /// The frontier configuration was rejected.
    InvalidConfig(ConfigError),
    /// An internal invariant is broken.
    InconsistentView {
        /// The view in which the violation was found.
        view: View,
        /// The cell involved, if the violation concerns a single cell.
        cell: Option<CellId>,
        /// What is wrong.
        reason: &'static str,
    },
    /// A shared frontier's lock was poisoned.
    Poisoned,
}

impl std::fmt::Display for FrontierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyFrontier => write!(f, "The frontier is empty"),
            Self::InvalidConfig(e) => write!(f, "Invalid frontier configuration: {}", e),
            Self::InconsistentView {
                view,
                cell: Some(cell),
                reason,
            } => write!(f, "Inconsistent {} view at {}: {}", view, cell, reason),
            Self::InconsistentView {
                view,
                cell: None,
                reason,
            } => write!(f, "Inconsistent {} view: {}", view, reason),
            Self::Poisoned => write!(f, "The shared frontier lock was poisoned"),
        }
    }
}

impl std::error::Error for FrontierError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfig(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for FrontierError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfig(e)
    }
}
