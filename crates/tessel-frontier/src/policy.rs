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

//! View alternation
//!
//! A dual frontier ranks the same cells two ways and needs a rule for which
//! ranking supplies the next pop. `AlternationPolicy` names the rule and
//! `Alternator` runs it as a small state machine with no terminal state.
//!
//! Policies
//! - `Strict`: first, second, first, second, ...
//! - `Quota { first, second }`: `first` pops from the first view, then
//!   `second` pops from the second view, repeating.
//! - `FirstOnly` / `SecondOnly`: always the same view.
//! - `Percentage { first_percent, seed }`: every pop independently uses the
//!   first view with probability `first_percent`%. Draws come from a
//!   `ChaCha8Rng` seeded with `seed`, so a run is reproducible.
//!
//! The alternator always knows the view of the *next* pop (`current`), so
//! peeking at the frontier never consumes a random draw.

use crate::error::ConfigError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One of the two orderings of a dual frontier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum View {
    First,
    Second,
}

impl View {
    /// Returns the other view.
    #[inline(always)]
    pub fn other(self) -> Self {
        match self {
            View::First => View::Second,
            View::Second => View::First,
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            View::First => write!(f, "first"),
            View::Second => write!(f, "second"),
        }
    }
}

/// Rule selecting the view that supplies each pop.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum AlternationPolicy {
    /// Alternate on every pop, starting with the first view.
    #[default]
    Strict,
    /// Pop `first` times from the first view, then `second` times from the
    /// second view, and repeat.
    Quota { first: u32, second: u32 },
    /// Always pop from the first view.
    FirstOnly,
    /// Always pop from the second view.
    SecondOnly,
    /// Pop from the first view with probability `first_percent`%, drawn
    /// from a generator seeded with `seed`.
    Percentage { first_percent: u8, seed: u64 },
}

impl AlternationPolicy {
    /// Checks the policy parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PercentageOutOfRange`] for a percentage above
    /// 100 and [`ConfigError::EmptyQuota`] for a quota of zero pops on both
    /// views.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            AlternationPolicy::Percentage { first_percent, .. } if first_percent > 100 => {
                Err(ConfigError::PercentageOutOfRange(first_percent))
            }
            AlternationPolicy::Quota {
                first: 0,
                second: 0,
            } => Err(ConfigError::EmptyQuota),
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for AlternationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlternationPolicy::Strict => write!(f, "Strict"),
            AlternationPolicy::Quota { first, second } => {
                write!(f, "Quota(first: {}, second: {})", first, second)
            }
            AlternationPolicy::FirstOnly => write!(f, "FirstOnly"),
            AlternationPolicy::SecondOnly => write!(f, "SecondOnly"),
            AlternationPolicy::Percentage {
                first_percent,
                seed,
            } => write!(f, "Percentage(first: {}%, seed: {})", first_percent, seed),
        }
    }
}

/// State machine executing an `AlternationPolicy`.
#[derive(Clone, Debug)]
pub struct Alternator {
    policy: AlternationPolicy,
    current: View,
    remaining: u32,
    rng: Option<ChaCha8Rng>,
}

impl Alternator {
    /// Creates the state machine in its initial state.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the policy does not validate.
    pub fn new(policy: AlternationPolicy) -> Self {
        debug_assert!(
            policy.validate().is_ok(),
            "called `Alternator::new` with an invalid policy {}",
            policy
        );

        let mut alternator = Self {
            policy,
            current: View::First,
            remaining: 0,
            rng: None,
        };
        alternator.reset();
        alternator
    }

    /// Returns the policy being executed.
    #[inline]
    pub fn policy(&self) -> AlternationPolicy {
        self.policy
    }

    /// Returns the view that supplies the next pop.
    #[inline]
    pub fn current(&self) -> View {
        self.current
    }

    /// Moves to the state after one pop from `current()`.
    pub fn advance(&mut self) {
        match self.policy {
            AlternationPolicy::Strict => self.current = self.current.other(),
            AlternationPolicy::Quota { .. } => {
                self.remaining = self.remaining.saturating_sub(1);
                if self.remaining == 0 {
                    self.current = self.current.other();
                    self.remaining = self.quota(self.current);
                    if self.remaining == 0 {
                        // The other side has a zero quota; stay put.
                        self.current = self.current.other();
                        self.remaining = self.quota(self.current);
                    }
                }
            }
            AlternationPolicy::FirstOnly | AlternationPolicy::SecondOnly => {}
            AlternationPolicy::Percentage { first_percent, .. } => {
                self.current = self.draw(first_percent);
            }
        }
    }

    /// Returns to the initial state, reseeding the generator if any.
    pub fn reset(&mut self) {
        self.rng = None;
        self.remaining = 0;
        match self.policy {
            AlternationPolicy::Strict | AlternationPolicy::FirstOnly => {
                self.current = View::First;
            }
            AlternationPolicy::SecondOnly => self.current = View::Second,
            AlternationPolicy::Quota { first, second } => {
                if first > 0 {
                    self.current = View::First;
                    self.remaining = first;
                } else {
                    self.current = View::Second;
                    self.remaining = second;
                }
            }
            AlternationPolicy::Percentage {
                first_percent,
                seed,
            } => {
                self.rng = Some(ChaCha8Rng::seed_from_u64(seed));
                self.current = self.draw(first_percent);
            }
        }
    }

    #[inline]
    fn quota(&self, view: View) -> u32 {
        match (self.policy, view) {
            (AlternationPolicy::Quota { first, .. }, View::First) => first,
            (AlternationPolicy::Quota { second, .. }, View::Second) => second,
            _ => 0,
        }
    }

    #[inline]
    fn draw(&mut self, first_percent: u8) -> View {
        match self.rng.as_mut() {
            Some(rng) => {
                if rng.random_range(0..100u8) < first_percent {
                    View::First
                } else {
                    View::Second
                }
            }
            None => View::First,
        }
    }
}
