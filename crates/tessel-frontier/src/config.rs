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

//! Frontier configuration
//!
//! `FrontierConfig` names the two cost strategies of a dual frontier, the
//! alternation policy between them and the initial best-known bound. Build it
//! directly with `FrontierConfig::new` or through `FrontierConfig::builder()`;
//! `DualFrontier::from_config` validates it before use.

use crate::{cost::CostStrategy, error::ConfigError, num::BoundNumeric, policy::AlternationPolicy};

/// Construction parameters of a dual frontier.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FrontierConfig<T>
where
    T: BoundNumeric,
{
    /// Strategy ranking the first view.
    pub first: CostStrategy,
    /// Strategy ranking the second view.
    pub second: CostStrategy,
    /// Rule selecting the view of each pop.
    pub alternation: AlternationPolicy,
    /// Best-known bound at construction time. `+inf` means no solution is
    /// known yet.
    pub initial_best_bound: T,
}

impl<T> FrontierConfig<T>
where
    T: BoundNumeric,
{
    /// Creates a configuration with strict alternation and no known bound.
    #[inline]
    pub fn new(first: CostStrategy, second: CostStrategy) -> Self {
        Self {
            first,
            second,
            alternation: AlternationPolicy::default(),
            initial_best_bound: T::infinity(),
        }
    }

    /// Returns a builder starting from the default configuration.
    #[inline]
    pub fn builder() -> FrontierConfigBuilder<T> {
        FrontierConfigBuilder::new()
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns the alternation policy's validation error, or
    /// [`ConfigError::NanBestBound`] when the initial bound is NaN.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.alternation.validate()?;
        if self.initial_best_bound.is_nan() {
            return Err(ConfigError::NanBestBound);
        }
        Ok(())
    }
}

impl<T> Default for FrontierConfig<T>
where
    T: BoundNumeric,
{
    /// Goal lower bound first, weighted tightness second: the pairing an
    /// interval optimizer usually runs with.
    fn default() -> Self {
        Self::new(
            CostStrategy::GoalLowerBound { goal_var: 0 },
            CostStrategy::WeightedTightness,
        )
    }
}

impl<T> std::fmt::Display for FrontierConfig<T>
where
    T: BoundNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FrontierConfig(first: {}, second: {}, alternation: {}, initial best bound: {})",
            self.first, self.second, self.alternation, self.initial_best_bound
        )
    }
}

/// Builder for [`FrontierConfig`].
#[derive(Clone, Copy, Debug)]
pub struct FrontierConfigBuilder<T>
where
    T: BoundNumeric,
{
    config: FrontierConfig<T>,
}

impl<T> Default for FrontierConfigBuilder<T>
where
    T: BoundNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FrontierConfigBuilder<T>
where
    T: BoundNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            config: FrontierConfig::default(),
        }
    }

    #[inline]
    pub fn first(mut self, strategy: CostStrategy) -> Self {
        self.config.first = strategy;
        self
    }

    #[inline]
    pub fn second(mut self, strategy: CostStrategy) -> Self {
        self.config.second = strategy;
        self
    }

    #[inline]
    pub fn alternation(mut self, policy: AlternationPolicy) -> Self {
        self.config.alternation = policy;
        self
    }

    #[inline]
    pub fn initial_best_bound(mut self, bound: T) -> Self {
        self.config.initial_best_bound = bound;
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    ///
    /// See [`FrontierConfig::validate`].
    pub fn build(self) -> Result<FrontierConfig<T>, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FrontierConfig::<f64>::default();
        assert_eq!(config.first, CostStrategy::GoalLowerBound { goal_var: 0 });
        assert_eq!(config.second, CostStrategy::WeightedTightness);
        assert_eq!(config.alternation, AlternationPolicy::Strict);
        assert_eq!(config.initial_best_bound, f64::INFINITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_sets_every_field() {
        let config = FrontierConfig::<f64>::builder()
            .first(CostStrategy::EstimateLowerBound)
            .second(CostStrategy::HeuristicWeight)
            .alternation(AlternationPolicy::Quota {
                first: 2,
                second: 1,
            })
            .initial_best_bound(100.0)
            .build()
            .unwrap();
        assert_eq!(config.first, CostStrategy::EstimateLowerBound);
        assert_eq!(config.second, CostStrategy::HeuristicWeight);
        assert_eq!(
            config.alternation,
            AlternationPolicy::Quota {
                first: 2,
                second: 1
            }
        );
        assert_eq!(config.initial_best_bound, 100.0);
    }

    #[test]
    fn test_builder_rejects_invalid_policies() {
        let err = FrontierConfig::<f64>::builder()
            .alternation(AlternationPolicy::Percentage {
                first_percent: 101,
                seed: 0,
            })
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::PercentageOutOfRange(101));

        let err = FrontierConfig::<f64>::builder()
            .alternation(AlternationPolicy::Quota {
                first: 0,
                second: 0,
            })
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::EmptyQuota);
    }

    #[test]
    fn test_nan_bound_rejected() {
        let err = FrontierConfig::<f64>::builder()
            .initial_best_bound(f64::NAN)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::NanBestBound);
    }

    #[test]
    fn test_display() {
        let config = FrontierConfig::<f64>::new(
            CostStrategy::EstimateLowerBound,
            CostStrategy::Tightness,
        );
        assert_eq!(
            config.to_string(),
            "FrontierConfig(first: EstimateLowerBound, second: Tightness, alternation: Strict, initial best bound: inf)"
        );
    }
}
