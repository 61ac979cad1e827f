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

use num_traits::Float;
use std::ops::{Add, Mul, Neg, Sub};

/// A closed interval `[lb, ub]` over a floating point type.
///
/// Bounds may be infinite, so `(-inf, +inf)` represents "no information".
/// The interval is never empty: constructors reject `lb > ub` and NaN bounds.
///
/// # Invariants
/// `lb <= ub` and neither bound is NaN.
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Interval<T>
where
    T: Float,
{
    lb: T,
    ub: T,
}

impl<T> Interval<T>
where
    T: Float,
{
    /// Creates a new `Interval`.
    ///
    /// # Panics
    ///
    /// Panics if `lb > ub` or if either bound is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessel_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(1.0, 3.0);
    /// assert_eq!(iv.diam(), 2.0);
    /// ```
    #[inline]
    pub fn new(lb: T, ub: T) -> Self {
        assert!(
            lb <= ub,
            "Invalid interval: lb must be less than or equal to ub and neither may be NaN"
        );
        Self { lb, ub }
    }

    /// Creates a new `Interval` if the bounds are valid.
    ///
    /// Returns `None` if `lb > ub` or either bound is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessel_core::math::interval::Interval;
    ///
    /// assert!(Interval::try_new(0.0, 1.0).is_some());
    /// assert!(Interval::try_new(1.0, 0.0).is_none());
    /// assert!(Interval::try_new(f64::NAN, 0.0).is_none());
    /// ```
    #[inline]
    pub fn try_new(lb: T, ub: T) -> Option<Self> {
        if lb <= ub {
            Some(Self { lb, ub })
        } else {
            None
        }
    }

    /// Creates the degenerate interval `[value, value]`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is NaN.
    #[inline]
    pub fn point(value: T) -> Self {
        Self::new(value, value)
    }

    /// Creates the unbounded interval `(-inf, +inf)`.
    #[inline]
    pub fn entire() -> Self {
        Self {
            lb: T::neg_infinity(),
            ub: T::infinity(),
        }
    }

    /// Returns the lower bound.
    #[inline]
    pub fn lb(&self) -> T {
        self.lb
    }

    /// Returns the upper bound.
    #[inline]
    pub fn ub(&self) -> T {
        self.ub
    }

    /// Returns the diameter `ub - lb` (infinite for unbounded intervals).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessel_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::new(-2.0, 5.0).diam(), 7.0);
    /// assert!(Interval::<f64>::entire().diam().is_infinite());
    /// ```
    #[inline]
    pub fn diam(&self) -> T {
        if self.is_unbounded() {
            T::infinity()
        } else {
            self.ub - self.lb
        }
    }

    /// Returns the midpoint of the interval.
    ///
    /// The midpoint of `(-inf, +inf)` is `0`; a half-unbounded interval
    /// returns the representable extreme on its unbounded side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessel_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::new(2.0, 4.0).mid(), 3.0);
    /// assert_eq!(Interval::<f64>::entire().mid(), 0.0);
    /// ```
    #[inline]
    pub fn mid(&self) -> T {
        match (self.lb.is_infinite(), self.ub.is_infinite()) {
            (true, true) => T::zero(),
            (true, false) => T::min_value(),
            (false, true) => T::max_value(),
            (false, false) => {
                let two = T::one() + T::one();
                self.lb / two + self.ub / two
            }
        }
    }

    /// Returns `true` if at least one bound is infinite.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.lb.is_infinite() || self.ub.is_infinite()
    }

    /// Returns `true` if `lb == ub`.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.lb == self.ub
    }

    /// Returns `true` if `value` lies in `[lb, ub]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessel_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(0.0, 1.0);
    /// assert!(iv.contains(0.0));
    /// assert!(iv.contains(1.0));
    /// assert!(!iv.contains(1.5));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.lb <= value && value <= self.ub
    }

    /// Returns `true` if `other` is a subset of `self`.
    #[inline]
    pub fn contains_interval(&self, other: Self) -> bool {
        self.lb <= other.lb && other.ub <= self.ub
    }

    /// Returns the intersection, or `None` when the intervals are disjoint.
    ///
    /// Closed intervals that touch at one point intersect in that point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessel_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0.0, 2.0);
    /// assert_eq!(a.intersection(Interval::new(1.0, 3.0)), Some(Interval::new(1.0, 2.0)));
    /// assert_eq!(a.intersection(Interval::new(2.0, 3.0)), Some(Interval::point(2.0)));
    /// assert_eq!(a.intersection(Interval::new(2.5, 3.0)), None);
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        Self::try_new(self.lb.max(other.lb), self.ub.min(other.ub))
    }

    /// Returns the smallest interval containing both operands.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessel_core::math::interval::Interval;
    ///
    /// let hull = Interval::new(0.0, 1.0).hull(Interval::new(4.0, 5.0));
    /// assert_eq!(hull, Interval::new(0.0, 5.0));
    /// ```
    #[inline]
    pub fn hull(&self, other: Self) -> Self {
        Self {
            lb: self.lb.min(other.lb),
            ub: self.ub.max(other.ub),
        }
    }

    /// Multiplies the interval by a scalar, swapping bounds for negative
    /// factors.
    ///
    /// # Panics
    ///
    /// Panics if `factor` is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessel_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::new(5.0, 15.0).scale(-2.0), Interval::new(-30.0, -10.0));
    /// assert_eq!(Interval::new(5.0, 15.0).scale(0.0), Interval::point(0.0));
    /// ```
    #[inline]
    pub fn scale(&self, factor: T) -> Self {
        assert!(!factor.is_nan(), "Cannot scale an interval by NaN");
        let a = bound_product(self.lb, factor);
        let b = bound_product(self.ub, factor);
        Self::new(a.min(b), a.max(b))
    }
}

/// Product of two bounds where `0 * inf` is taken as `0`, the convention
/// interval arithmetic uses for the bounds of a product.
#[inline]
fn bound_product<T>(a: T, b: T) -> T
where
    T: Float,
{
    if a.is_zero() || b.is_zero() {
        T::zero()
    } else {
        a * b
    }
}

impl<T> Add for Interval<T>
where
    T: Float,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let lb = self.lb + rhs.lb;
        let ub = self.ub + rhs.ub;
        // -inf + inf only occurs for unbounded operands; widen to entire.
        Self {
            lb: if lb.is_nan() { T::neg_infinity() } else { lb },
            ub: if ub.is_nan() { T::infinity() } else { ub },
        }
    }
}

impl<T> Sub for Interval<T>
where
    T: Float,
{
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<T> Neg for Interval<T>
where
    T: Float,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            lb: -self.ub,
            ub: -self.lb,
        }
    }
}

impl<T> Mul for Interval<T>
where
    T: Float,
{
    type Output = Self;

    /// Interval product: the hull of the four bound products.
    ///
    /// ```rust
    /// # use tessel_core::math::interval::Interval;
    ///
    /// let p = Interval::new(5.0, 15.0) * Interval::new(15.0, 25.0);
    /// assert_eq!(p, Interval::new(75.0, 375.0));
    ///
    /// let q = Interval::new(-15.0, -5.0) * Interval::new(15.0, 25.0);
    /// assert_eq!(q, Interval::new(-375.0, -75.0));
    /// ```
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let products = [
            bound_product(self.lb, rhs.lb),
            bound_product(self.lb, rhs.ub),
            bound_product(self.ub, rhs.lb),
            bound_product(self.ub, rhs.ub),
        ];
        let mut lb = products[0];
        let mut ub = products[0];
        for &p in &products[1..] {
            lb = lb.min(p);
            ub = ub.max(p);
        }
        Self { lb, ub }
    }
}

impl<T> Mul<T> for Interval<T>
where
    T: Float,
{
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T> Default for Interval<T>
where
    T: Float,
{
    /// The default interval is `(-inf, +inf)`.
    #[inline]
    fn default() -> Self {
        Self::entire()
    }
}

impl<T> From<(T, T)> for Interval<T>
where
    T: Float,
{
    #[inline]
    fn from(value: (T, T)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl<T> From<[T; 2]> for Interval<T>
where
    T: Float,
{
    #[inline]
    fn from(value: [T; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl<T> std::fmt::Debug for Interval<T>
where
    T: Float + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}, {:?}]", self.lb, self.ub)
    }
}

impl<T> std::fmt::Display for Interval<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lb, self.ub)
    }
}
