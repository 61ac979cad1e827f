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

//! Axis-aligned boxes.
//!
//! An `IntervalVector<T>` is the region a cell covers: one closed interval per
//! variable. Boxes of up to four dimensions are stored inline; larger boxes
//! spill to the heap transparently.

use crate::math::interval::Interval;
use num_traits::Float;
use smallvec::SmallVec;
use std::ops::{Index, Mul};

/// Number of dimensions stored inline before spilling to the heap.
const INLINE_DIMENSIONS: usize = 4;

/// An axis-aligned box: a vector of closed intervals.
///
/// # Examples
///
/// ```rust
/// # use tessel_core::math::interval_vector::IntervalVector;
///
/// let b = IntervalVector::from_bounds(&[[5.0, 15.0], [15.0, 25.0]]);
/// assert_eq!(b.len(), 2);
/// assert_eq!(b[1].lb(), 15.0);
/// assert_eq!(b.max_diam(), 10.0);
/// ```
#[derive(Clone, PartialEq)]
pub struct IntervalVector<T>
where
    T: Float,
{
    intervals: SmallVec<Interval<T>, INLINE_DIMENSIONS>,
}

impl<T> IntervalVector<T>
where
    T: Float,
{
    /// Creates a box with `dimensions` unbounded components.
    #[inline]
    pub fn entire(dimensions: usize) -> Self {
        Self {
            intervals: std::iter::repeat_n(Interval::entire(), dimensions).collect(),
        }
    }

    /// Creates a box from `[lb, ub]` pairs.
    ///
    /// # Panics
    ///
    /// Panics if any pair has `lb > ub` or a NaN bound.
    #[inline]
    pub fn from_bounds(bounds: &[[T; 2]]) -> Self {
        bounds.iter().map(|&b| Interval::from(b)).collect()
    }

    /// Returns the number of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if the box has no components.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Returns the component at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Interval<T>> {
        self.intervals.get(index).copied()
    }

    /// Replaces the component at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn set(&mut self, index: usize, interval: Interval<T>) {
        assert!(
            index < self.intervals.len(),
            "called `IntervalVector::set` with index out of bounds: the len is {} but the index is {}",
            self.intervals.len(),
            index
        );
        self.intervals[index] = interval;
    }

    /// Returns the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Interval<T>] {
        &self.intervals
    }

    /// Returns an iterator over the components.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Interval<T>> {
        self.intervals.iter()
    }

    /// Returns the largest component diameter, or `0` for an empty box.
    #[inline]
    pub fn max_diam(&self) -> T {
        self.intervals
            .iter()
            .map(Interval::diam)
            .fold(T::zero(), T::max)
    }

    /// Returns the product of the component diameters (`1` for an empty box).
    #[inline]
    pub fn volume(&self) -> T {
        self.intervals
            .iter()
            .map(Interval::diam)
            .fold(T::one(), |acc, d| acc * d)
    }

    /// Returns the index of the widest component, ties going to the lowest
    /// index, or `None` for an empty box.
    #[inline]
    pub fn widest_component(&self) -> Option<usize> {
        let mut best: Option<(usize, T)> = None;
        for (i, iv) in self.intervals.iter().enumerate() {
            let d = iv.diam();
            match best {
                Some((_, bd)) if d <= bd => {}
                _ => best = Some((i, d)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Multiplies every component by `factor`.
    ///
    /// # Panics
    ///
    /// Panics if `factor` is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessel_core::math::interval_vector::IntervalVector;
    /// # use tessel_core::math::interval::Interval;
    ///
    /// let b = IntervalVector::from_bounds(&[[5.0, 15.0], [15.0, 25.0]]).scale(-3.0);
    /// assert_eq!(b[0], Interval::new(-45.0, -15.0));
    /// assert_eq!(b[1], Interval::new(-75.0, -45.0));
    /// ```
    #[inline]
    pub fn scale(&self, factor: T) -> Self {
        self.intervals.iter().map(|iv| iv.scale(factor)).collect()
    }
}

impl<T> Index<usize> for IntervalVector<T>
where
    T: Float,
{
    type Output = Interval<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.intervals[index]
    }
}

impl<T> Mul<T> for IntervalVector<T>
where
    T: Float,
{
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T> Mul<T> for &IntervalVector<T>
where
    T: Float,
{
    type Output = IntervalVector<T>;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T> FromIterator<Interval<T>> for IntervalVector<T>
where
    T: Float,
{
    #[inline]
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        Self {
            intervals: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a IntervalVector<T>
where
    T: Float,
{
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl<T> std::fmt::Debug for IntervalVector<T>
where
    T: Float + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.intervals.iter()).finish()
    }
}

impl<T> std::fmt::Display for IntervalVector<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        let mut iter = self.intervals.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for iv in iter {
                write!(f, " ; {}", iv)?;
            }
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> IntervalVector<f64> {
        IntervalVector::from_bounds(&[[5.0, 15.0], [15.0, 25.0], [25.0, 35.0], [35.0, 45.0]])
    }

    #[test]
    fn test_from_bounds_and_index() {
        let b = fixture();
        assert_eq!(b.len(), 4);
        assert!(!b.is_empty());
        assert_eq!(b[0], Interval::new(5.0, 15.0));
        assert_eq!(b.get(3), Some(Interval::new(35.0, 45.0)));
        assert_eq!(b.get(4), None);
    }

    #[test]
    fn test_spills_beyond_inline_capacity() {
        let b: IntervalVector<f64> = (0..9).map(|i| Interval::point(i as f64)).collect();
        assert_eq!(b.len(), 9);
        assert_eq!(b[8], Interval::point(8.0));
    }

    #[test]
    fn test_entire() {
        let b: IntervalVector<f64> = IntervalVector::entire(3);
        assert_eq!(b.len(), 3);
        assert!(b.iter().all(|iv| iv.is_unbounded()));
    }

    #[test]
    fn test_scale_matches_componentwise() {
        let b = fixture();
        let s = &b * -2.0;
        for (orig, scaled) in b.iter().zip(s.iter()) {
            assert_eq!(*scaled, orig.scale(-2.0));
        }
        let z = b.clone() * 0.0;
        assert!(z.iter().all(|iv| *iv == Interval::point(0.0)));
    }

    #[test]
    fn test_measurements() {
        let b = IntervalVector::from_bounds(&[[0.0, 1.0], [0.0, 4.0], [1.0, 3.0]]);
        assert_eq!(b.max_diam(), 4.0);
        assert_eq!(b.volume(), 8.0);
        assert_eq!(b.widest_component(), Some(1));

        let empty: IntervalVector<f64> = std::iter::empty().collect();
        assert_eq!(empty.max_diam(), 0.0);
        assert_eq!(empty.widest_component(), None);
    }

    #[test]
    fn test_widest_component_ties_prefer_lowest_index() {
        let b = IntervalVector::from_bounds(&[[0.0, 2.0], [1.0, 3.0]]);
        assert_eq!(b.widest_component(), Some(0));
    }

    #[test]
    fn test_set() {
        let mut b = fixture();
        b.set(2, Interval::point(30.0));
        assert_eq!(b[2], Interval::point(30.0));
    }

    #[test]
    fn test_display() {
        let b = IntervalVector::from_bounds(&[[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(format!("{}", b), "([1, 2] ; [3, 4])");
    }
}
