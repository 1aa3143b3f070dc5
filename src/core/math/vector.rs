// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Variable-length numeric vector
//!
//! A thin wrapper over `Vec<f64>` with elementwise arithmetic. Binary
//! operations require operands of equal length and fail with
//! [`RasterError::LengthMismatch`] otherwise, so mismatched plane or
//! attribute layouts surface as errors instead of being padded or
//! truncated silently.

use std::fmt;
use std::ops::{Div, Index, Mul};

use crate::core::error::{RasterError, Result};

/// Ordered sequence of reals
///
/// # Examples
///
/// ```
/// use softrast::core::math::Vector;
///
/// let a = Vector::from([1.0, 2.0, 3.0]);
/// let b = Vector::from([4.0, 5.0, 6.0]);
///
/// assert_eq!(a.dot(&b).unwrap(), 32.0);
/// assert_eq!(a.try_add(&b).unwrap(), Vector::from([5.0, 7.0, 9.0]));
/// assert_eq!(a.to_string(), "1,2,3");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector(Vec<f64>);

impl Vector {
    /// Create a vector from its components
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Number of components
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the vector has no components
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Components as a slice
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Component at `index`, if present
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    fn check_len(&self, other: &Vector) -> Result<()> {
        if self.len() != other.len() {
            return Err(RasterError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(())
    }

    /// Elementwise sum
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::LengthMismatch`] if the lengths differ.
    pub fn try_add(&self, other: &Vector) -> Result<Vector> {
        self.check_len(other)?;
        Ok(self.0.iter().zip(&other.0).map(|(a, b)| a + b).collect())
    }

    /// Elementwise difference
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::LengthMismatch`] if the lengths differ.
    pub fn try_sub(&self, other: &Vector) -> Result<Vector> {
        self.check_len(other)?;
        Ok(self.0.iter().zip(&other.0).map(|(a, b)| a - b).collect())
    }

    /// Dot product
    ///
    /// Two empty vectors have a dot product of 0.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::LengthMismatch`] if the lengths differ.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_len(other)?;
        Ok(self.0.iter().zip(&other.0).map(|(a, b)| a * b).sum())
    }
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(values: [f64; N]) -> Self {
        Self(values.to_vec())
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, k: f64) -> Vector {
        self.0.iter().map(|v| v * k).collect()
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, k: f64) -> Vector {
        &self * k
    }
}

impl Div<f64> for &Vector {
    type Output = Vector;

    fn div(self, k: f64) -> Vector {
        self.0.iter().map(|v| v / k).collect()
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, k: f64) -> Vector {
        &self / k
    }
}

impl fmt::Display for Vector {
    /// Comma-separated component listing
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_add_and_sub() {
        let a = Vector::from([1.0, 2.0]);
        let b = Vector::from([0.5, -2.0]);
        assert_eq!(a.try_add(&b).unwrap(), Vector::from([1.5, 0.0]));
        assert_eq!(a.try_sub(&b).unwrap(), Vector::from([0.5, 4.0]));
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let a = Vector::from([1.0, 2.0, 3.0]);
        let b = Vector::from([1.0]);

        assert!(matches!(
            a.try_add(&b),
            Err(RasterError::LengthMismatch { left: 3, right: 1 })
        ));
        assert!(a.try_sub(&b).is_err());
        assert!(a.dot(&b).is_err());
    }

    #[test]
    fn test_empty_vectors() {
        let e = Vector::default();
        assert!(e.is_empty());
        assert_eq!(e.dot(&e).unwrap(), 0.0);
        assert_eq!(e.try_add(&e).unwrap(), e);
        assert_eq!((&e * 3.0).len(), 0);
        assert_eq!(e.to_string(), "");
    }

    #[test]
    fn test_scalar_ops() {
        let v = Vector::from([2.0, -4.0]);
        assert_eq!(&v * 0.5, Vector::from([1.0, -2.0]));
        assert_eq!(v / 2.0, Vector::from([1.0, -2.0]));
    }

    #[test]
    fn test_display_listing() {
        let v = Vector::from([1.0, 0.5, -3.0]);
        assert_eq!(v.to_string(), "1,0.5,-3");
    }

    proptest! {
        #[test]
        fn prop_add_then_sub_is_identity(
            pairs in prop::collection::vec((-1e6f64..1e6, -1e6f64..1e6), 0..16)
        ) {
            let a: Vector = pairs.iter().map(|p| p.0).collect();
            let b: Vector = pairs.iter().map(|p| p.1).collect();

            let back = a.try_add(&b).unwrap().try_sub(&b).unwrap();
            for i in 0..a.len() {
                prop_assert!((back[i] - a[i]).abs() <= 1e-6);
            }
        }
    }
}
