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

//! Fixed-layout vertex with named attributes
//!
//! Every vertex carries ten components, addressable both by name and by
//! attribute index:
//!
//! | Index | Attribute                  |
//! |-------|----------------------------|
//! | 0-3   | position `x`, `y`, `z`, `w` |
//! | 4-7   | color `r`, `g`, `b`, `a`   |
//! | 8-9   | texcoord `s`, `t`          |
//!
//! The scan converter interpolates all ten components at once, so the type
//! implements componentwise `+`, `-` and scalar `*`, `/`.

use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Sub};

use super::vector::Vector;

/// Number of interpolated components per vertex
pub const ATTRIBUTE_COUNT: usize = 10;

/// Index of the first non-positional attribute (red)
pub const FIRST_VARYING: usize = 4;

/// A homogeneous position with its color and texture coordinate
///
/// # Examples
///
/// ```
/// use softrast::core::math::Vertex;
///
/// let v = Vertex::new([1.0, 2.0, 0.5, 1.0], [255.0, 0.0, 0.0, 1.0], [0.25, 0.75]);
/// assert_eq!(v[Vertex::Y], 2.0);
/// assert_eq!(v[Vertex::R], 255.0);
/// assert_eq!(v[Vertex::T], 0.75);
///
/// let mid = (v + v) / 2.0;
/// assert_eq!(mid, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    /// Clip-space (or, after projection, device-space) position
    pub position: [f64; 4],
    /// Color: RGB on a 0-255 scale (linear 0-1 once decoded), alpha 0-1
    pub color: [f64; 4],
    /// Texture coordinate, 0-1 across the texture
    pub texcoord: [f64; 2],
}

impl Vertex {
    pub const X: usize = 0;
    pub const Y: usize = 1;
    pub const Z: usize = 2;
    pub const W: usize = 3;
    pub const R: usize = 4;
    pub const G: usize = 5;
    pub const B: usize = 6;
    pub const A: usize = 7;
    pub const S: usize = 8;
    pub const T: usize = 9;

    /// Create a vertex from its three attribute groups
    pub fn new(position: [f64; 4], color: [f64; 4], texcoord: [f64; 2]) -> Self {
        Self {
            position,
            color,
            texcoord,
        }
    }

    /// Build a vertex from ten components in attribute order
    pub fn from_components(c: [f64; ATTRIBUTE_COUNT]) -> Self {
        Self {
            position: [c[0], c[1], c[2], c[3]],
            color: [c[4], c[5], c[6], c[7]],
            texcoord: [c[8], c[9]],
        }
    }

    /// All ten components in attribute order
    pub fn components(&self) -> [f64; ATTRIBUTE_COUNT] {
        let [x, y, z, w] = self.position;
        let [r, g, b, a] = self.color;
        let [s, t] = self.texcoord;
        [x, y, z, w, r, g, b, a, s, t]
    }

    /// Homogeneous position as a numeric vector, for plane tests
    pub fn position_vector(&self) -> Vector {
        Vector::from(self.position)
    }

    /// All components as a numeric vector
    pub fn to_vector(&self) -> Vector {
        Vector::from(self.components())
    }

    pub fn x(&self) -> f64 {
        self.position[0]
    }

    pub fn y(&self) -> f64 {
        self.position[1]
    }

    pub fn z(&self) -> f64 {
        self.position[2]
    }

    pub fn w(&self) -> f64 {
        self.position[3]
    }

    /// Apply `f` to every component
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::from_components(self.components().map(f))
    }

    fn zip_with(self, other: Vertex, f: impl Fn(f64, f64) -> f64) -> Self {
        let a = self.components();
        let b = other.components();
        Self::from_components(std::array::from_fn(|i| f(a[i], b[i])))
    }
}

impl Index<usize> for Vertex {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0..=3 => &self.position[index],
            4..=7 => &self.color[index - 4],
            8..=9 => &self.texcoord[index - 8],
            _ => panic!("vertex attribute index {} out of range", index),
        }
    }
}

impl IndexMut<usize> for Vertex {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0..=3 => &mut self.position[index],
            4..=7 => &mut self.color[index - 4],
            8..=9 => &mut self.texcoord[index - 8],
            _ => panic!("vertex attribute index {} out of range", index),
        }
    }
}

impl Add for Vertex {
    type Output = Vertex;

    fn add(self, other: Vertex) -> Vertex {
        self.zip_with(other, |a, b| a + b)
    }
}

impl AddAssign for Vertex {
    fn add_assign(&mut self, other: Vertex) {
        *self = *self + other;
    }
}

impl Sub for Vertex {
    type Output = Vertex;

    fn sub(self, other: Vertex) -> Vertex {
        self.zip_with(other, |a, b| a - b)
    }
}

impl Mul<f64> for Vertex {
    type Output = Vertex;

    fn mul(self, k: f64) -> Vertex {
        self.map(|v| v * k)
    }
}

impl Div<f64> for Vertex {
    type Output = Vertex;

    fn div(self, k: f64) -> Vertex {
        self.map(|v| v / k)
    }
}
