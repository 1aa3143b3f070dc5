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

//! Homogeneous clip planes
//!
//! A plane `(A, B, C, D)` keeps the half-space of points satisfying
//! `A·x + B·y + C·z + D·w >= 0`. Working in clip space keeps the test linear,
//! so cut points can be found by interpolating signed distances.

use super::vector::Vector;
use super::vertex::Vertex;
use crate::core::error::Result;

/// A half-space in homogeneous clip coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    coefficients: Vector,
}

impl Plane {
    /// Create a plane from its four coefficients
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            coefficients: Vector::from([a, b, c, d]),
        }
    }

    /// The six planes bounding the canonical view volume
    ///
    /// `-w <= x <= w`, `-w <= y <= w`, `-w <= z <= w`.
    pub fn frustum() -> Vec<Plane> {
        vec![
            Plane::new(1.0, 0.0, 0.0, 1.0),
            Plane::new(-1.0, 0.0, 0.0, 1.0),
            Plane::new(0.0, 1.0, 0.0, 1.0),
            Plane::new(0.0, -1.0, 0.0, 1.0),
            Plane::new(0.0, 0.0, 1.0, 1.0),
            Plane::new(0.0, 0.0, -1.0, 1.0),
        ]
    }

    /// Plane coefficients `(A, B, C, D)`
    pub fn coefficients(&self) -> &Vector {
        &self.coefficients
    }

    /// Signed distance of a vertex's position (positive or zero is inside)
    pub fn signed_distance(&self, v: &Vertex) -> Result<f64> {
        self.coefficients.dot(&v.position_vector())
    }

    /// Whether the vertex lies in the kept half-space
    pub fn contains(&self, v: &Vertex) -> Result<bool> {
        Ok(self.signed_distance(v)? >= 0.0)
    }

    /// Point where the edge `inside -> outside` crosses the plane
    ///
    /// Every attribute is interpolated, not just the position:
    ///
    /// ```text
    /// cut = (d_out·inside − d_in·outside) / (d_out − d_in)
    /// ```
    pub fn intersect(&self, inside: &Vertex, outside: &Vertex) -> Result<Vertex> {
        let d_in = self.signed_distance(inside)?;
        let d_out = self.signed_distance(outside)?;
        Ok((*inside * d_out - *outside * d_in) / (d_out - d_in))
    }
}
