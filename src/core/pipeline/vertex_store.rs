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

//! Append-only vertex store
//!
//! Vertices are addressed 1-based from the front (`1` is the first) or
//! negatively from the back (`-1` is the most recent). Index 0 is invalid.

use crate::core::error::{RasterError, Result};
use crate::core::math::Vertex;

/// Ordered list of submitted vertices
#[derive(Debug, Clone, Default)]
pub struct VertexStore {
    vertices: Vec<Vertex>,
}

impl VertexStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex
    pub fn push(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Look up a vertex by 1-based or negative index
    ///
    /// # Errors
    ///
    /// - [`RasterError::ZeroVertexIndex`] for index 0
    /// - [`RasterError::VertexIndexOutOfRange`] past either end
    ///
    /// # Examples
    ///
    /// ```
    /// use softrast::core::math::Vertex;
    /// use softrast::core::pipeline::VertexStore;
    ///
    /// let mut store = VertexStore::new();
    /// for x in [1.0, 2.0, 3.0] {
    ///     store.push(Vertex::new([x, 0.0, 0.0, 1.0], [0.0; 4], [0.0; 2]));
    /// }
    ///
    /// assert_eq!(store.nth(1).unwrap().x(), 1.0);
    /// assert_eq!(store.nth(-1).unwrap().x(), 3.0);
    /// assert!(store.nth(0).is_err());
    /// ```
    pub fn nth(&self, index: i64) -> Result<&Vertex> {
        let count = self.vertices.len();
        let position = match index {
            0 => return Err(RasterError::ZeroVertexIndex),
            i if i > 0 => usize::try_from(i - 1).ok(),
            i => usize::try_from(i.unsigned_abs())
                .ok()
                .and_then(|back| count.checked_sub(back)),
        };

        position
            .and_then(|p| self.vertices.get(p))
            .ok_or(RasterError::VertexIndexOutOfRange { index, count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_of(n: usize) -> VertexStore {
        let mut store = VertexStore::new();
        for i in 0..n {
            store.push(Vertex::new([i as f64, 0.0, 0.0, 1.0], [0.0; 4], [0.0; 2]));
        }
        store
    }

    #[test]
    fn test_forward_and_backward_indexing() {
        let store = store_of(3);
        assert_eq!(store.nth(1).unwrap().x(), 0.0);
        assert_eq!(store.nth(3).unwrap().x(), 2.0);
        assert_eq!(store.nth(-1).unwrap().x(), 2.0);
        assert_eq!(store.nth(-3).unwrap().x(), 0.0);
    }

    #[test]
    fn test_zero_index_fails() {
        assert!(matches!(store_of(3).nth(0), Err(RasterError::ZeroVertexIndex)));
    }

    #[test]
    fn test_out_of_range_fails() {
        let store = store_of(3);
        assert!(matches!(
            store.nth(4),
            Err(RasterError::VertexIndexOutOfRange { index: 4, count: 3 })
        ));
        assert!(matches!(
            store.nth(-4),
            Err(RasterError::VertexIndexOutOfRange { index: -4, count: 3 })
        ));
        assert!(store.nth(i64::MIN).is_err());
        assert!(VertexStore::new().nth(1).is_err());
    }
}
