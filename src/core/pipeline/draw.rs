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

//! Primitive drawing
//!
//! Each draw call fetches its vertices from the store, runs them through
//! culling, clipping, and projection as applicable, and feeds the scan
//! converter's samples to the pixel writer.

use super::Rasterizer;
use crate::core::error::Result;
use crate::core::math::Vertex;
use crate::core::render::{
    clip_triangle, is_back_facing, scan_antialiased_line, scan_line, scan_point, scan_triangle,
};
use crate::core::state::Features;

impl Rasterizer {
    /// Draw a filled triangle from three vertex indices
    ///
    /// Back-facing triangles are dropped when culling is on. The triangle is
    /// then clipped against the frustum (if enabled) or the user clip planes
    /// (if any), and every remaining piece is projected and filled.
    ///
    /// # Errors
    ///
    /// - Index errors for invalid vertex indices
    /// - [`RasterError::MissingTexture`](crate::RasterError::MissingTexture)
    ///   if texturing is on with no texture loaded
    /// - [`RasterError::BoundaryMismatch`](crate::RasterError::BoundaryMismatch)
    ///   if scan conversion loses consistency
    pub fn draw_triangle(&mut self, i1: i64, i2: i64, i3: i64) -> Result<()> {
        let triangle = [
            *self.nth_vertex(i1)?,
            *self.nth_vertex(i2)?,
            *self.nth_vertex(i3)?,
        ];
        self.begin_primitive();

        if self.state.features.contains(Features::CULL) && is_back_facing(&triangle) {
            log::trace!("Culled back-facing triangle ({}, {}, {})", i1, i2, i3);
            return Ok(());
        }

        let planes = self.state.active_planes();
        let pieces = if planes.is_empty() {
            vec![triangle]
        } else {
            clip_triangle(triangle, &planes)?
        };
        log::trace!(
            "Triangle ({}, {}, {}) clipped against {} planes into {} pieces",
            i1,
            i2,
            i3,
            planes.len(),
            pieces.len()
        );

        let projector = self.projector();
        let extent = self.extent();
        let mut writer = self.writer()?;
        for piece in pieces {
            let projected = piece.map(|v| projector.project(&v));
            scan_triangle(projected, extent, |sample| writer.write(sample))?;
        }
        Ok(())
    }

    /// Draw a one-sample-wide aliased line between two vertices
    pub fn draw_line(&mut self, i1: i64, i2: i64) -> Result<()> {
        let (a, b) = (*self.nth_vertex(i1)?, *self.nth_vertex(i2)?);
        self.begin_primitive();
        log::trace!("Line ({}, {})", i1, i2);

        let projector = self.projector();
        let extent = self.extent();
        let (a, b) = (projector.project(&a), projector.project(&b));
        let mut writer = self.writer()?;
        scan_line(&a, &b, extent, |sample| writer.write(sample))
    }

    /// Draw a coverage-weighted antialiased line between two vertices
    pub fn draw_antialiased_line(&mut self, i1: i64, i2: i64) -> Result<()> {
        let (a, b) = (*self.nth_vertex(i1)?, *self.nth_vertex(i2)?);
        self.begin_primitive();
        log::trace!("Antialiased line ({}, {})", i1, i2);

        let projector = self.projector();
        let extent = self.extent();
        let (a, b) = (projector.project(&a), projector.project(&b));
        let mut writer = self.writer()?;
        scan_antialiased_line(&a, &b, extent, |sample| writer.write(sample))
    }

    /// Draw a square point sprite of side `size` supersamples
    ///
    /// Texture coordinates span the square from (0, 0) to (1, 1).
    pub fn draw_point(&mut self, index: i64, size: f64) -> Result<()> {
        let vertex = *self.nth_vertex(index)?;
        self.begin_primitive();
        log::trace!("Point {} size {}", index, size);

        let center = self.projector().project(&vertex);
        // Under perspective correction the writer divides by 1/w, so
        // pre-scale the span to land on [0, 1] afterwards.
        let span = if self.state.features.contains(Features::PERSPECTIVE) {
            center.w()
        } else {
            1.0
        };
        let extent = self.extent();
        let mut writer = self.writer()?;
        scan_point(&center, size, span, extent, |sample| writer.write(sample))
    }

    /// Feed one already-projected device-space sample to the pixel writer
    ///
    /// Off-surface samples are ignored.
    pub fn draw_sample(&mut self, sample: Vertex) -> Result<()> {
        self.begin_primitive();
        self.writer()?.write(sample)
    }
}
