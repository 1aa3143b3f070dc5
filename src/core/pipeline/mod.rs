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

//! Rasterization session
//!
//! [`Rasterizer`] owns everything one frame needs: the session state, the
//! vertex store, an optional texture, and three surfaces:
//!
//! - the supersample color accumulator (`f64`, `W·N × H·N`)
//! - the supersample depth buffer (`W·N × H·N`)
//! - the resolved output (`u8`, `W × H`)
//!
//! # Lifecycle
//!
//! ```text
//! Idle --resize--> Sized --add_vertex/draw_*--> Accumulating --resolve--> Resolved
//! ```
//!
//! Resizing or changing the FSAA level reallocates all surfaces and discards
//! their contents. A session with zero width or height stays `Idle`. Color and texture coordinate are captured into each
//! vertex when it is submitted; feature flags are read when a primitive is
//! drawn.
//!
//! # Example
//!
//! ```
//! use softrast::core::pipeline::Rasterizer;
//!
//! let mut raster = Rasterizer::new();
//! raster.resize(4, 4);
//! raster.set_color(255.0, 0.0, 0.0);
//! raster.add_vertex(-1.0, -1.0, 0.0, 1.0);
//! raster.add_vertex(1.0, -1.0, 0.0, 1.0);
//! raster.add_vertex(-1.0, 1.0, 0.0, 1.0);
//! raster.draw_triangle(1, 2, 3)?;
//!
//! let rgba = raster.resolve()?;
//! assert_eq!(&rgba[0..4], &[255, 0, 0, 255]);
//! # Ok::<(), softrast::RasterError>(())
//! ```

mod draw;
mod vertex_store;

#[cfg(test)]
mod tests;

pub use vertex_store::VertexStore;

use crate::config::RasterConfig;
use crate::core::error::{RasterError, Result};
use crate::core::math::{Plane, Vertex};
use crate::core::render::{self, Extent, PixelWriter, Projector};
use crate::core::state::{Features, SessionState};
use crate::core::surface::{ColorSurface, DepthSurface};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// No drawable surface: never resized, or resized to zero area
    Idle,
    /// Surfaces allocated and cleared
    Sized,
    /// Vertices or primitives submitted since the last resize or resolve
    Accumulating,
    /// Output surface holds the resolved image
    Resolved,
}

/// A single-frame rasterization session
pub struct Rasterizer {
    width: usize,
    height: usize,
    state: SessionState,
    vertices: VertexStore,
    texture: Option<ColorSurface<u8>>,
    samples: ColorSurface<f64>,
    depth: DepthSurface,
    output: ColorSurface<u8>,
    stage: Stage,
}

impl Rasterizer {
    /// Create an unsized session with default state
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            state: SessionState::new(),
            vertices: VertexStore::new(),
            texture: None,
            samples: ColorSurface::new(0, 0),
            depth: DepthSurface::new(0, 0),
            output: ColorSurface::new(0, 0),
            stage: Stage::Idle,
        }
    }

    /// Create a session from a configuration
    ///
    /// A zero width or height leaves the session `Idle` until it is resized.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidFsaaLevel`] if the configured level is 0.
    pub fn from_config(config: &RasterConfig) -> Result<Self> {
        let mut raster = Self::new();
        raster.set_fsaa_level(config.fsaa_level)?;
        raster.resize(config.width, config.height);
        raster.state.features = config.features();
        for &[a, b, c, d] in &config.clip_planes {
            raster.append_clip_plane(a, b, c, d);
        }
        Ok(raster)
    }

    /// Output width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Output height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Supersample factor per axis
    pub fn fsaa_level(&self) -> usize {
        self.state.fsaa_level
    }

    /// Currently enabled features
    pub fn features(&self) -> Features {
        self.state.features
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Number of submitted vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Set the output size and reallocate every surface
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.reallocate();
        log::debug!(
            "Resized to {}x{} (supersample {}x{})",
            width,
            height,
            self.samples.width(),
            self.samples.height()
        );
    }

    /// Set the supersample factor and reallocate every surface
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidFsaaLevel`] for a level of 0.
    pub fn set_fsaa_level(&mut self, level: usize) -> Result<()> {
        if level == 0 {
            return Err(RasterError::InvalidFsaaLevel(level));
        }
        self.state.fsaa_level = level;
        self.reallocate();
        log::debug!("FSAA level set to {}", level);
        Ok(())
    }

    fn reallocate(&mut self) {
        let n = self.state.fsaa_level;
        self.samples = ColorSurface::new(self.width * n, self.height * n);
        self.depth = DepthSurface::new(self.width * n, self.height * n);
        self.output = ColorSurface::new(self.width, self.height);
        self.stage = if self.width == 0 || self.height == 0 {
            Stage::Idle
        } else {
            Stage::Sized
        };
    }

    /// Set the current color with full opacity
    ///
    /// RGB is on a 0-255 scale.
    pub fn set_color(&mut self, r: f64, g: f64, b: f64) {
        self.set_color_rgba(r, g, b, 1.0);
    }

    /// Set the current color; alpha is 0-1
    pub fn set_color_rgba(&mut self, r: f64, g: f64, b: f64, a: f64) {
        self.state.color = [r, g, b, a];
    }

    /// Set the current texture coordinate
    pub fn set_texcoord(&mut self, s: f64, t: f64) {
        self.state.texcoord = [s, t];
    }

    /// Append a clip-space vertex carrying the current color and texcoord
    pub fn add_vertex(&mut self, x: f64, y: f64, z: f64, w: f64) {
        let vertex = self.state.make_vertex(x, y, z, w);
        if w <= 0.0 {
            log::warn!("Vertex {} has w = {}; it lies behind the eye", self.vertices.len() + 1, w);
        }
        log::trace!("Vertex {}: {}", self.vertices.len() + 1, vertex.to_vector());
        self.vertices.push(vertex);
        self.mark_accumulating();
    }

    /// Look up a submitted vertex (1-based, or negative from the end)
    pub fn nth_vertex(&self, index: i64) -> Result<&Vertex> {
        self.vertices.nth(index)
    }

    /// Turn features on or off
    pub fn set_features(&mut self, features: Features, enabled: bool) {
        self.state.features.set(features, enabled);
        log::debug!("Features now {:?}", self.state.features);
    }

    pub fn enable_depth_test(&mut self) {
        self.set_features(Features::DEPTH_TEST, true);
    }

    pub fn enable_srgb(&mut self) {
        self.set_features(Features::SRGB, true);
    }

    pub fn enable_perspective(&mut self) {
        self.set_features(Features::PERSPECTIVE, true);
    }

    pub fn enable_frustum_clipping(&mut self) {
        self.set_features(Features::FRUSTUM_CLIP, true);
    }

    pub fn enable_cull(&mut self) {
        self.set_features(Features::CULL, true);
    }

    pub fn enable_texture(&mut self) {
        self.set_features(Features::TEXTURE, true);
    }

    pub fn disable_texture(&mut self) {
        self.set_features(Features::TEXTURE, false);
    }

    pub fn enable_decals(&mut self) {
        self.set_features(Features::DECALS, true);
    }

    /// Add a user clip plane keeping `a·x + b·y + c·z + d·w >= 0`
    ///
    /// User planes apply only while frustum clipping is off.
    pub fn append_clip_plane(&mut self, a: f64, b: f64, c: f64, d: f64) {
        self.state.clip_planes.push(Plane::new(a, b, c, d));
        log::debug!("Clip plane {}: ({}, {}, {}, {})", self.state.clip_planes.len(), a, b, c, d);
    }

    /// Load an RGBA8 texture decoded elsewhere
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidTexture`] if `rgba` is not exactly
    /// `width * height * 4` bytes.
    pub fn load_texture(&mut self, width: usize, height: usize, rgba: Vec<u8>) -> Result<()> {
        self.texture = Some(ColorSurface::from_data(width, height, rgba)?);
        log::debug!("Loaded {}x{} texture", width, height);
        Ok(())
    }

    /// Box-filter the supersamples into the output surface
    ///
    /// Returns the flat RGBA bytes of the output, row-major.
    pub fn resolve(&mut self) -> Result<&[u8]> {
        render::resolve(
            &self.samples,
            &mut self.output,
            self.state.fsaa_level,
            self.state.features.contains(Features::SRGB),
        )?;
        self.stage = Stage::Resolved;
        log::debug!("Resolved {}x{} output", self.width, self.height);
        Ok(self.output.data())
    }

    /// Flat RGBA bytes of the last resolve
    pub fn data(&self) -> &[u8] {
        self.output.data()
    }

    /// The resolved output surface
    pub fn output(&self) -> &ColorSurface<u8> {
        &self.output
    }

    /// The supersample color accumulator
    pub fn samples(&self) -> &ColorSurface<f64> {
        &self.samples
    }

    #[cfg(test)]
    pub(crate) fn samples_mut(&mut self) -> &mut ColorSurface<f64> {
        self.mark_accumulating();
        &mut self.samples
    }

    /// The supersample depth buffer
    pub fn depth(&self) -> &DepthSurface {
        &self.depth
    }

    fn mark_accumulating(&mut self) {
        if self.stage != Stage::Idle {
            self.stage = Stage::Accumulating;
        }
    }

    fn begin_primitive(&mut self) {
        if self.stage == Stage::Idle {
            log::warn!("Drawing into an unsized session; call resize first");
        }
        self.mark_accumulating();
    }

    fn extent(&self) -> Extent {
        Extent::new(self.samples.width(), self.samples.height())
    }

    fn projector(&self) -> Projector {
        Projector::new(self.samples.width(), self.samples.height(), self.state.features)
    }

    /// Pixel writer over this session's supersample surfaces
    fn writer(&mut self) -> Result<PixelWriter<'_>> {
        let features = self.state.features;
        if features.contains(Features::TEXTURE) && self.texture.is_none() {
            return Err(RasterError::MissingTexture);
        }
        Ok(PixelWriter::new(
            &mut self.samples,
            &mut self.depth,
            self.texture.as_ref(),
            features,
        ))
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}
