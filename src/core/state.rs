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

//! Session state
//!
//! Holds everything that is set between draws: the current color and
//! texture coordinate (snapshotted into each vertex at submission), feature
//! toggles (read when a primitive is drawn), the supersample factor, and user
//! clip planes.

use std::borrow::Cow;

use bitflags::bitflags;

use crate::core::math::{Plane, Vertex};

bitflags! {
    /// Pipeline feature toggles
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Features: u32 {
        /// Keep only samples nearer than the stored depth
        const DEPTH_TEST = 1 << 0;
        /// Blend and average in linear light, encode sRGB on resolve
        const SRGB = 1 << 1;
        /// Perspective-correct attribute interpolation
        const PERSPECTIVE = 1 << 2;
        /// Clip triangles against the canonical view volume
        const FRUSTUM_CLIP = 1 << 3;
        /// Discard back-facing triangles
        const CULL = 1 << 4;
        /// Take the source color from the loaded texture
        const TEXTURE = 1 << 5;
        /// Composite texels over the vertex color
        const DECALS = 1 << 6;
    }
}

/// Color assigned to vertices before any `set_color` call
pub const DEFAULT_COLOR: [f64; 4] = [255.0, 255.0, 255.0, 1.0];

/// Mutable drawing state of one session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Current color: RGB on a 0-255 scale, alpha 0-1
    pub color: [f64; 4],
    /// Current texture coordinate
    pub texcoord: [f64; 2],
    /// Enabled features
    pub features: Features,
    /// Supersample factor per axis (N >= 1)
    pub fsaa_level: usize,
    /// User clip planes, used when frustum clipping is off
    pub clip_planes: Vec<Plane>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            color: DEFAULT_COLOR,
            texcoord: [0.0, 0.0],
            features: Features::empty(),
            fsaa_level: 1,
            clip_planes: Vec::new(),
        }
    }

    /// Build a vertex at the given clip-space position carrying the current
    /// color and texture coordinate
    pub fn make_vertex(&self, x: f64, y: f64, z: f64, w: f64) -> Vertex {
        Vertex::new([x, y, z, w], self.color, self.texcoord)
    }

    /// Planes a triangle is clipped against
    ///
    /// The canonical frustum when frustum clipping is on, otherwise the user
    /// planes. Empty means triangles pass through unclipped.
    pub fn active_planes(&self) -> Cow<'_, [Plane]> {
        if self.features.contains(Features::FRUSTUM_CLIP) {
            Cow::Owned(Plane::frustum())
        } else {
            Cow::Borrowed(&self.clip_planes)
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
