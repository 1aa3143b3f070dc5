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

//! Per-sample shading, blending, and depth testing
//!
//! [`PixelWriter`] takes one fully interpolated device-space sample and
//! resolves it into the supersample surfaces:
//!
//! 1. Undo the perspective divide (divide varyings by the stored `1 / w`)
//! 2. Drop samples outside the surface
//! 3. Pick the source color: nearest texel (optionally decoded and
//!    composited over the vertex color) or the vertex color
//! 4. Composite the source over the stored color ("over" operator)
//! 5. Depth test, then write color (and depth)
//!
//! # Color Scale
//!
//! RGB is on a 0-255 scale, or linear 0-1 when sRGB is on; alpha is 0-1.

use crate::core::color::srgb_to_linear;
use crate::core::error::Result;
use crate::core::math::{Vertex, ATTRIBUTE_COUNT, FIRST_VARYING};
use crate::core::state::Features;
use crate::core::surface::{ColorSurface, DepthSurface};

/// Composite `src` over `dst`
///
/// ```text
/// a   = a_s + a_d·(1 − a_s)
/// rgb = (a_s·rgb_s + a_d·(1 − a_s)·rgb_d) / a
/// ```
///
/// A fully transparent result has all channels 0.
///
/// # Examples
///
/// ```
/// use softrast::core::render::alpha_blend;
///
/// let red = [255.0, 0.0, 0.0, 0.5];
/// let blue = [0.0, 0.0, 255.0, 1.0];
/// assert_eq!(alpha_blend(red, blue), [127.5, 0.0, 127.5, 1.0]);
/// ```
pub fn alpha_blend(src: [f64; 4], dst: [f64; 4]) -> [f64; 4] {
    let src_weight = src[3];
    let dst_weight = dst[3] * (1.0 - src[3]);
    let a = src_weight + dst_weight;
    if a == 0.0 {
        return [0.0; 4];
    }
    let mix = |i: usize| (src_weight * src[i] + dst_weight * dst[i]) / a;
    [mix(0), mix(1), mix(2), a]
}

/// Nearest-neighbor texel lookup with wrap-around
///
/// Returns RGB on a 0-255 scale and alpha normalized to 0-1. An empty texture
/// samples as transparent black.
pub fn sample_texture(texture: &ColorSurface<u8>, s: f64, t: f64) -> Result<[f64; 4]> {
    let (width, height) = (texture.width() as i64, texture.height() as i64);
    if width == 0 || height == 0 {
        return Ok([0.0; 4]);
    }

    let x = ((s * width as f64 + 0.5).floor() as i64).rem_euclid(width) as usize;
    let y = ((t * height as f64 + 0.5).floor() as i64).rem_euclid(height) as usize;
    let [r, g, b, a] = texture.pixel(x, y)?;
    Ok([r as f64, g as f64, b as f64, a as f64 / 255.0])
}

/// Writes samples into the supersample color and depth surfaces
pub struct PixelWriter<'a> {
    color: &'a mut ColorSurface<f64>,
    depth: &'a mut DepthSurface,
    texture: Option<&'a ColorSurface<u8>>,
    features: Features,
}

impl<'a> PixelWriter<'a> {
    /// Create a writer over a session's surfaces
    ///
    /// `texture` is only consulted when [`Features::TEXTURE`] is set.
    pub fn new(
        color: &'a mut ColorSurface<f64>,
        depth: &'a mut DepthSurface,
        texture: Option<&'a ColorSurface<u8>>,
        features: Features,
    ) -> Self {
        Self {
            color,
            depth,
            texture,
            features,
        }
    }

    /// Shade and store one sample
    ///
    /// Samples outside the surface are silently ignored.
    pub fn write(&mut self, mut sample: Vertex) -> Result<()> {
        if self.features.contains(Features::PERSPECTIVE) {
            let inv_w = sample.w();
            for i in FIRST_VARYING..ATTRIBUTE_COUNT {
                sample[i] /= inv_w;
            }
        }

        let Some((x, y)) = self.locate(&sample) else {
            return Ok(());
        };

        let src = self.source_color(&sample)?;
        let dst = self.color.pixel(x, y)?;
        let blended = alpha_blend(src, dst);

        if self.features.contains(Features::DEPTH_TEST) {
            let z = sample.z();
            if z >= -1.0 && z < self.depth.get(x, y)? {
                self.color.set_pixel(x, y, blended)?;
                self.depth.set(x, y, z)?;
            }
        } else {
            self.color.set_pixel(x, y, blended)?;
        }

        Ok(())
    }

    /// Pixel containing the sample, if it lies on the surface
    fn locate(&self, sample: &Vertex) -> Option<(usize, usize)> {
        let (x, y) = (sample.x(), sample.y());
        if !(x >= 0.0 && y >= 0.0) {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.color.width() || y >= self.color.height() {
            return None;
        }
        Some((x, y))
    }

    fn source_color(&self, sample: &Vertex) -> Result<[f64; 4]> {
        let texture = match self.texture {
            Some(texture) if self.features.contains(Features::TEXTURE) => texture,
            _ => return Ok(sample.color),
        };

        let mut texel = sample_texture(texture, sample.texcoord[0], sample.texcoord[1])?;
        if self.features.contains(Features::SRGB) {
            for c in &mut texel[..3] {
                *c = srgb_to_linear(*c / 255.0);
            }
        }
        if self.features.contains(Features::DECALS) {
            texel = alpha_blend(texel, sample.color);
        }
        Ok(texel)
    }
}
