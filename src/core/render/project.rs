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

//! Clip space to device space projection
//!
//! After projection a vertex holds:
//!
//! - `x`, `y`: pixel coordinates on the supersample surface
//! - `z`: NDC depth (`z / w`)
//! - `w`: `1 / w`, kept for perspective-correct re-division
//! - color and texcoord: decoded to linear light when sRGB is on, and
//!   divided by `w` when perspective correction is on
//!
//! # Viewport Transform
//!
//! ```text
//! x' = (x / w + 1) · width / 2
//! y' = (y / w + 1) · height / 2
//! ```

use crate::core::color::srgb_to_linear;
use crate::core::math::{Vertex, ATTRIBUTE_COUNT, FIRST_VARYING};
use crate::core::state::Features;

/// Maps clip-space vertices onto a device surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    width: f64,
    height: f64,
    srgb: bool,
    perspective: bool,
}

impl Projector {
    /// Create a projector for a `width × height` device surface
    pub fn new(width: usize, height: usize, features: Features) -> Self {
        Self {
            width: width as f64,
            height: height as f64,
            srgb: features.contains(Features::SRGB),
            perspective: features.contains(Features::PERSPECTIVE),
        }
    }

    /// Project one vertex
    ///
    /// # Examples
    ///
    /// ```
    /// use softrast::core::math::Vertex;
    /// use softrast::core::render::Projector;
    /// use softrast::core::state::Features;
    ///
    /// let projector = Projector::new(100, 50, Features::empty());
    /// let v = Vertex::new([0.5, -0.5, 1.0, 2.0], [255.0, 0.0, 0.0, 1.0], [0.0; 2]);
    /// let p = projector.project(&v);
    ///
    /// assert_eq!(p.x(), 62.5); // (0.25 + 1) * 50
    /// assert_eq!(p.y(), 18.75); // (-0.25 + 1) * 25
    /// assert_eq!(p.z(), 0.5);
    /// assert_eq!(p.w(), 0.5);
    /// ```
    pub fn project(&self, v: &Vertex) -> Vertex {
        let mut out = *v;

        if self.srgb {
            for c in &mut out.color[..3] {
                *c = srgb_to_linear(*c / 255.0);
            }
        }

        let w = out.w();
        out.position = [
            (out.x() / w + 1.0) * self.width / 2.0,
            (out.y() / w + 1.0) * self.height / 2.0,
            out.z() / w,
            1.0 / w,
        ];

        if self.perspective {
            for i in FIRST_VARYING..ATTRIBUTE_COUNT {
                out[i] /= w;
            }
        }

        out
    }
}
