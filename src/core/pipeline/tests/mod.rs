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

//! Scenario tests for the rasterization session

mod depth;
mod primitives;

use crate::core::pipeline::Rasterizer;

/// Submit the vertices of one large triangle at depth `z`
///
/// The triangle covers the whole surface without clipping.
fn add_cover_triangle(raster: &mut Rasterizer, z: f64, rgba: [f64; 4]) {
    raster.set_color_rgba(rgba[0], rgba[1], rgba[2], rgba[3]);
    raster.add_vertex(-1.0, -1.0, z, 1.0);
    raster.add_vertex(3.0, -1.0, z, 1.0);
    raster.add_vertex(-1.0, 3.0, z, 1.0);
}

/// Draw the last three submitted vertices as a triangle
fn draw_last_triangle(raster: &mut Rasterizer) {
    raster.draw_triangle(-3, -2, -1).unwrap();
}
