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

//! Depth test ordering

use super::{add_cover_triangle, draw_last_triangle};
use crate::core::pipeline::Rasterizer;

const NEAR_COLOR: [f64; 4] = [255.0, 0.0, 0.0, 1.0];
const FAR_COLOR: [f64; 4] = [0.0, 0.0, 255.0, 1.0];

fn draw_pair(near_first: bool) -> Rasterizer {
    let mut raster = Rasterizer::new();
    raster.resize(4, 4);
    raster.enable_depth_test();

    let order = if near_first {
        [(0.2, NEAR_COLOR), (0.8, FAR_COLOR)]
    } else {
        [(0.8, FAR_COLOR), (0.2, NEAR_COLOR)]
    };
    for (z, color) in order {
        add_cover_triangle(&mut raster, z, color);
        draw_last_triangle(&mut raster);
    }
    raster
}

#[test]
fn test_nearer_triangle_wins_regardless_of_order() {
    for near_first in [true, false] {
        let mut raster = draw_pair(near_first);
        let rgba = raster.resolve().unwrap().to_vec();

        assert_eq!(&rgba[0..4], &[255, 0, 0, 255], "near_first = {}", near_first);
        assert_eq!(raster.depth().get(1, 1).unwrap(), 0.2);
    }
}

#[test]
fn test_without_depth_test_last_draw_wins() {
    let mut raster = Rasterizer::new();
    raster.resize(4, 4);

    add_cover_triangle(&mut raster, 0.2, NEAR_COLOR);
    draw_last_triangle(&mut raster);
    add_cover_triangle(&mut raster, 0.8, FAR_COLOR);
    draw_last_triangle(&mut raster);

    assert_eq!(&raster.resolve().unwrap()[0..4], &[0, 0, 255, 255]);
    // Depth buffer is never touched
    assert_eq!(raster.depth().get(0, 0).unwrap(), 1.0);
}

#[test]
fn test_samples_behind_near_plane_are_rejected() {
    let mut raster = Rasterizer::new();
    raster.resize(2, 2);
    raster.enable_depth_test();

    add_cover_triangle(&mut raster, -1.5, NEAR_COLOR);
    draw_last_triangle(&mut raster);

    assert!(raster.resolve().unwrap().iter().all(|&b| b == 0));
}
