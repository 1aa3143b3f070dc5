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

//! Lines and point sprites

use crate::core::pipeline::Rasterizer;

fn sized(width: usize, height: usize) -> Rasterizer {
    let mut raster = Rasterizer::new();
    raster.resize(width, height);
    raster
}

#[test]
fn test_horizontal_line_fills_one_row() {
    let mut raster = sized(4, 4);
    raster.set_color(0.0, 255.0, 0.0);
    raster.add_vertex(-1.0, -0.5, 0.0, 1.0);
    raster.add_vertex(1.0, -0.5, 0.0, 1.0);
    raster.draw_line(1, 2).unwrap();
    raster.resolve().unwrap();

    for y in 0..4 {
        for x in 0..4 {
            let expected = if y == 1 { [0, 255, 0, 255] } else { [0; 4] };
            assert_eq!(raster.output().pixel(x, y).unwrap(), expected);
        }
    }
}

#[test]
fn test_diagonal_line_in_either_direction() {
    for (from, to) in [(1, 2), (2, 1)] {
        let mut raster = sized(4, 4);
        raster.add_vertex(-1.0, -1.0, 0.0, 1.0);
        raster.add_vertex(1.0, 1.0, 0.0, 1.0);
        raster.draw_line(from, to).unwrap();
        raster.resolve().unwrap();

        for y in 0..4 {
            for x in 0..4 {
                let alpha = raster.output().pixel(x, y).unwrap()[3];
                assert_eq!(alpha == 255, x == y, "pixel ({}, {})", x, y);
            }
        }
    }
}

#[test]
fn test_antialiased_line_splits_coverage() {
    let mut raster = sized(4, 4);
    // Device y = 0.5, halfway between rows 0 and 1
    raster.add_vertex(-1.0, -0.75, 0.0, 1.0);
    raster.add_vertex(1.0, -0.75, 0.0, 1.0);
    raster.draw_antialiased_line(1, 2).unwrap();

    for x in 0..4 {
        assert_eq!(raster.samples().pixel(x, 0).unwrap()[3], 0.5);
        assert_eq!(raster.samples().pixel(x, 1).unwrap()[3], 0.5);
        assert_eq!(raster.samples().pixel(x, 2).unwrap()[3], 0.0);
    }
}

#[test]
fn test_antialiased_line_on_pixel_row_is_solid() {
    let mut raster = sized(4, 4);
    raster.add_vertex(-1.0, -0.5, 0.0, 1.0);
    raster.add_vertex(1.0, -0.5, 0.0, 1.0);
    raster.draw_antialiased_line(1, 2).unwrap();

    for x in 0..4 {
        assert_eq!(raster.samples().pixel(x, 1).unwrap()[3], 1.0);
        assert_eq!(raster.samples().pixel(x, 2).unwrap()[3], 0.0);
    }
}

#[test]
fn test_point_sprite_covers_square() {
    let mut raster = sized(4, 4);
    raster.set_color(0.0, 0.0, 255.0);
    raster.add_vertex(0.0, 0.0, 0.0, 1.0);
    raster.draw_point(1, 2.0).unwrap();
    raster.resolve().unwrap();

    for y in 0..4 {
        for x in 0..4 {
            let inside = (1..3).contains(&x) && (1..3).contains(&y);
            let expected = if inside { [0, 0, 255, 255] } else { [0; 4] };
            assert_eq!(raster.output().pixel(x, y).unwrap(), expected, "pixel ({}, {})", x, y);
        }
    }
}

fn gradient_line(perspective: bool) -> f64 {
    let mut raster = sized(8, 1);
    if perspective {
        raster.enable_perspective();
    }
    raster.set_color(0.0, 0.0, 0.0);
    raster.add_vertex(-1.0, -1.0, 0.0, 1.0);
    raster.set_color(255.0, 0.0, 0.0);
    raster.add_vertex(3.0, -3.0, 0.0, 3.0);
    raster.draw_line(1, 2).unwrap();

    let midpoint = raster.samples().pixel(4, 0).unwrap();
    assert!((midpoint[3] - 1.0).abs() < 1e-9);
    midpoint[0]
}

#[test]
fn test_perspective_correct_color_interpolation() {
    // Screen midpoint sits a quarter of the way along the line in clip space
    assert!((gradient_line(true) - 63.75).abs() < 1e-9);
    assert!((gradient_line(false) - 127.5).abs() < 1e-9);
}

#[test]
fn test_draw_before_resize_is_harmless() {
    let mut raster = Rasterizer::new();
    raster.add_vertex(0.0, 0.0, 0.0, 1.0);
    raster.draw_point(1, 4.0).unwrap();
    assert!(raster.resolve().unwrap().is_empty());
}
