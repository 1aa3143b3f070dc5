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

//! Supersample resolve
//!
//! Box-filters the `N×N` block of supersamples behind each output pixel:
//!
//! - color is the alpha-weighted mean of the block
//! - alpha is the plain mean, so partial coverage becomes partial opacity
//!
//! With sRGB on, the averaged linear color is encoded back to sRGB. Results
//! are scaled to bytes, rounded, and clamped.

use crate::core::color::linear_to_srgb;
use crate::core::error::Result;
use crate::core::surface::ColorSurface;

fn to_byte(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Resolve `samples` into `output`
///
/// `samples` must be `level` times larger than `output` on each axis.
/// Reading the source is idempotent, so resolving twice without drawing in
/// between gives the same bytes.
pub fn resolve(
    samples: &ColorSurface<f64>,
    output: &mut ColorSurface<u8>,
    level: usize,
    srgb: bool,
) -> Result<()> {
    let block = (level * level) as f64;

    for y in 0..output.height() {
        for x in 0..output.width() {
            let mut rgb = [0.0; 3];
            let mut alpha = 0.0;

            for i in 0..level {
                for j in 0..level {
                    let [r, g, b, a] = samples.pixel(level * x + j, level * y + i)?;
                    rgb[0] += a * r;
                    rgb[1] += a * g;
                    rgb[2] += a * b;
                    alpha += a;
                }
            }

            if alpha != 0.0 {
                for c in &mut rgb {
                    *c /= alpha;
                }
                alpha /= block;
            }

            if srgb {
                for c in &mut rgb {
                    *c = linear_to_srgb(*c) * 255.0;
                }
            }

            output.set_pixel(
                x,
                y,
                [
                    to_byte(rgb[0]),
                    to_byte(rgb[1]),
                    to_byte(rgb[2]),
                    to_byte(alpha * 255.0),
                ],
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_one_is_a_copy() {
        let mut samples = ColorSurface::new(2, 1);
        samples.set_pixel(0, 0, [10.0, 20.0, 30.0, 1.0]).unwrap();
        samples.set_pixel(1, 0, [200.0, 100.0, 0.0, 0.5]).unwrap();
        let mut output = ColorSurface::new(2, 1);

        resolve(&samples, &mut output, 1, false).unwrap();

        assert_eq!(output.pixel(0, 0).unwrap(), [10, 20, 30, 255]);
        assert_eq!(output.pixel(1, 0).unwrap(), [200, 100, 0, 128]);
    }

    #[test]
    fn test_partial_coverage_averages_alpha() {
        let mut samples = ColorSurface::new(4, 4);
        samples.set_pixel(0, 0, [255.0, 0.0, 0.0, 1.0]).unwrap();
        samples.set_pixel(1, 1, [255.0, 0.0, 0.0, 1.0]).unwrap();
        let mut output = ColorSurface::new(2, 2);

        resolve(&samples, &mut output, 2, false).unwrap();

        // 2 of 4 samples covered
        assert_eq!(output.pixel(0, 0).unwrap(), [255, 0, 0, 128]);
        assert_eq!(output.pixel(1, 1).unwrap(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_color_is_alpha_weighted() {
        let mut samples = ColorSurface::new(2, 2);
        samples.set_pixel(0, 0, [200.0, 0.0, 0.0, 1.0]).unwrap();
        // Transparent sample contributes nothing to the color
        samples.set_pixel(1, 0, [0.0, 200.0, 0.0, 0.0]).unwrap();
        let mut output = ColorSurface::new(1, 1);

        resolve(&samples, &mut output, 2, false).unwrap();

        assert_eq!(output.pixel(0, 0).unwrap(), [200, 0, 0, 64]);
    }

    #[test]
    fn test_srgb_encodes_linear_average() {
        let mut samples = ColorSurface::new(1, 1);
        samples.set_pixel(0, 0, [0.5, 1.0, 0.0, 1.0]).unwrap();
        let mut output = ColorSurface::new(1, 1);

        resolve(&samples, &mut output, 1, true).unwrap();

        let expected = (linear_to_srgb(0.5) * 255.0).round() as u8;
        assert_eq!(output.pixel(0, 0).unwrap(), [expected, 255, 0, 255]);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let mut samples = ColorSurface::new(1, 1);
        samples.set_pixel(0, 0, [300.0, -5.0, 0.0, 1.0]).unwrap();
        let mut output = ColorSurface::new(1, 1);

        resolve(&samples, &mut output, 1, false).unwrap();
        assert_eq!(output.pixel(0, 0).unwrap(), [255, 0, 0, 255]);
    }
}
