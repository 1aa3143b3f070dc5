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

//! Pixel surfaces
//!
//! Two row-major grids back the pipeline:
//!
//! - [`ColorSurface`]: 4 channels per pixel (RGBA), any sample type. The
//!   supersample accumulator uses `f64`, the resolved output and textures use
//!   `u8`.
//! - [`DepthSurface`]: one `f64` per pixel, initialized to 1.0 (far).
//!
//! Both check every access against their extent and report
//! [`RasterError::PixelOutOfBounds`] instead of panicking. Dimensions are fixed
//! at construction; resizing means building a new surface.

use crate::core::error::{RasterError, Result};

/// Channels per color pixel
pub const CHANNELS: usize = 4;

/// Depth value of a freshly cleared depth surface
pub const FAR_DEPTH: f64 = 1.0;

fn check_bounds(x: usize, y: usize, width: usize, height: usize) -> Result<usize> {
    if x >= width || y >= height {
        return Err(RasterError::PixelOutOfBounds {
            x,
            y,
            width,
            height,
        });
    }
    Ok(y * width + x)
}

/// RGBA pixel grid
///
/// # Examples
///
/// ```
/// use softrast::core::surface::ColorSurface;
///
/// let mut surface = ColorSurface::<u8>::new(4, 2);
/// surface.set_pixel(3, 1, [255, 128, 0, 255]).unwrap();
///
/// assert_eq!(surface.pixel(3, 1).unwrap(), [255, 128, 0, 255]);
/// assert_eq!(surface.get(3, 1, 1).unwrap(), 128);
/// assert!(surface.pixel(4, 0).is_err());
/// assert_eq!(surface.data().len(), 4 * 2 * 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSurface<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> ColorSurface<T> {
    /// Create a zero-initialized surface
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height * CHANNELS],
        }
    }

    /// Wrap an existing RGBA buffer
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidTexture`] if `data` does not hold exactly
    /// `width * height * 4` samples.
    pub fn from_data(width: usize, height: usize, data: Vec<T>) -> Result<Self> {
        let expected = width * height * CHANNELS;
        if data.len() != expected {
            return Err(RasterError::InvalidTexture {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Read one channel of one pixel
    pub fn get(&self, x: usize, y: usize, channel: usize) -> Result<T> {
        let index = self.channel_index(x, y, channel)?;
        Ok(self.data[index])
    }

    /// Write one channel of one pixel
    pub fn set(&mut self, x: usize, y: usize, channel: usize, value: T) -> Result<()> {
        let index = self.channel_index(x, y, channel)?;
        self.data[index] = value;
        Ok(())
    }

    /// Read all four channels of a pixel
    pub fn pixel(&self, x: usize, y: usize) -> Result<[T; CHANNELS]> {
        let base = check_bounds(x, y, self.width, self.height)? * CHANNELS;
        Ok([
            self.data[base],
            self.data[base + 1],
            self.data[base + 2],
            self.data[base + 3],
        ])
    }

    /// Write all four channels of a pixel
    pub fn set_pixel(&mut self, x: usize, y: usize, rgba: [T; CHANNELS]) -> Result<()> {
        let base = check_bounds(x, y, self.width, self.height)? * CHANNELS;
        self.data[base..base + CHANNELS].copy_from_slice(&rgba);
        Ok(())
    }

    /// Flat row-major RGBA store, for bulk export
    pub fn data(&self) -> &[T] {
        &self.data
    }

    fn channel_index(&self, x: usize, y: usize, channel: usize) -> Result<usize> {
        if channel >= CHANNELS {
            return Err(RasterError::ChannelOutOfRange(channel));
        }
        Ok(check_bounds(x, y, self.width, self.height)? * CHANNELS + channel)
    }
}

/// Single-channel depth grid
#[derive(Debug, Clone, PartialEq)]
pub struct DepthSurface {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl DepthSurface {
    /// Create a surface cleared to [`FAR_DEPTH`]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![FAR_DEPTH; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Stored depth at a pixel
    pub fn get(&self, x: usize, y: usize) -> Result<f64> {
        let index = check_bounds(x, y, self.width, self.height)?;
        Ok(self.data[index])
    }

    /// Overwrite the depth at a pixel
    pub fn set(&mut self, x: usize, y: usize, depth: f64) -> Result<()> {
        let index = check_bounds(x, y, self.width, self.height)?;
        self.data[index] = depth;
        Ok(())
    }
}
