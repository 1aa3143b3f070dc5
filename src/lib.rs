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

//! softrast: a CPU-only rasterizer
//!
//! Takes homogeneous clip-space vertices and primitive commands, and
//! rasterizes triangles, lines, and point sprites into an RGBA buffer with
//! clipping, perspective-correct interpolation, depth testing, supersampled
//! antialiasing, sRGB-aware blending, and texture mapping.
//!
//! # Architecture
//!
//! - [`core`](crate::core): the transform / clip / scan / blend pipeline and its surfaces
//! - [`config`]: TOML session configuration
//!
//! # Example
//!
//! ```
//! use softrast::core::pipeline::Rasterizer;
//!
//! let mut raster = Rasterizer::new();
//! raster.resize(64, 64);
//! raster.set_fsaa_level(2)?;
//! raster.enable_depth_test();
//!
//! raster.set_color(255.0, 128.0, 0.0);
//! raster.add_vertex(-0.5, -0.5, 0.2, 1.0);
//! raster.add_vertex(0.5, -0.5, 0.2, 1.0);
//! raster.add_vertex(0.0, 0.5, 0.2, 1.0);
//! raster.draw_triangle(1, 2, 3)?;
//!
//! let rgba = raster.resolve()?;
//! assert_eq!(rgba.len(), 64 * 64 * 4);
//! # Ok::<(), softrast::RasterError>(())
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`](crate::core::error::Result) which is an alias for
//! `Result<T, RasterError>`.

pub mod config;
pub mod core;

// Re-export commonly used types
pub use config::RasterConfig;
pub use crate::core::error::{RasterError, Result};
pub use crate::core::pipeline::Rasterizer;
