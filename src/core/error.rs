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

//! Error types for the rasterization pipeline
//!
//! Every fallible operation in the crate returns [`Result<T>`], an alias for
//! `Result<T, RasterError>`.
//!
//! # Error Classes
//!
//! - **Index errors**: vertex index 0 or an index past either end of the store
//! - **Bounds errors**: direct surface access outside its extent
//! - **Consistency errors**: scanline boundary lists of different length
//!
//! Samples produced by rasterizing partially off-screen primitives never
//! raise bounds errors; the pixel writer drops them instead.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, RasterError>;

/// Errors raised by the rasterizer and its surfaces
#[derive(Debug, Error)]
pub enum RasterError {
    /// Vertex index 0 was used (indices are 1-based, or negative from the end)
    #[error("vertex index cannot be 0")]
    ZeroVertexIndex,

    /// Vertex index points past the end of the vertex store
    #[error("vertex index {index} out of range ({count} vertices submitted)")]
    VertexIndexOutOfRange { index: i64, count: usize },

    /// Pixel coordinates fall outside the surface
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} surface")]
    PixelOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Channel index is not one of R, G, B, A
    #[error("channel {0} out of range (surfaces have 4 channels)")]
    ChannelOutOfRange(usize),

    /// Scanline boundary lists disagree in length
    #[error("scanline boundary mismatch: long edge has {long} rows, short edges have {short}")]
    BoundaryMismatch { long: usize, short: usize },

    /// Vector arithmetic on operands of different length
    #[error("vector length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Supersample factor must be at least 1
    #[error("invalid FSAA level {0} (must be >= 1)")]
    InvalidFsaaLevel(usize),

    /// Texture byte count does not match its dimensions
    #[error("invalid texture data: expected {expected} bytes, got {got}")]
    InvalidTexture { expected: usize, got: usize },

    /// Texturing is enabled but no texture has been loaded
    #[error("texturing enabled but no texture loaded")]
    MissingTexture,

    /// Configuration could not be parsed or serialized
    #[error("config error: {0}")]
    Config(String),

    /// I/O error while reading or writing configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
