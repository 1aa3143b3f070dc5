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

//! Rasterization stages
//!
//! - [`clip`]: triangle clipping against homogeneous planes, face culling
//! - [`project`]: clip space to device space
//! - [`scan`]: DDA scan conversion of triangles, lines, and points
//! - [`pixel`]: per-sample shading, blending, and depth testing
//! - [`resolve`](mod@resolve): supersample box filter

pub mod clip;
pub mod pixel;
pub mod project;
pub mod resolve;
pub mod scan;

pub use clip::{clip_triangle, is_back_facing, Triangle};
pub use pixel::{alpha_blend, sample_texture, PixelWriter};
pub use project::Projector;
pub use resolve::resolve;
pub use scan::{dda, scan_antialiased_line, scan_line, scan_point, scan_triangle, Dda, Extent};
