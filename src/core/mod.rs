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

//! Core rasterization pipeline
//!
//! Components, leaf first:
//!
//! - [`math`]: numeric vector, vertex, clip plane
//! - [`surface`]: color and depth surfaces
//! - [`color`]: sRGB transfer functions
//! - [`state`]: session state and feature flags
//! - [`render`]: clipper, projector, scan converter, pixel writer, resolver
//! - [`pipeline`]: the [`Rasterizer`](pipeline::Rasterizer) session tying
//!   them together

pub mod color;
pub mod error;
pub mod math;
pub mod pipeline;
pub mod render;
pub mod state;
pub mod surface;
