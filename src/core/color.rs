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

//! sRGB transfer functions
//!
//! Blending and supersample averaging happen in linear light when sRGB mode
//! is on. Colors are decoded at projection time and re-encoded by the
//! resolver.
//!
//! **sRGB to linear**:
//! - `c <= 0.04045`: `c / 12.92`
//! - otherwise: `((c + 0.055) / 1.055) ^ 2.4`
//!
//! **Linear to sRGB**:
//! - `c <= 0.04045 / 12.92`: `12.92 * c`
//! - otherwise: `1.055 * c ^ (1 / 2.4) - 0.055`
//!
//! The encode threshold is the image of the decode threshold, so each
//! function picks the branch that inverts the other's.

/// Upper end of the linear segment in sRGB space
const SRGB_KNEE: f64 = 0.04045;

/// Upper end of the linear segment in linear space
const LINEAR_KNEE: f64 = SRGB_KNEE / 12.92;

/// Decode an sRGB-encoded channel in `[0, 1]` to linear light
///
/// # Examples
///
/// ```
/// use softrast::core::color::srgb_to_linear;
///
/// // Middle gray (128/255) is about 0.216 in linear light
/// assert!((srgb_to_linear(128.0 / 255.0) - 0.2158).abs() < 1e-3);
/// ```
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= SRGB_KNEE {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode a linear channel in `[0, 1]` to sRGB
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= LINEAR_KNEE {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}
