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

//! Session configuration
//!
//! A [`RasterConfig`] captures everything needed to set up a session before
//! any geometry arrives: output size, supersample factor, feature toggles,
//! and user clip planes. It round-trips through TOML:
//!
//! ```toml
//! width = 640
//! height = 480
//! fsaa_level = 2
//! depth_test = true
//! srgb = true
//! clip_planes = [[1.0, 0.0, 0.0, 0.5]]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{RasterError, Result};
use crate::core::state::Features;

/// Settings for a rasterization session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterConfig {
    /// Output width in pixels
    pub width: usize,
    /// Output height in pixels
    pub height: usize,
    /// Supersample factor per axis
    pub fsaa_level: usize,
    pub depth_test: bool,
    pub srgb: bool,
    pub perspective: bool,
    pub frustum_clip: bool,
    pub cull: bool,
    pub texture: bool,
    pub decals: bool,
    /// User clip planes `[a, b, c, d]`
    pub clip_planes: Vec<[f64; 4]>,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            fsaa_level: 1,
            depth_test: false,
            srgb: false,
            perspective: false,
            frustum_clip: false,
            cull: false,
            texture: false,
            decals: false,
            clip_planes: Vec::new(),
        }
    }
}

impl RasterConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| RasterError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Serialize configuration to TOML text
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| RasterError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Feature flags selected by the toggles
    pub fn features(&self) -> Features {
        let mut features = Features::empty();
        features.set(Features::DEPTH_TEST, self.depth_test);
        features.set(Features::SRGB, self.srgb);
        features.set(Features::PERSPECTIVE, self.perspective);
        features.set(Features::FRUSTUM_CLIP, self.frustum_clip);
        features.set(Features::CULL, self.cull);
        features.set(Features::TEXTURE, self.texture);
        features.set(Features::DECALS, self.decals);
        features
    }
}
