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

//! softrast command-line entry point
//!
//! Renders a small built-in scene and writes the resolved image as raw RGBA
//! bytes, row-major, four bytes per pixel.

use std::path::PathBuf;

use clap::Parser;
use softrast::{RasterConfig, Rasterizer};

#[derive(Parser, Debug)]
#[command(name = "softrast", version, about = "CPU software rasterizer")]
struct Args {
    /// Session configuration (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output width in pixels
    #[arg(long)]
    width: Option<usize>,

    /// Output height in pixels
    #[arg(long)]
    height: Option<usize>,

    /// Supersample factor per axis
    #[arg(long)]
    fsaa: Option<usize>,

    /// Where to write the raw RGBA bytes
    #[arg(short, long, default_value = "out.rgba")]
    output: PathBuf,
}

impl Args {
    fn config(&self) -> softrast::Result<RasterConfig> {
        let mut config = match &self.config {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                RasterConfig::load(path)?
            }
            None => RasterConfig {
                width: 256,
                height: 256,
                fsaa_level: 2,
                depth_test: true,
                ..RasterConfig::default()
            },
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(fsaa) = self.fsaa {
            config.fsaa_level = fsaa;
        }
        Ok(config)
    }
}

/// Two interpenetrating triangles, a line, an antialiased line, and a point
fn draw_scene(raster: &mut Rasterizer) -> softrast::Result<()> {
    raster.set_color(230.0, 60.0, 40.0);
    raster.add_vertex(-0.8, -0.8, 0.2, 1.0);
    raster.add_vertex(0.6, -0.6, 0.2, 1.0);
    raster.add_vertex(-0.2, 0.8, 0.6, 1.0);
    raster.draw_triangle(1, 2, 3)?;

    raster.set_color_rgba(40.0, 90.0, 230.0, 0.75);
    raster.add_vertex(0.8, 0.8, 0.0, 1.0);
    raster.add_vertex(-0.6, 0.4, 0.8, 1.0);
    raster.add_vertex(0.2, -0.8, 0.4, 1.0);
    raster.draw_triangle(-3, -2, -1)?;

    raster.set_color(255.0, 255.0, 255.0);
    raster.add_vertex(-0.9, 0.9, 0.0, 1.0);
    raster.add_vertex(0.9, 0.7, 0.0, 1.0);
    raster.draw_line(-2, -1)?;

    raster.add_vertex(-0.9, -0.9, 0.0, 1.0);
    raster.add_vertex(0.9, -0.5, 0.0, 1.0);
    raster.draw_antialiased_line(-2, -1)?;

    raster.set_color(60.0, 200.0, 90.0);
    raster.add_vertex(0.7, -0.2, 0.0, 1.0);
    let size = 8.0 * raster.fsaa_level() as f64;
    raster.draw_point(-1, size)?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    let config = args.config()?;
    log::info!(
        "Rendering {}x{} at FSAA {}",
        config.width,
        config.height,
        config.fsaa_level
    );

    let mut raster = Rasterizer::from_config(&config)?;
    draw_scene(&mut raster)?;
    let rgba = raster.resolve()?;

    std::fs::write(&args.output, rgba)?;
    log::info!("Wrote {} bytes to {}", rgba.len(), args.output.display());

    Ok(())
}
