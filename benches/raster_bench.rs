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

use criterion::{criterion_group, criterion_main, Criterion};
use softrast::Rasterizer;
use std::hint::black_box;

fn session(fsaa: usize) -> Rasterizer {
    let mut raster = Rasterizer::new();
    raster.resize(256, 256);
    raster
        .set_fsaa_level(fsaa)
        .expect("FSAA level is non-zero");
    raster.enable_depth_test();
    raster.set_color_rgba(200.0, 100.0, 50.0, 0.5);
    raster.add_vertex(-0.9, -0.9, 0.5, 1.0);
    raster.add_vertex(0.9, -0.7, 0.5, 1.0);
    raster.add_vertex(-0.1, 0.9, 0.5, 1.0);
    raster
}

fn bench_triangle_fill(c: &mut Criterion) {
    for fsaa in [1, 4] {
        let mut raster = session(fsaa);
        c.bench_function(&format!("triangle_fill_fsaa{}", fsaa), |b| {
            b.iter(|| raster.draw_triangle(black_box(1), 2, 3).expect("valid indices"))
        });
    }
}

fn bench_resolve(c: &mut Criterion) {
    let mut raster = session(4);
    raster.draw_triangle(1, 2, 3).expect("valid indices");
    c.bench_function("resolve_fsaa4", |b| {
        b.iter(|| {
            black_box(raster.resolve().expect("surfaces match").len());
        })
    });
}

criterion_group!(benches, bench_triangle_fill, bench_resolve);
criterion_main!(benches);
