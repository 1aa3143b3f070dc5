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

//! Incremental (DDA) scan conversion
//!
//! Every primitive is enumerated with one stepper, [`dda`], which walks
//! between two vertices in unit steps of one axis and interpolates all other
//! components linearly.
//!
//! # Half-Open Walks
//!
//! A walk from `a` to `b` on axis `i` visits the integers `k` with
//! `a[i] <= k < b[i]` (after ordering the endpoints). Two triangles sharing an
//! edge therefore never both draw a sample that lies exactly on it, and the
//! walks `a → m` and `m → b` together cover `a → b` exactly once.
//!
//! Each sample is computed directly from the walk origin rather than by
//! repeated addition, so long walks do not drift and the walked coordinate is
//! always an exact integer.
//!
//! # Triangles
//!
//! 1. Sort the projected vertices by `y`
//! 2. Walk the long edge (`v0 → v2`) and the two short edges
//!    (`v0 → v1`, `v1 → v2`) on the `y` axis, one boundary per scanline
//! 3. Walk each scanline on the `x` axis between its two boundaries
//!
//! All walks are limited to the surface extent. Samples outside it would be
//! dropped by the pixel writer anyway; limiting the walk bounds the work
//! for geometry that reaches far off-screen.

use std::ops::Range;

use crate::core::error::{RasterError, Result};
use crate::core::math::Vertex;

use super::clip::Triangle;

/// Device-space extent primitives are scanned into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub width: usize,
    pub height: usize,
}

impl Extent {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Integer coordinates covered on `axis` (0 = x, 1 = y)
    fn span(&self, axis: usize) -> Range<i64> {
        let len = if axis == Vertex::X {
            self.width
        } else {
            self.height
        };
        0..len as i64
    }
}

/// Unit-step walk between two vertices along one axis
///
/// Created by [`dda`].
#[derive(Debug, Clone)]
pub struct Dda {
    origin: Vertex,
    step: Vertex,
    axis: usize,
    next: i64,
    end: i64,
}

/// Walk from the lower to the higher of `a` and `b` on `axis`
///
/// Yields one interpolated vertex per integer `k` with
/// `lower[axis] <= k < upper[axis]`. Equal or non-finite coordinates yield
/// nothing.
///
/// # Examples
///
/// ```
/// use softrast::core::math::Vertex;
/// use softrast::core::render::dda;
///
/// let a = Vertex::new([0.5, 0.0, 0.0, 1.0], [0.0; 4], [0.0, 0.0]);
/// let b = Vertex::new([3.5, 0.0, 0.0, 1.0], [0.0; 4], [1.0, 0.0]);
///
/// let xs: Vec<f64> = dda(&b, &a, 0).map(|p| p.x()).collect();
/// assert_eq!(xs, vec![1.0, 2.0, 3.0]);
/// ```
pub fn dda(a: &Vertex, b: &Vertex, axis: usize) -> Dda {
    let (lo, hi) = if a[axis] <= b[axis] { (a, b) } else { (b, a) };
    let (from, to) = (lo[axis], hi[axis]);

    if from == to || !from.is_finite() || !to.is_finite() {
        return Dda {
            origin: *lo,
            step: Vertex::default(),
            axis,
            next: 0,
            end: 0,
        };
    }

    Dda {
        origin: *lo,
        step: (*hi - *lo) / (to - from),
        axis,
        next: from.ceil() as i64,
        end: to.ceil() as i64,
    }
}

impl Dda {
    /// Restrict the walk to the integer coordinates in `range`
    pub fn clamp_to(mut self, range: Range<i64>) -> Self {
        self.next = self.next.max(range.start);
        self.end = self.end.min(range.end);
        self
    }
}

impl Iterator for Dda {
    type Item = Vertex;

    fn next(&mut self) -> Option<Vertex> {
        if self.next >= self.end {
            return None;
        }
        let k = self.next;
        self.next += 1;

        let mut p = self.origin + self.step * (k as f64 - self.origin[self.axis]);
        p[self.axis] = k as f64;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.end - self.next).max(0) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Dda {}

fn has_finite_position(v: &Vertex) -> bool {
    v.position.iter().all(|c| c.is_finite())
}

/// Enumerate the interior samples of a projected triangle
///
/// # Errors
///
/// Returns [`RasterError::BoundaryMismatch`] if the long edge and the two
/// short edges produce different scanline counts, and propagates any error
/// from `plot`.
pub fn scan_triangle<F>(mut triangle: Triangle, extent: Extent, mut plot: F) -> Result<()>
where
    F: FnMut(Vertex) -> Result<()>,
{
    if !triangle.iter().all(has_finite_position) {
        log::warn!("Skipping triangle with non-finite projected position");
        return Ok(());
    }

    triangle.sort_by(|a, b| a.y().total_cmp(&b.y()));
    let [top, mid, bottom] = triangle;
    let rows = extent.span(Vertex::Y);

    let long: Vec<Vertex> = dda(&top, &bottom, Vertex::Y)
        .clamp_to(rows.clone())
        .collect();
    let short: Vec<Vertex> = dda(&top, &mid, Vertex::Y)
        .clamp_to(rows.clone())
        .chain(dda(&mid, &bottom, Vertex::Y).clamp_to(rows))
        .collect();

    if long.len() != short.len() {
        return Err(RasterError::BoundaryMismatch {
            long: long.len(),
            short: short.len(),
        });
    }

    let columns = extent.span(Vertex::X);
    for (l, s) in long.iter().zip(&short) {
        for p in dda(l, s, Vertex::X).clamp_to(columns.clone()) {
            plot(p)?;
        }
    }

    Ok(())
}

/// Axis with the larger endpoint delta, and the other one
fn major_axis(a: &Vertex, b: &Vertex) -> (usize, usize) {
    let dx = (a.x() - b.x()).abs();
    let dy = (a.y() - b.y()).abs();
    if dx > dy {
        (Vertex::X, Vertex::Y)
    } else {
        (Vertex::Y, Vertex::X)
    }
}

/// Enumerate the samples of an aliased line
///
/// Walks the major axis and rounds the minor coordinate at each step.
pub fn scan_line<F>(a: &Vertex, b: &Vertex, extent: Extent, mut plot: F) -> Result<()>
where
    F: FnMut(Vertex) -> Result<()>,
{
    let (major, minor) = major_axis(a, b);
    for mut p in dda(a, b, major).clamp_to(extent.span(major)) {
        p[minor] = p[minor].round();
        plot(p)?;
    }
    Ok(())
}

/// Enumerate the coverage-weighted samples of an antialiased line
///
/// At each major-axis step the line falls between two minor-axis pixels.
/// The floor pixel receives alpha scaled by `1 − frac` and the ceiling pixel
/// alpha scaled by `frac`, where `frac` is the fractional part of the minor
/// coordinate. A zero-weight ceiling sample is not emitted.
pub fn scan_antialiased_line<F>(a: &Vertex, b: &Vertex, extent: Extent, mut plot: F) -> Result<()>
where
    F: FnMut(Vertex) -> Result<()>,
{
    let (major, minor) = major_axis(a, b);
    for p in dda(a, b, major).clamp_to(extent.span(major)) {
        let floor = p[minor].floor();
        let frac = p[minor] - floor;

        let mut near = p;
        near[minor] = floor;
        near[Vertex::A] *= 1.0 - frac;
        plot(near)?;

        if frac > 0.0 {
            let mut far = p;
            far[minor] = floor + 1.0;
            far[Vertex::A] *= frac;
            plot(far)?;
        }
    }
    Ok(())
}

/// Enumerate the samples of a square point sprite
///
/// The square of side `size` is centered on the projected vertex. Texture
/// coordinates run from 0 to `texcoord_span` across it on both axes.
pub fn scan_point<F>(
    center: &Vertex,
    size: f64,
    texcoord_span: f64,
    extent: Extent,
    mut plot: F,
) -> Result<()>
where
    F: FnMut(Vertex) -> Result<()>,
{
    let half = size / 2.0;

    let mut top = *center;
    top[Vertex::X] -= half;
    top[Vertex::Y] -= half;
    top.texcoord = [0.0, 0.0];

    let mut bottom = top;
    bottom[Vertex::Y] += size;
    bottom[Vertex::T] = texcoord_span;

    let columns = extent.span(Vertex::X);
    for left in dda(&top, &bottom, Vertex::Y).clamp_to(extent.span(Vertex::Y)) {
        let mut right = left;
        right[Vertex::X] += size;
        right[Vertex::S] += texcoord_span;

        for p in dda(&left, &right, Vertex::X).clamp_to(columns.clone()) {
            plot(p)?;
        }
    }
    Ok(())
}
