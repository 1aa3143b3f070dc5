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

//! Triangle clipping against homogeneous half-spaces
//!
//! Sutherland–Hodgman specialized to triangles. A worklist is pushed through
//! one plane at a time; each triangle is classified by how many of its
//! vertices lie inside the plane:
//!
//! | Inside | Output                                                      |
//! |--------|-------------------------------------------------------------|
//! | 3      | the triangle unchanged                                      |
//! | 2      | `{in0, in1, cut1}` and `{cut1, cut2, in1}`                  |
//! | 1      | `{cut1, cut2, in0}`                                         |
//! | 0      | nothing                                                     |
//!
//! With two inside, `cut1`/`cut2` lie on the edges from the outside vertex to
//! `in0`/`in1`. With one inside, they lie on the edges from `in0` to each
//! outside vertex. Cut points interpolate every vertex attribute.
//!
//! Clipping happens in clip space, before the perspective divide, so
//! triangles crossing `w = 0` are cut cleanly.

use std::collections::VecDeque;

use crate::core::error::Result;
use crate::core::math::{Plane, Vertex};

/// Three vertices of a triangle
pub type Triangle = [Vertex; 3];

/// Clip a triangle against every plane in order
///
/// Returns the triangles covering the part of `triangle` inside all planes.
/// An empty plane list returns the input unchanged.
///
/// # Examples
///
/// ```
/// use softrast::core::math::{Plane, Vertex};
/// use softrast::core::render::clip_triangle;
///
/// let v = |x: f64, y: f64| Vertex::new([x, y, 0.0, 1.0], [255.0; 4], [0.0; 2]);
/// let triangle = [v(-0.5, -0.5), v(2.0, -0.5), v(-0.5, 0.5)];
///
/// // x <= w cuts off the vertex at x = 2
/// let pieces = clip_triangle(triangle, &[Plane::new(-1.0, 0.0, 0.0, 1.0)]).unwrap();
/// assert_eq!(pieces.len(), 2);
/// ```
pub fn clip_triangle(triangle: Triangle, planes: &[Plane]) -> Result<Vec<Triangle>> {
    let mut worklist = VecDeque::from([triangle]);

    for plane in planes {
        for _ in 0..worklist.len() {
            let Some(triangle) = worklist.pop_front() else {
                break;
            };

            let mut inside = Vec::with_capacity(3);
            let mut outside = Vec::with_capacity(3);
            for v in triangle {
                if plane.contains(&v)? {
                    inside.push(v);
                } else {
                    outside.push(v);
                }
            }

            match (inside.as_slice(), outside.as_slice()) {
                ([_, _, _], []) => worklist.push_back(triangle),
                ([in0, in1], [out0]) => {
                    let cut1 = plane.intersect(in0, out0)?;
                    let cut2 = plane.intersect(in1, out0)?;
                    worklist.push_back([*in0, *in1, cut1]);
                    worklist.push_back([cut1, cut2, *in1]);
                }
                ([in0], [out0, out1]) => {
                    let cut1 = plane.intersect(in0, out0)?;
                    let cut2 = plane.intersect(in0, out1)?;
                    worklist.push_back([cut1, cut2, *in0]);
                }
                _ => {}
            }
        }
    }

    Ok(worklist.into())
}

/// Whether a clip-space triangle faces away from the viewer
///
/// Uses the z component of `(v1 − v0) × (v2 − v1)` before projection; a
/// non-negative value faces +z and is culled.
pub fn is_back_facing(triangle: &Triangle) -> bool {
    let a = triangle[1] - triangle[0];
    let b = triangle[2] - triangle[1];
    a.x() * b.y() - a.y() * b.x() >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn v(x: f64, y: f64) -> Vertex {
        Vertex::new([x, y, 0.0, 1.0], [x * 10.0, y * 10.0, 0.0, 1.0], [x, y])
    }

    fn x_max() -> Plane {
        Plane::new(-1.0, 0.0, 0.0, 1.0)
    }

    fn all_inside(pieces: &[Triangle], planes: &[Plane]) -> bool {
        pieces.iter().flatten().all(|v| {
            planes
                .iter()
                .all(|p| p.signed_distance(v).unwrap() >= -1e-9)
        })
    }

    #[test]
    fn test_all_inside_is_unchanged() {
        let t = [v(0.0, 0.0), v(0.5, 0.0), v(0.0, 0.5)];
        let pieces = clip_triangle(t, &[x_max()]).unwrap();
        assert_eq!(pieces, vec![t]);
    }

    #[test]
    fn test_one_vertex_outside() {
        let t = [v(0.0, 0.0), v(2.0, 0.0), v(0.0, 1.0)];
        let pieces = clip_triangle(t, &[x_max()]).unwrap();

        assert_eq!(pieces.len(), 2);
        assert!(all_inside(&pieces, &[x_max()]));
        // {in0, in1, cut1}: inside vertices keep their order
        assert_eq!(pieces[0][0], t[0]);
        assert_eq!(pieces[0][1], t[2]);
        assert!((pieces[0][2].x() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_vertices_outside() {
        let t = [v(0.0, 0.0), v(2.0, 0.0), v(2.0, 1.0)];
        let pieces = clip_triangle(t, &[x_max()]).unwrap();

        assert_eq!(pieces.len(), 1);
        assert!(all_inside(&pieces, &[x_max()]));
        assert_eq!(pieces[0][2], t[0]);
        // Cut on edge (0,0)-(2,1) at x = 1 has y = 0.5 and interpolated color
        let cut2 = pieces[0][1];
        assert!((cut2.y() - 0.5).abs() < 1e-12);
        assert!((cut2.color[1] - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_outside_is_discarded() {
        let t = [v(2.0, 0.0), v(3.0, 0.0), v(2.0, 1.0)];
        assert!(clip_triangle(t, &[x_max()]).unwrap().is_empty());
    }

    #[test]
    fn test_no_planes_passes_through() {
        let t = [v(5.0, 0.0), v(6.0, 0.0), v(5.0, 1.0)];
        assert_eq!(clip_triangle(t, &[]).unwrap(), vec![t]);
    }

    #[test]
    fn test_frustum_clip_of_oversized_triangle() {
        let t = [v(-3.0, -3.0), v(3.0, -3.0), v(0.0, 3.0)];
        let planes = Plane::frustum();
        let pieces = clip_triangle(t, &planes).unwrap();

        assert!(!pieces.is_empty());
        assert!(all_inside(&pieces, &planes));
    }

    #[test]
    fn test_clip_against_negative_w() {
        // w >= 0 keeps the part in front of the eye
        let w_positive = Plane::new(0.0, 0.0, 0.0, 1.0);
        let mut behind = v(0.0, 0.0);
        behind.position[3] = -1.0;
        let t = [v(0.0, 0.0), v(1.0, 0.0), behind];

        let pieces = clip_triangle(t, &[w_positive]).unwrap();
        assert_eq!(pieces.len(), 2);
        assert!(pieces.iter().flatten().all(|v| v.w() >= 0.0));
    }

    #[test]
    fn test_back_facing() {
        let ccw = [v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0)];
        let cw = [v(0.0, 0.0), v(0.0, 1.0), v(1.0, 0.0)];
        assert!(is_back_facing(&ccw));
        assert!(!is_back_facing(&cw));
    }

    proptest! {
        #[test]
        fn prop_inside_triangle_survives_any_frustum_subset(
            coords in prop::array::uniform6(-0.99f64..0.99),
            mask in 0u8..64,
        ) {
            let t = [
                v(coords[0], coords[1]),
                v(coords[2], coords[3]),
                v(coords[4], coords[5]),
            ];
            let planes: Vec<Plane> = Plane::frustum()
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, p)| p)
                .collect();

            prop_assert_eq!(clip_triangle(t, &planes).unwrap(), vec![t]);
        }
    }
}
