// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::{AffineTransform, Line, LineSegment, Rectangle, Vec2};

/// An open polyline: consecutive vertices are joined, the last vertex is
/// not joined back to the first.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    vertices: Vec<Vec2>,
}

/// A closed polygon: like [`Path`], plus an implicit edge from the last
/// vertex back to the first.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

/// Iterator over the edges of a [`Path`] or [`Polygon`].
#[derive(Clone, Debug)]
pub struct Edges<'a> {
    vertices: &'a [Vec2],
    index: usize,
    closed: bool,
}

impl Iterator for Edges<'_> {
    type Item = LineSegment;

    fn next(&mut self) -> Option<LineSegment> {
        let n = self.vertices.len();
        let edge_count = match (n, self.closed) {
            (0 | 1, _) => 0,
            (_, true) => n,
            (_, false) => n - 1,
        };
        if self.index >= edge_count {
            return None;
        }
        let start = self.vertices[self.index];
        let end = self.vertices[(self.index + 1) % n];
        self.index += 1;
        Some(LineSegment::new(start, end))
    }
}

/// Crossings of `line` with `edges`, sorted along the line.
///
/// Each edge contributes at most one point, accepted only for an edge
/// parameter in `[0, 1)` so a vertex shared by two consecutive edges is
/// counted once. Parallel edges contribute nothing.
fn intersect_edges(edges: Edges<'_>, line: &Line) -> Vec<Vec2> {
    let mut params: Vec<f64> = edges
        .filter_map(|edge| line.edge_parameters(edge.start, edge.end))
        .filter(|&(_, t)| (0.0..1.0).contains(&t))
        .map(|(s, _)| s)
        .collect();
    params.sort_by(f64::total_cmp);
    params.into_iter().map(|s| line.point_at(s)).collect()
}

/// Pushes `start` and the `n - 1` evenly spaced interior points of the edge.
fn push_subdivided(out: &mut Vec<Vec2>, edge: LineSegment, n: usize) {
    out.push(edge.start);
    let step = 1.0 / n as f64;
    out.extend((1..n).map(|k| edge.point_at(k as f64 * step)));
}

macro_rules! shared_vertex_ops {
    ($ty:ident, $closed:expr) => {
        impl $ty {
            /// Creates a shape from its vertices.
            #[must_use]
            pub fn new(vertices: Vec<Vec2>) -> Self {
                Self { vertices }
            }

            /// The vertices, in order.
            #[must_use]
            pub fn vertices(&self) -> &[Vec2] {
                &self.vertices
            }

            /// Consumes the shape, returning its vertices.
            #[must_use]
            pub fn into_vertices(self) -> Vec<Vec2> {
                self.vertices
            }

            /// Number of vertices.
            #[must_use]
            pub fn len(&self) -> usize {
                self.vertices.len()
            }

            /// Returns `true` if there are no vertices.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.vertices.is_empty()
            }

            /// Appends a vertex.
            pub fn push(&mut self, v: Vec2) {
                self.vertices.push(v);
            }

            /// Iterates over the edges.
            #[must_use]
            pub fn edges(&self) -> Edges<'_> {
                Edges {
                    vertices: &self.vertices,
                    index: 0,
                    closed: $closed,
                }
            }

            /// Applies an affine transform to every vertex.
            #[must_use]
            pub fn transform(&self, t: &AffineTransform) -> Self {
                self.map(|v| t.apply(v))
            }

            /// Applies an arbitrary function to every vertex.
            ///
            /// Straight edges stay straight in the result, so subdivide
            /// before mapping through a nonlinear function.
            #[must_use]
            pub fn map<F>(&self, f: F) -> Self
            where
                F: FnMut(Vec2) -> Vec2,
            {
                Self::new(self.vertices.iter().copied().map(f).collect())
            }

            /// Applies a fallible function to every vertex, dropping the
            /// vertices where it fails.
            #[must_use]
            pub fn try_map<F, E>(&self, mut f: F) -> Self
            where
                F: FnMut(Vec2) -> Result<Vec2, E>,
            {
                Self::new(
                    self.vertices
                        .iter()
                        .filter_map(|&v| f(v).ok())
                        .collect(),
                )
            }

            /// Axis-aligned bounding box, or `None` without vertices.
            #[must_use]
            pub fn bounding_rectangle(&self) -> Option<Rectangle> {
                Rectangle::bounding(self.vertices.iter().copied())
            }

            /// Points where `line` crosses the edges, sorted by their
            /// position along the line.
            ///
            /// For a convex polygon this yields either no point or the two
            /// endpoints of the visible part of the line.
            #[must_use]
            pub fn intersect_line(&self, line: &Line) -> Vec<Vec2> {
                intersect_edges(self.edges(), line)
            }
        }

        impl From<Vec<Vec2>> for $ty {
            fn from(vertices: Vec<Vec2>) -> Self {
                Self::new(vertices)
            }
        }

        impl FromIterator<Vec2> for $ty {
            fn from_iter<I: IntoIterator<Item = Vec2>>(iter: I) -> Self {
                Self::new(iter.into_iter().collect())
            }
        }
    };
}

shared_vertex_ops!(Path, false);
shared_vertex_ops!(Polygon, true);

impl Path {
    /// Splits every edge into `n` equal parts.
    ///
    /// `n - 1` points are inserted per edge; the final vertex is kept as the
    /// open end. `n <= 1` returns an unchanged copy.
    #[must_use]
    pub fn subdivide(&self, n: usize) -> Self {
        if n <= 1 || self.vertices.len() < 2 {
            return self.clone();
        }
        let mut out = Vec::with_capacity((self.vertices.len() - 1) * n + 1);
        for edge in self.edges() {
            push_subdivided(&mut out, edge, n);
        }
        out.extend(self.vertices.last().copied());
        Self::new(out)
    }

    /// The segments joining consecutive vertices.
    #[must_use]
    pub fn segments(&self) -> Vec<LineSegment> {
        self.edges().collect()
    }
}

impl Polygon {
    /// Splits every edge, including the closing edge, into `n` equal parts.
    ///
    /// `n <= 1` returns an unchanged copy.
    #[must_use]
    pub fn subdivide(&self, n: usize) -> Self {
        if n <= 1 || self.vertices.len() < 2 {
            return self.clone();
        }
        let mut out = Vec::with_capacity(self.vertices.len() * n);
        for edge in self.edges() {
            push_subdivided(&mut out, edge, n);
        }
        Self::new(out)
    }

    /// The boundary as an open path that returns to its first vertex.
    #[must_use]
    pub fn to_closed_path(&self) -> Path {
        let mut vertices = self.vertices.clone();
        vertices.extend(self.vertices.first().copied());
        Path::new(vertices)
    }
}

impl From<Rectangle> for Polygon {
    fn from(rect: Rectangle) -> Self {
        rect.to_polygon()
    }
}
