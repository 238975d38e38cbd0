//! Mesh primitives built from a projected vertex grid.
//!
//! The wireframe mode walks the grid lazily and yields line segments; the
//! hidden-line mode collects quads, which the renderer then depth-sorts.
//! Neither ever produces a primitive touching a culled vertex.

use ripplescope_core::{ScreenPoint, ScreenVertex, VertexGrid};

/// Line between two grid-adjacent vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: ScreenPoint,
    pub to: ScreenPoint,
}

/// Quad edge with the mean amplitude of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: ScreenPoint,
    pub to: ScreenPoint,
    pub avg_amplitude: f64,
}

impl Edge {
    fn between(a: &ScreenVertex, b: &ScreenVertex) -> Self {
        Self {
            from: a.point(),
            to: b.point(),
            avg_amplitude: (a.amplitude + b.amplitude) * 0.5,
        }
    }
}

/// One grid cell with all four corners visible.
///
/// Corners are stored as (i, j), (i+1, j), (i+1, j+1), (i, j+1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub corners: [ScreenVertex; 4],
    pub avg_depth: f64,
}

impl Quad {
    pub fn new(corners: [ScreenVertex; 4]) -> Self {
        let avg_depth = corners.iter().map(|c| c.depth).sum::<f64>() / 4.0;
        Self { corners, avg_depth }
    }

    /// Corner positions in winding order.
    pub fn outline(&self) -> [ScreenPoint; 4] {
        self.corners.map(|c| c.point())
    }

    /// The four boundary edges, each from one corner to the next.
    pub fn edges(&self) -> [Edge; 4] {
        let c = &self.corners;
        [
            Edge::between(&c[0], &c[1]),
            Edge::between(&c[1], &c[2]),
            Edge::between(&c[2], &c[3]),
            Edge::between(&c[3], &c[0]),
        ]
    }
}

/// Segments to each present next-row and next-column neighbour, row-major.
pub fn wireframe_segments(grid: &VertexGrid) -> impl Iterator<Item = Segment> + '_ {
    (0..grid.rows())
        .flat_map(move |i| (0..grid.cols()).map(move |j| (i, j)))
        .flat_map(move |(i, j)| {
            let here = grid.get(i, j);
            let down = here.zip(grid.get(i + 1, j));
            let right = here.zip(grid.get(i, j + 1));
            [down, right].into_iter().flatten().map(|(a, b)| Segment {
                from: a.point(),
                to: b.point(),
            })
        })
}

/// Every cell whose four corners are all present, in scan order.
pub fn build_quads(grid: &VertexGrid) -> Vec<Quad> {
    let rows = grid.rows().saturating_sub(1);
    let cols = grid.cols().saturating_sub(1);
    let mut quads = Vec::with_capacity(rows * cols);

    for i in 0..rows {
        for j in 0..cols {
            let (Some(p00), Some(p10), Some(p11), Some(p01)) = (
                grid.get(i, j),
                grid.get(i + 1, j),
                grid.get(i + 1, j + 1),
                grid.get(i, j + 1),
            ) else {
                continue;
            };
            quads.push(Quad::new([*p00, *p10, *p11, *p01]));
        }
    }

    quads
}
