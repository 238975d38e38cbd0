//! Vertex lattice and per-frame grid sampling.
//!
//! [`GridLattice`] is built once per run. Every frame, [`SurfaceSampler`]
//! evaluates the height field at each lattice coordinate, transforms the
//! result into camera space and projects it, producing a [`VertexGrid`] of
//! optional screen vertices in the same row-major layout as the lattice.

use crate::config::{GridConfig, SceneConfig};
use crate::height_field::HeightField;
use crate::projection::Projector;
use crate::transform::Transformer;
use crate::types::{GridCoordinate, ProjectedVertex, RenderMode, SampledVertex, ScreenVertex};
use tracing::trace;

/// Fixed square lattice of object-space coordinates.
///
/// Rows run along X and columns along Y, both over `[-R, R]` at `step`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLattice {
    axis: Vec<i32>,
}

impl GridLattice {
    pub fn new(grid: GridConfig) -> Self {
        let axis = (-grid.radius..=grid.radius)
            .step_by(grid.step.max(1) as usize)
            .collect();
        Self { axis }
    }

    /// Coordinates along one axis.
    pub fn axis(&self) -> &[i32] {
        &self.axis
    }

    /// Vertices per side.
    pub fn side(&self) -> usize {
        self.axis.len()
    }

    /// Total number of vertices.
    pub fn len(&self) -> usize {
        self.axis.len() * self.axis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axis.is_empty()
    }

    /// All coordinates in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = GridCoordinate> + '_ {
        self.axis
            .iter()
            .flat_map(move |&x| self.axis.iter().map(move |&y| GridCoordinate::new(x, y)))
    }
}

/// Projected vertices for one frame, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexGrid {
    rows: usize,
    cols: usize,
    vertices: Vec<ProjectedVertex>,
}

impl VertexGrid {
    /// Build from a row-major vertex list. `vertices.len()` must equal `rows * cols`.
    pub fn from_rows(rows: usize, cols: usize, vertices: Vec<ProjectedVertex>) -> Self {
        assert_eq!(vertices.len(), rows * cols, "vertex count must match grid shape");
        Self {
            rows,
            cols,
            vertices,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Vertex at row `i`, column `j`; `None` if culled or out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<&ScreenVertex> {
        if i >= self.rows || j >= self.cols {
            return None;
        }
        self.vertices[i * self.cols + j].as_ref()
    }

    pub fn vertices(&self) -> &[ProjectedVertex] {
        &self.vertices
    }

    pub fn present_count(&self) -> usize {
        self.vertices.iter().filter(|v| v.is_some()).count()
    }

    pub fn culled_count(&self) -> usize {
        self.vertices.len() - self.present_count()
    }
}

/// Height field, transform and projection bound to one scene.
#[derive(Debug, Clone)]
pub struct SurfaceSampler {
    lattice: GridLattice,
    height_field: HeightField,
    transformer: Transformer,
    projector: Projector,
}

impl SurfaceSampler {
    pub fn new(config: &SceneConfig, mode: RenderMode) -> Self {
        Self {
            lattice: GridLattice::new(config.grid),
            height_field: HeightField::new(config.ripple, mode.amplitude_profile()),
            transformer: Transformer::new(config.motion),
            projector: Projector::new(config.view),
        }
    }

    pub fn lattice(&self) -> &GridLattice {
        &self.lattice
    }

    pub fn height_field(&self) -> &HeightField {
        &self.height_field
    }

    pub fn transformer(&self) -> &Transformer {
        &self.transformer
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    /// Elevation of every lattice vertex at time `t`, row-major.
    pub fn sample(&self, t: f64) -> impl Iterator<Item = SampledVertex> + '_ {
        self.lattice.coordinates().map(move |coord| SampledVertex {
            coord,
            elevation: self
                .height_field
                .height(coord.x as f64, coord.y as f64, t),
        })
    }

    /// Sample, transform and project the whole lattice at time `t`.
    pub fn generate_grid_points(&self, t: f64) -> VertexGrid {
        let frame = self.transformer.at(t);
        let vertices: Vec<ProjectedVertex> = self
            .sample(t)
            .map(|sv| {
                let cam = frame.apply(sv.coord.x as f64, sv.coord.y as f64, sv.elevation);
                self.projector.project(&cam, sv.elevation.abs())
            })
            .collect();

        let side = self.lattice.side();
        let grid = VertexGrid::from_rows(side, side, vertices);
        trace!(
            t,
            vertices = grid.vertices().len(),
            culled = grid.culled_count(),
            "Sampled surface grid"
        );
        grid
    }
}

/// One-shot sampling of `config` at time `t`.
pub fn generate_grid_points(config: &SceneConfig, mode: RenderMode, t: f64) -> VertexGrid {
    SurfaceSampler::new(config, mode).generate_grid_points(t)
}
