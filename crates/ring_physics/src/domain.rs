//! Shearing-box geometry.
//!
//! The box is a grid of cubic root cells of side `boxsize`. The ring plane
//! (x radial, y azimuthal) is periodic through one ring of ghost boxes per
//! axis; the vertical axis is open and carries no ghosts.

use ring_core::{Axis, Result, ScenarioConfig, ScenarioError};
use tracing::info;

/// Configured domain. Extents are fixed once built; there are no setters.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    boxsize: f64,
    root: [u32; 3],
    ghosts: [u32; 3],
    extent: [f64; 3],
}

impl Domain {
    /// Validate the grid and derive the box extents
    pub fn configure(boxsize: f64, root: [u32; 3], ghosts: [u32; 3]) -> Result<Self> {
        if !boxsize.is_finite() || boxsize <= 0.0 {
            return Err(ScenarioError::NonPositiveBoxSize(boxsize));
        }
        if root.contains(&0) {
            return Err(ScenarioError::EmptyRootGrid {
                nx: root[0],
                ny: root[1],
                nz: root[2],
            });
        }
        if ghosts[2] != 0 {
            return Err(ScenarioError::VerticalGhosts(ghosts[2]));
        }
        for (axis, count) in [(Axis::X, ghosts[0]), (Axis::Y, ghosts[1])] {
            if count > 1 {
                return Err(ScenarioError::GhostOutOfRange { axis, count });
            }
        }

        let extent = root.map(|n| boxsize * n as f64);
        let domain = Self {
            boxsize,
            root,
            ghosts,
            extent,
        };
        info!(
            boxsize,
            box_x = extent[0],
            box_y = extent[1],
            box_z = extent[2],
            root_cells = domain.root_cell_count(),
            "domain configured"
        );
        Ok(domain)
    }

    pub fn from_config(config: &ScenarioConfig) -> Result<Self> {
        Self::configure(
            config.boxsize,
            [config.root_nx, config.root_ny, config.root_nz],
            [config.nghostx, config.nghosty, config.nghostz],
        )
    }

    /// Width of one root cell
    pub fn boxsize(&self) -> f64 {
        self.boxsize
    }

    pub fn box_x(&self) -> f64 {
        self.extent[0]
    }

    pub fn box_y(&self) -> f64 {
        self.extent[1]
    }

    pub fn box_z(&self) -> f64 {
        self.extent[2]
    }

    pub fn boxsize_max(&self) -> f64 {
        self.extent.iter().copied().fold(0.0, f64::max)
    }

    pub fn root_cells(&self) -> [u32; 3] {
        self.root
    }

    pub fn root_cell_count(&self) -> u64 {
        self.root.iter().map(|&n| n as u64).product()
    }

    pub fn ghosts(&self, axis: Axis) -> u32 {
        self.ghosts[axis_index(axis)]
    }

    pub fn is_periodic(&self, axis: Axis) -> bool {
        self.ghosts(axis) > 0
    }

    /// Area of the ring plane covered by the box
    pub fn area(&self) -> f64 {
        self.box_x() * self.box_y()
    }

    /// Half-open planar bounds: [-box_x/2, box_x/2) x [-box_y/2, box_y/2)
    pub fn contains_planar(&self, x: f64, y: f64) -> bool {
        let hx = self.box_x() / 2.0;
        let hy = self.box_y() / 2.0;
        (-hx..hx).contains(&x) && (-hy..hy).contains(&y)
    }

    /// Half-open bounds on all three axes
    pub fn contains(&self, x: f64, y: f64, z: f64) -> bool {
        let hz = self.box_z() / 2.0;
        self.contains_planar(x, y) && (-hz..hz).contains(&z)
    }
}

fn axis_index(axis: Axis) -> usize {
    match axis {
        Axis::X => 0,
        Axis::Y => 1,
        Axis::Z => 2,
    }
}
