use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Ring particle as handed to the integrator and collision backend.
/// `repr(C)` and Pod so the registry can be shared as one flat buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
    /// Accelerations are owned by the integrator and overwritten every step
    pub ax: f64,
    pub ay: f64,
    pub az: f64,
    pub m: f64,
    pub r: f64,
}

impl Particle {
    /// Particle at rest with zero acceleration
    pub fn at_rest(pos: [f64; 3], m: f64, r: f64) -> Self {
        Self {
            x: pos[0],
            y: pos[1],
            z: pos[2],
            m,
            r,
            ..Self::zeroed()
        }
    }

    pub fn pos(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn vel(&self) -> [f64; 3] {
        [self.vx, self.vy, self.vz]
    }
}

/// Coordinate axis of the shearing box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Radial
    X,
    /// Azimuthal
    Y,
    /// Vertical
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        })
    }
}

/// Collision-detection backend compiled into the engine.
/// Exactly one is active per run; each writes its own results file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionBackend {
    #[default]
    Tree,
    Sweep,
    Direct,
}

impl CollisionBackend {
    pub const ALL: [CollisionBackend; 3] = [Self::Tree, Self::Sweep, Self::Direct];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Sweep => "sweep",
            Self::Direct => "direct",
        }
    }

    /// File the benchmark recorder appends to
    pub fn results_file_name(&self) -> &'static str {
        match self {
            Self::Tree => "scaling_tree.txt",
            Self::Sweep => "scaling_sweep.txt",
            Self::Direct => "scaling_direct.txt",
        }
    }
}

impl fmt::Display for CollisionBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CollisionBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown collision backend {s:?} (expected tree, sweep or direct)"))
    }
}
