use std::f64::consts::TAU;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::*;
use crate::error::{Result, ScenarioError};
use crate::types::CollisionBackend;

/// Scenario configuration. Every field falls back to the reference
/// ring-patch scenario when missing from a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Width of one root cell
    pub boxsize: f64,
    pub root_nx: u32,
    pub root_ny: u32,
    pub root_nz: u32,
    pub nghostx: u32,
    pub nghosty: u32,
    pub nghostz: u32,
    /// Orbital frequency
    pub omega: f64,
    /// Vertical epicyclic frequency, consumed by the integrator
    pub omega_z: f64,
    /// Time step in orbital periods
    pub dt_orbits: f64,
    /// Time budget in orbital periods
    pub tmax_orbits: f64,
    /// Timing checkpoint interval in orbital periods
    pub output_interval_orbits: f64,
    pub particle_radius: f64,
    /// Target optical depth
    pub tau: f64,
    /// Consumed by the collision backend
    pub coefficient_of_restitution: f64,
    /// Consumed by the collision backend
    pub minimum_collision_velocity: f64,
    /// Random seed; `None` draws a fresh one per run
    pub seed: Option<u64>,
    pub backend: CollisionBackend,
    /// Directory holding the per-backend results files
    pub results_dir: PathBuf,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            boxsize: DEFAULT_BOXSIZE,
            root_nx: DEFAULT_ROOT_NX,
            root_ny: DEFAULT_ROOT_NY,
            root_nz: DEFAULT_ROOT_NZ,
            nghostx: DEFAULT_NGHOSTX,
            nghosty: DEFAULT_NGHOSTY,
            nghostz: DEFAULT_NGHOSTZ,
            omega: DEFAULT_OMEGA,
            omega_z: DEFAULT_OMEGA_Z,
            dt_orbits: DEFAULT_DT_ORBITS,
            tmax_orbits: DEFAULT_TMAX_ORBITS,
            output_interval_orbits: DEFAULT_OUTPUT_INTERVAL_ORBITS,
            particle_radius: DEFAULT_PARTICLE_RADIUS,
            tau: DEFAULT_TAU,
            coefficient_of_restitution: DEFAULT_COEFFICIENT_OF_RESTITUTION,
            minimum_collision_velocity: DEFAULT_MINIMUM_COLLISION_VELOCITY,
            seed: None,
            backend: CollisionBackend::default(),
            results_dir: PathBuf::from("."),
        }
    }
}

impl ScenarioConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ScenarioError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), "scenario config loaded");
        Ok(config)
    }

    /// Apply the positional box-size argument.
    ///
    /// Text that does not parse as a float is an error here rather than a
    /// zero-width box. Numeric but non-positive values pass through and are
    /// rejected when the domain is configured.
    pub fn with_box_size_arg(mut self, raw: &str) -> Result<Self> {
        self.boxsize = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ScenarioError::InvalidBoxSize {
                raw: raw.to_owned(),
            })?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        positive("omega", self.omega)?;
        positive("omega_z", self.omega_z)?;
        positive("dt_orbits", self.dt_orbits)?;
        positive("tmax_orbits", self.tmax_orbits)?;
        positive("output_interval_orbits", self.output_interval_orbits)?;
        positive("particle_radius", self.particle_radius)?;
        positive("tau", self.tau)?;
        Ok(())
    }

    /// One orbital period, 2*pi / OMEGA
    pub fn orbital_period(&self) -> f64 {
        TAU / self.omega
    }

    pub fn dt(&self) -> f64 {
        self.dt_orbits * self.orbital_period()
    }

    pub fn tmax(&self) -> f64 {
        self.tmax_orbits * self.orbital_period()
    }

    pub fn output_interval(&self) -> f64 {
        self.output_interval_orbits * self.orbital_period()
    }

    pub fn results_path(&self) -> PathBuf {
        self.results_dir.join(self.backend.results_file_name())
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ScenarioError::InvalidParameter { name, value })
    }
}
