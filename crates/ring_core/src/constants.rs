// Reference scenario: a narrow patch of a dense planetary ring.
// Units are scaled so that one orbital period is 2*pi time units
// when OMEGA = 1 and the reference particle radius is 1 length unit.

/// Width of one root cell
pub const DEFAULT_BOXSIZE: f64 = 5.0;

/// Root cell grid (radial x azimuthal x vertical)
pub const DEFAULT_ROOT_NX: u32 = 40;
pub const DEFAULT_ROOT_NY: u32 = 1;
pub const DEFAULT_ROOT_NZ: u32 = 4;

/// Ghost ring replication: periodic in the ring plane, open vertically
pub const DEFAULT_NGHOSTX: u32 = 1;
pub const DEFAULT_NGHOSTY: u32 = 1;
pub const DEFAULT_NGHOSTZ: u32 = 0;

/// Orbital frequency
pub const DEFAULT_OMEGA: f64 = 1.0;

/// Vertical epicyclic frequency
pub const DEFAULT_OMEGA_Z: f64 = 3.6;

/// Time step, in orbital periods
pub const DEFAULT_DT_ORBITS: f64 = 4e-3;

/// Time budget, in orbital periods
pub const DEFAULT_TMAX_ORBITS: f64 = 4e-2;

/// Timing checkpoint interval, in orbital periods
pub const DEFAULT_OUTPUT_INTERVAL_ORBITS: f64 = 1.0;

pub const DEFAULT_PARTICLE_RADIUS: f64 = 1.0;

/// Target optical depth of the initial particle field
pub const DEFAULT_TAU: f64 = 1.64;

pub const DEFAULT_COEFFICIENT_OF_RESTITUTION: f64 = 0.5;

pub const DEFAULT_MINIMUM_COLLISION_VELOCITY: f64 = 0.0;

/// Upper bound on the generated particle count
pub const MAX_PARTICLES: usize = 100_000_000;

/// Mass of every generated particle (monodisperse population)
pub const PARTICLE_MASS: f64 = 1.0;

/// Initial disk thickness in units of the particle radius
pub const INITIAL_THICKNESS_RADII: f64 = 10.0;

/// Keplerian shear coefficient: v_y = -SHEAR_FACTOR * OMEGA * x
pub const SHEAR_FACTOR: f64 = 1.5;
