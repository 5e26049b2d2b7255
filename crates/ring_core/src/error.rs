use std::path::PathBuf;

use thiserror::Error;

use crate::types::Axis;

pub type Result<T> = std::result::Result<T, ScenarioError>;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("box size argument {raw:?} is not a number")]
    InvalidBoxSize { raw: String },
    #[error("box size must be finite and positive, got {0}")]
    NonPositiveBoxSize(f64),
    #[error("root cell grid {nx}x{ny}x{nz} has an empty axis")]
    EmptyRootGrid { nx: u32, ny: u32, nz: u32 },
    #[error("ghost count {count} on {axis} axis is out of range (expected 0 or 1)")]
    GhostOutOfRange { axis: Axis, count: u32 },
    #[error("vertical axis is open and cannot carry ghost cells (got {0})")]
    VerticalGhosts(u32),
    #[error("domain is already configured")]
    DomainAlreadyConfigured,
    #[error("domain must be configured before particles are added")]
    DomainNotConfigured,
    #[error("parameter {name} must be finite and positive, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("domain area {area} cannot hold particles of radius {radius}")]
    DegenerateArea { area: f64, radius: f64 },
    #[error("target particle count {requested} exceeds the limit of {limit}")]
    TooManyParticles { requested: f64, limit: usize },
    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("results file {path}: {source}")]
    ResultsIo {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed record on line {line}: {content:?}")]
    MalformedRecord { line: usize, content: String },
}
