pub mod context;
pub mod driver;
pub mod output;
pub mod scenario;

pub use context::{CollisionParams, ParticleRegistry, SimulationContext};
pub use driver::{RunReport, Stationary, StepBackend, run};
pub use output::{OutputSchedule, OutputSink, TimingSnapshot, TracingSink};
pub use scenario::{ScenarioHooks, ShearingBoxScenario};
