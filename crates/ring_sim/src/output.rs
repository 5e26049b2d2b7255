use tracing::info;

/// Stateful "has enough simulation time passed" predicate
#[derive(Debug, Clone, Default)]
pub struct OutputSchedule {
    last_fired: Option<f64>,
}

impl OutputSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires on the first call, then once `t` is at least `interval`
    /// past the last firing
    pub fn check(&mut self, t: f64, interval: f64) -> bool {
        let due = match self.last_fired {
            None => true,
            Some(last) => t - last >= interval,
        };
        if due {
            self.last_fired = Some(t);
        }
        due
    }
}

/// Performance statistics at one checkpoint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSnapshot {
    pub particle_count: usize,
    pub t: f64,
    pub tmax: f64,
    pub wall_seconds: f64,
}

impl TimingSnapshot {
    pub fn budget_fraction(&self) -> f64 {
        if self.tmax > 0.0 { self.t / self.tmax } else { 0.0 }
    }
}

/// Destination for timing snapshots
pub trait OutputSink {
    fn timing(&mut self, snapshot: &TimingSnapshot);
}

/// Logs snapshots as structured tracing events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl OutputSink for TracingSink {
    fn timing(&mut self, snapshot: &TimingSnapshot) {
        info!(
            n = snapshot.particle_count,
            t = snapshot.t,
            wall_s = snapshot.wall_seconds,
            progress_pct = snapshot.budget_fraction() * 100.0,
            "timing"
        );
    }
}

impl OutputSink for Vec<TimingSnapshot> {
    fn timing(&mut self, snapshot: &TimingSnapshot) {
        self.push(*snapshot);
    }
}
