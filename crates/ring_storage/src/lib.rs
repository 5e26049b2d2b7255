use ring_core::{CollisionBackend, Result, ScenarioError};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// One scaling measurement: particle count against wall time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalingRecord {
    pub particle_count: usize,
    pub elapsed_seconds: f64,
}

impl ScalingRecord {
    /// `<count>\t<seconds as %e>\t\n`
    pub fn to_line(&self) -> String {
        format!(
            "{}\t{}\t\n",
            self.particle_count,
            format_exponential(self.elapsed_seconds)
        )
    }
}

/// C `%e` formatting: six mantissa digits, signed exponent of at least two
/// digits. Independent of locale.
pub fn format_exponential(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }

    let s = format!("{value:.6e}");
    let Some((mantissa, exp)) = s.split_once('e') else {
        return s;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return s;
    };
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exp.abs())
}

/// Appends scaling records to the results file of one collision backend
#[derive(Debug, Clone)]
pub struct BenchmarkRecorder {
    path: PathBuf,
}

impl BenchmarkRecorder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn for_backend(dir: &Path, backend: CollisionBackend) -> Self {
        Self::new(dir.join(backend.results_file_name()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line, creating the file if needed. The handle is dropped
    /// on every return path, including a failed write.
    pub fn append(&self, record: &ScalingRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.io_error(source))?;
        file.write_all(record.to_line().as_bytes())
            .map_err(|source| self.io_error(source))?;

        info!(
            path = %self.path.display(),
            particles = record.particle_count,
            elapsed_s = record.elapsed_seconds,
            "scaling record appended"
        );
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> ScenarioError {
        ScenarioError::ResultsIo {
            path: self.path.clone(),
            source,
        }
    }
}

/// Parse a results file back into records. Blank lines are skipped.
pub fn read_records(path: &Path) -> Result<Vec<ScalingRecord>> {
    let text = fs::read_to_string(path).map_err(|source| ScenarioError::ResultsIo {
        path: path.to_path_buf(),
        source,
    })?;

    let mut records = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let malformed = || ScenarioError::MalformedRecord {
            line: i + 1,
            content: line.to_owned(),
        };
        let mut fields = line.split('\t');
        let particle_count = fields
            .next()
            .and_then(|f| f.trim().parse().ok())
            .ok_or_else(malformed)?;
        let elapsed_seconds = fields
            .next()
            .and_then(|f| f.trim().parse().ok())
            .ok_or_else(malformed)?;
        records.push(ScalingRecord {
            particle_count,
            elapsed_seconds,
        });
    }
    Ok(records)
}

/// Least-squares slope of ln(elapsed) against ln(particle count), i.e. the
/// exponent k in t ~ N^k. Needs two distinct positive particle counts.
pub fn scaling_exponent(records: &[ScalingRecord]) -> Option<f64> {
    let points: Vec<(f64, f64)> = records
        .iter()
        .filter(|r| r.particle_count > 0 && r.elapsed_seconds > 0.0)
        .map(|r| ((r.particle_count as f64).ln(), r.elapsed_seconds.ln()))
        .collect();
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / n;
    let sxx: f64 = points.iter().map(|p| (p.0 - mean_x).powi(2)).sum();
    let sxy: f64 = points.iter().map(|p| (p.0 - mean_x) * (p.1 - mean_y)).sum();
    if sxx == 0.0 {
        return None;
    }
    Some(sxy / sxx)
}
