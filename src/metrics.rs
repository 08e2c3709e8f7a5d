use serde::{Deserialize, Serialize};

/// `baseline / measured`, or `None` when the ratio is not a finite positive number.
pub fn speedup(baseline_time: f64, measured_time: f64) -> Option<f64> {
    let value = baseline_time / measured_time;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// `speedup / threads`, or `None` when the result is not finite.
pub fn efficiency(speedup: f64, threads: u32) -> Option<f64> {
    if threads == 0 {
        return None;
    }
    let value = speedup / f64::from(threads);
    value.is_finite().then_some(value)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetric {
    pub func_name: String,
    pub matrix_dimension: Option<u32>,
    pub threads: u32,
    pub time: f64,
    pub speedup: f64,
    pub efficiency: f64,
}

impl DerivedMetric {
    /// Builds a metric row; rows whose speedup or efficiency would be
    /// non-finite come back as `None` and are never rendered.
    pub fn derive(
        func_name: &str,
        matrix_dimension: Option<u32>,
        threads: u32,
        time: f64,
        baseline_time: f64,
    ) -> Option<Self> {
        let speedup = speedup(baseline_time, time)?;
        let efficiency = efficiency(speedup, threads)?;
        Some(Self {
            func_name: func_name.to_string(),
            matrix_dimension,
            threads,
            time,
            speedup,
            efficiency,
        })
    }
}
