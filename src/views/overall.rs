use serde::Serialize;

use super::View;
use crate::{
    baseline::{BaselinePolicy, resolve_baseline},
    grouping::{KeyProjection, best_by},
    metrics::speedup,
    sanitize::SanitizedSamples,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OverallSpeedupRow {
    pub func_name: String,
    pub matrix_dimension: u32,
    pub time: f64,
    pub baseline_time: f64,
    pub speedup: f64,
}

/// Best runtime of every function at every matrix dimension against the best
/// sequential runtime at that dimension.
///
/// The best runtime is taken over all thread counts and block sizes, so the
/// reported figure is the best configuration found by the sweep.
pub fn overall_speedup(
    data: &SanitizedSamples,
    sequential: &str,
    excluded: &[String],
) -> View<OverallSpeedupRow> {
    let table = best_by(
        data.samples()
            .iter()
            .filter(|s| !excluded.iter().any(|name| *name == s.func_name)),
        &KeyProjection::func_dimension(),
    );
    let mut view = View::default();
    let mut missing: Vec<u32> = Vec::new();
    for measurement in table.iter() {
        let matrix_dimension = measurement.key.matrix_dimension.unwrap_or_default();
        let policy = BaselinePolicy::CrossFunction { sequential };
        let baseline = match resolve_baseline(&table, measurement, policy) {
            Ok(baseline) => baseline,
            Err(err) => {
                tracing::debug!(%err, "overall speedup row skipped");
                missing.push(matrix_dimension);
                continue;
            }
        };
        if let Some(value) = speedup(baseline.time, measurement.time) {
            view.rows.push(OverallSpeedupRow {
                func_name: measurement.key.func_name().to_string(),
                matrix_dimension,
                time: measurement.time,
                baseline_time: baseline.time,
                speedup: value,
            });
        }
    }
    missing.sort_unstable();
    missing.dedup();
    for dim in missing {
        view.note(format!(
            "no {sequential} sample at matrix dimension {dim}; rows skipped"
        ));
    }
    view.rows.sort_by(|a, b| {
        a.matrix_dimension
            .cmp(&b.matrix_dimension)
            .then_with(|| a.func_name.cmp(&b.func_name))
    });
    view
}
