use serde::Serialize;

use super::View;
use crate::{
    cohort::weak_scaling_cohort,
    grouping::{KeyProjection, mean_by},
    sanitize::SanitizedSamples,
};

pub const WEAK_SPEEDUP_NOTE: &str =
    "weak scaling speedup is not a meaningful metric and is not produced";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WeakScalingRow {
    pub func_name: String,
    pub threads: u32,
    pub mean_time: f64,
    pub samples: usize,
}

/// Mean time per (function, threads) over the weak-scaling cohort.
pub fn weak_scaling(
    data: &SanitizedSamples,
    sequential: &str,
    tolerance: f64,
) -> View<WeakScalingRow> {
    let cohort = match weak_scaling_cohort(data.samples(), tolerance) {
        Ok(cohort) => cohort,
        Err(err) => return View::empty(format!("no data for weak scaling: {err}")),
    };
    let parallel: Vec<_> = cohort
        .members
        .into_iter()
        .filter(|s| s.func_name != sequential)
        .collect();
    if parallel.is_empty() {
        return View::empty("no parallel samples in the weak scaling cohort");
    }
    let table = mean_by(parallel, &KeyProjection::func_threads());
    let rows = table
        .iter()
        .map(|m| WeakScalingRow {
            func_name: m.key.func_name().to_string(),
            threads: m.key.threads.unwrap_or_default(),
            mean_time: m.time,
            samples: m.samples,
        })
        .collect();
    View {
        rows,
        notes: vec![WEAK_SPEEDUP_NOTE.to_string()],
    }
}
