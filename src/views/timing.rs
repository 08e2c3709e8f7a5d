use std::collections::BTreeMap;

use serde::Serialize;

use super::View;
use crate::{
    grouping::{ConfigKey, KeyProjection, mean_by},
    metrics::speedup,
    sanitize::SanitizedSamples,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExecutionTimeRow {
    pub func_name: String,
    pub matrix_dimension: u32,
    pub mean_time: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MeanSpeedupRow {
    pub func_name: String,
    pub matrix_dimension: u32,
    pub mean_time: f64,
    pub sequential_mean_time: f64,
    pub speedup: f64,
}

/// Mean time per matrix dimension for each listed function.
pub fn execution_time(data: &SanitizedSamples, functions: &[String]) -> View<ExecutionTimeRow> {
    let table = mean_by(
        data.samples()
            .iter()
            .filter(|s| functions.contains(&s.func_name)),
        &KeyProjection::func_dimension(),
    );
    let mut view = View::new(
        table
            .iter()
            .map(|m| ExecutionTimeRow {
                func_name: m.key.func_name().to_string(),
                matrix_dimension: m.key.matrix_dimension.unwrap_or_default(),
                mean_time: m.time,
            })
            .collect(),
    );
    for func_name in functions {
        if !view.rows.iter().any(|r| &r.func_name == func_name) {
            view.note(format!("no samples for {func_name}"));
        }
    }
    view
}

/// Mean-time speedup of each listed function over the sequential function,
/// restricted to the dimensions every participant was measured at.
pub fn mean_speedup_comparison(
    data: &SanitizedSamples,
    sequential: &str,
    functions: &[String],
) -> View<MeanSpeedupRow> {
    let table = mean_by(
        data.samples()
            .iter()
            .filter(|s| s.func_name == sequential || functions.contains(&s.func_name)),
        &KeyProjection::func_dimension(),
    );
    let mut by_dimension: BTreeMap<u32, usize> = BTreeMap::new();
    for m in table.iter() {
        *by_dimension
            .entry(m.key.matrix_dimension.unwrap_or_default())
            .or_insert(0) += 1;
    }
    let mut participants: Vec<&str> = functions.iter().map(String::as_str).collect();
    participants.push(sequential);
    participants.sort_unstable();
    participants.dedup();

    let mut view = View::default();
    for (&dim, &count) in &by_dimension {
        if count < participants.len() {
            continue;
        }
        let key = ConfigKey::default().with_dimension(dim);
        let Some(base) = table.get(&key.clone().with_func(sequential)) else {
            continue;
        };
        for func_name in functions {
            let Some(m) = table.get(&key.clone().with_func(func_name.as_str())) else {
                continue;
            };
            if let Some(value) = speedup(base.time, m.time) {
                view.rows.push(MeanSpeedupRow {
                    func_name: func_name.clone(),
                    matrix_dimension: dim,
                    mean_time: m.time,
                    sequential_mean_time: base.time,
                    speedup: value,
                });
            }
        }
    }
    if view.rows.is_empty() {
        view.note(format!(
            "no matrix dimension shared by {sequential} and every comparison function"
        ));
    }
    view
}
