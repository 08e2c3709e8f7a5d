//! Analytical views over a sanitized dataset.
//!
//! Each view is computed independently. Conditions that only affect one row or
//! one series (a missing baseline, an empty cohort) drop the affected output
//! and leave a note on that view.

mod efficiency;
mod overall;
mod strong;
mod timing;
mod weak;

use serde::Serialize;

pub use efficiency::function_efficiency;
pub use overall::{OverallSpeedupRow, overall_speedup};
pub use strong::strong_scaling;
pub use timing::{ExecutionTimeRow, MeanSpeedupRow, execution_time, mean_speedup_comparison};
pub use weak::{WEAK_SPEEDUP_NOTE, WeakScalingRow, weak_scaling};

use crate::{
    baseline::{BaselinePolicy, resolve_baseline},
    grouping::{KeyProjection, best_by},
    metrics::DerivedMetric,
    sample::Sample,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct View<T> {
    pub rows: Vec<T>,
    pub notes: Vec<String>,
}

impl<T> View<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows,
            notes: Vec::new(),
        }
    }

    pub fn empty<N: Into<String>>(note: N) -> Self {
        let mut view = Self::new(Vec::new());
        view.note(note);
        view
    }

    pub fn note<N: Into<String>>(&mut self, note: N) {
        let note = note.into();
        tracing::warn!("{note}");
        self.notes.push(note);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

impl<T> Default for View<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Speedup and efficiency of every (function, threads) pair against the same
/// function's one-thread time. Functions with no one-thread sample are left out.
fn same_function_scaling<'a, I>(samples: I, matrix_dimension: Option<u32>) -> View<DerivedMetric>
where
    I: IntoIterator<Item = &'a Sample>,
{
    let table = best_by(samples, &KeyProjection::func_threads());
    let mut view = View::default();
    let mut skipped: Vec<String> = Vec::new();
    for measurement in table.iter() {
        let func_name = measurement.key.func_name();
        let threads = measurement.key.threads.unwrap_or_default();
        match resolve_baseline(&table, measurement, BaselinePolicy::SameFunction) {
            Ok(baseline) => {
                if let Some(row) = DerivedMetric::derive(
                    func_name,
                    matrix_dimension,
                    threads,
                    measurement.time,
                    baseline.time,
                ) {
                    view.rows.push(row);
                }
            }
            Err(_) => {
                if skipped.last().map(String::as_str) != Some(func_name) {
                    skipped.push(func_name.to_string());
                }
            }
        }
    }
    for func_name in skipped {
        view.note(format!("no threads=1 baseline for {func_name}; series skipped"));
    }
    view
}
