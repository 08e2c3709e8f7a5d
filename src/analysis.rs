use serde::Serialize;

use crate::{
    config::AnalysisConfig,
    errors::BenchScaleError,
    metrics::DerivedMetric,
    render::{RenderAdapter, SeriesTable},
    sample::SampleStore,
    sanitize::sanitize,
    views::{
        ExecutionTimeRow, MeanSpeedupRow, OverallSpeedupRow, View, WeakScalingRow,
        execution_time, function_efficiency, mean_speedup_comparison, overall_speedup,
        strong_scaling, weak_scaling,
    },
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub samples: usize,
    pub replaced_times: usize,
    pub overall_speedup: View<OverallSpeedupRow>,
    pub strong_scaling: View<DerivedMetric>,
    pub weak_scaling: View<WeakScalingRow>,
    pub function_efficiency: View<DerivedMetric>,
    pub execution_time: View<ExecutionTimeRow>,
    pub mean_speedup: View<MeanSpeedupRow>,
}

/// Sanitizes the store once and builds every view from the result.
///
/// Only [`BenchScaleError::EmptyDataset`] aborts; anything narrower is
/// reported as a note on the view it affected.
pub fn run_analysis(
    store: &SampleStore,
    config: &AnalysisConfig,
) -> Result<AnalysisReport, BenchScaleError> {
    config.validate()?;
    let data = sanitize(store)?;
    let sequential = config.sequential_function.as_str();
    let report = AnalysisReport {
        samples: data.store().len(),
        replaced_times: data.replaced(),
        overall_speedup: overall_speedup(&data, sequential, &config.excluded_functions),
        strong_scaling: strong_scaling(&data, sequential),
        weak_scaling: weak_scaling(&data, sequential, config.cohort_tolerance),
        function_efficiency: function_efficiency(&data, sequential),
        execution_time: execution_time(&data, &config.execution_time_functions),
        mean_speedup: mean_speedup_comparison(&data, sequential, &config.comparison_functions),
    };
    tracing::info!(
        samples = report.samples,
        overall = report.overall_speedup.len(),
        strong = report.strong_scaling.len(),
        weak = report.weak_scaling.len(),
        "analysis complete"
    );
    Ok(report)
}

impl AnalysisReport {
    /// Fixed matrix dimension of the strong-scaling view, when it has rows.
    pub fn strong_scaling_dimension(&self) -> Option<u32> {
        self.strong_scaling
            .rows
            .first()
            .and_then(|row| row.matrix_dimension)
    }

    pub fn series_tables(&self) -> Vec<SeriesTable> {
        let mut tables = Vec::new();

        let mut speedup = SeriesTable::new(
            "speedup",
            "Speedup of best runtimes relative to sequential".to_string(),
            "matrix_dimension",
            "speedup",
        );
        for row in &self.overall_speedup.rows {
            speedup.push(row.func_name.as_str(), row.matrix_dimension, row.speedup);
        }
        tables.push(speedup.finish());

        let dim = self
            .strong_scaling_dimension()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        let mut strong_time = SeriesTable::new(
            "strong_scaling_execution_time",
            format!("Strong scaling for matrix dimension {dim}"),
            "threads",
            "time",
        );
        let mut strong_speedup = SeriesTable::new(
            "strong_scaling_speedup",
            format!("Strong scaling speedup for matrix dimension {dim}"),
            "threads",
            "speedup",
        );
        let mut strong_eff = SeriesTable::new(
            "strong_scaling_efficiency",
            format!("Strong scaling efficiency for matrix dimension {dim}"),
            "threads",
            "efficiency",
        );
        for row in &self.strong_scaling.rows {
            strong_time.push(row.func_name.as_str(), row.threads, row.time);
            strong_speedup.push(row.func_name.as_str(), row.threads, row.speedup);
            strong_eff.push(row.func_name.as_str(), row.threads, row.efficiency);
        }
        tables.push(strong_time.finish());
        tables.push(strong_speedup.finish());
        tables.push(strong_eff.finish());

        let mut weak = SeriesTable::new(
            "weak_scaling_execution_time",
            "Weak scaling execution time".to_string(),
            "threads",
            "mean_time",
        );
        for row in &self.weak_scaling.rows {
            weak.push(row.func_name.as_str(), row.threads, row.mean_time);
        }
        tables.push(weak.finish());

        let mut efficiency = SeriesTable::new(
            "function_efficiency",
            "Efficiency vs number of threads".to_string(),
            "threads",
            "efficiency",
        );
        for row in &self.function_efficiency.rows {
            efficiency.push(row.func_name.as_str(), row.threads, row.efficiency);
        }
        tables.push(efficiency.finish());

        let mut exec = SeriesTable::new(
            "execution_time",
            "Execution time vs matrix dimension".to_string(),
            "matrix_dimension",
            "mean_time",
        );
        for row in &self.execution_time.rows {
            exec.push(row.func_name.as_str(), row.matrix_dimension, row.mean_time);
        }
        tables.push(exec.finish());

        let mut mean = SeriesTable::new(
            "mean_speedup",
            "Mean-time speedup vs sequential".to_string(),
            "matrix_dimension",
            "speedup",
        );
        for row in &self.mean_speedup.rows {
            mean.push(row.func_name.as_str(), row.matrix_dimension, row.speedup);
        }
        tables.push(mean.finish());

        tables
    }

    pub fn render<R: RenderAdapter>(&self, renderer: &mut R) -> Result<usize, BenchScaleError> {
        let tables = self.series_tables();
        for table in &tables {
            renderer.render(table)?;
        }
        Ok(tables.len())
    }

    /// One line per view: name, row count and notes.
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            summary_line("overall_speedup", &self.overall_speedup),
            summary_line("strong_scaling", &self.strong_scaling),
            summary_line("weak_scaling", &self.weak_scaling),
            summary_line("function_efficiency", &self.function_efficiency),
            summary_line("execution_time", &self.execution_time),
            summary_line("mean_speedup", &self.mean_speedup),
        ]
    }
}

fn summary_line<T>(name: &str, view: &View<T>) -> String {
    if view.notes.is_empty() {
        format!("{name:<20} rows={}", view.len())
    } else {
        format!("{name:<20} rows={} notes={}", view.len(), view.notes.join("; "))
    }
}
