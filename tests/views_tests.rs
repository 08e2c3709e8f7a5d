use benchscale::sample::{Sample, SampleStore};
use benchscale::sanitize::{SanitizedSamples, sanitize};
use benchscale::views::{
    execution_time, function_efficiency, mean_speedup_comparison, overall_speedup,
    strong_scaling,
};

#[test]
fn test_overall_speedup_scenario() {
    let view = overall_speedup(&scenario(), "seq", &[]);
    assert_eq!(view.len(), 2);
    let par = view.rows.iter().find(|r| r.func_name == "par").unwrap();
    assert_eq!(par.matrix_dimension, 1024);
    assert_eq!(par.time, 25.0);
    assert_eq!(par.speedup, 4.0);
    let seq = view.rows.iter().find(|r| r.func_name == "seq").unwrap();
    assert_eq!(seq.speedup, 1.0);
    assert!(view.notes.is_empty());
}

#[test]
fn test_overall_speedup_skips_dimension_without_sequential() {
    let data = sanitized(vec![
        Sample::new("seq", 256, 1, 1, 10.0),
        Sample::new("par", 256, 2, 1, 5.0),
        Sample::new("par", 512, 2, 1, 20.0),
    ]);
    let view = overall_speedup(&data, "seq", &[]);
    assert!(view.rows.iter().all(|r| r.matrix_dimension == 256));
    assert_eq!(view.len(), 2);
    assert_eq!(view.notes.len(), 1);
    assert!(view.notes[0].contains("512"));
}

#[test]
fn test_overall_speedup_honours_exclusions() {
    let view = overall_speedup(&scenario(), "seq", &["par".to_string()]);
    assert!(view.rows.iter().all(|r| r.func_name != "par"));
}

#[test]
fn test_overall_rows_ordered_by_dimension() {
    let data = sanitized(vec![
        Sample::new("seq", 512, 1, 1, 40.0),
        Sample::new("seq", 128, 1, 1, 4.0),
        Sample::new("alpha", 512, 2, 1, 20.0),
        Sample::new("alpha", 128, 2, 1, 2.0),
    ]);
    let view = overall_speedup(&data, "seq", &[]);
    let dims: Vec<u32> = view.rows.iter().map(|r| r.matrix_dimension).collect();
    assert_eq!(dims, vec![128, 128, 512, 512]);
    assert!(view.rows.iter().all(|r| r.speedup > 0.0));
}

#[test]
fn test_strong_scaling_scenario() {
    let view = strong_scaling(&scenario(), "seq");
    let threads: Vec<u32> = view.rows.iter().map(|r| r.threads).collect();
    let speedups: Vec<f64> = view.rows.iter().map(|r| r.speedup).collect();
    let efficiencies: Vec<f64> = view.rows.iter().map(|r| r.efficiency).collect();
    assert_eq!(threads, vec![1, 2, 4]);
    assert_eq!(speedups, vec![1.0, 2.5, 4.0]);
    assert_eq!(efficiencies, vec![1.0, 1.25, 1.0]);
    assert!(view.rows.iter().all(|r| r.matrix_dimension == Some(1024)));
}

#[test]
fn test_strong_scaling_excludes_sequential_and_smaller_dimensions() {
    let data = sanitized(vec![
        Sample::new("seq", 1024, 1, 1, 100.0),
        Sample::new("par", 1024, 1, 1, 80.0),
        Sample::new("par", 1024, 2, 1, 40.0),
        Sample::new("par", 512, 2, 1, 1.0),
    ]);
    let view = strong_scaling(&data, "seq");
    assert!(view.rows.iter().all(|r| r.func_name != "seq"));
    assert_eq!(view.len(), 2);
    assert_eq!(view.rows[1].speedup, 2.0);
}

#[test]
fn test_strong_scaling_drops_series_without_one_thread() {
    let data = sanitized(vec![
        Sample::new("par", 1024, 1, 1, 80.0),
        Sample::new("par", 1024, 2, 1, 40.0),
        Sample::new("orphan", 1024, 2, 1, 30.0),
        Sample::new("orphan", 1024, 4, 1, 20.0),
    ]);
    let view = strong_scaling(&data, "seq");
    assert!(view.rows.iter().all(|r| r.func_name == "par"));
    assert_eq!(view.notes.len(), 1);
    assert!(view.notes[0].contains("orphan"));
}

#[test]
fn test_strong_scaling_empty_when_only_sequential() {
    let data = sanitized(vec![Sample::new("seq", 1024, 1, 1, 100.0)]);
    let view = strong_scaling(&data, "seq");
    assert!(view.is_empty());
    assert_eq!(view.notes.len(), 1);
}

#[test]
fn test_efficiency_is_speedup_over_threads() {
    for row in strong_scaling(&scenario(), "seq").rows {
        assert_eq!(row.efficiency, row.speedup / f64::from(row.threads));
        if row.threads == 1 {
            assert_eq!(row.efficiency, row.speedup);
        }
    }
}

#[test]
fn test_function_efficiency_spans_all_dimensions() {
    let data = sanitized(vec![
        Sample::new("seq", 256, 1, 1, 50.0),
        Sample::new("par", 256, 1, 1, 12.0),
        Sample::new("par", 1024, 1, 1, 100.0),
        Sample::new("par", 1024, 4, 1, 3.0),
    ]);
    let view = function_efficiency(&data, "seq");
    assert!(view.rows.iter().all(|r| r.func_name == "par"));
    assert!(view.rows.iter().all(|r| r.matrix_dimension.is_none()));
    let four = view.rows.iter().find(|r| r.threads == 4).unwrap();
    assert_eq!(four.speedup, 4.0);
    assert_eq!(four.efficiency, 1.0);
}

#[test]
fn test_zero_time_never_yields_infinite_speedup() {
    let data = sanitized(vec![
        Sample::new("seq", 64, 1, 1, 10.0),
        Sample::new("par", 64, 1, 1, 8.0),
        Sample::new("par", 64, 2, 1, 0.0),
    ]);
    let overall = overall_speedup(&data, "seq", &[]);
    assert!(overall.rows.iter().all(|r| r.speedup.is_finite()));
    let par = overall.rows.iter().find(|r| r.func_name == "par").unwrap();
    assert_eq!(par.speedup, 10.0 / 8.0);
    for row in strong_scaling(&data, "seq").rows {
        assert!(row.speedup.is_finite() && row.efficiency.is_finite());
    }
}

#[test]
fn test_execution_time_means_per_dimension() {
    let data = sanitized(vec![
        Sample::new("transpose_mpi", 64, 2, 1, 2.0),
        Sample::new("transpose_mpi", 64, 4, 1, 4.0),
        Sample::new("transpose_mpi", 128, 4, 1, 9.0),
        Sample::new("other", 64, 4, 1, 1.0),
    ]);
    let functions = vec!["transpose_mpi".to_string(), "absent".to_string()];
    let view = execution_time(&data, &functions);
    let points: Vec<(u32, f64)> = view
        .rows
        .iter()
        .map(|r| (r.matrix_dimension, r.mean_time))
        .collect();
    assert_eq!(points, vec![(64, 3.0), (128, 9.0)]);
    assert_eq!(view.notes, vec!["no samples for absent".to_string()]);
}

#[test]
fn test_mean_speedup_keeps_shared_dimensions_only() {
    let data = sanitized(vec![
        Sample::new("seq", 64, 1, 1, 12.0),
        Sample::new("seq", 128, 1, 1, 40.0),
        Sample::new("imp", 64, 2, 1, 4.0),
        Sample::new("imp", 64, 4, 1, 2.0),
        Sample::new("imp", 128, 4, 1, 10.0),
        Sample::new("mpi", 64, 4, 1, 6.0),
    ]);
    let functions = vec!["imp".to_string(), "mpi".to_string()];
    let view = mean_speedup_comparison(&data, "seq", &functions);
    assert_eq!(view.len(), 2);
    assert!(view.rows.iter().all(|r| r.matrix_dimension == 64));
    let imp = view.rows.iter().find(|r| r.func_name == "imp").unwrap();
    assert_eq!(imp.mean_time, 3.0);
    assert_eq!(imp.speedup, 4.0);
    let mpi = view.rows.iter().find(|r| r.func_name == "mpi").unwrap();
    assert_eq!(mpi.speedup, 2.0);
}

#[test]
fn test_mean_speedup_empty_when_participant_missing() {
    let data = sanitized(vec![
        Sample::new("seq", 64, 1, 1, 12.0),
        Sample::new("imp", 64, 2, 1, 4.0),
    ]);
    let functions = vec!["imp".to_string(), "mpi".to_string()];
    let view = mean_speedup_comparison(&data, "seq", &functions);
    assert!(view.is_empty());
    assert_eq!(view.notes.len(), 1);
}

fn scenario() -> SanitizedSamples {
    sanitized(vec![
        Sample::new("seq", 1024, 1, 1, 100.0),
        Sample::new("par", 1024, 1, 1, 100.0),
        Sample::new("par", 1024, 2, 1, 40.0),
        Sample::new("par", 1024, 4, 1, 25.0),
    ])
}

fn sanitized(samples: Vec<Sample>) -> SanitizedSamples {
    sanitize(&SampleStore::new(samples).expect("valid samples")).expect("positive times")
}
