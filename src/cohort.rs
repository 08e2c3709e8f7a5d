//! Weak-scaling cohort: the samples whose per-thread problem size matches the
//! size the suite was designed around.

use ahash::AHashMap;

use crate::{errors::BenchScaleError, sample::Sample};

pub const DEFAULT_TOLERANCE: f64 = 0.1;

pub fn problem_size_per_thread(sample: &Sample) -> f64 {
    f64::from(sample.matrix_dimension) / f64::from(sample.threads)
}

/// Most frequent per-thread problem size; ties go to the smallest value.
///
/// Equal rationals divide to the same `f64`, so counting by bit pattern is exact.
pub fn modal_ratio<'a, I>(samples: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a Sample>,
{
    let mut counts: AHashMap<u64, usize> = AHashMap::new();
    for sample in samples {
        *counts
            .entry(problem_size_per_thread(sample).to_bits())
            .or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(bits, count)| (f64::from_bits(bits), count))
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.total_cmp(&a.0)))
        .map(|(ratio, _)| ratio)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cohort<'a> {
    pub modal_ratio: f64,
    pub tolerance: f64,
    pub members: Vec<&'a Sample>,
}

pub fn weak_scaling_cohort(
    samples: &[Sample],
    tolerance: f64,
) -> Result<Cohort<'_>, BenchScaleError> {
    let modal = modal_ratio(samples).ok_or(BenchScaleError::NoCohort {
        modal_ratio: f64::NAN,
        tolerance,
    })?;
    let members: Vec<&Sample> = samples
        .iter()
        .filter(|s| (problem_size_per_thread(s) - modal).abs() < tolerance)
        .collect();
    if members.is_empty() {
        return Err(BenchScaleError::NoCohort {
            modal_ratio: modal,
            tolerance,
        });
    }
    tracing::debug!(modal_ratio = modal, members = members.len(), "weak scaling cohort");
    Ok(Cohort {
        modal_ratio: modal,
        tolerance,
        members,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_ratio_prefers_smallest_on_tie() {
        let samples = vec![
            Sample::new("a", 512, 1, 1, 1.0),
            Sample::new("a", 256, 1, 1, 1.0),
        ];
        assert_eq!(modal_ratio(&samples), Some(256.0));
    }

    #[test]
    fn test_modal_ratio_counts_equal_ratios_together() {
        let samples = vec![
            Sample::new("a", 1000, 3, 1, 1.0),
            Sample::new("a", 2000, 6, 1, 1.0),
            Sample::new("a", 64, 1, 1, 1.0),
        ];
        assert_eq!(modal_ratio(&samples), Some(1000.0 / 3.0));
    }
}
