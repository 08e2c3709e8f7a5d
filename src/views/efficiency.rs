use super::{View, same_function_scaling};
use crate::{metrics::DerivedMetric, sanitize::SanitizedSamples};

/// Efficiency of every parallel function across all of its thread counts.
///
/// Unlike [`super::strong_scaling`] the matrix dimension is not fixed: both the
/// one-thread baseline and each point are the function's best time over every
/// dimension it was run at.
pub fn function_efficiency(data: &SanitizedSamples, sequential: &str) -> View<DerivedMetric> {
    same_function_scaling(
        data.samples().iter().filter(|s| s.func_name != sequential),
        None,
    )
}
