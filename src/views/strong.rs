use super::{View, same_function_scaling};
use crate::{metrics::DerivedMetric, sanitize::SanitizedSamples};

/// Strong scaling at the largest observed matrix dimension, sequential
/// function excluded.
pub fn strong_scaling(data: &SanitizedSamples, sequential: &str) -> View<DerivedMetric> {
    let Some(fixed) = data.store().max_matrix_dimension() else {
        return View::empty("no samples for strong scaling");
    };
    let mut parallel = data
        .samples()
        .iter()
        .filter(|s| s.matrix_dimension == fixed && s.func_name != sequential)
        .peekable();
    if parallel.peek().is_none() {
        return View::empty(format!(
            "no parallel implementations at matrix dimension {fixed}; strong scaling skipped"
        ));
    }
    same_function_scaling(parallel, Some(fixed))
}
