//! Replacement of degenerate timings before any ratio is taken.
//!
//! A zero, negative or non-finite time would turn a speedup into an infinity
//! or a NaN. Every such time is replaced by the smallest valid positive time
//! observed anywhere in the dataset. The result is a new store; the input is
//! left untouched.

use crate::{
    errors::BenchScaleError,
    sample::{Sample, SampleStore},
};

/// A sample store in which every time is finite and strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedSamples {
    store: SampleStore,
    floor: f64,
    replaced: usize,
}

impl SanitizedSamples {
    pub fn store(&self) -> &SampleStore {
        &self.store
    }

    pub fn samples(&self) -> &[Sample] {
        self.store.samples()
    }

    /// The minimum valid time used as the replacement value.
    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Number of samples whose time was replaced.
    pub fn replaced(&self) -> usize {
        self.replaced
    }

    pub fn into_store(self) -> SampleStore {
        self.store
    }
}

pub fn min_valid_time(store: &SampleStore) -> Option<f64> {
    store
        .iter()
        .filter(|s| s.has_valid_time())
        .map(|s| s.time)
        .min_by(f64::total_cmp)
}

pub fn sanitize(store: &SampleStore) -> Result<SanitizedSamples, BenchScaleError> {
    let floor = min_valid_time(store).ok_or(BenchScaleError::EmptyDataset)?;
    let mut replaced = 0usize;
    let samples: Vec<Sample> = store
        .iter()
        .map(|sample| {
            if sample.has_valid_time() {
                sample.clone()
            } else {
                replaced += 1;
                Sample {
                    time: floor,
                    ..sample.clone()
                }
            }
        })
        .collect();
    if replaced > 0 {
        tracing::warn!(replaced, floor, "replaced degenerate sample times");
    }
    tracing::debug!(samples = samples.len(), floor, "sanitized dataset");
    Ok(SanitizedSamples {
        store: SampleStore::new(samples)?,
        floor,
        replaced,
    })
}
