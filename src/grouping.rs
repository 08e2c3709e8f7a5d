//! Reduction of repeated measurements to one representative time per key.
//!
//! Every view groups through [`group_samples`] with its own [`KeyProjection`];
//! no view carries its own grouping logic.

use std::collections::BTreeMap;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::sample::Sample;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyField {
    FuncName,
    MatrixDimension,
    Threads,
    BlockSize,
}

/// The subset of non-time fields that identifies a configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyProjection {
    fields: Vec<KeyField>,
}

impl KeyProjection {
    pub fn new(fields: &[KeyField]) -> Self {
        let mut fields = fields.to_vec();
        fields.sort();
        fields.dedup();
        Self { fields }
    }

    pub fn func_dimension() -> Self {
        Self::new(&[KeyField::FuncName, KeyField::MatrixDimension])
    }

    pub fn func_threads() -> Self {
        Self::new(&[KeyField::FuncName, KeyField::Threads])
    }

    pub fn contains(&self, field: KeyField) -> bool {
        self.fields.contains(&field)
    }

    pub fn fields(&self) -> &[KeyField] {
        &self.fields
    }

    pub fn project(&self, sample: &Sample) -> ConfigKey {
        ConfigKey {
            func_name: self
                .contains(KeyField::FuncName)
                .then(|| sample.func_name.clone()),
            matrix_dimension: self
                .contains(KeyField::MatrixDimension)
                .then_some(sample.matrix_dimension),
            threads: self.contains(KeyField::Threads).then_some(sample.threads),
            block_size: self.contains(KeyField::BlockSize).then_some(sample.block_size),
        }
    }
}

/// A projected sample key. Fields outside the projection are `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConfigKey {
    pub func_name: Option<String>,
    pub matrix_dimension: Option<u32>,
    pub threads: Option<u32>,
    pub block_size: Option<u32>,
}

impl ConfigKey {
    pub fn with_func<T: Into<String>>(mut self, func_name: T) -> Self {
        self.func_name = Some(func_name.into());
        self
    }

    pub fn with_dimension(mut self, matrix_dimension: u32) -> Self {
        self.matrix_dimension = Some(matrix_dimension);
        self
    }

    pub fn with_threads(mut self, threads: u32) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_block_size(mut self, block_size: u32) -> Self {
        self.block_size = Some(block_size);
        self
    }

    pub fn func_name(&self) -> &str {
        self.func_name.as_deref().unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregate {
    /// Best observed time.
    Min,
    /// Arithmetic mean of the repeated runs.
    Mean,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RepresentativeMeasurement {
    pub key: ConfigKey,
    pub time: f64,
    pub samples: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RepresentativeTable {
    projection: KeyProjection,
    aggregate: Aggregate,
    entries: BTreeMap<ConfigKey, RepresentativeMeasurement>,
}

impl RepresentativeTable {
    pub fn projection(&self) -> &KeyProjection {
        &self.projection
    }

    pub fn aggregate(&self) -> Aggregate {
        self.aggregate
    }

    pub fn get(&self, key: &ConfigKey) -> Option<&RepresentativeMeasurement> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &RepresentativeMeasurement> {
        self.entries.values()
    }
}

#[derive(Clone, Copy)]
struct Accumulator {
    min: f64,
    sum: f64,
    count: usize,
}

impl Accumulator {
    fn new(time: f64) -> Self {
        Self {
            min: time,
            sum: time,
            count: 1,
        }
    }

    fn push(&mut self, time: f64) {
        if time < self.min {
            self.min = time;
        }
        self.sum += time;
        self.count += 1;
    }

    fn value(&self, aggregate: Aggregate) -> f64 {
        match aggregate {
            Aggregate::Min => self.min,
            Aggregate::Mean => self.sum / self.count as f64,
        }
    }
}

pub fn group_samples<'a, I>(
    samples: I,
    projection: &KeyProjection,
    aggregate: Aggregate,
) -> RepresentativeTable
where
    I: IntoIterator<Item = &'a Sample>,
{
    let mut acc: AHashMap<ConfigKey, Accumulator> = AHashMap::new();
    for sample in samples {
        acc.entry(projection.project(sample))
            .and_modify(|a| a.push(sample.time))
            .or_insert_with(|| Accumulator::new(sample.time));
    }
    let entries = acc
        .into_iter()
        .map(|(key, a)| {
            let measurement = RepresentativeMeasurement {
                key: key.clone(),
                time: a.value(aggregate),
                samples: a.count,
            };
            (key, measurement)
        })
        .collect();
    RepresentativeTable {
        projection: projection.clone(),
        aggregate,
        entries,
    }
}

pub fn best_by<'a, I>(samples: I, projection: &KeyProjection) -> RepresentativeTable
where
    I: IntoIterator<Item = &'a Sample>,
{
    group_samples(samples, projection, Aggregate::Min)
}

pub fn mean_by<'a, I>(samples: I, projection: &KeyProjection) -> RepresentativeTable
where
    I: IntoIterator<Item = &'a Sample>,
{
    group_samples(samples, projection, Aggregate::Mean)
}
