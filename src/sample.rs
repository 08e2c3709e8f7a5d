use serde::{Deserialize, Serialize};

use crate::errors::BenchScaleError;

/// One benchmark measurement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sample {
    pub func_name: String,
    pub matrix_dimension: u32,
    pub threads: u32,
    pub block_size: u32,
    pub time: f64,
}

impl Sample {
    pub fn new<T: Into<String>>(
        func_name: T,
        matrix_dimension: u32,
        threads: u32,
        block_size: u32,
        time: f64,
    ) -> Self {
        Self {
            func_name: func_name.into(),
            matrix_dimension,
            threads,
            block_size,
            time,
        }
    }

    /// `true` when the time can be used as a ratio operand.
    pub fn has_valid_time(&self) -> bool {
        self.time.is_finite() && self.time > 0.0
    }

    pub fn validate(&self) -> Result<(), BenchScaleError> {
        if self.func_name.trim().is_empty() {
            return Err(BenchScaleError::invalid_input("func_name must not be empty"));
        }
        if self.matrix_dimension == 0 || self.threads == 0 || self.block_size == 0 {
            return Err(BenchScaleError::invalid_input(format!(
                "{}: matrix_dimension, threads and block_size must be positive",
                self.func_name
            )));
        }
        Ok(())
    }
}

/// Validated, read-only collection of samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleStore {
    samples: Vec<Sample>,
}

impl SampleStore {
    pub fn new(samples: Vec<Sample>) -> Result<Self, BenchScaleError> {
        for sample in &samples {
            sample.validate()?;
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn max_matrix_dimension(&self) -> Option<u32> {
        self.samples.iter().map(|s| s.matrix_dimension).max()
    }

    /// Distinct function names in ascending order.
    pub fn function_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.samples.iter().map(|s| s.func_name.clone()).collect();
        names.sort();
        names.dedup();
        names
    }
}

impl<'a> IntoIterator for &'a SampleStore {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_rejects_zero_threads() {
        let err = SampleStore::new(vec![Sample::new("par", 64, 0, 1, 1.0)]).unwrap_err();
        assert!(matches!(err, BenchScaleError::InvalidInput(_)));
    }

    #[test]
    fn test_store_accepts_zero_time() {
        let store = SampleStore::new(vec![Sample::new("par", 64, 1, 1, 0.0)]).unwrap();
        assert_eq!(store.len(), 1);
        assert!(!store.samples()[0].has_valid_time());
    }

    #[test]
    fn test_function_names_sorted_unique() {
        let store = SampleStore::new(vec![
            Sample::new("b", 64, 1, 1, 1.0),
            Sample::new("a", 64, 1, 1, 1.0),
            Sample::new("b", 128, 2, 1, 1.0),
        ])
        .unwrap();
        assert_eq!(store.function_names(), vec!["a", "b"]);
        assert_eq!(store.max_matrix_dimension(), Some(128));
    }
}
