use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    errors::BenchScaleError,
    sample::{Sample, SampleStore},
};

#[derive(Clone, Debug)]
pub struct FunctionProfile {
    pub name: String,
    /// Fraction of the work that parallelises; `0.0` marks a sequential function.
    pub parallel_fraction: f64,
    /// Time per matrix element at one thread.
    pub cost_per_element: f64,
}

impl FunctionProfile {
    pub fn sequential(name: &str, cost_per_element: f64) -> Self {
        Self {
            name: name.to_string(),
            parallel_fraction: 0.0,
            cost_per_element,
        }
    }

    pub fn parallel(name: &str, parallel_fraction: f64, cost_per_element: f64) -> Self {
        Self {
            name: name.to_string(),
            parallel_fraction,
            cost_per_element,
        }
    }

    fn is_sequential(&self) -> bool {
        self.parallel_fraction <= 0.0
    }
}

#[derive(Clone, Debug)]
pub struct SweepShape {
    pub functions: Vec<FunctionProfile>,
    pub dimensions: Vec<u32>,
    pub threads: Vec<u32>,
    pub block_sizes: Vec<u32>,
    pub repeats: usize,
    /// Probability that a recorded time is zero (timer resolution).
    pub zero_rate: f64,
}

impl SweepShape {
    /// Power-of-two sweep over a sequential transpose and three parallel ones.
    pub fn transpose_suite(max_exponent: u32) -> Self {
        Self {
            functions: vec![
                FunctionProfile::sequential("transpose_sequential", 1.0e-6),
                FunctionProfile::parallel("transpose_omp", 0.95, 1.1e-6),
                FunctionProfile::parallel("transpose_mpi", 0.90, 1.3e-6),
                FunctionProfile::parallel("transpose_implicit", 0.50, 0.9e-6),
            ],
            dimensions: (4..=max_exponent).map(|e| 1u32 << e).collect(),
            threads: vec![1, 2, 4, 8, 16, 32, 64],
            block_sizes: vec![4, 16, 64],
            repeats: 3,
            zero_rate: 0.0,
        }
    }

    pub fn expected_len(&self) -> usize {
        let per_parallel = self.dimensions.len() * self.threads.len() * self.block_sizes.len();
        let per_sequential = self.dimensions.len() * self.block_sizes.len();
        self.functions
            .iter()
            .map(|f| {
                if f.is_sequential() {
                    per_sequential
                } else {
                    per_parallel
                }
            })
            .sum::<usize>()
            * self.repeats
    }
}

pub fn generate_samples(shape: &SweepShape, seed: u64) -> Result<SampleStore, BenchScaleError> {
    if shape.repeats == 0 {
        return Err(BenchScaleError::invalid_input("repeats must be positive"));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut samples = Vec::with_capacity(shape.expected_len());
    for function in &shape.functions {
        let threads: &[u32] = if function.is_sequential() {
            &[1]
        } else {
            &shape.threads
        };
        for &dim in &shape.dimensions {
            let elements = f64::from(dim) * f64::from(dim);
            for &t in threads {
                let amdahl = (1.0 - function.parallel_fraction)
                    + function.parallel_fraction / f64::from(t);
                for &block in &shape.block_sizes {
                    for _ in 0..shape.repeats {
                        let time = if rng.r#gen::<f64>() < shape.zero_rate {
                            0.0
                        } else {
                            let noise = 1.0 + rng.gen_range(0.0..0.1);
                            function.cost_per_element * elements * amdahl * noise
                        };
                        samples.push(Sample::new(function.name.as_str(), dim, t, block, time));
                    }
                }
            }
        }
    }
    SampleStore::new(samples)
}
