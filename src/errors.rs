use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BenchScaleError {
    #[error("dataset has no valid positive time")]
    EmptyDataset,
    #[error("missing baseline for {func_name}{}", dimension_suffix(.matrix_dimension))]
    MissingBaseline {
        func_name: String,
        matrix_dimension: Option<u32>,
    },
    #[error("no samples within {tolerance} of modal problem size per thread {modal_ratio}")]
    NoCohort { modal_ratio: f64, tolerance: f64 },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl BenchScaleError {
    pub fn missing_baseline<T: Into<String>>(func_name: T, matrix_dimension: Option<u32>) -> Self {
        BenchScaleError::MissingBaseline {
            func_name: func_name.into(),
            matrix_dimension,
        }
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        BenchScaleError::InvalidInput(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        BenchScaleError::Io(msg.into())
    }

    pub fn parse<T: Into<String>>(msg: T) -> Self {
        BenchScaleError::Parse(msg.into())
    }

    /// Dataset-wide failures abort a run; everything else is recovered per view.
    pub fn is_fatal(&self) -> bool {
        matches!(self, BenchScaleError::EmptyDataset)
    }
}

fn dimension_suffix(matrix_dimension: &Option<u32>) -> String {
    match matrix_dimension {
        Some(dim) => format!(" at matrix dimension {dim}"),
        None => String::new(),
    }
}
