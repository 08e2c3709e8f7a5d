use std::{io::Read, path::Path};

use serde::Deserialize;

use crate::{
    errors::BenchScaleError,
    sample::{Sample, SampleStore},
};

pub const COLUMNS: [&str; 5] = ["func_name", "matrix_dimension", "threads", "block_size", "time"];

#[derive(Debug, Deserialize)]
struct RawRow {
    func_name: String,
    matrix_dimension: u32,
    threads: u32,
    block_size: u32,
    time: f64,
}

pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<SampleStore, BenchScaleError> {
    let path = path.as_ref();
    let reader = reader_builder()
        .from_path(path)
        .map_err(|e| BenchScaleError::io(format!("{}: {e}", path.display())))?;
    let store = read_records(reader)?;
    tracing::info!(path = %path.display(), samples = store.len(), "loaded samples");
    Ok(store)
}

pub fn read_csv<R: Read>(input: R) -> Result<SampleStore, BenchScaleError> {
    read_records(reader_builder().from_reader(input))
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(csv::Trim::All);
    builder
}

fn read_records<R: Read>(mut reader: csv::Reader<R>) -> Result<SampleStore, BenchScaleError> {
    let headers = reader
        .headers()
        .map_err(|e| BenchScaleError::parse(format!("headers: {e}")))?
        .clone();
    for column in COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(BenchScaleError::parse(format!("missing column {column}")));
        }
    }
    let mut samples = Vec::new();
    for (idx, record) in reader.deserialize::<RawRow>().enumerate() {
        let line = idx + 2;
        let row = record.map_err(|e| BenchScaleError::parse(format!("line {line}: {e}")))?;
        if row.time < 0.0 {
            return Err(BenchScaleError::parse(format!(
                "line {line}: negative time {}",
                row.time
            )));
        }
        let sample = Sample::new(
            row.func_name,
            row.matrix_dimension,
            row.threads,
            row.block_size,
            row.time,
        );
        sample.validate().map_err(|e| match e {
            BenchScaleError::InvalidInput(msg) => {
                BenchScaleError::parse(format!("line {line}: {msg}"))
            }
            other => other,
        })?;
        samples.push(sample);
    }
    SampleStore::new(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_csv_parses_rows() {
        let input = "func_name,matrix_dimension,threads,block_size,time\n\
                     transpose_sequential,16,1,4,0.5\n\
                     transpose_omp,16,2,4,0.25\n";
        let store = read_csv(input.as_bytes()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.samples()[1], Sample::new("transpose_omp", 16, 2, 4, 0.25));
    }

    #[test]
    fn test_read_csv_rejects_missing_field() {
        let input = "func_name,matrix_dimension,threads,block_size,time\n\
                     transpose_omp,16,,4,0.25\n";
        let err = read_csv(input.as_bytes()).unwrap_err();
        assert!(matches!(err, BenchScaleError::Parse(ref msg) if msg.contains("line 2")));
    }

    #[test]
    fn test_read_csv_rejects_negative_time() {
        let input = "func_name,matrix_dimension,threads,block_size,time\n\
                     transpose_omp,16,2,4,-1.0\n";
        assert!(read_csv(input.as_bytes()).is_err());
    }

    #[test]
    fn test_read_csv_rejects_zero_threads_with_line() {
        let input = "func_name,matrix_dimension,threads,block_size,time\n\
                     par,16,2,4,0.25\n\
                     par,16,0,4,0.25\n";
        let err = read_csv(input.as_bytes()).unwrap_err();
        assert!(matches!(err, BenchScaleError::Parse(ref msg) if msg.starts_with("line 3:")));
        assert!(!err.to_string().contains("invalid input"));
    }

    #[test]
    fn test_read_csv_rejects_blank_func_name_with_line() {
        let input = "func_name,matrix_dimension,threads,block_size,time\n\
                     par,16,2,4,0.25\n\
                     par,16,4,4,0.25\n\
                     \" \",16,2,4,0.25\n";
        let err = read_csv(input.as_bytes()).unwrap_err();
        assert!(matches!(err, BenchScaleError::Parse(ref msg) if msg.starts_with("line 4:")));
    }

    #[test]
    fn test_read_csv_rejects_missing_column() {
        let input = "func_name,matrix_dimension,threads,time\ntranspose_omp,16,2,1.0\n";
        let err = read_csv(input.as_bytes()).unwrap_err();
        assert!(matches!(err, BenchScaleError::Parse(ref msg) if msg.contains("block_size")));
    }
}
