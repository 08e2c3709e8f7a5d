use serde::Serialize;

use crate::{
    errors::BenchScaleError,
    grouping::{ConfigKey, KeyField, RepresentativeMeasurement, RepresentativeTable},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaselinePolicy<'a> {
    /// Time of the sequential function at the same matrix dimension.
    CrossFunction { sequential: &'a str },
    /// Time of the same function at one thread, all other key fields equal.
    SameFunction,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BaselineRef {
    pub key: ConfigKey,
    pub time: f64,
}

/// Looks up the divisor for `measurement` in `table`.
///
/// Both the measurement and its baseline must come from the same table so the
/// two times were reduced the same way. Nothing is interpolated: a key with no
/// entry is a [`BenchScaleError::MissingBaseline`].
pub fn resolve_baseline(
    table: &RepresentativeTable,
    measurement: &RepresentativeMeasurement,
    policy: BaselinePolicy<'_>,
) -> Result<BaselineRef, BenchScaleError> {
    let key = baseline_key(table, &measurement.key, policy)?;
    match table.get(&key) {
        Some(found) => Ok(BaselineRef {
            key,
            time: found.time,
        }),
        None => Err(BenchScaleError::missing_baseline(
            measurement.key.func_name(),
            measurement.key.matrix_dimension,
        )),
    }
}

fn baseline_key(
    table: &RepresentativeTable,
    key: &ConfigKey,
    policy: BaselinePolicy<'_>,
) -> Result<ConfigKey, BenchScaleError> {
    let projection = table.projection();
    match policy {
        BaselinePolicy::CrossFunction { sequential } => {
            if !projection.contains(KeyField::FuncName)
                || !projection.contains(KeyField::MatrixDimension)
            {
                return Err(BenchScaleError::invalid_input(
                    "cross-function baseline needs func_name and matrix_dimension in the key",
                ));
            }
            if projection.contains(KeyField::Threads) || projection.contains(KeyField::BlockSize)
            {
                return Err(BenchScaleError::invalid_input(
                    "cross-function baseline key must be func_name and matrix_dimension only",
                ));
            }
            Ok(key.clone().with_func(sequential))
        }
        BaselinePolicy::SameFunction => {
            if !projection.contains(KeyField::Threads) {
                return Err(BenchScaleError::invalid_input(
                    "same-function baseline needs threads in the key",
                ));
            }
            Ok(key.clone().with_threads(1))
        }
    }
}
