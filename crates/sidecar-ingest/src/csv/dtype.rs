//! Column type labels.
//!
//! Labels follow the dtype names analysts already see in pandas so that a
//! sidecar reads the same whichever tool produced it.

use polars::prelude::*;

/// Returns the dtype label for a parsed CSV column.
///
/// | Polars type            | Label            |
/// |------------------------|------------------|
/// | all values missing     | `float64`        |
/// | integer, no missing    | `int64`          |
/// | integer with missing   | `float64`        |
/// | float                  | `float64`        |
/// | boolean, no missing    | `bool`           |
/// | boolean with missing   | `object`         |
/// | date / time            | `datetime64[ns]` |
/// | string and the rest    | `object`         |
pub fn dtype_label(column: &Column) -> &'static str {
    let has_nulls = column.null_count() > 0;
    if column.len() > 0 && column.null_count() == column.len() {
        return "float64";
    }

    match column.dtype() {
        DataType::Null => "float64",
        DataType::Boolean if has_nulls => "object",
        DataType::Boolean => "bool",
        DataType::String => "object",
        dtype if dtype.is_integer() => {
            if has_nulls {
                "float64"
            } else {
                "int64"
            }
        }
        dtype if dtype.is_float() => "float64",
        dtype if dtype.is_temporal() => "datetime64[ns]",
        _ => "object",
    }
}
