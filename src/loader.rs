//! Case file loading
//!
//! The case spreadsheet is read as a Parquet file. Each configured column is cast to text
//! so typed dates, numbers and free text all reach the preprocessor in one form.

use std::path::Path;
use std::time::Instant;

use arrow::array::{Array, ArrayRef, StringArray};
use arrow::compute::cast;
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::config::ColumnConfig;
use crate::error::util::safe_open_file;
use crate::error::{AnalysisError, Result};
use crate::models::RawRow;
use crate::utils::logging::{log_input_open, log_input_read};

/// Read a parquet file into Arrow record batches
pub fn read_batches(path: &Path) -> Result<Vec<RecordBatch>> {
    let file = safe_open_file(path, "reading case data")?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

    let mut batches = Vec::new();
    for batch in reader {
        batches.push(batch?);
    }
    Ok(batches)
}

/// Load all rows of the case file at `path`
pub fn load_rows(path: &Path, columns: &ColumnConfig) -> Result<Vec<RawRow>> {
    log_input_open("case data", path);
    let start = Instant::now();

    let batches = read_batches(path)?;
    let mut rows = Vec::new();
    for batch in &batches {
        rows.extend(rows_from_batch(batch, columns)?);
    }

    log_input_read("case data", path, rows.len(), start.elapsed());
    Ok(rows)
}

/// Extract the configured columns of one batch as textual rows
pub fn rows_from_batch(batch: &RecordBatch, columns: &ColumnConfig) -> Result<Vec<RawRow>> {
    let district = text_column(batch, &columns.district, true)?;
    let med_org = text_column(batch, &columns.med_org, true)?;
    let birth_date = text_column(batch, &columns.birth_date, true)?;
    let submission_date = text_column(batch, &columns.submission_date, true)?;
    let social_status = text_column(batch, &columns.social_status, true)?;
    let social_status_fallback = match &columns.social_status_fallback {
        Some(name) => text_column(batch, name, false)?,
        None => None,
    };
    let hosp_place = text_column(batch, &columns.hosp_place, true)?;
    let hosp_date = text_column(batch, &columns.hosp_date, false)?;

    let rows = (0..batch.num_rows())
        .map(|row| RawRow {
            district: cell(district.as_ref(), row),
            med_org: cell(med_org.as_ref(), row),
            birth_date: cell(birth_date.as_ref(), row),
            submission_date: cell(submission_date.as_ref(), row),
            social_status: cell(social_status.as_ref(), row),
            social_status_fallback: cell(social_status_fallback.as_ref(), row),
            hosp_place: cell(hosp_place.as_ref(), row),
            hosp_date: cell(hosp_date.as_ref(), row),
        })
        .collect();
    Ok(rows)
}

/// Get a column cast to `Utf8`
///
/// * `Ok(Some(array))` - the column as text
/// * `Ok(None)` - the column is absent and not required
/// * `Err(ColumnNotFound)` - the column is absent and required
fn text_column(
    batch: &RecordBatch,
    column_name: &str,
    required: bool,
) -> Result<Option<StringArray>> {
    let Ok(idx) = batch.schema().index_of(column_name) else {
        if required {
            return Err(AnalysisError::ColumnNotFound {
                column: column_name.to_string(),
            });
        }
        log::warn!("Column '{column_name}' not found in case data");
        return Ok(None);
    };

    let column: &ArrayRef = batch.column(idx);
    let text = if column.data_type() == &DataType::Utf8 {
        column.clone()
    } else {
        cast(column, &DataType::Utf8)?
    };

    let strings = text
        .as_any()
        .downcast_ref::<StringArray>()
        .cloned()
        .ok_or_else(|| {
            AnalysisError::Arrow(arrow::error::ArrowError::CastError(format!(
                "column '{column_name}' is not text after cast"
            )))
        })?;
    Ok(Some(strings))
}

fn cell(array: Option<&StringArray>, row: usize) -> Option<String> {
    let array = array?;
    if row >= array.len() || array.is_null(row) {
        return None;
    }
    Some(array.value(row).to_string())
}
