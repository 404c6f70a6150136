//! Result rows and how they are read out of BigQuery's table rows.

use base64::Engine;
use gcp_bigquery_client::model::table_cell::TableCell;
use gcp_bigquery_client::model::table_row::TableRow;
use gcp_bigquery_client::model::table_schema::TableSchema;
use serde_json::Value;

use crate::error::IterationError;

pub const ROW_KEY_COLUMN: &str = "RowKey";
pub const PAYLOAD_COLUMN: &str = "ProtoResult";

/// One result row: its key and the serialized message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub row_key: String,
    pub payload: Vec<u8>,
}

/// Positions of the columns we read, found by name in the result schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    row_key: usize,
    payload: usize,
}

impl Columns {
    pub fn from_schema(schema: Option<&TableSchema>) -> Result<Self, IterationError> {
        let fields = schema
            .and_then(|schema| schema.fields.as_deref())
            .unwrap_or_default();
        let position = |name: &'static str| {
            fields
                .iter()
                .position(|field| field.name == name)
                .ok_or(IterationError::MissingColumn(name))
        };
        Ok(Columns {
            row_key: position(ROW_KEY_COLUMN)?,
            payload: position(PAYLOAD_COLUMN)?,
        })
    }

    /// Read a row. `index` is the row's position in the results, used in errors.
    ///
    /// BYTES cells arrive base64-encoded.
    pub fn extract(&self, index: u64, row: TableRow) -> Result<ResultRow, IterationError> {
        let cells = row.columns.unwrap_or_default();

        let row_key = string_cell(&cells, self.row_key, index, ROW_KEY_COLUMN)?.to_string();
        let payload = base64::engine::general_purpose::STANDARD
            .decode(string_cell(&cells, self.payload, index, PAYLOAD_COLUMN)?)
            .map_err(|source| IterationError::InvalidBytes {
                row: index,
                column: PAYLOAD_COLUMN,
                source,
            })?;

        Ok(ResultRow { row_key, payload })
    }
}

fn string_cell<'r>(
    cells: &'r [TableCell],
    position: usize,
    row: u64,
    column: &'static str,
) -> Result<&'r str, IterationError> {
    match cells.get(position).and_then(|cell| cell.value.as_ref()) {
        None | Some(Value::Null) => Err(IterationError::NullValue { row, column }),
        Some(Value::String(value)) => Ok(value),
        Some(other) => Err(IterationError::UnexpectedValue {
            row,
            column,
            value: other.clone(),
        }),
    }
}
