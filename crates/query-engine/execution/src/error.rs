//! Errors for the export.

use gcp_bigquery_client::error::BQError;

/// Every error is fatal to the export.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to read service account key: {0}")]
    ServiceKey(#[source] std::io::Error),
    #[error("unable to connect to BigQuery: {0}")]
    Connection(#[source] BQError),
    #[error("query failed: {0}")]
    Query(#[source] BQError),
    #[error("query job is not complete and carries no job reference to wait on")]
    JobIncomplete,
    #[error("error iterating through results: {0}")]
    Iteration(#[from] IterationError),
    #[error("unable to decode message for row '{row_key}': {source}")]
    Decode {
        row_key: String,
        source: protobuf_export_message::DecodeError,
    },
    #[error("unable to write results: {0}")]
    Output(#[source] std::io::Error),
}

/// Failures while walking the result rows.
#[derive(Debug, thiserror::Error)]
pub enum IterationError {
    #[error("{0}")]
    Api(#[source] BQError),
    #[error("more results are available but the query carries no job reference")]
    MissingJobReference,
    #[error("column '{0}' is not in the result schema")]
    MissingColumn(&'static str),
    #[error("row {row} has no value for column '{column}'")]
    NullValue { row: u64, column: &'static str },
    #[error("row {row} has a non-string value for column '{column}': {value}")]
    UnexpectedValue {
        row: u64,
        column: &'static str,
        value: serde_json::Value,
    },
    #[error("row {row} has invalid bytes in column '{column}': {source}")]
    InvalidBytes {
        row: u64,
        column: &'static str,
        source: base64::DecodeError,
    },
}
