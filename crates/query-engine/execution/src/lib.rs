//! Run the export query against BigQuery and print the decoded rows.

pub mod connection;
pub mod cursor;
pub mod error;
pub mod print;
pub mod query;
pub mod row;

use std::io::Write;

use tracing::{info_span, Instrument};

use protobuf_export_configuration::Configuration;

pub use cursor::RowCursor;
pub use error::{Error, IterationError};
pub use row::ResultRow;

/// Connect, query, and print every row of the result to `out`.
///
/// The client lives until this function returns, on success and on error alike.
/// Returns the number of rows printed.
pub async fn export<W: Write>(configuration: &Configuration, out: &mut W) -> Result<u64, Error> {
    let client = connection::connect(&configuration.credentials)
        .instrument(info_span!("Connect to BigQuery"))
        .await?;

    let mut cursor = query::query(&client, &configuration.project_id, &configuration.query)
        .instrument(info_span!("Execute query", project_id = %configuration.project_id))
        .await?;

    let printed = print::print_results(out, &mut cursor)
        .instrument(info_span!("Print results"))
        .await?;

    tracing::info!(rows = printed, "export complete");
    Ok(printed)
}
