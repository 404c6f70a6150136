//! Decode and print result rows.

use std::io::Write;

use crate::cursor::RowCursor;
use crate::error::Error;

/// Print one `rowKey: <key>, message: <message>` line per row until the cursor is exhausted.
///
/// Stops at the first error. Lines already written stay written.
/// Returns the number of rows printed.
pub async fn print_results<W, C>(out: &mut W, cursor: &mut C) -> Result<u64, Error>
where
    W: Write + ?Sized,
    C: RowCursor + ?Sized,
{
    let mut printed = 0;

    let result = async {
        while let Some(row) = cursor.next_row().await? {
            let message = protobuf_export_message::decode(&row.payload).map_err(|source| {
                Error::Decode {
                    row_key: row.row_key.clone(),
                    source,
                }
            })?;
            writeln!(out, "rowKey: {}, message: {}", row.row_key, message)
                .map_err(Error::Output)?;
            printed += 1;
        }
        Ok::<(), Error>(())
    }
    .await;

    // flush whatever was printed, even when stopping early
    let flushed = out.flush().map_err(Error::Output);
    result?;
    flushed?;

    Ok(printed)
}
