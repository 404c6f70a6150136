//! A single-pass cursor over result rows.

use async_trait::async_trait;

use crate::error::Error;
use crate::row::ResultRow;

/// Yields rows in result order. `Ok(None)` means the results are exhausted.
#[async_trait]
pub trait RowCursor {
    async fn next_row(&mut self) -> Result<Option<ResultRow>, Error>;
}
