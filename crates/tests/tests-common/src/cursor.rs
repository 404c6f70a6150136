//! A cursor that replays a fixed script of rows and errors.

use std::collections::VecDeque;

use async_trait::async_trait;

use query_engine_execution::{Error, ResultRow, RowCursor};

/// Yields each scripted item in order, then `None`.
#[derive(Debug, Default)]
pub struct FakeCursor {
    script: VecDeque<Result<ResultRow, Error>>,
    calls: usize,
}

impl FakeCursor {
    pub fn new(script: impl IntoIterator<Item = Result<ResultRow, Error>>) -> Self {
        FakeCursor {
            script: script.into_iter().collect(),
            calls: 0,
        }
    }

    pub fn from_rows(rows: impl IntoIterator<Item = ResultRow>) -> Self {
        Self::new(rows.into_iter().map(Ok))
    }

    /// How many times `next_row` was called.
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Items not yet handed out.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

#[async_trait]
impl RowCursor for FakeCursor {
    async fn next_row(&mut self) -> Result<Option<ResultRow>, Error> {
        self.calls += 1;
        self.script.pop_front().transpose()
    }
}
