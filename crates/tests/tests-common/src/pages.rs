//! A page source that replays scripted pages and records what was asked for.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use gcp_bigquery_client::error::BQError;
use gcp_bigquery_client::model::table_row::TableRow;

use query_engine_execution::query::{JobHandle, Page, PageSource};

use crate::rows::export_schema;

#[derive(Debug, Default)]
pub struct FakePages {
    pages: Mutex<VecDeque<Page>>,
    requests: Mutex<Vec<Option<String>>>,
}

impl FakePages {
    pub fn new(pages: impl IntoIterator<Item = Page>) -> Self {
        FakePages {
            pages: Mutex::new(pages.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// The page token of every fetch, in order. `None` is a wait for completion.
    pub fn requests(&self) -> Vec<Option<String>> {
        self.requests.lock().expect("requests lock").clone()
    }

    /// Pages not yet fetched.
    pub fn remaining(&self) -> usize {
        self.pages.lock().expect("pages lock").len()
    }
}

#[async_trait]
impl PageSource for FakePages {
    async fn fetch_page(
        &self,
        _job: &JobHandle,
        page_token: Option<String>,
    ) -> Result<Page, BQError> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(page_token);
        let page = self
            .pages
            .lock()
            .expect("pages lock")
            .pop_front()
            .expect("no more scripted pages");
        Ok(page)
    }
}

/// A job handle for scripted results.
pub fn job() -> JobHandle {
    JobHandle {
        project_id: "shakespeare".to_string(),
        job_id: "job_1".to_string(),
        location: Some("US".to_string()),
        page_size: Some(2),
    }
}

/// A page of a completed job with the export schema.
pub fn page(rows: Vec<TableRow>, page_token: Option<&str>) -> Page {
    Page {
        job_complete: true,
        schema: Some(export_schema()),
        rows,
        page_token: page_token.map(str::to_string),
    }
}

/// A page of a job that is still running.
pub fn incomplete_page() -> Page {
    Page {
        job_complete: false,
        ..Page::default()
    }
}
