//! Submit the query and walk its results page by page.

use async_trait::async_trait;
use gcp_bigquery_client::error::BQError;
use gcp_bigquery_client::model::get_query_results_parameters::GetQueryResultsParameters;
use gcp_bigquery_client::model::get_query_results_response::GetQueryResultsResponse;
use gcp_bigquery_client::model::job_reference::JobReference;
use gcp_bigquery_client::model::query_request::QueryRequest;
use gcp_bigquery_client::model::query_response::QueryResponse;
use gcp_bigquery_client::model::table_row::TableRow;
use gcp_bigquery_client::model::table_schema::TableSchema;
use gcp_bigquery_client::Client;

use crate::cursor::RowCursor;
use crate::error::{Error, IterationError};
use crate::row::{Columns, ResultRow};

/// Run `sql` in `project_id` and return a cursor over its rows.
///
/// Waits for the query job to complete before returning.
pub async fn query<'a>(
    client: &'a Client,
    project_id: &str,
    sql: &str,
) -> Result<BigQueryCursor<'a, Client>, Error> {
    query_with_page_size(client, project_id, sql, None).await
}

/// Like [`query`], asking BigQuery for at most `page_size` rows per page.
pub async fn query_with_page_size<'a>(
    client: &'a Client,
    project_id: &str,
    sql: &str,
    page_size: Option<i32>,
) -> Result<BigQueryCursor<'a, Client>, Error> {
    let mut query_request = QueryRequest::new(sql.to_string());
    query_request.max_results = page_size;

    let result_set = client
        .job()
        .query(project_id, query_request)
        .await
        .map_err(Error::Query)?;

    let response = result_set.query_response().clone();
    let job = JobHandle::new(project_id, response.job_reference.clone(), page_size);
    open_cursor(client, job, Page::from(response)).await
}

/// Build a cursor from the first page of a query, waiting for the job if it is not complete.
pub async fn open_cursor<S>(
    source: &S,
    job: Option<JobHandle>,
    first_page: Page,
) -> Result<BigQueryCursor<'_, S>, Error>
where
    S: PageSource + Sync,
{
    let mut page = first_page;

    while !page.job_complete {
        let Some(job) = &job else {
            return Err(Error::JobIncomplete);
        };
        tracing::debug!(job_id = %job.job_id, "query job not complete, waiting");
        page = source.fetch_page(job, None).await.map_err(Error::Query)?;
    }

    let columns = Columns::from_schema(page.schema.as_ref())?;
    tracing::debug!(
        rows = page.rows.len(),
        more = page.page_token.is_some(),
        "received first page"
    );

    Ok(BigQueryCursor {
        source,
        job,
        columns,
        rows: page.rows.into_iter(),
        page_token: page.page_token,
        position: 0,
    })
}

/// Where later pages of a query job come from.
#[async_trait]
pub trait PageSource {
    /// Fetch results of `job`. Without a page token this waits for the job to complete.
    async fn fetch_page(&self, job: &JobHandle, page_token: Option<String>)
        -> Result<Page, BQError>;
}

#[async_trait]
impl PageSource for Client {
    async fn fetch_page(
        &self,
        job: &JobHandle,
        page_token: Option<String>,
    ) -> Result<Page, BQError> {
        let parameters = GetQueryResultsParameters {
            page_token,
            location: job.location.clone(),
            max_results: job.page_size,
            ..Default::default()
        };
        let response = self
            .job()
            .get_query_results(&job.project_id, &job.job_id, parameters)
            .await?;
        Ok(Page::from(response))
    }
}

/// A cursor over the rows of a completed query job.
pub struct BigQueryCursor<'a, S> {
    source: &'a S,
    job: Option<JobHandle>,
    columns: Columns,
    rows: std::vec::IntoIter<TableRow>,
    page_token: Option<String>,
    position: u64,
}

#[async_trait]
impl<S> RowCursor for BigQueryCursor<'_, S>
where
    S: PageSource + Sync,
{
    async fn next_row(&mut self) -> Result<Option<ResultRow>, Error> {
        loop {
            if let Some(row) = self.rows.next() {
                let index = self.position;
                self.position += 1;
                return Ok(Some(self.columns.extract(index, row)?));
            }

            let Some(page_token) = self.page_token.take() else {
                return Ok(None);
            };
            let job = self
                .job
                .as_ref()
                .ok_or(IterationError::MissingJobReference)?;

            tracing::debug!(job_id = %job.job_id, position = self.position, "fetching next page");
            let page = self
                .source
                .fetch_page(job, Some(page_token))
                .await
                .map_err(IterationError::Api)?;
            self.rows = page.rows.into_iter();
            self.page_token = page.page_token;
        }
    }
}

/// Enough of a job reference to ask for more results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle {
    pub project_id: String,
    pub job_id: String,
    pub location: Option<String>,
    pub page_size: Option<i32>,
}

impl JobHandle {
    pub fn new(
        default_project_id: &str,
        reference: Option<JobReference>,
        page_size: Option<i32>,
    ) -> Option<Self> {
        let reference = reference?;
        Some(JobHandle {
            project_id: reference
                .project_id
                .unwrap_or_else(|| default_project_id.to_string()),
            job_id: reference.job_id?,
            location: reference.location,
            page_size,
        })
    }
}

/// The parts of a query response we use, whichever API call produced it.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub job_complete: bool,
    pub schema: Option<TableSchema>,
    pub rows: Vec<TableRow>,
    pub page_token: Option<String>,
}

impl From<QueryResponse> for Page {
    fn from(response: QueryResponse) -> Self {
        Page {
            job_complete: response.job_complete.unwrap_or(false),
            schema: response.schema,
            rows: response.rows.unwrap_or_default(),
            page_token: response.page_token,
        }
    }
}

impl From<GetQueryResultsResponse> for Page {
    fn from(response: GetQueryResultsResponse) -> Self {
        Page {
            job_complete: response.job_complete.unwrap_or(false),
            schema: response.schema,
            rows: response.rows.unwrap_or_default(),
            page_token: response.page_token,
        }
    }
}
