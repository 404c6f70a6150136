//! Builders for result rows, both decoded and as BigQuery returns them.

use base64::Engine;
use gcp_bigquery_client::model::table_row::TableRow;
use gcp_bigquery_client::model::table_schema::TableSchema;
use prost::Message;

use protobuf_export_message::TestMessage;
use query_engine_execution::ResultRow;

pub fn message(word: &str, word_count: i64) -> TestMessage {
    TestMessage {
        word: word.to_string(),
        word_count,
    }
}

/// A row whose payload is `message` encoded.
pub fn row(row_key: &str, message: &TestMessage) -> ResultRow {
    ResultRow {
        row_key: row_key.to_string(),
        payload: message.encode_to_vec(),
    }
}

/// A row whose payload does not decode as a `TestMessage`.
pub fn corrupt_row(row_key: &str) -> ResultRow {
    ResultRow {
        row_key: row_key.to_string(),
        // field 1, length-delimited, claims 5 bytes but carries 1
        payload: vec![0x0a, 0x05, b'a'],
    }
}

/// The result schema of the export query.
pub fn export_schema() -> TableSchema {
    schema(&[("RowKey", "STRING"), ("ProtoResult", "BYTES")])
}

pub fn schema(fields: &[(&str, &str)]) -> TableSchema {
    let fields: Vec<serde_json::Value> = fields
        .iter()
        .map(|(name, field_type)| serde_json::json!({ "name": name, "type": field_type }))
        .collect();
    serde_json::from_value(serde_json::json!({ "fields": fields })).expect("table schema")
}

/// A table row in the REST representation, with `cells` as the cell values.
pub fn table_row(cells: &[serde_json::Value]) -> TableRow {
    let cells: Vec<serde_json::Value> = cells
        .iter()
        .map(|value| serde_json::json!({ "v": value }))
        .collect();
    serde_json::from_value(serde_json::json!({ "f": cells })).expect("table row")
}

/// A table row for the export query, with the payload base64-encoded as BigQuery sends BYTES.
pub fn export_table_row(row_key: &str, message: &TestMessage) -> TableRow {
    let payload = base64::engine::general_purpose::STANDARD.encode(message.encode_to_vec());
    table_row(&[
        serde_json::Value::String(row_key.to_string()),
        serde_json::Value::String(payload),
    ])
}
