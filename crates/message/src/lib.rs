//! The protobuf message stored in the `ProtoResult` column of the export query.
//!
//! The schema is fixed and versioned outside this repository: the BigQuery UDF that
//! produces the payload and this crate must agree on it.

pub mod message;
pub mod text;

pub use message::{decode, TestMessage};
pub use prost::DecodeError;
