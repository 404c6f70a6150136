//! BigQuery connection settings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::values::{ProjectId, Secret, ServiceKey};

pub const DEFAULT_PROJECT_ID: &str = "your-project-id";
pub const DEFAULT_SERVICE_KEY_VARIABLE: &str = "PROTOBUF_EXPORT_SERVICE_KEY";

/// How to reach BigQuery.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionSettings {
    /// Project that runs the query job.
    pub project_id: ProjectId,
    /// Credentials used to authenticate the client.
    #[serde(default)]
    pub credentials: ConnectionCredentials,
}

/// Where the client gets its credentials from.
#[derive(Clone, PartialEq, Eq, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ConnectionCredentials {
    /// Google application default credentials (`GOOGLE_APPLICATION_CREDENTIALS`,
    /// gcloud user credentials, or the metadata server).
    #[default]
    ApplicationDefault,
    /// A service account key, as JSON.
    ServiceKey(ServiceKey),
}

impl ConnectionSettings {
    /// The built-in settings.
    pub fn empty() -> Self {
        Self {
            project_id: ProjectId(Secret::Plain(DEFAULT_PROJECT_ID.into())),
            credentials: ConnectionCredentials::ApplicationDefault,
        }
    }

    /// Settings that read a service account key from `PROTOBUF_EXPORT_SERVICE_KEY`.
    pub fn with_service_key_from_environment() -> Self {
        Self {
            credentials: ConnectionCredentials::ServiceKey(ServiceKey(Secret::FromEnvironment {
                variable: DEFAULT_SERVICE_KEY_VARIABLE.into(),
            })),
            ..Self::empty()
        }
    }
}
