//! Configuration for the export.

use std::fmt;

use crate::connection_settings::ConnectionCredentials;
use crate::environment::Environment;
use crate::error::MakeRuntimeConfigurationError;
use crate::values::{ProjectId, ServiceKey};
use crate::version1::ParsedConfiguration;

/// The 'Configuration' type collects all the information necessary to run the export.
///
/// Values of this type are produced from a 'ParsedConfiguration' using
/// 'make_runtime_configuration', which resolves every secret against the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub project_id: String,
    pub credentials: Credentials,
    pub query: String,
}

/// Resolved credentials.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    ApplicationDefault,
    /// Service account key JSON.
    ServiceKey(String),
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::ApplicationDefault => write!(f, "ApplicationDefault"),
            Credentials::ServiceKey(_) => write!(f, "ServiceKey(<redacted>)"),
        }
    }
}

/// Resolve the secrets of a parsed configuration and check that the result is usable.
pub fn make_runtime_configuration(
    parsed_config: ParsedConfiguration,
    environment: impl Environment,
) -> Result<Configuration, MakeRuntimeConfigurationError> {
    let ProjectId(project_id) = parsed_config.connection_settings.project_id;
    let project_id = project_id.resolve(&environment).map_err(|source| {
        MakeRuntimeConfigurationError::MissingEnvironmentVariable {
            field: "connectionSettings.projectId",
            source,
        }
    })?;
    if project_id.trim().is_empty() {
        return Err(MakeRuntimeConfigurationError::EmptyValue {
            field: "connectionSettings.projectId",
        });
    }

    let credentials = match parsed_config.connection_settings.credentials {
        ConnectionCredentials::ApplicationDefault => Credentials::ApplicationDefault,
        ConnectionCredentials::ServiceKey(ServiceKey(secret)) => {
            let key = secret.resolve(&environment).map_err(|source| {
                MakeRuntimeConfigurationError::MissingEnvironmentVariable {
                    field: "connectionSettings.credentials.serviceKey",
                    source,
                }
            })?;
            Credentials::ServiceKey(key)
        }
    };

    if parsed_config.query.trim().is_empty() {
        return Err(MakeRuntimeConfigurationError::EmptyValue { field: "query" });
    }

    Ok(Configuration {
        project_id,
        credentials,
        query: parsed_config.query,
    })
}
