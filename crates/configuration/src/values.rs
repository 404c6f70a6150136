//! Configuration values that may be read from the environment.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::environment::{self, Environment, Variable};

/// A value that is either written in the configuration or read from an environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum Secret {
    Plain(String),
    FromEnvironment { variable: String },
}

impl Secret {
    /// Produce the plain value, reading the environment if necessary.
    pub fn resolve(&self, environment: impl Environment) -> Result<String, environment::Error> {
        match self {
            Secret::Plain(value) => Ok(value.clone()),
            Secret::FromEnvironment { variable } => {
                environment.read(&Variable::new(variable.as_str()))
            }
        }
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self::Plain(value)
    }
}

/// Service account key JSON used to authenticate against BigQuery.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ServiceKey(pub Secret);

impl From<String> for ServiceKey {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for ServiceKey {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

/// The Google Cloud project that runs the query job.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ProjectId(pub Secret);

impl From<String> for ProjectId {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}
