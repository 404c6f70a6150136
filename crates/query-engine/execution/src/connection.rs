//! Acquire the BigQuery client.

use gcp_bigquery_client::Client;

use protobuf_export_configuration::Credentials;

use crate::error::Error;

/// Create a BigQuery client from the configured credentials.
pub async fn connect(credentials: &Credentials) -> Result<Client, Error> {
    match credentials {
        Credentials::ApplicationDefault => {
            tracing::debug!("using application default credentials");
            Client::from_application_default_credentials()
                .await
                .map_err(Error::Connection)
        }
        Credentials::ServiceKey(service_key_json) => {
            tracing::debug!("using service account key");
            let service_account_key = yup_oauth2::parse_service_account_key(service_key_json)
                .map_err(Error::ServiceKey)?;
            // the export only reads
            Client::from_service_account_key(service_account_key, true)
                .await
                .map_err(Error::Connection)
        }
    }
}
