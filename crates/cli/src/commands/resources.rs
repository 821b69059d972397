//! CRUD commands for one resource collection.
//!
//! # Usage
//!
//! ```bash
//! bo-cli products list
//! bo-cli products get p1
//! bo-cli products create --json '{"name":"Widget","sku":"W-1","price":9.99,"availableQuantity":5}'
//! bo-cli orders update o1 --json '{"customerId":"c1","status":"PAID","lines":[]}'
//! bo-cli customers delete c1
//! ```

use backoffice_admin::api::ApiClient;
use backoffice_core::Resource;
use clap::Subcommand;
use serde_json::{Value, json};

use super::CommandError;

/// Operation to run against a collection.
#[derive(Debug, Subcommand)]
pub enum ResourceAction {
    /// List every record
    List,
    /// Show one record
    Get {
        /// Record id
        id: String,
    },
    /// Create a record from a JSON payload
    Create {
        /// Input payload
        #[arg(long)]
        json: String,
    },
    /// Replace a record with a JSON payload
    Update {
        /// Record id
        id: String,

        /// Input payload
        #[arg(long)]
        json: String,
    },
    /// Delete a record
    Delete {
        /// Record id
        id: String,
    },
}

/// Run `action` for resource `R` and return the JSON to print.
///
/// # Errors
///
/// Returns `CommandError::InvalidInput` for a malformed `--json` payload, or
/// `CommandError::Request` if the backend call fails.
pub async fn execute<R: Resource>(
    client: &ApiClient,
    action: ResourceAction,
) -> Result<Value, CommandError> {
    let service = client.resource::<R>();

    match action {
        ResourceAction::List => to_json(&service.list().await?),
        ResourceAction::Get { id } => to_json(&service.get(&R::Id::from(id)).await?),
        ResourceAction::Create { json } => {
            let input = parse_input::<R>(&json)?;
            to_json(&service.create(&input).await?)
        }
        ResourceAction::Update { id, json } => {
            let input = parse_input::<R>(&json)?;
            to_json(&service.update(&R::Id::from(id), &input).await?)
        }
        ResourceAction::Delete { id } => {
            service.delete(&R::Id::from(id.clone())).await?;
            Ok(json!({ "deleted": id }))
        }
    }
}

fn parse_input<R: Resource>(raw: &str) -> Result<R::Input, CommandError> {
    serde_json::from_str(raw).map_err(CommandError::InvalidInput)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, CommandError> {
    serde_json::to_value(value).map_err(CommandError::Output)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use backoffice_admin::config::ServicesConfig;
    use backoffice_core::{Customer, Product, ResourceDomain};
    use httpmock::prelude::*;

    use super::*;

    fn client(server: &MockServer) -> ApiClient {
        let base_url = server.base_url();
        let config = ServicesConfig::from_base_urls(
            ResourceDomain::ALL.map(|domain| (domain, base_url.as_str())),
        )
        .unwrap();
        ApiClient::from_config(&config).unwrap()
    }

    #[tokio::test]
    async fn test_create_sends_parsed_payload() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/products").json_body(json!({
                    "name": "Widget",
                    "sku": "W-1",
                    "price": 9.99,
                    "availableQuantity": 5
                }));
                then.status(201).json_body(json!({
                    "productId": "p1",
                    "name": "Widget",
                    "sku": "W-1",
                    "price": 9.99,
                    "availableQuantity": 5
                }));
            })
            .await;

        let output = execute::<Product>(
            &client(&server),
            ResourceAction::Create {
                json: r#"{"name":"Widget","sku":"W-1","price":9.99,"availableQuantity":5}"#
                    .to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(output["productId"], "p1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_malformed_json_never_reaches_backend() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/customers");
                then.status(201);
            })
            .await;

        let result = execute::<Customer>(
            &client(&server),
            ResourceAction::Create {
                json: r#"{"firstName":"Ada"}"#.to_string(),
            },
        )
        .await;

        assert!(matches!(result, Err(CommandError::InvalidInput(_))));
        mock.assert_calls_async(0).await;
    }

    #[tokio::test]
    async fn test_delete_reports_deleted_id() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/customers/c1");
                then.status(204);
            })
            .await;

        let output = execute::<Customer>(
            &client(&server),
            ResourceAction::Delete {
                id: "c1".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(output, json!({"deleted": "c1"}));
    }
}
