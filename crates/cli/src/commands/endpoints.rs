//! Show the resolved backend endpoints.

use backoffice_admin::api::EndpointRegistry;
use backoffice_admin::config::ServicesConfig;
use serde_json::{Value, json};

use super::CommandError;

/// Resolve every domain from the environment and describe its endpoint.
///
/// # Errors
///
/// Returns `CommandError::Config` if the configuration is invalid.
pub fn list() -> Result<Value, CommandError> {
    let config = ServicesConfig::from_env()?;
    let registry = EndpointRegistry::from_config(&config)?;
    Ok(describe(&registry))
}

fn describe(registry: &EndpointRegistry) -> Value {
    registry
        .iter()
        .map(|(domain, endpoint)| {
            json!({
                "domain": domain,
                "baseUrl": endpoint.base_url().as_str(),
                "pathPrefix": endpoint.path_prefix(),
            })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use backoffice_core::ResourceDomain;

    use super::*;

    #[test]
    fn test_describe_lists_every_domain() {
        let config = ServicesConfig::from_base_urls([
            (ResourceDomain::Order, "http://orders.internal:8081"),
            (ResourceDomain::Product, "http://products.internal:8082"),
            (ResourceDomain::Customer, "http://customers.internal:8083"),
        ])
        .unwrap();
        let registry = EndpointRegistry::from_config(&config).unwrap();

        let described = describe(&registry);

        assert_eq!(
            described[1],
            json!({
                "domain": "product",
                "baseUrl": "http://products.internal:8082/",
                "pathPrefix": "/products",
            })
        );
        assert_eq!(described.as_array().map(Vec::len), Some(3));
    }
}
