//! Resource services for the backend domains.
//!
//! # Services
//!
//! - `resource` - Generic CRUD shared by every domain
//! - `products` - Product catalog
//! - `orders` - Orders
//! - `customers` - Customer records
//!
//! Services are obtained from [`ApiClient`](crate::api::ApiClient) and hold no
//! state of their own.

mod customers;
mod orders;
mod products;
mod resource;

pub use customers::CustomerService;
pub use orders::OrderService;
pub use products::ProductService;
pub use resource::ResourceService;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) fn test_client(server: &httpmock::MockServer) -> crate::api::ApiClient {
    use backoffice_core::ResourceDomain;

    use crate::config::ServicesConfig;

    let base_url = server.base_url();
    let config = ServicesConfig::from_base_urls(
        ResourceDomain::ALL.map(|domain| (domain, base_url.as_str())),
    )
    .unwrap();
    crate::api::ApiClient::from_config(&config).unwrap()
}
