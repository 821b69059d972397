//! Binding between a resource domain and its wire types.

use serde::{Serialize, de::DeserializeOwned};

use super::customer::{Customer, CustomerInput};
use super::domain::ResourceDomain;
use super::id::{CustomerId, OrderId, ProductId};
use super::order::{Order, OrderInput};
use super::product::{Product, ProductInput};

/// A CRUD resource served by one backend service.
///
/// Implemented by each response record; the client layer is generic over it
/// so every domain gets the same five operations with its own types.
pub trait Resource: Send + Sync + 'static {
    /// The domain whose endpoint serves this resource.
    const DOMAIN: ResourceDomain;

    /// Opaque identifier type.
    type Id: AsRef<str> + From<String> + DeserializeOwned + Send + Sync;

    /// Record returned by the service (carries server-assigned fields).
    type Record: DeserializeOwned + Serialize + Send + Sync;

    /// Create/replace payload (never carries server-assigned fields).
    type Input: Serialize + DeserializeOwned + Send + Sync;
}

impl Resource for Order {
    const DOMAIN: ResourceDomain = ResourceDomain::Order;
    type Id = OrderId;
    type Record = Self;
    type Input = OrderInput;
}

impl Resource for Product {
    const DOMAIN: ResourceDomain = ResourceDomain::Product;
    type Id = ProductId;
    type Record = Self;
    type Input = ProductInput;
}

impl Resource for Customer {
    const DOMAIN: ResourceDomain = ResourceDomain::Customer;
    type Id = CustomerId;
    type Record = Self;
    type Input = CustomerInput;
}
