//! Resource domains addressed by the dashboard.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a [`ResourceDomain`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown resource domain: {0} (expected one of: order, product, customer)")]
pub struct ParseDomainError(pub String);

/// One of the independent backend services the dashboard talks to.
///
/// The set is closed and fixed at build time. Each domain resolves to
/// exactly one endpoint at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceDomain {
    /// Order service.
    Order,
    /// Product catalogue service.
    Product,
    /// Customer service.
    Customer,
}

impl ResourceDomain {
    /// Every domain, in a stable order.
    pub const ALL: [Self; 3] = [Self::Order, Self::Product, Self::Customer];

    /// Singular lowercase name (`order`, `product`, `customer`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Product => "product",
            Self::Customer => "customer",
        }
    }

    /// Collection name used in paths and routes (`orders`, ...).
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Order => "orders",
            Self::Product => "products",
            Self::Customer => "customers",
        }
    }

    /// Path prefix used when configuration does not override it.
    #[must_use]
    pub const fn default_path_prefix(self) -> &'static str {
        match self {
            Self::Order => "/orders",
            Self::Product => "/products",
            Self::Customer => "/customers",
        }
    }
}

impl fmt::Display for ResourceDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceDomain {
    type Err = ParseDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "order" | "orders" => Ok(Self::Order),
            "product" | "products" => Ok(Self::Product),
            "customer" | "customers" => Ok(Self::Customer),
            _ => Err(ParseDomainError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_singular_and_plural() {
        assert_eq!("order".parse(), Ok(ResourceDomain::Order));
        assert_eq!("Products".parse(), Ok(ResourceDomain::Product));
        assert_eq!(" customers ".parse(), Ok(ResourceDomain::Customer));
        assert!("invoice".parse::<ResourceDomain>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for domain in ResourceDomain::ALL {
            assert_eq!(domain.to_string().parse(), Ok(domain));
        }
    }

    #[test]
    fn test_default_prefix_matches_collection() {
        for domain in ResourceDomain::ALL {
            assert_eq!(
                domain.default_path_prefix(),
                format!("/{}", domain.collection())
            );
        }
    }
}
