//! Endpoint registry: resource domain to base URL and path prefix.

use backoffice_core::ResourceDomain;
use url::Url;

use crate::config::{ConfigError, ServicesConfig};

/// Resolved base URL and path prefix for one resource domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDescriptor {
    base_url: Url,
    path_prefix: String,
}

impl EndpointDescriptor {
    /// Create a descriptor. `path_prefix` is normalized to a leading slash
    /// and no trailing slash.
    #[must_use]
    pub fn new(base_url: Url, path_prefix: impl Into<String>) -> Self {
        let raw = path_prefix.into();
        let trimmed = raw.trim_matches('/');
        Self {
            base_url,
            path_prefix: format!("/{trimmed}"),
        }
    }

    /// Service base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Collection path prefix.
    #[must_use]
    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    /// Path for collection operations (`list`, `create`).
    #[must_use]
    pub fn collection_path(&self) -> String {
        self.path_prefix.clone()
    }

    /// Path for single-resource operations; `id` is percent-encoded as one
    /// path segment.
    #[must_use]
    pub fn item_path(&self, id: &str) -> String {
        format!(
            "{}/{}",
            self.path_prefix.trim_end_matches('/'),
            urlencoding::encode(id)
        )
    }
}

/// Immutable map from every [`ResourceDomain`] to its endpoint.
///
/// Built once at startup; construction fails if any domain is missing, so
/// [`resolve`](Self::resolve) cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointRegistry {
    order: EndpointDescriptor,
    product: EndpointDescriptor,
    customer: EndpointDescriptor,
}

impl EndpointRegistry {
    /// Build a registry from explicit descriptors. Later entries for the same
    /// domain replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEndpoint` for the first domain without a
    /// descriptor.
    pub fn new(
        endpoints: impl IntoIterator<Item = (ResourceDomain, EndpointDescriptor)>,
    ) -> Result<Self, ConfigError> {
        let mut order = None;
        let mut product = None;
        let mut customer = None;

        for (domain, descriptor) in endpoints {
            let slot = match domain {
                ResourceDomain::Order => &mut order,
                ResourceDomain::Product => &mut product,
                ResourceDomain::Customer => &mut customer,
            };
            *slot = Some(descriptor);
        }

        Ok(Self {
            order: order.ok_or(ConfigError::MissingEndpoint(ResourceDomain::Order))?,
            product: product.ok_or(ConfigError::MissingEndpoint(ResourceDomain::Product))?,
            customer: customer.ok_or(ConfigError::MissingEndpoint(ResourceDomain::Customer))?,
        })
    }

    /// Build a registry from loaded service configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEndpoint` if the configuration does not
    /// cover every domain.
    pub fn from_config(config: &ServicesConfig) -> Result<Self, ConfigError> {
        Self::new(config.endpoints.iter().cloned())
    }

    /// Descriptor for `domain`. Returns the same reference for the lifetime
    /// of the registry.
    #[must_use]
    pub const fn resolve(&self, domain: ResourceDomain) -> &EndpointDescriptor {
        match domain {
            ResourceDomain::Order => &self.order,
            ResourceDomain::Product => &self.product,
            ResourceDomain::Customer => &self.customer,
        }
    }

    /// All descriptors in [`ResourceDomain::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceDomain, &EndpointDescriptor)> {
        ResourceDomain::ALL
            .into_iter()
            .map(move |domain| (domain, self.resolve(domain)))
    }
}
