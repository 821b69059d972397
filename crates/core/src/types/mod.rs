//! Core types for the backoffice.
//!
//! This module provides type-safe wrappers and wire records for the three
//! backend services the dashboard manages.

pub mod customer;
pub mod domain;
pub mod id;
pub mod order;
pub mod principal;
pub mod product;
pub mod resource;
pub mod status;

pub use customer::{Customer, CustomerInput};
pub use domain::{ParseDomainError, ResourceDomain};
pub use id::*;
pub use order::{Order, OrderInput, OrderLine};
pub use principal::Principal;
pub use product::{Product, ProductInput};
pub use resource::Resource;
pub use status::*;
