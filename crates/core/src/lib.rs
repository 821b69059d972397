//! Backoffice Core - Shared types library.
//!
//! This crate provides the types shared by every backoffice component:
//! - `admin` - Dashboard host and the typed multi-service API client
//! - `cli` - Operator command-line tools
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients.
//! Anything that talks to the order, product, or customer services lives in
//! `backoffice-admin` and is expressed in terms of the types defined here.
//!
//! # Modules
//!
//! - [`types`] - Resource domains, typed ids, DTOs, roles and principals

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
