//! Lending provider abstractions and the generic backends shipped with the
//! gateway.
//!
//! This module contains:
//! - The `LendingApi` trait every backend implements
//! - `StaticCatalogProvider`, serving a fixed catalog from configuration
//! - `RemoteLendingProvider`, proxying to an upstream service over HTTP
//!
//! Adapters for specific protocols live outside this crate and plug into the
//! registry through `LendingApi`.

mod traits;

pub mod remote;
pub mod static_catalog;

pub use remote::RemoteLendingProvider;
pub use static_catalog::{StaticCatalogProvider, StaticPosition};
pub use traits::LendingApi;
