//! Product catalog module.
//!
//! The catalog is static reference data: loaded once at startup and never
//! edited during a session.

mod product;

pub use product::{Catalog, Product};
