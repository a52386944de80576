//! Type-safe local key-value storage for the Aythana cart.
//!
//! Plays the part browser `localStorage` plays for a web page: a flat
//! namespace of string keys holding JSON documents, read at startup and
//! rewritten after every change.
//!
//! # Example
//!
//! ```rust
//! use aythana_storage::Store;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Item {
//!     id: u32,
//!     quantity: u32,
//! }
//!
//! let store = Store::in_memory();
//!
//! store.set("cart", &vec![Item { id: 1, quantity: 2 }]).unwrap();
//!
//! let items: Option<Vec<Item>> = store.get("cart").unwrap();
//! assert_eq!(items, Some(vec![Item { id: 1, quantity: 2 }]));
//!
//! store.delete("cart").unwrap();
//! assert!(!store.exists("cart").unwrap());
//! ```

mod backend;
mod error;
mod store;

pub use backend::{Backend, FileBackend, MemoryBackend};
pub use error::StorageError;
pub use store::{validate_key, Store};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Backend, FileBackend, MemoryBackend, StorageError, Store};
}
