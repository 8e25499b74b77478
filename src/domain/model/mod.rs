//! Entity definitions for the catalog.
//!
//! Entities are plain values: the request layer decodes an input payload, the
//! business layer turns it into an entity, and the persistence layer fills in the
//! store-assigned identifier.

pub mod category;
pub mod product;

pub use category::{Category, CategoryInput};
pub use product::{Product, ProductInput};
