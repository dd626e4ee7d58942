//! Data model types for reference encoding.
//!
//! - Snaks (atomic property assertions) and their grouping
//! - Request descriptors (one variant per wire action)

pub mod request;
pub mod snak;

pub use request::{ReferenceRequest, RemoveReferences, SetReference};
pub use snak::{Snak, SnakGroup, SnakType};
