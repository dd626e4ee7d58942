//! Snak validation and reference encoding for Wikibase-style APIs.
//!
//! References are the citation records attached to claims in a Wikibase
//! knowledge base; each one is a collection of property-value assertions
//! ("snaks"). This crate implements the client-side core for working with
//! them:
//!
//! - **Validation**: `value` snaks must carry a datavalue, `novalue` and
//!   `somevalue` snaks must not.
//! - **Grouping**: an ordered snak list is regrouped by property, keeping
//!   first-seen property order in a separate `snaks-order` list.
//! - **Encoding**: the `wbsetreference` / `wbremovereferences` parameter
//!   sets, with grouped snaks serialized as JSON-in-a-parameter.
//!
//! Transport, authentication, and retries live behind the narrow
//! [`Transport`] trait and are out of scope here.
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use wikibase_refs::{reference, SnakType};
//!
//! # fn main() -> Result<(), wikibase_refs::Error> {
//! let claim_id = "Q2$8C67587E-79D5-4E8C-972C-A3C5F7ED06B3";
//! let request = reference::add(
//!     claim_id,
//!     "P854",
//!     Some(json!("https://example.com")),
//!     Some("url"),
//!     SnakType::Value,
//!     None,
//! )?;
//!
//! assert_eq!(request.action(), "wbsetreference");
//! for (key, value) in request.into_params() {
//!     println!("{key}={value}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`model`]: Snaks, snak groups, and request descriptors
//! - [`validate`]: The snak-type / datavalue invariant
//! - [`codec`]: JSON wire encoding of request parameters
//! - [`reference`]: The add / update / remove operations
//! - [`transport`]: The dispatch boundary
//! - [`catalog`]: Static language-code and entity-kind tables

pub mod catalog;
pub mod codec;
pub mod error;
pub mod model;
pub mod reference;
pub mod transport;
pub mod validate;

// Re-export commonly used types at crate root
pub use error::{Error, InvalidSnakError};
pub use model::{ReferenceRequest, RemoveReferences, SetReference, Snak, SnakGroup, SnakType};
pub use reference::{IntoReferenceIds, Reference};
pub use transport::{Transport, TransportError};
pub use validate::validate_snak;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
