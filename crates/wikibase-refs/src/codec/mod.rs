//! JSON wire encoding for request parameters.
//!
//! The remote API takes complex parameters as JSON text inside a single
//! form field, so grouped snaks and their ordering list are encoded to
//! strings before the descriptor is built.

use serde::Serialize;

use crate::error::Error;
use crate::model::SnakGroup;

/// Encodes a snak group to the `snaks` parameter value.
pub fn encode_snaks(group: &SnakGroup) -> Result<String, Error> {
    encode("snaks", group)
}

/// Encodes an ordered property list to the `snaks-order` parameter value.
pub fn encode_snaks_order(order: &[String]) -> Result<String, Error> {
    encode("snaks-order", order)
}

fn encode<T: Serialize + ?Sized>(field: &'static str, value: &T) -> Result<String, Error> {
    serde_json::to_string(value).map_err(|source| Error::Encode { field, source })
}
