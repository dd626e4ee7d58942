//! Snak types: atomic property-value assertions and their grouping.
//!
//! A snak asserts something about a single property: a concrete value
//! (`value`), the known absence of any value (`novalue`), or the existence
//! of an unknown value (`somevalue`). References attach an ordered list of
//! snaks to a claim; the wire protocol wants them regrouped by property.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::InvalidSnakError;
use crate::validate::validate_snak;

/// Governs whether a concrete value accompanies the assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnakType {
    /// A normal property-value pair.
    Value,
    /// The item has none of the property (e.g. a person with no children).
    NoValue,
    /// A value exists but is not known.
    SomeValue,
}

impl SnakType {
    /// Returns the wire string for this snak type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SnakType::Value => "value",
            SnakType::NoValue => "novalue",
            SnakType::SomeValue => "somevalue",
        }
    }
}

impl fmt::Display for SnakType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single property assertion.
///
/// Serializes to the wire `snakObject` shape:
/// `{"snaktype": ..., "property": ..., "datavalue": ..., "datatype": ...}`
/// with the `datavalue` and `datatype` keys absent when not supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snak {
    /// Snak type; decides whether `datavalue` may be present.
    #[serde(rename = "snaktype")]
    pub snak_type: SnakType,
    /// Property identifier (e.g. `"P854"`), opaque at this layer.
    pub property: String,
    /// Structured payload; interpretation is left to the remote service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datavalue: Option<serde_json::Value>,
    /// Wikibase datatype tag (e.g. `"url"`), when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
}

impl Snak {
    /// Creates a `value` snak carrying a concrete payload.
    pub fn value(
        property: impl Into<String>,
        datavalue: serde_json::Value,
        datatype: Option<&str>,
    ) -> Self {
        Self {
            snak_type: SnakType::Value,
            property: property.into(),
            datavalue: Some(datavalue),
            datatype: datatype.map(str::to_owned),
        }
    }

    /// Creates a `novalue` snak.
    pub fn no_value(property: impl Into<String>) -> Self {
        Self {
            snak_type: SnakType::NoValue,
            property: property.into(),
            datavalue: None,
            datatype: None,
        }
    }

    /// Creates a `somevalue` snak.
    pub fn some_value(property: impl Into<String>) -> Self {
        Self {
            snak_type: SnakType::SomeValue,
            property: property.into(),
            datavalue: None,
            datatype: None,
        }
    }

    /// Checks the snak-type / datavalue invariant.
    pub fn validate(&self) -> Result<(), InvalidSnakError> {
        validate_snak(self.datavalue.as_ref(), self.snak_type)
    }
}

/// Snaks grouped by property, preserving first-seen property order and
/// within-group input order.
///
/// Serializes to the wire `{propertyId: [snakObject, ...], ...}` object.
/// JSON objects carry no reliable key order, so the grouper also emits a
/// separate ordered property list for the `snaks-order` parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnakGroup {
    entries: Vec<(String, Vec<Snak>)>,
}

impl SnakGroup {
    /// Groups an ordered snak sequence by property.
    ///
    /// Single in-order pass: each snak is validated, then appended to its
    /// property's group (created on first sight; a property reappearing
    /// after other properties merges into its existing group). The returned
    /// order list holds each distinct property once, at its first-seen
    /// position. An empty input yields an empty group and an empty list.
    pub fn group(
        snaks: impl IntoIterator<Item = Snak>,
    ) -> Result<(Self, Vec<String>), InvalidSnakError> {
        let mut entries: Vec<(String, Vec<Snak>)> = Vec::new();
        let mut order = Vec::new();

        for snak in snaks {
            snak.validate()?;
            match entries.iter_mut().find(|(p, _)| *p == snak.property) {
                Some((_, group)) => group.push(snak),
                None => {
                    order.push(snak.property.clone());
                    entries.push((snak.property.clone(), vec![snak]));
                }
            }
        }

        Ok((Self { entries }, order))
    }

    /// Returns the number of distinct properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no snaks were grouped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the snaks grouped under a property, if any.
    pub fn get(&self, property: &str) -> Option<&[Snak]> {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, group)| group.as_slice())
    }

    /// Iterates distinct properties in first-seen order.
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }
}

impl Serialize for SnakGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (property, group) in &self.entries {
            map.serialize_entry(property, group)?;
        }
        map.end()
    }
}
