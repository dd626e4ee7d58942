//! Request descriptors for the reference endpoints.
//!
//! Each wire action gets its own variant so that parameter assembly is
//! exhaustive and checked at compile time, rather than an open-ended
//! string map. Descriptors carry structures already serialized to the
//! JSON-in-a-parameter encoding the remote API expects; building one
//! performs no I/O.

/// A fully-built request for the transport to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceRequest {
    /// Creates or updates a reference (`wbsetreference`).
    Set(SetReference),
    /// Deletes one or more references (`wbremovereferences`).
    Remove(RemoveReferences),
}

impl ReferenceRequest {
    /// Returns the wire action tag.
    pub fn action(&self) -> &'static str {
        match self {
            ReferenceRequest::Set(_) => "wbsetreference",
            ReferenceRequest::Remove(_) => "wbremovereferences",
        }
    }

    /// Flattens the descriptor into the string-keyed parameter list.
    ///
    /// Optional parameters are omitted entirely when unset; `index` is
    /// rendered as a decimal string.
    pub fn into_params(self) -> Vec<(&'static str, String)> {
        match self {
            ReferenceRequest::Set(set) => {
                let mut params = vec![("statement", set.statement)];
                if let Some(reference) = set.reference {
                    params.push(("reference", reference));
                }
                params.push(("snaks", set.snaks));
                if let Some(snaks_order) = set.snaks_order {
                    params.push(("snaks-order", snaks_order));
                }
                if let Some(index) = set.index {
                    params.push(("index", index.to_string()));
                }
                params
            }
            ReferenceRequest::Remove(remove) => {
                vec![
                    ("statement", remove.statement),
                    ("references", remove.references),
                ]
            }
        }
    }
}

/// Parameters for `wbsetreference`.
///
/// `reference` and `snaks_order` are set only by the update path; a fresh
/// reference carries just the claim, the encoded snak group, and an
/// optional insertion index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetReference {
    /// Claim identifier (e.g. `"Q2$8C67587E-79D5-4E8C-972C-A3C5F7ED06B3"`).
    pub statement: String,
    /// Hash of the existing reference being updated.
    pub reference: Option<String>,
    /// JSON-encoded `{propertyId: [snakObject, ...]}` group.
    pub snaks: String,
    /// JSON-encoded ordered property list.
    pub snaks_order: Option<String>,
    /// Position within the claim's reference list.
    pub index: Option<u32>,
}

/// Parameters for `wbremovereferences`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveReferences {
    /// Claim identifier.
    pub statement: String,
    /// Pipe-joined reference hashes.
    pub references: String,
}
