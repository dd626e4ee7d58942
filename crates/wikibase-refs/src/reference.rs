//! Reference encoding: building `wbsetreference` / `wbremovereferences`
//! requests for statement annotations.
//!
//! The three operations are stateless transformations over validated
//! input. Each returns a fully-formed [`ReferenceRequest`] and performs no
//! I/O; [`Reference`] wraps them around a [`Transport`] for dispatch.

use crate::codec::{encode_snaks, encode_snaks_order};
use crate::error::Error;
use crate::model::{ReferenceRequest, RemoveReferences, SetReference, Snak, SnakGroup, SnakType};
use crate::transport::Transport;

/// Builds a request creating a new single-snak reference on a claim.
///
/// The snak is validated first; an invalid value / snak-type combination
/// aborts before any descriptor exists. `index` positions the new
/// reference within the claim's reference list (`0` is the top).
pub fn add(
    claim_id: &str,
    property_id: &str,
    datavalue: Option<serde_json::Value>,
    datatype: Option<&str>,
    snak_type: SnakType,
    index: Option<u32>,
) -> Result<ReferenceRequest, Error> {
    let snak = Snak {
        snak_type,
        property: property_id.to_owned(),
        datavalue,
        datatype: datatype.map(str::to_owned),
    };
    let (group, _) = SnakGroup::group([snak])?;

    Ok(ReferenceRequest::Set(SetReference {
        statement: claim_id.to_owned(),
        reference: None,
        snaks: encode_snaks(&group)?,
        snaks_order: None,
        index,
    }))
}

/// Builds a request replacing the snaks of an existing reference.
///
/// Every snak is validated while grouping; the descriptor carries both the
/// property-keyed group and the explicit `snaks-order` list, since the
/// grouped JSON object alone does not preserve inter-property order.
pub fn update(
    claim_id: &str,
    reference_id: &str,
    snaks: impl IntoIterator<Item = Snak>,
    index: Option<u32>,
) -> Result<ReferenceRequest, Error> {
    let (group, order) = SnakGroup::group(snaks)?;

    Ok(ReferenceRequest::Set(SetReference {
        statement: claim_id.to_owned(),
        reference: Some(reference_id.to_owned()),
        snaks: encode_snaks(&group)?,
        snaks_order: Some(encode_snaks_order(&order)?),
        index,
    }))
}

/// Builds a request deleting one or more references from a claim.
///
/// Accepts a single hash or a sequence of hashes; the ids are joined with
/// `|` per the API's list-in-a-single-field convention. Ids containing the
/// delimiter are an unchecked precondition inherited from that format.
pub fn remove(claim_id: &str, reference_ids: impl IntoReferenceIds) -> ReferenceRequest {
    ReferenceRequest::Remove(RemoveReferences {
        statement: claim_id.to_owned(),
        references: reference_ids.into_reference_ids(),
    })
}

/// Conversion into the pipe-joined reference-id field.
///
/// Implemented for single ids and for id sequences, so call sites can pass
/// `"H1"`, `["H1", "H2"]`, or a `Vec<String>` interchangeably.
pub trait IntoReferenceIds {
    /// Joins the ids with `|`.
    fn into_reference_ids(self) -> String;
}

impl IntoReferenceIds for &str {
    fn into_reference_ids(self) -> String {
        self.to_owned()
    }
}

impl IntoReferenceIds for String {
    fn into_reference_ids(self) -> String {
        self
    }
}

impl IntoReferenceIds for &[&str] {
    fn into_reference_ids(self) -> String {
        self.join("|")
    }
}

impl<const N: usize> IntoReferenceIds for [&str; N] {
    fn into_reference_ids(self) -> String {
        self.join("|")
    }
}

impl IntoReferenceIds for &[String] {
    fn into_reference_ids(self) -> String {
        self.join("|")
    }
}

impl IntoReferenceIds for Vec<String> {
    fn into_reference_ids(self) -> String {
        self.join("|")
    }
}

/// Reference operations bound to a transport.
///
/// Thin dispatch layer: builds the request with the free functions above
/// and hands it to the transport unchanged.
#[derive(Debug)]
pub struct Reference<'a, T: Transport> {
    transport: &'a T,
}

impl<'a, T: Transport> Reference<'a, T> {
    /// Binds the reference operations to a transport.
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Creates a new reference for the specified claim.
    pub fn add(
        &self,
        claim_id: &str,
        property_id: &str,
        datavalue: Option<serde_json::Value>,
        datatype: Option<&str>,
        snak_type: SnakType,
        index: Option<u32>,
    ) -> Result<serde_json::Value, Error> {
        let request = add(claim_id, property_id, datavalue, datatype, snak_type, index)?;
        self.dispatch(request)
    }

    /// Replaces the snaks of the specified reference.
    pub fn update(
        &self,
        claim_id: &str,
        reference_id: &str,
        snaks: impl IntoIterator<Item = Snak>,
        index: Option<u32>,
    ) -> Result<serde_json::Value, Error> {
        let request = update(claim_id, reference_id, snaks, index)?;
        self.dispatch(request)
    }

    /// Deletes the specified reference(s).
    pub fn remove(
        &self,
        claim_id: &str,
        reference_ids: impl IntoReferenceIds,
    ) -> Result<serde_json::Value, Error> {
        self.dispatch(remove(claim_id, reference_ids))
    }

    fn dispatch(&self, request: ReferenceRequest) -> Result<serde_json::Value, Error> {
        let action = request.action();
        Ok(self.transport.send(action, request.into_params())?)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use serde_json::json;

    use super::*;
    use crate::error::InvalidSnakError;
    use crate::transport::TransportError;

    fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_add_value_snak() {
        let request = add(
            "Q2$ABC",
            "P854",
            Some(json!("https://example.com")),
            Some("url"),
            SnakType::Value,
            None,
        )
        .unwrap();

        assert_eq!(request.action(), "wbsetreference");
        let params = request.into_params();
        assert_eq!(param(&params, "statement"), Some("Q2$ABC"));
        assert_eq!(param(&params, "index"), None);

        let snaks: serde_json::Value =
            serde_json::from_str(param(&params, "snaks").unwrap()).unwrap();
        assert_eq!(
            snaks,
            json!({
                "P854": [{
                    "snaktype": "value",
                    "property": "P854",
                    "datavalue": "https://example.com",
                    "datatype": "url",
                }],
            })
        );
    }

    #[test]
    fn test_add_novalue_snak() {
        let request = add("Q2$ABC", "P999", None, None, SnakType::NoValue, None).unwrap();

        let params = request.into_params();
        let snaks: serde_json::Value =
            serde_json::from_str(param(&params, "snaks").unwrap()).unwrap();
        assert_eq!(
            snaks,
            json!({"P999": [{"snaktype": "novalue", "property": "P999"}]})
        );
    }

    #[test]
    fn test_add_rejects_novalue_with_payload() {
        let result = add("Q2$ABC", "P999", Some(json!("x")), None, SnakType::NoValue, None);
        assert!(matches!(
            result,
            Err(Error::InvalidSnak(InvalidSnakError::UnexpectedValue {
                snak_type: SnakType::NoValue
            }))
        ));
    }

    #[test]
    fn test_add_with_index() {
        let request = add("Q2$ABC", "P1", Some(json!(1)), None, SnakType::Value, Some(3)).unwrap();
        assert_eq!(param(&request.into_params(), "index"), Some("3"));
    }

    #[test]
    fn test_update_groups_and_orders() {
        let request = update(
            "Q2$ABC",
            "9d5f29a9",
            [
                Snak::value("P1", json!("a"), None),
                Snak::value("P2", json!("b"), None),
                Snak::value("P1", json!("c"), None),
            ],
            None,
        )
        .unwrap();

        let params = request.into_params();
        assert_eq!(param(&params, "reference"), Some("9d5f29a9"));

        let snaks: serde_json::Value =
            serde_json::from_str(param(&params, "snaks").unwrap()).unwrap();
        assert_eq!(snaks["P1"].as_array().unwrap().len(), 2);
        assert_eq!(snaks["P2"].as_array().unwrap().len(), 1);

        let order: serde_json::Value =
            serde_json::from_str(param(&params, "snaks-order").unwrap()).unwrap();
        assert_eq!(order, json!(["P1", "P2"]));
    }

    #[test]
    fn test_remove_single_and_sequence_agree() {
        let single = remove("Q2$ABC", "H1");
        let sequence = remove("Q2$ABC", ["H1"]);
        assert_eq!(single, sequence);
        assert_eq!(param(&single.into_params(), "references"), Some("H1"));
    }

    #[test]
    fn test_remove_joins_with_pipe() {
        let request = remove("Q2$ABC", ["H1", "H2"]);
        assert_eq!(request.action(), "wbremovereferences");
        assert_eq!(param(&request.into_params(), "references"), Some("H1|H2"));

        let owned = remove("Q2$ABC", vec!["H1".to_string(), "H2".to_string()]);
        assert_eq!(param(&owned.into_params(), "references"), Some("H1|H2"));
    }

    /// Records the last dispatched request instead of talking to a server.
    struct RecordingTransport {
        sent: RefCell<Vec<(&'static str, Vec<(&'static str, String)>)>>,
        fail: bool,
    }

    impl RecordingTransport {
        fn new() -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                fail: false,
            }
        }
    }

    impl Transport for RecordingTransport {
        fn send(
            &self,
            action: &'static str,
            params: Vec<(&'static str, String)>,
        ) -> Result<serde_json::Value, TransportError> {
            if self.fail {
                return Err(TransportError::new("connection reset"));
            }
            self.sent.borrow_mut().push((action, params));
            Ok(json!({"success": 1}))
        }
    }

    #[test]
    fn test_client_dispatches_built_request() {
        let transport = RecordingTransport::new();
        let reference = Reference::new(&transport);

        let response = reference
            .add(
                "Q2$ABC",
                "P854",
                Some(json!("https://example.com")),
                Some("url"),
                SnakType::Value,
                None,
            )
            .unwrap();
        assert_eq!(response, json!({"success": 1}));

        let sent = transport.sent.borrow();
        let (action, params) = &sent[0];
        assert_eq!(*action, "wbsetreference");
        assert_eq!(param(params, "statement"), Some("Q2$ABC"));
    }

    #[test]
    fn test_client_does_not_dispatch_invalid_snak() {
        let transport = RecordingTransport::new();
        let reference = Reference::new(&transport);

        let result = reference.add("Q2$ABC", "P999", Some(json!("x")), None, SnakType::NoValue, None);
        assert!(matches!(result, Err(Error::InvalidSnak(_))));
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn test_transport_failure_propagates_unchanged() {
        let transport = RecordingTransport {
            sent: RefCell::new(Vec::new()),
            fail: true,
        };
        let reference = Reference::new(&transport);

        let result = reference.remove("Q2$ABC", "H1");
        assert!(matches!(result, Err(Error::Transport(_))));
    }
}
