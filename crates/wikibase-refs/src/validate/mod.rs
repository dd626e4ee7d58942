//! Snak validation.
//!
//! A snak is well-formed when its snak type and datavalue agree: `value`
//! snaks carry a concrete payload, `novalue` and `somevalue` snaks carry
//! none. The payload's internal shape is opaque at this layer; datatype
//! interpretation happens on the remote side.

use crate::error::InvalidSnakError;
use crate::model::SnakType;

/// Validates a datavalue against its declared snak type.
///
/// Pure check with no side effects. Called once per snak, before that
/// snak is grouped or encoded.
pub fn validate_snak(
    datavalue: Option<&serde_json::Value>,
    snak_type: SnakType,
) -> Result<(), InvalidSnakError> {
    match snak_type {
        SnakType::Value if datavalue.is_none() => Err(InvalidSnakError::MissingValue),
        SnakType::NoValue | SnakType::SomeValue if datavalue.is_some() => {
            Err(InvalidSnakError::UnexpectedValue { snak_type })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_value_snak_requires_datavalue() {
        assert_eq!(
            validate_snak(None, SnakType::Value),
            Err(InvalidSnakError::MissingValue)
        );
        assert!(validate_snak(Some(&json!("x")), SnakType::Value).is_ok());
    }

    #[test]
    fn test_valueless_snak_rejects_datavalue() {
        for snak_type in [SnakType::NoValue, SnakType::SomeValue] {
            assert!(validate_snak(None, snak_type).is_ok());
            assert_eq!(
                validate_snak(Some(&json!("x")), snak_type),
                Err(InvalidSnakError::UnexpectedValue { snak_type })
            );
        }
    }

    #[test]
    fn test_null_payload_counts_as_present() {
        // JSON null is still a supplied datavalue; absence is Option::None.
        assert!(validate_snak(Some(&json!(null)), SnakType::Value).is_ok());
        assert!(validate_snak(Some(&json!(null)), SnakType::NoValue).is_err());
    }

    fn datavalue() -> impl Strategy<Value = serde_json::Value> {
        prop_oneof![
            any::<bool>().prop_map(serde_json::Value::Bool),
            any::<i64>().prop_map(serde_json::Value::from),
            "[a-zA-Z0-9 :/.-]{0,40}".prop_map(serde_json::Value::from),
        ]
    }

    proptest! {
        #[test]
        fn prop_present_datavalue(v in datavalue()) {
            prop_assert!(validate_snak(Some(&v), SnakType::Value).is_ok());
            prop_assert!(validate_snak(Some(&v), SnakType::NoValue).is_err());
            prop_assert!(validate_snak(Some(&v), SnakType::SomeValue).is_err());
        }
    }
}
