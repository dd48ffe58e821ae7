use serde_json::Value;

use crate::error::{FetchError, LookupError};

pub const NO_PROPERTY_FOUND_MESSAGE: &str = "No property found for the given PID.";

/// The property-ID search form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyLookup {
    input: String,
    in_flight: Option<String>,
}

impl PropertyLookup {
    pub fn set_input(&mut self, raw: impl Into<String>) {
        self.input = raw.into();
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn validated_id(&self) -> Result<String, LookupError> {
        let id = self.input.trim();
        if id.is_empty() {
            return Err(LookupError::EmptyId);
        }
        if !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LookupError::NotNumeric(id.to_owned()));
        }
        Ok(id.to_owned())
    }

    /// A newer submission supersedes any request still in flight.
    pub fn begin(&mut self, property_id: String) {
        self.in_flight = Some(property_id);
    }

    /// Clears the in-flight marker if `property_id` is the current request.
    /// Returns false for responses to superseded requests.
    pub fn finish(&mut self, property_id: &str) -> bool {
        if self.in_flight.as_deref() == Some(property_id) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }
}

/// Digs the raw records out of `{ "data": { "propertyListing": [...] } }`.
pub fn listing_sequence(body: &Value) -> Result<&[Value], FetchError> {
    body.get("data")
        .and_then(|data| data.get("propertyListing"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| FetchError::UnexpectedShape("missing data.propertyListing sequence".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validation() {
        let mut lookup = PropertyLookup::default();
        assert_eq!(lookup.validated_id(), Err(LookupError::EmptyId));

        lookup.set_input("   ");
        assert_eq!(lookup.validated_id(), Err(LookupError::EmptyId));

        lookup.set_input("12a");
        assert_eq!(lookup.validated_id(), Err(LookupError::NotNumeric("12a".into())));

        lookup.set_input(" 1234 ");
        assert_eq!(lookup.validated_id(), Ok("1234".into()));
    }

    #[test]
    fn test_superseded_response_is_ignored() {
        let mut lookup = PropertyLookup::default();
        lookup.begin("1".into());
        lookup.begin("2".into());

        assert!(!lookup.finish("1"));
        assert!(lookup.is_loading());
        assert!(lookup.finish("2"));
        assert!(!lookup.is_loading());
    }

    #[test]
    fn test_listing_sequence() {
        let body = json!({ "data": { "propertyListing": [{ "id": 1 }] } });
        assert_eq!(listing_sequence(&body).unwrap().len(), 1);

        let empty = json!({ "data": { "propertyListing": [] } });
        assert!(listing_sequence(&empty).unwrap().is_empty());

        assert!(listing_sequence(&json!({ "data": {} })).is_err());
        assert!(listing_sequence(&json!({ "data": { "propertyListing": {} } })).is_err());
    }
}
