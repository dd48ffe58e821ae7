use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{instrument, warn};

use crate::error::RecordError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyId(pub String);

impl PropertyId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Addressable image. The core never fetches or resizes it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRef {
    pub uri: String,
}

impl ImageRef {
    #[must_use]
    pub fn new(uri: impl AsRef<str>) -> Option<Self> {
        let uri = uri.as_ref().trim();
        if uri.is_empty() {
            return None;
        }
        Some(Self { uri: uri.to_owned() })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.uri
    }
}

/// Validated lat/lon
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        let in_range = (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon);
        in_range.then_some(Self { lat, lon })
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// A listing attribute that may be absent upstream. Displays as "Unknown"
/// when absent so views can format it without branching.
#[derive(Clone, Debug, PartialEq)]
pub enum Detail<T> {
    Known(T),
    Unknown,
}

impl<T> Default for Detail<T> {
    fn default() -> Self {
        Self::Unknown
    }
}

impl<T> Detail<T> {
    #[must_use]
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Unknown, Self::Known)
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    #[must_use]
    pub const fn known(&self) -> Option<&T> {
        match self {
            Self::Known(value) => Some(value),
            Self::Unknown => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Detail<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(value) => value.fmt(f),
            Self::Unknown => f.write_str("Unknown"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Contact {
    /// Kept as given; formatting characters are the dialer's problem.
    pub phone_number: Detail<String>,
    /// e.g. owner or broker
    pub user_type: Detail<String>,
}

/// One normalized rental listing. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyRecord {
    pub id: PropertyId,
    pub description: Detail<String>,
    pub rent: Detail<f64>,
    pub bedrooms: Detail<u32>,
    pub washrooms: Detail<u32>,
    pub floor: Detail<String>,
    pub furnished: bool,
    pub parking: bool,
    pub brokerage: Detail<f64>,
    pub brokerage_fee_type: Detail<String>,
    pub food_availability: Detail<String>,
    pub address: Detail<String>,
    pub full_address: Detail<String>,
    pub location: Detail<LatLon>,
    pub contact: Contact,
    /// Display order; the first image is the thumbnail. Shared, never copied,
    /// by the image viewer.
    pub images: Arc<[ImageRef]>,
}

impl PropertyRecord {
    /// Normalizes one loosely-typed listing as returned by the listing endpoint.
    pub fn from_raw(raw: &Value) -> Result<Self, RecordError> {
        let obj = raw
            .as_object()
            .ok_or_else(|| RecordError::malformed("record is not an object"))?;

        let id = parse_id(obj.get("id"))?;
        let images = parse_images(obj.get("property_images").or_else(|| obj.get("images")))?;

        let contact = obj
            .get("user_detail")
            .and_then(Value::as_object)
            .map(|detail| Contact {
                phone_number: text(detail, "phone_number"),
                user_type: text(detail, "user_type"),
            })
            .unwrap_or_default();

        let location = match (number(obj, "lati"), number(obj, "longi")) {
            (Some(lat), Some(lon)) => Detail::from_option(LatLon::new(lat, lon)),
            _ => Detail::Unknown,
        };

        Ok(Self {
            id,
            description: text(obj, "description"),
            rent: Detail::from_option(number(obj, "rent")),
            bedrooms: count(obj, "bedroom"),
            washrooms: count(obj, "washroom"),
            floor: text(obj, "floor"),
            furnished: flag(obj, "furnished_id"),
            parking: flag(obj, "car_parking"),
            brokerage: Detail::from_option(number(obj, "brokerage")),
            brokerage_fee_type: text(obj, "brokerage_fees_type"),
            food_availability: text(obj, "food_availability"),
            address: text(obj, "address"),
            full_address: text(obj, "full_address"),
            location,
            contact,
            images,
        })
    }

    #[must_use]
    pub fn thumbnail(&self) -> Option<&ImageRef> {
        self.images.first()
    }

    #[must_use]
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }
}

/// Parses a whole fetch response. Malformed entries and repeated ids are
/// dropped and logged; the rest keep their order.
#[instrument(skip_all, fields(raw_count = raw.len()))]
pub fn parse_records(raw: &[Value]) -> Vec<PropertyRecord> {
    let mut seen = HashSet::with_capacity(raw.len());
    let mut records = Vec::with_capacity(raw.len());

    for (index, value) in raw.iter().enumerate() {
        match PropertyRecord::from_raw(value) {
            Ok(record) => {
                if seen.insert(record.id.clone()) {
                    records.push(record);
                } else {
                    warn!(index, id = %record.id, "dropping listing with duplicate id");
                }
            }
            Err(e) => warn!(index, error = %e, "dropping malformed listing"),
        }
    }

    records
}

fn parse_id(value: Option<&Value>) -> Result<PropertyId, RecordError> {
    match value {
        Some(Value::Number(n)) => Ok(PropertyId(n.to_string())),
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(PropertyId(s.trim().to_owned())),
        Some(_) => Err(RecordError::malformed("identifier is not a number or string")),
        None => Err(RecordError::malformed("identifier missing")),
    }
}

fn parse_images(value: Option<&Value>) -> Result<Arc<[ImageRef]>, RecordError> {
    let entries = match value {
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(RecordError::malformed("images is not a sequence")),
        None => return Err(RecordError::malformed("images missing")),
    };

    let images: Vec<ImageRef> = entries
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| {
            let image = match entry {
                Value::String(uri) => ImageRef::new(uri),
                Value::Object(obj) => obj.get("image_url").and_then(Value::as_str).and_then(ImageRef::new),
                _ => None,
            };
            if image.is_none() {
                warn!(position, "skipping unusable image entry");
            }
            image
        })
        .collect();

    Ok(images.into())
}

fn text(obj: &Map<String, Value>, key: &str) -> Detail<String> {
    match obj.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Detail::Known(s.trim().to_owned()),
        Some(Value::Number(n)) => Detail::Known(n.to_string()),
        _ => Detail::Unknown,
    }
}

fn number(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    let value = match obj.get(key)? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    value.is_finite().then_some(value)
}

fn count(obj: &Map<String, Value>, key: &str) -> Detail<u32> {
    let parsed = match obj.get(key) {
        Some(Value::Number(n)) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Some(Value::String(s)) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    Detail::from_option(parsed)
}

fn flag(obj: &Map<String, Value>, key: &str) -> bool {
    match obj.get(key) {
        Some(Value::Number(n)) => n.as_u64() == Some(1),
        Some(Value::String(s)) => s.trim() == "1",
        Some(Value::Bool(b)) => *b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_listing() -> Value {
        json!({
            "id": 42,
            "description": "2BHK near the park",
            "rent": 15000,
            "bedroom": 2,
            "washroom": "2",
            "floor": "3",
            "furnished_id": 1,
            "car_parking": 0,
            "brokerage": 7500,
            "brokerage_fees_type": "one time",
            "food_availability": "Veg only",
            "address": "Koramangala",
            "full_address": "12 Park Road, Koramangala, Bengaluru",
            "lati": "12.9352",
            "longi": 77.6245,
            "property_images": [
                { "image_url": "https://img.example/a.jpg" },
                { "image_url": "https://img.example/b.jpg" }
            ],
            "user_detail": { "phone_number": "+91 99999 99999", "user_type": "owner" }
        })
    }

    #[test]
    fn test_full_listing_is_normalized() {
        let record = PropertyRecord::from_raw(&full_listing()).unwrap();

        assert_eq!(record.id, PropertyId::new("42"));
        assert_eq!(record.rent, Detail::Known(15000.0));
        assert_eq!(record.bedrooms, Detail::Known(2));
        assert_eq!(record.washrooms, Detail::Known(2));
        assert!(record.furnished);
        assert!(!record.parking);
        let location = record.location.known().copied().unwrap();
        assert!((location.lat - 12.9352).abs() < 1e-9);
        assert!((location.lon - 77.6245).abs() < 1e-9);
        assert_eq!(record.contact.phone_number, Detail::Known("+91 99999 99999".into()));
        assert_eq!(record.contact.user_type.to_string(), "owner");
        assert_eq!(record.images.len(), 2);
        assert_eq!(record.thumbnail().unwrap().as_str(), "https://img.example/a.jpg");
    }

    #[test]
    fn test_missing_fields_become_unknown() {
        let record = PropertyRecord::from_raw(&json!({ "id": "abc", "images": [] })).unwrap();

        assert_eq!(record.contact.phone_number, Detail::Unknown);
        assert_eq!(record.rent.to_string(), "Unknown");
        assert_eq!(record.location, Detail::Unknown);
        assert!(!record.furnished);
        assert!(!record.has_images());
        assert!(record.thumbnail().is_none());
    }

    #[test]
    fn test_missing_id_is_malformed() {
        let err = PropertyRecord::from_raw(&json!({ "images": [] })).unwrap_err();
        assert!(matches!(err, RecordError::MalformedRecord { .. }));

        assert!(PropertyRecord::from_raw(&json!({ "id": "  ", "images": [] })).is_err());
        assert!(PropertyRecord::from_raw(&json!({ "id": null, "images": [] })).is_err());
    }

    #[test]
    fn test_images_must_be_a_sequence() {
        assert!(PropertyRecord::from_raw(&json!({ "id": 1, "images": "a.jpg" })).is_err());
        assert!(PropertyRecord::from_raw(&json!({ "id": 1 })).is_err());
        assert!(PropertyRecord::from_raw(&json!(["not", "an", "object"])).is_err());
    }

    #[test]
    fn test_image_order_preserved_and_bad_entries_skipped() {
        let record = PropertyRecord::from_raw(&json!({
            "id": 1,
            "images": ["a.jpg", { "image_url": "" }, 7, { "image_url": "c.jpg" }, "b.jpg"]
        }))
        .unwrap();

        let uris: Vec<&str> = record.images.iter().map(ImageRef::as_str).collect();
        assert_eq!(uris, ["a.jpg", "c.jpg", "b.jpg"]);
    }

    #[test]
    fn test_out_of_range_coordinates_are_unknown() {
        let record = PropertyRecord::from_raw(&json!({
            "id": 1, "images": [], "lati": 95.0, "longi": 10.0
        }))
        .unwrap();
        assert_eq!(record.location, Detail::Unknown);
    }

    #[test]
    fn test_parse_records_drops_bad_entries_and_duplicates() {
        let raw = vec![
            json!({ "id": 1, "images": [] }),
            json!({ "images": [] }),
            json!({ "id": 2, "images": {} }),
            json!({ "id": 3, "images": ["x.jpg"] }),
            json!({ "id": "1", "images": ["dup.jpg"] }),
        ];

        let ids: Vec<String> = parse_records(&raw).into_iter().map(|r| r.id.0).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn test_detail_display() {
        assert_eq!(Detail::Known(12000.5).to_string(), "12000.5");
        assert_eq!(Detail::<u32>::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_latlon_validation() {
        assert!(LatLon::new(0.0, 0.0).is_some());
        assert!(LatLon::new(f64::NAN, 0.0).is_none());
        assert!(LatLon::new(0.0, f64::INFINITY).is_none());
        assert!(LatLon::new(-90.0, 180.0).is_some());
        assert!(LatLon::new(0.0, 181.0).is_none());
    }
}
