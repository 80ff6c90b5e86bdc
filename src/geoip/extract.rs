//! Field extraction from provider responses.
//!
//! Providers are inconsistent about field names, so each output field is taken
//! from the first *present* source field in a fixed fallback chain. A value is
//! present when it is a non-empty string or a non-zero number; `null`, `""`,
//! `0`, booleans, arrays and objects all fall through to the next source.

use serde_json::{Map, Value};

use super::types::{GeoLocation, GeoMetadata, PrivacyFlags};

const COUNTRY_FIELDS: &[&str] = &["country_name", "country"];
const REGION_FIELDS: &[&str] = &["region", "region_code"];
const CITY_FIELDS: &[&str] = &["city"];
const ASN_FIELDS: &[&str] = &["asn", "asn_org"];
const ISP_FIELDS: &[&str] = &["org", "org_name", "asn_org"];
const PRIVACY_FIELD: &str = "privacy";

/// Normalizes a parsed provider body.
///
/// A body that is not a JSON object yields `GeoMetadata::default()`.
pub fn extract_metadata(body: &Value) -> GeoMetadata {
    let Some(record) = body.as_object() else {
        return GeoMetadata::default();
    };

    let privacy = record.get(PRIVACY_FIELD).and_then(Value::as_object);

    GeoMetadata {
        geo: GeoLocation {
            country: first_present(record, COUNTRY_FIELDS),
            region: first_present(record, REGION_FIELDS),
            city: first_present(record, CITY_FIELDS),
        },
        asn: first_present(record, ASN_FIELDS),
        isp: first_present(record, ISP_FIELDS),
        flags: PrivacyFlags {
            datacenter: flag(privacy, "is_datacenter"),
            proxy: flag(privacy, "is_proxy"),
            vpn: flag(privacy, "is_vpn"),
            tor: flag(privacy, "is_tor"),
        },
    }
}

fn first_present(record: &Map<String, Value>, fields: &[&str]) -> Option<String> {
    fields
        .iter()
        .filter_map(|field| record.get(*field))
        .find_map(present_string)
}

fn present_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        _ => None,
    }
}

fn flag(privacy: Option<&Map<String, Value>>, field: &str) -> bool {
    privacy
        .and_then(|p| p.get(field))
        .is_some_and(is_truthy)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
