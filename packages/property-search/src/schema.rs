//! Typed shapes for provider extraction payloads.
//!
//! Each field's doc comment doubles as the schema description steering the
//! extraction service. The provider promises only best-effort conformance
//! to the descriptor, so deserialization additionally accepts the legacy
//! capitalized key spellings some responses still carry.

use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

/// A single property listing as returned by the extraction service.
///
/// All five fields must be present for the record to be renderable; a
/// record missing one is malformed provider output, not a local defect.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PropertyRecord {
    /// Name of the building/property
    #[serde(alias = "Building_name")]
    pub building_name: String,

    /// Type of property (commercial, residential, etc)
    #[serde(alias = "Property_type")]
    pub property_type: String,

    /// Complete address of the property
    pub location_address: String,

    /// Price of the property
    #[serde(alias = "Price")]
    pub price: String,

    /// Detailed description of the property
    #[serde(alias = "Description")]
    pub description: String,
}

/// Payload envelope for a multi-property extraction.
///
/// Provider order is preserved; duplicates across sources are not merged.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PropertyCollection {
    /// List of property details
    pub properties: Vec<PropertyRecord>,
}

/// Price/rent movement for one locality.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LocationTrend {
    /// Locality name
    pub location: String,

    /// Asking price per square foot
    pub price_per_sqft: f64,

    /// Percentage price change
    pub percent_increase: f64,

    /// Gross rental yield percentage
    pub rental_yield: f64,
}

/// Payload envelope for a locality-trend extraction.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LocationCollection {
    /// List of location data points
    pub locations: Vec<LocationTrend>,
}

/// Generate the provider-facing schema descriptor for `T`.
///
/// The provider wants a self-contained JSON Schema: all `$ref`s inlined and
/// the `$schema`/`definitions` bookkeeping stripped.
pub fn schema_descriptor<T: JsonSchema>() -> serde_json::Value {
    let schema = schema_for!(T);
    let mut value = serde_json::to_value(schema).unwrap_or_default();

    let definitions = value
        .as_object()
        .and_then(|map| map.get("definitions"))
        .cloned();
    if let Some(defs) = definitions {
        inline_refs(&mut value, &defs);
    }

    if let serde_json::Value::Object(map) = &mut value {
        map.remove("definitions");
        map.remove("$schema");
    }

    value
}

/// Recursively replace `#/definitions/...` references with the definition
/// body itself.
fn inline_refs(value: &mut serde_json::Value, definitions: &serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            if let Some(serde_json::Value::String(ref_path)) = map.get("$ref").cloned() {
                if let Some(name) = ref_path.strip_prefix("#/definitions/") {
                    if let Some(def) = definitions.get(name) {
                        *value = def.clone();
                        inline_refs(value, definitions);
                        return;
                    }
                }
            }

            for (_, v) in map.iter_mut() {
                inline_refs(v, definitions);
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr.iter_mut() {
                inline_refs(item, definitions);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_property_descriptor_is_self_contained() {
        let descriptor = schema_descriptor::<PropertyCollection>();
        let text = serde_json::to_string(&descriptor).unwrap();

        assert!(!text.contains("$ref"), "refs should be inlined");
        let map = descriptor.as_object().unwrap();
        assert!(!map.contains_key("definitions"));
        assert!(!map.contains_key("$schema"));
        assert!(map.contains_key("properties"));
    }

    #[test]
    fn test_descriptor_carries_field_descriptions() {
        let descriptor = schema_descriptor::<PropertyCollection>();
        let text = serde_json::to_string(&descriptor).unwrap();

        assert!(text.contains("Name of the building/property"));
        assert!(text.contains("Complete address of the property"));
        assert!(text.contains("List of property details"));
    }

    #[test]
    fn test_descriptor_declares_snake_case_names() {
        let descriptor = schema_descriptor::<PropertyCollection>();
        let record = &descriptor["properties"]["properties"]["items"];
        let fields = record["properties"].as_object().unwrap();

        assert!(fields.contains_key("building_name"));
        assert!(fields.contains_key("location_address"));
        assert!(!fields.contains_key("Building_name"));
    }

    #[test]
    fn test_record_accepts_canonical_keys() {
        let record: PropertyRecord = serde_json::from_value(json!({
            "building_name": "Skyline Towers",
            "property_type": "Flat",
            "location_address": "Bandra West",
            "price": "2.1 Cr",
            "description": "2BHK sea view",
        }))
        .unwrap();

        assert_eq!(record.building_name, "Skyline Towers");
        assert_eq!(record.price, "2.1 Cr");
    }

    #[test]
    fn test_record_accepts_legacy_alias_keys() {
        let record: PropertyRecord = serde_json::from_value(json!({
            "Building_name": "Skyline Towers",
            "Property_type": "Flat",
            "location_address": "Bandra West",
            "Price": "2.1 Cr",
            "Description": "2BHK sea view",
        }))
        .unwrap();

        assert_eq!(record.building_name, "Skyline Towers");
        assert_eq!(record.property_type, "Flat");
        assert_eq!(record.description, "2BHK sea view");
    }

    #[test]
    fn test_record_missing_field_is_rejected() {
        let result = serde_json::from_value::<PropertyRecord>(json!({
            "building_name": "Skyline Towers",
            "property_type": "Flat",
            "location_address": "Bandra West",
            "price": "2.1 Cr",
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_trend_collection_deserializes() {
        let collection: LocationCollection = serde_json::from_value(json!({
            "locations": [{
                "location": "Bandra West",
                "price_per_sqft": 48500.0,
                "percent_increase": 6.4,
                "rental_yield": 2.8,
            }],
        }))
        .unwrap();

        assert_eq!(collection.locations.len(), 1);
        assert_eq!(collection.locations[0].location, "Bandra West");
    }
}
