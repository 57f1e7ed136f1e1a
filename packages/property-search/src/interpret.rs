//! Interpreting and rendering the property-search payload.

use serde_json::Value;

use crate::client::ExtractResponse;
use crate::error::{ExtractError, ExtractResult};
use crate::schema::{PropertyCollection, PropertyRecord};

/// Fixed message when the provider yields no usable listing payload.
pub const NO_DATA_MESSAGE: &str =
    "⚠️ No property data could be extracted. Try with a different city or parameters.";

/// Payload key the provider stores listings under.
const PROPERTIES_KEY: &str = "properties";

/// Render the provider envelope into the user-facing listing digest.
///
/// An unsuccessful envelope, or a payload without the `properties` key, is
/// a recovered outcome: the fixed no-data message, not an error. A payload
/// that has the key but fails schema validation is
/// [`ExtractError::MalformedPayload`].
pub fn render_properties(response: &ExtractResponse) -> ExtractResult<String> {
    if !response.success || !has_properties(&response.data) {
        tracing::warn!(
            success = response.success,
            status = %response.status,
            "No property payload in extraction response"
        );
        return Ok(NO_DATA_MESSAGE.to_string());
    }

    let collection: PropertyCollection = serde_json::from_value(response.data.clone())
        .map_err(|e| ExtractError::MalformedPayload {
            reason: e.to_string(),
        })?;

    tracing::info!(
        listings = collection.properties.len(),
        "Rendering property digest"
    );

    let mut formatted = String::new();
    for record in &collection.properties {
        formatted.push_str(&render_record(record));
    }
    Ok(formatted)
}

fn has_properties(data: &Value) -> bool {
    data.as_object()
        .is_some_and(|map| map.contains_key(PROPERTIES_KEY))
}

/// One listing as a fixed-order markdown block with a trailing rule.
fn render_record(record: &PropertyRecord) -> String {
    format!(
        "\n### 🏠 {}\n\
         - 📍 **Location**: {}\n\
         - 🏷️ **Type**: {}\n\
         - 💰 **Price**: {}\n\
         - 📝 **Description**: {}\n\
         \n\
         ---\n",
        record.building_name,
        record.location_address,
        record.property_type,
        record.price,
        record.description,
    )
}
