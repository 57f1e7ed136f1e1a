//! End-to-end flows through the session agent with a mocked provider.

use serde_json::json;

use property_search::testing::MockExtractor;
use property_search::{
    city_token, listing_urls, ExtractError, ModelId, PropertyCategory, PropertyType, SearchAgent,
    SearchCriteria, SessionConfig, NO_DATA_MESSAGE, TREND_PLACEHOLDER,
};

fn agent_with(mock: MockExtractor) -> SearchAgent<MockExtractor> {
    let config = SessionConfig::new(ModelId::O3Mini, "sk-test", "fc-test");
    SearchAgent::with_provider(config, mock)
}

fn mumbai_criteria() -> SearchCriteria {
    SearchCriteria::new("Mumbai", 2.5)
        .with_category(PropertyCategory::Residential)
        .with_property_type(PropertyType::Flat)
}

#[tokio::test]
async fn mumbai_search_renders_single_listing() {
    let mock = MockExtractor::new().with_response(MockExtractor::success_envelope(json!({
        "properties": [{
            "building_name": "Skyline Towers",
            "property_type": "Flat",
            "location_address": "Bandra West",
            "price": "2.1 Cr",
            "description": "2BHK sea view",
        }],
    })));
    let agent = agent_with(mock.clone());

    let digest = agent.find_properties(&mumbai_criteria()).await.unwrap();

    // The one section block carries all five values and a trailing rule.
    assert_eq!(digest.matches("### 🏠 ").count(), 1);
    for value in ["Skyline Towers", "Flat", "Bandra West", "2.1 Cr", "2BHK sea view"] {
        assert!(digest.contains(value), "digest should contain {value}");
    }
    assert!(digest.trim_end().ends_with("---"));

    // The provider was steered with three mumbai URL patterns and the
    // criteria embedded verbatim.
    let request = &mock.calls()[0];
    assert_eq!(request.urls.len(), 3);
    assert!(request.urls.iter().all(|u| u.contains("mumbai")));
    assert!(request.prompt.contains("2.5 Crores"));
    assert!(request.prompt.contains("Flat"));
    assert!(request.prompt.contains("Residential"));
}

#[tokio::test]
async fn empty_payload_yields_no_data_sentinel() {
    let mock =
        MockExtractor::new().with_response(MockExtractor::success_envelope(json!({})));
    let agent = agent_with(mock);

    let digest = agent.find_properties(&mumbai_criteria()).await.unwrap();
    assert_eq!(digest, NO_DATA_MESSAGE);
}

#[tokio::test]
async fn unsuccessful_envelope_yields_no_data_sentinel() {
    let agent = agent_with(MockExtractor::new().with_response(MockExtractor::failure_envelope()));

    let digest = agent.find_properties(&mumbai_criteria()).await.unwrap();
    assert_eq!(digest, NO_DATA_MESSAGE);
}

#[tokio::test]
async fn listings_render_in_provider_order() {
    let records: Vec<_> = ["Alpha Residency", "Beta Heights", "Gamma Enclave"]
        .iter()
        .map(|name| {
            json!({
                "building_name": name,
                "property_type": "Individual House",
                "location_address": "Model Colony",
                "price": "1.8 Cr",
                "description": "3BHK corner plot",
            })
        })
        .collect();
    let mock = MockExtractor::new()
        .with_response(MockExtractor::success_envelope(json!({"properties": records})));
    let agent = agent_with(mock);

    let digest = agent.find_properties(&mumbai_criteria()).await.unwrap();

    assert_eq!(digest.matches("### 🏠 ").count(), 3);
    let alpha = digest.find("Alpha Residency").unwrap();
    let beta = digest.find("Beta Heights").unwrap();
    let gamma = digest.find("Gamma Enclave").unwrap();
    assert!(alpha < beta && beta < gamma);
}

#[tokio::test]
async fn malformed_record_is_typed_error_not_panic() {
    let mock = MockExtractor::new().with_response(MockExtractor::success_envelope(json!({
        "properties": [{
            "building_name": "Skyline Towers",
            "property_type": "Flat",
        }],
    })));
    let agent = agent_with(mock);

    let err = agent
        .find_properties(&mumbai_criteria())
        .await
        .unwrap_err();
    assert!(matches!(err, ExtractError::MalformedPayload { .. }));
}

#[tokio::test]
async fn transport_failure_propagates_as_http_error() {
    let mock = MockExtractor::new();
    mock.fail_with("connection refused");
    let agent = agent_with(mock);

    let err = agent
        .find_properties(&mumbai_criteria())
        .await
        .unwrap_err();
    assert!(matches!(err, ExtractError::Http(_)));
}

#[tokio::test]
async fn trends_return_placeholder_regardless_of_payload() {
    let mock = MockExtractor::new().with_response(MockExtractor::success_envelope(json!({
        "locations": [{
            "location": "Bandra West",
            "price_per_sqft": 48500.0,
            "percent_increase": 6.4,
            "rental_yield": 2.8,
        }],
    })));
    let agent = agent_with(mock.clone());

    let summary = agent.get_location_trends("Mumbai").await.unwrap();
    assert_eq!(summary, TREND_PLACEHOLDER);

    // The call still goes out, against the single trends source.
    let request = &mock.calls()[0];
    assert_eq!(request.urls.len(), 1);
    assert!(request.urls[0].contains("price-trends-in-mumbai"));

    // Even with nothing queued, the summary does not change.
    let summary = agent.get_location_trends("Mumbai").await.unwrap();
    assert_eq!(summary, TREND_PLACEHOLDER);
}

#[test]
fn city_token_and_urls_are_deterministic() {
    let token = city_token("Mumbai");
    assert_eq!(token, city_token(&token));
    assert_eq!(listing_urls(&token), listing_urls(&city_token("MUMBAI")));
}
