//! Search criteria and extraction-request construction.
//!
//! This step cannot fail on its own: malformed input (empty city, negative
//! price) passes through unchecked and the provider deals with it.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::schema::{schema_descriptor, LocationCollection, PropertyCollection};

/// Listing market segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertyCategory {
    #[default]
    Residential,
    Commercial,
}

impl PropertyCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyCategory::Residential => "Residential",
            PropertyCategory::Commercial => "Commercial",
        }
    }
}

impl fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "residential" => Ok(PropertyCategory::Residential),
            "commercial" => Ok(PropertyCategory::Commercial),
            other => Err(format!(
                "unknown property category: {other} (expected Residential or Commercial)"
            )),
        }
    }
}

/// Unit type within a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertyType {
    #[default]
    Flat,
    IndividualHouse,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Flat => "Flat",
            PropertyType::IndividualHouse => "Individual House",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flat" => Ok(PropertyType::Flat),
            "individual house" | "individual-house" => Ok(PropertyType::IndividualHouse),
            other => Err(format!(
                "unknown property type: {other} (expected Flat or Individual House)"
            )),
        }
    }
}

/// One property search as entered by the user.
#[derive(Debug, Clone)]
pub struct SearchCriteria {
    /// City to search in, free text.
    pub city: String,

    /// Budget ceiling in Crores. Advisory: forwarded to the provider in the
    /// instruction text, never re-enforced locally.
    pub max_price_crores: f64,

    /// Listing market segment.
    pub category: PropertyCategory,

    /// Unit type.
    pub property_type: PropertyType,
}

impl SearchCriteria {
    /// Create criteria with the default category and type.
    pub fn new(city: impl Into<String>, max_price_crores: f64) -> Self {
        Self {
            city: city.into(),
            max_price_crores,
            category: PropertyCategory::default(),
            property_type: PropertyType::default(),
        }
    }

    /// Set the market segment.
    pub fn with_category(mut self, category: PropertyCategory) -> Self {
        self.category = category;
        self
    }

    /// Set the unit type.
    pub fn with_property_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = property_type;
        self
    }
}

/// Everything the extraction service needs for one call.
///
/// Created fresh per call and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionRequest {
    /// Source URL patterns, in fixed order.
    pub urls: Vec<String>,

    /// Natural-language extraction instruction.
    pub prompt: String,

    /// Target schema descriptor, handed to the provider verbatim.
    pub schema: serde_json::Value,
}

/// Canonical location token: lowercased, otherwise untouched.
///
/// No whitespace normalization and no URL escaping; the provider sees the
/// same token the user typed.
pub fn city_token(city: &str) -> String {
    city.to_lowercase()
}

/// The three listing sources searched for every query.
///
/// A trailing `/*` widens the crawl to every matching listing page.
pub fn listing_urls(token: &str) -> [String; 3] {
    [
        format!("https://www.squareyards.com/sale/property-for-sale-in-{token}/*"),
        format!("https://www.99acres.com/property-in-{token}-ffid/*"),
        format!("https://housing.com/in/buy/{token}/{token}"),
    ]
}

/// Locality price-trend page for one city.
pub fn trend_url(token: &str) -> String {
    format!("https://www.99acres.com/property-rates-and-price-trends-in-{token}-prffid/*")
}

/// Build the listing-search request.
pub fn search_request(criteria: &SearchCriteria) -> ExtractionRequest {
    let token = city_token(&criteria.city);
    let prompt = format!(
        "Extract property listings for {city} where property type is {property_type} \
         and category is {category}. \
         Only include properties under {max_price} Crores. \
         Each property must include name, address, price, description, and type.",
        city = criteria.city,
        property_type = criteria.property_type,
        category = criteria.category,
        max_price = criteria.max_price_crores,
    );

    ExtractionRequest {
        urls: listing_urls(&token).to_vec(),
        prompt,
        schema: schema_descriptor::<PropertyCollection>(),
    }
}

/// Build the locality-trend request.
pub fn trend_request(city: &str) -> ExtractionRequest {
    ExtractionRequest {
        urls: vec![trend_url(&city_token(city))],
        prompt: "Extract price trends data for ALL major localities in the city.".to_string(),
        schema: schema_descriptor::<LocationCollection>(),
    }
}
