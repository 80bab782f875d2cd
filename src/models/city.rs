use serde::{Deserialize, Serialize};

/// A travel destination as stored in the managed data store.
///
/// Cities are immutable snapshots per request; every page load fetches them
/// fresh from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    /// City name, the unique key in the data store
    #[serde(rename = "CityName")]
    pub name: String,
    /// ISO country code
    #[serde(rename = "CountryCode")]
    pub country_code: String,
    /// Human-readable country name
    #[serde(rename = "CountryName")]
    pub country_name: String,
    /// Ordered list of recommended activities
    #[serde(rename = "TopThingsToDo", default)]
    pub top_things_to_do: Vec<String>,
    /// Free-text itinerary, newline separated
    #[serde(rename = "Itinerary", default)]
    pub itinerary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_deserializes_store_record() {
        let record = serde_json::json!({
            "CityName": "Test-city-1",
            "CountryCode": "TC1",
            "CountryName": "TestCountry1",
            "TopThingsToDo": ["TODO1", "TODO2"],
            "Itinerary": "Day one\nDay two"
        });

        let city: City = serde_json::from_value(record).unwrap();
        assert_eq!(city.name, "Test-city-1");
        assert_eq!(city.country_name, "TestCountry1");
        assert_eq!(city.top_things_to_do, vec!["TODO1", "TODO2"]);
        assert_eq!(city.itinerary, "Day one\nDay two");
    }

    #[test]
    fn test_city_tolerates_missing_optional_fields() {
        let record = serde_json::json!({
            "CityName": "Bare",
            "CountryCode": "BR",
            "CountryName": "Bareland"
        });

        let city: City = serde_json::from_value(record).unwrap();
        assert!(city.top_things_to_do.is_empty());
        assert!(city.itinerary.is_empty());
    }
}
