//! Natural-language prompt assembly for itinerary suggestions

use crate::models::{City, TripParameters};

/// Build the single-line itinerary request sent to the model service.
///
/// Each clause is present if and only if its triggering field was supplied;
/// absent fields are silently omitted. `days` is interpolated as opaque text.
/// The things-to-do clause is always present.
#[must_use]
pub fn itinerary_prompt(city: &City, parameters: &TripParameters) -> String {
    let mut prompt = String::from("Give me an itinerary");

    if let Some(days) = parameters.days.as_deref().filter(|days| !days.is_empty()) {
        prompt.push_str(&format!(" for {days} days"));
    }

    prompt.push_str(&format!(" for {}, {}", city.name, city.country_name));

    if parameters.children {
        prompt.push_str(", with children");
    }
    prompt.push_str(". ");

    if parameters.car {
        prompt.push_str("I have a car. ");
    }

    if !parameters.interests.is_empty() {
        prompt.push_str(&format!(
            "I am interested in {}. ",
            parameters.interests.join(", ")
        ));
    }

    prompt.push_str(&format!(
        "Consider these things to do {}.",
        city.top_things_to_do.join(", ")
    ));

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_city() -> City {
        City {
            name: "Test-city-1".into(),
            country_code: "TC1".into(),
            country_name: "TestCountry1".into(),
            top_things_to_do: vec!["TODO1".into(), "TODO2".into()],
            itinerary: String::new(),
        }
    }

    #[test]
    fn test_all_clauses_present() {
        let parameters = TripParameters {
            days: Some("2".into()),
            children: true,
            car: true,
            interests: vec!["nightlife".into(), "museums".into()],
        };

        let prompt = itinerary_prompt(&test_city(), &parameters);
        assert_eq!(
            prompt,
            "Give me an itinerary for 2 days for Test-city-1, TestCountry1, with children. \
             I have a car. I am interested in nightlife, museums. \
             Consider these things to do TODO1, TODO2."
        );
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let prompt = itinerary_prompt(&test_city(), &TripParameters::default());
        assert_eq!(
            prompt,
            "Give me an itinerary for Test-city-1, TestCountry1. \
             Consider these things to do TODO1, TODO2."
        );
        assert!(!prompt.contains("days"));
        assert!(!prompt.contains("children"));
        assert!(!prompt.contains("car"));
        assert!(!prompt.contains("interested"));
    }

    #[test]
    fn test_empty_days_text_omits_day_clause() {
        let parameters = TripParameters {
            days: Some(String::new()),
            ..TripParameters::default()
        };

        let prompt = itinerary_prompt(&test_city(), &parameters);
        assert!(!prompt.contains(" days"));
    }

    #[test]
    fn test_days_text_is_not_parsed() {
        let parameters = TripParameters {
            days: Some("a fortnight".into()),
            ..TripParameters::default()
        };

        let prompt = itinerary_prompt(&test_city(), &parameters);
        assert!(prompt.contains(" for a fortnight days "));
    }

    #[test]
    fn test_single_interest_has_no_separator() {
        let parameters = TripParameters {
            interests: vec!["hiking".into()],
            ..TripParameters::default()
        };

        let prompt = itinerary_prompt(&test_city(), &parameters);
        assert!(prompt.contains("I am interested in hiking. "));
    }
}
