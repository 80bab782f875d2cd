use serde::{Deserialize, Serialize};

/// A visitor review, owned by a city via the shared city-name key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Name of the city this review belongs to
    #[serde(rename = "CityName")]
    pub city_name: String,
    /// Review identifier, unique within a city
    #[serde(rename = "ReviewId")]
    pub review_id: String,
    /// Free-text review content
    #[serde(rename = "ReviewContent")]
    pub content: String,
    /// Star rating, nominally 1-5 but not validated
    #[serde(rename = "Stars")]
    pub stars: i64,
}

impl Review {
    /// Visual star indicator, one glyph per star.
    ///
    /// Out-of-range counts are not validated: zero or negative star counts
    /// degenerate to an empty indicator.
    #[must_use]
    pub fn stars_display(&self) -> String {
        stars_display(self.stars)
    }
}

/// Repeat the star glyph `stars` times.
#[must_use]
pub fn stars_display(stars: i64) -> String {
    "⭐️".repeat(usize::try_from(stars).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(5, "⭐️⭐️⭐️⭐️⭐️")]
    #[case(1, "⭐️")]
    #[case(0, "")]
    #[case(-3, "")]
    fn test_stars_display(#[case] stars: i64, #[case] expected: &str) {
        assert_eq!(stars_display(stars), expected);
    }
}
