use anyhow::Result;
use async_trait::async_trait;

use crate::models::{City, Review};

use super::CityStore;

/// In-memory `CityStore` seeded with fixed records, used by tests.
#[derive(Debug, Default)]
pub struct MemoryCityStore {
    cities: Vec<City>,
    reviews: Vec<Review>,
}

impl MemoryCityStore {
    pub fn new(cities: Vec<City>, reviews: Vec<Review>) -> Self {
        Self { cities, reviews }
    }
}

#[async_trait]
impl CityStore for MemoryCityStore {
    async fn list_cities(&self) -> Result<Vec<City>> {
        Ok(self.cities.clone())
    }

    async fn get_city(&self, name: &str) -> Result<Option<City>> {
        Ok(self.cities.iter().find(|city| city.name == name).cloned())
    }

    async fn list_reviews(&self, city_name: &str) -> Result<Vec<Review>> {
        Ok(self
            .reviews
            .iter()
            .filter(|review| review.city_name == city_name)
            .cloned()
            .collect())
    }

    async fn list_all_reviews(&self) -> Result<Vec<Review>> {
        Ok(self.reviews.clone())
    }
}
