use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::instrument;

use crate::API_CLIENT;
use crate::config;
use crate::models::{City, Review};

use super::CityStore;

/// Client for the managed data service holding city and review records.
///
/// The base URL is read from the environment on every call, so a missing
/// `DATA_STORE_URL` surfaces at first use rather than at startup.
#[derive(Debug, Default)]
pub struct HttpCityStore;

impl HttpCityStore {
    pub fn new() -> Self {
        Self
    }

    fn city_url(base: &str, name: &str) -> String {
        format!("{base}/cities/{}", urlencoding::encode(name))
    }
}

#[async_trait]
impl CityStore for HttpCityStore {
    #[instrument(skip(self))]
    async fn list_cities(&self) -> Result<Vec<City>> {
        let base = config::data_store_url()?;
        let response = API_CLIENT
            .get(format!("{base}/cities"))
            .send()
            .await?
            .error_for_status()?;

        let cities = response
            .json()
            .await
            .context("Failed to parse city scan response")?;
        Ok(cities)
    }

    #[instrument(skip(self))]
    async fn get_city(&self, name: &str) -> Result<Option<City>> {
        let base = config::data_store_url()?;
        let response = API_CLIENT.get(Self::city_url(&base, name)).send().await?;

        // An unknown key is an empty result, not a failure.
        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!("No city record for '{name}'");
            return Ok(None);
        }

        let city = response
            .error_for_status()?
            .json()
            .await
            .context("Failed to parse city record")?;
        Ok(Some(city))
    }

    #[instrument(skip(self))]
    async fn list_reviews(&self, city_name: &str) -> Result<Vec<Review>> {
        let base = config::data_store_url()?;
        let response = API_CLIENT
            .get(format!("{}/reviews", Self::city_url(&base, city_name)))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        let reviews = response
            .error_for_status()?
            .json()
            .await
            .context("Failed to parse review records")?;
        Ok(reviews)
    }

    #[instrument(skip(self))]
    async fn list_all_reviews(&self) -> Result<Vec<Review>> {
        let base = config::data_store_url()?;
        let response = API_CLIENT
            .get(format!("{base}/reviews"))
            .send()
            .await?
            .error_for_status()?;

        let reviews = response
            .json()
            .await
            .context("Failed to parse review scan response")?;
        Ok(reviews)
    }
}
