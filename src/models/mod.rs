//! Data models for the CityInfo application
//!
//! This module contains the core domain models organized by concern:
//! - City: travel destination records from the managed data store
//! - Review: visitor reviews owned by a city
//! - Trip: user-submitted trip parameters for itinerary suggestions

pub mod city;
pub mod review;
pub mod trip;

// Re-export all public types for convenient access
pub use city::City;
pub use review::Review;
pub use trip::TripParameters;
