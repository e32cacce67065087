//! `TripPlanner` - Smart travel itinerary planning with a generative model
//!
//! This library provides the core functionality for collecting trip
//! preferences, building the generation prompt, calling the model API,
//! and rendering the returned itinerary.

pub mod config;
pub mod error;
pub mod gemini;
pub mod models;
pub mod prompt;
pub mod render;
pub mod web;

// Re-export core types for public API
pub use config::{GeminiConfig, PlannerConfig};
pub use error::PlannerError;
pub use gemini::{GeminiClient, GenerativeModel};
pub use models::{Budget, DayPlan, Itinerary, Place, TravelStyle, TripRequest};
pub use render::{ItineraryOutcome, parse_response};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
