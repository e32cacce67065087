//! Data models for the TripPlanner application
//!
//! This module contains the core domain models organized by concern:
//! - Trip: User-submitted trip parameters and preference enums
//! - Itinerary: The multi-day travel plan produced from model output

pub mod itinerary;
pub mod trip;

// Re-export all public types for convenient access
pub use itinerary::{DayPlan, Itinerary, Place};
pub use trip::{Budget, TravelStyle, TripRequest};
