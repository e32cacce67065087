//! Itinerary model: the parsed multi-day travel plan produced from model output

use serde::{Deserialize, Serialize};

/// A multi-day travel plan. Exists only for the duration of one render;
/// it has no identity and is never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    /// Day plans in the order the model produced them
    pub days: Vec<DayPlan>,
}

/// A single day of the itinerary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    /// Day number as labeled by the model (usually 1-based)
    pub day: u32,
    /// Places to visit, in order
    pub places: Vec<Place>,
}

/// One place within a day plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub description: String,
    pub category: String,
}
