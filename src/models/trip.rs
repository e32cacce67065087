//! Trip request model: the user-submitted set of trip parameters

use crate::error::PlannerError;
use serde::{Deserialize, Serialize};

/// Minimum number of trip days accepted
pub const MIN_DAYS: u32 = 1;
/// Maximum number of trip days accepted
pub const MAX_DAYS: u32 = 30;
/// Pre-selected day count shown in the form
pub const DEFAULT_DAYS: u32 = 3;

/// Budget tier for the trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Budget {
    Low,
    Medium,
    High,
}

impl Budget {
    /// All tiers in form display order
    pub const ALL: [Budget; 3] = [Budget::Low, Budget::Medium, Budget::High];

    /// Label shown in the form and interpolated into the prompt
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Budget::Low => "Low",
            Budget::Medium => "Medium",
            Budget::High => "High",
        }
    }
}

impl std::fmt::Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Travel style preference tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TravelStyle {
    #[serde(rename = "Kuliner")]
    Culinary,
    #[serde(rename = "Budaya")]
    Culture,
    #[serde(rename = "Alam")]
    Nature,
    Shopping,
    #[serde(rename = "Santai")]
    Relaxation,
}

impl TravelStyle {
    /// All styles in form display order
    pub const ALL: [TravelStyle; 5] = [
        TravelStyle::Culinary,
        TravelStyle::Culture,
        TravelStyle::Nature,
        TravelStyle::Shopping,
        TravelStyle::Relaxation,
    ];

    /// Label shown in the form and interpolated into the prompt
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TravelStyle::Culinary => "Kuliner",
            TravelStyle::Culture => "Budaya",
            TravelStyle::Nature => "Alam",
            TravelStyle::Shopping => "Shopping",
            TravelStyle::Relaxation => "Santai",
        }
    }
}

impl std::fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The user-submitted set of trip parameters used to build the prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    /// Destination name, free text (required, non-empty)
    pub destination: String,
    /// Trip duration in days (1-30)
    pub days: u32,
    /// Budget tier
    pub budget: Budget,
    /// Selected travel styles; an empty selection is accepted
    #[serde(default)]
    pub styles: Vec<TravelStyle>,
}

impl TripRequest {
    /// Guard run before any model call is issued
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.destination.trim().is_empty() {
            return Err(PlannerError::validation("Tujuan wajib diisi"));
        }

        if !(MIN_DAYS..=MAX_DAYS).contains(&self.days) {
            return Err(PlannerError::validation(format!(
                "Jumlah hari harus antara {MIN_DAYS} dan {MAX_DAYS}"
            )));
        }

        Ok(())
    }

    /// Comma-joined style labels for prompt interpolation.
    /// An empty selection yields an empty string.
    #[must_use]
    pub fn joined_styles(&self) -> String {
        self.styles
            .iter()
            .map(|s| s.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn request(destination: &str, days: u32) -> TripRequest {
        TripRequest {
            destination: destination.to_string(),
            days,
            budget: Budget::Medium,
            styles: vec![TravelStyle::Culinary],
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("Tokyo, Jepang", 3).validate().is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_empty_destination_rejected(#[case] destination: &str) {
        let err = request(destination, 3).validate().unwrap_err();
        assert_eq!(err.user_message(), "Tujuan wajib diisi");
    }

    #[rstest]
    #[case(0)]
    #[case(31)]
    fn test_days_out_of_range_rejected(#[case] days: u32) {
        let err = request("Tokyo", days).validate().unwrap_err();
        assert!(err.user_message().contains("antara 1 dan 30"));
    }

    #[rstest]
    #[case(1)]
    #[case(30)]
    fn test_days_bounds_accepted(#[case] days: u32) {
        assert!(request("Tokyo", days).validate().is_ok());
    }

    #[test]
    fn test_joined_styles() {
        let mut req = request("Tokyo", 3);
        req.styles = vec![TravelStyle::Culinary, TravelStyle::Nature];
        assert_eq!(req.joined_styles(), "Kuliner, Alam");

        req.styles.clear();
        assert_eq!(req.joined_styles(), "");
    }

    #[test]
    fn test_style_form_values_deserialize() {
        // Form option values carry the same labels the user sees
        let style: TravelStyle = serde_json::from_str("\"Kuliner\"").unwrap();
        assert_eq!(style, TravelStyle::Culinary);
        let style: TravelStyle = serde_json::from_str("\"Santai\"").unwrap();
        assert_eq!(style, TravelStyle::Relaxation);
    }

    #[test]
    fn test_budget_labels() {
        assert_eq!(Budget::Low.label(), "Low");
        assert_eq!(Budget::Medium.to_string(), "Medium");
        assert_eq!(Budget::High.to_string(), "High");
    }
}
