//! Prompt construction for itinerary generation.
//!
//! Centralizing the template here makes it easy to tweak how the model is
//! instructed without digging through the request handlers.

use crate::models::TripRequest;

/// Build the generation prompt for a trip request.
///
/// Deterministic string interpolation; the JSON example embeds the required
/// output shape as instruction text for the model.
#[must_use]
pub fn build_prompt(request: &TripRequest) -> String {
    format!(
        r#"Buatkan itinerary perjalanan dengan format JSON.

Tujuan: {destination}
Durasi: {days} hari
Budget: {budget}
Preferensi: {styles}

Format JSON:
{{
  "days": [
    {{
      "day": 1,
      "places": [
        {{
          "name": "Nama Tempat",
          "description": "Deskripsi singkat",
          "category": "Kategori"
        }}
      ]
    }}
  ]
}}"#,
        destination = request.destination,
        days = request.days,
        budget = request.budget,
        styles = request.joined_styles(),
    )
}
