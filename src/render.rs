//! Response parsing and HTML rendering.
//!
//! Model output is deserialized into a tagged outcome rather than thrown as
//! an error: a failed parse is a normal render path that shows the raw text.

use crate::models::trip::{DEFAULT_DAYS, MAX_DAYS, MIN_DAYS};
use crate::models::{Budget, Itinerary, TravelStyle, TripRequest};
use tracing::warn;

/// Result of parsing the model's raw response text
#[derive(Debug)]
pub enum ItineraryOutcome {
    /// The text deserialized into the expected itinerary shape
    Parsed(Itinerary),
    /// The text was not valid itinerary JSON; kept verbatim for display
    Unparsed { raw: String },
}

/// Attempt strict deserialization of the raw response text.
///
/// Malformed output is not repaired or retried, only surfaced.
#[must_use]
pub fn parse_response(raw: &str) -> ItineraryOutcome {
    match serde_json::from_str::<Itinerary>(raw) {
        Ok(itinerary) => ItineraryOutcome::Parsed(itinerary),
        Err(e) => {
            warn!("Model response failed to parse as itinerary JSON: {}", e);
            ItineraryOutcome::Unparsed {
                raw: raw.to_string(),
            }
        }
    }
}

/// Escape text for inclusion in HTML content
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Shared page chrome
fn page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="id">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Smart Travel Planner AI</title>
<style>
body {{ font-family: sans-serif; max-width: 640px; margin: 2rem auto; padding: 0 1rem; color: #1e293b; }}
h1 {{ margin-bottom: 0; }}
.caption {{ color: #64748b; margin-top: 0.25rem; }}
form label {{ display: block; font-weight: 600; margin: 1rem 0 0.25rem; }}
input[type=text], input[type=number], select {{ width: 100%; padding: 0.5rem; box-sizing: border-box; }}
.checkboxes label {{ display: inline-block; font-weight: 400; margin-right: 1rem; }}
button {{ margin-top: 1.25rem; padding: 0.6rem 1.2rem; font-weight: 700; }}
.banner {{ padding: 0.75rem 1rem; border-radius: 0.5rem; margin: 1rem 0; }}
.banner.success {{ background: #dcfce7; }}
.banner.warning {{ background: #fef9c3; }}
.banner.error {{ background: #fee2e2; }}
.place {{ border-bottom: 1px solid #e2e8f0; padding: 0.5rem 0; }}
.place .category {{ color: #64748b; font-size: 0.85rem; }}
pre {{ background: #f1f5f9; padding: 1rem; border-radius: 0.5rem; overflow-x: auto; white-space: pre-wrap; }}
a {{ color: #4f46e5; }}
</style>
</head>
<body>
<h1>&#x2708;&#xfe0f; Smart Travel Planner AI</h1>
<p class="caption">Powered by Gemini AI</p>
{body}
</body>
</html>"#
    )
}

/// The trip request form served at `GET /`
#[must_use]
pub fn form_page() -> String {
    let budget_options: String = Budget::ALL
        .iter()
        .map(|b| format!(r#"<option value="{b}">{b}</option>"#))
        .collect();

    let style_checkboxes: String = TravelStyle::ALL
        .iter()
        .map(|s| {
            format!(
                r#"<label><input type="checkbox" name="styles" value="{s}"> {s}</label>"#
            )
        })
        .collect();

    page(&format!(
        r#"<form method="post" action="/plan">
<label for="destination">Tujuan Wisata</label>
<input type="text" id="destination" name="destination" placeholder="Tokyo, Jepang">
<label for="days">Jumlah Hari</label>
<input type="number" id="days" name="days" min="{MIN_DAYS}" max="{MAX_DAYS}" value="{DEFAULT_DAYS}">
<label for="budget">Budget</label>
<select id="budget" name="budget">{budget_options}</select>
<label>Gaya Traveling</label>
<div class="checkboxes">{style_checkboxes}</div>
<button type="submit">Buat Rencana Perjalanan</button>
</form>"#
    ))
}

/// Rendered itinerary: one section per day, each place card in order
#[must_use]
pub fn itinerary_page(request: &TripRequest, itinerary: &Itinerary) -> String {
    let mut body = String::new();
    body.push_str(r#"<div class="banner success">Itinerary berhasil dibuat &#x1f389;</div>"#);
    body.push_str(&format!(
        "<p>{} &middot; {} hari &middot; {}</p>",
        escape_html(&request.destination),
        request.days,
        request.budget
    ));

    for day in &itinerary.days {
        body.push_str(&format!("<h2>Hari {}</h2>", day.day));
        for place in &day.places {
            body.push_str(&format!(
                r#"<div class="place"><strong>&#x1f4cd; {name}</strong><div class="category">{category}</div><p>{description}</p></div>"#,
                name = escape_html(&place.name),
                category = escape_html(&place.category),
                description = escape_html(&place.description),
            ));
        }
    }

    body.push_str(r#"<p><a href="/">&larr; Rencanakan perjalanan lain</a></p>"#);
    page(&body)
}

/// Shown when the model output did not deserialize: an error indicator
/// plus the raw text for user inspection
#[must_use]
pub fn parse_failure_page(raw: &str) -> String {
    page(&format!(
        r#"<div class="banner error">Gagal parsing response AI</div>
<pre>{}</pre>
<p><a href="/">&larr; Coba lagi</a></p>"#,
        escape_html(raw)
    ))
}

/// Validation warning, e.g. for an empty destination
#[must_use]
pub fn warning_page(message: &str) -> String {
    page(&format!(
        r#"<div class="banner warning">{}</div>
<p><a href="/">&larr; Kembali ke form</a></p>"#,
        escape_html(message)
    ))
}

/// Model call failure surfaced as a single user-visible error
#[must_use]
pub fn error_page(message: &str) -> String {
    page(&format!(
        r#"<div class="banner error">{}</div>
<p><a href="/">&larr; Kembali ke form</a></p>"#,
        escape_html(message)
    ))
}
