//! Printing decoded responses.

use super::OutputFormat;
use marquee_core::{AppointmentResponse, EventResponse, MenuResponse, SeasonalDishSuggestion};
use serde::Serialize;
use std::io::Write;

/// Responses that can be shown as titled sections.
pub trait Render {
    /// Section titles paired with their bodies, in display order.
    fn sections(&self) -> Vec<(&'static str, String)>;
}

impl Render for MenuResponse {
    fn sections(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Menu Description", self.menu_description().clone()),
            ("Social Media Post", self.social_media_caption().clone()),
            ("Visual Concept", self.image_suggestion().clone()),
            ("Nutritional Info", self.nutritional_info().clone()),
            ("Promotional Offer", self.promotional_offer().clone()),
        ]
    }
}

impl Render for SeasonalDishSuggestion {
    fn sections(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Seasonal Dish", self.dish_name().clone()),
            ("Ingredients", self.ingredients().clone()),
            ("Why Now", self.description().clone()),
        ]
    }
}

impl Render for AppointmentResponse {
    fn sections(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Booking Confirmation", self.booking_response().clone()),
            ("Follow-up Reminder", self.reminder_message().clone()),
            ("Rescheduling", self.rescheduling_option().clone()),
            ("Upsell", self.upsell_suggestion().clone()),
            ("Customer Sentiment", self.sentiment_analysis().clone()),
        ]
    }
}

impl Render for EventResponse {
    fn sections(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Social Media Caption", self.social_media_caption().clone()),
            ("Banner Text", self.banner_text().clone()),
            ("Visual Concept", self.image_suggestion().clone()),
            ("Hashtags", self.hashtags().join(" ")),
            (
                "Engagement Questions",
                self.engagement_questions()
                    .iter()
                    .map(|q| format!("- {}", q))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            ("Video Script Concept", self.video_script_concept().clone()),
        ]
    }
}

/// Write `value` to `out` in the requested format.
pub fn write_response<T, W>(out: &mut W, format: OutputFormat, value: &T) -> anyhow::Result<()>
where
    T: Render + Serialize,
    W: Write,
{
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for (title, body) in value.sections() {
                writeln!(out, "== {} ==", title)?;
                if body.trim().is_empty() {
                    writeln!(out, "(none)")?;
                } else {
                    writeln!(out, "{}", body)?;
                }
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
