//! Typed responses, one per output schema.
//!
//! Responses are only ever produced by [`crate::decode`]. Every field is
//! zero-valued by default so partially filled model output still decodes.

use crate::Domain;
use derive_getters::Getters;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// A response type bound to a domain's output schema.
pub trait StructuredResponse: DeserializeOwned + Serialize + Default {
    /// Domain whose schema this type mirrors.
    const DOMAIN: Domain;
}

/// Responses that carry a description suitable for image generation.
pub trait HasImageSuggestion {
    /// The model's description of a visual for the content.
    fn image_prompt(&self) -> &str;
}

/// Menu copy for one dish.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuResponse {
    /// Short menu blurb
    menu_description: String,
    /// Ready-to-post caption
    social_media_caption: String,
    /// Visual concept for the dish
    image_suggestion: String,
    /// Rough calories and macros
    nutritional_info: String,
    /// Promotion idea
    promotional_offer: String,
}

impl StructuredResponse for MenuResponse {
    const DOMAIN: Domain = Domain::Menu;
}

impl HasImageSuggestion for MenuResponse {
    fn image_prompt(&self) -> &str {
        &self.image_suggestion
    }
}

/// A dish that suits the current season.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase", default)]
pub struct SeasonalDishSuggestion {
    /// Name of the dish
    dish_name: String,
    /// Key ingredients
    ingredients: String,
    /// Why it fits the season
    description: String,
}

impl StructuredResponse for SeasonalDishSuggestion {
    const DOMAIN: Domain = Domain::Seasonal;
}

/// Messages for an appointment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase", default)]
pub struct AppointmentResponse {
    /// Booking confirmation
    booking_response: String,
    /// Reminder to send before the appointment
    reminder_message: String,
    /// Offer to move the appointment
    rescheduling_option: String,
    /// Add-on service pitch
    upsell_suggestion: String,
    /// Tone of the customer's message
    sentiment_analysis: String,
}

impl StructuredResponse for AppointmentResponse {
    const DOMAIN: Domain = Domain::Appointment;
}

/// Promotional material for an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase", default)]
pub struct EventResponse {
    social_media_caption: String,
    banner_text: String,
    image_suggestion: String,
    hashtags: Vec<String>,
    engagement_questions: Vec<String>,
    video_script_concept: String,
}

impl StructuredResponse for EventResponse {
    const DOMAIN: Domain = Domain::Event;
}

impl HasImageSuggestion for EventResponse {
    fn image_prompt(&self) -> &str {
        &self.image_suggestion
    }
}
