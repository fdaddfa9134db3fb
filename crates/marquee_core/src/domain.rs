//! The content domains Marquee can write for.
//!
//! Each domain is a row in a small table: a one-sentence task, a fixed system
//! instruction, and the output schema. Everything else in the pipeline is
//! shared.

use crate::schema::{APPOINTMENT_SCHEMA, EVENT_SCHEMA, MENU_SCHEMA, OutputSchema, SEASONAL_SCHEMA};
use serde::{Deserialize, Serialize};

/// A content-generation use case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Domain {
    /// Restaurant menu copy for one dish.
    Menu,
    /// Seasonal dish idea that seeds a menu request.
    Seasonal,
    /// Appointment booking messages.
    Appointment,
    /// Local event promotion.
    Event,
}

impl Domain {
    /// The first line of every prompt for this domain.
    pub fn task(&self) -> &'static str {
        match self {
            Domain::Menu => "Create menu content for a restaurant dish.",
            Domain::Seasonal => {
                "Suggest a trending seasonal dish for a restaurant menu based on the current time of year."
            }
            Domain::Appointment => "Create booking messages for a small business.",
            Domain::Event => "Create promotional content for a local event.",
        }
    }

    /// Persona and constraints sent alongside the prompt. Not user-editable.
    pub fn system_instruction(&self) -> &'static str {
        match self {
            Domain::Menu => {
                "You are an expert restaurant marketing assistant. Create attractive menu descriptions, nutritional estimates, and promotional offers. Ensure the output language matches the requested Language."
            }
            Domain::Seasonal => "You are a creative chef. Suggest a unique, popular seasonal dish.",
            Domain::Appointment => {
                "You are a professional appointment booking assistant. Analyze customer sentiment if a message is provided. Generate polite confirmation, reminder, rescheduling, and upsell messages in the requested language."
            }
            Domain::Event => {
                "You are an event promoter. Create exciting social media captions, banner texts, hashtags, and engagement hooks suitable for the target audience."
            }
        }
    }

    /// Output contract for this domain.
    pub fn schema(&self) -> &'static OutputSchema {
        match self {
            Domain::Menu => &MENU_SCHEMA,
            Domain::Seasonal => &SEASONAL_SCHEMA,
            Domain::Appointment => &APPOINTMENT_SCHEMA,
            Domain::Event => &EVENT_SCHEMA,
        }
    }
}
