//! Typed requests for each content domain.
//!
//! Optional fields default to the empty string and are shown to the model as
//! a placeholder. Required fields are checked for blanks when a builder runs.

use crate::{
    AppointmentResponse, Domain, EventResponse, MenuResponse, PromptField, SeasonalDishSuggestion,
    StructuredRequest,
};
use derive_getters::Getters;
use marquee_error::InputError;
use serde::{Deserialize, Serialize};

fn require(fields: &[(&str, &Option<String>)]) -> Result<(), String> {
    for (name, value) in fields {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(format!("`{}` must not be blank", name));
        }
    }
    Ok(())
}

macro_rules! builder_error_into_input {
    ($($error:ty),* $(,)?) => {$(
        impl From<$error> for InputError {
            #[track_caller]
            fn from(err: $error) -> Self {
                InputError::new(err.to_string())
            }
        }
    )*};
}

builder_error_into_input!(
    MenuRequestBuilderError,
    AppointmentRequestBuilderError,
    EventRequestBuilderError,
);

/// Dish details for menu copy.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct MenuRequest {
    /// Main ingredients, free text
    ingredients: String,
    /// Course, e.g. "Main Course" or "Dessert"
    dish_type: String,
    /// Cuisine style
    #[builder(default)]
    #[serde(default)]
    cuisine: String,
    /// Anything else the kitchen wants mentioned
    #[builder(default)]
    #[serde(default)]
    notes: String,
    /// Output language
    #[builder(default)]
    #[serde(default)]
    language: String,
}

impl MenuRequest {
    /// Creates a builder for `MenuRequest`.
    pub fn builder() -> MenuRequestBuilder {
        MenuRequestBuilder::default()
    }

    /// Turn a seasonal suggestion into a menu request for a daily special.
    ///
    /// The cuisine is left blank so the model infers it from the dish.
    pub fn from_seasonal(suggestion: &SeasonalDishSuggestion, language: impl Into<String>) -> Self {
        Self {
            ingredients: suggestion.ingredients().clone(),
            dish_type: "Special".to_string(),
            cuisine: String::new(),
            notes: format!("Seasonal Special: {}", suggestion.description()),
            language: language.into(),
        }
    }
}

impl MenuRequestBuilder {
    fn validate(&self) -> Result<(), String> {
        require(&[
            ("ingredients", &self.ingredients),
            ("dish_type", &self.dish_type),
        ])
    }
}

impl StructuredRequest for MenuRequest {
    type Response = MenuResponse;
    const DOMAIN: Domain = Domain::Menu;

    fn prompt_fields(&self) -> Vec<PromptField<'_>> {
        vec![
            PromptField::required("Ingredients", &self.ingredients),
            PromptField::required("Type", &self.dish_type),
            PromptField::optional("Cuisine", &self.cuisine, "Not specified"),
            PromptField::optional("Notes", &self.notes, "None"),
            PromptField::optional("Language", &self.language, "English"),
        ]
    }
}

/// Asks for a dish that suits the time of year. Carries no fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeasonalRequest;

impl StructuredRequest for SeasonalRequest {
    type Response = SeasonalDishSuggestion;
    const DOMAIN: Domain = Domain::Seasonal;

    fn prompt_fields(&self) -> Vec<PromptField<'_>> {
        Vec::new()
    }
}

/// Context for appointment booking messages.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct AppointmentRequest {
    /// Kind of business, e.g. "Salon"
    business_type: String,
    /// Service being booked
    service: String,
    /// When the appointment takes place, as entered
    time: String,
    /// Language the customer prefers
    language: String,
    /// Message the customer sent, if any
    #[builder(default)]
    #[serde(default)]
    customer_message: String,
}

impl AppointmentRequest {
    /// Creates a builder for `AppointmentRequest`.
    pub fn builder() -> AppointmentRequestBuilder {
        AppointmentRequestBuilder::default()
    }
}

impl AppointmentRequestBuilder {
    fn validate(&self) -> Result<(), String> {
        require(&[
            ("business_type", &self.business_type),
            ("service", &self.service),
            ("time", &self.time),
            ("language", &self.language),
        ])
    }
}

impl StructuredRequest for AppointmentRequest {
    type Response = AppointmentResponse;
    const DOMAIN: Domain = Domain::Appointment;

    fn prompt_fields(&self) -> Vec<PromptField<'_>> {
        vec![
            PromptField::required("Business Type", &self.business_type),
            PromptField::required("Service", &self.service),
            PromptField::required("Time", &self.time),
            PromptField::required("Customer Language Preference", &self.language),
            PromptField::optional(
                "Customer Message Context (if any)",
                &self.customer_message,
                "None",
            ),
        ]
    }
}

/// Details of a local event to promote.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct EventRequest {
    /// Name of the event
    event_name: String,
    /// Kind of event, e.g. "Workshop"
    event_type: String,
    /// When it happens, as entered
    date_time: String,
    /// Where it happens
    location: String,
    /// Selling points
    #[builder(default)]
    #[serde(default)]
    highlights: String,
    /// Who the event is for
    #[builder(default)]
    #[serde(default)]
    target_audience: String,
}

impl EventRequest {
    /// Creates a builder for `EventRequest`.
    pub fn builder() -> EventRequestBuilder {
        EventRequestBuilder::default()
    }
}

impl EventRequestBuilder {
    fn validate(&self) -> Result<(), String> {
        require(&[
            ("event_name", &self.event_name),
            ("event_type", &self.event_type),
            ("date_time", &self.date_time),
            ("location", &self.location),
        ])
    }
}

impl StructuredRequest for EventRequest {
    type Response = EventResponse;
    const DOMAIN: Domain = Domain::Event;

    fn prompt_fields(&self) -> Vec<PromptField<'_>> {
        vec![
            PromptField::required("Event Name", &self.event_name),
            PromptField::required("Type", &self.event_type),
            PromptField::required("Date/Time", &self.date_time),
            PromptField::required("Location", &self.location),
            PromptField::optional("Highlights", &self.highlights, "None"),
            PromptField::optional("Target Audience", &self.target_audience, "General Public"),
        ]
    }
}
