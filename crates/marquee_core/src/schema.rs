//! Output contracts the model must honor, one per content domain.
//!
//! Schemas are plain static data. They are sent to the service to constrain
//! generation and read back by the decoder to know which fields to extract.

use serde::Serialize;

/// JSON type of a single output field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FieldKind {
    /// A JSON string.
    String,
    /// A JSON array whose items are all strings.
    StringArray,
}

/// Declaration of one field in an [`OutputSchema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FieldSpec {
    /// Wire name of the field (camelCase).
    pub name: &'static str,
    /// Expected JSON type.
    pub kind: FieldKind,
    /// Whether the model must always emit this field.
    pub required: bool,
    /// Hint shown to the model.
    pub description: &'static str,
}

impl FieldSpec {
    const fn required(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            description,
        }
    }
}

/// Ordered description of the object a domain's response must be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OutputSchema {
    /// Name of the response type this schema describes.
    pub name: &'static str,
    /// Fields in the order the model should emit them.
    pub fields: &'static [FieldSpec],
}

impl OutputSchema {
    /// Look up a field by its wire name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Wire names of all fields, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    /// Wire names of the required fields.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }
}

use FieldKind::{String as Str, StringArray};

/// Menu copy for a single dish.
pub static MENU_SCHEMA: OutputSchema = OutputSchema {
    name: "MenuResponse",
    fields: &[
        FieldSpec::required(
            "menuDescription",
            Str,
            "A short, appealing description for a menu.",
        ),
        FieldSpec::required(
            "socialMediaCaption",
            Str,
            "A catchy social media post with emojis and hashtags.",
        ),
        FieldSpec::required(
            "imageSuggestion",
            Str,
            "A text description of a visual concept for the dish.",
        ),
        FieldSpec::required(
            "nutritionalInfo",
            Str,
            "Estimated calories and key macros (e.g., 'Approx. 450kcal, High Protein').",
        ),
        FieldSpec::required(
            "promotionalOffer",
            Str,
            "A catchy promotional discount phrase (e.g., 'Buy 1 Get 1 Free on Fridays!').",
        ),
    ],
};

/// A dish idea for the current season.
pub static SEASONAL_SCHEMA: OutputSchema = OutputSchema {
    name: "SeasonalDishSuggestion",
    fields: &[
        FieldSpec::required("dishName", Str, "Name of the seasonal dish."),
        FieldSpec::required("ingredients", Str, "List of key ingredients."),
        FieldSpec::required("description", Str, "Why it fits the current season."),
    ],
};

/// Booking, reminder and follow-up messages.
pub static APPOINTMENT_SCHEMA: OutputSchema = OutputSchema {
    name: "AppointmentResponse",
    fields: &[
        FieldSpec::required(
            "bookingResponse",
            Str,
            "Polite booking confirmation message.",
        ),
        FieldSpec::required("reminderMessage", Str, "Follow-up reminder message."),
        FieldSpec::required(
            "reschedulingOption",
            Str,
            "A polite message offering rescheduling options.",
        ),
        FieldSpec::required(
            "upsellSuggestion",
            Str,
            "A subtle suggestion for an additional service.",
        ),
        FieldSpec::required(
            "sentimentAnalysis",
            Str,
            "Analysis of the customer's tone if provided (e.g., 'Neutral', 'Frustrated').",
        ),
    ],
};

/// Promotional material for a local event.
pub static EVENT_SCHEMA: OutputSchema = OutputSchema {
    name: "EventResponse",
    fields: &[
        FieldSpec::required(
            "socialMediaCaption",
            Str,
            "Engaging caption for social media.",
        ),
        FieldSpec::required("bannerText", Str, "Text layout for a poster or banner."),
        FieldSpec::required(
            "imageSuggestion",
            Str,
            "Image or illustration idea fitting the event theme.",
        ),
        FieldSpec::required(
            "hashtags",
            StringArray,
            "List of trending/relevant hashtags.",
        ),
        FieldSpec::required(
            "engagementQuestions",
            StringArray,
            "Questions to ask audience to drive engagement.",
        ),
        FieldSpec::required(
            "videoScriptConcept",
            Str,
            "A short concept or script for a promo video (max 2 sentences).",
        ),
    ],
};
