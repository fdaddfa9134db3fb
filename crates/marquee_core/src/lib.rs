//! Core data types for Marquee.
//!
//! Requests, responses, output schemas, prompt rendering and decoding. Nothing
//! in this crate touches the network.

mod calendar;
mod decode;
mod domain;
mod generation;
mod media;
mod prompt;
mod request;
mod response;
mod schema;

pub use calendar::{CalendarEvent, parse_start_time};
pub use decode::{DecodePolicy, decode, decode_lenient, decode_strict};
pub use domain::Domain;
pub use generation::{
    AspectRatio, GenerateRequest, GenerateRequestBuilder, GenerateRequestBuilderError,
    GenerateResponse, Output, ResponseFormat, TokenUsage,
};
pub use media::InlineImage;
pub use prompt::{PromptField, StructuredRequest, build_prompt};
pub use request::{
    AppointmentRequest, AppointmentRequestBuilder, AppointmentRequestBuilderError, EventRequest,
    EventRequestBuilder, EventRequestBuilderError, MenuRequest, MenuRequestBuilder,
    MenuRequestBuilderError, SeasonalRequest,
};
pub use response::{
    AppointmentResponse, EventResponse, HasImageSuggestion, MenuResponse, SeasonalDishSuggestion,
    StructuredResponse,
};
pub use schema::{
    APPOINTMENT_SCHEMA, EVENT_SCHEMA, FieldKind, FieldSpec, MENU_SCHEMA, OutputSchema,
    SEASONAL_SCHEMA,
};
