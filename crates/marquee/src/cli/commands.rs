//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use marquee_core::{
    AppointmentRequest, AppointmentRequestBuilderError, EventRequest, EventRequestBuilderError,
    MenuRequest, MenuRequestBuilderError,
};
use std::path::PathBuf;

/// Marquee - marketing copy for small businesses
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(about = "Generate menu, booking and event copy with Gemini", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// How generated content is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Labeled sections for reading
    #[default]
    Text,
    /// The decoded response as pretty JSON
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write menu copy for a dish
    Menu(MenuArgs),

    /// Suggest a dish for the time of year
    Seasonal(SeasonalArgs),

    /// Draft booking messages for an appointment
    Appointment(AppointmentArgs),

    /// Write promotional content for a local event
    Event(EventArgs),

    /// Generate a single image from a description
    Image(ImageArgs),

    /// Print the effective configuration with the API key masked
    Config,
}

/// Dish details.
#[derive(Args, Debug, Clone)]
pub struct MenuArgs {
    /// Main ingredients
    #[arg(long)]
    pub ingredients: String,

    /// Course, e.g. "Appetizer" or "Dessert"
    #[arg(long, default_value = "Main Course")]
    pub dish_type: String,

    /// Cuisine style
    #[arg(long, default_value = "")]
    pub cuisine: String,

    /// Anything else worth mentioning
    #[arg(long, default_value = "")]
    pub notes: String,

    /// Output language
    #[arg(long, default_value = "English")]
    pub language: String,

    /// Also render the suggested image to this file
    #[arg(long)]
    pub image_out: Option<PathBuf>,
}

impl MenuArgs {
    /// Build the typed request.
    pub fn to_request(&self) -> Result<MenuRequest, MenuRequestBuilderError> {
        MenuRequest::builder()
            .ingredients(self.ingredients.as_str())
            .dish_type(self.dish_type.as_str())
            .cuisine(self.cuisine.as_str())
            .notes(self.notes.as_str())
            .language(self.language.as_str())
            .build()
    }
}

/// Seasonal suggestion options.
#[derive(Args, Debug, Clone)]
pub struct SeasonalArgs {
    /// Turn the suggestion into a menu special right away
    #[arg(long)]
    pub generate: bool,

    /// Language for the generated menu copy
    #[arg(long, default_value = "English")]
    pub language: String,

    /// With --generate, also render the suggested image to this file
    #[arg(long, requires = "generate")]
    pub image_out: Option<PathBuf>,
}

/// Appointment context.
#[derive(Args, Debug, Clone)]
pub struct AppointmentArgs {
    /// Kind of business
    #[arg(long, default_value = "Salon")]
    pub business_type: String,

    /// Service requested
    #[arg(long)]
    pub service: String,

    /// Date and time, e.g. 2025-03-14T15:00
    #[arg(long)]
    pub time: String,

    /// Customer's preferred language
    #[arg(long, default_value = "English")]
    pub language: String,

    /// Message the customer sent, if any
    #[arg(long, default_value = "")]
    pub customer_message: String,

    /// Write an iCalendar file for the booking
    #[arg(long)]
    pub ics: Option<PathBuf>,
}

impl AppointmentArgs {
    /// Build the typed request.
    pub fn to_request(&self) -> Result<AppointmentRequest, AppointmentRequestBuilderError> {
        AppointmentRequest::builder()
            .business_type(self.business_type.as_str())
            .service(self.service.as_str())
            .time(self.time.as_str())
            .language(self.language.as_str())
            .customer_message(self.customer_message.as_str())
            .build()
    }
}

/// Event details.
#[derive(Args, Debug, Clone)]
pub struct EventArgs {
    /// Name of the event
    #[arg(long)]
    pub name: String,

    /// Kind of event, e.g. "Workshop"
    #[arg(long)]
    pub event_type: String,

    /// When it happens
    #[arg(long)]
    pub date_time: String,

    /// Where it happens
    #[arg(long)]
    pub location: String,

    /// Selling points
    #[arg(long, default_value = "")]
    pub highlights: String,

    /// Who the event is for
    #[arg(long, default_value = "")]
    pub audience: String,

    /// Also render the suggested image to this file
    #[arg(long)]
    pub image_out: Option<PathBuf>,
}

impl EventArgs {
    /// Build the typed request.
    pub fn to_request(&self) -> Result<EventRequest, EventRequestBuilderError> {
        EventRequest::builder()
            .event_name(self.name.as_str())
            .event_type(self.event_type.as_str())
            .date_time(self.date_time.as_str())
            .location(self.location.as_str())
            .highlights(self.highlights.as_str())
            .target_audience(self.audience.as_str())
            .build()
    }
}

/// Standalone image options.
#[derive(Args, Debug, Clone)]
pub struct ImageArgs {
    /// What the picture should show
    #[arg(long)]
    pub description: String,

    /// File to write the image to
    #[arg(long)]
    pub out: PathBuf,
}
