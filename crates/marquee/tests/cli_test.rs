//! Command-line parsing.

use clap::Parser;
use marquee::cli::{Cli, Commands, OutputFormat};

#[test]
fn test_menu_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::try_parse_from(["marquee", "menu", "--ingredients", "kale, feta"])?;

    assert_eq!(cli.format, OutputFormat::Text);
    let Commands::Menu(args) = cli.command else {
        panic!("expected menu command");
    };
    assert_eq!(args.dish_type, "Main Course");
    assert_eq!(args.language, "English");
    assert!(args.cuisine.is_empty());
    assert!(args.image_out.is_none());

    let request = args.to_request()?;
    assert_eq!(request.ingredients(), "kale, feta");
    Ok(())
}

#[test]
fn test_menu_requires_ingredients() {
    assert!(Cli::try_parse_from(["marquee", "menu"]).is_err());
}

#[test]
fn test_blank_ingredients_fail_validation() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::try_parse_from(["marquee", "menu", "--ingredients", "   "])?;
    let Commands::Menu(args) = cli.command else {
        panic!("expected menu command");
    };
    assert!(args.to_request().is_err());
    Ok(())
}

#[test]
fn test_appointment_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::try_parse_from([
        "marquee",
        "appointment",
        "--service",
        "Haircut",
        "--time",
        "2025-03-14T15:00",
        "--ics",
        "booking.ics",
    ])?;

    let Commands::Appointment(args) = cli.command else {
        panic!("expected appointment command");
    };
    assert_eq!(args.business_type, "Salon");
    assert_eq!(args.language, "English");
    assert_eq!(args.ics.as_deref(), Some(std::path::Path::new("booking.ics")));
    assert!(args.to_request()?.customer_message().is_empty());
    Ok(())
}

#[test]
fn test_event_maps_to_request() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::try_parse_from([
        "marquee",
        "event",
        "--name",
        "Jazz Night",
        "--event-type",
        "Concert",
        "--date-time",
        "Friday 8pm",
        "--location",
        "The Blue Room",
        "--audience",
        "Locals",
        "--format",
        "json",
    ])?;

    assert_eq!(cli.format, OutputFormat::Json);
    let Commands::Event(args) = cli.command else {
        panic!("expected event command");
    };
    let request = args.to_request()?;
    assert_eq!(request.event_name(), "Jazz Night");
    assert_eq!(request.target_audience(), "Locals");
    assert!(request.highlights().is_empty());
    Ok(())
}

#[test]
fn test_seasonal_image_needs_generate() {
    assert!(Cli::try_parse_from(["marquee", "seasonal", "--image-out", "special.png"]).is_err());
    assert!(
        Cli::try_parse_from([
            "marquee",
            "seasonal",
            "--generate",
            "--image-out",
            "special.png"
        ])
        .is_ok()
    );
}

#[test]
fn test_global_config_flag() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::try_parse_from(["marquee", "config", "--config", "custom.toml"])?;
    assert!(matches!(cli.command, Commands::Config));
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("custom.toml")));
    Ok(())
}
