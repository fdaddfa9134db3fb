//! Command handlers.
//!
//! Handlers are generic over the model driver and the output sink so they
//! run the same against Gemini and against a scripted driver.

use super::render::write_response;
use super::{AppointmentArgs, Commands, EventArgs, ImageArgs, MenuArgs, OutputFormat, SeasonalArgs};
use anyhow::Context;
use marquee_core::{
    CalendarEvent, HasImageSuggestion, InlineImage, MenuRequest, SeasonalRequest,
    parse_start_time,
};
use marquee_error::InputError;
use marquee_interface::MarqueeDriver;
use marquee_models::GenerationClient;
use std::io::Write;
use std::path::Path;
use tracing::{info, instrument, warn};

/// Run one generation command, printing results to `out`.
///
/// # Errors
///
/// Invalid input, a failed text generation, or a file that could not be
/// written. A missing image only produces a note.
pub async fn run_command<D, W>(
    client: &GenerationClient<D>,
    command: &Commands,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()>
where
    D: MarqueeDriver,
    W: Write,
{
    match command {
        Commands::Menu(args) => handle_menu(client, args, format, out).await,
        Commands::Seasonal(args) => handle_seasonal(client, args, format, out).await,
        Commands::Appointment(args) => handle_appointment(client, args, format, out).await,
        Commands::Event(args) => handle_event(client, args, format, out).await,
        Commands::Image(args) => handle_image(client, args, format, out).await,
        Commands::Config => anyhow::bail!("`config` does not talk to a model"),
    }
}

#[instrument(skip_all)]
async fn handle_menu<D, W>(
    client: &GenerationClient<D>,
    args: &MenuArgs,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()>
where
    D: MarqueeDriver,
    W: Write,
{
    let request = args.to_request().map_err(InputError::from)?;
    let menu = client.generate_structured(&request).await?;
    write_response(out, format, &menu)?;

    if let Some(path) = &args.image_out {
        save_visual(client, &menu, path, format, out).await?;
    }
    Ok(())
}

#[instrument(skip_all, fields(generate = args.generate))]
async fn handle_seasonal<D, W>(
    client: &GenerationClient<D>,
    args: &SeasonalArgs,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()>
where
    D: MarqueeDriver,
    W: Write,
{
    let suggestion = client.generate_structured(&SeasonalRequest).await?;

    if !args.generate {
        return write_response(out, format, &suggestion);
    }

    if suggestion.ingredients().trim().is_empty() {
        return Err(InputError::new("The seasonal suggestion came back without ingredients").into());
    }
    let request = MenuRequest::from_seasonal(&suggestion, args.language.as_str());
    info!(dish = %suggestion.dish_name(), "Generating seasonal special");
    let menu = client.generate_structured(&request).await?;

    match format {
        OutputFormat::Json => {
            let combined = serde_json::json!({ "suggestion": suggestion, "menu": menu });
            serde_json::to_writer_pretty(&mut *out, &combined)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            write_response(out, format, &suggestion)?;
            write_response(out, format, &menu)?;
        }
    }

    if let Some(path) = &args.image_out {
        save_visual(client, &menu, path, format, out).await?;
    }
    Ok(())
}

#[instrument(skip_all, fields(service = %args.service))]
async fn handle_appointment<D, W>(
    client: &GenerationClient<D>,
    args: &AppointmentArgs,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()>
where
    D: MarqueeDriver,
    W: Write,
{
    let request = args.to_request().map_err(InputError::from)?;

    // Reject an unreadable time before spending a model call on it.
    let calendar = match &args.ics {
        Some(path) => {
            let start = parse_start_time(&args.time)?;
            let event = CalendarEvent::for_appointment(&args.service, &args.business_type, start)?;
            Some((path, event))
        }
        None => None,
    };

    let response = client.generate_structured(&request).await?;
    write_response(out, format, &response)?;

    if let Some((path, event)) = calendar {
        std::fs::write(path, event.to_ics())
            .with_context(|| format!("Failed to write calendar file {}", path.display()))?;
        note(out, format, format_args!("Calendar file saved to {}", path.display()))?;
    }
    Ok(())
}

#[instrument(skip_all, fields(event = %args.name))]
async fn handle_event<D, W>(
    client: &GenerationClient<D>,
    args: &EventArgs,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()>
where
    D: MarqueeDriver,
    W: Write,
{
    let request = args.to_request().map_err(InputError::from)?;
    let event = client.generate_structured(&request).await?;
    write_response(out, format, &event)?;

    if let Some(path) = &args.image_out {
        save_visual(client, &event, path, format, out).await?;
    }
    Ok(())
}

#[instrument(skip_all, fields(out = %args.out.display()))]
async fn handle_image<D, W>(
    client: &GenerationClient<D>,
    args: &ImageArgs,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()>
where
    D: MarqueeDriver,
    W: Write,
{
    let description = args.description.trim();
    if description.is_empty() {
        return Err(InputError::new("An image description is required").into());
    }

    let image = client
        .try_generate_image(description)
        .await?
        .context("The image model returned no image")?;
    write_image(&image, &args.out)?;
    note(out, format, format_args!("Image saved to {}", args.out.display()))
}

/// Render the response's suggested visual into `path`.
///
/// A missing or undecodable image leaves the text result standing and only
/// prints a note.
async fn save_visual<D, R, W>(
    client: &GenerationClient<D>,
    response: &R,
    path: &Path,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()>
where
    D: MarqueeDriver,
    R: HasImageSuggestion + Sync,
    W: Write,
{
    let Some(image) = client.visualize(response).await else {
        return note(out, format, format_args!("Image unavailable; the text above still stands"));
    };

    match image.to_bytes() {
        Ok(bytes) => {
            std::fs::write(path, bytes)
                .with_context(|| format!("Failed to write image {}", path.display()))?;
            note(out, format, format_args!("Image saved to {}", path.display()))
        }
        Err(e) => {
            warn!(error = %e, "Image payload could not be decoded");
            note(out, format, format_args!("Image unavailable; the text above still stands"))
        }
    }
}

fn write_image(image: &InlineImage, path: &Path) -> anyhow::Result<()> {
    let bytes = image.to_bytes()?;
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write image {}", path.display()))?;
    info!(mime_type = %image.mime_type(), path = %path.display(), "Image written");
    Ok(())
}

// Notes would corrupt JSON output, so they only appear in text mode.
fn note<W: Write>(
    out: &mut W,
    format: OutputFormat,
    message: std::fmt::Arguments<'_>,
) -> anyhow::Result<()> {
    if format == OutputFormat::Text {
        writeln!(out, "{}", message)?;
    }
    Ok(())
}
