//! Marquee: structured marketing copy for small businesses.
//!
//! Turns dish details, appointment context and event details into
//! ready-to-post copy by asking Gemini for JSON that matches a fixed schema
//! per content domain. This crate bundles the workspace crates, the layered
//! configuration and the command-line front end.
//!
//! ```no_run
//! use marquee::{DecodePolicy, GeminiConfig, GenerationClient, MenuRequest};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GenerationClient::from_gemini(GeminiConfig::from_env()?, DecodePolicy::Lenient)?;
//! let request = MenuRequest::builder()
//!     .ingredients("mushrooms, truffle oil")
//!     .dish_type("Main Course")
//!     .build()?;
//! let menu = client.generate_structured(&request).await?;
//! println!("{}", menu.menu_description());
//! # Ok(())
//! # }
//! ```

pub mod cli;
mod config;
mod observability;

pub use config::{ENV_PREFIX, LogFormat, MarqueeConfig};
pub use observability::{DEFAULT_FILTER, init_tracing};

pub use marquee_core::*;
pub use marquee_error::*;
pub use marquee_interface::*;
pub use marquee_models::*;
