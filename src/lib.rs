//! Spotify Lyrics Relay Library
//!
//! This library implements a small HTTP relay in front of Spotify's lyrics
//! and search APIs. It exposes endpoints for fetching lyrics by track ID and
//! for resolving a track by musician and title before redirecting to the
//! direct lyrics endpoint.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the relay endpoints
//! - `config` - Configuration management and environment variables
//! - `server` - HTTP server setup and routing
//! - `spotify` - Spotify API client (token exchange, lyrics, search)
//! - `types` - Data structures and type definitions
//! - `utils` - Track selection logic and helpers
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use lyrelay::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> lyrelay::Res<()> {
//!     config::load_env().await?;
//!     let cfg = config::Config::from_env()?;
//!     server::start_api_server(Arc::new(cfg)).await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
///
/// # Example
///
/// ```
/// use lyrelay::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a timestamp and a blue INFO level.
///
/// Used for general status updates such as incoming requests and resolved
/// track IDs.
///
/// # Example
///
/// ```
/// info!("Server started on {}", addr);
/// info!("Fetching lyrics for track ID: {}", track_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
      "{} [{}] {}",
      ::chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
      "INFO".blue().bold(),
      std::format_args!($($arg)*)
    );
  })
}

/// Prints a success message with a timestamp and a green OK level.
///
/// Used to confirm completed startup steps such as a loaded configuration.
///
/// # Example
///
/// ```
/// success!("Configuration loaded");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
      "{} [{}] {}",
      ::chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
      "OK".green().bold(),
      std::format_args!($($arg)*)
    );
  })
}

/// Prints a warning message with a timestamp and a yellow WARN level.
///
/// Used for expected but noteworthy outcomes, such as a search that
/// returned no tracks.
///
/// # Example
///
/// ```
/// warning!("No tracks found");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
      "{} [{}] {}",
      ::chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
      "WARN".yellow().bold(),
      std::format_args!($($arg)*)
    );
  })
}

/// Prints an error message with a timestamp and a red ERROR level.
///
/// Unlike [`error!`], this macro does not terminate the process. Request
/// handlers use it to report upstream failures that only abort the current
/// request.
///
/// # Example
///
/// ```
/// failure!("Error fetching lyrics for track ID: {} - {}", track_id, e);
/// ```
#[macro_export]
macro_rules! failure {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
      "{} [{}] {}",
      ::chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
      "ERROR".red().bold(),
      std::format_args!($($arg)*)
    );
  })
}

/// Prints a fatal error message and exits the program.
///
/// Terminates the process with exit code 1 immediately after printing.
/// Reserved for unrecoverable startup errors such as a missing
/// configuration variable or an unparsable bind address; per-request
/// failures use [`failure!`] instead.
///
/// # Example
///
/// ```
/// error!("Cannot load environment. Err: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
      "{} [{}] {}",
      ::chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
      "FATAL".red().bold(),
      std::format_args!($($arg)*)
    );
    std::process::exit(1);
  })
}
