//! Spotify OAuth Relay Library
//!
//! This library implements a minimal OAuth2 authorization-code relay for the
//! Spotify Web API. A browser is sent to Spotify's consent screen, the returned
//! authorization code is exchanged server-side for an access/refresh token pair,
//! and the pair is kept in memory behind an opaque session cookie so the
//! user's profile can be fetched on request.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the relay routes and the cookie protocol
//! - `config` - Configuration management and environment variables
//! - `management` - Session-to-token storage
//! - `server` - Router assembly and the HTTP listener
//! - `spotify` - Spotify accounts and Web API client
//! - `types` - Data structures and type definitions
//! - `utils` - Random token generation and helpers
//!
//! # Example
//!
//! ```
//! use sporlrelay::{config::{self, Config}, server};
//!
//! #[tokio::main]
//! async fn main() -> sporlrelay::Res<()> {
//!     config::load_env().await?;
//!     let config = Config::from_env()?;
//!     server::start_api_server(config, false).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object with Send + Sync bounds so that
/// errors from configuration, binding and serving can be propagated from
/// async contexts with `?`.
///
/// # Example
///
/// ```
/// use sporlrelay::Res;
///
/// async fn bind() -> Res<()> {
///     Ok(())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// success!("Session established");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 right after printing. Only meant
/// for fatal startup conditions such as missing configuration; request
/// handling never calls it.
///
/// # Example
///
/// ```
/// error!("config error: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems, e.g. a rejected callback or a failed
/// upstream call that is reported back to the browser.
///
/// # Example
///
/// ```
/// warning!("Token exchange failed: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
