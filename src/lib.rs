//! photogrid: a terminal photo browser for Unsplash-style APIs.
//!
//! photogrid provides:
//! - A feed of photos loaded from a Photo Service on startup
//! - Debounced free-text search: one request per pause in typing, always for
//!   the last text typed
//! - A detail dialog fetched lazily when a photo is selected
//! - Themed ANSI rendering of the grid, the search bar, and the dialog

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//!  stdin lines ──▶ main.rs ──▶ runtime::FeedController
//!                                 │  dispatch(Event)
//!                                 ▼
//!                          app::handle_event ──▶ AppState
//!                                 │  Vec<Action>
//!              ┌──────────────────┴──────────────────┐
//!              ▼                                     ▼
//!     runtime::Debouncer                    worker::FetchWorker
//!     (quiet-period timer)                  (service::PhotoService)
//!              │ DebounceElapsed                     │ Fetched
//!              └──────────────▶ event channel ◀──────┘
//!
//!  AppState ──▶ compute_viewmodel ──▶ ui::render ──▶ stdout
//! ```
//!
//! Records and errors live in [`domain`]; platform paths in
//! [`infrastructure`]; the rotating log file in [`observability`].
//!
//! # Configuration
//!
//! Settings are read from `<config_dir>/photogrid/config.toml`:
//!
//! ```toml
//! api_base_url = "https://api.unsplash.com"
//! access_key = "your-access-key"
//! debounce_ms = 300
//! columns = 3
//! theme = "material-dark"
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use photogrid::{handle_event, initialize, Action, Config, Event};
//! use photogrid::worker::FetchRequest;
//!
//! let mut state = initialize(&Config::default());
//!
//! let (_, actions) = handle_event(&mut state, &Event::Mounted);
//! assert_eq!(actions, vec![Action::Fetch(FetchRequest::LoadAll)]);
//!
//! let (_, actions) = handle_event(&mut state, &Event::QueryChanged("cat".into()));
//! assert!(matches!(actions[0], Action::ScheduleSearch { .. }));
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod runtime;
pub mod service;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, SelectionState};
pub use domain::{ImageDetail, ImageSummary, PhotoGridError, Result};
pub use runtime::FeedController;
pub use service::{HttpPhotoService, PhotoService};
pub use ui::Theme;

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default Photo Service base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.unsplash.com";

/// Application configuration.
///
/// Every field has a default, so a partial (or absent) config file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root URL of the Photo Service. Default: `https://api.unsplash.com`
    pub api_base_url: String,

    /// API access key sent as `Authorization: Client-ID <key>`.
    pub access_key: Option<String>,

    /// Quiet period before a typed query is searched, in milliseconds.
    /// Default: 300
    pub debounce_ms: u64,

    /// Number of grid columns. Default: 3
    pub columns: usize,

    /// Viewport height used for layout. Default: 40
    pub rows: usize,

    /// Viewport width used for layout. Default: 100
    pub cols: usize,

    /// Built-in theme name.
    ///
    /// Options: `material-dark`, `material-light`. Ignored if `theme_file`
    /// is set.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme`.
    pub theme_file: Option<String>,

    /// Log filter: `trace`, `debug`, `info`, `warn`, `error`, or any
    /// `EnvFilter` directive. Default: `"info"`
    pub trace_level: String,

    /// Log file path. Default: `<data_dir>/photogrid/photogrid.log`
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            access_key: None,
            debounce_ms: 300,
            columns: app::state::DEFAULT_COLUMNS,
            rows: 40,
            cols: 100,
            theme: None,
            theme_file: None,
            trace_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`PhotoGridError::Config`] on invalid TOML or mistyped values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use photogrid::Config;
    ///
    /// let config = Config::from_toml("debounce_ms = 150\ncolumns = 4\n").unwrap();
    /// assert_eq!(config.debounce_ms, 150);
    /// assert_eq!(config.columns, 4);
    /// assert_eq!(config.api_base_url, "https://api.unsplash.com");
    /// ```
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| PhotoGridError::Config(e.to_string()))
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`PhotoGridError::Io`] if the file cannot be read, or
    /// [`PhotoGridError::Config`] if it cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Loads the default config file, or defaults if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file exists and cannot be read or parsed.
    pub fn load_or_default() -> Result<Self> {
        match infrastructure::default_config_path() {
            Some(path) if path.exists() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Quiet period as a [`Duration`].
    #[must_use]
    pub const fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Builds the initial application state.
///
/// Resolves the theme (file, then name, then default) and the grid width.
/// Theme problems are logged and fall back to the default theme.
///
/// # Example
///
/// ```rust
/// use photogrid::{initialize, Config};
///
/// let config = Config {
///     theme: Some("material-light".to_string()),
///     columns: 4,
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.theme.name, "material-light");
/// assert_eq!(state.columns, 4);
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing photogrid");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme).with_columns(config.columns)
}
