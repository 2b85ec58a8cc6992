//! # Window Theme Library
//!
//! Theme resolution for the launcher's window chrome. Theme files are read
//! from disk into immutable [`Theme`] records, kept in a [`ThemeRegistry`],
//! and handed to the rendering layer as shared snapshots of the active theme.
//!
//! ## Modules
//!
//! - [`color`] - Hex color decoding into packed RGBA values
//! - [`alignment`] - Alignment tokens used by region elements
//! - [`element`] - Style extraction for a single window region
//! - [`loader`] - Theme file loading with tolerant XML parsing
//! - [`registry`] - Named theme registry and active theme selection
//! - [`settings`] - Startup settings and theme directory resolution
//! - [`types`] - Theme and style element records
//! - [`xml`] - Element tree reader backing the loader
//! - [`error`] - Error types for decoding and loading
//!
//! ## Theme file layout
//!
//! ```text
//! <WindowTheme name="retro">
//!   <text-default><color>777777</color><path>font.ttf</path></text-default>
//!   <window>
//!     <spacer><color>C6C7C6</color></spacer>
//!     <arrow><path>arrow.svg</path></arrow>
//!     <title><color>999999</color><alignment>left</alignment></title>
//!     ...
//!   </window>
//! </WindowTheme>
//! ```

pub mod alignment;
pub mod color;
pub mod element;
pub mod error;
pub mod loader;
pub mod registry;
pub mod settings;
pub mod types;
pub mod xml;

pub use alignment::Alignment;
pub use color::Rgba;
pub use error::{ThemeError, ThemeResult};
pub use loader::{LoadedTheme, ThemeLoader};
pub use registry::{ScanReport, ThemeRegistry};
pub use settings::RegistrySettings;
pub use types::{DefaultText, StyleElement, Theme};
