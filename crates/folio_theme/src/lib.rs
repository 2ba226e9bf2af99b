//! Folio theming
//!
//! Light and dark [`ColorScheme`]s, the [`ColorTokens`] each one resolves
//! to, and the [`ThemePreference`] stores that remember the user's choice.

pub mod error;
pub mod preference;
pub mod scheme;
pub mod tokens;

pub use error::{Result, ThemeError};
pub use preference::{FilePreference, MemoryPreference, ThemePreference};
pub use scheme::ColorScheme;
pub use tokens::{ColorTokens, ThemeState};
