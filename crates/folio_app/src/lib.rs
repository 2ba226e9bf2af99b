//! Folio application
//!
//! Assembles the portfolio page from its configuration: a hero with
//! letter-by-letter headings and floating blobs, a parallax about section,
//! skill badges that fade in as they scroll into view, and a footer.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use folio_app::prelude::*;
//!
//! let preference = Rc::new(MemoryPreference::new(ColorScheme::Light));
//! let mut page = PageShell::new(SiteConfig::default(), preference).with_year(2030);
//! let viewport = Viewport::shared(1280.0, 800.0);
//!
//! page.mount(&viewport);
//! page.tick(1.0 / 60.0);
//! viewport.scroll_to(400.0);
//! assert_eq!(page.scroll_y(), 400.0);
//!
//! let html = render_html(&Node::from(page.render()));
//! assert!(html.contains("theme-toggle"));
//! ```

pub mod blobs;
pub mod config;
pub mod error;
pub mod page;
pub mod sections;

#[cfg(test)]
mod tests;

pub use blobs::{Blob, BlobField};
pub use config::{LayoutConfig, LinkConfig, ProfileConfig, SiteConfig, ThemeConfig};
pub use error::{FolioError, Result};
pub use page::{current_year, PageShell};
pub use sections::PageLayout;

/// Prelude module - import everything needed to build and drive a page
pub mod prelude {
    pub use crate::config::SiteConfig;
    pub use crate::error::{FolioError, Result};
    pub use crate::page::PageShell;
    pub use crate::sections::PageLayout;

    pub use folio_core::{event_types, SharedViewport, Viewport};
    pub use folio_layout::{render_html, to_json, Element, HtmlRenderer, Node};
    pub use folio_theme::{ColorScheme, FilePreference, MemoryPreference, ThemePreference};
}
