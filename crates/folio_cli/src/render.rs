//! Headless page simulation
//!
//! Mounts the page in a viewport of the requested size, scrolls it, and
//! steps the animation clock frame by frame up to the requested time.

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use folio_app::prelude::*;

/// Longest animation time a snapshot may simulate, in seconds
pub const MAX_SIMULATED_SECONDS: f32 = 600.0;
/// Frame rates above this are simulated at this rate
pub const MAX_FPS: u32 = 240;

/// Viewport and timing for one snapshot
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: f32,
    pub height: f32,
    pub scroll: f32,
    /// Seconds of animation to simulate
    pub time: f32,
    pub fps: u32,
    /// Forces a scheme instead of reading the preference
    pub theme: Option<ColorScheme>,
    /// Preference file; in-memory when unset
    pub preference: Option<PathBuf>,
    pub year: Option<i32>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            scroll: 0.0,
            time: 2.0,
            fps: 60,
            theme: None,
            preference: None,
            year: None,
        }
    }
}

/// Build, mount and advance a page
pub fn simulate(config: SiteConfig, options: &RenderOptions) -> Result<PageShell> {
    if !options.time.is_finite() || !(0.0..=MAX_SIMULATED_SECONDS).contains(&options.time) {
        anyhow::bail!(
            "Invalid time {}: expected 0 to {} seconds",
            options.time,
            MAX_SIMULATED_SECONDS
        );
    }

    let default_scheme = config.theme.default_scheme;
    let preference: Rc<dyn ThemePreference> = match (&options.theme, &options.preference) {
        (Some(scheme), _) => Rc::new(MemoryPreference::new(*scheme)),
        (None, Some(path)) => Rc::new(
            FilePreference::open(path, default_scheme)
                .with_context(|| format!("Failed to open preference {}", path.display()))?,
        ),
        (None, None) => Rc::new(MemoryPreference::new(default_scheme)),
    };

    let mut page = PageShell::new(config, preference);
    if let Some(year) = options.year {
        page = page.with_year(year);
    }

    let viewport = Viewport::shared(options.width, options.height);
    page.mount(&viewport);
    let reached = viewport.scroll_to(options.scroll);
    if reached != options.scroll {
        tracing::warn!(
            requested = options.scroll,
            reached,
            "scroll position clamped to the document"
        );
    }

    let fps = options.fps.clamp(1, MAX_FPS);
    let frames = (options.time * fps as f32).round() as u32;
    if frames > 0 {
        let dt = options.time / frames as f32;
        for _ in 0..frames {
            page.tick(dt);
        }
    }
    tracing::debug!(frames, now = page.now(), "simulation finished");

    Ok(page)
}
