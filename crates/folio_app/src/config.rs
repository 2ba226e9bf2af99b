//! Site configuration (`folio.toml`)
//!
//! Every field has a default, so a missing or partial file still yields a
//! complete site.
//!
//! ```toml
//! title = "Alex Doe"
//! skills = ["Rust", "TypeScript"]
//!
//! [profile]
//! greeting = "Hello, I'm Alex"
//! tagline = "developer"
//!
//! [[links]]
//! label = "GitHub"
//! url = "https://github.com/alexdoe"
//! icon = "github"
//!
//! [theme]
//! default = "dark"
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use folio_theme::ColorScheme;
use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document title
    pub title: String,
    pub skills: Vec<String>,
    pub profile: ProfileConfig,
    pub links: Vec<LinkConfig>,
    pub layout: LayoutConfig,
    pub theme: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Alex Doe".to_string(),
            skills: [
                "JavaScript",
                "React",
                "Next.js",
                "TypeScript",
                "Node.js",
                "C/C++",
                "Tailwind",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            profile: ProfileConfig::default(),
            links: vec![
                LinkConfig::new("GitHub", "https://github.com/alexdoe", "github"),
                LinkConfig::new("LinkedIn", "https://www.linkedin.com/in/alexdoe/", "linkedin"),
                LinkConfig::new("Email", "mailto:alex@example.com", "mail"),
            ],
            layout: LayoutConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| FolioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Load from a TOML file, or fall back to the defaults if it is absent
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match Self::load(path) {
            Err(FolioError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "configuration not found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Hero and about-section text
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Hero heading, revealed letter by letter
    pub greeting: String,
    /// Hero subheading, revealed after `layout.tagline_delay`
    pub tagline: String,
    pub about_title: String,
    pub about_url: Option<String>,
    /// About paragraphs, in order
    pub about: Vec<String>,
    /// Closing line of the about section, followed by a link
    pub outro: String,
    pub outro_link_label: String,
    pub outro_url: Option<String>,
    pub skills_title: String,
    pub footer: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            greeting: "Hello, I'm Alex".to_string(),
            tagline: "developer".to_string(),
            about_title: "About Me".to_string(),
            about_url: None,
            about: vec![
                "My name is Alex. I'm a full-stack web developer with a soft spot for \
                 data structures and algorithms."
                    .to_string(),
                "I love coding in JavaScript, TypeScript and C/C++, and have worked with \
                 React, Next.js, Express and MongoDB."
                    .to_string(),
            ],
            outro: "When I'm not coding, you can find me over".to_string(),
            outro_link_label: "here".to_string(),
            outro_url: None,
            skills_title: "Skills".to_string(),
            footer: "All rights reserved :)".to_string(),
        }
    }
}

/// An outbound profile link
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkConfig {
    pub label: String,
    pub url: String,
    /// Icon name, rendered as a placeholder of `icon-<name>`
    #[serde(default = "default_link_icon")]
    pub icon: String,
}

fn default_link_icon() -> String {
    "link".to_string()
}

impl LinkConfig {
    pub fn new(label: &str, url: &str, icon: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Geometry and decoration settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height of the about section in layout units
    pub about_height: f32,
    pub skills_height: f32,
    pub footer_height: f32,
    /// Seconds before the tagline starts revealing
    pub tagline_delay: f32,
    pub blob_count: usize,
    pub blob_seed: u64,
    /// Footer year; the current year when unset
    pub year: Option<i32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            about_height: 720.0,
            skills_height: 480.0,
            footer_height: 96.0,
            tagline_delay: 0.5,
            blob_count: 10,
            blob_seed: 0x5EED,
            year: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Scheme used until the user toggles
    #[serde(rename = "default")]
    pub default_scheme: ColorScheme,
}
