//! Theme preference stores
//!
//! The page reads the current scheme from a [`ThemePreference`] and calls
//! the setter when the user toggles. Persistence is the store's business.

use std::cell::Cell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::scheme::ColorScheme;

/// Persisted light/dark preference
pub trait ThemePreference {
    /// Current scheme
    fn get_theme(&self) -> ColorScheme;

    /// Store a new scheme
    fn set_theme(&self, scheme: ColorScheme) -> Result<()>;
}

/// Preference that lives for the process only
#[derive(Debug, Default)]
pub struct MemoryPreference {
    scheme: Cell<ColorScheme>,
    writes: Cell<usize>,
}

impl MemoryPreference {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme: Cell::new(scheme),
            writes: Cell::new(0),
        }
    }

    /// Number of `set_theme` calls so far
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ThemePreference for MemoryPreference {
    fn get_theme(&self) -> ColorScheme {
        self.scheme.get()
    }

    fn set_theme(&self, scheme: ColorScheme) -> Result<()> {
        self.scheme.set(scheme);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct StoredPreference {
    theme: ColorScheme,
}

/// Preference persisted in a small TOML file (`theme = "dark"`)
#[derive(Debug)]
pub struct FilePreference {
    path: PathBuf,
    scheme: Cell<ColorScheme>,
}

impl FilePreference {
    /// Open the store, reading the file if it exists
    ///
    /// A missing file yields `default`; the file is created on first write.
    pub fn open(path: impl Into<PathBuf>, default: ColorScheme) -> Result<Self> {
        let path = path.into();
        let scheme = match fs::read_to_string(&path) {
            Ok(contents) => toml::from_str::<StoredPreference>(&contents)?.theme,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no stored theme preference");
                default
            }
            Err(source) => return Err(ThemeError::Io { path, source }),
        };

        Ok(Self {
            path,
            scheme: Cell::new(scheme),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemePreference for FilePreference {
    fn get_theme(&self) -> ColorScheme {
        self.scheme.get()
    }

    fn set_theme(&self, scheme: ColorScheme) -> Result<()> {
        let contents = toml::to_string(&StoredPreference { theme: scheme })?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ThemeError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, contents).map_err(|source| ThemeError::Io {
            path: self.path.clone(),
            source,
        })?;

        self.scheme.set(scheme);
        tracing::debug!(path = %self.path.display(), %scheme, "theme preference saved");
        Ok(())
    }
}
