//! Grid settings management
//!
//! Column counts, responsive breakpoints, and startup options, loaded from
//! and saved to a JSON file in the application data directory.

use crate::{EngineError, Result};
use grid_model::DEFAULT_COLUMNS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Row height in pixels when no settings say otherwise
pub const DEFAULT_ROW_HEIGHT: u32 = 100;

/// A responsive breakpoint: at `min_width` pixels and wider, use `columns`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Breakpoint {
    pub name: String,
    pub min_width: u32,
    pub columns: u32,
}

impl Breakpoint {
    pub fn new(name: impl Into<String>, min_width: u32, columns: u32) -> Self {
        Self {
            name: name.into(),
            min_width,
            columns,
        }
    }
}

/// Grid settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GridSettings {
    /// Column count when no viewport width is known
    pub columns: u32,
    /// Row height in pixels, passed through to the layout surface
    pub row_height: u32,
    /// Responsive breakpoints
    pub breakpoints: Vec<Breakpoint>,
    /// Start from the seed composition rather than an empty grid
    pub seed_composition: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            row_height: DEFAULT_ROW_HEIGHT,
            breakpoints: vec![
                Breakpoint::new("lg", 1200, 5),
                Breakpoint::new("md", 996, 4),
                Breakpoint::new("sm", 768, 3),
                Breakpoint::new("xs", 480, 2),
                Breakpoint::new("xxs", 0, 1),
            ],
            seed_composition: true,
        }
    }
}

impl GridSettings {
    /// Columns for a viewport `width` pixels wide.
    ///
    /// Picks the breakpoint with the largest `min_width` not above `width`,
    /// falling back to `columns` when none applies.
    pub fn columns_for_width(&self, width: u32) -> u32 {
        self.breakpoints
            .iter()
            .filter(|bp| bp.min_width <= width)
            .max_by_key(|bp| bp.min_width)
            .map_or(self.columns, |bp| bp.columns)
    }

    /// Check column counts are usable
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            return Err(EngineError::InvalidSettings("columns must be at least 1".to_string()));
        }
        if let Some(bp) = self.breakpoints.iter().find(|bp| bp.columns == 0) {
            return Err(EngineError::InvalidSettings(format!(
                "breakpoint {} must have at least 1 column",
                bp.name
            )));
        }
        Ok(())
    }
}

/// Settings manager for loading and saving grid settings
pub struct SettingsManager {
    /// Path to the settings file
    settings_path: PathBuf,
    /// Current settings (cached)
    current: GridSettings,
}

impl SettingsManager {
    /// Create a settings manager for the given data directory
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            settings_path: data_dir.as_ref().join("settings.json"),
            current: GridSettings::default(),
        }
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Load settings from disk, or use defaults if the file is missing,
    /// unreadable as JSON, or invalid
    pub fn load_sync(&mut self) -> Result<&GridSettings> {
        if self.settings_path.exists() {
            let content = std::fs::read_to_string(&self.settings_path)?;
            match serde_json::from_str::<GridSettings>(&content) {
                Ok(settings) => match settings.validate() {
                    Ok(()) => self.current = settings,
                    Err(e) => {
                        tracing::warn!("Invalid grid settings, using defaults: {}", e);
                        self.current = GridSettings::default();
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to parse settings file, using defaults: {}", e);
                    self.current = GridSettings::default();
                }
            }
        } else {
            self.current = GridSettings::default();
        }
        Ok(&self.current)
    }

    /// Save current settings to disk
    pub fn save_sync(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.current)?;
        std::fs::write(&self.settings_path, content)?;
        Ok(())
    }

    pub fn get(&self) -> &GridSettings {
        &self.current
    }

    /// Replace settings and save
    pub fn update_sync(&mut self, settings: GridSettings) -> Result<()> {
        settings.validate()?;
        self.current = settings;
        self.save_sync()
    }

    /// Reset to defaults and save
    pub fn reset_sync(&mut self) -> Result<&GridSettings> {
        self.current = GridSettings::default();
        self.save_sync()?;
        Ok(&self.current)
    }
}
