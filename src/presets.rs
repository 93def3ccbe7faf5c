//! Preset store
//!
//! Saved driver line-ups plus raid favorites, persisted together in one YAML
//! document. Unlike the throwaway engine state, this is the only data in the
//! crate with a lifecycle of its own.

use std::{fs, path::Path};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{gold::Gold, raids::Difficulty};

/// Errors from loading or saving the preset store.
#[derive(Debug, Error)]
pub enum PresetStoreError {
    /// IO error reading or writing the store file.
    #[error("failed to read or write preset file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or serialization error.
    #[error("failed to parse preset file: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// No preset with the given name exists.
    #[error("no preset named {0:?}")]
    UnknownPreset(String),
}

/// A saved driver line-up for a raid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Display name chosen by the user; also the preset's identity.
    pub name: String,

    /// Raid this preset belongs to.
    pub raid_id: String,

    /// Difficulty the preset was saved for.
    pub difficulty: Difficulty,

    /// Number of drivers.
    pub driver_count: usize,

    /// Price each buyer pays, in gold.
    pub price_per_buyer: Gold,

    /// Driver display names, by driver id.
    #[serde(default)]
    pub driver_names: Vec<String>,

    /// When the preset was saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

/// On-disk user data: presets plus raid favorites.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetStore {
    #[serde(default)]
    presets: Vec<Preset>,

    #[serde(default)]
    favorites: Vec<String>,

    #[serde(default)]
    show_favorites_only: bool,
}

impl PresetStore {
    /// Load a store from `path`. A missing file yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns a [`PresetStoreError`] if the file exists but cannot be read
    /// or parsed.
    pub fn load(path: &Path) -> Result<Self, PresetStoreError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;

        Ok(serde_norway::from_str(&contents)?)
    }

    /// Write the store to `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`PresetStoreError`] if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), PresetStoreError> {
        let contents = serde_norway::to_string(self)?;

        Ok(fs::write(path, contents)?)
    }

    /// All saved presets, in insertion order.
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Presets saved for one raid and difficulty.
    pub fn presets_for_raid(
        &self,
        raid_id: &str,
        difficulty: Difficulty,
    ) -> impl Iterator<Item = &Preset> {
        self.presets
            .iter()
            .filter(move |preset| preset.raid_id == raid_id && preset.difficulty == difficulty)
    }

    /// Find a preset by name.
    pub fn preset(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|preset| preset.name == name)
    }

    /// Add a preset. An existing preset with the same name is replaced.
    pub fn add_preset(&mut self, preset: Preset) {
        self.presets.retain(|existing| existing.name != preset.name);
        self.presets.push(preset);
    }

    /// Apply `update` to the preset named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`PresetStoreError::UnknownPreset`] if no such preset exists.
    pub fn update_preset(
        &mut self,
        name: &str,
        update: impl FnOnce(&mut Preset),
    ) -> Result<(), PresetStoreError> {
        match self.presets.iter_mut().find(|preset| preset.name == name) {
            Some(preset) => {
                update(preset);
                Ok(())
            }
            None => Err(PresetStoreError::UnknownPreset(name.to_owned())),
        }
    }

    /// Remove and return the preset named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`PresetStoreError::UnknownPreset`] if no such preset exists.
    pub fn remove_preset(&mut self, name: &str) -> Result<Preset, PresetStoreError> {
        match self.presets.iter().position(|preset| preset.name == name) {
            Some(idx) => Ok(self.presets.remove(idx)),
            None => Err(PresetStoreError::UnknownPreset(name.to_owned())),
        }
    }

    /// Whether a raid is marked as a favorite.
    pub fn is_favorite(&self, raid_id: &str) -> bool {
        self.favorites.iter().any(|id| id == raid_id)
    }

    /// Mark a raid as a favorite. Adding twice is a no-op.
    pub fn add_favorite(&mut self, raid_id: &str) {
        if !self.is_favorite(raid_id) {
            self.favorites.push(raid_id.to_owned());
        }
    }

    /// Unmark a raid as a favorite.
    pub fn remove_favorite(&mut self, raid_id: &str) {
        self.favorites.retain(|id| id != raid_id);
    }

    /// Toggle a raid's favorite status, returning the new status.
    pub fn toggle_favorite(&mut self, raid_id: &str) -> bool {
        if self.is_favorite(raid_id) {
            self.remove_favorite(raid_id);
            false
        } else {
            self.add_favorite(raid_id);
            true
        }
    }

    /// Favorite raid ids, in the order they were added.
    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    /// Whether raid listings should be filtered to favorites.
    pub fn show_favorites_only(&self) -> bool {
        self.show_favorites_only
    }

    /// Set the favorites-only listing preference.
    pub fn set_show_favorites_only(&mut self, show_only: bool) {
        self.show_favorites_only = show_only;
    }
}
