//! User preference values exchanged with the preferences collaborator.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_WINDOW_WIDTH: f64 = 740.0;
const DEFAULT_WINDOW_HEIGHT: f64 = 600.0;

/// Window geometry remembered between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuiSettings {
    window_width: f64,
    window_height: f64,
    /// Absent until the window has been positioned once.
    window_coordinates: Option<(i32, i32)>,
}

impl GuiSettings {
    pub fn new(window_width: f64, window_height: f64, x: i32, y: i32) -> Self {
        Self {
            window_width,
            window_height,
            window_coordinates: Some((x, y)),
        }
    }

    pub fn window_width(&self) -> f64 {
        self.window_width
    }

    pub fn window_height(&self) -> f64 {
        self.window_height
    }

    pub fn window_coordinates(&self) -> Option<(i32, i32)> {
        self.window_coordinates
    }
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_coordinates: None,
        }
    }
}

/// Simple key-value settings owned by the user, not by the model logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPrefs {
    gui_settings: GuiSettings,
    address_book_file_path: PathBuf,
}

impl UserPrefs {
    pub fn gui_settings(&self) -> &GuiSettings {
        &self.gui_settings
    }

    pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.gui_settings = gui_settings;
    }

    pub fn address_book_file_path(&self) -> &Path {
        &self.address_book_file_path
    }

    pub fn set_address_book_file_path(&mut self, path: PathBuf) {
        self.address_book_file_path = path;
    }

    /// Replaces all preference values with `other`.
    pub fn reset_data(&mut self, other: UserPrefs) {
        *self = other;
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            gui_settings: GuiSettings::default(),
            address_book_file_path: PathBuf::from("data/clientbook.json"),
        }
    }
}
