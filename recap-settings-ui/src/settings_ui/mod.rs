//! SettingsUI struct and implementation.
//!
//! This module contains the main SettingsUI manager struct and its
//! methods for displaying the settings window and syncing state with the
//! encoder backend and the settings profile.

use std::collections::HashSet;

use recap_config::{ContainerFormat, EncodePreset, RateMode};

use crate::resolution::ResolutionController;
use crate::sidebar::SettingsTab;

mod display;
mod state;

/// Settings UI manager using egui
pub struct SettingsUI {
    /// Whether the settings window is currently visible
    pub visible: bool,

    /// Currently selected sidebar tab
    pub selected_tab: SettingsTab,

    /// The resolution constraint engine
    pub resolution: ResolutionController,

    /// Working frame rate
    pub temp_fps: f32,
    /// Working keyframe interval in seconds; gopMax is derived from this
    /// and the frame rate
    pub temp_keyframe_secs: f32,
    /// Working bitrate in bits per second
    pub temp_bitrate: u32,
    /// Working rate-control mode
    pub temp_rate_mode: RateMode,
    /// Working encoder preset
    pub temp_preset: EncodePreset,
    /// Working cursor-capture flag (reverted when the backend refuses)
    pub temp_rec_cursor: bool,

    /// Working output directory
    pub temp_video_dir: String,
    /// Working output filename (no extension)
    pub temp_filename: String,
    /// Working container format
    pub temp_file_format: ContainerFormat,

    /// Section IDs toggled away from their default collapse state
    pub collapsed_sections: HashSet<String>,
}
