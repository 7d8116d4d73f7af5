//! Settings UI for the recap screen recorder.
//!
//! This crate provides an egui-based settings dialog for configuring
//! capture resolution, encoding parameters, and output file options at
//! runtime. It is decoupled from the recorder implementation through
//! trait interfaces; the application implements [`VideoParams`] and
//! [`CursorCapture`] and processes the [`SettingsWindowAction`] values
//! returned from the dialog.
//!
//! The heart of the crate is [`ResolutionController`], the constraint
//! engine that keeps width, height, the normalized resolution slider, and
//! the active aspect-ratio class mutually consistent while deferring the
//! backend commit until input settles.

use recap_config::Profile;

// Trait interfaces for decoupling from the recorder
mod traits;
pub use traits::*;

// Aspect-ratio classification and pixel-budget sizing
pub mod aspect;
pub use aspect::{AspectClass, classify, size_for_pixel_budget};

// The resolution constraint engine
pub mod resolution;
pub use resolution::{Bounds, COMMIT_QUIET_PERIOD, ResolutionController, SLIDER_MAX};

// Add-layer companion panel
pub mod add_layer;
pub use add_layer::{AddLayerPanel, CameraMode, LayerKind, LayerSelection};

// Settings tabs
pub mod encode_tab;
pub mod save_tab;
pub mod section;
pub mod sidebar;
pub mod video_tab;

// SettingsUI struct and impl
mod settings_ui;
pub use settings_ui::SettingsUI;

pub use sidebar::SettingsTab;

// Re-export types that settings consumers need
pub use recap_config::{self as config, ContainerFormat, EncodePreset, RateMode};

/// A capture resolution in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total pixel count, used when switching aspect ratio so the output
    /// megapixel budget is preserved.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Result of processing a settings window frame.
///
/// The application processes these actions after the dialog has handled
/// its events for the frame.
#[derive(Debug, Clone)]
pub enum SettingsWindowAction {
    /// No action needed
    None,
    /// The dialog was closed; persist the enclosed profile snapshot
    SaveProfile(Profile),
}
