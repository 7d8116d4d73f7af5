//! Trait definitions for settings UI dependencies.
//!
//! These traits define the interface between the settings UI crate and
//! the recorder implementation. The main crate implements them to give
//! the dialog access to the encoder parameter backend, the cursor
//! capture flag, and the available capture sources.

use crate::add_layer::CameraMode;
use recap_config::{EncodePreset, RateMode};

/// Encoder parameter backend.
///
/// Implemented by the video synthesis engine. Setters take effect
/// immediately; the dialog is responsible for debouncing resolution
/// changes so `set_size` sees at most one call per quiet period.
pub trait VideoParams {
    /// Current capture size as (width, height) in pixels
    fn size(&self) -> (u32, u32);

    /// Set the capture size in pixels
    fn set_size(&mut self, width: u32, height: u32);

    /// Current frame rate
    fn frame_rate(&self) -> f32;

    /// Set the frame rate
    fn set_frame_rate(&mut self, fps: f32);

    /// Current bitrate in bits per second
    fn bitrate(&self) -> u32;

    /// Set the bitrate in bits per second
    fn set_bitrate(&mut self, bps: u32);

    /// Current rate-control mode
    fn rate_mode(&self) -> RateMode;

    /// Set the rate-control mode
    fn set_rate_mode(&mut self, mode: RateMode);

    /// Current encoder preset
    fn preset(&self) -> EncodePreset;

    /// Set the encoder preset
    fn set_preset(&mut self, preset: EncodePreset);

    /// Maximum keyframe interval in frames
    fn gop_max(&self) -> u32;

    /// Set the maximum keyframe interval in frames
    fn set_gop_max(&mut self, frames: u32);
}

/// Process-wide cursor capture flag.
///
/// The setter may refuse, e.g. when cursor capture is unsupported on the
/// current platform; the dialog reverts its checkbox on refusal.
pub trait CursorCapture {
    /// Whether the cursor is currently recorded
    fn is_record_cursor(&self) -> bool;

    /// Enable or disable cursor recording. Returns false if the request
    /// was refused.
    fn set_record_cursor(&mut self, record: bool) -> bool;
}

/// Capture source enumeration for the add-layer panel.
///
/// Implemented by the main crate; the panel never enumerates devices
/// itself, it only arbitrates the selection flow.
pub trait LayerSources {
    /// Display names of the available cameras, in index order
    fn camera_names(&self) -> Vec<String>;

    /// Supported size/frame-rate modes for a camera
    fn camera_modes(&self, camera: usize) -> Vec<CameraMode>;
}
