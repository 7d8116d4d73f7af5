//! Settings profile store for the recap screen recorder.
//!
//! This crate provides loading, saving, and default values for the
//! recorder's user-facing settings. It includes:
//!
//! - The grouped key/value profile (`FileSave` and `Video` groups)
//! - Typed video parameter enums (rate control, encoder preset, container)
//! - Read-with-default-and-write-back semantics at load time
//!
//! The profile is persisted as TOML under the platform config directory,
//! falling back to the application's own directory when that is not
//! writable.

pub mod error;
pub mod profile;
pub mod video;

// Re-export main types for convenience
pub use error::ProfileError;
pub use profile::{FileSaveGroup, Profile, VideoGroup, default_video_dir};
pub use video::{ContainerFormat, EncodePreset, RateMode};

/// Application name, used for the config directory and as the default
/// output filename.
pub const APP_NAME: &str = "recap";
