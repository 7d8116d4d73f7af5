//! The grouped settings profile.
//!
//! The profile holds two groups, mirroring the on-disk layout:
//!
//! - `FileSave` — output directory, filename, container format
//! - `Video` — capture size, frame rate, bitrate and mode, encoder
//!   preset, maximum GOP, cursor capture flag
//!
//! Loading uses read-with-default-and-write-back semantics: any key
//! missing from the file gets a computed default, and when a default was
//! filled in the completed profile is written back immediately. Saving is
//! a plain overwrite.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::APP_NAME;
use crate::error::ProfileError;
use crate::video::{ContainerFormat, EncodePreset, RateMode};

/// Default capture width in pixels.
pub const DEFAULT_WIDTH: u32 = 1920;
/// Default capture height in pixels.
pub const DEFAULT_HEIGHT: u32 = 1080;
/// Default frame rate.
pub const DEFAULT_FPS: f32 = 25.0;
/// Default bitrate in bits per second.
pub const DEFAULT_BITRATE: u32 = 2_500_000;
/// Default maximum keyframe interval in frames (3 seconds at 25 fps).
pub const DEFAULT_GOP_MAX: u32 = 75;

/// Output file settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSaveGroup {
    /// Directory recordings are written to.
    pub dir: String,
    /// Base filename (no extension).
    pub name: String,
    /// Container format.
    #[serde(rename = "type")]
    pub format: ContainerFormat,
}

/// Video and encoder settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoGroup {
    pub width: u32,
    pub height: u32,
    pub fps: f32,
    #[serde(rename = "bps")]
    pub bitrate: u32,
    #[serde(rename = "bps-mode")]
    pub rate_mode: RateMode,
    pub preset: EncodePreset,
    #[serde(rename = "gop-max")]
    pub gop_max: u32,
    #[serde(rename = "recCursor")]
    pub record_cursor: bool,
}

/// The complete settings profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "FileSave")]
    pub file_save: FileSaveGroup,
    #[serde(rename = "Video")]
    pub video: VideoGroup,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            file_save: FileSaveGroup {
                dir: default_video_dir(),
                name: APP_NAME.to_string(),
                format: ContainerFormat::default(),
            },
            video: VideoGroup {
                width: DEFAULT_WIDTH,
                height: DEFAULT_HEIGHT,
                fps: DEFAULT_FPS,
                bitrate: DEFAULT_BITRATE,
                rate_mode: RateMode::default(),
                preset: EncodePreset::default(),
                gop_max: DEFAULT_GOP_MAX,
                record_cursor: true,
            },
        }
    }
}

/// Mirror of `Profile` with every key optional, used to detect which
/// keys were absent from the file so their defaults can be written back.
#[derive(Debug, Default, Deserialize)]
struct RawProfile {
    #[serde(rename = "FileSave", default)]
    file_save: RawFileSave,
    #[serde(rename = "Video", default)]
    video: RawVideo,
}

#[derive(Debug, Default, Deserialize)]
struct RawFileSave {
    dir: Option<String>,
    name: Option<String>,
    #[serde(rename = "type")]
    format: Option<ContainerFormat>,
}

#[derive(Debug, Default, Deserialize)]
struct RawVideo {
    width: Option<u32>,
    height: Option<u32>,
    fps: Option<f32>,
    #[serde(rename = "bps")]
    bitrate: Option<u32>,
    #[serde(rename = "bps-mode")]
    rate_mode: Option<RateMode>,
    preset: Option<EncodePreset>,
    #[serde(rename = "gop-max")]
    gop_max: Option<u32>,
    #[serde(rename = "recCursor")]
    record_cursor: Option<bool>,
}

impl RawProfile {
    /// Fill in defaults for missing keys. Returns the completed profile
    /// and whether any default was applied.
    fn resolve(self) -> (Profile, bool) {
        let mut filled = false;
        let defaults = Profile::default();
        let mut take = |present: bool| {
            if !present {
                filled = true;
            }
        };

        take(self.file_save.dir.is_some());
        take(self.file_save.name.is_some());
        take(self.file_save.format.is_some());
        take(self.video.width.is_some());
        take(self.video.height.is_some());
        take(self.video.fps.is_some());
        take(self.video.bitrate.is_some());
        take(self.video.rate_mode.is_some());
        take(self.video.preset.is_some());
        take(self.video.gop_max.is_some());
        take(self.video.record_cursor.is_some());

        let mut dir = self.file_save.dir.unwrap_or(defaults.file_save.dir);
        let mut name = self.file_save.name.unwrap_or(defaults.file_save.name);
        // Empty strings behave like missing keys.
        if dir.is_empty() {
            dir = default_video_dir();
            filled = true;
        }
        if name.is_empty() {
            name = APP_NAME.to_string();
            filled = true;
        }

        let profile = Profile {
            file_save: FileSaveGroup {
                dir,
                name,
                format: self.file_save.format.unwrap_or(defaults.file_save.format),
            },
            video: VideoGroup {
                width: self.video.width.unwrap_or(defaults.video.width),
                height: self.video.height.unwrap_or(defaults.video.height),
                fps: self.video.fps.unwrap_or(defaults.video.fps),
                bitrate: self.video.bitrate.unwrap_or(defaults.video.bitrate),
                rate_mode: self.video.rate_mode.unwrap_or(defaults.video.rate_mode),
                preset: self.video.preset.unwrap_or(defaults.video.preset),
                gop_max: self.video.gop_max.unwrap_or(defaults.video.gop_max),
                record_cursor: self
                    .video
                    .record_cursor
                    .unwrap_or(defaults.video.record_cursor),
            },
        };
        (profile, filled)
    }
}

impl Profile {
    /// Load the profile from the default location.
    pub fn load() -> Result<Self, ProfileError> {
        Self::load_from(&Self::profile_path())
    }

    /// Load the profile from an explicit path.
    ///
    /// A missing file yields the default profile; missing keys get
    /// defaults. In both cases the completed profile is written back so
    /// the file on disk is always fully populated.
    pub fn load_from(path: &Path) -> Result<Self, ProfileError> {
        if path.exists() {
            log::info!("Loading settings profile from {:?}", path);
            let contents = fs::read_to_string(path)?;
            let raw: RawProfile = toml::from_str(&contents)?;
            let (profile, filled) = raw.resolve();
            if filled {
                log::info!("Profile had missing keys, writing defaults back");
                if let Err(e) = profile.save_to(path) {
                    log::warn!("Could not write defaults back to {:?}: {}", path, e);
                }
            }
            Ok(profile)
        } else {
            log::info!("Profile not found, creating default at {:?}", path);
            let profile = Self::default();
            profile.save_to(path)?;
            Ok(profile)
        }
    }

    /// Save the profile to the default location.
    pub fn save(&self) -> Result<(), ProfileError> {
        self.save_to(&Self::profile_path())
    }

    /// Save the profile to an explicit path, creating parent directories
    /// as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ProfileError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml = toml::to_string_pretty(self)?;
        fs::write(path, toml)?;
        Ok(())
    }

    /// The settings profile file path.
    pub fn profile_path() -> PathBuf {
        Self::profile_dir().join("setting.toml")
    }

    /// The directory holding the settings profile.
    ///
    /// Uses the platform config directory; when that cannot be created,
    /// falls back to the application's own directory.
    pub fn profile_dir() -> PathBuf {
        if let Some(base) = dirs::config_dir() {
            let dir = base.join(APP_NAME);
            if dir.is_dir() || fs::create_dir_all(&dir).is_ok() {
                return dir;
            }
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Default directory for recordings: the platform videos folder, falling
/// back to the home directory, then the current directory.
pub fn default_video_dir() -> String {
    dirs::video_dir()
        .or_else(dirs::home_dir)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| ".".to_string())
}
