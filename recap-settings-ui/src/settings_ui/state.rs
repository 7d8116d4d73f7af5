//! SettingsUI state management and lifecycle methods.

use std::collections::HashSet;
use std::sync::OnceLock;
use std::time::Instant;

use recap_config::{APP_NAME, FileSaveGroup, Profile, VideoGroup, default_video_dir};
use regex::Regex;
use rfd::FileDialog;

use crate::resolution::ResolutionController;
use crate::sidebar::SettingsTab;
use crate::traits::{CursorCapture, VideoParams};

use super::SettingsUI;

/// Characters rejected in output filenames (path separators and
/// platform-reserved characters).
fn filename_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"^[^/\\:*?"<>|]+$"#).expect("filename pattern is valid"))
}

impl SettingsUI {
    /// Create a new settings UI seeded from a loaded profile.
    pub fn new(profile: &Profile) -> Self {
        let fps = profile.video.fps.max(1.0);
        Self {
            visible: false,
            selected_tab: SettingsTab::default(),
            resolution: ResolutionController::new(profile.video.width, profile.video.height),
            temp_fps: fps,
            temp_keyframe_secs: profile.video.gop_max as f32 / fps,
            temp_bitrate: profile.video.bitrate,
            temp_rate_mode: profile.video.rate_mode,
            temp_preset: profile.video.preset,
            temp_rec_cursor: profile.video.record_cursor,
            temp_video_dir: profile.file_save.dir.clone(),
            temp_filename: profile.file_save.name.clone(),
            temp_file_format: profile.file_save.format,
            collapsed_sections: HashSet::new(),
        }
    }

    /// Push a loaded profile into the encoder backend and cursor flag.
    /// Called once at startup, before the dialog is first shown.
    pub fn apply_profile(
        profile: &Profile,
        video: &mut dyn VideoParams,
        cursor: &mut dyn CursorCapture,
    ) {
        video.set_size(profile.video.width, profile.video.height);
        video.set_frame_rate(profile.video.fps);
        video.set_bitrate(profile.video.bitrate);
        video.set_rate_mode(profile.video.rate_mode);
        video.set_preset(profile.video.preset);
        video.set_gop_max(profile.video.gop_max);
        if !cursor.set_record_cursor(profile.video.record_cursor) {
            log::warn!("Cursor capture request refused, flag left as-is");
        }
    }

    /// Open the dialog, re-reading the current backend state into the
    /// working fields.
    pub fn open(&mut self, video: &dyn VideoParams, cursor: &dyn CursorCapture) {
        let (width, height) = video.size();
        self.resolution.init_from_size(width, height);
        self.temp_fps = video.frame_rate();
        self.temp_keyframe_secs = if self.temp_fps > 0.0 {
            video.gop_max() as f32 / self.temp_fps
        } else {
            0.0
        };
        self.temp_bitrate = video.bitrate();
        self.temp_rate_mode = video.rate_mode();
        self.temp_preset = video.preset();
        self.temp_rec_cursor = cursor.is_record_cursor();
        self.visible = true;
    }

    /// Toggle settings window visibility
    pub fn toggle(&mut self, video: &dyn VideoParams, cursor: &dyn CursorCapture) {
        if self.visible {
            self.visible = false;
        } else {
            self.open(video, cursor);
        }
    }

    /// Poll the resolution debounce; pushes the committed size into the
    /// backend once the quiet period has elapsed.
    pub fn poll_commit(&mut self, now: Instant, video: &mut dyn VideoParams) {
        if let Some(size) = self.resolution.take_commit(now) {
            video.set_size(size.width, size.height);
        }
    }

    /// Open the system folder picker for the output directory. An empty
    /// selection leaves the current directory unchanged.
    pub fn pick_output_folder(&mut self) {
        let picked = FileDialog::new()
            .set_title("Choose the folder recordings are saved to")
            .pick_folder();
        if let Some(dir) = picked {
            self.temp_video_dir = dir.display().to_string();
        }
    }

    /// Validate the working filename, replacing empty or invalid input
    /// with the generated default name.
    pub fn apply_filename(&mut self) {
        let trimmed = self.temp_filename.trim().to_string();
        if trimmed.is_empty() || !filename_pattern().is_match(&trimmed) {
            self.temp_filename = APP_NAME.to_string();
        } else {
            self.temp_filename = trimmed;
        }
    }

    /// Snapshot the current settings as a profile for persistence.
    pub fn snapshot_profile(
        &self,
        video: &dyn VideoParams,
        cursor: &dyn CursorCapture,
    ) -> Profile {
        let (width, height) = video.size();
        let dir = if self.temp_video_dir.is_empty() {
            default_video_dir()
        } else {
            self.temp_video_dir.clone()
        };
        let name = if self.temp_filename.is_empty() {
            APP_NAME.to_string()
        } else {
            self.temp_filename.clone()
        };
        Profile {
            file_save: FileSaveGroup {
                dir,
                name,
                format: self.temp_file_format,
            },
            video: VideoGroup {
                width,
                height,
                fps: video.frame_rate(),
                bitrate: video.bitrate(),
                rate_mode: video.rate_mode(),
                preset: video.preset(),
                gop_max: video.gop_max(),
                record_cursor: cursor.is_record_cursor(),
            },
        }
    }

    /// Snapshot and persist the profile to its default location.
    pub fn save_profile(
        &self,
        video: &dyn VideoParams,
        cursor: &dyn CursorCapture,
    ) -> anyhow::Result<()> {
        self.snapshot_profile(video, cursor).save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Size;
    use recap_config::{ContainerFormat, EncodePreset, RateMode};
    use std::time::Duration;

    #[derive(Default)]
    struct MockBackend {
        size: (u32, u32),
        fps: f32,
        bitrate: u32,
        rate_mode: RateMode,
        preset: EncodePreset,
        gop_max: u32,
        record_cursor: bool,
        refuse_cursor: bool,
        set_size_calls: usize,
    }

    impl VideoParams for MockBackend {
        fn size(&self) -> (u32, u32) {
            self.size
        }
        fn set_size(&mut self, width: u32, height: u32) {
            self.size = (width, height);
            self.set_size_calls += 1;
        }
        fn frame_rate(&self) -> f32 {
            self.fps
        }
        fn set_frame_rate(&mut self, fps: f32) {
            self.fps = fps;
        }
        fn bitrate(&self) -> u32 {
            self.bitrate
        }
        fn set_bitrate(&mut self, bps: u32) {
            self.bitrate = bps;
        }
        fn rate_mode(&self) -> RateMode {
            self.rate_mode
        }
        fn set_rate_mode(&mut self, mode: RateMode) {
            self.rate_mode = mode;
        }
        fn preset(&self) -> EncodePreset {
            self.preset
        }
        fn set_preset(&mut self, preset: EncodePreset) {
            self.preset = preset;
        }
        fn gop_max(&self) -> u32 {
            self.gop_max
        }
        fn set_gop_max(&mut self, frames: u32) {
            self.gop_max = frames;
        }
    }

    impl CursorCapture for MockBackend {
        fn is_record_cursor(&self) -> bool {
            self.record_cursor
        }
        fn set_record_cursor(&mut self, record: bool) -> bool {
            if self.refuse_cursor {
                return false;
            }
            self.record_cursor = record;
            true
        }
    }

    fn settings_with_backend() -> (SettingsUI, MockBackend) {
        let profile = Profile::default();
        let mut video = MockBackend::default();
        let mut cursor = MockBackend::default();
        SettingsUI::apply_profile(&profile, &mut video, &mut cursor);
        (SettingsUI::new(&profile), video)
    }

    #[test]
    fn test_apply_profile_pushes_all_params() {
        let profile = Profile::default();
        let mut backend = MockBackend::default();
        let mut cursor = MockBackend::default();
        SettingsUI::apply_profile(&profile, &mut backend, &mut cursor);

        assert_eq!(backend.size, (1920, 1080));
        assert_eq!(backend.fps, 25.0);
        assert_eq!(backend.bitrate, 2_500_000);
        assert_eq!(backend.gop_max, 75);
        assert!(cursor.record_cursor);
    }

    #[test]
    fn test_debounced_commit_reaches_backend_once() {
        let (mut settings, mut video) = settings_with_backend();
        let calls_before = video.set_size_calls;
        let t0 = Instant::now();

        // A burst of edits inside the quiet period.
        settings.resolution.width_edited(800, t0);
        settings
            .resolution
            .width_edited(1280, t0 + Duration::from_millis(20));
        settings
            .resolution
            .width_edited(1600, t0 + Duration::from_millis(40));

        settings.poll_commit(t0 + Duration::from_millis(60), &mut video);
        assert_eq!(video.set_size_calls, calls_before);

        settings.poll_commit(t0 + Duration::from_millis(150), &mut video);
        assert_eq!(video.set_size_calls, calls_before + 1);
        assert_eq!(video.size, (1600, 900));

        // Nothing further without new edits.
        settings.poll_commit(t0 + Duration::from_secs(5), &mut video);
        assert_eq!(video.set_size_calls, calls_before + 1);
    }

    #[test]
    fn test_open_syncs_from_backend() {
        let (mut settings, mut video) = settings_with_backend();
        video.size = (1280, 720);
        video.fps = 30.0;
        video.gop_max = 90;
        let cursor = MockBackend::default();

        settings.open(&video, &cursor);
        assert!(settings.visible);
        assert_eq!(settings.resolution.size(), Size::new(1280, 720));
        assert_eq!(settings.temp_fps, 30.0);
        assert_eq!(settings.temp_keyframe_secs, 3.0);
        assert!(!settings.temp_rec_cursor);
    }

    #[test]
    fn test_apply_filename_rejects_invalid() {
        let (mut settings, _) = settings_with_backend();

        settings.temp_filename = "my recording".to_string();
        settings.apply_filename();
        assert_eq!(settings.temp_filename, "my recording");

        settings.temp_filename = "bad/name".to_string();
        settings.apply_filename();
        assert_eq!(settings.temp_filename, APP_NAME);

        settings.temp_filename = "a:b".to_string();
        settings.apply_filename();
        assert_eq!(settings.temp_filename, APP_NAME);

        settings.temp_filename = "".to_string();
        settings.apply_filename();
        assert_eq!(settings.temp_filename, APP_NAME);
    }

    #[test]
    fn test_snapshot_profile_reflects_backend_and_temps() {
        let (mut settings, video) = settings_with_backend();
        let cursor = MockBackend::default();
        settings.temp_filename = "capture".to_string();
        settings.temp_file_format = ContainerFormat::Flv;

        let profile = settings.snapshot_profile(&video, &cursor);
        assert_eq!(profile.file_save.name, "capture");
        assert_eq!(profile.file_save.format, ContainerFormat::Flv);
        assert_eq!(
            (profile.video.width, profile.video.height),
            (1920, 1080)
        );
    }

    #[test]
    fn test_snapshot_fills_empty_dir_and_name() {
        let (mut settings, video) = settings_with_backend();
        let cursor = MockBackend::default();
        settings.temp_video_dir.clear();
        settings.temp_filename.clear();

        let profile = settings.snapshot_profile(&video, &cursor);
        assert!(!profile.file_save.dir.is_empty());
        assert_eq!(profile.file_save.name, APP_NAME);
    }
}
