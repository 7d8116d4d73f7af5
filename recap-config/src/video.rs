//! Typed video parameter enums.
//!
//! These mirror the encoder backend's small fixed enumerations. They are
//! persisted in the profile as plain integers (rate mode, preset) or
//! lowercase strings (container), so the stored form stays compatible
//! with hand-edited profiles.

use serde::{Deserialize, Serialize};

/// Encoder rate-control strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum RateMode {
    /// Constant bitrate
    #[default]
    Cbr,
    /// Variable bitrate
    Vbr,
    /// Constant rate factor (quality-targeted)
    Crf,
}

impl RateMode {
    /// All rate modes in combo-box order.
    pub const ALL: [Self; 3] = [Self::Cbr, Self::Vbr, Self::Crf];

    /// Display name for the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cbr => "CBR",
            Self::Vbr => "VBR",
            Self::Crf => "CRF",
        }
    }
}

impl From<RateMode> for u8 {
    fn from(mode: RateMode) -> u8 {
        mode as u8
    }
}

impl From<u8> for RateMode {
    fn from(value: u8) -> Self {
        // Out-of-range stored values fall back to the default mode.
        Self::ALL.get(value as usize).copied().unwrap_or_default()
    }
}

/// Named encoder speed/quality preset, ordered fastest to slowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum EncodePreset {
    Ultrafast,
    Superfast,
    #[default]
    Veryfast,
    Faster,
    Fast,
    Medium,
    Slow,
    Slower,
    Veryslow,
    Placebo,
}

impl EncodePreset {
    /// All presets in slider order.
    pub const ALL: [Self; 10] = [
        Self::Ultrafast,
        Self::Superfast,
        Self::Veryfast,
        Self::Faster,
        Self::Fast,
        Self::Medium,
        Self::Slow,
        Self::Slower,
        Self::Veryslow,
        Self::Placebo,
    ];

    /// Slider index of this preset.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Display name for the UI label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ultrafast => "ultrafast",
            Self::Superfast => "superfast",
            Self::Veryfast => "veryfast",
            Self::Faster => "faster",
            Self::Fast => "fast",
            Self::Medium => "medium",
            Self::Slow => "slow",
            Self::Slower => "slower",
            Self::Veryslow => "veryslow",
            Self::Placebo => "placebo",
        }
    }
}

impl From<EncodePreset> for u8 {
    fn from(preset: EncodePreset) -> u8 {
        preset as u8
    }
}

impl From<u8> for EncodePreset {
    fn from(value: u8) -> Self {
        Self::ALL.get(value as usize).copied().unwrap_or_default()
    }
}

/// Output container format for recordings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerFormat {
    #[default]
    Mp4,
    Flv,
}

impl ContainerFormat {
    /// File extension (and display name) for this container.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp4 => "mp4",
            Self::Flv => "flv",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_mode_int_round_trip() {
        for mode in RateMode::ALL {
            assert_eq!(RateMode::from(u8::from(mode)), mode);
        }
    }

    #[test]
    fn test_rate_mode_out_of_range_falls_back() {
        assert_eq!(RateMode::from(200u8), RateMode::Cbr);
    }

    #[test]
    fn test_preset_order_and_index() {
        assert_eq!(EncodePreset::Ultrafast.index(), 0);
        assert_eq!(EncodePreset::Placebo.index(), 9);
        for (i, preset) in EncodePreset::ALL.iter().enumerate() {
            assert_eq!(preset.index(), i);
            assert_eq!(EncodePreset::from(i as u8), *preset);
        }
    }

    #[test]
    fn test_preset_out_of_range_falls_back() {
        assert_eq!(EncodePreset::from(42u8), EncodePreset::Veryfast);
    }

    #[test]
    fn test_container_extension() {
        assert_eq!(ContainerFormat::Mp4.extension(), "mp4");
        assert_eq!(ContainerFormat::Flv.extension(), "flv");
    }
}
