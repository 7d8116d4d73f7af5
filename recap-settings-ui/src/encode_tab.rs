//! Encoder settings tab.
//!
//! Contains:
//! - Bitrate and rate-control mode
//! - Encoder preset
//! - Keyframe interval
//! - Cursor capture

use std::collections::HashSet;

use recap_config::{EncodePreset, RateMode};

use crate::section::{SLIDER_WIDTH, collapsing_section, section_spacing};
use crate::settings_ui::SettingsUI;
use crate::traits::{CursorCapture, VideoParams};

/// Show the encode tab content.
pub fn show(
    ui: &mut egui::Ui,
    settings: &mut SettingsUI,
    video: &mut dyn VideoParams,
    cursor: &mut dyn CursorCapture,
    collapsed: &mut HashSet<String>,
) {
    collapsing_section(ui, "Bitrate", "encode.bitrate", true, collapsed, |ui| {
        let mut bitrate = settings.temp_bitrate;
        let mut changed = false;
        ui.horizontal(|ui| {
            ui.style_mut().spacing.slider_width = SLIDER_WIDTH;
            changed |= ui
                .add(
                    egui::Slider::new(&mut bitrate, 250_000..=50_000_000)
                        .logarithmic(true)
                        .show_value(false),
                )
                .changed();
            changed |= ui
                .add(
                    egui::DragValue::new(&mut bitrate)
                        .range(250_000..=50_000_000)
                        .speed(50_000)
                        .custom_formatter(|v, _| format!("{:.1} Mbps", v / 1_000_000.0)),
                )
                .changed();
        });
        if changed {
            settings.temp_bitrate = bitrate;
            video.set_bitrate(bitrate);
        }

        egui::ComboBox::from_label("Rate control")
            .selected_text(settings.temp_rate_mode.label())
            .show_ui(ui, |ui| {
                for mode in RateMode::ALL {
                    if ui
                        .selectable_value(&mut settings.temp_rate_mode, mode, mode.label())
                        .changed()
                    {
                        video.set_rate_mode(mode);
                    }
                }
            });
    });
    section_spacing(ui);

    collapsing_section(ui, "Preset", "encode.preset", true, collapsed, |ui| {
        ui.horizontal(|ui| {
            ui.style_mut().spacing.slider_width = SLIDER_WIDTH;
            let mut index = settings.temp_preset.index();
            let response = ui.add(
                egui::Slider::new(&mut index, 0..=EncodePreset::ALL.len() - 1).show_value(false),
            );
            if response.changed() {
                settings.temp_preset = EncodePreset::ALL[index];
                video.set_preset(settings.temp_preset);
            }
            ui.label(format!("[{}]", settings.temp_preset.label()));
        });
        ui.label("Faster presets use less CPU; slower presets compress better.");
    });
    section_spacing(ui);

    collapsing_section(ui, "Keyframes", "encode.keyframes", true, collapsed, |ui| {
        let mut secs = settings.temp_keyframe_secs;
        let response = ui.add(
            egui::DragValue::new(&mut secs)
                .range(0.5..=10.0)
                .speed(0.1)
                .suffix(" s"),
        );
        if response.changed() {
            settings.temp_keyframe_secs = secs;
            video.set_gop_max((secs * settings.temp_fps).round() as u32);
        }
    });
    section_spacing(ui);

    collapsing_section(ui, "Capture", "encode.capture", true, collapsed, |ui| {
        let mut record = settings.temp_rec_cursor;
        if ui.checkbox(&mut record, "Record mouse cursor").changed() {
            if cursor.set_record_cursor(record) {
                settings.temp_rec_cursor = record;
            } else {
                // Backend refused; checkbox reverts next frame.
                log::warn!("Cursor capture not available, reverting checkbox");
            }
        }
    });
}
