//! Video settings tab.
//!
//! Contains:
//! - Resolution (aspect preset buttons, slider, width/height fields)
//! - Frame rate

use std::collections::HashSet;
use std::time::Instant;

use crate::aspect::AspectClass;
use crate::resolution::SLIDER_MAX;
use crate::section::{SLIDER_WIDTH, collapsing_section, section_spacing};
use crate::settings_ui::SettingsUI;
use crate::traits::VideoParams;

/// Show the video tab content.
pub fn show(
    ui: &mut egui::Ui,
    settings: &mut SettingsUI,
    video: &mut dyn VideoParams,
    collapsed: &mut HashSet<String>,
) {
    let now = Instant::now();

    collapsing_section(ui, "Resolution", "video.resolution", true, collapsed, |ui| {
        // Aspect ratio presets. Clicking a ratio recomputes the size so
        // the pixel budget of the previous resolution is preserved.
        ui.horizontal(|ui| {
            ui.label("Aspect ratio:");
            for class in AspectClass::ALL {
                let selected = settings.resolution.active_class() == class;
                if ui.selectable_label(selected, class.label()).clicked() && !selected {
                    settings.resolution.apply_preset(class, now);
                }
            }
        });

        // Slider between the bounds of the active ratio; disabled in
        // Custom mode where the dimensions move independently.
        let enabled = settings.resolution.slider_enabled();
        let mut pos = settings.resolution.slider_pos();
        let response = ui.add_enabled(
            enabled,
            egui::Slider::new(&mut pos, 0..=SLIDER_MAX)
                .show_value(false)
                .text("Size"),
        );
        if response.changed() {
            settings.resolution.slider_edited(pos, now);
        }

        let bounds = settings.resolution.bounds();
        ui.horizontal(|ui| {
            let mut width = settings.resolution.width();
            if ui
                .add(
                    egui::DragValue::new(&mut width)
                        .range(bounds.min_width..=bounds.max_width)
                        .suffix(" px"),
                )
                .changed()
            {
                settings.resolution.width_edited(width, now);
            }

            ui.label("×");

            let mut height = settings.resolution.height();
            if ui
                .add(
                    egui::DragValue::new(&mut height)
                        .range(bounds.min_height..=bounds.max_height)
                        .suffix(" px"),
                )
                .changed()
            {
                settings.resolution.height_edited(height, now);
            }
        });
    });
    section_spacing(ui);

    collapsing_section(ui, "Frame Rate", "video.fps", true, collapsed, |ui| {
        let mut fps = settings.temp_fps;
        let mut changed = false;
        ui.horizontal(|ui| {
            ui.style_mut().spacing.slider_width = SLIDER_WIDTH;
            changed |= ui
                .add(egui::Slider::new(&mut fps, 1.0..=60.0).show_value(false))
                .changed();
            changed |= ui
                .add(
                    egui::DragValue::new(&mut fps)
                        .range(1.0..=60.0)
                        .speed(0.5)
                        .suffix(" fps"),
                )
                .changed();
        });
        if changed {
            settings.temp_fps = fps;
            video.set_frame_rate(fps);
            // Keep the keyframe interval stable in seconds when the
            // frame rate moves.
            video.set_gop_max((settings.temp_keyframe_secs * fps).round() as u32);
        }
    });
}
