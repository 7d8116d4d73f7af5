//! Output file settings tab.
//!
//! Contains:
//! - Output folder (system folder picker)
//! - Filename (validated, empty input replaced with the default)
//! - Container format

use std::collections::HashSet;

use recap_config::ContainerFormat;

use crate::section::{INPUT_WIDTH, collapsing_section, section_spacing, subsection_label};
use crate::settings_ui::SettingsUI;

/// Show the save tab content.
pub fn show(ui: &mut egui::Ui, settings: &mut SettingsUI, collapsed: &mut HashSet<String>) {
    collapsing_section(ui, "Output", "save.output", true, collapsed, |ui| {
        subsection_label(ui, "Folder");
        ui.horizontal(|ui| {
            if ui.button("📁 Choose…").clicked() {
                settings.pick_output_folder();
            }
            ui.label(&settings.temp_video_dir)
                .on_hover_text(&settings.temp_video_dir);
        });

        subsection_label(ui, "Filename");
        let response = ui.add(
            egui::TextEdit::singleline(&mut settings.temp_filename).desired_width(INPUT_WIDTH),
        );
        if response.lost_focus() {
            settings.apply_filename();
        }

        subsection_label(ui, "Format");
        ui.horizontal(|ui| {
            for format in [ContainerFormat::Mp4, ContainerFormat::Flv] {
                ui.radio_value(&mut settings.temp_file_format, format, format.extension());
            }
        });
    });
    section_spacing(ui);
}
