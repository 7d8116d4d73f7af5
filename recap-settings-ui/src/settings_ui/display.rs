//! Display methods for SettingsUI.

use std::time::{Duration, Instant};

use egui::Context;

use crate::sidebar::{self, SettingsTab};
use crate::traits::{CursorCapture, VideoParams};
use crate::{SettingsWindowAction, encode_tab, save_tab, video_tab};

use super::SettingsUI;

impl SettingsUI {
    /// Show the settings window for one frame.
    ///
    /// Polls the resolution debounce and pushes an elapsed commit into
    /// the backend. Returns `SaveProfile` when the window was closed this
    /// frame so the application can persist the profile snapshot.
    pub fn show(
        &mut self,
        ctx: &Context,
        video: &mut dyn VideoParams,
        cursor: &mut dyn CursorCapture,
    ) -> SettingsWindowAction {
        if !self.visible {
            return SettingsWindowAction::None;
        }

        self.poll_commit(Instant::now(), video);
        if self.resolution.commit_pending() {
            // Keep frames coming while a commit deadline is outstanding;
            // egui only repaints on input otherwise.
            ctx.request_repaint_after(Duration::from_millis(25));
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.visible = false;
            return SettingsWindowAction::SaveProfile(self.snapshot_profile(&*video, &*cursor));
        }

        let mut open = true;
        egui::Window::new("Settings")
            .open(&mut open)
            .default_size([580.0, 440.0])
            .resizable(true)
            .show(ctx, |ui| {
                ui.horizontal_top(|ui| {
                    sidebar::show(ui, &mut self.selected_tab);
                    ui.separator();
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            self.show_tab_content(ui, &mut *video, &mut *cursor);
                        });
                });
            });

        if !open {
            self.visible = false;
            return SettingsWindowAction::SaveProfile(self.snapshot_profile(&*video, &*cursor));
        }
        SettingsWindowAction::None
    }

    fn show_tab_content(
        &mut self,
        ui: &mut egui::Ui,
        video: &mut dyn VideoParams,
        cursor: &mut dyn CursorCapture,
    ) {
        // The tab functions borrow the settings struct and the collapse
        // set separately, so take the set out for the duration.
        let mut collapsed = std::mem::take(&mut self.collapsed_sections);
        match self.selected_tab {
            SettingsTab::Video => video_tab::show(ui, self, video, &mut collapsed),
            SettingsTab::Encode => encode_tab::show(ui, self, video, cursor, &mut collapsed),
            SettingsTab::Save => save_tab::show(ui, self, &mut collapsed),
        }
        self.collapsed_sections = collapsed;
    }
}
