//! Vertical sidebar navigation for settings tabs.

/// The available settings tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    Video,
    Encode,
    Save,
}

impl SettingsTab {
    /// Get the display name for this tab.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Encode => "Encode",
            Self::Save => "Save",
        }
    }

    /// Get the icon for this tab (using emoji for simplicity).
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Video => "🎥",
            Self::Encode => "🎞",
            Self::Save => "💾",
        }
    }

    /// Get all available tabs in order.
    pub fn all() -> &'static [Self] {
        &[Self::Video, Self::Encode, Self::Save]
    }
}

/// Show the sidebar; returns true when the selection changed.
pub fn show(ui: &mut egui::Ui, selected: &mut SettingsTab) -> bool {
    let mut changed = false;
    ui.vertical(|ui| {
        for tab in SettingsTab::all() {
            let label = format!("{} {}", tab.icon(), tab.display_name());
            if ui.selectable_label(*selected == *tab, label).clicked() && *selected != *tab {
                *selected = *tab;
                changed = true;
            }
        }
    });
    changed
}
