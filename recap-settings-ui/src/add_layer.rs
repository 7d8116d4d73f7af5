//! Companion panel for adding a capture layer.
//!
//! The panel arbitrates the selection flow for a new layer (screen
//! region, camera, or static image); enumerating actual screens and
//! cameras is the application's job, supplied through
//! [`crate::LayerSources`]. A completed flow produces exactly one
//! [`LayerSelection`], consumed with [`AddLayerPanel::take_selection`].

use std::path::PathBuf;

use crate::traits::LayerSources;

/// The kind of capture layer being added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayerKind {
    #[default]
    ScreenRegion,
    Camera,
    Picture,
}

impl LayerKind {
    /// All pages in tab order.
    pub const ALL: [Self; 3] = [Self::ScreenRegion, Self::Camera, Self::Picture];

    /// Display name for the page selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ScreenRegion => "Screen region",
            Self::Camera => "Camera",
            Self::Picture => "Picture",
        }
    }
}

/// A camera capture mode (size and frame rate).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMode {
    pub width: u32,
    pub height: u32,
    pub fps: f32,
}

impl CameraMode {
    /// Display label, e.g. "1280x720 @30".
    pub fn label(&self) -> String {
        format!("{}x{} @{:.0}", self.width, self.height, self.fps)
    }
}

/// A completed layer selection, handed back to the application.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerSelection {
    /// Start the interactive screen-region picker
    ScreenRegion,
    /// Add the camera at `camera` using `mode`
    Camera { camera: usize, mode: CameraMode },
    /// Add a static image layer from `path`
    Picture { path: PathBuf },
}

/// State machine for the add-layer flow.
#[derive(Debug, Default)]
pub struct AddLayerPanel {
    page: LayerKind,
    selected_camera: Option<usize>,
    selected_mode: usize,
    pending: Option<LayerSelection>,
}

impl AddLayerPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> LayerKind {
        self.page
    }

    /// Switch pages. Camera selection state is reset so a stale mode
    /// index never pairs with a different camera.
    pub fn select_page(&mut self, page: LayerKind) {
        if self.page != page {
            self.page = page;
            self.selected_camera = None;
            self.selected_mode = 0;
        }
    }

    pub fn selected_camera(&self) -> Option<usize> {
        self.selected_camera
    }

    pub fn choose_camera(&mut self, camera: usize) {
        if self.selected_camera != Some(camera) {
            self.selected_camera = Some(camera);
            self.selected_mode = 0;
        }
    }

    pub fn choose_mode(&mut self, mode: usize) {
        self.selected_mode = mode;
    }

    /// Complete the screen-region flow.
    pub fn request_screen_region(&mut self) {
        self.pending = Some(LayerSelection::ScreenRegion);
    }

    /// Complete the picture flow with a chosen file.
    pub fn request_picture(&mut self, path: PathBuf) {
        self.pending = Some(LayerSelection::Picture { path });
    }

    /// Complete the camera flow with the current camera/mode pick.
    /// Does nothing when no camera is selected or the mode index is out
    /// of range for the supplied mode list.
    pub fn confirm_camera(&mut self, sources: &dyn LayerSources) {
        let Some(camera) = self.selected_camera else {
            return;
        };
        let modes = sources.camera_modes(camera);
        if let Some(mode) = modes.get(self.selected_mode) {
            self.pending = Some(LayerSelection::Camera {
                camera,
                mode: *mode,
            });
        }
    }

    /// Take the completed selection, if any. Each completed flow yields
    /// the selection exactly once.
    pub fn take_selection(&mut self) -> Option<LayerSelection> {
        self.pending.take()
    }

    /// Show the panel.
    pub fn show(&mut self, ui: &mut egui::Ui, sources: &dyn LayerSources) {
        ui.horizontal(|ui| {
            for kind in LayerKind::ALL {
                if ui
                    .selectable_label(self.page == kind, kind.label())
                    .clicked()
                {
                    self.select_page(kind);
                }
            }
        });
        ui.separator();

        match self.page {
            LayerKind::ScreenRegion => {
                if ui.button("Select a screen region…").clicked() {
                    self.request_screen_region();
                }
            }
            LayerKind::Camera => self.show_camera_page(ui, sources),
            LayerKind::Picture => {
                if ui.button("Choose an image…").clicked() {
                    let picked = rfd::FileDialog::new()
                        .set_title("Choose an image")
                        .add_filter("Images", &["png", "jpg", "jpeg", "bmp"])
                        .pick_file();
                    if let Some(path) = picked {
                        self.request_picture(path);
                    }
                }
            }
        }
    }

    fn show_camera_page(&mut self, ui: &mut egui::Ui, sources: &dyn LayerSources) {
        let names = sources.camera_names();
        if names.is_empty() {
            ui.label("No camera found");
            return;
        }

        let current = self
            .selected_camera
            .and_then(|i| names.get(i))
            .map(String::as_str)
            .unwrap_or("Select a camera");
        egui::ComboBox::from_label("Camera")
            .selected_text(current)
            .show_ui(ui, |ui| {
                for (i, name) in names.iter().enumerate() {
                    if ui
                        .selectable_label(self.selected_camera == Some(i), name)
                        .clicked()
                    {
                        self.choose_camera(i);
                    }
                }
            });

        if let Some(camera) = self.selected_camera {
            let modes = sources.camera_modes(camera);
            if !modes.is_empty() {
                let current = modes
                    .get(self.selected_mode)
                    .map(CameraMode::label)
                    .unwrap_or_default();
                egui::ComboBox::from_label("Mode")
                    .selected_text(current)
                    .show_ui(ui, |ui| {
                        for (i, mode) in modes.iter().enumerate() {
                            if ui
                                .selectable_label(self.selected_mode == i, mode.label())
                                .clicked()
                            {
                                self.choose_mode(i);
                            }
                        }
                    });
                if ui.button("Add camera").clicked() {
                    self.confirm_camera(sources);
                }
            }
        }
    }
}
