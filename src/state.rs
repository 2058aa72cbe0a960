use std::path::Path;

use crate::camera::OrbitCamera;
use crate::data::loader::load_file;
use crate::data::model::PointCloud;
use crate::figure::Figure;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The scatter being shown.
    pub figure: Figure,

    /// Current view onto the data cube.
    pub camera: OrbitCamera,

    /// Index of the marker under the pointer, if any.
    pub hovered: Option<usize>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(figure: Figure) -> Self {
        Self {
            figure,
            camera: OrbitCamera::default(),
            hovered: None,
            status_message: None,
        }
    }

    /// Replace the shown cloud, keeping the current style and view.
    pub fn set_cloud(&mut self, cloud: PointCloud) {
        let style = self.figure.style.clone();
        self.figure = Figure::from_cloud(cloud, style);
        self.hovered = None;
        self.status_message = None;
    }

    /// Load another data table; failures end up in `status_message`.
    pub fn load_path(&mut self, path: &Path) {
        match load_file(path) {
            Ok(cloud) => {
                log::info!("Loaded {} points from {}", cloud.len(), path.display());
                self.set_cloud(cloud);
            }
            Err(e) => {
                let e = anyhow::Error::new(e);
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
