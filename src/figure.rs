use eframe::egui::Color32;

use crate::color::{with_opacity, ColorScale};
use crate::data::model::{PointCloud, SamplePoint};

pub const DEFAULT_TITLE: &str = "3D Scatter Plot of Rendered Data";

// ---------------------------------------------------------------------------
// Plot style
// ---------------------------------------------------------------------------

/// Fixed presentation settings of the scatter plot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    pub title: String,
    pub axis_titles: [String; 3],
    /// Marker diameter in points.
    pub marker_size: f32,
    pub opacity: f32,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            axis_titles: ["X".into(), "Y".into(), "Z".into()],
            marker_size: 4.0,
            opacity: 0.8,
        }
    }
}

// ---------------------------------------------------------------------------
// Figure – render-ready scatter description
// ---------------------------------------------------------------------------

/// One drawn dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub point: SamplePoint,
    /// Position inside `[-1, 1]³`.
    pub normalized: [f32; 3],
    /// Opaque scale colour; opacity is applied when painting.
    pub color: Color32,
}

/// Everything the viewer needs to paint a cloud.
#[derive(Debug, Clone)]
pub struct Figure {
    pub style: PlotStyle,
    pub markers: Vec<Marker>,
    pub color_scale: ColorScale,
    pub cloud: PointCloud,
}

impl Figure {
    /// One marker per point, coloured by z.
    pub fn from_cloud(cloud: PointCloud, style: PlotStyle) -> Self {
        let (z_min, z_max) = cloud.z_range().unwrap_or((0.0, 0.0));
        let color_scale = ColorScale::new(z_min, z_max);

        let markers = cloud
            .points
            .iter()
            .map(|&p| Marker {
                point: p,
                normalized: cloud.bounds.normalize(p),
                color: color_scale.color_for(p.z),
            })
            .collect();

        Figure {
            style,
            markers,
            color_scale,
            cloud,
        }
    }

    /// Marker colour with the current opacity applied.
    pub fn fill(&self, marker: &Marker) -> Color32 {
        with_opacity(marker.color, self.style.opacity)
    }

    /// Marker indices ordered back-to-front by `depth` (largest first).
    /// Markers without a depth (culled) are left out.
    pub fn paint_order(depths: &[Option<f32>]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..depths.len()).filter(|&i| depths[i].is_some()).collect();
        order.sort_by(|&a, &b| {
            let (da, db) = (depths[a].unwrap_or(0.0), depths[b].unwrap_or(0.0));
            db.total_cmp(&da)
        });
        order
    }
}
