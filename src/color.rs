use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Viridis colour scale
// ---------------------------------------------------------------------------

/// Viridis stops as used by common plotting libraries, evenly spaced on `[0, 1]`.
const VIRIDIS: [[u8; 3]; 10] = [
    [0x44, 0x01, 0x54],
    [0x48, 0x28, 0x78],
    [0x3e, 0x49, 0x89],
    [0x31, 0x68, 0x8e],
    [0x26, 0x82, 0x8e],
    [0x1f, 0x9e, 0x89],
    [0x35, 0xb7, 0x79],
    [0x6e, 0xce, 0x58],
    [0xb5, 0xde, 0x2b],
    [0xfd, 0xe7, 0x25],
];

/// Colour used for values that cannot be placed on the scale (NaN).
pub const NAN_COLOR: Color32 = Color32::GRAY;

fn stop(i: usize) -> LinSrgb {
    let [r, g, b] = VIRIDIS[i];
    Srgb::<u8>::new(r, g, b).into_format::<f32>().into_linear()
}

/// Sample Viridis at `t ∈ [0, 1]` (clamped), interpolating in linear RGB.
pub fn viridis(t: f64) -> Color32 {
    let t = t.clamp(0.0, 1.0) as f32;
    let last = VIRIDIS.len() - 1;
    let scaled = t * last as f32;
    let lo = (scaled.floor() as usize).min(last - 1);
    let frac = scaled - lo as f32;

    let mixed = stop(lo).mix(stop(lo + 1), frac);
    let rgb: Srgb<u8> = Srgb::<f32>::from_linear(mixed).into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

// ---------------------------------------------------------------------------
// Colour mapping: z value → Color32
// ---------------------------------------------------------------------------

/// Maps a numeric range continuously onto Viridis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    pub min: f64,
    pub max: f64,
}

impl ColorScale {
    pub fn new(min: f64, max: f64) -> Self {
        ColorScale { min, max }
    }

    /// Position of `value` on the scale, clamped to `[0, 1]`.
    /// A range without positive width puts everything in the middle.
    pub fn normalize(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range.is_nan() || range <= 0.0 {
            return 0.5;
        }
        ((value - self.min) / range).clamp(0.0, 1.0)
    }

    /// Opaque colour for `value`.
    pub fn color_for(&self, value: f64) -> Color32 {
        if value.is_nan() {
            return NAN_COLOR;
        }
        viridis(self.normalize(value))
    }

    /// `n` evenly spaced colours from min to max, for the colour bar.
    pub fn gradient(&self, n: usize) -> Vec<Color32> {
        match n {
            0 => Vec::new(),
            1 => vec![viridis(0.5)],
            _ => (0..n)
                .map(|i| viridis(i as f64 / (n - 1) as f64))
                .collect(),
        }
    }
}

/// Apply a `[0, 1]` opacity to an opaque colour.
pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_endpoints_hit_the_outer_stops() {
        assert_eq!(viridis(0.0), Color32::from_rgb(0x44, 0x01, 0x54));
        assert_eq!(viridis(1.0), Color32::from_rgb(0xfd, 0xe7, 0x25));
        assert_eq!(viridis(-3.0), viridis(0.0));
        assert_eq!(viridis(7.0), viridis(1.0));
    }

    #[test]
    fn interior_stops_are_exact() {
        let fifth = viridis(5.0 / 9.0);
        assert_eq!(fifth, Color32::from_rgb(0x1f, 0x9e, 0x89));
    }

    #[test]
    fn brightness_increases_along_the_scale() {
        let luma = |c: Color32| 0.2126 * c.r() as f32 + 0.7152 * c.g() as f32 + 0.0722 * c.b() as f32;
        let samples: Vec<f32> = (0..=20).map(|i| luma(viridis(i as f64 / 20.0))).collect();
        assert!(samples.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn degenerate_range_maps_to_middle() {
        let scale = ColorScale::new(2.0, 2.0);
        assert_eq!(scale.normalize(2.0), 0.5);
        assert_eq!(scale.color_for(100.0), viridis(0.5));
    }

    #[test]
    fn tiny_range_still_spans_the_scale() {
        let scale = ColorScale::new(0.0, 1e-13);
        assert_eq!(scale.normalize(0.0), 0.0);
        assert_eq!(scale.normalize(1e-13), 1.0);
        assert!((scale.normalize(5e-14) - 0.5).abs() < 1e-9);
        assert_eq!(scale.color_for(0.0), viridis(0.0));
        assert_eq!(scale.color_for(1e-13), viridis(1.0));
    }

    #[test]
    fn nan_uses_fallback_colour() {
        assert_eq!(ColorScale::new(0.0, 1.0).color_for(f64::NAN), NAN_COLOR);
    }

    #[test]
    fn gradient_spans_scale() {
        let g = ColorScale::new(0.0, 1.0).gradient(5);
        assert_eq!(g.len(), 5);
        assert_eq!(g[0], viridis(0.0));
        assert_eq!(g[4], viridis(1.0));
    }

    #[test]
    fn opacity_sets_alpha() {
        let c = with_opacity(Color32::from_rgb(10, 20, 30), 0.8);
        assert_eq!(c.a(), 204);
    }
}
