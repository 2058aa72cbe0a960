use glam::{Mat4, Vec3, Vec4};

// ---------------------------------------------------------------------------
// Orbit camera around the normalized data cube
// ---------------------------------------------------------------------------

const DEFAULT_YAW: f32 = 0.75;
const DEFAULT_PITCH: f32 = 0.45;
const DEFAULT_DISTANCE: f32 = 4.5;
const MIN_DISTANCE: f32 = 2.0;
const MAX_DISTANCE: f32 = 20.0;
const MAX_PITCH: f32 = 1.55;
const FOV_Y: f32 = 0.8;

/// Radians of rotation per dragged point.
const ROTATE_SPEED: f32 = 0.01;

/// Camera orbiting the origin, looking at the cube `[-1, 1]³`.
///
/// Data `z` is drawn as the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            distance: DEFAULT_DISTANCE,
        }
    }
}

/// A point mapped to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Screen position relative to the viewport's top-left corner.
    pub screen: [f32; 2],
    /// Distance from the eye; larger is further away.
    pub depth: f32,
}

impl OrbitCamera {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Rotate by a drag of `(dx, dy)` points.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * ROTATE_SPEED;
        self.pitch = (self.pitch + dy * ROTATE_SPEED).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Zoom by a scroll of `delta` points; positive moves closer.
    pub fn zoom(&mut self, delta: f32) {
        let factor = (-delta * 0.002).exp();
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        // Data z is "up".
        Vec3::new(cp * cy, cp * sy, sp) * self.distance
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Z);
        let proj = Mat4::perspective_rh(FOV_Y, aspect.max(1e-3), 0.1, 100.0);
        proj * view
    }
}

/// Project a cube-space point into a `width × height` viewport using the
/// camera's `vp` matrix. Returns `None` for points behind the eye.
pub fn project_with(vp: &Mat4, eye: Vec3, p: [f32; 3], width: f32, height: f32) -> Option<Projected> {
    let clip = *vp * Vec4::new(p[0], p[1], p[2], 1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc_x = clip.x / clip.w;
    let ndc_y = clip.y / clip.w;
    Some(Projected {
        screen: [(ndc_x * 0.5 + 0.5) * width, (-ndc_y * 0.5 + 0.5) * height],
        depth: eye.distance(Vec3::from(p)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    impl OrbitCamera {
        fn project(&self, p: [f32; 3], width: f32, height: f32) -> Option<Projected> {
            let vp = self.view_projection(width / height);
            project_with(&vp, self.eye(), p, width, height)
        }
    }

    #[test]
    fn origin_projects_to_viewport_centre() {
        let cam = OrbitCamera::default();
        let p = cam.project([0.0, 0.0, 0.0], 800.0, 600.0).unwrap();
        assert!((p.screen[0] - 400.0).abs() < 1e-3);
        assert!((p.screen[1] - 300.0).abs() < 1e-3);
        assert!((p.depth - cam.distance).abs() < 1e-4);
    }

    #[test]
    fn top_of_cube_is_above_bottom() {
        let cam = OrbitCamera::default();
        let top = cam.project([0.0, 0.0, 1.0], 800.0, 600.0).unwrap();
        let bottom = cam.project([0.0, 0.0, -1.0], 800.0, 600.0).unwrap();
        assert!(top.screen[1] < bottom.screen[1]);
    }

    #[test]
    fn nearer_corner_has_smaller_depth() {
        let cam = OrbitCamera::default();
        let eye = cam.eye();
        let near = [eye.x.signum(), eye.y.signum(), eye.z.signum()];
        let far = [-near[0], -near[1], -near[2]];
        let near = cam.project(near, 800.0, 600.0).unwrap();
        let far = cam.project(far, 800.0, 600.0).unwrap();
        assert!(near.depth < far.depth);
    }

    #[test]
    fn pitch_and_distance_are_clamped() {
        let mut cam = OrbitCamera::default();
        cam.rotate(0.0, 10_000.0);
        assert_eq!(cam.pitch, MAX_PITCH);
        cam.rotate(0.0, -20_000.0);
        assert_eq!(cam.pitch, -MAX_PITCH);

        cam.zoom(1e6);
        assert_eq!(cam.distance, MIN_DISTANCE);
        cam.zoom(-1e6);
        assert_eq!(cam.distance, MAX_DISTANCE);

        cam.reset();
        assert_eq!(cam, OrbitCamera::default());
    }

    #[test]
    fn point_behind_eye_is_culled() {
        let cam = OrbitCamera::default();
        let behind = cam.eye() * 2.0;
        assert!(cam.project(behind.to_array(), 800.0, 600.0).is_none());
    }
}
