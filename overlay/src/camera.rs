//! World to screen projection for in-world boxes

use wisps_core::{RenderBounds, Vec2, Vec3};

/// Fixed isometric camera looking at `focus`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World point drawn at `screen_center`
    pub focus: Vec3,
    pub screen_center: Vec2,
    /// Screen pixels per world unit
    pub scale: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            focus: Vec3::default(),
            screen_center: Vec2::default(),
            scale: 1.0,
        }
    }
}

impl Camera {
    pub fn project(&self, point: Vec3) -> Vec2 {
        let dx = point.x - self.focus.x;
        let dy = point.y - self.focus.y;
        let dz = point.z - self.focus.z;
        Vec2::new(
            self.screen_center.x + (dx - dy) * self.scale,
            self.screen_center.y + ((dx + dy) * 0.5 - dz) * self.scale,
        )
    }

    /// Corners of a bounds box around `position`: bottom face first, then top.
    ///
    /// Only the yaw (`rotation.z`) is applied.
    pub fn box_corners(position: Vec3, bounds: RenderBounds) -> [Vec3; 8] {
        let e = bounds.extents;
        let (sin, cos) = bounds.rotation.z.sin_cos();
        let local = [
            (-e.x, -e.y),
            (e.x, -e.y),
            (e.x, e.y),
            (-e.x, e.y),
        ];

        let mut corners = [Vec3::default(); 8];
        for (i, &(lx, ly)) in local.iter().enumerate() {
            let x = position.x + lx * cos - ly * sin;
            let y = position.y + lx * sin + ly * cos;
            corners[i] = Vec3::new(x, y, position.z - e.z);
            corners[i + 4] = Vec3::new(x, y, position.z + e.z);
        }
        corners
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_projects_to_screen_center() {
        let camera = Camera {
            focus: Vec3::new(10.0, 20.0, 0.0),
            screen_center: Vec2::new(400.0, 300.0),
            scale: 3.0,
        };
        assert_eq!(camera.project(Vec3::new(10.0, 20.0, 0.0)), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_height_moves_up_on_screen() {
        let camera = Camera::default();
        let ground = camera.project(Vec3::new(0.0, 0.0, 0.0));
        let raised = camera.project(Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(raised.x, ground.x);
        assert!(raised.y < ground.y);
    }

    #[test]
    fn test_box_corners_unrotated() {
        let bounds = RenderBounds {
            extents: Vec3::new(1.0, 2.0, 3.0),
            rotation: Vec3::default(),
        };
        let corners = Camera::box_corners(Vec3::new(10.0, 10.0, 0.0), bounds);

        assert_eq!(corners[0], Vec3::new(9.0, 8.0, -3.0));
        assert_eq!(corners[2], Vec3::new(11.0, 12.0, -3.0));
        assert_eq!(corners[6], Vec3::new(11.0, 12.0, 3.0));
    }
}
