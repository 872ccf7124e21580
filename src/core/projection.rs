use glam::{IVec2, Vec2, Vec3};

/// Orthographic projection: drops depth, keeps x and y as they are.
///
/// Same as multiplying by `[[1, 0, 0], [0, 1, 0]]`. There is no perspective divide and no
/// near/far clipping.
pub fn project(p: Vec3) -> Vec2 {
    p.truncate()
}

/// Maps normalized projected coordinates onto window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMapping {
    /// Window center in pixels
    pub mid: Vec2,
    /// Pixels per normalized unit
    pub scale: f32,
}

impl ScreenMapping {
    pub fn new(mid_x: i32, mid_y: i32, scale: f32) -> Self {
        Self {
            mid: Vec2::new(mid_x as f32, mid_y as f32),
            scale,
        }
    }

    /// Centers the mapping on a `width` x `height` window (integer halves).
    pub fn centered(width: usize, height: usize, scale: f32) -> Self {
        Self::new((width / 2) as i32, (height / 2) as i32, scale)
    }

    /// `mid + scale * p`, truncated toward zero.
    pub fn map(&self, p: Vec2) -> IVec2 {
        let screen = self.mid + self.scale * p;
        IVec2::new(screen.x as i32, screen.y as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_ignores_depth() {
        let near = Vec3::new(0.3, -0.7, 1000.0);
        let far = Vec3::new(0.3, -0.7, -1000.0);
        assert_eq!(project(near), Vec2::new(0.3, -0.7));
        assert_eq!(project(near), project(far));
    }

    #[test]
    fn maps_reference_points() {
        let mapping = ScreenMapping::new(480, 270, 100.0);
        assert_eq!(mapping.map(Vec2::new(0.0, 0.0)), IVec2::new(480, 270));
        assert_eq!(mapping.map(Vec2::new(1.0, 1.0)), IVec2::new(580, 370));
        assert_eq!(mapping.map(Vec2::new(-1.0, -1.0)), IVec2::new(380, 170));
    }

    #[test]
    fn centered_uses_window_halves() {
        let mapping = ScreenMapping::centered(960, 540, 100.0);
        assert_eq!(mapping, ScreenMapping::new(480, 270, 100.0));
        assert_eq!(ScreenMapping::centered(5, 3, 1.0).mid, Vec2::new(2.0, 1.0));
    }

    #[test]
    fn mapping_truncates_toward_zero() {
        let mapping = ScreenMapping::new(0, 0, 1.0);
        assert_eq!(mapping.map(Vec2::new(2.9, 2.1)), IVec2::new(2, 2));
        assert_eq!(mapping.map(Vec2::new(-2.9, -2.1)), IVec2::new(-2, -2));

        let mapping = ScreenMapping::new(480, 270, 100.0);
        assert_eq!(mapping.map(Vec2::new(0.0055, -0.0055)), IVec2::new(480, 269));
    }
}
