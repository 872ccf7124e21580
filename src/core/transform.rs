use glam::Vec3;

/// Right-handed rotation about the X axis, `angle` in radians.
pub fn rotate_x(p: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(p.x, c * p.y - s * p.z, s * p.y + c * p.z)
}

/// Right-handed rotation about the Y axis, `angle` in radians.
pub fn rotate_y(p: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(c * p.x + s * p.z, p.y, -s * p.x + c * p.z)
}

/// Right-handed rotation about the Z axis, `angle` in radians.
pub fn rotate_z(p: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(c * p.x - s * p.y, s * p.x + c * p.y, p.z)
}

/// Euler rotation: X first, then Y, then Z. The order is not interchangeable.
pub fn rotate(p: Vec3, angle_x: f32, angle_y: f32, angle_z: f32) -> Vec3 {
    let p = rotate_x(p, angle_x);
    let p = rotate_y(p, angle_y);
    rotate_z(p, angle_z)
}

/// Rotation angles around the three axes (in radians).
///
/// Angles only ever accumulate; they are never wrapped back into [0, 2π).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns the state advanced by `delta`, leaving `self` untouched.
    #[must_use]
    pub fn advanced(self, delta: RotationState) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            z: self.z + delta.z,
        }
    }

    pub fn apply(&self, p: Vec3) -> Vec3 {
        rotate(p, self.x, self.y, self.z)
    }
}
