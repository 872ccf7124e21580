pub mod color;
pub mod geometry;
pub mod projection;
pub mod transform;

pub use color::Color;
pub use geometry::{Edge, Shape, ShapeKind};
pub use projection::{project, ScreenMapping};
pub use transform::{rotate, rotate_x, rotate_y, rotate_z, RotationState};
