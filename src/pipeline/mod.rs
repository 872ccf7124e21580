use crate::{
    core::{project, Color, RotationState, ScreenMapping, Shape},
    RenderConfig,
};
use log::{debug, trace};
use std::io;

mod buffer;
pub mod frame_loop;
pub mod rasterizer;
pub mod surface;

pub use buffer::FrameBuffer;
pub use frame_loop::{sleep_duration, FrameLoop, LoopState};
pub use surface::Surface;

/// Turns a shape plus the current rotation into pixels.
///
/// Per frame:
/// 1. Clear the buffer to the background color
/// 2. Rotate and project both endpoints of every edge
/// 3. Map them to window pixels and draw the edge in the foreground color
pub struct Pipeline {
    pub width: usize,
    pub height: usize,
    buffer: FrameBuffer,
    shape: Shape,
    mapping: ScreenMapping,
    background: Color,
    foreground: Color,
}

impl Pipeline {
    pub fn new(config: &RenderConfig) -> io::Result<Self> {
        let shape = config.shape.shape();
        shape.validate()?;
        debug!(
            "Pipeline for {} ({} verts, {} edges) at {}x{}",
            shape.name,
            shape.verts.len(),
            shape.edges.len(),
            config.width,
            config.height
        );
        Ok(Self {
            width: config.width,
            height: config.height,
            buffer: FrameBuffer::new(config.width, config.height),
            shape,
            mapping: ScreenMapping::centered(config.width, config.height, config.scale),
            background: config.background,
            foreground: config.foreground,
        })
    }

    pub fn render_frame(&mut self, rotation: &RotationState) {
        self.buffer.clear(self.background);

        for (start, end) in self.shape.edge_points() {
            let start = self.mapping.map(project(rotation.apply(start)));
            let end = self.mapping.map(project(rotation.apply(end)));
            trace!("edge {:?} -> {:?}", start, end);
            self.buffer.draw_line(start, end, self.foreground);
        }
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ShapeKind;

    fn lit_pixels(pipeline: &Pipeline) -> Vec<(usize, usize)> {
        let width = pipeline.width;
        pipeline
            .buffer()
            .data
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p == Color::WHITE.to_u32())
            .map(|(i, _)| (i % width, i / width))
            .collect()
    }

    #[test]
    fn unrotated_cube_draws_a_square() {
        let mut pipeline = Pipeline::new(&RenderConfig::default()).unwrap();
        pipeline.render_frame(&RotationState::default());

        let lit = lit_pixels(&pipeline);
        assert!(!lit.is_empty());
        // Front and back faces overlap exactly under orthographic projection.
        for &(x, y) in &lit {
            let on_vertical = (x == 380 || x == 580) && (170..=370).contains(&y);
            let on_horizontal = (y == 170 || y == 370) && (380..=580).contains(&x);
            assert!(on_vertical || on_horizontal, "stray pixel at ({x}, {y})");
        }
        for corner in [(380, 170), (580, 170), (380, 370), (580, 370)] {
            assert!(lit.contains(&corner));
        }
    }

    #[test]
    fn background_is_cleared_each_frame() {
        let mut pipeline = Pipeline::new(&RenderConfig::default()).unwrap();
        pipeline.render_frame(&RotationState::new(0.3, 0.2, 0.1));
        let first = lit_pixels(&pipeline);
        pipeline.render_frame(&RotationState::new(1.3, 2.2, 0.7));
        let second = lit_pixels(&pipeline);
        assert_ne!(first, second);
        assert_eq!(pipeline.buffer().pixel(0, 0), Some(Color::BLACK.to_u32()));
    }

    #[test]
    fn tetrahedron_stays_inside_footprint() {
        let config = RenderConfig {
            shape: ShapeKind::Tetrahedron,
            ..RenderConfig::default()
        };
        let mut pipeline = Pipeline::new(&config).unwrap();
        assert_eq!(pipeline.shape.name, "tetrahedron");
        pipeline.render_frame(&RotationState::new(1.2, 6.4, -20.1));

        let lit = lit_pixels(&pipeline);
        assert!(!lit.is_empty());
        // Rotated vertices stay within radius sqrt(3) of the center.
        let reach = (100.0 * 3.0_f32.sqrt()).ceil() as usize + 1;
        for (x, y) in lit {
            assert!(x.abs_diff(480) <= reach && y.abs_diff(270) <= reach);
        }
    }
}
