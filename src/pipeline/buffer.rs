use crate::core::Color;
use glam::IVec2;
use rayon::iter::ParallelIterator;
use rayon::slice::ParallelSliceMut;

/// Packed `0x00RRGGBB` pixels, row-major, ready for `minifb::Window::update_with_buffer`.
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        FrameBuffer {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    pub fn clear(&mut self, color: Color) {
        let packed = color.to_u32();
        self.data.par_chunks_mut(1024).for_each(|chunk| {
            for point in chunk {
                *point = packed;
            }
        });
    }

    /// Writes one pixel; anything outside the buffer is dropped.
    pub fn set_pixel(&mut self, pos: IVec2, color: u32) {
        if pos.x < 0 || pos.y < 0 {
            return;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x < self.width && y < self.height {
            self.data[x + y * self.width] = color;
        }
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.data[x + y * self.width])
        } else {
            None
        }
    }

    pub fn draw_line(&mut self, start: IVec2, end: IVec2, color: Color) {
        let packed = color.to_u32();
        crate::pipeline::rasterizer::bresenham(start, end, |pos| {
            self.set_pixel(pos, packed);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_fills_every_pixel() {
        let mut buffer = FrameBuffer::new(40, 30);
        buffer.clear(Color::new(1.0, 0.0, 0.0));
        assert!(buffer.data.iter().all(|&p| p == 0xFF0000));
        assert_eq!(buffer.data.len(), 1200);
    }

    #[test]
    fn out_of_bounds_pixels_are_ignored() {
        let mut buffer = FrameBuffer::new(4, 4);
        buffer.set_pixel(IVec2::new(-1, 0), 1);
        buffer.set_pixel(IVec2::new(0, -1), 1);
        buffer.set_pixel(IVec2::new(4, 0), 1);
        buffer.set_pixel(IVec2::new(0, 4), 1);
        assert!(buffer.data.iter().all(|&p| p == 0));

        buffer.set_pixel(IVec2::new(3, 2), 7);
        assert_eq!(buffer.pixel(3, 2), Some(7));
        assert_eq!(buffer.pixel(4, 2), None);
    }

    #[test]
    fn draw_line_clips_to_buffer() {
        let mut buffer = FrameBuffer::new(10, 10);
        buffer.draw_line(IVec2::new(-5, 5), IVec2::new(15, 5), Color::WHITE);
        for x in 0..10 {
            assert_eq!(buffer.pixel(x, 5), Some(0xFFFFFF));
        }
        assert_eq!(buffer.data.iter().filter(|&&p| p != 0).count(), 10);
    }
}
