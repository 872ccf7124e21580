use super::FrameBuffer;
use minifb::Window;
use std::io;

/// Where finished frames go, and where the close request comes from.
pub trait Surface {
    /// True once the user has asked for the window to close.
    fn close_requested(&mut self) -> bool;
    fn present(&mut self, buffer: &FrameBuffer) -> io::Result<()>;
}

impl Surface for Window {
    fn close_requested(&mut self) -> bool {
        !self.is_open()
    }

    fn present(&mut self, buffer: &FrameBuffer) -> io::Result<()> {
        // The frame that observed the close still runs; there is nothing left to show it on.
        if !self.is_open() {
            return Ok(());
        }
        self.update_with_buffer(&buffer.data, buffer.width, buffer.height)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
    }
}
