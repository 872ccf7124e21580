use super::{Pipeline, Surface};
use crate::{core::RotationState, Metrics, RenderConfig};
use log::{debug, info, trace};
use std::io;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// How long to sleep after a frame that took `elapsed`, in whole milliseconds.
///
/// Never negative: an overrun frame sleeps for zero.
pub fn sleep_duration(target: Duration, elapsed: Duration) -> Duration {
    let remaining = target.saturating_sub(elapsed);
    Duration::from_millis(remaining.as_millis() as u64)
}

/// Drives the pipeline once per frame until the surface asks to close
/// (or the configured frame limit is hit).
pub struct FrameLoop {
    pub state: LoopState,
    pub rotation: RotationState,
    delta: RotationState,
    target_frame: Duration,
    frame_limit: Option<u64>,
    frames: u64,
    metrics: Metrics,
}

impl FrameLoop {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            state: LoopState::Running,
            rotation: config.rotation,
            delta: config.rotation_delta,
            target_frame: config.target_frame,
            frame_limit: config.frame_limit,
            frames: 0,
            metrics: Metrics::with_target(config.target_frame),
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Runs until stopped and returns the final rotation. Timing stays in [`FrameLoop::metrics`].
    pub fn run<S: Surface>(
        &mut self,
        surface: &mut S,
        pipeline: &mut Pipeline,
    ) -> io::Result<RotationState> {
        info!(
            "Frame loop starting: rotation {:?}, delta {:?}, target {:?}",
            self.rotation, self.delta, self.target_frame
        );
        while self.state == LoopState::Running {
            self.step(surface, pipeline)?;
        }
        info!("Frame loop stopped after {} frames: {}", self.frames, self.metrics);
        Ok(self.rotation)
    }

    /// One iteration. A close request stops the loop, but only after this frame is drawn.
    pub fn step<S: Surface>(
        &mut self,
        surface: &mut S,
        pipeline: &mut Pipeline,
    ) -> io::Result<LoopState> {
        let start = Instant::now();

        if surface.close_requested() {
            debug!("Close requested on frame {}", self.frames);
            self.state = LoopState::Stopped;
        }

        pipeline.render_frame(&self.rotation);
        surface.present(pipeline.buffer())?;

        // Fixed per-frame step, not scaled by elapsed time.
        self.rotation = self.rotation.advanced(self.delta);
        self.frames += 1;

        if self.frame_limit.is_some_and(|limit| self.frames >= limit) {
            debug!("Frame limit reached ({})", self.frames);
            self.state = LoopState::Stopped;
        }

        let elapsed = start.elapsed();
        self.metrics.update(elapsed);
        trace!("frame {} took {:?}", self.frames, elapsed);
        if self.frames % 60 == 0 {
            debug!("{}", self.metrics);
        }

        let sleep = sleep_duration(self.target_frame, elapsed);
        if sleep.is_zero() {
            if elapsed > self.target_frame {
                debug!("Frame {} overran: {:?} > {:?}", self.frames, elapsed, self.target_frame);
            }
        } else {
            std::thread::sleep(sleep);
        }

        Ok(self.state)
    }
}
