use std::{
    collections::VecDeque,
    fmt::Display,
    io,
    path::PathBuf,
    time::Duration,
};

use clap::{Arg, ArgMatches, Command};
use log::LevelFilter;

pub mod core;
pub mod pipeline;

pub use crate::core::geometry;
pub use crate::core::Color;
pub use crate::core::RotationState;
pub use crate::core::ShapeKind;

/// Everything the window and frame loop need, fixed at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
    /// Side length in pixels of one normalized unit
    pub scale: f32,
    pub shape: ShapeKind,
    pub rotation: RotationState,
    pub rotation_delta: RotationState,
    pub target_frame: Duration,
    pub background: Color,
    pub foreground: Color,
    /// Stop after this many frames instead of waiting for the window to close
    pub frame_limit: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "3D Renderer".to_string(),
            width: 960,
            height: 540,
            scale: 100.0,
            shape: ShapeKind::Cube,
            rotation: RotationState::new(1.2, 6.4, -20.1),
            rotation_delta: RotationState::new(0.01, 0.05, 0.03),
            target_frame: Duration::from_micros(16_666), // ~60 FPS
            background: Color::BLACK,
            foreground: Color::WHITE,
            frame_limit: None,
        }
    }
}

pub struct Metrics {
    frame_count: u64,
    total: Duration,
    min: Duration,
    max: Duration,
    overruns: u64,
    target: Duration,
    /// Most recent frame times in ms, newest last
    pub frame_times: VecDeque<f32>,
}

const FRAME_HISTORY: usize = 120;

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self::with_target(RenderConfig::default().target_frame)
    }

    pub fn with_target(target: Duration) -> Self {
        Self {
            frame_count: 0,
            total: Duration::ZERO,
            min: Duration::MAX,
            max: Duration::ZERO,
            overruns: 0,
            target,
            frame_times: VecDeque::with_capacity(FRAME_HISTORY),
        }
    }

    pub fn update(&mut self, frame_delta: Duration) {
        self.frame_count += 1;
        self.total += frame_delta;
        self.min = self.min.min(frame_delta);
        self.max = self.max.max(frame_delta);
        if frame_delta > self.target {
            self.overruns += 1;
        }
        if self.frame_times.len() == FRAME_HISTORY {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(frame_delta.as_secs_f32() * 1000.0);
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn overruns(&self) -> u64 {
        self.overruns
    }

    /// Mean time spent working per frame, sleep excluded.
    pub fn average(&self) -> Duration {
        if self.frame_count == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.total.as_secs_f64() / self.frame_count as f64)
    }

    /// Frame rate the work alone could sustain.
    pub fn current_fps(&self) -> f32 {
        let recent: f32 = self.frame_times.iter().sum();
        if recent <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f32 * 1000.0 / recent
    }
}

impl Display for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let min = if self.frame_count == 0 {
            Duration::ZERO
        } else {
            self.min
        };
        write!(
            f,
            "Frames: {} | FPS: {:.2} | Avg: {:.2}ms | Min: {:.2}ms | Max: {:.2}ms | Overruns: {}",
            self.frame_count,
            self.current_fps(),
            self.average().as_secs_f32() * 1000.0,
            min.as_secs_f32() * 1000.0,
            self.max.as_secs_f32() * 1000.0,
            self.overruns
        )
    }
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub render: RenderConfig,
    pub log_level: LevelFilter,
    /// Log to this file instead of stderr
    pub log_file: Option<PathBuf>,
}

pub fn create_clap_command() -> Command {
    Command::new("wireframe_renderer")
        .about("Spinning wireframe shapes in a window (using minifb)")
        .version("0.1")
        .arg(
            Arg::new("shape")
                .short('s')
                .long("shape")
                .value_name("SHAPE")
                .help("Shape to draw ('cube', 'tetrahedron', 'c', or 't')")
                .required(false)
                .value_parser(["cube", "tetrahedron", "c", "t"]),
        )
        .arg(
            Arg::new("frames")
                .short('n')
                .long("frames")
                .value_name("N")
                .help("Exit after N frames instead of waiting for the window to close")
                .required(false)
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log verbosity")
                .required(false)
                .value_parser(["off", "error", "warn", "info", "debug", "trace"])
                .default_value("warn"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("FILE")
                .help("Write log output to FILE instead of stderr")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

pub fn handle_clap_matches(matches: &ArgMatches) -> io::Result<Options> {
    let shape = match matches.get_one::<String>("shape").map(|s| s.as_str()) {
        Some("tetrahedron" | "t") => ShapeKind::Tetrahedron,
        Some("cube" | "c") | None => ShapeKind::Cube,
        Some(other) => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid shape: {}", other),
            ))
        }
    };

    let log_level = matches
        .get_one::<String>("log-level")
        .map(|s| s.as_str())
        .unwrap_or("warn")
        .parse::<LevelFilter>()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let log_file = matches.get_one::<PathBuf>("log-file").cloned();

    Ok(Options {
        render: RenderConfig {
            shape,
            frame_limit: matches.get_one::<u64>("frames").copied(),
            ..RenderConfig::default()
        },
        log_level,
        log_file,
    })
}

/// One-line message for a fatal error, shown on stderr before exiting.
pub fn fatal_message(err: &io::Error) -> String {
    format!("wireframe_renderer: {}", err)
}
